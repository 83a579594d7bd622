//! HTTP-level integration tests for publishers, developers, and playlists.
//!
//! Publishers share the franchise shape (public reads, soft delete).
//! Developers and playlists need a session to read and are deleted for good.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, create_as_admin, delete, delete_auth, get, get_auth, post,
    post_auth, post_json, post_json_auth, put_json, put_json_auth, user_token,
};
use serde_json::json;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Anonymous mutations
// ---------------------------------------------------------------------------

/// `(collection, supports restore)` for every router.
const COLLECTIONS: [(&str, bool); 4] = [
    ("/api/v1/franchises", true),
    ("/api/v1/publishers", true),
    ("/api/v1/developers", false),
    ("/api/v1/playlists", false),
];

async fn assert_unauthorized(response: axum::response::Response, what: &str) {
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{what}");
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED", "{what}");
}

#[tokio::test]
async fn test_anonymous_mutations_are_rejected_on_every_router() {
    let app = common::build_test_app();

    for (collection, restorable) in COLLECTIONS {
        let existing = create_as_admin(&app, collection, json!({"name": "Original"})).await;
        let id = existing["id"].as_str().unwrap();
        let item = format!("{collection}/{id}");

        let response = post_json(&app, collection, json!({"name": "Sneaky"})).await;
        assert_unauthorized(response, &format!("POST {collection}")).await;

        let response = put_json(&app, &item, json!({"name": "Renamed"})).await;
        assert_unauthorized(response, &format!("PUT {item}")).await;

        let response = delete(&app, &item).await;
        assert_unauthorized(response, &format!("DELETE {item}")).await;

        if restorable {
            // Put the row in the trash so a restore would have something to do.
            delete_auth(&app, &item, &admin_token()).await;
            let response = post(&app, &format!("{item}/restore")).await;
            assert_unauthorized(response, &format!("POST {item}/restore")).await;

            let trash_uri = format!("{collection}/trash/{id}");
            let json = body_json(get_auth(&app, &trash_uri, &admin_token()).await).await;
            let mut trashed = json["data"].clone();
            assert!(!trashed["deleted_at"].is_null(), "{collection}: row restored");
            trashed["deleted_at"] = serde_json::Value::Null;
            assert_eq!(trashed, existing, "{collection}: row changed");
        } else {
            let json = body_json(get_auth(&app, &item, &user_token()).await).await;
            assert_eq!(json["data"], existing, "{collection}: row changed");
        }

        let json = body_json(get_auth(&app, collection, &user_token()).await).await;
        let rows = if restorable { 0 } else { 1 };
        assert_eq!(
            json["data"].as_array().unwrap().len(),
            rows,
            "{collection}: row count changed"
        );
    }
}

// ---------------------------------------------------------------------------
// Publishers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_publisher_reads_are_public() {
    let app = common::build_test_app();
    let created = create_as_admin(&app, "/api/v1/publishers", json!({"name": "Nintendo"})).await;
    let id = created["id"].as_str().unwrap();

    let json = body_json(get(&app, &format!("/api/v1/publishers/{id}")).await).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["name"], "Nintendo");
    assert_eq!(json["data"]["description"], "");
}

#[tokio::test]
async fn test_publisher_soft_delete_and_restore() {
    let app = common::build_test_app();
    let created = create_as_admin(&app, "/api/v1/publishers", json!({"name": "Sega"})).await;
    let id = created["id"].as_str().unwrap();

    let json = body_json(
        delete_auth(&app, &format!("/api/v1/publishers/{id}"), &admin_token()).await,
    )
    .await;
    assert_eq!(json["data"], created);

    let json = body_json(get_auth(&app, "/api/v1/publishers/trash", &admin_token()).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let json = body_json(
        post_auth(&app, &format!("/api/v1/publishers/{id}/restore"), &admin_token()).await,
    )
    .await;
    assert_eq!(json["status"], "success");

    let json = body_json(get(&app, "/api/v1/publishers").await).await;
    assert_eq!(json["data"][0]["id"], created["id"]);
}

#[tokio::test]
async fn test_publisher_not_found_names_the_entity() {
    let app = common::build_test_app();
    let id = Uuid::new_v4();
    let json = body_json(get(&app, &format!("/api/v1/publishers/{id}")).await).await;
    assert_eq!(
        json["error"]["message"],
        format!("Publisher with id {id} not found")
    );
}

// ---------------------------------------------------------------------------
// Developers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_developer_reads_require_session() {
    let app = common::build_test_app();
    let response = get(&app, "/api/v1/developers").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let id = Uuid::new_v4();
    let response = get(&app, &format!("/api/v1/developers/{id}")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(get_auth(&app, "/api/v1/developers", &user_token()).await).await;
    assert_eq!(json, json!({"status": "success", "data": []}));
}

#[tokio::test]
async fn test_developer_create_as_user_returns_403() {
    let app = common::build_test_app();
    let response = post_json_auth(
        &app,
        "/api/v1/developers",
        json!({"name": "FromSoftware"}),
        &user_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_developer_delete_is_permanent() {
    let app = common::build_test_app();
    let created = create_as_admin(&app, "/api/v1/developers", json!({"name": "Remedy"})).await;
    let uri = format!("/api/v1/developers/{}", created["id"].as_str().unwrap());

    let json = body_json(delete_auth(&app, &uri, &admin_token()).await).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"], created);

    let json = body_json(get_auth(&app, &uri, &user_token()).await).await;
    assert_eq!(json["error"]["kind"], "NOT_FOUND");

    // With the row gone the name is free again.
    create_as_admin(&app, "/api/v1/developers", json!({"name": "Remedy"})).await;
}

#[tokio::test]
async fn test_developer_has_no_trash() {
    let app = common::build_test_app();
    let response = get_auth(&app, "/api/v1/developers/trash", &admin_token()).await;
    // `trash` is taken as an id, and no developer has it.
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "failure");
    assert_eq!(json["error"]["kind"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Playlists
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_playlist_visibility_defaults_to_private() {
    let app = common::build_test_app();
    let created = create_as_admin(&app, "/api/v1/playlists", json!({"name": "Backlog"})).await;
    assert_eq!(created["visibility"], "private");

    let uri = format!("/api/v1/playlists/{}", created["id"].as_str().unwrap());
    let json = body_json(
        put_json_auth(
            &app,
            &uri,
            json!({"name": "Backlog", "visibility": "friends"}),
            &admin_token(),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["visibility"], "friends");
}

#[tokio::test]
async fn test_playlist_names_need_not_be_unique() {
    let app = common::build_test_app();
    create_as_admin(&app, "/api/v1/playlists", json!({"name": "Favourites"})).await;
    create_as_admin(&app, "/api/v1/playlists", json!({"name": "Favourites"})).await;

    let json = body_json(get_auth(&app, "/api/v1/playlists", &user_token()).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_playlist_reads_require_session() {
    let app = common::build_test_app();
    let response = get(&app, "/api/v1/playlists").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
