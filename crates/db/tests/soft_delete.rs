//! Integration tests for soft-delete, restore, and hard-delete behaviour.
//!
//! Each scenario is written once against the storage-client traits and run
//! against:
//! - the in-memory backend (always)
//! - the Postgres repositories (ignored by default; needs `DATABASE_URL`)
//!
//! Covered:
//! - Default reads and updates never see soft-deleted rows
//! - Deleted-only reads never see active rows
//! - `delete` returns the row as it was before deletion
//! - `soft_delete` twice moves the timestamp forward without error
//! - Restore makes a row visible again
//! - Hard-deleting entities remove the row entirely

use std::time::Duration;

use backlog_db::models::developer::DeveloperInput;
use backlog_db::models::franchise::FranchiseInput;
use backlog_db::models::publisher::PublisherInput;
use backlog_db::storage::{DeveloperStore, FranchiseStore, PublisherStore, Storage};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_franchise(name: &str) -> FranchiseInput {
    FranchiseInput {
        name: name.to_string(),
        description: "soft delete test".to_string(),
        image: Some("https://example.com/cover.png".to_string()),
    }
}

fn new_publisher(name: &str) -> PublisherInput {
    PublisherInput {
        name: name.to_string(),
        description: String::new(),
        image: None,
    }
}

fn new_developer(name: &str) -> DeveloperInput {
    DeveloperInput {
        name: name.to_string(),
        description: String::new(),
        image: None,
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

async fn delete_hides_from_default_reads(store: &FranchiseStore) {
    let row = store.create(&new_franchise("Hidden")).await.unwrap();

    let before = store.list().await.unwrap();
    assert!(before.iter().any(|f| f.id == row.id));

    let deleted = store.delete(row.id).await.unwrap().expect("row exists");
    assert_eq!(deleted, row, "delete returns the pre-deletion row");
    assert!(deleted.deleted_at.is_none());

    assert!(store.find_by_id(row.id).await.unwrap().is_none());
    let after = store.list().await.unwrap();
    assert!(!after.iter().any(|f| f.id == row.id));

    let update = store
        .update(row.id, &new_franchise("Renamed"))
        .await
        .unwrap();
    assert!(update.is_none(), "update must not reach deleted rows");

    assert!(
        store.delete(row.id).await.unwrap().is_none(),
        "second delete sees no active row"
    );
}

async fn deleted_reads_only_see_deleted_rows(store: &FranchiseStore) {
    let active = store.create(&new_franchise("Active")).await.unwrap();
    let gone = store.create(&new_franchise("Gone")).await.unwrap();
    store.delete(gone.id).await.unwrap();

    assert!(store.find_deleted_by_id(active.id).await.unwrap().is_none());
    let found = store
        .find_deleted_by_id(gone.id)
        .await
        .unwrap()
        .expect("deleted row is visible through the deleted-only path");
    assert!(found.deleted_at.is_some());

    let trash = store.list_deleted().await.unwrap();
    assert_eq!(trash.len(), 1);
    assert_eq!(trash[0].id, gone.id);
}

async fn soft_delete_twice_moves_timestamp(store: &PublisherStore) {
    let row = store.create(&new_publisher("Twice")).await.unwrap();

    let first = store.soft_delete(row.id).await.unwrap().unwrap();
    let first_at = first.deleted_at.expect("first call sets deleted_at");

    tokio::time::sleep(Duration::from_millis(5)).await;

    let second = store.soft_delete(row.id).await.unwrap().unwrap();
    let second_at = second.deleted_at.expect("second call keeps deleted_at set");
    assert!(second_at > first_at, "second call's time wins");

    assert!(store.find_by_id(row.id).await.unwrap().is_none());
    let stored = store.find_deleted_by_id(row.id).await.unwrap().unwrap();
    assert_eq!(stored.deleted_at, Some(second_at));
}

async fn soft_delete_unknown_id_is_none(store: &PublisherStore) {
    let missing = uuid::Uuid::new_v4();
    assert!(store.soft_delete(missing).await.unwrap().is_none());
    assert!(store.restore(missing).await.unwrap().is_none());
}

async fn restore_makes_visible_again(store: &FranchiseStore) {
    let row = store.create(&new_franchise("Restore Me")).await.unwrap();
    store.delete(row.id).await.unwrap();

    let restored = store.restore(row.id).await.unwrap().expect("restorable");
    assert!(restored.deleted_at.is_none());

    let found = store.find_by_id(row.id).await.unwrap();
    assert!(found.is_some(), "restored row is visible again");
    assert!(store.find_deleted_by_id(row.id).await.unwrap().is_none());
}

async fn hard_delete_removes_row(store: &DeveloperStore) {
    let row = store.create(&new_developer("Gone For Good")).await.unwrap();

    let deleted = store.delete(row.id).await.unwrap().expect("row exists");
    assert_eq!(deleted, row);

    assert!(store.find_by_id(row.id).await.unwrap().is_none());
    assert!(store.delete(row.id).await.unwrap().is_none());

    // The name is free again once the row is gone.
    store.create(&new_developer("Gone For Good")).await.unwrap();
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn memory_delete_hides_from_default_reads() {
    let storage = Storage::in_memory();
    delete_hides_from_default_reads(storage.franchises.as_ref()).await;
}

#[tokio::test]
async fn memory_deleted_reads_only_see_deleted_rows() {
    let storage = Storage::in_memory();
    deleted_reads_only_see_deleted_rows(storage.franchises.as_ref()).await;
}

#[tokio::test]
async fn memory_soft_delete_twice_moves_timestamp() {
    let storage = Storage::in_memory();
    soft_delete_twice_moves_timestamp(storage.publishers.as_ref()).await;
}

#[tokio::test]
async fn memory_soft_delete_unknown_id_is_none() {
    let storage = Storage::in_memory();
    soft_delete_unknown_id_is_none(storage.publishers.as_ref()).await;
}

#[tokio::test]
async fn memory_restore_makes_visible_again() {
    let storage = Storage::in_memory();
    restore_makes_visible_again(storage.franchises.as_ref()).await;
}

#[tokio::test]
async fn memory_hard_delete_removes_row() {
    let storage = Storage::in_memory();
    hard_delete_removes_row(storage.developers.as_ref()).await;
}

// ---------------------------------------------------------------------------
// Postgres backend
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn pg_delete_hides_from_default_reads(pool: PgPool) {
    let storage = Storage::postgres(pool);
    delete_hides_from_default_reads(storage.franchises.as_ref()).await;
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn pg_deleted_reads_only_see_deleted_rows(pool: PgPool) {
    let storage = Storage::postgres(pool);
    deleted_reads_only_see_deleted_rows(storage.franchises.as_ref()).await;
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn pg_soft_delete_twice_moves_timestamp(pool: PgPool) {
    let storage = Storage::postgres(pool);
    soft_delete_twice_moves_timestamp(storage.publishers.as_ref()).await;
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn pg_soft_delete_unknown_id_is_none(pool: PgPool) {
    let storage = Storage::postgres(pool);
    soft_delete_unknown_id_is_none(storage.publishers.as_ref()).await;
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn pg_restore_makes_visible_again(pool: PgPool) {
    let storage = Storage::postgres(pool);
    restore_makes_visible_again(storage.franchises.as_ref()).await;
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn pg_hard_delete_removes_row(pool: PgPool) {
    let storage = Storage::postgres(pool);
    hard_delete_removes_row(storage.developers.as_ref()).await;
}
