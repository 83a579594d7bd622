//! Repository for the `playlists` table.

use async_trait::async_trait;
use backlog_core::storage::StorageError;
use backlog_core::types::DbId;
use sqlx::PgPool;

use crate::error::classify_sqlx_error;
use crate::models::playlist::{Playlist, PlaylistInput};
use crate::store::EntityStore;

const COLUMNS: &str = "id, name, description, visibility, created_at, updated_at";

/// Postgres storage client for playlists. Deletes are permanent.
#[derive(Clone)]
pub struct PlaylistRepo {
    pool: PgPool,
}

impl PlaylistRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for PlaylistRepo {
    type Entity = Playlist;
    type Input = PlaylistInput;

    fn entity_name(&self) -> &'static str {
        "Playlist"
    }

    async fn create(&self, input: &PlaylistInput) -> Result<Playlist, StorageError> {
        let query = format!(
            "INSERT INTO playlists (name, description, visibility)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.visibility)
            .fetch_one(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Playlist>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    /// List playlists by name, oldest first among equal names.
    async fn list(&self) -> Result<Vec<Playlist>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM playlists ORDER BY name ASC, created_at ASC");
        sqlx::query_as::<_, Playlist>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn update(
        &self,
        id: DbId,
        input: &PlaylistInput,
    ) -> Result<Option<Playlist>, StorageError> {
        let query = format!(
            "UPDATE playlists SET
                name = $2,
                description = $3,
                visibility = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.visibility)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn delete(&self, id: DbId) -> Result<Option<Playlist>, StorageError> {
        let query = format!("DELETE FROM playlists WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}
