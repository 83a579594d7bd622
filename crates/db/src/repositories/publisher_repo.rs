//! Repository for the `publishers` table.

use async_trait::async_trait;
use backlog_core::storage::StorageError;
use backlog_core::types::DbId;
use sqlx::PgPool;

use crate::error::classify_sqlx_error;
use crate::models::publisher::{Publisher, PublisherInput};
use crate::store::{EntityStore, SoftDeleteStore};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, image, deleted_at, created_at, updated_at";

/// Same columns, qualified by the `prior` CTE alias.
const PRIOR_COLUMNS: &str = "prior.id, prior.name, prior.description, prior.image, \
     prior.deleted_at, prior.created_at, prior.updated_at";

/// Postgres storage client for publishers.
#[derive(Clone)]
pub struct PublisherRepo {
    pool: PgPool,
}

impl PublisherRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for PublisherRepo {
    type Entity = Publisher;
    type Input = PublisherInput;

    fn entity_name(&self) -> &'static str {
        "Publisher"
    }

    async fn create(&self, input: &PublisherInput) -> Result<Publisher, StorageError> {
        let query = format!(
            "INSERT INTO publishers (name, description, image)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Publisher>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_one(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    /// Find a publisher by id. Excludes soft-deleted rows.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Publisher>, StorageError> {
        let query =
            format!("SELECT {COLUMNS} FROM publishers WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Publisher>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    /// List active publishers, ordered by name ascending.
    async fn list(&self) -> Result<Vec<Publisher>, StorageError> {
        let query = format!(
            "SELECT {COLUMNS} FROM publishers
             WHERE deleted_at IS NULL
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Publisher>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn update(
        &self,
        id: DbId,
        input: &PublisherInput,
    ) -> Result<Option<Publisher>, StorageError> {
        let query = format!(
            "UPDATE publishers SET
                name = $2,
                description = $3,
                image = $4,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Publisher>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    /// Soft-delete an active publisher, returning the row as it was before.
    async fn delete(&self, id: DbId) -> Result<Option<Publisher>, StorageError> {
        let query = format!(
            "WITH prior AS (
                SELECT {COLUMNS} FROM publishers
                WHERE id = $1 AND deleted_at IS NULL
                FOR UPDATE
             )
             UPDATE publishers SET deleted_at = NOW()
             FROM prior
             WHERE publishers.id = prior.id
             RETURNING {PRIOR_COLUMNS}"
        );
        sqlx::query_as::<_, Publisher>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}

#[async_trait]
impl SoftDeleteStore for PublisherRepo {
    async fn find_deleted_by_id(&self, id: DbId) -> Result<Option<Publisher>, StorageError> {
        let query =
            format!("SELECT {COLUMNS} FROM publishers WHERE id = $1 AND deleted_at IS NOT NULL");
        sqlx::query_as::<_, Publisher>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn list_deleted(&self) -> Result<Vec<Publisher>, StorageError> {
        let query = format!(
            "SELECT {COLUMNS} FROM publishers
             WHERE deleted_at IS NOT NULL
             ORDER BY deleted_at DESC"
        );
        sqlx::query_as::<_, Publisher>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn soft_delete(&self, id: DbId) -> Result<Option<Publisher>, StorageError> {
        let query = format!(
            "UPDATE publishers SET deleted_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Publisher>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn restore(&self, id: DbId) -> Result<Option<Publisher>, StorageError> {
        let query = format!(
            "UPDATE publishers SET deleted_at = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Publisher>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}
