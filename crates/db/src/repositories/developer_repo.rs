//! Repository for the `developers` table.

use async_trait::async_trait;
use backlog_core::storage::StorageError;
use backlog_core::types::DbId;
use sqlx::PgPool;

use crate::error::classify_sqlx_error;
use crate::models::developer::{Developer, DeveloperInput};
use crate::store::EntityStore;

const COLUMNS: &str = "id, name, description, image, created_at, updated_at";

/// Postgres storage client for developers. Deletes are permanent.
#[derive(Clone)]
pub struct DeveloperRepo {
    pool: PgPool,
}

impl DeveloperRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for DeveloperRepo {
    type Entity = Developer;
    type Input = DeveloperInput;

    fn entity_name(&self) -> &'static str {
        "Developer"
    }

    async fn create(&self, input: &DeveloperInput) -> Result<Developer, StorageError> {
        let query = format!(
            "INSERT INTO developers (name, description, image)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Developer>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_one(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Developer>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM developers WHERE id = $1");
        sqlx::query_as::<_, Developer>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn list(&self) -> Result<Vec<Developer>, StorageError> {
        let query = format!("SELECT {COLUMNS} FROM developers ORDER BY name ASC");
        sqlx::query_as::<_, Developer>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn update(
        &self,
        id: DbId,
        input: &DeveloperInput,
    ) -> Result<Option<Developer>, StorageError> {
        let query = format!(
            "UPDATE developers SET
                name = $2,
                description = $3,
                image = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Developer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn delete(&self, id: DbId) -> Result<Option<Developer>, StorageError> {
        let query = format!("DELETE FROM developers WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Developer>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}
