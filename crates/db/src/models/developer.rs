//! Developer entity model and DTO.

use backlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::store::Record;

/// A developer row from the `developers` table. Deletes are permanent.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Developer {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating or replacing a developer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeveloperInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(url)]
    pub image: Option<String>,
}

impl Record for Developer {
    type Input = DeveloperInput;

    const ENTITY: &'static str = "Developer";
    const UNIQUE_NAME: Option<&'static str> = Some("uq_developers_name");

    fn id(&self) -> DbId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn build(id: DbId, input: &DeveloperInput, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            image: input.image.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, input: &DeveloperInput, now: Timestamp) {
        self.name = input.name.clone();
        self.description = input.description.clone();
        self.image = input.image.clone();
        self.updated_at = now;
    }
}
