//! Franchise entity model and DTO.

use backlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::store::{Record, SoftDeletable};

/// A franchise row from the `franchises` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Franchise {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    /// `None` while the franchise is active.
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating or replacing a franchise.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FranchiseInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(url)]
    pub image: Option<String>,
}

impl Record for Franchise {
    type Input = FranchiseInput;

    const ENTITY: &'static str = "Franchise";
    const UNIQUE_NAME: Option<&'static str> = Some("uq_franchises_name");

    fn id(&self) -> DbId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn build(id: DbId, input: &FranchiseInput, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            image: input.image.clone(),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, input: &FranchiseInput, now: Timestamp) {
        self.name = input.name.clone();
        self.description = input.description.clone();
        self.image = input.image.clone();
        self.updated_at = now;
    }
}

impl SoftDeletable for Franchise {
    fn deleted_at(&self) -> Option<Timestamp> {
        self.deleted_at
    }

    fn set_deleted_at(&mut self, at: Option<Timestamp>) {
        self.deleted_at = at;
    }
}
