//! Playlist entity model and DTO.

use backlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::store::Record;

/// Who can see a playlist. Maps to the `playlist_visibility` Postgres enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "playlist_visibility", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Friends,
    #[default]
    Private,
}

/// A playlist row from the `playlists` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Playlist {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating or replacing a playlist.
///
/// Playlist names are not unique.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlaylistInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    /// Defaults to `private` if omitted.
    #[serde(default)]
    pub visibility: Visibility,
}

impl Record for Playlist {
    type Input = PlaylistInput;

    const ENTITY: &'static str = "Playlist";
    const UNIQUE_NAME: Option<&'static str> = None;

    fn id(&self) -> DbId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn build(id: DbId, input: &PlaylistInput, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            visibility: input.visibility,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, input: &PlaylistInput, now: Timestamp) {
        self.name = input.name.clone();
        self.description = input.description.clone();
        self.visibility = input.visibility;
        self.updated_at = now;
    }
}
