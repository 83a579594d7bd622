//! The storage client handed to the procedure layer.
//!
//! Built once at startup and shared behind an `Arc` for the life of the
//! process.

use backlog_core::storage::StorageError;

use crate::error::classify_sqlx_error;
use crate::memory::{MemoryStore, SoftDeleteMemoryStore};
use crate::models::developer::{Developer, DeveloperInput};
use crate::models::franchise::{Franchise, FranchiseInput};
use crate::models::playlist::{Playlist, PlaylistInput};
use crate::models::publisher::{Publisher, PublisherInput};
use crate::repositories::{DeveloperRepo, FranchiseRepo, PlaylistRepo, PublisherRepo};
use crate::store::{EntityStore, SoftDeleteStore};
use crate::DbPool;

pub type FranchiseStore = dyn SoftDeleteStore<Entity = Franchise, Input = FranchiseInput>;
pub type PublisherStore = dyn SoftDeleteStore<Entity = Publisher, Input = PublisherInput>;
pub type DeveloperStore = dyn EntityStore<Entity = Developer, Input = DeveloperInput>;
pub type PlaylistStore = dyn EntityStore<Entity = Playlist, Input = PlaylistInput>;

enum Backend {
    Postgres(DbPool),
    Memory,
}

/// One storage client per entity, all on the same backend.
pub struct Storage {
    pub franchises: Box<FranchiseStore>,
    pub publishers: Box<PublisherStore>,
    pub developers: Box<DeveloperStore>,
    pub playlists: Box<PlaylistStore>,
    backend: Backend,
}

impl Storage {
    /// Clients backed by Postgres tables.
    pub fn postgres(pool: DbPool) -> Self {
        tracing::debug!(backend = "postgres", "Building storage clients");
        Self {
            franchises: Box::new(FranchiseRepo::new(pool.clone())),
            publishers: Box::new(PublisherRepo::new(pool.clone())),
            developers: Box::new(DeveloperRepo::new(pool.clone())),
            playlists: Box::new(PlaylistRepo::new(pool.clone())),
            backend: Backend::Postgres(pool),
        }
    }

    /// Empty in-process tables. Contents are lost when the process exits.
    pub fn in_memory() -> Self {
        tracing::debug!(backend = "memory", "Building storage clients");
        Self {
            franchises: Box::new(SoftDeleteMemoryStore::<Franchise>::new()),
            publishers: Box::new(SoftDeleteMemoryStore::<Publisher>::new()),
            developers: Box::new(MemoryStore::<Developer>::new()),
            playlists: Box::new(MemoryStore::<Playlist>::new()),
            backend: Backend::Memory,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Postgres(_) => "postgres",
            Backend::Memory => "memory",
        }
    }

    /// Confirm the backend is reachable. Always succeeds in memory.
    pub async fn health_check(&self) -> Result<(), StorageError> {
        match &self.backend {
            Backend::Postgres(pool) => crate::health_check(pool)
                .await
                .map_err(classify_sqlx_error),
            Backend::Memory => Ok(()),
        }
    }
}
