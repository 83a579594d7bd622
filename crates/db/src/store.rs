//! Storage-client traits.
//!
//! Procedures only see these traits; the Postgres repositories and the
//! in-memory tables both implement them.

use async_trait::async_trait;
use backlog_core::storage::StorageError;
use backlog_core::types::{DbId, Timestamp};

/// Basic CRUD over one entity table.
///
/// For soft-deletable entities every method here only sees active rows
/// (`deleted_at IS NULL`), and `delete` marks rows instead of removing them.
#[async_trait]
pub trait EntityStore: Send + Sync {
    type Entity: Send + Sync;
    type Input: Send + Sync;

    /// Human-readable entity name, e.g. `"Franchise"`.
    fn entity_name(&self) -> &'static str;

    async fn create(&self, input: &Self::Input) -> Result<Self::Entity, StorageError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Self::Entity>, StorageError>;

    /// All visible rows, ordered by name.
    async fn list(&self) -> Result<Vec<Self::Entity>, StorageError>;

    /// Replace every mutable field. Returns `None` if no visible row matches.
    async fn update(
        &self,
        id: DbId,
        input: &Self::Input,
    ) -> Result<Option<Self::Entity>, StorageError>;

    /// Delete a visible row, returning it as it was before deletion.
    async fn delete(&self, id: DbId) -> Result<Option<Self::Entity>, StorageError>;
}

/// Explicit access to soft-deleted rows.
///
/// These paths never go through the active-only filter of [`EntityStore`]:
/// deleted-only reads require `deleted_at IS NOT NULL`, and `soft_delete`
/// matches on id alone.
#[async_trait]
pub trait SoftDeleteStore: EntityStore {
    async fn find_deleted_by_id(&self, id: DbId) -> Result<Option<Self::Entity>, StorageError>;

    /// All soft-deleted rows, most recently deleted first.
    async fn list_deleted(&self) -> Result<Vec<Self::Entity>, StorageError>;

    /// Set `deleted_at` to now, whether or not the row was already deleted.
    /// Returns the updated row, or `None` if the id does not exist.
    async fn soft_delete(&self, id: DbId) -> Result<Option<Self::Entity>, StorageError>;

    /// Clear `deleted_at` on a deleted row. Returns `None` if no deleted row
    /// matches.
    async fn restore(&self, id: DbId) -> Result<Option<Self::Entity>, StorageError>;
}

/// Row behaviour the in-memory tables need.
pub trait Record: Clone + Send + Sync + 'static {
    type Input: Send + Sync;

    const ENTITY: &'static str;
    /// Name of the unique constraint on `name`, if the table has one.
    const UNIQUE_NAME: Option<&'static str>;

    fn id(&self) -> DbId;
    fn name(&self) -> &str;

    /// Build a fresh row from input.
    fn build(id: DbId, input: &Self::Input, now: Timestamp) -> Self;

    /// Overwrite mutable fields from input.
    fn apply(&mut self, input: &Self::Input, now: Timestamp);
}

/// A [`Record`] carrying a deletion timestamp.
pub trait SoftDeletable: Record {
    fn deleted_at(&self) -> Option<Timestamp>;
    fn set_deleted_at(&mut self, at: Option<Timestamp>);

    fn is_active(&self) -> bool {
        self.deleted_at().is_none()
    }
}
