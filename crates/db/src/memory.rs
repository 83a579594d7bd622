//! In-process storage clients.
//!
//! Used when the server runs with `STORAGE_BACKEND=memory` and by the HTTP
//! tests. Behaviour matches the Postgres repositories: rows are ordered by
//! name, unique names are enforced across active and deleted rows, and
//! unique violations surface as [`StorageError::KnownRequest`].

use std::collections::HashMap;

use async_trait::async_trait;
use backlog_core::storage::StorageError;
use backlog_core::types::DbId;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{EntityStore, Record, SoftDeletable, SoftDeleteStore};

/// A table of rows keyed by id.
struct Table<R> {
    rows: RwLock<HashMap<DbId, R>>,
}

impl<R: Record> Table<R> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    async fn insert(&self, input: &R::Input) -> Result<R, StorageError> {
        let mut rows = self.rows.write().await;
        let row = R::build(Uuid::new_v4(), input, Utc::now());
        check_unique(&rows, &row)?;
        rows.insert(row.id(), row.clone());
        Ok(row)
    }

    async fn find(&self, id: DbId, visible: impl Fn(&R) -> bool) -> Option<R> {
        self.rows.read().await.get(&id).filter(|&r| visible(r)).cloned()
    }

    async fn select(&self, visible: impl Fn(&R) -> bool) -> Vec<R> {
        let mut rows: Vec<R> = self
            .rows
            .read()
            .await
            .values()
            .filter(|&r| visible(r))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name().cmp(b.name()));
        rows
    }

    async fn replace(
        &self,
        id: DbId,
        input: &R::Input,
        visible: impl Fn(&R) -> bool,
    ) -> Result<Option<R>, StorageError> {
        let mut rows = self.rows.write().await;
        let Some(mut candidate) = rows.get(&id).filter(|&r| visible(r)).cloned() else {
            return Ok(None);
        };
        candidate.apply(input, Utc::now());
        check_unique(&rows, &candidate)?;
        rows.insert(id, candidate.clone());
        Ok(Some(candidate))
    }

    /// Mutate a matching row in place, returning `(before, after)`.
    async fn modify(
        &self,
        id: DbId,
        visible: impl Fn(&R) -> bool,
        change: impl FnOnce(&mut R),
    ) -> Option<(R, R)> {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(&id).filter(|r| visible(&**r))?;
        let before = row.clone();
        change(&mut *row);
        Some((before, row.clone()))
    }

    async fn remove(&self, id: DbId) -> Option<R> {
        self.rows.write().await.remove(&id)
    }
}

fn check_unique<R: Record>(rows: &HashMap<DbId, R>, candidate: &R) -> Result<(), StorageError> {
    let Some(constraint) = R::UNIQUE_NAME else {
        return Ok(());
    };
    let taken = rows
        .values()
        .any(|r| r.id() != candidate.id() && r.name() == candidate.name());
    if taken {
        return Err(StorageError::unique_violation(constraint));
    }
    Ok(())
}

fn any<R>(_: &R) -> bool {
    true
}

/// In-memory client for entities that are deleted permanently.
pub struct MemoryStore<R> {
    table: Table<R>,
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> EntityStore for MemoryStore<R> {
    type Entity = R;
    type Input = R::Input;

    fn entity_name(&self) -> &'static str {
        R::ENTITY
    }

    async fn create(&self, input: &R::Input) -> Result<R, StorageError> {
        self.table.insert(input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<R>, StorageError> {
        Ok(self.table.find(id, any).await)
    }

    async fn list(&self) -> Result<Vec<R>, StorageError> {
        Ok(self.table.select(any).await)
    }

    async fn update(&self, id: DbId, input: &R::Input) -> Result<Option<R>, StorageError> {
        self.table.replace(id, input, any).await
    }

    async fn delete(&self, id: DbId) -> Result<Option<R>, StorageError> {
        Ok(self.table.remove(id).await)
    }
}

/// In-memory client for soft-deletable entities.
pub struct SoftDeleteMemoryStore<R> {
    table: Table<R>,
}

impl<R: SoftDeletable> SoftDeleteMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl<R: SoftDeletable> Default for SoftDeleteMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn active<R: SoftDeletable>(row: &R) -> bool {
    row.is_active()
}

fn deleted<R: SoftDeletable>(row: &R) -> bool {
    !row.is_active()
}

#[async_trait]
impl<R: SoftDeletable> EntityStore for SoftDeleteMemoryStore<R> {
    type Entity = R;
    type Input = R::Input;

    fn entity_name(&self) -> &'static str {
        R::ENTITY
    }

    async fn create(&self, input: &R::Input) -> Result<R, StorageError> {
        self.table.insert(input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<R>, StorageError> {
        Ok(self.table.find(id, active).await)
    }

    async fn list(&self) -> Result<Vec<R>, StorageError> {
        Ok(self.table.select(active).await)
    }

    async fn update(&self, id: DbId, input: &R::Input) -> Result<Option<R>, StorageError> {
        self.table.replace(id, input, active).await
    }

    async fn delete(&self, id: DbId) -> Result<Option<R>, StorageError> {
        let now = Utc::now();
        let changed = self
            .table
            .modify(id, active, |row| row.set_deleted_at(Some(now)))
            .await;
        Ok(changed.map(|(before, _)| before))
    }
}

#[async_trait]
impl<R: SoftDeletable> SoftDeleteStore for SoftDeleteMemoryStore<R> {
    async fn find_deleted_by_id(&self, id: DbId) -> Result<Option<R>, StorageError> {
        Ok(self.table.find(id, deleted).await)
    }

    async fn list_deleted(&self) -> Result<Vec<R>, StorageError> {
        let mut rows = self.table.select(deleted).await;
        rows.sort_by(|a, b| b.deleted_at().cmp(&a.deleted_at()));
        Ok(rows)
    }

    async fn soft_delete(&self, id: DbId) -> Result<Option<R>, StorageError> {
        let now = Utc::now();
        let changed = self
            .table
            .modify(id, any, |row| row.set_deleted_at(Some(now)))
            .await;
        Ok(changed.map(|(_, after)| after))
    }

    async fn restore(&self, id: DbId) -> Result<Option<R>, StorageError> {
        let changed = self
            .table
            .modify(id, deleted, |row| row.set_deleted_at(None))
            .await;
        Ok(changed.map(|(_, after)| after))
    }
}
