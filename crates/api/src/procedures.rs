//! CRUD procedures shared by every entity router.
//!
//! Each procedure delegates to a storage client and folds the outcome into a
//! [`ProcedureResult`]: missing rows become `NotFound`, storage failures go
//! through [`normalize`]. Ids arrive as caller-supplied strings; one that is
//! not a valid id names no row, so it is `NotFound` too.
//!
//! Nothing here raises. Authorization has already happened in the handler's
//! extractors by the time these run.

use backlog_core::normalize::normalize;
use backlog_core::outcome::{ProcedureError, ProcedureResult};
use backlog_core::types::DbId;
use backlog_db::store::{EntityStore, SoftDeleteStore};

fn parse_id<S>(store: &S, id: &str) -> ProcedureResult<DbId>
where
    S: EntityStore + ?Sized,
{
    id.parse()
        .map_err(|_| ProcedureError::not_found(store.entity_name(), id))
}

pub async fn create<S>(store: &S, input: &S::Input) -> ProcedureResult<S::Entity>
where
    S: EntityStore + ?Sized,
{
    store.create(input).await.map_err(normalize)
}

pub async fn get_by_id<S>(store: &S, id: &str) -> ProcedureResult<S::Entity>
where
    S: EntityStore + ?Sized,
{
    let id = parse_id(store, id)?;
    store
        .find_by_id(id)
        .await
        .map_err(normalize)?
        .ok_or_else(|| ProcedureError::not_found(store.entity_name(), id))
}

/// An empty table is a success with an empty list.
pub async fn get_all<S>(store: &S) -> ProcedureResult<Vec<S::Entity>>
where
    S: EntityStore + ?Sized,
{
    store.list().await.map_err(normalize)
}

pub async fn update<S>(store: &S, id: &str, input: &S::Input) -> ProcedureResult<S::Entity>
where
    S: EntityStore + ?Sized,
{
    let id = parse_id(store, id)?;
    store
        .update(id, input)
        .await
        .map_err(normalize)?
        .ok_or_else(|| ProcedureError::not_found(store.entity_name(), id))
}

/// Returns the entity as it was immediately before deletion.
pub async fn delete<S>(store: &S, id: &str) -> ProcedureResult<S::Entity>
where
    S: EntityStore + ?Sized,
{
    let id = parse_id(store, id)?;
    store
        .delete(id)
        .await
        .map_err(normalize)?
        .ok_or_else(|| ProcedureError::not_found(store.entity_name(), id))
}

pub async fn get_deleted_by_id<S>(store: &S, id: &str) -> ProcedureResult<S::Entity>
where
    S: SoftDeleteStore + ?Sized,
{
    let id = parse_id(store, id)?;
    store
        .find_deleted_by_id(id)
        .await
        .map_err(normalize)?
        .ok_or_else(|| ProcedureError::not_found(store.entity_name(), id))
}

pub async fn get_all_deleted<S>(store: &S) -> ProcedureResult<Vec<S::Entity>>
where
    S: SoftDeleteStore + ?Sized,
{
    store.list_deleted().await.map_err(normalize)
}

pub async fn restore<S>(store: &S, id: &str) -> ProcedureResult<S::Entity>
where
    S: SoftDeleteStore + ?Sized,
{
    let id = parse_id(store, id)?;
    store
        .restore(id)
        .await
        .map_err(normalize)?
        .ok_or_else(|| ProcedureError::not_found(store.entity_name(), id))
}
