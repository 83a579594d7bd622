//! Entity rows and input DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` input DTO, used for both create and update
//!   (updates replace the full field set)
//! - The [`Record`](crate::store::Record) impl the in-memory store relies on

pub mod developer;
pub mod franchise;
pub mod playlist;
pub mod publisher;
