//! Repository layer.
//!
//! Each repository owns a clone of the `PgPool` and implements the
//! [`EntityStore`](crate::store::EntityStore) traits with hand-written SQL.

pub mod developer_repo;
pub mod franchise_repo;
pub mod playlist_repo;
pub mod publisher_repo;

pub use developer_repo::DeveloperRepo;
pub use franchise_repo::FranchiseRepo;
pub use playlist_repo::PlaylistRepo;
pub use publisher_repo::PublisherRepo;
