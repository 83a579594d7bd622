//! Domain logic for the backlog catalog service.
//!
//! Nothing in this crate performs I/O. The storage and HTTP crates build on
//! the types defined here.

pub mod error;
pub mod message;
pub mod normalize;
pub mod outcome;
pub mod roles;
pub mod session;
pub mod storage;
pub mod types;
