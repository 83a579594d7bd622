//! Authentication and authorization extractors.
//!
//! - [`auth::MaybeSession`] -- Reads an optional session from a JWT Bearer token.
//! - [`rbac::RequireAuth`] -- Requires any authenticated caller.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
pub mod rbac;
