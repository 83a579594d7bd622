//! Session tokens.
//!
//! - [`jwt`] -- HS256 access-token generation and validation.
//!
//! Tokens are minted by the identity provider in front of this service; the
//! generator here exists for operators and tests.

pub mod jwt;
