//! Best-effort message extraction for arbitrary raised values.
//!
//! Storage clients can fail with values of any shape. The normalizer needs a
//! human-readable message for every one of them, so everything here is total:
//! it always produces a `String` and never panics.

use std::error::Error as StdError;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

/// A value that surfaced from a failing call without a recognized shape.
///
/// Clones share the same allocation, so identity survives being passed
/// around (see [`Raised::same_as`]).
#[derive(Debug, Clone)]
pub enum Raised {
    /// Nothing accompanied the failure.
    Undefined,
    /// A typed Rust error. Its `Display` output is its message.
    Error(Arc<dyn StdError + Send + Sync>),
    /// Structured data of unknown shape.
    Value(Arc<Value>),
}

impl Raised {
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Raised::Error(Arc::new(err))
    }

    pub fn value(value: Value) -> Self {
        Raised::Value(Arc::new(value))
    }

    /// The best-effort message for this value.
    pub fn message(&self) -> String {
        match self {
            Raised::Undefined => String::new(),
            Raised::Error(err) => err.to_string(),
            Raised::Value(value) => json_message(value),
        }
    }

    /// `true` if both handles point at the same raised value.
    pub fn same_as(&self, other: &Raised) -> bool {
        match (self, other) {
            (Raised::Undefined, Raised::Undefined) => true,
            (Raised::Error(a), Raised::Error(b)) => Arc::ptr_eq(a, b),
            (Raised::Value(a), Raised::Value(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Extract a message from any serializable value.
///
/// - an object with a string `message` field yields that field;
/// - anything else yields its compact JSON text (`null` becomes `"null"`);
/// - if serialization fails, the generic `[object <Type>]` text is used.
pub fn error_message<T>(value: &T) -> String
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value) {
        Ok(json) => json_message(&json),
        Err(err) => {
            tracing::trace!(error = %err, "Raised value is not serializable");
            generic_object_text::<T>()
        }
    }
}

/// The string `message` field of a JSON object, if present.
fn message_field(value: &Value) -> Option<&str> {
    value.as_object()?.get("message")?.as_str()
}

fn json_message(value: &Value) -> String {
    match message_field(value) {
        Some(message) => message.to_string(),
        // Display on `Value` is compact JSON and cannot fail.
        None => value.to_string(),
    }
}

fn generic_object_text<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let short = base.rsplit("::").next().unwrap_or(base);
    format!("[object {short}]")
}
