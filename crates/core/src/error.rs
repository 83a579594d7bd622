/// Domain errors raised before a procedure reaches storage.
///
/// These are the "thrown" path: the HTTP layer turns them into 4xx responses
/// instead of wrapping them in a procedure result.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
