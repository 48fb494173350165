use thiserror::Error;

/// Errors that can occur while rewriting statement text.
///
/// Contract violations between generators and the engine (a `generate` call
/// without `should_generate`, overlapping token spans) are programming
/// errors and panic instead of surfacing here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// A token addresses text beyond the original statement. The statement
    /// context and the SQL text it was parsed from do not match.
    #[error("Token at byte {position} is out of bounds for statement of {length} bytes")]
    TokenOutOfBounds { position: usize, length: usize },
}

/// Result type for rewrite operations.
pub type Result<T> = std::result::Result<T, RewriteError>;
