use thiserror::Error;

/// Errors surfaced by registry-center implementations.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Registry connection error: {0}")]
    Connection(String),

    #[error("Registry write failed for key '{key}': {message}")]
    WriteFailed { key: String, message: String },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
