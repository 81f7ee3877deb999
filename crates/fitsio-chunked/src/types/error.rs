//! Error taxonomy for chunked iteration.

use thiserror::Error;

/// Boxed error raised by a handle's range read.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while sizing or iterating chunks.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// Caller supplied an unusable argument combination.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Handle reported an element type code outside the byte-size table.
    #[error("unsupported element type code: {0}")]
    UnsupportedType(i32),

    /// No handle is registered under the requested name.
    #[error("no handle named '{0}'")]
    MissingHandle(String),

    /// Configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem failure while loading configuration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure raised by the underlying handle, passed through untouched.
    #[error(transparent)]
    Read(BoxError),
}

impl ChunkError {
    /// Message used when neither a chunk size nor a memory budget is given.
    pub const MISSING_SIZE: &'static str =
        "You must supply either chunksize or memory_limit_mb arguments";

    /// Whether this error originated inside the handle rather than here.
    pub fn is_read_error(&self) -> bool {
        matches!(self, ChunkError::Read(_))
    }
}

/// Result alias used across the crate.
pub type ChunkResult<T> = std::result::Result<T, ChunkError>;
