// crates/heritage-core/src/error.rs
use thiserror::Error;

/// Errors raised while reading record files or writing an export.
///
/// The loader never surfaces these to callers of [`crate::HeritageDb::load`];
/// a failing record file is logged and skipped. They are visible from the
/// lower-level helpers such as [`crate::loader::read_site_file`].
#[derive(Debug, Error)]
pub enum HeritageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, HeritageError>;
