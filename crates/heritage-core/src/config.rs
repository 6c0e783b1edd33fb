// crates/heritage-core/src/config.rs

//! Source directory resolution.
//!
//! Resolved once when a store is built. Queries never look at the
//! environment.

use std::path::{Path, PathBuf};

/// Environment variable naming the record directory.
pub const SITES_DIR_ENV: &str = "HERITAGE_SITES_DIR";

/// Directory name used when nothing else is configured, relative to the
/// current working directory.
pub const DEFAULT_SITES_DIR: &str = "sites";

/// Extension a file must carry to be read as a record.
pub const RECORD_EXTENSION: &str = ".json";

/// Pick the record directory: explicit override, then `HERITAGE_SITES_DIR`,
/// then `./sites`.
pub fn resolve_sites_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    match std::env::var_os(SITES_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_SITES_DIR),
    }
}

/// `true` when `file_name` names a record file.
pub fn is_record_file_name(file_name: &str) -> bool {
    file_name.ends_with(RECORD_EXTENSION)
}
