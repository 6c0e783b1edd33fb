// crates/heritage-core/src/loader/mod.rs

//! # Data Loader
//!
//! Reads the record directory once and keeps the result for the life of the
//! process.
//!
//! There is no invalidation. A record file added or edited after the first
//! load is not seen until the process restarts.

use crate::config::resolve_sites_dir;
use crate::model::HeritageDb;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::info;

mod directory;
mod export;

pub use directory::{load_from_dir, read_site_file};
pub use export::CompressionMode;

// Process-wide store for the default directory.
static DEFAULT_STORE: OnceCell<SiteStore> = OnceCell::new();

/// A record directory plus its lazily loaded database.
///
/// [`SiteStore::get`] loads on first call and hands out the same
/// [`HeritageDb`] on every later call.
#[derive(Debug)]
pub struct SiteStore {
    dir: PathBuf,
    db: OnceCell<HeritageDb>,
}

impl SiteStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            db: OnceCell::new(),
        }
    }

    /// Store for the directory named by `HERITAGE_SITES_DIR`, else `./sites`.
    pub fn from_env() -> Self {
        Self::new(resolve_sites_dir(None))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The loaded database, reading the directory if this is the first call.
    pub fn get(&self) -> &HeritageDb {
        self.db.get_or_init(|| {
            let db = HeritageDb::load_from_dir(&self.dir);
            info!(
                dir = %self.dir.display(),
                sites = db.site_count(),
                "heritage dataset loaded"
            );
            db
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.db.get().is_some()
    }
}

impl HeritageDb {
    /// Load the process-wide database.
    ///
    /// - Resolves the directory from `HERITAGE_SITES_DIR`, else `./sites`.
    /// - Reads it on the first call only; later calls return the same value.
    pub fn load() -> &'static HeritageDb {
        DEFAULT_STORE.get_or_init(SiteStore::from_env).get()
    }

    /// Read `dir` into a fresh database, bypassing every cache.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Self {
        Self::from_dataset(load_from_dir(dir.as_ref()))
    }

    pub fn default_sites_dir() -> PathBuf {
        resolve_sites_dir(None)
    }
}
