// crates/heritage-core/src/lib.rs

//! # heritage-core
//!
//! In-memory directory of Irish heritage sites.
//!
//! The crate reads a flat directory of per-site JSON records once, keeps the
//! result for the life of the process, and answers listing queries over it:
//! lookup by id, featured/preview ranking, tag, audience, category and region
//! aggregation, slug filters and free-text search.
//!
//! ```no_run
//! use heritage_core::prelude::*;
//!
//! let db = HeritageDb::load();
//! println!("{} sites, updated {}", db.metadata().total_sites, db.metadata().last_updated);
//!
//! for site in db.filter_sites(&SiteFilter::new().region("Kerry").tag("coastal")) {
//!     println!("{} ({})", site.name(), site.location_label());
//! }
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod rank;
pub mod search;
pub mod sitemap;
pub mod text;
pub mod traits;

pub mod prelude;

// Re-exports
pub use crate::common::{AudienceCount, CategoryCount, DatasetInsights, TagCount};
pub use crate::error::{HeritageError, Result};
pub use crate::loader::SiteStore;
pub use crate::model::{Dataset, DatasetMetadata, HeritageDb, Site};
pub use crate::rank::site_score;
pub use crate::search::{SeasonalAccess, SiteFilter};
pub use crate::sitemap::{sitemap_entries, SitemapEntry};
pub use crate::text::{format_label, slugify};
pub use crate::traits::HeritageSearch;
