// crates/heritage-core/src/prelude.rs
pub use crate::common::{AudienceCount, CategoryCount, DatasetInsights, TagCount};
pub use crate::error::{HeritageError, Result};
pub use crate::loader::SiteStore;
pub use crate::model::{Dataset, DatasetMetadata, FlatRow, HeritageDb, Site};
pub use crate::rank::site_score;
pub use crate::search::{SeasonalAccess, SiteFilter};
pub use crate::sitemap::{sitemap_entries, SitemapEntry};
pub use crate::text::{format_label, slugify};
pub use crate::traits::{HeritageSearch, NameMatch};
