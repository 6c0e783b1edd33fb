// crates/heritage-core/src/sitemap.rs

//! Sitemap entries.
//!
//! Lists every page address a site built on this dataset exposes: the fixed
//! index pages, one page per record, and one page per tag and audience. Only
//! the data is produced here; turning it into XML is up to the caller.

use crate::traits::HeritageSearch;
use chrono::NaiveDate;
use serde::Serialize;

/// Fixed index pages, relative to the base URL.
pub const INDEX_PATHS: [&str; 4] = ["/", "/sites", "/tags", "/audiences"];

/// Single URL entry in the sitemap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    /// Full URL location
    pub loc: String,
    /// Last modification date
    pub lastmod: NaiveDate,
}

/// Every page address, in order: index pages, sites, tags, audiences.
///
/// All entries carry the dataset's last-updated date. Tag and audience paths
/// use the same slugs the query layer matches on.
pub fn sitemap_entries<D: HeritageSearch + ?Sized>(db: &D, base_url: &str) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let lastmod = db.metadata().last_updated;
    let entry = |path: String| SitemapEntry {
        loc: format!("{base}{path}"),
        lastmod,
    };

    let mut entries: Vec<SitemapEntry> =
        INDEX_PATHS.iter().map(|p| entry((*p).to_owned())).collect();
    entries.extend(db.sites().iter().map(|s| entry(format!("/sites/{}", s.id))));
    entries.extend(db.all_tags().iter().map(|t| entry(format!("/tags/{}", t.slug))));
    entries.extend(
        db.all_audiences()
            .iter()
            .map(|a| entry(format!("/audiences/{}", a.slug))),
    );
    entries
}
