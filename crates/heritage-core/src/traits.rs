// crates/heritage-core/src/traits.rs
use crate::common::{AudienceCount, CategoryCount, DatasetInsights, TagCount};
use crate::model::{Dataset, DatasetMetadata, Site};
use crate::search::{SeasonalAccess, SiteFilter};
use crate::text::{contains_folded, fold_key, slugify};

/// Name-based matching helpers for types that expose a display name.
///
/// Comparisons go through [`fold_key`], so they ignore case and accents.
///
/// # Examples
/// ```rust
/// use heritage_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Brú na Bóinne").is_named("bru na boinne"));
/// assert!(Place("Clonmacnoise").name_contains("MACNO"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        contains_folded(self.name_str(), q)
    }
}

/// Slug comparison over a list of labels.
pub trait SlugMatch {
    /// `true` when any label slugifies to `slug`.
    fn any_slug_is(&self, slug: &str) -> bool;
}

impl SlugMatch for [String] {
    fn any_slug_is(&self, slug: &str) -> bool {
        self.iter().any(|label| slugify(label) == slug)
    }
}

/// Read-only queries over a loaded dataset.
///
/// None of these fail. Missing optional data simply does not contribute, and
/// a miss is `None` or an empty list.
///
/// # Example
///
/// ```no_run
/// use heritage_core::{HeritageDb, HeritageSearch};
///
/// let db = HeritageDb::load();
///
/// if let Some(site) = db.featured_site() {
///     println!("Featured: {}", site.name());
/// }
/// for tag in db.top_tags(5) {
///     println!("#{} ({})", tag.tag, tag.count);
/// }
/// ```
pub trait HeritageSearch {
    fn dataset(&self) -> &Dataset;

    fn metadata(&self) -> &DatasetMetadata {
        &self.dataset().metadata
    }

    /// All records, in load order.
    fn sites(&self) -> &[Site] {
        &self.dataset().sites
    }

    /// First record whose id equals `id` exactly.
    fn find_site_by_id(&self, id: &str) -> Option<&Site> {
        self.sites().iter().find(|s| s.id == id)
    }

    /// The highest-scoring record; the earliest one wins a tie.
    fn featured_site(&self) -> Option<&Site>;

    /// The `limit` highest-scoring records, best first, ties in load order.
    fn preview_sites(&self, limit: usize) -> Vec<&Site>;

    /// Records per category, most common first, then by label.
    ///
    /// A record without categories is counted under its `type` instead; a
    /// record with neither is not counted.
    fn category_counts(&self) -> Vec<CategoryCount>;

    /// The `limit` most used tags, most common first, then by label.
    fn top_tags(&self, limit: usize) -> Vec<TagCount>;

    fn all_tags(&self) -> Vec<TagCount> {
        self.top_tags(usize::MAX)
    }

    /// The `limit` most used audience labels, most common first, then by label.
    fn top_audiences(&self, limit: usize) -> Vec<AudienceCount>;

    fn all_audiences(&self) -> Vec<AudienceCount> {
        self.top_audiences(usize::MAX)
    }

    /// Distinct address regions and counties, sorted.
    fn regions(&self) -> Vec<&str>;

    /// First region or county whose slug is `slug`.
    fn find_region_by_slug(&self, slug: &str) -> Option<&str> {
        self.regions().into_iter().find(|r| slugify(r) == slug)
    }

    /// First tag (in [`HeritageSearch::all_tags`] order) whose slug is `slug`.
    fn find_tag_by_slug(&self, slug: &str) -> Option<TagCount> {
        self.all_tags().into_iter().find(|t| t.slug == slug)
    }

    /// First audience (in [`HeritageSearch::all_audiences`] order) whose slug is `slug`.
    fn find_audience_by_slug(&self, slug: &str) -> Option<AudienceCount> {
        self.all_audiences().into_iter().find(|a| a.slug == slug)
    }

    /// Every record with a tag that slugifies to `slug`.
    fn sites_by_tag_slug(&self, slug: &str) -> Vec<&Site> {
        self.sites()
            .iter()
            .filter(|s| s.tags().any_slug_is(slug))
            .collect()
    }

    /// Every record with an audience label that slugifies to `slug`.
    fn sites_by_audience_slug(&self, slug: &str) -> Vec<&Site> {
        self.sites()
            .iter()
            .filter(|s| s.suitable_for().any_slug_is(slug))
            .collect()
    }

    /// Records matching every constraint set on `filter`, in load order.
    fn filter_sites(&self, filter: &SiteFilter) -> Vec<&Site>;

    /// Visiting digest of the records that have a status, closures or busy
    /// periods to report.
    fn seasonal_access(&self) -> Vec<SeasonalAccess<'_>>;

    fn dataset_insights(&self) -> DatasetInsights;
}
