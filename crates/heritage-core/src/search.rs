// crates/heritage-core/src/search.rs
use crate::common::{AudienceCount, CategoryCount, DatasetInsights, TagCount};
use crate::model::site::non_blank;
use crate::model::{Dataset, HeritageDb, Image, Site};
use crate::rank::ranked;
use crate::text::{compare_labels, fold_key, slugify};
use crate::traits::{HeritageSearch, NameMatch, SlugMatch};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

// -----------------------------------------------------------------------------
// FILTER
// -----------------------------------------------------------------------------

/// Listing filter. Every field that is set must match (logical AND).
///
/// `region`, `tag` and `audience` may be given as labels or slugs; they are
/// slugified before comparison. A value that is blank, or slugifies to
/// nothing, places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteFilter {
    /// Case- and accent-insensitive substring of name, tagline, short or full
    /// description, a tag, or a category.
    pub query: Option<String>,
    /// Matches the county or region of the address.
    pub region: Option<String>,
    pub tag: Option<String>,
    pub audience: Option<String>,
}

impl SiteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.query = Some(q.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.prepare() == PreparedFilter::default()
    }

    fn prepare(&self) -> PreparedFilter {
        fn slug_of(v: &Option<String>) -> Option<String> {
            v.as_deref().map(slugify).filter(|s| !s.is_empty())
        }
        PreparedFilter {
            query: self
                .query
                .as_deref()
                .filter(|q| !q.trim().is_empty())
                .map(fold_key),
            region: slug_of(&self.region),
            tag: slug_of(&self.tag),
            audience: slug_of(&self.audience),
        }
    }
}

/// Filter with the query folded and the slugs computed once.
#[derive(Debug, Default, PartialEq, Eq)]
struct PreparedFilter {
    query: Option<String>,
    region: Option<String>,
    tag: Option<String>,
    audience: Option<String>,
}

impl PreparedFilter {
    fn matches(&self, site: &Site) -> bool {
        let query_ok = self.query.as_deref().map_or(true, |q| matches_query(site, q));
        let region_ok = self.region.as_deref().map_or(true, |slug| {
            site.county().is_some_and(|c| slugify(c) == slug)
                || site.region().is_some_and(|r| slugify(r) == slug)
        });
        let tag_ok = self
            .tag
            .as_deref()
            .map_or(true, |slug| site.tags().any_slug_is(slug));
        let audience_ok = self
            .audience
            .as_deref()
            .map_or(true, |slug| site.suitable_for().any_slug_is(slug));

        query_ok && region_ok && tag_ok && audience_ok
    }
}

impl NameMatch for Site {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// `folded_q` must already be passed through [`fold_key`].
fn matches_query(site: &Site, folded_q: &str) -> bool {
    let hit = |text: &str| fold_key(text).contains(folded_q);
    let description = site.description.as_ref();

    site.name_contains(folded_q)
        || site.tagline.as_deref().is_some_and(hit)
        || description
            .and_then(|d| d.short.as_deref())
            .is_some_and(hit)
        || description
            .and_then(|d| d.full.as_deref())
            .is_some_and(hit)
        || site.tags().iter().any(|t| hit(t.as_str()))
        || site.categories().iter().any(|c| hit(c.as_str()))
}

// -----------------------------------------------------------------------------
// SEASONAL DIGEST
// -----------------------------------------------------------------------------

/// Lightweight visiting summary of one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalAccess<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub current_status: Option<&'a str>,
    pub special_closures: &'a [String],
    pub busy_periods: &'a [String],
    /// Tour options that require booking.
    pub guided_tours: usize,
    pub hero_image: Option<&'a Image>,
    pub county: Option<&'a str>,
    pub era: Option<&'a str>,
}

impl<'a> SeasonalAccess<'a> {
    fn of(site: &'a Site) -> Self {
        let opening = site.opening_times();
        SeasonalAccess {
            id: &site.id,
            name: &site.name,
            current_status: opening.and_then(|o| non_blank(o.current_status.as_ref())),
            special_closures: opening
                .and_then(|o| o.special_closures.as_deref())
                .unwrap_or(&[]),
            busy_periods: site
                .visiting_information
                .as_ref()
                .and_then(|v| v.busy_periods.as_deref())
                .unwrap_or(&[]),
            guided_tours: site
                .tour_options()
                .iter()
                .filter(|t| t.booking_required == Some(true))
                .count(),
            hero_image: site.hero_image(),
            county: site.county(),
            era: site.era(),
        }
    }

    /// `true` when there is a status, a closure, or a busy period to show.
    pub fn has_signal(&self) -> bool {
        self.current_status.is_some()
            || !self.special_closures.is_empty()
            || !self.busy_periods.is_empty()
    }
}

// -----------------------------------------------------------------------------
// AGGREGATION HELPERS
// -----------------------------------------------------------------------------

/// Count each label, then order by count (desc) and label (asc).
fn count_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut out: Vec<(&str, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| compare_labels(a.0, b.0)));
    out
}

/// Labels a site is counted under in [`HeritageSearch::category_counts`].
fn category_labels(site: &Site) -> Vec<&str> {
    if !site.categories().is_empty() {
        site.categories().iter().map(String::as_str).collect()
    } else {
        site.site_type().into_iter().collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> usize {
    values.flatten().collect::<HashSet<_>>().len()
}

// -----------------------------------------------------------------------------
// QUERIES
// -----------------------------------------------------------------------------

impl HeritageSearch for HeritageDb {
    fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn featured_site(&self) -> Option<&Site> {
        ranked(self.sites()).into_iter().next()
    }

    fn preview_sites(&self, limit: usize) -> Vec<&Site> {
        let mut sites = ranked(self.sites());
        sites.truncate(limit);
        sites
    }

    fn category_counts(&self) -> Vec<CategoryCount> {
        count_labels(self.sites().iter().flat_map(category_labels))
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_owned(),
                count,
            })
            .collect()
    }

    fn top_tags(&self, limit: usize) -> Vec<TagCount> {
        let tags = self.sites().iter().flat_map(|s| s.tags()).map(String::as_str);
        count_labels(tags)
            .into_iter()
            .take(limit)
            .map(|(tag, count)| TagCount {
                tag: tag.to_owned(),
                slug: slugify(tag),
                count,
            })
            .collect()
    }

    fn top_audiences(&self, limit: usize) -> Vec<AudienceCount> {
        let audiences = self
            .sites()
            .iter()
            .flat_map(|s| s.suitable_for())
            .map(String::as_str);
        count_labels(audiences)
            .into_iter()
            .take(limit)
            .map(|(audience, count)| AudienceCount {
                audience: audience.to_owned(),
                slug: slugify(audience),
                count,
            })
            .collect()
    }

    fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self
            .sites()
            .iter()
            .flat_map(|s| [s.region(), s.county()])
            .flatten()
            .collect();
        regions.sort_by(|a, b| compare_labels(a, b));
        regions.dedup();
        regions
    }

    fn filter_sites(&self, filter: &SiteFilter) -> Vec<&Site> {
        let prepared = filter.prepare();
        self.sites()
            .iter()
            .filter(|s| prepared.matches(s))
            .collect()
    }

    fn seasonal_access(&self) -> Vec<SeasonalAccess<'_>> {
        self.sites()
            .iter()
            .map(SeasonalAccess::of)
            .filter(SeasonalAccess::has_signal)
            .collect()
    }

    fn dataset_insights(&self) -> DatasetInsights {
        let sites = self.sites();
        DatasetInsights {
            total_sites: self.metadata().total_sites,
            unique_counties: distinct(sites.iter().map(Site::county)),
            eras_represented: distinct(sites.iter().map(Site::era)),
            managing_bodies: distinct(
                sites
                    .iter()
                    .map(|s| non_blank(s.managed_by.as_ref())),
            ),
            experience_types: distinct(sites.iter().map(Site::site_type)),
            audience_segments: distinct(
                sites
                    .iter()
                    .flat_map(|s| s.suitable_for())
                    .map(|a| Some(a.as_str()).filter(|a| !a.is_empty())),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Address, Description, Features, Images, Location, OpeningTimes, TourOption,
        VisitingInformation,
    };

    fn site(id: &str) -> Site {
        Site {
            id: id.into(),
            name: id.to_uppercase(),
            ..Default::default()
        }
    }

    fn strings(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|v| (*v).to_owned()).collect())
    }

    fn with_highlights(mut s: Site, n: usize) -> Site {
        s.features = Some(Features {
            highlights: Some((0..n).map(|i| format!("h{i}")).collect()),
            ..Default::default()
        });
        s
    }

    fn with_address(mut s: Site, county: Option<&str>, region: Option<&str>) -> Site {
        s.location = Some(Location {
            address: Some(Address {
                county: county.map(Into::into),
                region: region.map(Into::into),
                ..Default::default()
            }),
            ..Default::default()
        });
        s
    }

    /// A: tags Castle+Tour, 2 highlights. B: tag Castle, hero image, 5
    /// highlights. C: nothing.
    fn three_site_db() -> HeritageDb {
        let mut a = with_highlights(site("a"), 2);
        a.tags = strings(&["Castle", "Tour"]);
        a.site_type = Some("castle".into());

        let mut b = with_highlights(site("b"), 5);
        b.tags = strings(&["Castle"]);
        b.site_type = Some("castle".into());
        b.images = Some(Images {
            hero_image: Some(Image {
                url: "b.jpg".into(),
                ..Default::default()
            }),
            gallery: None,
        });

        let mut c = site("c");
        c.site_type = Some("monastery".into());

        HeritageDb::from_sites(vec![a, b, c])
    }

    #[test]
    fn top_tags_count_and_slug() {
        let db = three_site_db();
        assert_eq!(
            db.top_tags(10),
            vec![
                TagCount {
                    tag: "Castle".into(),
                    slug: "castle".into(),
                    count: 2
                },
                TagCount {
                    tag: "Tour".into(),
                    slug: "tour".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn top_tags_is_prefix_of_all_tags() {
        let db = three_site_db();
        let all = db.all_tags();
        for limit in 0..=all.len() {
            assert_eq!(db.top_tags(limit), all[..limit].to_vec());
        }
    }

    #[test]
    fn featured_is_highest_score_and_heads_preview() {
        let db = three_site_db();
        assert_eq!(db.featured_site().map(Site::id), Some("b"));
        let preview: Vec<&str> = db.preview_sites(3).into_iter().map(Site::id).collect();
        assert_eq!(preview, vec!["b", "a", "c"]);
        assert_eq!(db.preview_sites(1)[0], db.featured_site().unwrap());
    }

    #[test]
    fn preview_larger_than_dataset_returns_everything() {
        let db = three_site_db();
        assert_eq!(db.preview_sites(50).len(), 3);
        assert!(db.preview_sites(0).is_empty());
    }

    #[test]
    fn featured_of_empty_dataset_is_none() {
        let db = HeritageDb::from_sites(Vec::new());
        assert!(db.featured_site().is_none());
        assert!(db.all_tags().is_empty());
        assert!(db.regions().is_empty());
    }

    #[test]
    fn categories_fall_back_to_type() {
        let db = three_site_db();
        assert_eq!(
            db.category_counts(),
            vec![
                CategoryCount {
                    category: "castle".into(),
                    count: 2
                },
                CategoryCount {
                    category: "monastery".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn declared_categories_override_type_and_untyped_sites_are_skipped() {
        let mut a = site("a");
        a.categories = strings(&["Abbey", "Ruin"]);
        a.site_type = Some("ignored".into());
        let b = site("b");
        let db = HeritageDb::from_sites(vec![a, b]);
        let labels: Vec<String> = db.category_counts().into_iter().map(|c| c.category).collect();
        assert_eq!(labels, vec!["Abbey", "Ruin"]);
    }

    #[test]
    fn tag_slug_lookup() {
        let db = three_site_db();
        let ids: Vec<&str> = db.sites_by_tag_slug("tour").into_iter().map(Site::id).collect();
        assert_eq!(ids, vec!["a"]);
        assert!(db.sites_by_tag_slug("no-such-tag").is_empty());
        assert_eq!(db.find_tag_by_slug("castle").map(|t| t.count), Some(2));
        assert!(db.find_tag_by_slug("nothing").is_none());
    }

    #[test]
    fn colliding_slugs_return_all_matches() {
        let mut a = site("a");
        a.tags = strings(&["Co. Kerry"]);
        let mut b = site("b");
        b.tags = strings(&["Co Kerry"]);
        let db = HeritageDb::from_sites(vec![a, b]);

        assert_eq!(db.sites_by_tag_slug("co-kerry").len(), 2);
        // singular lookup: first in all_tags order
        assert_eq!(db.find_tag_by_slug("co-kerry").unwrap().tag, "Co Kerry");
    }

    #[test]
    fn audiences_are_counted_like_tags() {
        let mut a = site("a");
        a.suitable_for = strings(&["families", "history buffs"]);
        let mut b = site("b");
        b.suitable_for = strings(&["families"]);
        let db = HeritageDb::from_sites(vec![a, b]);

        let top = db.top_audiences(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].audience, "families");
        assert_eq!(top[0].count, 2);
        assert_eq!(db.all_audiences()[1].slug, "history-buffs");
        let ids: Vec<&str> = db
            .sites_by_audience_slug("history-buffs")
            .into_iter()
            .map(Site::id)
            .collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn regions_are_sorted_and_deduplicated() {
        let db = HeritageDb::from_sites(vec![
            with_address(site("a"), Some("Meath"), Some("Leinster")),
            with_address(site("b"), Some("Kerry"), Some("Munster")),
            with_address(site("c"), Some("Meath"), None),
            site("d"),
        ]);
        assert_eq!(db.regions(), vec!["Kerry", "Leinster", "Meath", "Munster"]);
        assert_eq!(db.find_region_by_slug("munster"), Some("Munster"));
    }

    #[test]
    fn query_searches_text_fields_case_insensitively() {
        let mut a = site("a");
        a.name = "Rock of Cashel".into();
        let mut b = site("b");
        b.description = Some(Description {
            full: Some("A ring fort on the Dingle peninsula".into()),
            ..Default::default()
        });
        let mut c = site("c");
        c.categories = strings(&["Ringfort"]);
        let db = HeritageDb::from_sites(vec![a, b, c]);

        let ids = |f: SiteFilter| -> Vec<String> {
            db.filter_sites(&f).into_iter().map(|s| s.id.clone()).collect()
        };
        assert_eq!(ids(SiteFilter::new().query("CASHEL")), vec!["a"]);
        assert_eq!(ids(SiteFilter::new().query("ring")), vec!["b", "c"]);
        assert_eq!(ids(SiteFilter::new().query("")).len(), 3);
    }

    #[test]
    fn filters_combine_with_and() {
        let mut a = with_address(site("a"), Some("Kerry"), Some("Munster"));
        a.tags = strings(&["Coastal"]);
        a.suitable_for = strings(&["Families"]);
        let mut b = with_address(site("b"), Some("Kerry"), None);
        b.tags = strings(&["Coastal"]);
        let c = with_address(site("c"), Some("Cork"), Some("Munster"));
        let db = HeritageDb::from_sites(vec![a, b, c]);

        let ids = |f: SiteFilter| -> Vec<String> {
            db.filter_sites(&f).into_iter().map(|s| s.id.clone()).collect()
        };
        assert_eq!(ids(SiteFilter::new().region("munster")), vec!["a", "c"]);
        assert_eq!(ids(SiteFilter::new().region("Kerry").tag("coastal")), vec!["a", "b"]);
        assert_eq!(
            ids(SiteFilter::new().region("kerry").tag("Coastal").audience("families")),
            vec!["a"]
        );
        assert!(ids(SiteFilter::new().tag("inland")).is_empty());
        // a value with no slug imposes nothing
        assert_eq!(ids(SiteFilter::new().region("!!!")).len(), 3);
        assert!(SiteFilter::new().region("  ").is_empty());
    }

    #[test]
    fn seasonal_digest_keeps_sites_with_signals() {
        let mut a = site("a");
        a.visiting_information = Some(VisitingInformation {
            opening_times: Some(OpeningTimes {
                current_status: Some("Closed for winter".into()),
                ..Default::default()
            }),
            tour_options: Some(vec![
                TourOption {
                    booking_required: Some(true),
                    ..Default::default()
                },
                TourOption {
                    booking_required: Some(false),
                    ..Default::default()
                },
                TourOption::default(),
            ]),
            ..Default::default()
        });
        let mut b = site("b");
        b.visiting_information = Some(VisitingInformation {
            busy_periods: Some(vec!["July".into()]),
            ..Default::default()
        });
        let mut c = site("c");
        c.visiting_information = Some(VisitingInformation {
            busy_periods: Some(vec![]),
            opening_times: Some(OpeningTimes {
                current_status: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let db = HeritageDb::from_sites(vec![a, b, c, site("d")]);

        let digest = db.seasonal_access();
        let ids: Vec<&str> = digest.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(digest[0].current_status, Some("Closed for winter"));
        assert_eq!(digest[0].guided_tours, 1);
        assert_eq!(digest[1].busy_periods, ["July".to_string()]);
    }

    #[test]
    fn insights_count_distinct_values() {
        let mut a = with_address(site("a"), Some("Kerry"), None);
        a.era = Some("Medieval".into());
        a.managed_by = Some("OPW".into());
        a.site_type = Some("castle".into());
        a.suitable_for = strings(&["families", "walkers"]);
        let mut b = with_address(site("b"), Some("Kerry"), None);
        b.era = Some("Neolithic".into());
        b.managed_by = Some("OPW".into());
        b.suitable_for = strings(&["families"]);
        let db = HeritageDb::from_sites(vec![a, b, site("c")]);

        assert_eq!(
            db.dataset_insights(),
            DatasetInsights {
                total_sites: 3,
                unique_counties: 1,
                eras_represented: 2,
                managing_bodies: 1,
                experience_types: 1,
                audience_segments: 2,
            }
        );
    }

    #[test]
    fn lookup_by_id_returns_the_stored_record() {
        let db = three_site_db();
        for s in db.sites() {
            let found = db.find_site_by_id(&s.id).unwrap();
            assert!(std::ptr::eq(found, s));
        }
        assert!(db.find_site_by_id("missing").is_none());
    }
}
