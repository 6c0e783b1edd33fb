// crates/heritage-core/src/rank.rs

//! Relevance score used to order the featured and preview selections.
//!
//! The score is a heuristic of how much there is to show about a site. It is
//! only used for ordering and is never stored on a record.

use crate::model::Site;

/// Weight of having a hero image.
pub const HERO_IMAGE_WEIGHT: u32 = 8;
/// Bonus for a non-empty era.
pub const ERA_BONUS: u32 = 1;
/// Bonus for a non-empty tagline.
pub const TAGLINE_BONUS: u32 = 1;

/// Score one site.
///
/// | signal        | contribution            |
/// |---------------|-------------------------|
/// | hero image    | 8                       |
/// | highlights    | 1 each                  |
/// | tags          | 0.6 each, rounded       |
/// | categories    | 0.8 each, rounded       |
/// | era / tagline | 1 each                  |
pub fn site_score(site: &Site) -> u32 {
    let hero = if site.hero_image().is_some() {
        HERO_IMAGE_WEIGHT
    } else {
        0
    };
    let highlights = site.highlights().len() as u32;
    let tags = scaled_round(site.tags().len(), 6);
    let categories = scaled_round(site.categories().len(), 8);
    let era = if site.era().is_some() { ERA_BONUS } else { 0 };
    let tagline = if site.tagline().is_some() {
        TAGLINE_BONUS
    } else {
        0
    };
    hero + highlights + tags + categories + era + tagline
}

/// `round(count * tenths / 10)`, half rounding up, in integer arithmetic.
fn scaled_round(count: usize, tenths: u32) -> u32 {
    (count as u32 * tenths + 5) / 10
}

/// `sites` ordered by descending score; equal scores keep their original
/// order.
pub(crate) fn ranked(sites: &[Site]) -> Vec<&Site> {
    let mut scored: Vec<(u32, &Site)> = sites.iter().map(|s| (site_score(s), s)).collect();
    // stable: ties stay in load order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, s)| s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Features, Image, Images};

    fn tagged(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("t{i}")).collect()
    }

    #[test]
    fn rounding_matches_fractional_weights() {
        // 0.6 * n rounded
        let expected_tags = [0, 1, 1, 2, 2, 3, 4, 4, 5];
        for (n, want) in expected_tags.iter().enumerate() {
            assert_eq!(scaled_round(n, 6), *want, "tags n={n}");
        }
        // 0.8 * n rounded
        let expected_cats = [0, 1, 2, 2, 3, 4, 5, 6, 6];
        for (n, want) in expected_cats.iter().enumerate() {
            assert_eq!(scaled_round(n, 8), *want, "categories n={n}");
        }
    }

    #[test]
    fn empty_site_scores_zero() {
        assert_eq!(site_score(&Site::default()), 0);
    }

    #[test]
    fn every_signal_contributes() {
        let site = Site {
            id: "full".into(),
            tagline: Some("Ancient".into()),
            era: Some("Neolithic".into()),
            tags: Some(tagged(3)),
            categories: Some(tagged(2)),
            features: Some(Features {
                highlights: Some(tagged(4)),
                ..Default::default()
            }),
            images: Some(Images {
                hero_image: Some(Image {
                    url: "hero.jpg".into(),
                    ..Default::default()
                }),
                gallery: None,
            }),
            ..Default::default()
        };
        // 8 + 4 + round(1.8) + round(1.6) + 1 + 1
        assert_eq!(site_score(&site), 8 + 4 + 2 + 2 + 1 + 1);
    }

    #[test]
    fn blank_era_and_tagline_do_not_count() {
        let site = Site {
            era: Some(String::new()),
            tagline: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(site_score(&site), 0);
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let sites: Vec<Site> = ["a", "b", "c"]
            .iter()
            .map(|id| Site {
                id: (*id).into(),
                ..Default::default()
            })
            .collect();
        let ids: Vec<&str> = ranked(&sites).iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
