// crates/heritage-core/src/common.rs

//! Derived views returned by the query layer.
//!
//! These are computed on every call and never stored.

use serde::Serialize;

/// A tag with its slug and the number of sites carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub slug: String,
    pub count: usize,
}

/// An audience label ("suitable for") with its slug and site count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudienceCount {
    pub audience: String,
    pub slug: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Simple aggregate statistics for the dataset.
///
/// Each field past `total_sites` counts distinct non-empty values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInsights {
    pub total_sites: usize,
    pub unique_counties: usize,
    pub eras_represented: usize,
    pub managing_bodies: usize,
    pub experience_types: usize,
    pub audience_segments: usize,
}
