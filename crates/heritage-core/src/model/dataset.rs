// crates/heritage-core/src/model/dataset.rs
use super::site::Site;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const SCHEMA_VERSION: &str = "sites-directory";
pub const DATA_SOURCE: &str = "Local /sites JSON collection";

/// Summary information stamped onto a dataset when it is loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    /// Always equal to the number of records in the dataset.
    pub total_sites: usize,
    /// Newest modification date among the record files (UTC), or the load
    /// date when the directory held no record files.
    pub last_updated: NaiveDate,
    pub schema_version: String,
    pub data_source: String,
}

impl DatasetMetadata {
    pub fn new(total_sites: usize, last_updated: NaiveDate) -> Self {
        Self {
            total_sites,
            last_updated,
            schema_version: SCHEMA_VERSION.to_owned(),
            data_source: DATA_SOURCE.to_owned(),
        }
    }
}

/// All records plus their metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub sites: Vec<Site>,
    pub metadata: DatasetMetadata,
}

impl Dataset {
    pub fn new(sites: Vec<Site>, last_updated: NaiveDate) -> Self {
        let metadata = DatasetMetadata::new(sites.len(), last_updated);
        Self { sites, metadata }
    }

    pub fn empty(last_updated: NaiveDate) -> Self {
        Self::new(Vec::new(), last_updated)
    }
}

/// The loaded, read-only heritage database.
///
/// Built once (see [`crate::loader`]) and then only queried through
/// [`crate::HeritageSearch`]. Nothing mutates it after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeritageDb {
    pub(crate) dataset: Dataset,
}

impl HeritageDb {
    /// Wrap a dataset. `metadata.total_sites` is re-derived from `sites`.
    pub fn from_dataset(mut dataset: Dataset) -> Self {
        let count = dataset.sites.len();
        if dataset.metadata.total_sites != count {
            warn!(
                stored = dataset.metadata.total_sites,
                count, "metadata site count disagrees with the records, using the record count"
            );
            dataset.metadata.total_sites = count;
        }
        Self { dataset }
    }

    /// Build a database from in-memory records, dated today.
    pub fn from_sites(sites: Vec<Site>) -> Self {
        Self::from_dataset(Dataset::new(sites, Utc::now().date_naive()))
    }

    pub fn site_count(&self) -> usize {
        self.dataset.sites.len()
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_count_tracks_sites() {
        let sites = vec![
            Site {
                id: "a".into(),
                ..Default::default()
            },
            Site {
                id: "b".into(),
                ..Default::default()
            },
        ];
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let ds = Dataset::new(sites, day);
        assert_eq!(ds.metadata.total_sites, 2);
        assert_eq!(ds.metadata.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn metadata_serializes_with_iso_date() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let json = serde_json::to_value(DatasetMetadata::new(0, day)).unwrap();
        assert_eq!(json["lastUpdated"], "2024-05-01");
        assert_eq!(json["totalSites"], 0);
        assert_eq!(json["dataSource"], DATA_SOURCE);
    }
}
