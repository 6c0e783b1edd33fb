// crates/heritage-core/src/loader/export.rs

//! Dataset snapshots.
//!
//! Writes what was loaded (records and metadata) to a single JSON file, and
//! reads such a file back. Gzip is chosen by the `.gz` extension and needs
//! the `compact` feature.

use crate::error::{HeritageError, Result};
use crate::model::{Dataset, HeritageDb};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    pub fn for_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext == "gz" => CompressionMode::Gzip,
            _ => CompressionMode::None,
        }
    }
}

impl HeritageDb {
    /// Write the loaded dataset to `path` as JSON (gzipped for `*.gz`).
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_generic(path, &self.dataset, CompressionMode::for_path(path))
    }

    /// Read a snapshot written by [`HeritageDb::export_to`].
    ///
    /// `lastUpdated` and the source labels stored in the snapshot are kept;
    /// `totalSites` is recounted from the records it holds.
    pub fn load_export(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path, CompressionMode::for_path(path))?;
        let dataset: Dataset = serde_json::from_reader(reader)?;
        Ok(Self::from_dataset(dataset))
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when asked.
fn open_stream(path: &Path, compression: CompressionMode) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        HeritageError::NotFound(format!("snapshot not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    match compression {
        CompressionMode::None => Ok(Box::new(reader)),
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Ok(Box::new(GzDecoder::new(reader)))
            }
            #[cfg(not(feature = "compact"))]
            {
                Err(HeritageError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ))
            }
        }
    }
}

/// Serializes any value to `path` as JSON.
fn write_generic<T: Serialize>(path: &Path, value: &T, compression: CompressionMode) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);

    match compression {
        CompressionMode::None => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                serde_json::to_writer(&mut encoder, value)?;
                encoder.finish()?.flush()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                drop(writer);
                return Err(HeritageError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Site;
    use crate::HeritageSearch;
    use tempfile::tempdir;

    fn sample_db() -> HeritageDb {
        HeritageDb::from_sites(vec![Site {
            id: "newgrange".into(),
            name: "Newgrange".into(),
            tags: Some(vec!["Neolithic".into()]),
            ..Default::default()
        }])
    }

    #[test]
    fn compression_follows_extension() {
        assert_eq!(
            CompressionMode::for_path(Path::new("out/sites.json.gz")),
            CompressionMode::Gzip
        );
        assert_eq!(
            CompressionMode::for_path(Path::new("out/sites.json")),
            CompressionMode::None
        );
    }

    #[test]
    fn plain_snapshot_reads_back() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("snapshot.json");
        let db = sample_db();
        db.export_to(&path).unwrap();
        assert_eq!(HeritageDb::load_export(&path).unwrap(), db);
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_snapshot_reads_back() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("snapshot.json.gz");
        let db = sample_db();
        db.export_to(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
        assert_eq!(HeritageDb::load_export(&path).unwrap(), db);
    }

    #[test]
    fn snapshot_site_count_comes_from_its_records() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("stale.json");
        std::fs::write(
            &path,
            r#"{
                "sites": [{ "id": "newgrange", "name": "Newgrange" }],
                "metadata": {
                    "totalSites": 99,
                    "lastUpdated": "2024-03-01",
                    "schemaVersion": "sites-directory",
                    "dataSource": "Local /sites JSON collection"
                }
            }"#,
        )
        .unwrap();

        let db = HeritageDb::load_export(&path).unwrap();
        assert_eq!(db.site_count(), 1);
        assert_eq!(db.metadata().total_sites, 1);
        assert_eq!(db.dataset_insights().total_sites, 1);
        assert_eq!(db.metadata().last_updated.to_string(), "2024-03-01");
    }

    #[test]
    fn missing_snapshot_is_not_found() {
        let tmp = tempdir().unwrap();
        assert!(matches!(
            HeritageDb::load_export(tmp.path().join("absent.json")),
            Err(HeritageError::NotFound(_))
        ));
    }
}
