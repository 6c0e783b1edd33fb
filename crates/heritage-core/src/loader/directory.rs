// crates/heritage-core/src/loader/directory.rs
use crate::config::is_record_file_name;
use crate::error::{HeritageError, Result};
use crate::model::{Dataset, Site};
use chrono::{DateTime, NaiveDate, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

/// Read every record file in `dir` into a [`Dataset`].
///
/// Never fails:
/// - a missing directory gives an empty dataset,
/// - a file that cannot be read or parsed, or has no `id`, is skipped with a
///   warning.
///
/// Files are visited in file-name order, which fixes the record order of the
/// dataset. `last_updated` is the newest modification time over every listed
/// file, including the ones that were skipped for bad content.
pub fn load_from_dir(dir: &Path) -> Dataset {
    let today = Utc::now().date_naive();

    let files = match list_record_files(dir) {
        Ok(files) => files,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "site directory missing, using empty dataset");
            return Dataset::empty(today);
        }
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot list site directory");
            return Dataset::empty(today);
        }
    };

    let mut sites = Vec::with_capacity(files.len());
    let mut latest: Option<SystemTime> = None;

    for path in &files {
        let modified = match fs::metadata(path).and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot stat site file, skipping");
                continue;
            }
        };
        latest = Some(latest.map_or(modified, |l| l.max(modified)));

        match read_site_file(path) {
            Ok(site) => sites.push(site),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to parse site file"),
        }
    }

    debug!(
        dir = %dir.display(),
        files = files.len(),
        sites = sites.len(),
        "loaded site directory"
    );

    let last_updated = latest.map(to_utc_date).unwrap_or(today);
    Dataset::new(sites, last_updated)
}

/// Read and parse a single record file.
///
/// A record whose `id` is missing or blank is rejected with
/// [`HeritageError::InvalidData`].
pub fn read_site_file(path: &Path) -> Result<Site> {
    let bytes = fs::read(path)?;
    let site: Site = serde_json::from_slice(&bytes)?;
    if site.id.trim().is_empty() {
        return Err(HeritageError::InvalidData(format!(
            "record {} has an empty id",
            path.display()
        )));
    }
    Ok(site)
}

/// Record files directly inside `dir`, sorted by file name.
fn list_record_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if is_record_file_name(&name.to_string_lossy()) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn to_utc_date(t: SystemTime) -> NaiveDate {
    DateTime::<Utc>::from(t).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_directory_is_empty_not_error() {
        let tmp = tempdir().unwrap();
        let ds = load_from_dir(&tmp.path().join("nope"));
        assert!(ds.sites.is_empty());
        assert_eq!(ds.metadata.total_sites, 0);
        assert_eq!(ds.metadata.last_updated, Utc::now().date_naive());
    }

    #[test]
    fn blank_id_is_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("blank.json");
        fs::write(&path, r#"{"id": "  ", "name": "Nothing"}"#).unwrap();
        assert!(matches!(
            read_site_file(&path),
            Err(HeritageError::InvalidData(_))
        ));
    }

    #[test]
    fn syntax_error_is_json_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read_site_file(&path), Err(HeritageError::Json(_))));
    }

    #[test]
    fn ill_typed_optional_fields_keep_the_record() {
        let tmp = tempdir().unwrap();
        let records = [
            ("a.json", r#"{"id":"a","images":{"heroImage":{"alt":"x"}}}"#),
            ("b.json", r#"{"id":"b","dateBuilt":1180}"#),
            ("c.json", r#"{"id":"c","location":{"coordinates":{"latitude":"53.1"}}}"#),
            ("d.json", r#"{"id":"d","nearbyAttractions":[{"distance":"2km"}]}"#),
        ];
        for (name, body) in records {
            fs::write(tmp.path().join(name), body).unwrap();
        }

        let ds = load_from_dir(tmp.path());
        let ids: Vec<_> = ds.sites.iter().map(Site::id).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert_eq!(ds.metadata.total_sites, 4);

        assert_eq!(ds.sites[0].hero_image_url(), None);
        assert_eq!(ds.sites[1].date_built.as_deref(), Some("1180"));
        let lat = ds.sites[2]
            .location
            .as_ref()
            .and_then(|l| l.coordinates.as_ref())
            .and_then(|c| c.latitude);
        assert_eq!(lat, Some(53.1));
    }

    #[test]
    fn only_json_files_are_listed_in_name_order() {
        let tmp = tempdir().unwrap();
        for name in ["b.json", "a.json", "notes.txt", "c.json.bak"] {
            fs::write(tmp.path().join(name), "{}").unwrap();
        }
        let files = list_record_files(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }
}
