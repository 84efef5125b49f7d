use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::transcode;
use super::wire::UploadBatch;

/// Filesystem layout for one server instance: raw submissions and generated
/// map documents.
pub struct ArtifactStore {
    received_dir: PathBuf,
    maps_dir: PathBuf,
}

/// Reserved paths for the artifacts of one submission.
#[derive(Debug, Clone)]
pub struct SubmissionPaths {
    pub id: String,
    pub raw: PathBuf,
    pub csv: PathBuf,
    pub map: PathBuf,
}

impl SubmissionPaths {
    /// URL path under which the generated document is served.
    pub fn map_url(&self) -> String {
        let name = self.map.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        format!("/maps/{}", name)
    }
}

impl ArtifactStore {
    pub fn new(received_dir: PathBuf, maps_dir: PathBuf) -> Self {
        ArtifactStore {
            received_dir,
            maps_dir,
        }
    }

    /// Reserves a unique artifact id for one submission. The uuid suffix
    /// keeps concurrent submissions with equal timestamps apart.
    pub fn submission(&self, submitted_at: DateTime<Utc>) -> SubmissionPaths {
        let id = format!(
            "{}_{}",
            submitted_at.format("%Y%m%dT%H%M%SZ"),
            uuid::Uuid::new_v4()
        );
        SubmissionPaths {
            raw: self.received_dir.join(format!("data_{}.json", id)),
            csv: self.received_dir.join(format!("data_{}.csv", id)),
            map: self.maps_dir.join(format!("map_{}.html", id)),
            id,
        }
    }

    /// Persists the submitted body verbatim.
    pub fn save_raw(&self, paths: &SubmissionPaths, body: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.received_dir)?;
        fs::write(&paths.raw, body)
    }

    /// Writes the tabular form of the batch next to the raw artifact.
    pub fn save_csv(&self, paths: &SubmissionPaths, batch: &UploadBatch) -> Result<(), csv::Error> {
        fs::create_dir_all(&self.received_dir)?;
        let file = fs::File::create(&paths.csv)?;
        transcode::write_csv(file, batch)
    }

    /// Names of generated map documents, oldest first.
    pub fn list_maps(&self) -> io::Result<Vec<String>> {
        if !self.maps_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in self.maps_dir.read_dir()? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "html") {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn submission_paths_share_one_id() {
        let store = ArtifactStore::new(PathBuf::from("received_data"), PathBuf::from("created_maps"));
        let at = Utc.with_ymd_and_hms(2026, 8, 28, 9, 30, 0).unwrap();
        let paths = store.submission(at);

        assert!(paths.id.starts_with("20260828T093000Z_"));
        assert_eq!(paths.raw, PathBuf::from(format!("received_data/data_{}.json", paths.id)));
        assert_eq!(paths.csv, PathBuf::from(format!("received_data/data_{}.csv", paths.id)));
        assert_eq!(paths.map, PathBuf::from(format!("created_maps/map_{}.html", paths.id)));
        assert_eq!(paths.map_url(), format!("/maps/map_{}.html", paths.id));
    }

    #[test]
    fn ids_are_unique_per_submission() {
        let store = ArtifactStore::new(PathBuf::from("r"), PathBuf::from("m"));
        let at = Utc.with_ymd_and_hms(2026, 8, 28, 9, 30, 0).unwrap();
        assert_ne!(store.submission(at).id, store.submission(at).id);
    }

    #[test]
    fn missing_maps_dir_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("r"), dir.path().join("m"));
        assert!(store.list_maps().unwrap().is_empty());
    }
}
