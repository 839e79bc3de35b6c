//! Record store: one pretty-printed JSON file per detection

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use crate::types::{DetectionRecord, ScanError, ScanResult};

/// Directory-backed store for detection records
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save record to `<dir>/<id>.json`, creating the directory if needed
    pub fn save(&self, record: &DetectionRecord) -> ScanResult<PathBuf> {
        let path = self.path_for(&record.id)?;
        let json = serde_json::to_string_pretty(record)?;

        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, json)?;

        debug!(id = %record.id, path = %path.display(), "record saved");
        Ok(path)
    }

    /// Load one record by id
    pub fn load(&self, id: &str) -> ScanResult<DetectionRecord> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(ScanError::NotFound(format!("record {}", id)));
        }
        let json = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// All records, newest first. A missing directory is an empty store.
    /// Files that do not parse as records are skipped.
    pub fn list(&self) -> ScanResult<Vec<DetectionRecord>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let json = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<DetectionRecord>(&json) {
                Ok(record) => records.push(record),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping non-record file"),
            }
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    /// Number of records `list` would return
    pub fn count(&self) -> usize {
        self.list().map(|records| records.len()).unwrap_or(0)
    }

    // Ids become file names; reject anything that could leave the directory
    fn path_for(&self, id: &str) -> ScanResult<PathBuf> {
        let valid = !id.is_empty()
            && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ScanError::NotFound(format!("record {}", id)));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }
}
