use std::fs;
use std::path::{Path, PathBuf};

use super::{ScoreMap, ScoreRepository};
use crate::error::StoreError;

/// Score record stored as a JSON object, e.g. `{"Easy": 3, "Hard": 5}`
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl ScoreRepository for JsonFileRepository {
    fn load(&self) -> Result<ScoreMap, StoreError> {
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&mut self, scores: &ScoreMap) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(scores)?;
        // tmp -> rename so a failed write never truncates the old record
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
