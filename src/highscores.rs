//! Best score per difficulty
//!
//! Fewest attempts needed to win, keyed by difficulty name. Loaded once at
//! startup and written back through the repository after every new record.

use crate::error::StoreError;
use crate::persistence::{ScoreMap, ScoreRepository};

/// Outcome of reporting a win
#[derive(Debug)]
pub struct WinRecord {
    /// The win beat (or set) the best for its difficulty
    pub new_record: bool,
    /// Saving failed; the in-memory record is updated regardless
    pub warning: Option<StoreError>,
}

/// Best-score record backed by a repository
#[derive(Debug)]
pub struct BestScores<R: ScoreRepository> {
    entries: ScoreMap,
    repo: R,
}

impl<R: ScoreRepository> BestScores<R> {
    /// Load the record. A missing or unreadable backing store means no scores yet.
    pub fn load(repo: R) -> Self {
        let entries = match repo.load() {
            Ok(entries) => {
                log::info!("Loaded {} best scores", entries.len());
                entries
            }
            Err(e) if e.is_not_found() => {
                log::info!("No best scores found, starting fresh");
                ScoreMap::new()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable best scores: {}", e);
                ScoreMap::new()
            }
        };
        Self { entries, repo }
    }

    /// Best recorded attempt count for a difficulty
    pub fn best_for(&self, difficulty: &str) -> Option<u32> {
        self.entries.get(difficulty).copied()
    }

    /// Record a win, keeping it only if it beats the current best
    pub fn record_win(&mut self, difficulty: &str, attempts_used: u32) -> WinRecord {
        // A win always takes at least one guess
        if attempts_used == 0 {
            return WinRecord {
                new_record: false,
                warning: None,
            };
        }
        let beats = self
            .best_for(difficulty)
            .map(|best| attempts_used < best)
            .unwrap_or(true);
        if !beats {
            return WinRecord {
                new_record: false,
                warning: None,
            };
        }

        self.entries.insert(difficulty.to_string(), attempts_used);
        let warning = match self.repo.save(&self.entries) {
            Ok(()) => {
                log::info!("New best for {}: {} attempt(s)", difficulty, attempts_used);
                None
            }
            Err(e) => {
                log::warn!("Failed to save best scores: {}", e);
                Some(e)
            }
        };
        WinRecord {
            new_record: true,
            warning,
        }
    }

    /// Check if no difficulty has a recorded best yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &ScoreMap {
        &self.entries
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{JsonFileRepository, MemoryRepository};

    /// Loads fine, refuses every save
    struct ReadOnlyRepository;

    impl ScoreRepository for ReadOnlyRepository {
        fn load(&self) -> Result<ScoreMap, StoreError> {
            Ok(ScoreMap::new())
        }

        fn save(&mut self, _scores: &ScoreMap) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn test_record_only_improves() {
        let mut scores = BestScores::load(MemoryRepository::new());
        assert_eq!(scores.best_for("Hard"), None);

        assert!(scores.record_win("Hard", 5).new_record);
        assert_eq!(scores.best_for("Hard"), Some(5));

        assert!(!scores.record_win("Hard", 8).new_record);
        assert_eq!(scores.best_for("Hard"), Some(5));

        assert!(!scores.record_win("Hard", 5).new_record);
        assert_eq!(scores.best_for("Hard"), Some(5));

        assert!(scores.record_win("Hard", 2).new_record);
        assert_eq!(scores.best_for("Hard"), Some(2));

        // Two improvements, two saves
        assert_eq!(scores.repository().save_count(), 2);
        assert_eq!(scores.repository().scores().get("Hard"), Some(&2));
    }

    #[test]
    fn test_difficulties_are_independent() {
        let mut scores = BestScores::load(MemoryRepository::new());
        scores.record_win("Easy", 2);
        scores.record_win("Medium", 6);
        assert_eq!(scores.best_for("Easy"), Some(2));
        assert_eq!(scores.best_for("Medium"), Some(6));
        assert_eq!(scores.best_for("Hard"), None);
    }

    #[test]
    fn test_zero_attempts_ignored() {
        let mut scores = BestScores::load(MemoryRepository::new());
        assert!(!scores.record_win("Easy", 0).new_record);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_save_failure_is_a_warning() {
        let mut scores = BestScores::load(ReadOnlyRepository);
        let record = scores.record_win("Easy", 4);
        assert!(record.new_record);
        assert!(record.warning.is_some());
        assert_eq!(scores.best_for("Easy"), Some(4));
    }

    #[test]
    fn test_missing_and_corrupt_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();

        let missing = BestScores::load(JsonFileRepository::new(dir.path().join("none.json")));
        assert!(missing.is_empty());

        let corrupt_path = dir.path().join("corrupt.json");
        std::fs::write(&corrupt_path, "{\"Easy\": \"three\"").unwrap();
        let corrupt = BestScores::load(JsonFileRepository::new(&corrupt_path));
        assert!(corrupt.is_empty());
    }

    #[test]
    fn test_record_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut scores = BestScores::load(JsonFileRepository::new(&path));
        scores.record_win("Medium", 4);

        let reloaded = BestScores::load(JsonFileRepository::new(&path));
        assert_eq!(reloaded.best_for("Medium"), Some(4));
    }
}
