use super::{ScoreMap, ScoreRepository};
use crate::error::StoreError;

/// Keeps the record in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    scores: ScoreMap,
    saves: usize,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores(scores: ScoreMap) -> Self {
        Self { scores, saves: 0 }
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn scores(&self) -> &ScoreMap {
        &self.scores
    }
}

impl ScoreRepository for MemoryRepository {
    fn load(&self) -> Result<ScoreMap, StoreError> {
        Ok(self.scores.clone())
    }

    fn save(&mut self, scores: &ScoreMap) -> Result<(), StoreError> {
        self.scores = scores.clone();
        self.saves += 1;
        Ok(())
    }
}
