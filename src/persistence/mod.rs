//! Load/save boundary for the best-score record
//!
//! Game code only sees `ScoreRepository`; backends:
//! - `JsonFileRepository`: pretty JSON object on disk, written via a temp file
//! - `MemoryRepository`: in-process map

pub mod json_file;
pub mod memory;

use std::collections::BTreeMap;

use crate::error::StoreError;

pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;

/// Difficulty name -> fewest attempts in a won round
pub type ScoreMap = BTreeMap<String, u32>;

/// Durable storage for the score record
pub trait ScoreRepository {
    /// Read the full record
    fn load(&self) -> Result<ScoreMap, StoreError>;

    /// Replace the stored record with `scores`
    fn save(&mut self, scores: &ScoreMap) -> Result<(), StoreError>;
}
