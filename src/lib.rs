//! Number Guess - guess the secret number before the attempts run out
//!
//! Core modules:
//! - `game`: Round state machine (secret, attempts, guess evaluation)
//! - `difficulty`: The three fixed difficulty presets
//! - `highscores`: Best (fewest attempts) win per difficulty
//! - `persistence`: Load/save boundary for the score record
//! - `app`: Presentation-facing facade tying a round to the score record
//! - `shell`: Line-oriented terminal front end

pub mod app;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod shell;

pub use app::{GuessGame, GuessReport};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use error::{GuessError, StoreError, UnknownDifficulty};
pub use game::{GameSession, GuessKind, Parity, RoundStatus};
pub use highscores::{BestScores, WinRecord};
pub use settings::Settings;

/// Well-known file locations (relative to the working directory)
pub mod consts {
    /// Best-score record
    pub const HIGHSCORE_FILE: &str = "number_guess_highscores.json";
    /// Optional player preferences
    pub const SETTINGS_FILE: &str = "number_guess_settings.json";
}
