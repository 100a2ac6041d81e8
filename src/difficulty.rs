//! Difficulty presets
//!
//! Three fixed profiles, each bundling a guess range and an attempt budget.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownDifficulty;

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Guess range and attempt budget for a difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub name: &'static str,
    /// Smallest possible secret (inclusive)
    pub low: u32,
    /// Largest possible secret (inclusive)
    pub high: u32,
    pub max_attempts: u32,
}

impl DifficultyProfile {
    /// Attempt count at which the parity hint is given (floor of half the budget)
    pub fn hint_attempt(&self) -> u32 {
        self.max_attempts / 2
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

impl Difficulty {
    /// All presets, in menu order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                name: self.as_str(),
                low: 1,
                high: 10,
                max_attempts: 6,
            },
            Difficulty::Medium => DifficultyProfile {
                name: self.as_str(),
                low: 1,
                high: 50,
                max_attempts: 7,
            },
            Difficulty::Hard => DifficultyProfile {
                name: self.as_str(),
                low: 1,
                high: 100,
                max_attempts: 8,
            },
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let easy = Difficulty::Easy.profile();
        assert_eq!((easy.low, easy.high, easy.max_attempts), (1, 10, 6));
        let medium = Difficulty::Medium.profile();
        assert_eq!((medium.low, medium.high, medium.max_attempts), (1, 50, 7));
        let hard = Difficulty::Hard.profile();
        assert_eq!((hard.low, hard.high, hard.max_attempts), (1, 100, 8));
    }

    #[test]
    fn test_hint_attempt_uses_floor() {
        assert_eq!(Difficulty::Easy.profile().hint_attempt(), 3);
        assert_eq!(Difficulty::Medium.profile().hint_attempt(), 3);
        assert_eq!(Difficulty::Hard.profile().hint_attempt(), 4);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" MEDIUM ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("med".parse::<Difficulty>().is_err());
        assert_eq!(
            "insane".parse::<Difficulty>(),
            Err(UnknownDifficulty("insane".to_string()))
        );
    }

    #[test]
    fn test_profile_name_matches_display() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.profile().name, difficulty.to_string());
        }
    }
}
