//! Round state
//!
//! A `GameSession` is created for every round and replaced when the player
//! restarts or switches difficulty.

use super::secret::SecretSource;
use crate::difficulty::DifficultyProfile;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Waiting for guesses
    InProgress,
    /// Secret was guessed (terminal)
    Won,
    /// Attempt budget exhausted (terminal)
    Lost,
}

impl RoundStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// One round of play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(super) profile: DifficultyProfile,
    pub(super) secret: u32,
    pub(super) attempts_used: u32,
    pub(super) status: RoundStatus,
}

impl GameSession {
    /// Start a round, drawing the secret from `source`
    pub fn new(profile: DifficultyProfile, source: &mut impl SecretSource) -> Self {
        let secret = source.draw(profile.low, profile.high);
        log::debug!(
            "New {} round ({}-{}, {} attempts)",
            profile.name,
            profile.low,
            profile.high,
            profile.max_attempts
        );
        Self {
            profile,
            secret,
            attempts_used: 0,
            status: RoundStatus::InProgress,
        }
    }

    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Remaining budget; always `max_attempts - attempts_used`
    pub fn attempts_left(&self) -> u32 {
        self.profile.max_attempts.saturating_sub(self.attempts_used)
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }
}
