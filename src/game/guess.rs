//! Guess evaluation
//!
//! `submit_guess` is the only transition out of `InProgress`:
//! 1. Parse and range-check the raw text (errors leave the round untouched)
//! 2. Spend an attempt and compare against the secret
//! 3. Attach the parity hint on the halfway attempt
//! 4. Settle the round status

use super::state::{GameSession, RoundStatus};
use crate::difficulty::DifficultyProfile;
use crate::error::GuessError;

/// Comparison of a guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKind {
    Correct,
    /// Secret is higher than the guess
    TooLow,
    /// Secret is lower than the guess
    TooHigh,
}

/// Parity of the secret, revealed once per round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(value: u32) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessFeedback {
    pub kind: GuessKind,
    pub hint: Option<Parity>,
    pub attempts_used: u32,
    pub attempts_left: u32,
    pub status: RoundStatus,
}

/// Parse raw guess text against a profile's range.
///
/// Only a run of ASCII digits (surrounding whitespace ignored) is a number;
/// signs and decimals are invalid input. Digit strings too large for `u32`
/// are out of range rather than invalid.
pub fn parse_guess(raw: &str, profile: &DifficultyProfile) -> Result<u32, GuessError> {
    let text = raw.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GuessError::InvalidInput);
    }

    let out_of_range = GuessError::OutOfRange {
        low: profile.low,
        high: profile.high,
    };
    match text.parse::<u32>() {
        Ok(value) if profile.contains(value) => Ok(value),
        _ => Err(out_of_range),
    }
}

/// Evaluate one guess and advance the round
pub fn submit_guess(session: &mut GameSession, raw: &str) -> Result<GuessFeedback, GuessError> {
    if session.status.is_over() {
        return Err(GuessError::RoundOver);
    }

    let value = parse_guess(raw, &session.profile)?;

    session.attempts_used += 1;

    let kind = match value.cmp(&session.secret) {
        std::cmp::Ordering::Equal => GuessKind::Correct,
        std::cmp::Ordering::Less => GuessKind::TooLow,
        std::cmp::Ordering::Greater => GuessKind::TooHigh,
    };

    // Only misses carry the hint; a win on the halfway attempt ends the round
    let hint = (kind != GuessKind::Correct
        && session.attempts_used == session.profile.hint_attempt())
    .then(|| Parity::of(session.secret));

    session.status = if kind == GuessKind::Correct {
        RoundStatus::Won
    } else if session.attempts_left() == 0 {
        RoundStatus::Lost
    } else {
        RoundStatus::InProgress
    };

    log::debug!(
        "Guess {} -> {:?} ({} left, {:?})",
        value,
        kind,
        session.attempts_left(),
        session.status
    );

    Ok(GuessFeedback {
        kind,
        hint,
        attempts_used: session.attempts_used,
        attempts_left: session.attempts_left(),
        status: session.status,
    })
}
