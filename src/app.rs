//! Presentation-facing game facade
//!
//! Front ends drive play through `GuessGame` only: pick a difficulty, submit
//! raw text, read back a `GuessReport`. Wins flow into the best-score record.

use crate::difficulty::Difficulty;
use crate::error::{GuessError, StoreError, UnknownDifficulty};
use crate::game::{GameSession, GuessKind, Parity, RoundStatus, SecretSource, submit_guess};
use crate::highscores::BestScores;
use crate::persistence::ScoreRepository;

/// Everything a front end needs to render after a guess
#[derive(Debug)]
pub struct GuessReport {
    /// Comparison result, or why the text was rejected
    pub outcome: Result<GuessKind, GuessError>,
    pub hint: Option<Parity>,
    pub attempts_left: u32,
    pub status: RoundStatus,
    /// Set when this guess won the round with a new best score
    pub new_record: bool,
    /// Best score could not be saved
    pub warning: Option<StoreError>,
}

/// One player, one round at a time
pub struct GuessGame<R: ScoreRepository, S: SecretSource> {
    difficulty: Difficulty,
    session: GameSession,
    source: S,
    scores: BestScores<R>,
}

impl<R: ScoreRepository, S: SecretSource> GuessGame<R, S> {
    /// Create the game and start a first round at `difficulty`
    pub fn new(difficulty: Difficulty, scores: BestScores<R>, mut source: S) -> Self {
        let session = GameSession::new(difficulty.profile(), &mut source);
        Self {
            difficulty,
            session,
            source,
            scores,
        }
    }

    /// Switch to the named difficulty and start a new round
    pub fn start(&mut self, profile_name: &str) -> Result<&GameSession, UnknownDifficulty> {
        let difficulty = profile_name.parse()?;
        Ok(self.start_difficulty(difficulty))
    }

    pub fn start_difficulty(&mut self, difficulty: Difficulty) -> &GameSession {
        self.difficulty = difficulty;
        self.restart()
    }

    /// New round at the current difficulty
    pub fn restart(&mut self) -> &GameSession {
        self.session = GameSession::new(self.difficulty.profile(), &mut self.source);
        &self.session
    }

    pub fn submit_guess(&mut self, raw: &str) -> GuessReport {
        let result = submit_guess(&mut self.session, raw);

        let (mut new_record, mut warning) = (false, None);
        if let Ok(feedback) = &result {
            if feedback.status == RoundStatus::Won {
                let record = self
                    .scores
                    .record_win(self.difficulty.as_str(), feedback.attempts_used);
                new_record = record.new_record;
                warning = record.warning;
            }
        }

        GuessReport {
            hint: result.as_ref().ok().and_then(|fb| fb.hint),
            outcome: result.map(|fb| fb.kind),
            attempts_left: self.session.attempts_left(),
            status: self.session.status(),
            new_record,
            warning,
        }
    }

    /// Best score for a difficulty name (case-insensitive for known presets)
    pub fn best_for(&self, profile_name: &str) -> Option<u32> {
        match profile_name.parse::<Difficulty>() {
            Ok(difficulty) => self.scores.best_for(difficulty.as_str()),
            Err(_) => self.scores.best_for(profile_name),
        }
    }

    pub fn current_best(&self) -> Option<u32> {
        self.scores.best_for(self.difficulty.as_str())
    }

    /// The secret, once the round is over
    pub fn revealed_secret(&self) -> Option<u32> {
        self.session
            .status()
            .is_over()
            .then(|| self.session.secret())
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn scores(&self) -> &BestScores<R> {
        &self.scores
    }
}
