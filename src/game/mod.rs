//! Round logic
//!
//! Everything that decides the outcome of a guess lives here. A round is an
//! explicit `GameSession` value; nothing here touches storage or the terminal.

pub mod guess;
pub mod secret;
pub mod state;

pub use guess::{GuessFeedback, GuessKind, Parity, parse_guess, submit_guess};
pub use secret::{FixedSecret, RandomSecret, SecretSource};
pub use state::{GameSession, RoundStatus};
