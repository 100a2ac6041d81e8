//! Terminal front end
//!
//! Line-oriented stand-in for a game window. Each input line is either a
//! command or a guess; replies are plain text lines.

use std::io::{self, BufRead, Write};

use crate::app::{GuessGame, GuessReport};
use crate::difficulty::Difficulty;
use crate::error::GuessError;
use crate::game::{GuessKind, RoundStatus, SecretSource};
use crate::persistence::ScoreRepository;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Select(Difficulty),
    PlayAgain,
    Best,
    Help,
    Quit,
}

impl Command {
    /// Anything that is not a known command is treated as a guess
    pub fn parse(line: &str) -> Self {
        let word = line.trim();
        match word.to_lowercase().as_str() {
            "new" | "again" | "play again" => Command::PlayAgain,
            "best" => Command::Best,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => match word.parse::<Difficulty>() {
                Ok(difficulty) => Command::Select(difficulty),
                Err(_) => Command::Guess(word.to_string()),
            },
        }
    }
}

/// Lines to print and whether to stop
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }
}

const HELP: &str = "Enter a number to guess. Commands: easy, medium, hard, new, best, help, quit";

pub fn best_line(difficulty: Difficulty, best: Option<u32>) -> String {
    match best {
        Some(best) => format!("Best score for {}: {} attempt(s)", difficulty, best),
        None => format!("No high score yet for {} difficulty.", difficulty),
    }
}

pub struct Shell<R: ScoreRepository, S: SecretSource> {
    game: GuessGame<R, S>,
}

impl<R: ScoreRepository, S: SecretSource> Shell<R, S> {
    pub fn new(game: GuessGame<R, S>) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &GuessGame<R, S> {
        &self.game
    }

    /// Round banner: range, budget and best score
    pub fn intro(&self) -> Vec<String> {
        let session = self.game.session();
        let profile = session.profile();
        vec![
            format!("Difficulty: {}", self.game.difficulty()),
            format!(
                "I'm thinking of a number between {} and {}.",
                profile.low, profile.high
            ),
            format!("Attempts left: {}", session.attempts_left()),
            best_line(self.game.difficulty(), self.game.current_best()),
        ]
    }

    pub fn handle(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Command::Quit => Reply {
                lines: vec!["Goodbye!".to_string()],
                quit: true,
            },
            Command::Help => Reply::lines(vec![HELP.to_string()]),
            Command::Best => Reply::lines(vec![best_line(
                self.game.difficulty(),
                self.game.current_best(),
            )]),
            Command::Select(difficulty) => {
                self.game.start_difficulty(difficulty);
                Reply::lines(self.intro())
            }
            Command::PlayAgain => {
                self.game.restart();
                Reply::lines(self.intro())
            }
            Command::Guess(text) => {
                let report = self.game.submit_guess(&text);
                Reply::lines(self.render(&report))
            }
        }
    }

    fn render(&self, report: &GuessReport) -> Vec<String> {
        let kind = match &report.outcome {
            Ok(kind) => *kind,
            Err(GuessError::RoundOver) => {
                return vec!["The round is over. Type 'new' to play again.".to_string()];
            }
            Err(e) => return vec![capitalize(&e.to_string()) + "."],
        };

        let mut lines = Vec::new();
        match kind {
            GuessKind::Correct => {
                lines.push(format!(
                    "You won in {} attempts!",
                    self.game.session().attempts_used()
                ));
                if report.new_record {
                    lines.push(format!("New high score for {}!", self.game.difficulty()));
                }
                if let Some(warning) = &report.warning {
                    lines.push(format!("Failed to save highscores: {}", warning));
                }
            }
            GuessKind::TooLow | GuessKind::TooHigh => {
                let mut line = if kind == GuessKind::TooLow {
                    "Too low ▲".to_string()
                } else {
                    "Too high ▼".to_string()
                };
                if let Some(parity) = report.hint {
                    line.push_str(&format!(" | Hint: The number is {}.", parity.as_str()));
                }
                lines.push(line);
                lines.push(format!("Attempts left: {}", report.attempts_left));
            }
        }

        if report.status == RoundStatus::Lost {
            if let Some(secret) = self.game.revealed_secret() {
                lines.push(format!("Out of attempts! The number was {}.", secret));
            }
        }
        if report.status.is_over() {
            lines.push(best_line(self.game.difficulty(), self.game.current_best()));
            lines.push("Type 'new' to play again.".to_string());
        }
        lines
    }

    /// Read lines from `input` until it ends or the player quits
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        writeln!(output, "{}", HELP)?;
        for line in self.intro() {
            writeln!(output, "{}", line)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        // Bytes rather than `lines()`: bad UTF-8 is just an invalid guess
        for line in input.split(b'\n') {
            let reply = self.handle(&String::from_utf8_lossy(&line?));
            for line in &reply.lines {
                writeln!(output, "{}", line)?;
            }
            if reply.quit {
                return Ok(());
            }
            write!(output, "> ")?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
