//! Number Guess entry point
//!
//! Loads settings and best scores, then runs the terminal shell on stdin.

use number_guess::consts::SETTINGS_FILE;
use number_guess::game::RandomSecret;
use number_guess::persistence::JsonFileRepository;
use number_guess::shell::Shell;
use number_guess::{BestScores, GuessGame, Settings};

fn main() {
    env_logger::init();
    log::info!("Number Guess starting...");

    let settings = Settings::load(SETTINGS_FILE);
    let scores = BestScores::load(JsonFileRepository::new(&settings.score_file));
    let source = RandomSecret::from_entropy();
    log::debug!("Secret seed: {}", source.seed());

    let mut shell = Shell::new(GuessGame::new(settings.difficulty, scores, source));

    let stdin = std::io::stdin();
    if let Err(e) = shell.run(stdin.lock(), std::io::stdout()) {
        log::error!("Terminal I/O failed: {}", e);
        std::process::exit(1);
    }
}
