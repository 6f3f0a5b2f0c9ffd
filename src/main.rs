//! Plays one game on the classic board and prints the transcript.
//!
//! Logging goes to stderr and is quiet by default; set `RUST_LOG=debug`
//! to see every turn as a structured event. `SNAKES_SEED` replays a game.

use std::process::ExitCode;

use snakes_ladders::GameConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "game aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> snakes_ladders::Result<()> {
    let config = GameConfig::from_env()?;
    let mut game = config.build()?;

    println!("--- Game Started! Target: {} ---", game.win_score());
    let result = game.play_with(|turn| println!("{turn}"))?;
    println!("\n{result}");

    Ok(())
}
