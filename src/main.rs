//! Solo Pong entry point
//!
//! Initializes logging, builds the game, and hands it to the terminal
//! backend. Host failure is fatal: log and exit nonzero.

use solo_pong::{Game, tui};

fn main() {
    env_logger::init();
    log::info!("Solo Pong starting...");

    let mut game = Game::new();
    if let Err(e) = tui::run(&mut game) {
        log::error!("terminal backend failed: {e}");
        std::process::exit(1);
    }

    log::info!(
        "session over, high score {}",
        game.state().high_score
    );
}
