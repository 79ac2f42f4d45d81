mod config;
mod error;
mod food;
mod frontend;
mod game;
mod geometry;
mod input;
mod logger;
mod snake;
mod term;

use anyhow::Context;
use clap::Parser;

use crate::config::Cli;
use crate::game::{Game, GameLoop};
use crate::term::{TermAudio, TermInput, TermRenderer};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config().context("invalid game settings")?;

    let log_file = cli.log_file();
    logger::init(&log_file, cli.log_level)
        .with_context(|| format!("cannot log to {}", log_file.display()))?;
    log::info!("Starting snake on a {:?} board", config.board);

    let mut renderer = TermRenderer::new(config.board);
    if let Err(e) = renderer.setup() {
        let _ = term::restore();
        return Err(e).context("cannot take over the terminal");
    }

    let result = GameLoop::new(Game::new(config), renderer, TermAudio::new(), TermInput).run();
    let restored = term::restore();

    log::info!("Exiting snake");
    result?;
    restored?;
    Ok(())
}
