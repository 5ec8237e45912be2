use std::{fs::File, path::Path, sync::Mutex};

use anyhow::Context;
use app::App;
use args::Args;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod app;
pub mod args;
pub mod board;
pub mod input;
pub mod popup;
pub mod seed_input;
pub mod status;

fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log {
        init_tracing(path)?;
    }
    let config = args.game_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(?config, seed, "starting");

    let app = App::new(config, seed)?;
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    Ok(result?)
}
