use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use twenty48::GameConfig;

/// Slide tiles, merge equal pairs, reach 2048
#[derive(Parser, Debug, Default)]
#[command(name = "twenty48", version)]
pub struct Args {
    /// RON file with a game config, flags below override its fields
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of columns
    #[arg(long)]
    pub width: Option<usize>,

    /// Number of rows
    #[arg(long)]
    pub height: Option<usize>,

    /// How many moves can be undone
    #[arg(long)]
    pub history: Option<usize>,

    /// Title shown above the grid
    #[arg(long)]
    pub name: Option<String>,

    /// Seed for tile spawns, random if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file. Filtered with RUST_LOG, defaults to info
    #[arg(long)]
    pub log: Option<PathBuf>,
}

impl Args {
    pub fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                ron::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
            }
            None => GameConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(history) = self.history {
            config.history_size = history;
        }
        if let Some(name) = &self.name {
            config.name.clone_from(name);
        }
        config.validate()?;
        Ok(config)
    }
}
