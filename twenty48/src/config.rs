use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use twenty48_types::{Grid, GridError};

pub const DEFAULT_NAME: &str = "2048";
pub const DEFAULT_WIDTH: usize = 4;
pub const DEFAULT_HEIGHT: usize = 4;
pub const DEFAULT_HISTORY_SIZE: usize = 10;

#[derive(Debug, Clone, Display, Error, From)]
pub enum ConfigError {
    #[display("invalid grid: {_0}")]
    #[from]
    Grid(#[error(source)] GridError),
    #[display("grid is {width}x{height} but the game is configured for {expected_width}x{expected_height}")]
    GridMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
}

/// Parameters fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub history_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_owned(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.empty_grid().map(drop)
    }

    pub fn empty_grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.width, self.height)?)
    }

    /// Rejects grids whose dimensions differ from the configured ones.
    pub fn check_grid(&self, grid: &Grid) -> Result<(), ConfigError> {
        if grid.width() != self.width || grid.height() != self.height {
            return Err(ConfigError::GridMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: grid.width(),
                height: grid.height(),
            });
        }
        Ok(())
    }
}
