use serde::{Deserialize, Serialize};
use twenty48_types::Direction;

use crate::{
    config::{ConfigError, GameConfig},
    game::Game,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Slide(Direction),
    Undo,
    Restart,
}

/// Everything needed to rebuild a game: its seed and the actions taken since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub seed: u64,
    pub actions: Vec<Action>,
}

impl Record {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn game_with_record(&self, config: GameConfig) -> Result<Game, ConfigError> {
        let mut game = Game::new_with_seed(config, self.seed)?;
        for action in &self.actions {
            game.apply(*action);
        }
        Ok(game)
    }
}
