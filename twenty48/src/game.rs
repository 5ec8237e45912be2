use enum_map::EnumMap;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};
use twenty48_types::{Direction, Grid, ALL_DIRECTIONS};

use crate::{
    config::{ConfigError, GameConfig},
    history::History,
    record::Action,
    slide::slide,
    spawn::spawn,
};

/// A running game: the current grid, the grids it can be undone to,
/// and the random source new tiles are drawn from.
pub struct Game<R = StdRng> {
    config: GameConfig,
    grid: Grid,
    history: History,
    tile_sum: u64,
    slides: EnumMap<Direction, u32>,
    rng: R,
}

impl Game<StdRng> {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Starts a game with a single spawned tile.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        let grid = config.empty_grid()?;
        let mut game = Self::from_grid(config, grid, rng)?;
        game.restart();
        Ok(game)
    }

    /// Starts a game on `grid` as is, without spawning anything.
    pub fn from_grid(config: GameConfig, grid: Grid, rng: R) -> Result<Self, ConfigError> {
        config.check_grid(&grid)?;
        let tile_sum = grid.tile_sum();
        Ok(Self {
            history: History::new(config.history_size),
            config,
            grid,
            tile_sum,
            slides: EnumMap::default(),
            rng,
        })
    }

    /// Slides every line towards `direction`.
    /// Only a move that changes the grid spawns a tile and is recorded for undo.
    /// Returns whether the grid changed.
    pub fn slide(&mut self, direction: Direction) -> bool {
        let mut next = slide(&self.grid, direction);
        if next == self.grid {
            trace!(%direction, "slide did not change the grid");
            return false;
        }
        if let Some((idx, tile)) = spawn(&mut next, &mut self.rng) {
            trace!(idx, %tile, "spawned tile");
        }
        let previous = std::mem::replace(&mut self.grid, next);
        self.history.push(previous);
        self.slides[direction] += 1;
        self.on_grid_change();
        debug!(%direction, tile_sum = self.tile_sum, history = self.history.len(), "slide");
        true
    }

    /// Restores the most recent grid from history. Does nothing when history is empty.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            trace!("nothing to undo");
            return false;
        };
        self.grid = previous;
        self.on_grid_change();
        debug!(tile_sum = self.tile_sum, history = self.history.len(), "undo");
        true
    }

    /// Clears the grid and history and spawns one tile.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.history.clear();
        self.slides = EnumMap::default();
        spawn(&mut self.grid, &mut self.rng);
        self.on_grid_change();
        debug!(tile_sum = self.tile_sum, "restart");
    }

    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Slide(direction) => self.slide(direction),
            Action::Undo => self.undo(),
            Action::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Whether any direction would still change the grid.
    #[must_use]
    pub fn has_moves(&self) -> bool {
        ALL_DIRECTIONS
            .iter()
            .any(|&direction| slide(&self.grid, direction) != self.grid)
    }

    fn on_grid_change(&mut self) {
        self.tile_sum = self.grid.tile_sum();
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.tile_sum
    }

    /// Successful slides per direction since the last restart.
    #[must_use]
    pub fn slides(&self) -> &EnumMap<Direction, u32> {
        &self.slides
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }
}
