use std::fmt;

use derive_more::{Display, Error};
use itertools::Itertools;

use crate::{direction::Direction, tile::Tile};

/// Upper bound on `width * height`, far beyond anything playable.
pub const MAX_CELLS: usize = 1 << 16;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    #[display("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[display("a {width}x{height} grid has more than {} cells", MAX_CELLS)]
    TooLarge { width: usize, height: usize },
    #[display("expected {expected} cells, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[display("{value} at cell {index} is not a legal tile value")]
    IllegalValue { index: usize, value: u32 },
}

/// Row-major board of `width * height` tiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Creates an all-empty grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Tile::EMPTY; len],
        })
    }

    pub fn from_tiles(width: usize, height: usize, cells: Vec<Tile>) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        if cells.len() != grid.cells.len() {
            return Err(GridError::WrongLength {
                expected: grid.cells.len(),
                actual: cells.len(),
            });
        }
        grid.cells = cells;
        Ok(grid)
    }

    /// Builds a grid from displayed values, rejecting anything that is not a legal tile.
    pub fn from_values(width: usize, height: usize, values: &[u32]) -> Result<Self, GridError> {
        let cells = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                Tile::from_value(value).ok_or(GridError::IllegalValue { index, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_tiles(width, height, cells)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.cells.iter().map(|t| t.value()).collect()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.cells.get(index).copied()
    }

    /// Panics if `index` is outside the grid.
    pub fn set(&mut self, index: usize, tile: Tile) {
        self.cells[index] = tile;
    }

    pub fn clear(&mut self) {
        self.cells.fill(Tile::EMPTY);
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// Sum of all displayed tile values.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|t| u64::from(t.value())).sum()
    }

    /// Indices of all empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, t)| t.is_empty().then_some(idx))
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|t| !t.is_empty()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|t| t.is_empty())
    }

    /// Number of lines a slide in `direction` compacts.
    #[must_use]
    pub fn line_count(&self, direction: Direction) -> usize {
        if direction.is_horizontal() {
            self.height
        } else {
            self.width
        }
    }

    /// Number of cells in each line a slide in `direction` compacts.
    #[must_use]
    pub fn line_len(&self, direction: Direction) -> usize {
        if direction.is_horizontal() {
            self.width
        } else {
            self.height
        }
    }

    /// Maps a position along a line to a cell index.
    /// Position 0 is the cell at the edge tiles move towards.
    #[must_use]
    pub fn cell_index(&self, direction: Direction, line: usize, pos: usize) -> usize {
        let (w, h) = (self.width, self.height);
        match direction {
            Direction::Left => line * w + pos,
            Direction::Right => line * w + (w - 1 - pos),
            Direction::Up => pos * w + line,
            Direction::Down => (h - 1 - pos) * w + line,
        }
    }

    /// Tiles of one line, ordered from the target edge outwards.
    pub fn line(&self, direction: Direction, line: usize) -> impl Iterator<Item = Tile> + '_ {
        (0..self.line_len(direction))
            .map(move |pos| self.cells[self.cell_index(direction, line, pos)])
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = (0..self.height)
            .map(|r| {
                self.row(r)
                    .iter()
                    .map(|t| {
                        if t.is_empty() {
                            format!("{:>7}", ".")
                        } else {
                            format!("{t:>7}")
                        }
                    })
                    .join("")
            })
            .join("\n");
        f.write_str(&rows)
    }
}
