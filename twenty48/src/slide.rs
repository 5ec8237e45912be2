use smallvec::SmallVec;
use twenty48_types::{Direction, Grid, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideValue {
    pub tile: Tile,
    pub combined: bool,
}

/// Tiles already placed along the line being compacted, nearest the target edge first.
#[derive(Debug, Default)]
pub struct SlideStack {
    values: SmallVec<SlideValue, 8>,
}

impl SlideStack {
    /// Places the next tile of the line.
    /// Combines with the top of the stack when both are equal and the top has not combined yet.
    pub fn push(&mut self, tile: Tile) {
        if tile.is_empty() {
            return;
        }
        if let Some(top) = self.values.last_mut() {
            if !top.combined && top.tile == tile {
                if let Some(merged) = tile.merged() {
                    *top = SlideValue {
                        tile: merged,
                        combined: true,
                    };
                    return;
                }
            }
        }
        self.values.push(SlideValue {
            tile,
            combined: false,
        });
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.values.iter().map(|v| v.tile)
    }
}

/// Computes the grid after sliding every line towards `direction`.
/// Does not spawn anything, the result may be equal to `grid`.
#[must_use]
pub fn slide(grid: &Grid, direction: Direction) -> Grid {
    let mut next = grid.clone();
    next.clear();
    let mut stack = SlideStack::default();
    for line in 0..grid.line_count(direction) {
        stack.clear();
        grid.line(direction, line).for_each(|t| stack.push(t));
        for (pos, tile) in stack.tiles().enumerate() {
            next.set(next.cell_index(direction, line, pos), tile);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use twenty48_types::ALL_DIRECTIONS;

    fn slid_row(row: &[u32], direction: Direction) -> Vec<u32> {
        let grid = Grid::from_values(row.len(), 1, row).unwrap();
        slide(&grid, direction).values()
    }

    #[test]
    fn pair_merge_from_leading_edge() {
        assert_eq!(slid_row(&[2, 2, 4, 0], Direction::Left), vec![4, 4, 0, 0]);
        assert_eq!(slid_row(&[0, 0, 2, 2], Direction::Right), vec![0, 0, 0, 4]);
        assert_eq!(slid_row(&[2, 2, 2, 0], Direction::Left), vec![4, 2, 0, 0]);
        assert_eq!(slid_row(&[2, 2, 2, 0], Direction::Right), vec![0, 0, 2, 4]);
    }

    #[test]
    fn no_chain_merge() {
        assert_eq!(slid_row(&[2, 2, 2, 2], Direction::Left), vec![4, 4, 0, 0]);
        assert_eq!(slid_row(&[4, 2, 2, 0], Direction::Left), vec![4, 4, 0, 0]);
        assert_eq!(slid_row(&[8, 0, 4, 4], Direction::Left), vec![8, 8, 0, 0]);
    }

    #[test]
    fn gaps_are_skipped() {
        assert_eq!(slid_row(&[2, 0, 0, 2], Direction::Left), vec![4, 0, 0, 0]);
        assert_eq!(slid_row(&[0, 4, 0, 8], Direction::Left), vec![4, 8, 0, 0]);
        assert_eq!(slid_row(&[2, 4, 8, 16], Direction::Left), vec![2, 4, 8, 16]);
    }

    #[test]
    fn max_tiles_stay_apart() {
        let max = Tile::MAX.value();
        assert_eq!(slid_row(&[max, max, 0, 0], Direction::Left), vec![max, max, 0, 0]);
        assert_eq!(slid_row(&[0, max, 0, max], Direction::Left), vec![max, max, 0, 0]);
    }

    #[test]
    fn columns() {
        #[rustfmt::skip]
        let grid = Grid::from_values(4, 4, &[
            2, 0, 0, 0,
            2, 4, 0, 0,
            0, 4, 0, 0,
            4, 0, 0, 2,
        ])
        .unwrap();
        #[rustfmt::skip]
        let up = vec![
            4, 8, 0, 2,
            4, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ];
        #[rustfmt::skip]
        let down = vec![
            0, 0, 0, 0,
            0, 0, 0, 0,
            4, 0, 0, 0,
            4, 8, 0, 2,
        ];
        assert_eq!(slide(&grid, Direction::Up).values(), up);
        assert_eq!(slide(&grid, Direction::Down).values(), down);
    }

    #[test]
    fn merges_preserve_sum() {
        #[rustfmt::skip]
        let grid = Grid::from_values(4, 4, &[
            2, 2, 4, 8,
            0, 4, 4, 4,
            16, 0, 16, 2,
            2, 2, 2, 2,
        ])
        .unwrap();
        for direction in ALL_DIRECTIONS {
            assert_eq!(slide(&grid, direction).tile_sum(), grid.tile_sum());
        }
    }

    #[test]
    fn empty_grid_is_unchanged() {
        let grid = Grid::new(4, 4).unwrap();
        for direction in ALL_DIRECTIONS {
            assert_eq!(slide(&grid, direction), grid);
        }
    }
}
