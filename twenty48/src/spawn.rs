use rand::{seq::IteratorRandom, Rng};
use twenty48_types::{Grid, Tile};

/// Places a random tile on a uniformly chosen empty cell.
/// Returns the cell and the tile, or `None` when the grid is full.
pub fn spawn<R: Rng>(grid: &mut Grid, rng: &mut R) -> Option<(usize, Tile)> {
    let idx = grid.empty_cells().choose(rng)?;
    let tile = Tile::random(rng);
    grid.set(idx, tile);
    Some((idx, tile))
}
