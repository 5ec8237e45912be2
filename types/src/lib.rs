pub mod direction;
pub mod grid;
pub mod tile;

pub use direction::*;
pub use grid::*;
pub use tile::*;
