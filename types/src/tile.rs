use std::fmt;

use rand::Rng;

/// Largest exponent a tile can carry, i.e. the highest tile is `2^20`.
pub const MAX_EXPONENT: u8 = 20;
pub const NUM_TILES: usize = MAX_EXPONENT as usize + 1;

/// A single cell value, stored as its base 2 exponent.
/// Exponent 0 is the empty cell, so `Tile(1)` is a 2, `Tile(2)` a 4 and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Tile(u8);

impl Tile {
    pub const EMPTY: Self = Self(0);
    pub const TWO: Self = Self(1);
    pub const FOUR: Self = Self(2);
    pub const MAX: Self = Self(MAX_EXPONENT);

    /// Chance that a freshly spawned tile is a 4 instead of a 2.
    pub const FOUR_PROBABILITY: f64 = 0.2;

    #[must_use]
    pub const fn from_exponent(exponent: u8) -> Option<Self> {
        if exponent <= MAX_EXPONENT {
            Some(Self(exponent))
        } else {
            None
        }
    }

    /// Parses a displayed value. Only 0 and powers of two up to `2^20` are legal.
    #[must_use]
    pub const fn from_value(value: u32) -> Option<Self> {
        if value == 0 {
            return Some(Self::EMPTY);
        }
        if value == 1 || !value.is_power_of_two() {
            return None;
        }
        // trailing zeros of a power of two is its exponent, which fits in a u8
        Self::from_exponent(value.trailing_zeros() as u8)
    }

    #[must_use]
    #[inline(always)]
    pub const fn exponent(self) -> u8 {
        self.0
    }

    #[must_use]
    #[inline(always)]
    pub const fn value(self) -> u32 {
        if self.0 == 0 {
            0
        } else {
            1 << self.0
        }
    }

    #[must_use]
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The tile two copies of `self` combine into.
    /// Returns `None` for empty cells and for the maximum tile, which never combines.
    #[must_use]
    pub const fn merged(self) -> Option<Self> {
        if self.0 == 0 || self.0 >= MAX_EXPONENT {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    /// Draws the value of a newly spawned tile: 2 most of the time, 4 otherwise.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen::<f64>() >= 1.0 - Self::FOUR_PROBABILITY {
            Self::FOUR
        } else {
            Self::TWO
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn legal_values() {
        assert_eq!(Tile::from_value(0), Some(Tile::EMPTY));
        assert_eq!(Tile::from_value(2), Some(Tile::TWO));
        assert_eq!(Tile::from_value(1 << 20), Some(Tile::MAX));
        assert_eq!(Tile::from_value(1 << 21), None);
        assert_eq!(Tile::from_value(3), None);
        assert_eq!(Tile::from_value(6), None);
        // 2^0 is not a tile value
        assert_eq!(Tile::from_value(1), None);
        for exponent in 0..=MAX_EXPONENT {
            let tile = Tile::from_exponent(exponent).unwrap();
            assert_eq!(Tile::from_value(tile.value()), Some(tile));
        }
        assert_eq!(Tile::from_exponent(MAX_EXPONENT + 1), None);
    }

    #[test]
    fn merging() {
        assert_eq!(Tile::TWO.merged(), Some(Tile::FOUR));
        assert_eq!(Tile::EMPTY.merged(), None);
        assert_eq!(Tile::MAX.merged(), None);
        assert_eq!(
            Tile::from_value(1024).and_then(Tile::merged).map(Tile::value),
            Some(2048)
        );
    }

    #[test]
    fn spawn_distribution() {
        let mut rng = StdRng::seed_from_u64(7);
        let fours = (0..10_000)
            .map(|_| Tile::random(&mut rng))
            .inspect(|t| assert!(*t == Tile::TWO || *t == Tile::FOUR))
            .filter(|t| *t == Tile::FOUR)
            .count();
        assert!((1_700..2_300).contains(&fours), "{fours} fours out of 10000");
    }
}
