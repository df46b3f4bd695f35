use itertools::Itertools;
use strum::VariantArray;

use crate::location::{Dimension, Location};

/// One orthogonal step between neighboring cells on a rectangular board.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    /// Attempt the step from `location` in the direction specified by `self`
    /// and return the resultant [`Location`].
    ///
    /// Steps off the top or left edge wrap below zero; callers are expected
    /// to bounds-filter the result.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }
}

/// All in-bounds orthogonal neighbors of `location` on a board of the given
/// dimensions, at most four.
pub fn neighbors(location: Location, dims: (Dimension, Dimension)) -> Vec<Location> {
    Step::VARIANTS
        .iter()
        .map(|dir| dir.attempt_from(location))
        .filter(|loc| loc.in_bounds(dims))
        .collect_vec()
}
