use std::num::NonZero;
use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};
use thiserror::Error;
use unordered_pair::UnorderedPair;

use crate::affiliation::AffiliationID;
use crate::board::Board;
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum BuilderInvalidReason {
    /// A terminus was placed outside the bounds specified by `dims` on a builder.
    #[error("feature out of bounds")]
    FeatureOutOfBounds,
    /// Two termini were placed on the same cell. This covers both a pair
    /// whose two locations coincide and two colors sharing a cell.
    #[error("terminus collision at {0}")]
    TerminusCollision(Location),
    /// A board definition declared a zero width or height.
    #[error("board dimensions must be nonzero")]
    EmptyDimension,
}

/// A builder for rectangular boards.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save
/// their state at some point.
#[derive(Clone)]
pub struct BoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    termini: Array2<Option<AffiliationID>>,
    pairs: Vec<UnorderedPair<Location>>,
    affiliation_displays: Vec<char>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(5).unwrap(), NonZero::new(5).unwrap()))
    }
}

impl BoardBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(x, y)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            termini: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), || None),

            pairs: Default::default(),
            affiliation_displays: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    /// Add termini or "flow endpoints". The order in which `locations` are
    /// specified does not matter; the new color's ID is the number of pairs
    /// added before it.
    ///
    /// May cause the builder to enter a
    /// [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid
    /// state if either location is out of bounds, or a
    /// [`TerminusCollision`](BuilderInvalidReason::TerminusCollision) invalid
    /// state if either location already carries a terminus.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_termini(&mut self, display: char, locations: (Location, Location)) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        for location in [locations.0, locations.1] {
            if !location.in_bounds(self.dims) {
                self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
                return self;
            }
        }

        if locations.0 == locations.1 {
            self.invalid_reasons.push(BuilderInvalidReason::TerminusCollision(locations.0));
            return self;
        }

        let aff = self.pairs.len();
        for location in [locations.0, locations.1] {
            if self.termini.get(location.as_index()).copied().flatten().is_some() {
                self.invalid_reasons.push(BuilderInvalidReason::TerminusCollision(location));
                return self;
            }
            self.termini.index_mut(location.as_index()).assign_elem(Some(aff));
        }

        self.affiliation_displays.push(display);
        self.pairs.push(UnorderedPair::from(locations));

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`]
    /// condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(self.invalid_reasons.clone());
        }

        Ok(Board {
            dims: self.dims,
            pairs: self.pairs.clone(),
            termini: self.termini.clone(),
            affiliation_displays: self.affiliation_displays.clone(),
        })
    }
}
