use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use unordered_pair::UnorderedPair;

use crate::affiliation::AffiliationID;
use crate::builder::{BoardBuilder, BuilderInvalidReason};
use crate::location::{Coord, Dimension, Location};

/// The serializable record a board is authored as: dimensions plus an ordered
/// list of terminus pairs in `[x, y]` coordinates. The color ID of a pair is
/// its index in `pairs`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoardDef {
    /// Board width in cells.
    pub width: Coord,
    /// Board height in cells.
    pub height: Coord,
    /// Terminus pairs, one per color, in color-ID order.
    pub pairs: Vec<(Location, Location)>,
}

/// A playable board: dimensions and a fixed set of colored terminus pairs.
///
/// [`Board`]s should be built from a [`BoardDef`] via [`Board::from_def`] or
/// assembled with a [`BoardBuilder`]; both reject malformed authored data
/// (out-of-bounds or colliding termini) instead of panicking.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) pairs: Vec<UnorderedPair<Location>>,
    // derived terminus index: cell -> owning color
    pub(crate) termini: Array2<Option<AffiliationID>>,
    pub(crate) affiliation_displays: Vec<char>,
}

impl Board {
    /// Build a board from its serializable definition, assigning display
    /// characters `'A'..` in color order.
    pub fn from_def(def: &BoardDef) -> Result<Board, Vec<BuilderInvalidReason>> {
        let (Some(width), Some(height)) = (NonZero::new(def.width), NonZero::new(def.height)) else {
            return Err(vec![BuilderInvalidReason::EmptyDimension]);
        };

        let mut builder = BoardBuilder::with_dims((width, height));
        for (aff, pair) in def.pairs.iter().enumerate() {
            builder.add_termini(display_for(aff), *pair);
        }
        builder.build()
    }

    /// Board width in cells.
    pub fn width(&self) -> Coord {
        self.dims.0.get()
    }

    /// Board height in cells.
    pub fn height(&self) -> Coord {
        self.dims.1.get()
    }

    pub(crate) fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Number of colors on the board.
    pub fn num_affiliations(&self) -> usize {
        self.pairs.len()
    }

    /// Whether `at` lies on the board.
    pub fn contains(&self, at: Location) -> bool {
        at.in_bounds(self.dims)
    }

    /// The color owning a terminus at `at`, if there is one.
    pub fn endpoint_at(&self, at: Location) -> Option<AffiliationID> {
        self.termini.get(at.as_index()).copied().flatten()
    }

    /// The terminus pair of `affiliation`, if the board has that color.
    pub fn endpoints_of(&self, affiliation: AffiliationID) -> Option<UnorderedPair<Location>> {
        self.pairs.get(affiliation).copied()
    }

    /// The terminus of `affiliation` opposite to `from`.
    ///
    /// `from` is expected to be one of the pair; if it is neither, the first
    /// terminus is returned.
    pub fn other_endpoint(&self, affiliation: AffiliationID, from: Location) -> Option<Location> {
        self.pairs
            .get(affiliation)
            .map(|pair| if pair.0 == from { pair.1 } else { pair.0 })
    }

    /// The display character of `affiliation`, or `'?'` for an unknown color.
    pub fn display_of(&self, affiliation: AffiliationID) -> char {
        self.affiliation_displays.get(affiliation).copied().unwrap_or('?')
    }
}

/// Display character for color `aff`: `'A'` onward, wrapping after 26.
fn display_for(aff: AffiliationID) -> char {
    (b'A' + (aff % 26) as u8) as char
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let glyph = match self.endpoint_at(Location(x, y)) {
                    Some(aff) => self.display_of(aff).to_ascii_uppercase(),
                    None => '.',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
