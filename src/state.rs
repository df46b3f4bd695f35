use std::collections::HashMap;

use ndarray::Array2;

use crate::affiliation::AffiliationID;
use crate::location::{Dimension, Location};

/// Everything the player has drawn: one path per started color.
///
/// A color with no entry simply has no path yet. The occupancy index is a
/// pure derivation of the paths ([`owner_of`](Self::owner_of),
/// [`occupancy`](Self::occupancy)) and is never stored as independent truth.
///
/// Reads are public; mutation goes through the crate's path editor.
#[derive(Clone, Debug, Default)]
pub struct PuzzleState {
    paths: HashMap<AffiliationID, Vec<Location>>,
}

impl PuzzleState {
    /// An empty state: nothing drawn.
    pub fn new() -> Self {
        Self::default()
    }

    /// The path of `affiliation` in draw order, if that color has one.
    pub fn path(&self, affiliation: AffiliationID) -> Option<&[Location]> {
        self.paths.get(&affiliation).map(Vec::as_slice)
    }

    /// All current paths, keyed by color. Iteration order is unspecified.
    pub fn paths(&self) -> impl Iterator<Item = (AffiliationID, &[Location])> {
        self.paths.iter().map(|(aff, path)| (*aff, path.as_slice()))
    }

    /// The color currently covering `at`, if any.
    pub fn owner_of(&self, at: Location) -> Option<AffiliationID> {
        self.paths
            .iter()
            .find(|(_, path)| path.contains(&at))
            .map(|(aff, _)| *aff)
    }

    /// Derived occupancy index for a board of the given dimensions: cell to
    /// covering color. Recomputed from the paths on every call.
    pub fn occupancy(&self, dims: (Dimension, Dimension)) -> Array2<Option<AffiliationID>> {
        let mut occupied = Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), || None);
        for (aff, path) in self.paths() {
            for cell in path {
                if let Some(slot) = occupied.get_mut(cell.as_index()) {
                    *slot = Some(aff);
                }
            }
        }

        occupied
    }

    /// Total number of cells covered by any path.
    pub fn covered(&self) -> usize {
        self.paths.values().map(Vec::len).sum()
    }

    /// Reset `affiliation` to the single-cell path `[at]`, discarding any
    /// prior path of that color.
    pub(crate) fn start(&mut self, affiliation: AffiliationID, at: Location) {
        self.paths.insert(affiliation, vec![at]);
    }

    /// Append `at` to the path of `affiliation`.
    pub(crate) fn extend(&mut self, affiliation: AffiliationID, at: Location) {
        self.paths.entry(affiliation).or_default().push(at);
    }

    /// Drop the final cell of the path of `affiliation`.
    pub(crate) fn truncate_last(&mut self, affiliation: AffiliationID) {
        if let Some(path) = self.paths.get_mut(&affiliation) {
            path.pop();
        }
    }

    /// Remove the path of `affiliation` entirely.
    pub(crate) fn remove(&mut self, affiliation: AffiliationID) {
        self.paths.remove(&affiliation);
    }

    /// Remove every path.
    pub(crate) fn clear(&mut self) {
        self.paths.clear();
    }
}
