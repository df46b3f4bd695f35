use std::collections::HashSet;

use thiserror::Error;
use unordered_pair::UnorderedPair;

use crate::affiliation::AffiliationID;
use crate::board::Board;
use crate::location::Location;
use crate::state::PuzzleState;

/// Why a state does not solve its board.
///
/// Diagnostics only: the board stays fully editable regardless of the
/// verdict, and nothing branches on the reason.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum NotSolved {
    /// The color has no path yet, or only a single-cell stub.
    #[error("color {0} missing")]
    Missing(AffiliationID),
    /// The board has no terminus pair for this color.
    #[error("color {0} endpoints missing")]
    EndpointsMissing(AffiliationID),
    /// The path does not run between the color's two termini.
    #[error("color {0} not connected to endpoints")]
    NotConnected(AffiliationID),
    /// A path cell lies outside the board.
    #[error("out of bounds in color {0}")]
    OutOfBounds(AffiliationID),
    /// A cell is covered twice, by one path or by two.
    #[error("overlap at {0}")]
    Overlap(Location),
    /// Two consecutive path cells are not orthogonal neighbors.
    #[error("non-adjacent step in color {0}")]
    NonAdjacentStep(AffiliationID),
    /// The path's first cell is not a terminus of this exact color.
    #[error("color {0} start not endpoint")]
    StartNotEndpoint(AffiliationID),
    /// The path's last cell is not a terminus of this exact color.
    #[error("color {0} end not endpoint")]
    EndNotEndpoint(AffiliationID),
    /// Every path is legal but some cells remain uncovered.
    #[error("grid not filled ({used}/{cells})")]
    Unfilled {
        /// Cells covered by any path.
        used: usize,
        /// Total cells on the board.
        cells: usize,
    },
}

/// Decide whether `state` solves `board`.
///
/// Every color in turn must have a path running terminus to terminus, in
/// bounds, stepping one orthogonal cell at a time, covering no cell twice
/// and no cell of any earlier color; after that, the union of all paths
/// must cover the whole grid.
///
/// Legality is re-derived from scratch rather than trusted from the editor,
/// so state constructed by other means (deserialized, scripted) is judged
/// correctly. Pure and idempotent: repeated calls on unchanged state return
/// identical results and never mutate it.
pub fn validate(board: &Board, state: &PuzzleState) -> Result<(), NotSolved> {
    let mut used: HashSet<Location> = HashSet::new();

    for aff in 0..board.num_affiliations() {
        let path = state
            .path(aff)
            .filter(|path| path.len() >= 2)
            .ok_or(NotSolved::Missing(aff))?;
        let pair = board.endpoints_of(aff).ok_or(NotSolved::EndpointsMissing(aff))?;

        // must run terminus to terminus, in either direction
        let start = path[0];
        let end = path[path.len() - 1];
        if UnorderedPair::from((start, end)) != pair {
            return Err(NotSolved::NotConnected(aff));
        }

        for (ix, &cell) in path.iter().enumerate() {
            if !board.contains(cell) {
                return Err(NotSolved::OutOfBounds(aff));
            }
            if !used.insert(cell) {
                return Err(NotSolved::Overlap(cell));
            }
            if ix > 0 && !path[ix - 1].is_adjacent_to(cell) {
                return Err(NotSolved::NonAdjacentStep(aff));
            }
        }

        if board.endpoint_at(start) != Some(aff) {
            return Err(NotSolved::StartNotEndpoint(aff));
        }
        if board.endpoint_at(end) != Some(aff) {
            return Err(NotSolved::EndNotEndpoint(aff));
        }
    }

    if used.len() != board.cell_count() {
        return Err(NotSolved::Unfilled {
            used: used.len(),
            cells: board.cell_count(),
        });
    }

    Ok(())
}
