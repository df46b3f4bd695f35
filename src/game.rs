use std::fmt::{Display, Formatter};

use crate::affiliation::AffiliationID;
use crate::board::Board;
use crate::editor::{PathEditor, PointerEvent};
use crate::location::Location;
use crate::state::PuzzleState;
use crate::validator::{validate, NotSolved};

/// A playable puzzle: a board plus everything drawn on it so far.
///
/// Owns the [`PuzzleState`] and routes all mutation through its
/// [`PathEditor`], so the path invariants (simple, connected,
/// terminus-anchored, non-overlapping) hold after every event. The host
/// feeds cell-resolved pointer events in and reads paths and the verdict
/// back out; rendering and coordinate translation stay on the host side.
pub struct Game {
    board: Board,
    state: PuzzleState,
    editor: PathEditor,
}

impl Game {
    /// Start a fresh game on `board`.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: PuzzleState::new(),
            editor: PathEditor::new(),
        }
    }

    /// Swap in a new board, dropping every drawn path and any stroke in
    /// progress.
    pub fn load_board(&mut self, board: Board) {
        self.board = board;
        self.state = PuzzleState::new();
        self.editor = PathEditor::new();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            width = self.board.width(),
            height = self.board.height(),
            colors = self.board.num_affiliations(),
            "board loaded"
        );
    }

    /// The board being played.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Everything drawn so far.
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// The path of `affiliation` in draw order, if started.
    pub fn path(&self, affiliation: AffiliationID) -> Option<&[Location]> {
        self.state.path(affiliation)
    }

    /// The color being drawn, if a stroke is in progress.
    pub fn active(&self) -> Option<AffiliationID> {
        self.editor.active()
    }

    /// Pointer pressed on `at`. See [`PathEditor::press`].
    pub fn press(&mut self, at: Location) {
        self.editor.press(&self.board, &mut self.state, at);
    }

    /// Pointer moved onto `at` while held. See [`PathEditor::enter`].
    pub fn enter(&mut self, at: Location) {
        self.editor.enter(&self.board, &mut self.state, at);
    }

    /// Pointer released or cancelled, anywhere. See [`PathEditor::release`].
    pub fn release(&mut self) {
        self.editor.release();
    }

    /// Dispatch one pointer event.
    pub fn apply(&mut self, event: PointerEvent) {
        self.editor.apply(&self.board, &mut self.state, event);
    }

    /// Empty every path and return to idle.
    pub fn clear_all(&mut self) {
        self.state.clear();
        self.editor.release();
    }

    /// The current verdict. Validation is pure, so this is recomputed from
    /// scratch on demand rather than cached.
    pub fn verdict(&self) -> Result<(), NotSolved> {
        validate(&self.board, &self.state)
    }

    /// Whether every cell is covered and every color runs terminus to
    /// terminus.
    pub fn is_solved(&self) -> bool {
        self.verdict().is_ok()
    }
}

impl Display for Game {
    // termini print uppercase, drawn cells lowercase, uncovered cells as '.'
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let occupied = self.state.occupancy(self.board.dims());
        for y in 0..self.board.height() {
            for x in 0..self.board.width() {
                let at = Location(x, y);
                let glyph = match (self.board.endpoint_at(at), occupied[at.as_index()]) {
                    (Some(aff), _) => self.board.display_of(aff).to_ascii_uppercase(),
                    (None, Some(aff)) => self.board.display_of(aff).to_ascii_lowercase(),
                    (None, None) => '.',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
