use crate::affiliation::AffiliationID;
use crate::board::Board;
use crate::location::Location;
use crate::state::PuzzleState;

/// Whether a stroke is in progress, and for which color.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DrawState {
    /// No stroke in progress.
    #[default]
    Idle,
    /// A stroke is growing the path of this color.
    Drawing(AffiliationID),
}

/// A pointer event, already resolved to a grid cell by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerEvent {
    /// The pointer was pressed on a cell.
    Press(Location),
    /// The pointer moved onto a cell while held.
    Enter(Location),
    /// The pointer was released or cancelled, anywhere on the page.
    Release,
}

/// The interactive path-editing state machine.
///
/// Consumes pointer events against grid cells and mutates a [`PuzzleState`]
/// under the drawing rules: strokes start on a terminus, grow one orthogonal
/// step at a time, may backtrack one step over their own trail, and never
/// cross another color's path or termini. Illegal moves are silently
/// ignored; the state machine is left exactly as it was.
///
/// Cycles between [`Idle`](DrawState::Idle) and
/// [`Drawing`](DrawState::Drawing) for the lifetime of a board; there is no
/// terminal state. Global pointer-release is a capability the host provides
/// by calling [`release`](Self::release); the editor subscribes to nothing.
#[derive(Clone, Debug, Default)]
pub struct PathEditor {
    state: DrawState,
}

impl PathEditor {
    /// A fresh editor, idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current drawing state.
    pub fn state(&self) -> DrawState {
        self.state
    }

    /// The color being drawn, if a stroke is in progress.
    pub fn active(&self) -> Option<AffiliationID> {
        match self.state {
            DrawState::Drawing(aff) => Some(aff),
            DrawState::Idle => None,
        }
    }

    /// Dispatch one pointer event.
    pub fn apply(&mut self, board: &Board, state: &mut PuzzleState, event: PointerEvent) {
        match event {
            PointerEvent::Press(at) => self.press(board, state, at),
            PointerEvent::Enter(at) => self.enter(board, state, at),
            PointerEvent::Release => self.release(),
        }
    }

    /// Pointer pressed on `at`.
    ///
    /// On a terminus: the owning color restarts as the single-cell path
    /// `[at]` and a stroke begins for it, even if the color already had a
    /// complete path and even if another stroke was in progress.
    /// On a drawn cell: the covering color's path is removed entirely and no
    /// stroke starts. Anywhere else: no-op.
    pub fn press(&mut self, board: &Board, state: &mut PuzzleState, at: Location) {
        if let Some(aff) = board.endpoint_at(at) {
            state.start(aff, at);
            self.state = DrawState::Drawing(aff);
            #[cfg(feature = "tracing")]
            tracing::debug!(affiliation = aff, at = %at, "stroke started");
            return;
        }

        if let Some(owner) = state.owner_of(at) {
            state.remove(owner);
            self.state = DrawState::Idle;
            #[cfg(feature = "tracing")]
            tracing::debug!(affiliation = owner, "path cleared");
        }
    }

    /// Pointer moved onto `at` while held. Ignored unless a stroke is in
    /// progress.
    ///
    /// Checks apply in order, short-circuiting on the first match: a
    /// complete path never grows; the cell must neighbor the path frontier;
    /// re-entering the second-to-last cell backtracks one step; cells held
    /// by another color, foreign termini (occupied or not), and cells
    /// already on the path are all ignored. Otherwise the cell is appended,
    /// and reaching the destination terminus ends the stroke.
    pub fn enter(&mut self, board: &Board, state: &mut PuzzleState, at: Location) {
        let DrawState::Drawing(aff) = self.state else {
            return;
        };

        // nonempty whenever a stroke is live; anything else is ignored
        let (start, last, prev, contains_at) = {
            let Some(cur) = state.path(aff) else {
                return;
            };
            let (Some(&start), Some(&last)) = (cur.first(), cur.last()) else {
                return;
            };
            let prev = (cur.len() >= 2).then(|| cur[cur.len() - 2]);
            (start, last, prev, cur.contains(&at))
        };
        let Some(dest) = board.other_endpoint(aff, start) else {
            return;
        };

        if last == dest {
            return;
        }
        if !last.is_adjacent_to(at) {
            return;
        }
        // dragging back over one's own trail undoes the last step
        if prev == Some(at) {
            state.truncate_last(aff);
            return;
        }
        if state.owner_of(at).is_some_and(|owner| owner != aff) {
            return;
        }
        // foreign termini are off limits even while unoccupied
        if board.endpoint_at(at).is_some_and(|owner| owner != aff) {
            return;
        }
        if contains_at {
            return;
        }

        state.extend(aff, at);
        if at == dest {
            self.state = DrawState::Idle;
            #[cfg(feature = "tracing")]
            tracing::debug!(affiliation = aff, "stroke completed");
        }
    }

    /// Pointer released or cancelled. Unconditionally returns to idle; the
    /// path is left exactly as drawn.
    pub fn release(&mut self) {
        self.state = DrawState::Idle;
    }
}
