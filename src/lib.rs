#![warn(missing_docs)]

//! # `chromate`
//!
//! An interactive engine for [Numberlink](https://en.wikipedia.org/wiki/Numberlink)-style
//! full-fill path puzzles as posed in the mobile game Flow Free and its many
//! lookalikes: every color owns two fixed termini, the player drags an
//! orthogonal path between them, and the board is solved once every cell is
//! covered by exactly one color's path.
//!
//! This crate is the puzzle core only. Rendering, input capture, and
//! pointer-to-cell translation belong to a host: the host feeds
//! cell-resolved press/enter/release events into a [`Game`] (or a bare
//! [`PathEditor`] if it manages its own [`PuzzleState`]) and observes the
//! drawn paths and the [`validate`] verdict. Illegal drag gestures are
//! routine during play, so the editor rejects them silently rather than
//! erroring; the only surfaced failure information is the [`NotSolved`]
//! diagnostic.
//!
//! Boards come from the built-in [`catalog`] (hand-authored boards expanded
//! fourfold by mirror symmetry) or from a [`BoardDef`] record, optionally
//! assembled with a [`BoardBuilder`](builder::BoardBuilder). Solving,
//! generating, or proving boards solvable is out of scope; authored boards
//! are trusted.

pub use affiliation::AffiliationID;
pub use board::{Board, BoardDef};
pub use editor::{DrawState, PathEditor, PointerEvent};
pub use game::Game;
pub use location::Location;
pub use state::PuzzleState;
pub use validator::{validate, NotSolved};

pub(crate) mod affiliation;
pub(crate) mod board;
pub mod builder;
pub mod catalog;
pub(crate) mod editor;
pub(crate) mod game;
pub(crate) mod location;
pub mod shape;
pub(crate) mod state;
mod tests;
pub(crate) mod validator;
#[cfg(feature = "wasm")]
pub mod wasm;
