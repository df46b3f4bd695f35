//! Bindings for driving the engine from a JavaScript host.
//!
//! The host owns rendering and pointer-to-cell translation; this module
//! only exposes the engine boundary: load a catalog variant, feed `(x, y)`
//! pointer events, read paths and the verdict back.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::catalog::Catalog;
use crate::game::Game;
use crate::location::Location;

/// A catalog-backed game handle for a JavaScript host.
#[wasm_bindgen]
pub struct GameHandle {
    catalog: Catalog,
    game: Game,
    variant: usize,
}

impl GameHandle {
    fn build(catalog: &Catalog, variant: usize) -> Result<Board, JsError> {
        let def = catalog
            .variant(variant)
            .ok_or_else(|| JsError::new("variant out of range"))?;
        Board::from_def(def).map_err(|reasons| JsError::new(&format!("invalid board: {:?}", reasons)))
    }
}

#[wasm_bindgen]
impl GameHandle {
    /// Start a game on catalog variant `variant`.
    #[wasm_bindgen(constructor)]
    pub fn new(variant: usize) -> Result<GameHandle, JsError> {
        let catalog = Catalog::new();
        let game = Game::new(Self::build(&catalog, variant)?);
        Ok(GameHandle {
            catalog,
            game,
            variant,
        })
    }

    /// Number of playable variants in the catalog.
    pub fn variant_count(&self) -> usize {
        self.catalog.len()
    }

    /// Index of the variant being played.
    pub fn variant(&self) -> usize {
        self.variant
    }

    /// Load another catalog variant, dropping every drawn path.
    pub fn load_variant(&mut self, variant: usize) -> Result<(), JsError> {
        let board = Self::build(&self.catalog, variant)?;
        self.game.load_board(board);
        self.variant = variant;
        Ok(())
    }

    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.game.board().width()
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.game.board().height()
    }

    /// Number of colors on the board.
    pub fn color_count(&self) -> usize {
        self.game.board().num_affiliations()
    }

    /// Terminus owner at `(x, y)`, if any.
    pub fn endpoint_at(&self, x: usize, y: usize) -> Option<usize> {
        self.game.board().endpoint_at(Location(x, y))
    }

    /// Pointer pressed on cell `(x, y)`.
    pub fn press(&mut self, x: usize, y: usize) {
        self.game.press(Location(x, y));
    }

    /// Pointer moved onto cell `(x, y)` while held.
    pub fn enter(&mut self, x: usize, y: usize) {
        self.game.enter(Location(x, y));
    }

    /// Pointer released or cancelled, anywhere on the page.
    pub fn release(&mut self) {
        self.game.release();
    }

    /// Empty every path and return to idle.
    pub fn clear_all(&mut self) {
        self.game.clear_all();
    }

    /// Whether the board is solved.
    pub fn solved(&self) -> bool {
        self.game.is_solved()
    }

    /// `"solved"`, or the current failure diagnostic.
    pub fn status(&self) -> String {
        match self.game.verdict() {
            Ok(()) => "solved".into(),
            Err(reason) => reason.to_string(),
        }
    }

    /// The path of `color` as a flat `[x0, y0, x1, y1, …]` array, empty if
    /// the color has no path.
    pub fn path_of(&self, color: usize) -> Array {
        let out = Array::new();
        if let Some(path) = self.game.path(color) {
            for &Location(x, y) in path {
                out.push(&JsValue::from_f64(x as f64));
                out.push(&JsValue::from_f64(y as f64));
            }
        }

        out
    }
}

#[cfg(feature = "select")]
#[wasm_bindgen]
impl GameHandle {
    /// Pick a random variant index different from the one being played.
    pub fn next_variant(&self) -> usize {
        self.catalog.random_variant(Some(self.variant)).unwrap_or(0)
    }
}
