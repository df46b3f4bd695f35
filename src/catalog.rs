//! The hand-authored board library and its symmetry expansion.
//!
//! Nine base boards are authored by hand and expanded fourfold by mirror
//! symmetry into the playable catalog, trading a board generator (and the
//! solver it would need) for replay value that authorship alone can
//! guarantee. Boards are *not* verified solvable here; that guarantee comes
//! from the authoring, not from this code.
//!
//! Which variant is played is the host's concern; the engine only hands out
//! definitions by index. [`Catalog::random_variant`] is host-facing sugar
//! for the usual "new puzzle, but not the same one again" trigger.

use itertools::Itertools;

use crate::board::BoardDef;
use crate::location::{Coord, Location};

// Authoring-time data: width, height, terminus pairs in [x, y] coordinates.
// Pair order fixes color IDs, so entries here are append-only per board.
struct RawBoard {
    width: Coord,
    height: Coord,
    pairs: &'static [((Coord, Coord), (Coord, Coord))],
}

#[rustfmt::skip]
static BASE_BOARDS: [RawBoard; 9] = [
    RawBoard {
        width: 7,
        height: 11,
        pairs: &[
            ((0, 1), (6, 1)),   // A
            ((2, 0), (6, 0)),   // B
            ((1, 7), (6, 6)),   // C
            ((4, 9), (6, 5)),   // D
            ((0, 9), (4, 6)),   // E
            ((3, 6), (6, 10)),  // F
            ((0, 0), (5, 1)),   // G
        ],
    },
    RawBoard {
        width: 7,
        height: 10,
        pairs: &[
            ((1, 3), (6, 0)),
            ((1, 8), (3, 9)),
            ((2, 2), (5, 2)),
            ((4, 2), (5, 0)),
            ((0, 1), (2, 0)),
            ((3, 2), (4, 0)),
            ((5, 8), (2, 1)),
            ((1, 5), (2, 9)),
        ],
    },
    RawBoard {
        width: 7,
        height: 9,
        pairs: &[
            ((1, 1), (5, 6)),
            ((3, 4), (6, 6)),
            ((5, 2), (5, 8)),
            ((0, 2), (6, 0)),
            ((1, 7), (6, 8)),
            ((1, 4), (4, 6)),
        ],
    },
    RawBoard {
        width: 7,
        height: 11,
        pairs: &[
            ((0, 0), (2, 4)),
            ((1, 1), (2, 0)),
            ((0, 3), (3, 2)),
            ((5, 6), (6, 9)),
            ((1, 5), (6, 4)),
            ((4, 1), (2, 9)),
            ((0, 10), (3, 7)),
        ],
    },
    RawBoard {
        width: 7,
        height: 10,
        pairs: &[
            ((2, 3), (6, 0)),
            ((4, 3), (2, 7)),
            ((2, 2), (6, 1)),
            ((0, 6), (5, 8)),
            ((1, 9), (4, 7)),
            ((0, 0), (5, 4)),
            ((1, 8), (3, 9)),
            ((3, 3), (6, 2)),
        ],
    },
    RawBoard {
        width: 7,
        height: 9,
        pairs: &[
            ((5, 1), (2, 7)),
            ((1, 7), (5, 7)),
            ((4, 2), (6, 5)),
            ((2, 2), (5, 4)),
            ((1, 4), (6, 2)),
            ((2, 5), (2, 8)),
        ],
    },
    RawBoard {
        width: 7,
        height: 11,
        pairs: &[
            ((1, 6), (3, 1)),
            ((1, 0), (3, 3)),
            ((1, 8), (5, 8)),
            ((1, 9), (4, 8)),
            ((1, 2), (3, 7)),
            ((2, 2), (2, 6)),
            ((0, 8), (1, 10)),
        ],
    },
    RawBoard {
        width: 7,
        height: 10,
        pairs: &[
            ((2, 7), (5, 9)),
            ((0, 8), (5, 8)),
            ((0, 5), (5, 4)),
            ((0, 0), (4, 4)),
            ((1, 0), (2, 2)),
            ((3, 3), (1, 6)),
            ((0, 6), (3, 8)),
            ((5, 1), (2, 3)),
        ],
    },
    RawBoard {
        width: 7,
        height: 9,
        pairs: &[
            ((0, 3), (2, 4)),
            ((1, 1), (1, 8)),
            ((4, 2), (4, 6)),
            ((1, 7), (6, 5)),
            ((1, 3), (3, 3)),
            ((1, 6), (5, 6)),
        ],
    },
];

impl RawBoard {
    fn def(&self) -> BoardDef {
        BoardDef {
            width: self.width,
            height: self.height,
            pairs: self
                .pairs
                .iter()
                .map(|&((x1, y1), (x2, y2))| (Location(x1, y1), Location(x2, y2)))
                .collect_vec(),
        }
    }
}

/// The hand-authored base boards, in authoring order.
pub fn base_boards() -> Vec<BoardDef> {
    BASE_BOARDS.iter().map(RawBoard::def).collect_vec()
}

// Mirrors are total: coordinates of a malformed definition wrap instead of
// panicking, and the builder rejects the result later.
fn map_termini(def: &BoardDef, f: impl Fn(Location) -> Location) -> BoardDef {
    BoardDef {
        width: def.width,
        height: def.height,
        pairs: def.pairs.iter().map(|&(a, b)| (f(a), f(b))).collect_vec(),
    }
}

/// Mirror across the vertical axis: every terminus `x` becomes `width - 1 - x`.
pub fn mirror_horizontal(def: &BoardDef) -> BoardDef {
    map_termini(def, |Location(x, y)| {
        Location(def.width.wrapping_sub(1).wrapping_sub(x), y)
    })
}

/// Mirror across the horizontal axis: every terminus `y` becomes `height - 1 - y`.
pub fn mirror_vertical(def: &BoardDef) -> BoardDef {
    map_termini(def, |Location(x, y)| {
        Location(x, def.height.wrapping_sub(1).wrapping_sub(y))
    })
}

/// Mirror across both axes; the composition of
/// [`mirror_horizontal`] and [`mirror_vertical`], in either order.
pub fn mirror_both(def: &BoardDef) -> BoardDef {
    mirror_vertical(&mirror_horizontal(def))
}

/// Expand `base` into the playable set: each board followed by its three
/// mirror images, authoring order preserved.
pub fn expand(base: &[BoardDef]) -> Vec<BoardDef> {
    base.iter()
        .flat_map(|def| {
            [
                def.clone(),
                mirror_horizontal(def),
                mirror_vertical(def),
                mirror_both(def),
            ]
        })
        .collect_vec()
}

/// The full playable catalog: every base board and its mirror variants.
pub struct Catalog {
    variants: Vec<BoardDef>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Build the catalog from the built-in base boards.
    pub fn new() -> Self {
        Self {
            variants: expand(&base_boards()),
        }
    }

    /// Number of playable variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the catalog holds no variants.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// The definition of variant `index`, if it exists.
    pub fn variant(&self, index: usize) -> Option<&BoardDef> {
        self.variants.get(index)
    }

    /// Pick a variant index at random, re-rolling until it differs from
    /// `avoid` (the usual "new puzzle" trigger). Returns `None` on an empty
    /// catalog; with a single variant, `avoid` cannot be honored.
    #[cfg(feature = "select")]
    pub fn random_variant(&self, avoid: Option<usize>) -> Option<usize> {
        use rand::Rng;

        if self.variants.is_empty() {
            return None;
        }
        if self.variants.len() == 1 {
            return Some(0);
        }

        let mut rng = rand::thread_rng();
        loop {
            let index = rng.gen_range(0..self.variants.len());
            if Some(index) != avoid {
                return Some(index);
            }
        }
    }
}
