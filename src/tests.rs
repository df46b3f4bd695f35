#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;
    use proptest::prelude::*;

    use crate::affiliation::AffiliationID;
    use crate::board::{Board, BoardDef};
    use crate::builder::{BoardBuilder, BuilderInvalidReason};
    use crate::catalog::{self, Catalog};
    use crate::editor::PointerEvent;
    use crate::game::Game;
    use crate::location::Location;
    use crate::shape::neighbors;
    use crate::state::PuzzleState;
    use crate::validator::{validate, NotSolved};

    fn dims(w: usize, h: usize) -> (NonZero<usize>, NonZero<usize>) {
        (NonZero::new(w).unwrap(), NonZero::new(h).unwrap())
    }

    fn def(width: usize, height: usize, pairs: &[((usize, usize), (usize, usize))]) -> BoardDef {
        BoardDef {
            width,
            height,
            pairs: pairs
                .iter()
                .map(|&((x1, y1), (x2, y2))| (Location(x1, y1), Location(x2, y2)))
                .collect_vec(),
        }
    }

    fn board(width: usize, height: usize, pairs: &[((usize, usize), (usize, usize))]) -> Board {
        Board::from_def(&def(width, height, pairs)).unwrap()
    }

    // flow free classic pack level 1
    fn classic_level_one() -> Board {
        board(
            5,
            5,
            &[
                ((0, 0), (1, 4)), // A
                ((2, 0), (1, 3)), // B
                ((2, 1), (2, 4)), // C
                ((4, 0), (3, 3)), // D
                ((4, 1), (3, 4)), // E
            ],
        )
    }

    fn two_columns() -> Board {
        board(3, 3, &[((0, 0), (0, 2)), ((2, 0), (2, 2))])
    }

    fn drag(game: &mut Game, stroke: &[(usize, usize)]) {
        let mut cells = stroke.iter().map(|&(x, y)| Location(x, y));
        let first = cells.next().expect("stroke needs a starting cell");
        game.press(first);
        for cell in cells {
            game.enter(cell);
        }
        game.release();
    }

    fn lay(state: &mut PuzzleState, aff: AffiliationID, cells: &[(usize, usize)]) {
        let mut cells = cells.iter().map(|&(x, y)| Location(x, y));
        state.start(aff, cells.next().expect("path needs a starting cell"));
        for cell in cells {
            state.extend(aff, cell);
        }
    }

    #[test]
    fn adjacency_is_manhattan_distance_one() {
        let center = Location(1, 1);
        for other in [Location(1, 0), Location(0, 1), Location(2, 1), Location(1, 2)] {
            assert!(center.is_adjacent_to(other));
            assert!(other.is_adjacent_to(center));
        }
        assert!(!center.is_adjacent_to(center));
        assert!(!center.is_adjacent_to(Location(2, 2)));
        assert!(!center.is_adjacent_to(Location(3, 1)));
    }

    #[test]
    fn neighbors_respect_bounds() {
        let mut corner = neighbors(Location(0, 0), dims(5, 5));
        corner.sort();
        assert_eq!(corner, vec![Location(0, 1), Location(1, 0)]);

        let mut center = neighbors(Location(2, 2), dims(5, 5));
        center.sort();
        assert_eq!(
            center,
            vec![Location(1, 2), Location(2, 1), Location(2, 3), Location(3, 2)]
        );

        assert!(neighbors(Location(0, 0), dims(1, 1)).is_empty());
    }

    #[test]
    fn builder_rejects_out_of_bounds_termini() {
        let reasons = BoardBuilder::with_dims(dims(5, 5))
            .add_termini('A', (Location(0, 0), Location(5, 0)))
            .build()
            .unwrap_err();
        assert_eq!(reasons, vec![BuilderInvalidReason::FeatureOutOfBounds]);
    }

    #[test]
    fn builder_rejects_shared_terminus_cells() {
        let reasons = BoardBuilder::with_dims(dims(5, 5))
            .add_termini('A', (Location(0, 0), Location(1, 0)))
            .add_termini('B', (Location(1, 0), Location(2, 0)))
            .build()
            .unwrap_err();
        assert_eq!(reasons, vec![BuilderInvalidReason::TerminusCollision(Location(1, 0))]);

        let reasons = BoardBuilder::with_dims(dims(5, 5))
            .add_termini('A', (Location(2, 2), Location(2, 2)))
            .build()
            .unwrap_err();
        assert_eq!(reasons, vec![BuilderInvalidReason::TerminusCollision(Location(2, 2))]);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Board::from_def(&def(0, 3, &[])).unwrap_err(),
            vec![BuilderInvalidReason::EmptyDimension]
        );
    }

    #[test]
    fn board_renders_termini() {
        assert_eq!(format!("{}", classic_level_one()), "A.B.D
..C.E
.....
.B.D.
.ACE.
");
    }

    #[test]
    fn board_def_serializes_to_the_authoring_record() {
        let def = def(2, 2, &[((0, 0), (0, 1)), ((1, 0), (1, 1))]);
        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "width": 2,
                "height": 2,
                "pairs": [[[0, 0], [0, 1]], [[1, 0], [1, 1]]],
            })
        );

        let back: BoardDef = serde_json::from_value(value).unwrap();
        assert_eq!(back, def);
    }

    #[test]
    fn catalog_mirrors_are_involutive() {
        for def in catalog::base_boards() {
            assert_eq!(catalog::mirror_horizontal(&catalog::mirror_horizontal(&def)), def);
            assert_eq!(catalog::mirror_vertical(&catalog::mirror_vertical(&def)), def);
            assert_eq!(
                catalog::mirror_both(&def),
                catalog::mirror_vertical(&catalog::mirror_horizontal(&def))
            );
            assert_eq!(
                catalog::mirror_both(&def),
                catalog::mirror_horizontal(&catalog::mirror_vertical(&def))
            );
        }
    }

    #[test]
    fn catalog_expands_fourfold_and_every_variant_builds() {
        let base = catalog::base_boards();
        let cat = Catalog::new();
        assert_eq!(cat.len(), base.len() * 4);
        assert_eq!(cat.variant(0), Some(&base[0]));
        assert!(cat.variant(cat.len()).is_none());

        for ix in 0..cat.len() {
            let board = Board::from_def(cat.variant(ix).unwrap())
                .unwrap_or_else(|reasons| panic!("variant {} invalid: {:?}", ix, reasons));
            assert!((6..=8).contains(&board.num_affiliations()));
        }
    }

    #[cfg(feature = "select")]
    #[test]
    fn random_variant_avoids_immediate_repeat() {
        let cat = Catalog::new();
        for _ in 0..64 {
            let ix = cat.random_variant(Some(3)).unwrap();
            assert_ne!(ix, 3);
            assert!(ix < cat.len());
        }
    }

    #[test]
    fn press_on_terminus_starts_a_stroke() {
        let mut game = Game::new(classic_level_one());
        game.press(Location(0, 0));
        assert_eq!(game.active(), Some(0));
        assert_eq!(game.path(0), Some(&[Location(0, 0)][..]));
    }

    #[test]
    fn press_elsewhere_is_a_noop() {
        let mut game = Game::new(classic_level_one());
        game.press(Location(3, 2));
        assert_eq!(game.active(), None);
        assert_eq!(game.state().paths().count(), 0);
    }

    #[test]
    fn press_on_a_drawn_cell_clears_that_color() {
        let mut game = Game::new(classic_level_one());
        drag(&mut game, &[(2, 1), (2, 2), (2, 3), (2, 4)]);
        assert!(game.path(2).is_some());

        game.press(Location(2, 2));
        assert_eq!(game.path(2), None);
        assert_eq!(game.active(), None);
    }

    #[test]
    fn press_on_terminus_restarts_a_complete_path() {
        let mut game = Game::new(classic_level_one());
        drag(&mut game, &[(2, 1), (2, 2), (2, 3), (2, 4)]);
        assert_eq!(game.path(2).map(<[Location]>::len), Some(4));

        game.press(Location(2, 1));
        assert_eq!(game.path(2), Some(&[Location(2, 1)][..]));
        assert_eq!(game.active(), Some(2));
    }

    #[test]
    fn enter_is_ignored_while_idle() {
        let mut game = Game::new(classic_level_one());
        game.enter(Location(0, 1));
        assert_eq!(game.state().paths().count(), 0);
    }

    #[test]
    fn enter_requires_adjacency() {
        let mut game = Game::new(classic_level_one());
        game.press(Location(0, 0));
        game.enter(Location(0, 2));
        game.enter(Location(1, 1));
        assert_eq!(game.path(0), Some(&[Location(0, 0)][..]));
    }

    #[test]
    fn dragging_back_undoes_one_step() {
        let mut game = Game::new(classic_level_one());
        game.press(Location(0, 0));
        game.enter(Location(0, 1));
        game.enter(Location(0, 2));
        assert_eq!(game.path(0), Some(&[Location(0, 0), Location(0, 1), Location(0, 2)][..]));

        game.enter(Location(0, 1));
        assert_eq!(game.path(0), Some(&[Location(0, 0), Location(0, 1)][..]));

        game.enter(Location(0, 2));
        assert_eq!(game.path(0), Some(&[Location(0, 0), Location(0, 1), Location(0, 2)][..]));
    }

    #[test]
    fn occupied_cells_block_extension() {
        let mut game = Game::new(classic_level_one());
        drag(&mut game, &[(2, 0), (1, 0), (1, 1), (1, 2), (1, 3)]);

        game.press(Location(2, 1));
        game.enter(Location(1, 1));
        assert_eq!(game.path(2), Some(&[Location(2, 1)][..]));
    }

    #[test]
    fn foreign_terminus_blocks_extension() {
        let mut game = Game::new(classic_level_one());
        game.press(Location(2, 0));
        game.enter(Location(2, 1));
        assert_eq!(game.path(1), Some(&[Location(2, 0)][..]));
    }

    #[test]
    fn own_trail_blocks_reentry() {
        let mut game = Game::new(classic_level_one());
        game.press(Location(0, 0));
        game.enter(Location(0, 1));
        game.enter(Location(1, 1));
        game.enter(Location(1, 0));
        game.enter(Location(0, 0));
        assert_eq!(
            game.path(0),
            Some(&[Location(0, 0), Location(0, 1), Location(1, 1), Location(1, 0)][..])
        );
    }

    #[test]
    fn complete_stroke_goes_idle_and_stops_growing() {
        let mut game = Game::new(classic_level_one());
        game.press(Location(2, 1));
        game.enter(Location(2, 2));
        game.enter(Location(2, 3));
        game.enter(Location(2, 4));
        assert_eq!(game.active(), None);

        game.enter(Location(3, 4));
        assert_eq!(
            game.path(2),
            Some(&[Location(2, 1), Location(2, 2), Location(2, 3), Location(2, 4)][..])
        );
    }

    #[test]
    fn release_keeps_the_partial_path() {
        let mut game = Game::new(classic_level_one());
        game.press(Location(0, 0));
        game.enter(Location(0, 1));
        game.release();
        assert_eq!(game.active(), None);
        assert_eq!(game.path(0), Some(&[Location(0, 0), Location(0, 1)][..]));
        assert!(game.verdict().is_err());
    }

    #[test]
    fn pressing_another_terminus_switches_the_stroke() {
        let mut game = Game::new(classic_level_one());
        game.press(Location(0, 0));
        game.enter(Location(0, 1));
        game.press(Location(2, 0));
        assert_eq!(game.active(), Some(1));
        assert_eq!(game.path(0), Some(&[Location(0, 0), Location(0, 1)][..]));
        assert_eq!(game.path(1), Some(&[Location(2, 0)][..]));
    }

    #[test]
    fn clear_all_empties_everything() {
        let mut game = Game::new(classic_level_one());
        drag(&mut game, &[(2, 1), (2, 2), (2, 3), (2, 4)]);
        game.press(Location(0, 0));
        game.clear_all();
        assert_eq!(game.active(), None);
        assert_eq!(game.state().paths().count(), 0);
        assert_eq!(game.verdict(), Err(NotSolved::Missing(0)));
    }

    #[test]
    fn loading_a_board_resets_the_game() {
        let mut game = Game::new(classic_level_one());
        drag(&mut game, &[(2, 1), (2, 2), (2, 3), (2, 4)]);
        game.load_board(two_columns());
        assert_eq!(game.state().paths().count(), 0);
        assert_eq!(game.board().width(), 3);
    }

    #[test]
    fn scripted_win_on_classic_level() {
        let mut game = Game::new(classic_level_one());
        drag(&mut game, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 4)]);
        drag(&mut game, &[(2, 0), (1, 0), (1, 1), (1, 2), (1, 3)]);
        drag(&mut game, &[(2, 1), (2, 2), (2, 3), (2, 4)]);
        drag(&mut game, &[(4, 0), (3, 0), (3, 1), (3, 2), (3, 3)]);
        drag(&mut game, &[(4, 1), (4, 2), (4, 3), (4, 4), (3, 4)]);

        assert_eq!(game.verdict(), Ok(()));
        assert!(game.is_solved());
        assert_eq!(format!("{}", game), "AbBdD
abCdE
abcde
aBcDe
aACEe
");

        // validation is pure; asking twice changes nothing
        assert_eq!(game.verdict(), game.verdict());
    }

    #[test]
    fn partial_fill_is_not_solved() {
        let mut game = Game::new(classic_level_one());
        drag(&mut game, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 4)]);
        assert_eq!(game.verdict(), Err(NotSolved::Missing(1)));
        assert_eq!(game.verdict(), game.verdict());
        assert_eq!(game.state().covered(), 6);
    }

    #[test]
    fn full_fill_is_required() {
        let mut game = Game::new(two_columns());
        drag(&mut game, &[(0, 0), (0, 1), (0, 2)]);
        drag(&mut game, &[(2, 0), (2, 1), (2, 2)]);
        assert_eq!(game.verdict(), Err(NotSolved::Unfilled { used: 6, cells: 9 }));
    }

    #[test]
    fn events_solve_a_two_by_two() {
        let mut game = Game::new(board(2, 2, &[((0, 0), (0, 1)), ((1, 0), (1, 1))]));
        for event in [
            PointerEvent::Press(Location(0, 0)),
            PointerEvent::Enter(Location(0, 1)),
            PointerEvent::Release,
            PointerEvent::Press(Location(1, 0)),
            PointerEvent::Enter(Location(1, 1)),
            PointerEvent::Release,
        ] {
            game.apply(event);
        }

        assert!(game.is_solved());
    }

    #[test]
    fn validator_rederives_legality() {
        let board = two_columns();

        // must run terminus to terminus
        let mut state = PuzzleState::new();
        lay(&mut state, 0, &[(0, 0), (1, 0)]);
        assert_eq!(validate(&board, &state), Err(NotSolved::NotConnected(0)));

        // step continuity
        let mut state = PuzzleState::new();
        lay(&mut state, 0, &[(0, 0), (0, 2)]);
        assert_eq!(validate(&board, &state), Err(NotSolved::NonAdjacentStep(0)));

        // bounds
        let mut state = PuzzleState::new();
        lay(&mut state, 0, &[(0, 0), (7, 7), (0, 2)]);
        assert_eq!(validate(&board, &state), Err(NotSolved::OutOfBounds(0)));

        // a single-cell stub does not count as a path
        let mut state = PuzzleState::new();
        lay(&mut state, 0, &[(0, 0)]);
        assert_eq!(validate(&board, &state), Err(NotSolved::Missing(0)));
    }

    #[test]
    fn validator_reports_overlap() {
        let board = board(3, 3, &[((0, 0), (2, 0)), ((0, 2), (2, 2))]);
        let mut state = PuzzleState::new();
        lay(&mut state, 0, &[(0, 0), (0, 1), (1, 1), (1, 0), (2, 0)]);
        lay(&mut state, 1, &[(0, 2), (1, 2), (1, 1), (2, 1), (2, 2)]);
        assert_eq!(validate(&board, &state), Err(NotSolved::Overlap(Location(1, 1))));
    }

    proptest! {
        // any pointer gibberish whatsoever leaves the drawn paths simple,
        // connected, terminus-anchored, and pairwise disjoint
        #[test]
        fn editor_preserves_path_invariants(
            events in prop::collection::vec((0u8..3u8, 0usize..5usize, 0usize..5usize), 0..80)
        ) {
            let mut game = Game::new(classic_level_one());
            for (kind, x, y) in events {
                match kind {
                    0 => game.press(Location(x, y)),
                    1 => game.enter(Location(x, y)),
                    _ => game.release(),
                }

                let paths = game.state().paths().collect_vec();
                for &(aff, path) in &paths {
                    prop_assert!(!path.is_empty());
                    prop_assert!(path.iter().all_unique());
                    prop_assert!(path.windows(2).all(|pair| pair[0].is_adjacent_to(pair[1])));
                    prop_assert!(path.iter().all(|cell| game.board().contains(*cell)));
                    prop_assert_eq!(game.board().endpoint_at(path[0]), Some(aff));
                }

                let mut seen = std::collections::HashSet::new();
                for &(_, path) in &paths {
                    for cell in path {
                        prop_assert!(seen.insert(*cell));
                    }
                }

                if let Some(aff) = game.active() {
                    prop_assert!(game.state().path(aff).is_some());
                }

                prop_assert_eq!(game.verdict(), game.verdict());
            }
        }
    }
}
