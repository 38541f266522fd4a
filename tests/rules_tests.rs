//! Rule engine tests: legality scenarios, win detection, and
//! simulate/undo properties over random boards.

use proptest::prelude::*;
use santorini_engine::core::MAX_HEIGHT;
use santorini_engine::{Board, Candidate, Color, Direction, PieceId, Position, RuleEngine};

// =============================================================================
// Helpers
// =============================================================================

fn spread_board() -> Board {
    Board::with_pieces(&[
        (PieceId::A, Position::new(1, 1)),
        (PieceId::B, Position::new(4, 4)),
        (PieceId::Y, Position::new(0, 4)),
        (PieceId::Z, Position::new(4, 0)),
    ])
}

/// Random board: 25 heights and four distinct piece cells.
fn arb_board() -> impl Strategy<Value = Board> {
    let heights = proptest::collection::vec(0u8..=MAX_HEIGHT, 25);
    let cells = proptest::sample::subsequence((0i8..25).collect::<Vec<_>>(), 4).prop_shuffle();
    (heights, cells).prop_map(|(heights, cells)| {
        let placements: Vec<_> = PieceId::ALL
            .into_iter()
            .zip(cells)
            .map(|(piece, idx)| (piece, Position::new(idx / 5, idx % 5)))
            .collect();
        let mut board = Board::with_pieces(&placements);
        for (pos, height) in Position::all().zip(heights) {
            board.set_height(pos, height);
        }
        board
    })
}

/// Enumerate by hand on cloned boards, independent of `enumerate_turns`.
fn brute_force(board: &Board, color: Color) -> Vec<Candidate> {
    let rules = RuleEngine::new();
    let mut out = Vec::new();
    for piece in color.pieces() {
        let Some(from) = board.position_of(piece) else { continue };
        for move_dir in Direction::ALL {
            let to = from.step(move_dir);
            if !rules.check_destination(board, to, from, false) {
                continue;
            }
            let mut moved = board.clone();
            moved.remove_piece(piece, from);
            moved.place_piece(piece, to);
            for build_dir in Direction::ALL {
                if rules.check_destination(&moved, to.step(build_dir), to, true) {
                    out.push(Candidate::new(piece, move_dir, build_dir));
                }
            }
        }
    }
    out
}

// =============================================================================
// Legality Scenarios
// =============================================================================

#[test]
fn test_move_east_then_build_south() {
    let rules = RuleEngine::new();
    let mut board = spread_board();

    assert_eq!(
        rules.validate_move(&board, PieceId::A, Direction::E, false),
        Some(Position::new(1, 2))
    );

    rules
        .apply_turn(&mut board, Candidate::new(PieceId::A, Direction::E, Direction::S))
        .unwrap();

    assert_eq!(board.position_of(PieceId::A), Some(Position::new(1, 2)));
    assert_eq!(board.height(Position::new(2, 2)), Some(1));
    assert_eq!(board.height(Position::new(1, 1)), Some(0));
}

#[test]
fn test_cannot_climb_two_levels() {
    let rules = RuleEngine::new();
    let mut board = spread_board();
    board.set_height(Position::new(1, 2), 2);

    assert_eq!(rules.validate_move(&board, PieceId::A, Direction::E, false), None);

    // One level is fine.
    board.set_height(Position::new(1, 2), 1);
    assert!(rules.validate_move(&board, PieceId::A, Direction::E, false).is_some());
}

#[test]
fn test_cannot_enter_occupied_cell() {
    let rules = RuleEngine::new();
    let board = Board::with_pieces(&[
        (PieceId::A, Position::new(2, 2)),
        (PieceId::B, Position::new(2, 3)),
        (PieceId::Y, Position::new(1, 2)),
    ]);

    // Own piece and opponent piece both block, for moves and builds.
    for dir in [Direction::E, Direction::N] {
        assert_eq!(rules.validate_move(&board, PieceId::A, dir, false), None);
        assert_eq!(rules.validate_move(&board, PieceId::A, dir, true), None);
    }
}

#[test]
fn test_occupied_blocks_regardless_of_height() {
    let rules = RuleEngine::new();
    let mut board = Board::with_pieces(&[
        (PieceId::A, Position::new(2, 2)),
        (PieceId::Y, Position::new(2, 3)),
    ]);
    board.set_height(Position::new(2, 2), 1);
    for height in 0..=2 {
        board.set_height(Position::new(2, 3), height);
        assert_eq!(rules.validate_move(&board, PieceId::A, Direction::E, false), None);
    }
}

#[test]
fn test_dome_blocks_move_and_build() {
    let rules = RuleEngine::new();
    let mut board = spread_board();
    board.set_height(Position::new(1, 1), 3);
    board.set_height(Position::new(1, 2), MAX_HEIGHT);

    assert_eq!(rules.validate_move(&board, PieceId::A, Direction::E, false), None);
    assert_eq!(rules.validate_move(&board, PieceId::A, Direction::E, true), None);
}

#[test]
fn test_can_act() {
    let rules = RuleEngine::new();
    let mut board = spread_board();
    assert!(rules.can_act(&mut board, PieceId::A));

    // Z in the corner at (4,0): dome its three neighbours.
    for pos in [Position::new(3, 0), Position::new(3, 1), Position::new(4, 1)] {
        board.set_height(pos, MAX_HEIGHT);
    }
    let before = board.clone();
    assert!(!rules.can_act(&mut board, PieceId::Z));
    assert_eq!(board, before);
}

#[test]
fn test_can_act_requires_build_after_move() {
    let rules = RuleEngine::new();
    // Y stands on a dome at (0,0) and may only step to (0,1); from there
    // every build target is domed or occupied.
    let mut board = Board::with_pieces(&[
        (PieceId::Y, Position::new(0, 0)),
        (PieceId::A, Position::new(1, 2)),
        (PieceId::B, Position::new(4, 4)),
        (PieceId::Z, Position::new(4, 0)),
    ]);
    for pos in [
        Position::new(0, 0),
        Position::new(1, 0),
        Position::new(1, 1),
        Position::new(0, 2),
    ] {
        board.set_height(pos, MAX_HEIGHT);
    }

    assert!(rules.validate_move(&board, PieceId::Y, Direction::E, false).is_some());
    assert!(!rules.can_act(&mut board, PieceId::Y));
}

#[test]
fn test_enumerate_opening_count() {
    let rules = RuleEngine::new();
    let mut board = Board::new();
    let candidates = rules.enumerate_turns(&mut board, Color::White).unwrap();

    assert_eq!(candidates, brute_force(&Board::new(), Color::White));
    assert!(candidates.iter().all(|c| c.piece.owner() == Color::White));
}

#[test]
fn test_enumerate_none_when_boxed_in() {
    let rules = RuleEngine::new();
    let mut board = Board::with_pieces(&[
        (PieceId::A, Position::new(0, 0)),
        (PieceId::B, Position::new(0, 4)),
        (PieceId::Y, Position::new(1, 1)),
        (PieceId::Z, Position::new(1, 3)),
    ]);
    for pos in [
        Position::new(0, 1),
        Position::new(1, 0),
        Position::new(0, 3),
        Position::new(1, 4),
    ] {
        board.set_height(pos, MAX_HEIGHT);
    }

    assert_eq!(rules.enumerate_turns(&mut board, Color::White), None);
    assert!(rules.enumerate_turns(&mut board, Color::Blue).is_some());
}

// =============================================================================
// Win Detection
// =============================================================================

#[test]
fn test_white_on_level_three_wins() {
    let rules = RuleEngine::new();
    let mut board = spread_board();
    board.set_height(Position::new(4, 4), 3);

    assert_eq!(rules.check_win_condition(&board), Some(Color::White));
}

#[test]
fn test_blue_on_level_three_wins() {
    let rules = RuleEngine::new();
    let mut board = spread_board();
    board.set_height(Position::new(0, 4), 3);

    assert_eq!(rules.check_win_condition(&board), Some(Color::Blue));
}

#[test]
fn test_no_winner() {
    let rules = RuleEngine::new();
    let mut board = spread_board();
    // Level 3 with nobody on it, and pieces on other levels.
    board.set_height(Position::new(2, 2), 3);
    board.set_height(Position::new(1, 1), 2);
    board.set_height(Position::new(0, 4), MAX_HEIGHT);

    assert_eq!(rules.check_win_condition(&board), None);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_simulate_move_undo_is_identity(board in arb_board()) {
        let rules = RuleEngine::new();
        for piece in PieceId::ALL {
            for dir in Direction::ALL {
                let mut work = board.clone();
                if let Some(applied) = rules.simulate_move(&mut work, piece, dir) {
                    prop_assert_eq!(work.position_of(piece), Some(applied.to));
                    rules.undo_move(&mut work, applied);
                }
                prop_assert_eq!(&work, &board);
            }
        }
    }

    #[test]
    fn prop_simulate_build_undo_is_identity(board in arb_board()) {
        let rules = RuleEngine::new();
        for piece in PieceId::ALL {
            for dir in Direction::ALL {
                let mut work = board.clone();
                if let Some(applied) = rules.simulate_build(&mut work, piece, dir) {
                    prop_assert_eq!(work.height(applied.at), board.height(applied.at).map(|h| h + 1));
                    rules.undo_build(&mut work, applied);
                }
                prop_assert_eq!(&work, &board);
            }
        }
    }

    #[test]
    fn prop_enumerate_matches_brute_force(board in arb_board()) {
        let rules = RuleEngine::new();
        for color in Color::ALL {
            let mut work = board.clone();
            let expected = brute_force(&board, color);
            let actual = rules.enumerate_turns(&mut work, color);

            prop_assert_eq!(&work, &board);
            match actual {
                None => prop_assert!(expected.is_empty()),
                Some(candidates) => {
                    let mut deduped = candidates.clone();
                    deduped.sort_by_key(|c| (c.piece, c.move_dir as u8, c.build_dir as u8));
                    deduped.dedup();
                    prop_assert_eq!(deduped.len(), candidates.len());
                    prop_assert_eq!(candidates, expected);
                }
            }
        }
    }

    #[test]
    fn prop_can_act_agrees_with_enumeration(board in arb_board()) {
        let rules = RuleEngine::new();
        let mut work = board.clone();
        let candidates = brute_force(&board, Color::White);
        for piece in Color::White.pieces() {
            let expected = candidates.iter().any(|c| c.piece == piece);
            prop_assert_eq!(rules.can_act(&mut work, piece), expected);
        }
        prop_assert_eq!(&work, &board);
    }
}
