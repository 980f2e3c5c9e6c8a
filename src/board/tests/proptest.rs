//! Property-based tests using proptest.

use crate::board::{Board, BoardBuilder, Color, Move, Piece, Square, UnmakeInfo};
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play `plies` seeded random moves from the opening, alternating colors
/// starting with Black. Stops early when the mover has no moves.
fn playout(board: &mut Board, seed: u64, plies: usize) -> Vec<(Move, UnmakeInfo)> {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut color = Color::Black;
    let mut history = Vec::new();

    for _ in 0..plies {
        let moves = board.generate_moves(color);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        let info = board.make_move(mv).expect("generated move must apply");
        history.push((mv, info));
        color = color.opponent();
    }
    history
}

/// Copy of a board with every piece's color flipped in place
fn recolored(board: &Board) -> Board {
    let mut builder = BoardBuilder::new();
    for idx in 0..64 {
        let sq = Square::from_index(idx);
        if let Some(piece) = board.piece_at(sq) {
            builder = builder.piece(sq, piece.recolored());
        }
    }
    builder.build()
}

proptest! {
    /// Property: make_move followed by unmake_move restores the board
    /// exactly - every cell, counter, and king flag.
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut board = Board::new();
        let initial = board.clone();

        let mut history = playout(&mut board, seed, plies);
        while let Some((mv, info)) = history.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board, initial);
    }

    /// Property: every generated move starts from a square occupied by a
    /// piece of the generating color.
    #[test]
    fn prop_move_origin_invariant(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut board = Board::new();
        playout(&mut board, seed, plies);

        for color in Color::BOTH {
            for mv in &board.generate_moves(color) {
                let piece = board.piece_at(mv.from());
                prop_assert!(piece.is_some(), "origin {} empty for {:?}", mv.from(), mv);
                prop_assert_eq!(piece.unwrap().color(), color);
            }
        }
    }

    /// Property: recoloring every piece negates the evaluation.
    #[test]
    fn prop_eval_antisymmetric(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut board = Board::new();
        playout(&mut board, seed, plies);

        prop_assert_eq!(recolored(&board).evaluate(), -board.evaluate());
    }

    /// Property: the material counters always match a manual census of the
    /// grid, through any sequence of captures.
    #[test]
    fn prop_counters_match_cells(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut board = Board::new();
        playout(&mut board, seed, plies);

        let mut white = 0;
        let mut black = 0;
        for idx in 0..64 {
            match board.piece_at(Square::from_index(idx)).map(Piece::color) {
                Some(Color::White) => white += 1,
                Some(Color::Black) => black += 1,
                None => {}
            }
        }
        prop_assert_eq!(board.white_count(), white);
        prop_assert_eq!(board.black_count(), black);
    }

    /// Property: position-string round-trip preserves the board.
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut board = Board::new();
        playout(&mut board, seed, plies);

        let fen = board.to_fen();
        let restored = Board::try_from_fen(&fen).expect("generated notation must parse");
        prop_assert_eq!(restored, board);
    }

    /// Property: capture moves always jump an enemy piece adjacent on the
    /// move's diagonal.
    #[test]
    fn prop_captures_jump_enemies(seed in seed_strategy(), plies in ply_count_strategy()) {
        let mut board = Board::new();
        playout(&mut board, seed, plies);

        for color in Color::BOTH {
            for mv in &board.generate_moves(color) {
                if mv.is_capture() {
                    let victim = board.piece_at(mv.midpoint());
                    prop_assert!(victim.is_some());
                    prop_assert_eq!(victim.unwrap().color(), color.opponent());
                    prop_assert!(board.is_empty(mv.to()));
                }
            }
        }
    }
}
