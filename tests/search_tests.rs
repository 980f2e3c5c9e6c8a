//! Search tests driving the engine through its public interface.

use draughts_engine::board::{
    find_best_move, search, Board, BoardBuilder, Color, Square, DEFAULT_DEPTH,
};

/// A lone Black man in the middle of the board has exactly its two forward
/// diagonals, and a depth-1 search scores the move statically.
#[test]
fn lone_man_picks_a_forward_diagonal() {
    let mut board = BoardBuilder::new().man(Square(4, 4), Color::Black).build();

    let result = search(&mut board, 1).unwrap();
    let mv = result.best_move.expect("a free man always has a move");

    assert_eq!(mv.from(), Square(4, 4));
    assert!(
        mv.to() == Square(5, 3) || mv.to() == Square(5, 5),
        "unexpected destination {}",
        mv.to()
    );
    assert_eq!(result.score, 1, "only a Black man remains after the move");
}

/// The engine finds the jump and the capture is reflected in the counters
/// and the evaluation.
#[test]
fn finds_capture_at_depth_one() {
    let mut board = BoardBuilder::new()
        .man(Square(4, 4), Color::Black)
        .man(Square(5, 3), Color::White)
        .build();
    let score_before = board.evaluate();
    let white_before = board.white_count();

    let mv = find_best_move(&mut board, 1).unwrap().expect("jump exists");
    assert_eq!(mv.from(), Square(4, 4));
    assert_eq!(mv.to(), Square(6, 2));
    assert!(mv.is_capture());

    // Apply it the way the turn-handling glue would
    board.take_piece(mv.midpoint()).unwrap();
    board.move_piece(mv.from(), mv.to()).unwrap();

    assert_eq!(board.white_count(), white_before - 1);
    assert_eq!(board.evaluate(), score_before + 1);
}

/// The engine takes a jump over a quiet move when it wins material.
#[test]
fn prefers_winning_material_at_default_depth() {
    let mut board = BoardBuilder::new()
        .man(Square(3, 3), Color::Black)
        .man(Square(4, 2), Color::White)
        .man(Square(7, 7), Color::White)
        .build();

    let mv = find_best_move(&mut board, DEFAULT_DEPTH)
        .unwrap()
        .expect("Black has moves");
    assert!(mv.is_capture(), "expected the jump, got {mv}");
}

/// No legal move for the searched color reports "no move", whether the
/// side is absent or boxed in.
#[test]
fn no_legal_moves_returns_none() {
    let mut empty_side = BoardBuilder::new().man(Square(5, 5), Color::White).build();
    assert_eq!(find_best_move(&mut empty_side, DEFAULT_DEPTH).unwrap(), None);

    let mut boxed_in = BoardBuilder::new()
        .man(Square(2, 4), Color::Black)
        .man(Square(3, 3), Color::White)
        .man(Square(3, 5), Color::White)
        .man(Square(4, 2), Color::White)
        .man(Square(4, 6), Color::White)
        .build();
    assert_eq!(find_best_move(&mut boxed_in, DEFAULT_DEPTH).unwrap(), None);
}

/// The search hands the board back exactly as it received it, even when
/// its lines cross the promotion rank.
#[test]
fn search_leaves_no_trace() {
    let mut board = BoardBuilder::new()
        .man(Square(6, 6), Color::Black)
        .man(Square(1, 1), Color::White)
        .build();
    let before = board.clone();

    search(&mut board, DEFAULT_DEPTH).unwrap();
    assert_eq!(board, before);
    assert!(
        !board.piece_at(Square(6, 6)).unwrap().is_king(),
        "speculative crowning leaked out of the search"
    );
}

/// Full-game smoke test: the engine never falls behind a fixed naive
/// opponent, and the board stays consistent throughout.
#[test]
fn engine_outplays_first_move_opponent() {
    let mut board = Board::new();

    for _ in 0..60 {
        // White: always the first generated move
        let white_moves = board.generate_moves(Color::White);
        let Some(white_mv) = white_moves.first() else {
            break;
        };
        if white_mv.is_capture() {
            board.take_piece(white_mv.midpoint()).unwrap();
        }
        board.move_piece(white_mv.from(), white_mv.to()).unwrap();

        // Black: the engine
        let Some(black_mv) = find_best_move(&mut board, DEFAULT_DEPTH).unwrap() else {
            break;
        };
        if black_mv.is_capture() {
            board.take_piece(black_mv.midpoint()).unwrap();
        }
        board.move_piece(black_mv.from(), black_mv.to()).unwrap();

        assert!(board.black_count() <= 12 && board.white_count() <= 12);
    }

    assert!(
        board.black_count() >= board.white_count(),
        "engine fell behind a naive opponent: {} vs {}",
        board.black_count(),
        board.white_count()
    );
}
