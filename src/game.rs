//! Turn-handling session state.
//!
//! `GameSession` is the seam the surrounding UI glue consumes: it owns the
//! persistent board, alternates the turn, and exposes the captured-piece
//! scores. Confirmed moves are applied through the board's persistent-play
//! interface (`take_piece` + `move_piece`), never through the search's
//! internal apply/undo pair.

use crate::board::{
    find_best_move, Board, Color, InvalidMove, Move, MoveList, Square, PIECES_PER_SIDE,
};

/// One in-memory game: board, side to move, and nothing else.
///
/// Discarded on drop; there is no persistence. The human plays White and
/// moves first, the engine plays Black.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    turn: Color,
}

impl GameSession {
    /// Start a session from the standard opening position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            turn: Color::White,
        }
    }

    /// Start a session from an arbitrary position and side to move.
    #[must_use]
    pub fn from_position(board: Board, turn: Color) -> Self {
        GameSession { board, turn }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Pieces `color` has captured so far
    #[must_use]
    pub fn captured_by(&self, color: Color) -> u32 {
        PIECES_PER_SIDE - self.board.count_of(color.opponent())
    }

    /// Every legal move for the side to move
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.board.generate_moves(self.turn)
    }

    /// Destinations for a selected piece.
    ///
    /// Empty when the square holds no piece of the side to move (selecting
    /// an opponent's piece offers nothing, mirroring the input flow).
    #[must_use]
    pub fn moves_from(&self, square: Square) -> MoveList {
        match self.board.piece_at(square) {
            Some(piece) if piece.color() == self.turn => self.board.moves_from(square),
            _ => MoveList::new(),
        }
    }

    /// True when the side to move has no legal move
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Apply a confirmed move for the side to move and pass the turn.
    ///
    /// The move must be one of `legal_moves()`; anything else is rejected
    /// with `InvalidMove::IllegalMove` and leaves the session untouched.
    /// A jump clears the captured square before the mover relocates.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Move, InvalidMove> {
        let mv = self
            .legal_moves()
            .find(from, to)
            .ok_or(InvalidMove::IllegalMove { from, to })?;

        if mv.is_capture() {
            self.board.take_piece(mv.midpoint())?;
        }
        self.board.move_piece(from, to)?;
        self.turn = self.turn.opponent();
        Ok(mv)
    }

    /// Let the engine choose and play Black's reply.
    ///
    /// Runs the search at `max_depth` and applies the chosen move through
    /// the normal confirmed-move path. Returns `Ok(None)` when Black has
    /// no legal move. Calling this when it is not Black's turn fails with
    /// `InvalidMove::IllegalMove`, since the chosen move is validated
    /// against the side to move.
    pub fn play_engine_move(&mut self, max_depth: u32) -> Result<Option<Move>, InvalidMove> {
        match find_best_move(&mut self.board, max_depth)? {
            Some(mv) => {
                self.play(mv.from(), mv.to())?;
                Ok(Some(mv))
            }
            None => Ok(None),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
