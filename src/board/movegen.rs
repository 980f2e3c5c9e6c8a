//! Candidate move generation.
//!
//! Direction sets are data, not branching: `directions_for` maps a piece's
//! color and king flag to its `(dy, dx)` capability slice. Generation scans
//! the grid row-major and emits each square's moves in direction order, so
//! the output order is deterministic and fixes tie-breaking in the search.

use super::{Board, Color, Move, MoveList, Piece, Square};

/// White men move toward rank 0
const WHITE_MAN_DIRECTIONS: [(isize, isize); 2] = [(-1, -1), (-1, 1)];

/// Black men move toward rank 7
const BLACK_MAN_DIRECTIONS: [(isize, isize); 2] = [(1, -1), (1, 1)];

/// Kings move both ways, White-bound diagonals first
const KING_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Capability table: the move directions available to a piece
pub(crate) const fn directions_for(color: Color, king: bool) -> &'static [(isize, isize)] {
    if king {
        &KING_DIRECTIONS
    } else {
        match color {
            Color::White => &WHITE_MAN_DIRECTIONS,
            Color::Black => &BLACK_MAN_DIRECTIONS,
        }
    }
}

impl Board {
    /// Generate every candidate move for the given color.
    ///
    /// Captures are optional and single-jump only: a simple move is emitted
    /// even when a jump is available, and no move displaces more than one
    /// enemy piece. This matches the game's rules as played, not an
    /// oversight to correct.
    #[must_use]
    pub fn generate_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if let Some(piece) = self.piece_at(sq) {
                    if piece.color() == color {
                        self.piece_moves_into(sq, piece, &mut moves);
                    }
                }
            }
        }
        moves
    }

    /// Candidate moves for the piece on one square (empty square: no moves)
    #[must_use]
    pub fn moves_from(&self, square: Square) -> MoveList {
        let mut moves = MoveList::new();
        if let Some(piece) = self.piece_at(square) {
            self.piece_moves_into(square, piece, &mut moves);
        }
        moves
    }

    /// Per-direction emission: adjacent empty square gives a simple move,
    /// adjacent enemy with an empty landing square behind it gives a jump.
    fn piece_moves_into(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        for &(dy, dx) in directions_for(piece.color(), piece.is_king()) {
            let Some(step) = from.offset(dy, dx) else {
                continue;
            };
            match self.piece_at(step) {
                None => moves.push(Move::new(from, step)),
                Some(blocker) if blocker.color() != piece.color() => {
                    if let Some(landing) = step.offset(dy, dx) {
                        if self.is_empty(landing) {
                            moves.push(Move::new(from, landing));
                        }
                    }
                }
                Some(_) => {}
            }
        }
    }
}
