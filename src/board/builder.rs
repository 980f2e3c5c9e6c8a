//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than parsing notation
//! strings.
//!
//! # Example
//! ```
//! use draughts_engine::board::{BoardBuilder, Color, Square};
//!
//! let board = BoardBuilder::new()
//!     .man(Square(4, 4), Color::Black)
//!     .king(Square(5, 1), Color::White)
//!     .build();
//! assert_eq!(board.black_count(), 1);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard opening layout.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if !sq.is_playable() {
                    continue;
                }
                if rank < 3 {
                    builder.pieces.push((sq, Piece::man(Color::Black)));
                } else if rank > 4 {
                    builder.pieces.push((sq, Piece::man(Color::White)));
                }
            }
        }
        builder
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Place an uncrowned piece.
    #[must_use]
    pub fn man(self, square: Square, color: Color) -> Self {
        self.piece(square, Piece::man(color))
    }

    /// Place a crowned piece.
    #[must_use]
    pub fn king(self, square: Square, color: Color) -> Self {
        self.piece(square, Piece::king(color))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    ///
    /// Material counters are derived from the placed pieces.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set_piece(square, piece);
        }
        board
    }
}
