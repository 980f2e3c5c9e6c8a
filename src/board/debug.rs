use std::fmt;

use super::{Board, Square};

impl fmt::Display for Board {
    /// Render the board as a grid, rank 0 (Black's back row) at the top.
    /// Men print lowercase, kings uppercase, empty squares as dots.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8 {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let ch = match self.piece_at(Square(rank, file)) {
                    Some(piece) => piece.to_char(),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
