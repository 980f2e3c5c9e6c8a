//! Compact position-string notation.
//!
//! A position is 8 rank fields separated by `/`, written top-down from
//! rank 0 (Black's back row). Digits encode runs of empty squares; `w`/`b`
//! are men, `W`/`B` kings. The opening layout reads:
//!
//! ```text
//! b1b1b1b1/1b1b1b1b/b1b1b1b1/8/8/1w1w1w1w/w1w1w1w1/1w1w1w1w
//! ```

use std::str::FromStr;

use super::error::FenError;
use super::{Board, Piece, Square};

impl Board {
    /// Parse a board position from its notation string.
    ///
    /// Returns an error if the string is malformed. Material counters are
    /// rebuilt from the parsed placement.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let ranks: Vec<&str> = fen.trim().split('/').collect();

        if ranks.len() != 8 {
            return Err(FenError::BadRankCount { found: ranks.len() });
        }

        for (rank, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(rank, file), piece);
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles { rank, files: file });
            }
        }

        Ok(board)
    }

    /// Parse a board position from its notation string.
    ///
    /// # Panics
    /// Panics if the string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid position string")
    }

    /// Convert the board position to its notation string
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut ranks: Vec<String> = Vec::new();
        for rank in 0..8 {
            let mut field = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.cells[rank][file] {
                    None => empty += 1,
                    Some(piece) => {
                        if empty > 0 {
                            field.push_str(&empty.to_string());
                            empty = 0;
                        }
                        field.push(piece.to_char());
                    }
                }
            }
            if empty > 0 {
                field.push_str(&empty.to_string());
            }
            ranks.push(field);
        }
        ranks.join("/")
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
