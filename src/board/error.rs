//! Error types for board operations.

use std::fmt;

use super::types::Square;

/// Error type for move application failures.
///
/// The move generator and search never construct a move that trips these
/// checks; they exist so a violated precondition fails loudly instead of
/// corrupting board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    /// Coordinates outside the 8x8 board
    OutOfBounds { rank: usize, file: usize },
    /// Origin square holds no piece
    EmptyOrigin { square: Square },
    /// Destination square is already occupied
    OccupiedDestination { square: Square },
    /// Capture targets an empty square
    EmptyCapture { square: Square },
    /// Move is not legal for the side to move
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::OutOfBounds { rank, file } => {
                write!(f, "Square ({rank}, {file}) is outside the board")
            }
            InvalidMove::EmptyOrigin { square } => {
                write!(f, "No piece on origin square {square}")
            }
            InvalidMove::OccupiedDestination { square } => {
                write!(f, "Destination square {square} is occupied")
            }
            InvalidMove::EmptyCapture { square } => {
                write!(f, "No piece to capture on {square}")
            }
            InvalidMove::IllegalMove { from, to } => {
                write!(f, "Move {from} to {to} is not legal")
            }
        }
    }
}

impl std::error::Error for InvalidMove {}

/// Error type for position-string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Position string must have exactly 8 rank fields
    BadRankCount { found: usize },
    /// Invalid piece character in a rank field
    InvalidPiece { char: char },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::BadRankCount { found } => {
                write!(f, "Position must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in position")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
