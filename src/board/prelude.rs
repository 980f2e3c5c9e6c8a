//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use draughts_engine::board::prelude::*;
//! ```

pub use super::{
    find_best_move, search, Board, BoardBuilder, Color, FenError, InvalidMove, Move, MoveList,
    Piece, SearchResult, SearchStats, Square, SquareError, DEFAULT_DEPTH,
};
