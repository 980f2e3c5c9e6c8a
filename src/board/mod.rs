//! Draughts board representation and game logic.
//!
//! An 8x8 grid of optional pieces with per-color material counters.
//! Supports move generation, in-place make/unmake, and alpha-beta search
//! for the computer-controlled side.
//!
//! # Example
//! ```
//! use draughts_engine::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.generate_moves(Color::Black);
//! println!("Opening position has {} moves for Black", moves.len());
//! ```

mod builder;
mod debug;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, InvalidMove, SquareError};
pub use state::{Board, PIECES_PER_SIDE};
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, Square};

// Public API - search functions and configuration
pub use search::{find_best_move, search, SearchResult, SearchStats, DEFAULT_DEPTH};

// Internal types exposed for advanced usage (but not in prelude)
pub use state::UnmakeInfo;
