//! Depth-limited alpha-beta search for the maximizing side (Black).
//!
//! The search mutates the caller's board in place: each node applies a
//! candidate move, recurses, and restores the board exactly via the undo
//! token before trying the next candidate. No board copies are made inside
//! the tree. The `&mut Board` borrow makes the exclusivity contract
//! explicit: nothing else may observe the board mid-search, and it comes
//! back fully restored.
//!
//! Pruning never changes the returned score, only the number of nodes
//! visited, and ties between equal root moves keep the earliest one in
//! generation order.

mod alphabeta;

use alphabeta::SearchContext;

use super::{Board, InvalidMove, Move};

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 4;

/// Sentinel beyond any reachable material score
pub(crate) const INFINITY: i32 = 1 << 16;

/// Counters tracked during a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior and leaf nodes visited
    pub nodes: u64,
    /// Beta cutoffs taken
    pub cutoffs: u64,
}

/// Outcome of a search: the chosen move, its score, and the work done.
///
/// `best_move` is `None` when the maximizing side has no legal move, in
/// which case `score` is the static evaluation of the frozen position.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub stats: SearchStats,
}

/// Find the best move for Black, searching `max_depth` plies deep.
///
/// `Ok(None)` means Black has no legal move (game over for that side).
/// The board is mutated during the call and returned restored; the error
/// arm only fires on a corrupted board, never for any reachable position.
pub fn find_best_move(board: &mut Board, max_depth: u32) -> Result<Option<Move>, InvalidMove> {
    Ok(search(board, max_depth)?.best_move)
}

/// Run a full root search, returning the move, score, and statistics
pub fn search(board: &mut Board, max_depth: u32) -> Result<SearchResult, InvalidMove> {
    SearchContext::new(board, max_depth).root()
}
