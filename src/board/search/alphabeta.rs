//! The minimize/maximize recursion and root move loop.

use super::{SearchResult, SearchStats, INFINITY};
use crate::board::{Board, Color, InvalidMove};

/// Mutable state threaded through one search call
pub(crate) struct SearchContext<'a> {
    board: &'a mut Board,
    max_depth: u32,
    stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(board: &'a mut Board, max_depth: u32) -> Self {
        SearchContext {
            board,
            max_depth,
            stats: SearchStats::default(),
        }
    }

    /// Root move loop.
    ///
    /// Each root candidate is scored with a fresh full window and strict
    /// `>` keeps the earliest best move, so generation order decides ties.
    pub(crate) fn root(mut self) -> Result<SearchResult, InvalidMove> {
        let moves = self.board.generate_moves(Color::Black);
        if moves.is_empty() {
            return Ok(SearchResult {
                best_move: None,
                score: self.board.evaluate(),
                stats: self.stats,
            });
        }

        let mut best_move = None;
        let mut best_score = -INFINITY;

        for &mv in &moves {
            let info = self.board.make_move(mv)?;
            let score = self.minimize(1, -INFINITY, INFINITY)?;
            self.board.unmake_move(mv, info);

            #[cfg(feature = "logging")]
            log::debug!("root {mv}: {score}");

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        #[cfg(feature = "logging")]
        if let Some(best) = best_move {
            log::debug!(
                "best {best} score {best_score} after {} nodes ({} cutoffs)",
                self.stats.nodes,
                self.stats.cutoffs,
            );
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            stats: self.stats,
        })
    }

    /// Black to move: fold child scores into a running maximum.
    ///
    /// At the depth limit, or when Black has no moves, the frozen position
    /// is evaluated statically (no pass semantics).
    fn maximize(&mut self, depth: u32, mut alpha: i32, beta: i32) -> Result<i32, InvalidMove> {
        self.stats.nodes += 1;
        if depth >= self.max_depth {
            return Ok(self.board.evaluate());
        }

        let moves = self.board.generate_moves(Color::Black);
        if moves.is_empty() {
            return Ok(self.board.evaluate());
        }

        let mut best = -INFINITY;
        for &mv in &moves {
            let info = self.board.make_move(mv)?;
            let score = self.minimize(depth + 1, alpha, beta)?;
            self.board.unmake_move(mv, info);

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        Ok(best)
    }

    /// White to move: the mirror of `maximize`, tightening beta
    fn minimize(&mut self, depth: u32, alpha: i32, mut beta: i32) -> Result<i32, InvalidMove> {
        self.stats.nodes += 1;
        if depth >= self.max_depth {
            return Ok(self.board.evaluate());
        }

        let moves = self.board.generate_moves(Color::White);
        if moves.is_empty() {
            return Ok(self.board.evaluate());
        }

        let mut best = INFINITY;
        for &mv in &moves {
            let info = self.board.make_move(mv)?;
            let score = self.maximize(depth + 1, alpha, beta)?;
            self.board.unmake_move(mv, info);

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        Ok(best)
    }
}
