use super::{Board, Color, InvalidMove, Move, Piece, Square, UnmakeInfo};

impl Board {
    fn check_bounds(sq: Square) -> Result<(), InvalidMove> {
        if sq.in_bounds() {
            Ok(())
        } else {
            Err(InvalidMove::OutOfBounds {
                rank: sq.rank(),
                file: sq.file(),
            })
        }
    }

    /// Relocate the piece on `from` to the empty square `to`.
    ///
    /// This is the persistent-play interface: turn-handling glue applies a
    /// confirmed move with it (clearing the jumped square via `take_piece`
    /// first for captures). The promotion rule fires as a side effect of
    /// landing on the crowning rank.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), InvalidMove> {
        Self::check_bounds(from)?;
        Self::check_bounds(to)?;
        let piece =
            self.cells[from.rank()][from.file()].ok_or(InvalidMove::EmptyOrigin { square: from })?;
        if self.cells[to.rank()][to.file()].is_some() {
            return Err(InvalidMove::OccupiedDestination { square: to });
        }

        self.cells[from.rank()][from.file()] = None;
        self.cells[to.rank()][to.file()] = Some(if piece.promotes_on(to) {
            piece.with_king(true)
        } else {
            piece
        });
        Ok(())
    }

    /// Remove the piece on `square` and decrement its color's counter.
    ///
    /// Returns the removed piece. Targeting an empty square is a programmer
    /// error and reported as `InvalidMove::EmptyCapture`.
    pub fn take_piece(&mut self, square: Square) -> Result<Piece, InvalidMove> {
        Self::check_bounds(square)?;
        let piece = self.cells[square.rank()][square.file()]
            .take()
            .ok_or(InvalidMove::EmptyCapture { square })?;
        match piece.color() {
            Color::White => self.white_count -= 1,
            Color::Black => self.black_count -= 1,
        }
        Ok(piece)
    }

    /// Apply a candidate move in place, returning the undo token.
    ///
    /// For a jump the piece on the midpoint square is removed first; the
    /// mover then relocates, crowning if it lands on its promotion rank.
    /// The token records the pre-move king flag, the (defensively recorded)
    /// prior destination occupant, and the removed piece.
    pub(crate) fn make_move(&mut self, mv: Move) -> Result<UnmakeInfo, InvalidMove> {
        let from = mv.from();
        let to = mv.to();
        let piece = self.cells[from.rank()][from.file()]
            .ok_or(InvalidMove::EmptyOrigin { square: from })?;
        let displaced = self.cells[to.rank()][to.file()];
        if displaced.is_some() {
            return Err(InvalidMove::OccupiedDestination { square: to });
        }

        let captured = if mv.is_capture() {
            let mid = mv.midpoint();
            Some((mid, self.take_piece(mid)?))
        } else {
            None
        };

        let mover_was_king = piece.is_king();
        self.cells[from.rank()][from.file()] = None;
        self.cells[to.rank()][to.file()] = Some(if piece.promotes_on(to) {
            piece.with_king(true)
        } else {
            piece
        });

        Ok(UnmakeInfo {
            mover_was_king,
            displaced,
            captured,
        })
    }

    /// Reverse a move applied with `make_move`.
    ///
    /// The mover returns to its origin square with its recorded king flag
    /// (undoing a speculative crowning), the destination square gets back
    /// its prior occupant, and a jumped piece is restored to the midpoint
    /// with its counter re-incremented. After this the board is equal in
    /// every cell, counter, and king flag to its state before the apply.
    pub(crate) fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let from = mv.from();
        let to = mv.to();
        let piece = self.cells[to.rank()][to.file()]
            .take()
            .expect("unmake_move: destination square empty");

        self.cells[to.rank()][to.file()] = info.displaced;
        self.cells[from.rank()][from.file()] = Some(piece.with_king(info.mover_was_king));

        if let Some((square, captured)) = info.captured {
            self.set_piece(square, captured);
        }
    }
}
