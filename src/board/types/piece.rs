//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Piece colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for Black, -1 for White).
    ///
    /// Black is the maximizing side, so its material counts positively.
    #[inline]
    #[must_use]
    pub(crate) const fn sign(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank on which this color's men are crowned (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn promotion_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A draughts piece: a color plus a king flag.
///
/// A piece does not know where it stands; its position is the board cell
/// holding it, and the board is the single owner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    color: Color,
    king: bool,
}

impl Piece {
    /// Create an uncrowned piece of the given color
    #[inline]
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Piece { color, king: false }
    }

    /// Create a crowned piece of the given color
    #[inline]
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Piece { color, king: true }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Material value: 3 for a king, 1 for a man
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        if self.king {
            3
        } else {
            1
        }
    }

    /// Whether landing on `square` crowns this piece.
    ///
    /// White promotes on rank 0, Black on rank 7. Already-crowned pieces
    /// trivially satisfy the rule (crowning is idempotent).
    #[inline]
    #[must_use]
    pub(crate) const fn promotes_on(self, square: Square) -> bool {
        square.rank() == self.color.promotion_rank()
    }

    /// Copy of this piece with the king flag forced to `king`.
    ///
    /// Used by the undo step to restore the pre-move crowning state.
    #[inline]
    #[must_use]
    pub(crate) const fn with_king(self, king: bool) -> Self {
        Piece {
            color: self.color,
            king,
        }
    }

    /// Copy of this piece with the opposite color, same king flag
    #[inline]
    #[must_use]
    pub const fn recolored(self) -> Self {
        Piece {
            color: self.color.opponent(),
            king: self.king,
        }
    }

    /// Parse a piece from its notation character (w, W, b, B)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'w' => Some(Piece::man(Color::White)),
            'W' => Some(Piece::king(Color::White)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }

    /// Convert to its notation character: lowercase man, uppercase king
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.color, self.king) {
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }
}
