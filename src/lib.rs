pub mod board;
pub mod game;

pub use board::{Board, Color, Move, Piece, Square};
pub use game::GameSession;
