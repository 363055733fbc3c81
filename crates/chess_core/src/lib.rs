// Core chess model: pieces, squares, moves, and the board itself.
pub mod board;
pub mod moves;
pub mod piece;
pub mod position;

// Re-export main types for convenience
pub use board::{Board, BoardError};
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use position::{Square, BOARD_SIZE};
