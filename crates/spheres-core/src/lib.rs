//! Core types for spheres: cells, pieces, moves, the `Position` interface
//! the search engine explores, and a reference board implementing it.

mod board;
mod cell;
mod color;
mod error;
mod game_move;
mod layout;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod position;

pub use board::{Board, PrettyBoard};
pub use cell::Cell;
pub use color::Color;
pub use error::{BoardError, LayoutError};
pub use game_move::Move;
pub use layout::STARTING_LAYOUT;
pub use movegen::generate_moves;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
