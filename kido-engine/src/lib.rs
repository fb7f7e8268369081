pub mod engine;
pub mod error;
pub mod goban;
pub mod ko;
pub mod stone;

/// Side length of the (square) board.
pub const BOARD_SIZE: u8 = 19;

/// An intersection as `(row, col)`, origin top-left.
pub type Point = (u8, u8);

pub use engine::try_play;
pub use error::GoError;
pub use goban::{Goban, Group, Placement};
pub use stone::Stone;
