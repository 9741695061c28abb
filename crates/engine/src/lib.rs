pub mod bitboard;
pub mod board;
pub mod constants;
pub mod coords;
pub mod error;
pub mod executor;
pub mod game;
pub mod history;
pub mod move_gen;
pub mod r#move;
pub mod outcome;
