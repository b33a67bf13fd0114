//! Core game logic: board, players, win detection and the turn state machine.

mod board;
mod engine;
mod player;
pub mod win;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, MIN_SIDE};
pub use engine::{GameEngine, Phase, Placement};
pub use player::Player;
pub use win::{Orientation, WinningLine, WIN_LENGTH};
