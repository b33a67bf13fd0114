//! # Drop Four
//!
//! A two-player Connect Four style game: discs fall to the lowest free cell of
//! a column and four in a row wins. Ships with a terminal UI built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, state machine
//! - [`ui`] — Terminal UI: board rendering, pointer and keyboard input
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
