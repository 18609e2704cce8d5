//! Rules engine for two-player tic-tac-toe.

pub mod game;
