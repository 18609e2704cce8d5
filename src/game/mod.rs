pub mod error;
pub mod grid;
pub mod state;
pub mod tic_tac_toe;

pub use error::{GameError, GameResult};
pub use state::{FinishedState, GameState, Mark};
pub use tic_tac_toe::TicTacToe;
