use generic_array::typenum::U3;
use tracing::{debug, instrument};

use crate::game::error::{GameError, GameResult};
use crate::game::grid::{Grid, GridIndex};
use crate::game::state::{FinishedState, GameState, Mark};

/// Number of addressable cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Contents of a single board cell, [`None`] while unclaimed.
pub type Cell = Option<Mark>;

/// 3x3 playing field addressed by [`GridIndex`].
pub type Board = Grid<Cell, U3, U3>;

fn winning_lines() -> [[GridIndex; 3]; 8] {
    [
        // rows
        [
            GridIndex::new(0, 0),
            GridIndex::new(0, 1),
            GridIndex::new(0, 2),
        ],
        [
            GridIndex::new(1, 0),
            GridIndex::new(1, 1),
            GridIndex::new(1, 2),
        ],
        [
            GridIndex::new(2, 0),
            GridIndex::new(2, 1),
            GridIndex::new(2, 2),
        ],
        // columns
        [
            GridIndex::new(0, 0),
            GridIndex::new(1, 0),
            GridIndex::new(2, 0),
        ],
        [
            GridIndex::new(0, 1),
            GridIndex::new(1, 1),
            GridIndex::new(2, 1),
        ],
        [
            GridIndex::new(0, 2),
            GridIndex::new(1, 2),
            GridIndex::new(2, 2),
        ],
        // diagonals
        [
            GridIndex::new(0, 0),
            GridIndex::new(1, 1),
            GridIndex::new(2, 2),
        ],
        [
            GridIndex::new(2, 0),
            GridIndex::new(1, 1),
            GridIndex::new(0, 2),
        ],
    ]
}

fn cell_index(cell: usize) -> GameResult<GridIndex> {
    if cell >= BOARD_CELLS {
        return Err(GameError::cell_out_of_range(BOARD_CELLS - 1, cell));
    }
    Ok(GridIndex::new(cell / 3, cell % 3))
}

/// Rules engine for a single two-player game.
///
/// Owns the authoritative board and turn state. Callers request moves with
/// [`TicTacToe::place_mark`] and render from the returned [`GameState`];
/// the engine never derives game logic from presentation state.
#[derive(Debug)]
pub struct TicTacToe {
    board: Board,
    state: GameState,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Creates an engine with an empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            state: GameState::Turn(Mark::X),
        }
    }

    /// Resets all cells and hands the first turn back to X.
    ///
    /// Idempotent and callable in any state; used both for initial setup
    /// and for a rematch after a finished game.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    /// Places the current player's mark at `cell` (0-8, row-major).
    ///
    /// A rejected placement leaves the board untouched and does not consume
    /// the turn.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, cell: usize) -> GameResult<GameState> {
        let mark = match self.state {
            GameState::Turn(mark) => mark,
            GameState::Finished(_) => return Err(GameError::GameIsFinished),
        };
        let index = cell_index(cell)?;
        if self.board[index].is_some() {
            return Err(GameError::cell_is_occupied(index.row(), index.col()));
        }
        self.board[index] = Some(mark);

        let state = self.update_state(mark);
        debug!(cell, %mark, ?state, "mark placed");
        Ok(state)
    }

    /// The mark that moves next, [`None`] once the game is finished.
    pub fn current_turn(&self) -> Option<Mark> {
        match self.state {
            GameState::Turn(mark) => Some(mark),
            GameState::Finished(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Win check with the mark just placed comes first (the turn is not
    /// swapped yet), then the draw check, otherwise the turn passes. A full
    /// board that also completes a line reports the win.
    fn update_state(&mut self, mark: Mark) -> GameState {
        for line in winning_lines() {
            if line.iter().all(|&index| self.board[index] == Some(mark)) {
                self.state = GameState::Finished(FinishedState::Win(mark));
                return self.state;
            }
        }

        if self.board.iter().flatten().all(|cell| cell.is_some()) {
            self.state = GameState::Finished(FinishedState::Draw);
            return self.state;
        }

        self.state = GameState::Turn(mark.other());
        self.state
    }
}
