pub type GameResult<T> = Result<T, GameError>;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("cell index is out of range (expected: 0-{max_expected}, found: {found})")]
    CellOutOfRange { max_expected: usize, found: usize },
    #[error("cell ({row}, {col}) is occupied")]
    CellIsOccupied { row: usize, col: usize },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
}

impl GameError {
    pub fn cell_out_of_range(max_expected: usize, found: usize) -> Self {
        Self::CellOutOfRange {
            max_expected,
            found,
        }
    }

    pub fn cell_is_occupied(row: usize, col: usize) -> Self {
        Self::CellIsOccupied { row, col }
    }
}
