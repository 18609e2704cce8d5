extern crate tic_tac_toe;

use serde_json::json;
use tic_tac_toe::game::{FinishedState, GameError, GameState, Mark, TicTacToe};

#[test]
fn x_win_reported_through_the_public_api() {
    let mut game = TicTacToe::new();
    for cell in [0, 3, 1, 4] {
        assert!(matches!(game.place_mark(cell), Ok(GameState::Turn(_))));
    }
    assert_eq!(
        game.place_mark(2),
        Ok(GameState::Finished(FinishedState::Win(Mark::X)))
    );
    assert!(game.is_finished());
    assert_eq!(game.current_turn(), None);
    assert_eq!(game.place_mark(5), Err(GameError::GameIsFinished));
}

#[test]
fn rematch_resets_the_board_and_the_turn() {
    let mut game = TicTacToe::new();
    for cell in [0, 3, 1, 4, 2] {
        game.place_mark(cell).unwrap();
    }
    assert!(game.is_finished());

    game.start();
    assert_eq!(game.current_turn(), Some(Mark::X));
    assert_eq!(game.place_mark(5), Ok(GameState::Turn(Mark::O)));
}

#[test]
fn two_engines_run_independent_games() {
    let mut first = TicTacToe::new();
    let mut second = TicTacToe::new();
    first.place_mark(0).unwrap();
    assert_eq!(first.current_turn(), Some(Mark::O));
    assert_eq!(second.current_turn(), Some(Mark::X));
    second.place_mark(0).unwrap();
    assert_eq!(
        first.place_mark(0),
        Err(GameError::CellIsOccupied { row: 0, col: 0 })
    );
}

#[test]
fn state_snapshots_serialize_for_front_ends() {
    let mut game = TicTacToe::new();
    assert_eq!(
        serde_json::to_value(game.state()).unwrap(),
        json!({"Turn": "X"})
    );
    for cell in [0, 3, 1, 4, 2] {
        game.place_mark(cell).unwrap();
    }
    assert_eq!(
        serde_json::to_value(game.state()).unwrap(),
        json!({"Finished": {"Win": "X"}})
    );
}
