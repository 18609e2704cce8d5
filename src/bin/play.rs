//! Two players sharing one terminal. The engine owns the rules; this
//! binary only renders state and forwards typed cell numbers.

use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tic_tac_toe::game::tic_tac_toe::Board;
use tic_tac_toe::game::{FinishedState, GameState, TicTacToe};

/// Two-player tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "play", version)]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
struct Cli {
    /// Quit after a single game instead of offering a rematch
    #[arg(long)]
    one_shot: bool,
}

/// Draws the board; empty cells show their number as the input legend.
fn render(board: &Board) -> String {
    let mut out = String::new();
    for (index, cell) in board.all_indexed() {
        let glyph = match cell {
            Some(mark) => mark.to_string(),
            None => (index.row() * 3 + index.col()).to_string(),
        };
        out.push(' ');
        out.push_str(&glyph);
        out.push(' ');
        if index.col() < 2 {
            out.push('|');
        } else if index.row() < 2 {
            out.push_str("\n---+---+---\n");
        }
    }
    out
}

fn banner(outcome: FinishedState) -> String {
    match outcome {
        FinishedState::Win(mark) => format!("{mark}'s Wins!"),
        FinishedState::Draw => "Draw!".to_string(),
    }
}

/// Prompts and reads one line; returns 0 bytes on end of input.
fn read_line(prompt: &str, input: &mut String) -> io::Result<usize> {
    print!("{prompt}");
    io::stdout().flush()?;
    input.clear();
    io::stdin().read_line(input)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut game = TicTacToe::new();
    let mut input = String::new();

    loop {
        println!("\n{}\n", render(game.board()));
        match game.state() {
            GameState::Turn(mark) => {
                if read_line(&format!("{mark}'s turn (cell 0-8): "), &mut input)? == 0 {
                    break;
                }
                let cell = match input.trim().parse::<usize>() {
                    Ok(cell) => cell,
                    Err(_) => {
                        println!("enter a cell number between 0 and 8");
                        continue;
                    }
                };
                if let Err(err) = game.place_mark(cell) {
                    println!("{err}");
                }
            }
            GameState::Finished(outcome) => {
                println!("{}", banner(outcome));
                if cli.one_shot {
                    break;
                }
                if read_line("play again? [y/N] ", &mut input)? == 0 {
                    break;
                }
                if !input.trim().eq_ignore_ascii_case("y") {
                    break;
                }
                game.start();
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use tic_tac_toe::game::Mark;

    #[test]
    fn test_render_legend_and_marks() {
        let mut game = TicTacToe::new();
        game.place_mark(4).unwrap();
        let board = render(game.board());
        assert_eq!(board, " 0 | 1 | 2 \n---+---+---\n 3 | X | 5 \n---+---+---\n 6 | 7 | 8 ");
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(banner(FinishedState::Win(Mark::X)), "X's Wins!");
        assert_eq!(banner(FinishedState::Win(Mark::O)), "O's Wins!");
        assert_eq!(banner(FinishedState::Draw), "Draw!");
    }
}
