//! Command-line front end for lumelace puzzles.
//!
//! # Usage
//!
//! Print the player view of a puzzle file, or reveal its hidden layout:
//!
//! ```sh
//! lumelace show puzzle.txt
//! lumelace show --solution puzzle.txt
//! ```
//!
//! Trace every labeled beam through the hidden layout:
//!
//! ```sh
//! lumelace trace puzzle.txt
//! ```
//!
//! Check an attempted layout against a puzzle. Exits with status 1 when the
//! attempt does not solve it:
//!
//! ```sh
//! lumelace check puzzle.txt attempt.txt
//! ```

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use lumelace_core::{Board, Position};
use lumelace_game::Game;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the player view of a puzzle, with its piece tray.
    Show {
        /// Puzzle file to read.
        file: PathBuf,

        /// Reveal the hidden layout instead of masking it.
        #[arg(long)]
        solution: bool,
    },
    /// Trace every labeled beam and print its path.
    Trace {
        /// Puzzle file to read.
        file: PathBuf,
    },
    /// Check an attempted layout against a puzzle.
    Check {
        /// Puzzle file holding the hidden layout.
        puzzle: PathBuf,

        /// Attempt file with the player's pieces filled in.
        attempt: PathBuf,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(2);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    match &args.command {
        Command::Show { file, solution } => show(file, *solution),
        Command::Trace { file } => trace(file),
        Command::Check { puzzle, attempt } => check(puzzle, attempt),
    }
}

fn read_board(path: &Path) -> Result<Board, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let board = text.parse::<Board>()?;
    log::debug!("parsed {0}x{0} board from {1}", board.n(), path.display());
    Ok(board)
}

fn show(file: &Path, solution: bool) -> Result<(), Box<dyn Error>> {
    let board = read_board(file)?;
    if solution {
        println!("{}", board.solution_string());
    } else {
        println!("{}", board.puzzle_string());
    }
    Ok(())
}

fn trace(file: &Path) -> Result<(), Box<dyn Error>> {
    let board = read_board(file)?;
    let beams = board.beams()?;
    log::debug!("traced {} beams", beams.len());
    for beam in &beams {
        let path = beam
            .path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        println!("{} [{}]: {path}", beam.label, beam.colour());
    }
    Ok(())
}

fn check(puzzle: &Path, attempt: &Path) -> Result<(), Box<dyn Error>> {
    let puzzle = read_board(puzzle)?;
    let attempt = read_board(attempt)?;
    if attempt.n() != puzzle.n() {
        return Err(format!(
            "attempt grid is {0}x{0} but puzzle grid is {1}x{1}",
            attempt.n(),
            puzzle.n(),
        )
        .into());
    }

    let mut game = Game::new(puzzle);
    for y in 1..=attempt.n() {
        for x in 1..=attempt.n() {
            let position = Position::new(x, y);
            if let Some(piece) = attempt.piece_at(position) {
                game.place(position, piece)?;
            }
        }
    }
    log::debug!(
        "attempt places {} of {} pieces",
        game.placements().iter().flatten().count(),
        game.board().pieces().len(),
    );

    if !game.is_solved() {
        println!("not solved");
        process::exit(1);
    }
    println!("solved");
    Ok(())
}
