//! Play-session layer for lumelace puzzles.
//!
//! A [`Game`] wraps an immutable [`Board`](lumelace_core::Board) and tracks
//! the player's side of the table: a tray holding the solution's pieces and
//! the interior cells they have been placed on. Placements are validated
//! against the grid and the tray, never against the hidden layout, so an
//! in-progress game reveals nothing. Solving is an exact match between the
//! placements and the hidden layout.
//!
//! ```
//! use lumelace_core::{Board, Piece, Position};
//! use lumelace_game::Game;
//!
//! let board: Board = ".A.\nA/.\n...".parse().expect("valid board");
//! let mut game = Game::new(board);
//!
//! game.place(Position::new(1, 1), Piece::ObliqueMirror).expect("cell is free");
//! assert!(game.is_solved());
//! ```

pub mod game;

pub use self::game::{Game, GameError};
