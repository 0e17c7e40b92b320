//! Core board model and beam tracer for lumelace puzzles.
//!
//! A lumelace puzzle is a square grid with a hidden layout of mirrors.
//! Labeled light beams enter from the border, bounce through the hidden
//! pieces, and exit the border again; the player reconstructs the layout
//! from the labels alone. This crate parses the textual board format and
//! computes everything derived from it. It contains no solver, generator,
//! or rendering code.
//!
//! # Overview
//!
//! - [`board`]: the parsed [`Board`], its textual format, and derived
//!   views (pieces, labels, edge walk, rotation and transposition)
//! - [`trace`]: beam tracing and the optional topology validation
//! - [`piece`], [`direction`], [`position`]: the vocabulary types
//! - [`beam`]: labels, traced beams, and their display colours
//!
//! # Examples
//!
//! ```
//! use lumelace_core::{Board, Piece, Position};
//!
//! let board: Board = concat!(
//!     ".A..\n",
//!     "A/..\n",
//!     "....\n",
//!     "....",
//! )
//! .parse()
//! .expect("valid board");
//!
//! // the player has to place one oblique mirror
//! assert_eq!(board.pieces(), vec![Piece::ObliqueMirror]);
//!
//! // the beam labeled A enters at the top and is deflected out the left
//! let beams = board.beams().expect("beams exit");
//! assert_eq!(beams.len(), 1);
//! assert_eq!(
//!     beams[0].endpoints(),
//!     (Position::new(1, 0), Position::new(0, 1))
//! );
//! ```

pub mod beam;
pub mod board;
pub mod direction;
pub mod piece;
pub mod position;
pub mod trace;

pub use self::{
    beam::{BEAM_COLOURS, Beam, Label, beam_colour},
    board::{Board, EMPTY_SYMBOL, EdgeLocations, ParseBoardError},
    direction::Direction,
    piece::Piece,
    position::Position,
    trace::{BeamTopologyError, TraceError},
};
