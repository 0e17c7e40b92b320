//! A play session over a parsed board.

use std::fmt::{self, Display};

use lumelace_core::{Board, EMPTY_SYMBOL, Piece, Position};

/// Errors produced by play-session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The target cell is on the border, a corner, or outside the grid.
    #[display("{position} is not an interior cell")]
    OutsideInterior {
        /// The rejected cell.
        position: Position,
    },
    /// The target cell already holds a placed piece.
    #[display("cell {position} is already occupied")]
    CellOccupied {
        /// The occupied cell.
        position: Position,
    },
    /// The target cell holds no placed piece.
    #[display("cell {position} is empty")]
    CellEmpty {
        /// The empty cell.
        position: Position,
    },
    /// Every piece of the requested kind has already been placed.
    #[display("no {piece} piece left in the tray")]
    PieceUnavailable {
        /// The requested piece kind.
        piece: Piece,
    },
}

/// A play session: the player's placements on top of an immutable [`Board`].
///
/// The board's hidden layout is the solution and is never mutated. The
/// session hands the player a tray holding exactly the solution's pieces and
/// tracks where they have been placed; solving is an exact equality check
/// between the placements and the hidden layout.
///
/// # Examples
///
/// ```
/// use lumelace_core::{Board, Piece, Position};
/// use lumelace_game::Game;
///
/// let board: Board = ".A.\nA/.\n...".parse().expect("valid board");
/// let mut game = Game::new(board);
/// assert_eq!(game.unplaced_pieces(), vec![Piece::ObliqueMirror]);
/// assert!(!game.is_solved());
///
/// game.place(Position::new(1, 1), Piece::ObliqueMirror)
///     .expect("cell is free");
/// assert!(game.is_complete());
/// assert!(game.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    placed: Vec<Option<Piece>>,
}

impl Game {
    /// Creates a session with an empty interior and a full tray.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let placed = vec![None; board.n() * board.n()];
        Self { board, placed }
    }

    /// Returns the board being played.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player's piece at a full-grid position.
    ///
    /// `None` when the cell is empty or not an interior cell.
    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        if !self.board.on_interior(position) {
            return None;
        }
        self.placed[self.index(position)]
    }

    /// Returns the player's placements in row-major interior order.
    #[must_use]
    pub fn placements(&self) -> &[Option<Piece>] {
        &self.placed
    }

    /// Returns the tray: the board's pieces not yet placed, sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumelace_core::{Board, Piece, Position};
    /// use lumelace_game::Game;
    ///
    /// let board: Board = "....\n./\\.\n....\n....".parse().expect("valid board");
    /// let mut game = Game::new(board);
    /// assert_eq!(
    ///     game.unplaced_pieces(),
    ///     vec![Piece::ObliqueMirror, Piece::ReverseObliqueMirror],
    /// );
    ///
    /// game.place(Position::new(2, 2), Piece::ObliqueMirror)
    ///     .expect("cell is free");
    /// assert_eq!(game.unplaced_pieces(), vec![Piece::ReverseObliqueMirror]);
    /// ```
    #[must_use]
    pub fn unplaced_pieces(&self) -> Vec<Piece> {
        let mut tray = self.board.pieces();
        for piece in self.placed.iter().copied().flatten() {
            if let Some(index) = tray.iter().position(|&held| held == piece) {
                tray.remove(index);
            }
        }
        tray
    }

    /// Returns `true` if every tray piece has been placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unplaced_pieces().is_empty()
    }

    /// Returns `true` if the placements match the hidden layout exactly.
    ///
    /// Matching is cell-by-cell equality. A different arrangement that
    /// happens to produce the same beam paths does not count as solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.placed == self.board.hidden_blocks()
    }

    /// Places a tray piece on an empty interior cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutsideInterior`] if `position` is not an
    /// interior cell, [`GameError::CellOccupied`] if a piece is already
    /// there, and [`GameError::PieceUnavailable`] if no piece of that kind
    /// is left in the tray.
    pub fn place(&mut self, position: Position, piece: Piece) -> Result<(), GameError> {
        if !self.board.on_interior(position) {
            return Err(GameError::OutsideInterior { position });
        }
        let index = self.index(position);
        if self.placed[index].is_some() {
            return Err(GameError::CellOccupied { position });
        }
        if !self.unplaced_pieces().contains(&piece) {
            return Err(GameError::PieceUnavailable { piece });
        }
        self.placed[index] = Some(piece);
        Ok(())
    }

    /// Takes the piece at an interior cell back into the tray.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutsideInterior`] if `position` is not an
    /// interior cell, and [`GameError::CellEmpty`] if there is nothing to
    /// remove.
    pub fn remove(&mut self, position: Position) -> Result<Piece, GameError> {
        if !self.board.on_interior(position) {
            return Err(GameError::OutsideInterior { position });
        }
        let index = self.index(position);
        self.placed[index]
            .take()
            .ok_or(GameError::CellEmpty { position })
    }

    /// Moves a placed piece from one interior cell to another.
    ///
    /// Moving a piece onto its own cell is a no-op. The session is left
    /// unchanged when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutsideInterior`] if either cell is not an
    /// interior cell, [`GameError::CellEmpty`] if `from` holds no piece, and
    /// [`GameError::CellOccupied`] if `to` already holds one.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<(), GameError> {
        if !self.board.on_interior(from) {
            return Err(GameError::OutsideInterior { position: from });
        }
        if !self.board.on_interior(to) {
            return Err(GameError::OutsideInterior { position: to });
        }
        let from_index = self.index(from);
        if self.placed[from_index].is_none() {
            return Err(GameError::CellEmpty { position: from });
        }
        if from == to {
            return Ok(());
        }
        let to_index = self.index(to);
        if self.placed[to_index].is_some() {
            return Err(GameError::CellOccupied { position: to });
        }
        self.placed[to_index] = self.placed[from_index].take();
        Ok(())
    }

    /// Clears every placement back into the tray.
    pub fn reset(&mut self) {
        self.placed.fill(None);
    }

    fn index(&self, position: Position) -> usize {
        (position.y() - 1) * self.board.n() + (position.x() - 1)
    }
}

/// The in-play view: border labels around the player's placements. The
/// board's hidden layout stays masked.
impl Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.board.n();
        for y in 0..n + 2 {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..n + 2 {
                let position = Position::new(x, y);
                let symbol = if self.board.on_interior(position) {
                    self.piece_at(position)
                        .map_or(EMPTY_SYMBOL, |piece| piece.symbol())
                } else {
                    self.board
                        .label_at(position)
                        .map_or(EMPTY_SYMBOL, |label| label.as_char())
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
