//! Board representation and the textual puzzle format.
//!
//! A puzzle is a square character grid. The outer ring holds beam labels,
//! the interior holds the hidden pieces, and `.` marks an empty cell
//! everywhere:
//!
//! ```text
//! ....A.
//! ......
//! ......
//! .../\A
//! B....B
//! ...CC.
//! ```
//!
//! Tracing the labeled beams through the interior lives in
//! [`trace`](crate::trace).

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    str::FromStr,
};

use crate::{Label, Piece, Position};

/// The character marking an empty cell, on the border and interior alike.
pub const EMPTY_SYMBOL: char = '.';

/// Errors produced when a textual puzzle grid is malformed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The grid needs a border row above and below at least one interior
    /// row.
    #[display("board needs at least 3 rows, got {rows}")]
    TooFewRows {
        /// Number of non-blank, non-comment lines found.
        rows: usize,
    },
    /// A row's length differs from the first row's.
    #[display("row {row} has length {found}, expected {expected}")]
    UnevenRowLength {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The grid's height and width differ.
    #[display("board is {columns}x{rows}, expected a square grid")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        columns: usize,
    },
    /// An interior cell holds a character that is not a piece symbol or
    /// `.`.
    #[display("unknown symbol {symbol:?} at {position}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Where it was found.
        position: Position,
    },
}

/// A parsed puzzle board: the hidden piece layout plus the labeled border.
///
/// Boards are immutable once parsed; piece lists, beam paths, and
/// transformed copies are all derived on demand. Placing pieces during play
/// happens in a separate layer so the solution stays untouched.
///
/// # Examples
///
/// ```
/// use lumelace_core::{Board, Piece};
///
/// let board: Board = ".A.\nA/.\n...".parse().expect("valid board");
/// assert_eq!(board.n(), 1);
/// assert_eq!(board.pieces(), vec![Piece::ObliqueMirror]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    n: usize,
    /// Interior cells, row-major.
    hidden: Vec<Option<Piece>>,
    /// Border labels per edge; top/bottom indexed by `x - 1`, left/right
    /// by `y - 1`. Corner content is never stored.
    edge_top: Vec<Option<Label>>,
    edge_bottom: Vec<Option<Label>>,
    edge_left: Vec<Option<Label>>,
    edge_right: Vec<Option<Label>>,
}

impl Board {
    /// Parses a full board from its textual grid.
    ///
    /// Blank lines and lines starting with `#` are ignored. The remaining
    /// lines must form a square grid of at least 3x3. Interior cells must
    /// be piece symbols or `.`; any other border character becomes a beam
    /// label, and the four corner cells are ignored entirely.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseBoardError`] describing the first problem found
    /// when the grid is too small, not square, or an interior cell holds
    /// an unknown symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumelace_core::{Board, ParseBoardError};
    ///
    /// let board = Board::parse(".A.\nA/.\n...").expect("valid board");
    /// assert_eq!(board.n(), 1);
    ///
    /// let err = Board::parse("..\n..").unwrap_err();
    /// assert_eq!(err, ParseBoardError::TooFewRows { rows: 2 });
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseBoardError> {
        let grid: Vec<Vec<char>> = text
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
            .map(|line| line.chars().collect())
            .collect();

        let rows = grid.len();
        if rows < 3 {
            return Err(ParseBoardError::TooFewRows { rows });
        }
        let columns = grid[0].len();
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != columns {
                return Err(ParseBoardError::UnevenRowLength {
                    row,
                    expected: columns,
                    found: cells.len(),
                });
            }
        }
        if columns != rows {
            return Err(ParseBoardError::NotSquare { rows, columns });
        }

        let n = rows - 2;
        let mut hidden = vec![None; n * n];
        for y in 1..=n {
            for x in 1..=n {
                let symbol = grid[y][x];
                if symbol == EMPTY_SYMBOL {
                    continue;
                }
                let Some(piece) = Piece::from_symbol(symbol) else {
                    return Err(ParseBoardError::UnknownSymbol {
                        symbol,
                        position: Position::new(x, y),
                    });
                };
                hidden[(y - 1) * n + (x - 1)] = Some(piece);
            }
        }

        let edge_top = (1..=n).map(|x| Label::new(grid[0][x])).collect();
        let edge_bottom = (1..=n).map(|x| Label::new(grid[n + 1][x])).collect();
        let edge_left = (1..=n).map(|y| Label::new(grid[y][0])).collect();
        let edge_right = (1..=n).map(|y| Label::new(grid[y][n + 1])).collect();

        Ok(Self {
            n,
            hidden,
            edge_top,
            edge_bottom,
            edge_left,
            edge_right,
        })
    }

    /// Returns the interior side length.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Returns the hidden solution layout, row-major over the interior.
    #[must_use]
    pub fn hidden_blocks(&self) -> &[Option<Piece>] {
        &self.hidden
    }

    /// Returns the hidden solution layout one interior row at a time.
    pub fn hidden_rows(&self) -> impl Iterator<Item = &[Option<Piece>]> {
        self.hidden.chunks_exact(self.n)
    }

    /// Returns the piece at a full-grid position.
    ///
    /// `None` when the cell is empty or `position` is not on the interior.
    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        if !self.on_interior(position) {
            return None;
        }
        self.hidden[(position.y() - 1) * self.n + (position.x() - 1)]
    }

    /// Returns the label at a full-grid position.
    ///
    /// `None` when the cell is unlabeled or `position` is not a border
    /// cell (corners carry no labels).
    #[must_use]
    pub fn label_at(&self, position: Position) -> Option<Label> {
        let (x, y) = (position.x(), position.y());
        let n = self.n;
        if y == 0 && (1..=n).contains(&x) {
            self.edge_top[x - 1]
        } else if y == n + 1 && (1..=n).contains(&x) {
            self.edge_bottom[x - 1]
        } else if x == 0 && (1..=n).contains(&y) {
            self.edge_left[y - 1]
        } else if x == n + 1 && (1..=n).contains(&y) {
            self.edge_right[y - 1]
        } else {
            None
        }
    }

    /// Returns `true` if `position` is a border cell.
    ///
    /// Corners and positions outside the grid are not border cells.
    #[must_use]
    pub fn on_edge(&self, position: Position) -> bool {
        let (x, y) = (position.x(), position.y());
        let n = self.n;
        if x > n + 1 || y > n + 1 {
            return false;
        }
        (x == 0 || x == n + 1) != (y == 0 || y == n + 1)
    }

    /// Returns `true` if `position` is an interior cell.
    #[must_use]
    pub fn on_interior(&self, position: Position) -> bool {
        (1..=self.n).contains(&position.x()) && (1..=self.n).contains(&position.y())
    }

    /// Returns every piece on the board, in sorted order.
    ///
    /// This is the multiset of pieces handed to the player.
    #[must_use]
    pub fn pieces(&self) -> Vec<Piece> {
        let mut pieces: Vec<Piece> = self.hidden.iter().copied().flatten().collect();
        pieces.sort_unstable();
        pieces
    }

    /// Returns an iterator over all border cells in canonical order: top
    /// edge left to right, left edge top to bottom, bottom edge left to
    /// right, right edge top to bottom. Corners are never yielded.
    ///
    /// The canonical order decides which of a label's cells a beam is
    /// traced from.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumelace_core::{Board, Position};
    ///
    /// let board: Board = ".A.\nA/.\n...".parse().expect("valid board");
    /// let cells: Vec<_> = board.edge_locations().collect();
    /// assert_eq!(
    ///     cells,
    ///     vec![
    ///         Position::new(1, 0),
    ///         Position::new(0, 1),
    ///         Position::new(1, 2),
    ///         Position::new(2, 1),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn edge_locations(&self) -> EdgeLocations {
        EdgeLocations {
            n: self.n,
            index: 0,
        }
    }

    /// Returns the beam labels on the border, sorted and deduplicated.
    ///
    /// A label's index in this list is its colour slot, see
    /// [`beam_colour`](crate::beam_colour).
    #[must_use]
    pub fn beam_labels(&self) -> Vec<Label> {
        let mut labels: Vec<Label> = self
            .edge_locations()
            .filter_map(|position| self.label_at(position))
            .collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// Returns the player-facing puzzle text: the masked grid, a blank
    /// line, then the pieces to place.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumelace_core::Board;
    ///
    /// let board: Board = ".A.\nA/.\n...".parse().expect("valid board");
    /// assert_eq!(board.puzzle_string(), ".A.\nA..\n...\n\nPieces: /");
    /// ```
    #[must_use]
    pub fn puzzle_string(&self) -> String {
        let pieces: String = self.pieces().iter().map(Piece::symbol).collect();
        format!("{self}\n\nPieces: {pieces}")
    }

    /// Returns the full board text with the hidden layout revealed.
    ///
    /// Parsing the result reproduces the board; the `Display` output (the
    /// masked player view) does not.
    #[must_use]
    pub fn solution_string(&self) -> String {
        self.grid_string(false)
    }

    /// Returns the board rotated a quarter turn counter-clockwise.
    ///
    /// Rotation exchanges the two oblique mirrors (a rotated `/` reflects
    /// like `\` and back); the mirror ball is unchanged. Labels move with
    /// their edges, so rotated beams still connect the same labels.
    #[must_use]
    pub fn rotate90(&self) -> Self {
        let n = self.n;
        let mut hidden = vec![None; n * n];
        for y in 0..n {
            for x in 0..n {
                hidden[y * n + x] = self.hidden[x * n + (n - 1 - y)].map(rotate_piece);
            }
        }
        let mut edge_left = self.edge_top.clone();
        edge_left.reverse();
        let mut edge_right = self.edge_bottom.clone();
        edge_right.reverse();
        Self {
            n,
            hidden,
            edge_top: self.edge_right.clone(),
            edge_bottom: self.edge_left.clone(),
            edge_left,
            edge_right,
        }
    }

    /// Returns the board reflected in its main diagonal.
    ///
    /// Both oblique mirrors are symmetric about the diagonal, so pieces
    /// are unchanged; the top/left and bottom/right edges swap.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let n = self.n;
        let mut hidden = vec![None; n * n];
        for y in 0..n {
            for x in 0..n {
                hidden[y * n + x] = self.hidden[x * n + y];
            }
        }
        Self {
            n,
            hidden,
            edge_top: self.edge_left.clone(),
            edge_bottom: self.edge_right.clone(),
            edge_left: self.edge_top.clone(),
            edge_right: self.edge_bottom.clone(),
        }
    }

    fn grid_string(&self, mask_hidden: bool) -> String {
        let n = self.n;
        let mut text = String::with_capacity((n + 2) * (n + 3));
        text.push(EMPTY_SYMBOL);
        for label in &self.edge_top {
            text.push(label.map_or(EMPTY_SYMBOL, |label| label.as_char()));
        }
        text.push(EMPTY_SYMBOL);
        for y in 1..=n {
            text.push('\n');
            text.push(self.edge_left[y - 1].map_or(EMPTY_SYMBOL, |label| label.as_char()));
            for x in 1..=n {
                let symbol = if mask_hidden {
                    EMPTY_SYMBOL
                } else {
                    self.hidden[(y - 1) * n + (x - 1)]
                        .map_or(EMPTY_SYMBOL, |piece| piece.symbol())
                };
                text.push(symbol);
            }
            text.push(self.edge_right[y - 1].map_or(EMPTY_SYMBOL, |label| label.as_char()));
        }
        text.push('\n');
        text.push(EMPTY_SYMBOL);
        for label in &self.edge_bottom {
            text.push(label.map_or(EMPTY_SYMBOL, |label| label.as_char()));
        }
        text.push(EMPTY_SYMBOL);
        text
    }
}

const fn rotate_piece(piece: Piece) -> Piece {
    match piece {
        Piece::ObliqueMirror => Piece::ReverseObliqueMirror,
        Piece::ReverseObliqueMirror => Piece::ObliqueMirror,
        Piece::MirrorBall => Piece::MirrorBall,
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The player view: border labels shown, interior masked.
///
/// Use [`Board::solution_string`] for the revealed layout.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grid_string(true))
    }
}

/// Iterator over border cells in canonical order.
///
/// Created by [`Board::edge_locations`].
#[derive(Debug, Clone)]
pub struct EdgeLocations {
    n: usize,
    index: usize,
}

impl Iterator for EdgeLocations {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.n;
        if self.index >= 4 * n {
            return None;
        }
        let index = self.index;
        self.index += 1;
        let position = if index < n {
            Position::new(index + 1, 0)
        } else if index < 2 * n {
            Position::new(0, index - n + 1)
        } else if index < 3 * n {
            Position::new(index - 2 * n + 1, n + 1)
        } else {
            Position::new(n + 1, index - 3 * n + 1)
        };
        Some(position)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 4 * self.n - self.index;
        (remaining, Some(remaining))
    }
}

impl FusedIterator for EdgeLocations {}
impl ExactSizeIterator for EdgeLocations {}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BOARD: &str = concat!(
        "....A.\n",
        "......\n",
        "......\n",
        ".../\\A\n",
        "B....B\n",
        "...CC.\n",
    );

    const BLOCKS_ONLY: &str = concat!(
        "......\n",
        "......\n",
        ".../\\.\n",
        "..../.\n",
        "......\n",
        "......\n",
    );

    fn full_board() -> Board {
        FULL_BOARD.parse().expect("valid board")
    }

    #[test]
    fn test_parse_full_board() {
        let board = full_board();
        assert_eq!(board.n(), 4);

        assert_eq!(board.piece_at(Position::new(3, 3)), Some(Piece::ObliqueMirror));
        assert_eq!(
            board.piece_at(Position::new(4, 3)),
            Some(Piece::ReverseObliqueMirror)
        );
        assert_eq!(board.piece_at(Position::new(1, 1)), None);
        // border and out-of-range positions hold no pieces
        assert_eq!(board.piece_at(Position::new(0, 3)), None);
        assert_eq!(board.piece_at(Position::new(9, 9)), None);

        let label = |c| Label::new(c).expect("valid label");
        assert_eq!(board.label_at(Position::new(4, 0)), Some(label('A')));
        assert_eq!(board.label_at(Position::new(5, 3)), Some(label('A')));
        assert_eq!(board.label_at(Position::new(0, 4)), Some(label('B')));
        assert_eq!(board.label_at(Position::new(5, 4)), Some(label('B')));
        assert_eq!(board.label_at(Position::new(3, 5)), Some(label('C')));
        assert_eq!(board.label_at(Position::new(4, 5)), Some(label('C')));
        assert_eq!(board.label_at(Position::new(1, 0)), None);
        // corners never carry labels
        assert_eq!(board.label_at(Position::new(0, 0)), None);
        assert_eq!(board.label_at(Position::new(5, 5)), None);

        assert_eq!(
            board.beam_labels(),
            vec![label('A'), label('B'), label('C')]
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let commented = format!("# puzzle of the day\n\n{FULL_BOARD}\n\n");
        let board: Board = commented.parse().expect("valid board");
        assert_eq!(board, full_board());
    }

    #[test]
    fn test_parse_too_few_rows() {
        assert_eq!(
            Board::parse(""),
            Err(ParseBoardError::TooFewRows { rows: 0 })
        );
        assert_eq!(
            Board::parse("..\n.."),
            Err(ParseBoardError::TooFewRows { rows: 2 })
        );
    }

    #[test]
    fn test_parse_uneven_rows() {
        assert_eq!(
            Board::parse("...\n..\n..."),
            Err(ParseBoardError::UnevenRowLength {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_parse_not_square() {
        assert_eq!(
            Board::parse("....\n....\n...."),
            Err(ParseBoardError::NotSquare {
                rows: 3,
                columns: 4,
            })
        );
    }

    #[test]
    fn test_parse_unknown_interior_symbol() {
        assert_eq!(
            Board::parse("...\n.x.\n..."),
            Err(ParseBoardError::UnknownSymbol {
                symbol: 'x',
                position: Position::new(1, 1),
            })
        );
        // labels are border-only; a label character inside is rejected
        assert_eq!(
            Board::parse("...\n.A.\n..."),
            Err(ParseBoardError::UnknownSymbol {
                symbol: 'A',
                position: Position::new(1, 1),
            })
        );
    }

    #[test]
    fn test_any_border_char_is_a_label() {
        let board: Board = ".*.\n2/.\n...".parse().expect("valid board");
        let labels: Vec<_> = board
            .beam_labels()
            .iter()
            .map(Label::as_char)
            .collect();
        assert_eq!(labels, vec!['*', '2']);
    }

    #[test]
    fn test_pieces_are_sorted() {
        let board: Board = BLOCKS_ONLY.parse().expect("valid board");
        assert_eq!(
            board.pieces(),
            vec![
                Piece::ObliqueMirror,
                Piece::ObliqueMirror,
                Piece::ReverseObliqueMirror,
            ]
        );
        assert!(board.beam_labels().is_empty());
    }

    #[test]
    fn test_hidden_rows() {
        let board: Board = BLOCKS_ONLY.parse().expect("valid board");
        let rows: Vec<_> = board.hidden_rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], &[None, None, None, None]);
        assert_eq!(
            rows[1],
            &[
                None,
                None,
                Some(Piece::ObliqueMirror),
                Some(Piece::ReverseObliqueMirror),
            ]
        );
        assert_eq!(
            rows[2],
            &[None, None, None, Some(Piece::ObliqueMirror)]
        );
    }

    #[test]
    fn test_on_edge_and_on_interior() {
        let board = full_board();

        // corners belong to neither region
        for corner in [
            Position::new(0, 0),
            Position::new(5, 0),
            Position::new(0, 5),
            Position::new(5, 5),
        ] {
            assert!(!board.on_edge(corner), "{corner}");
            assert!(!board.on_interior(corner), "{corner}");
        }

        assert!(board.on_edge(Position::new(1, 0)));
        assert!(board.on_edge(Position::new(0, 4)));
        assert!(board.on_edge(Position::new(5, 1)));
        assert!(board.on_edge(Position::new(4, 5)));
        assert!(!board.on_edge(Position::new(2, 2)));
        assert!(!board.on_edge(Position::new(6, 3)));
        assert!(!board.on_edge(Position::new(0, 9)));

        assert!(board.on_interior(Position::new(1, 1)));
        assert!(board.on_interior(Position::new(4, 4)));
        assert!(!board.on_interior(Position::new(0, 1)));
        assert!(!board.on_interior(Position::new(5, 4)));
    }

    #[test]
    fn test_edge_locations_canonical_order() {
        let board: Board = ".A.\nA/.\n...".parse().expect("valid board");
        let cells: Vec<_> = board.edge_locations().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 2),
                Position::new(2, 1),
            ]
        );

        let board = full_board();
        let cells: Vec<_> = board.edge_locations().collect();
        assert_eq!(cells.len(), 16);
        // top edge first, left to right
        assert_eq!(cells[0], Position::new(1, 0));
        assert_eq!(cells[3], Position::new(4, 0));
        // then the left edge, top to bottom
        assert_eq!(cells[4], Position::new(0, 1));
        // then the bottom edge, then the right edge
        assert_eq!(cells[8], Position::new(1, 5));
        assert_eq!(cells[12], Position::new(5, 1));
        assert_eq!(cells[15], Position::new(5, 4));

        for cell in &cells {
            assert!(board.on_edge(*cell), "{cell}");
        }
    }

    #[test]
    fn test_edge_locations_is_exact_size_and_fused() {
        let board = full_board();
        let mut locations = board.edge_locations();
        assert_eq!(locations.len(), 16);
        locations.next();
        locations.next();
        assert_eq!(locations.len(), 14);

        let mut locations = board.edge_locations();
        for _ in 0..16 {
            assert!(locations.next().is_some());
        }
        assert!(locations.next().is_none());
        assert!(locations.next().is_none());
    }

    #[test]
    fn test_display_masks_interior() {
        let board = full_board();
        let expected = concat!(
            "....A.\n",
            "......\n",
            "......\n",
            ".....A\n",
            "B....B\n",
            "...CC.",
        );
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_solution_string_round_trips() {
        let board = full_board();
        assert_eq!(board.solution_string(), FULL_BOARD.trim_end());

        let reparsed: Board = board.solution_string().parse().expect("valid board");
        assert_eq!(reparsed, board);
    }

    #[test]
    fn test_puzzle_string() {
        let board = full_board();
        let expected = concat!(
            "....A.\n",
            "......\n",
            "......\n",
            ".....A\n",
            "B....B\n",
            "...CC.\n",
            "\n",
            "Pieces: /\\",
        );
        assert_eq!(board.puzzle_string(), expected);
    }

    #[test]
    fn test_rotate90() {
        let board = full_board();
        let rotated = board.rotate90();
        let expected = concat!(
            "...AB.\n",
            "A../.C\n",
            "...\\.C\n",
            "......\n",
            "......\n",
            "....B.",
        );
        assert_eq!(rotated.solution_string(), expected);
    }

    #[test]
    fn test_rotate90_four_times_is_identity() {
        let board = full_board();
        let rotated = board.rotate90().rotate90().rotate90().rotate90();
        assert_eq!(rotated, board);
    }

    #[test]
    fn test_transpose() {
        let board = full_board();
        let transposed = board.transpose();
        let expected = concat!(
            "....B.\n",
            "......\n",
            "......\n",
            ".../.C\n",
            "A..\\.C\n",
            "...AB.",
        );
        assert_eq!(transposed.solution_string(), expected);
        assert_eq!(transposed.transpose(), board);
    }
}
