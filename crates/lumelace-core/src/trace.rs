//! Beam tracing through the hidden layout.
//!
//! A beam enters at a border cell, travels in a straight line, and is
//! deflected by every piece it meets until it reaches the border again.
//! Tracing reads only the hidden layout; it is a pure function of the
//! parsed board and never looks at player placements.

use crate::{Beam, Board, Direction, Label, Position};

/// Errors produced while tracing a beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TraceError {
    /// The trace start is a corner, interior, or out-of-grid cell.
    #[display("cannot trace a beam from {position}: not on an edge")]
    NotOnEdge {
        /// The rejected start cell.
        position: Position,
    },
    /// The walk exceeded the defensive step bound.
    ///
    /// Every deflection rule is a bijection on directions, so beams on
    /// boards built from the known pieces cannot loop; the bound guards
    /// the walk all the same.
    #[display("beam from {start} did not terminate within {max_steps} steps")]
    PathDidNotTerminate {
        /// The entry cell of the runaway beam.
        start: Position,
        /// The step bound that was exceeded.
        max_steps: usize,
    },
}

/// Errors produced by the strict beam-topology validation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum BeamTopologyError {
    /// A label's border cells disagree with its traced endpoints.
    #[display("label {label} does not mark both endpoints of its beam")]
    UnmatchedBeamLabel {
        /// The offending label.
        label: Label,
    },
    /// Tracing a beam failed.
    #[display("beam trace failed: {_0}")]
    Trace(#[from] TraceError),
}

impl Board {
    /// Traces a beam from a border cell to its exit.
    ///
    /// The returned path starts at `start`, records every cell the beam
    /// passes through in travel order, and ends at the exit border cell.
    /// A beam reversed by a mirror ball leaves through its entry cell, so
    /// the path doubles back over its own cells.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::NotOnEdge`] if `start` is not a border cell,
    /// or [`TraceError::PathDidNotTerminate`] if the walk exceeds the
    /// defensive step bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumelace_core::{Board, Position};
    ///
    /// let board: Board = ".A.\nA/.\n...".parse().expect("valid board");
    /// let path = board.trace_from(Position::new(1, 0)).expect("beam exits");
    /// assert_eq!(
    ///     path,
    ///     vec![Position::new(1, 0), Position::new(1, 1), Position::new(0, 1)]
    /// );
    /// ```
    pub fn trace_from(&self, start: Position) -> Result<Vec<Position>, TraceError> {
        let mut direction = self.entry_direction(start)?;
        // every (cell, direction) state occurs at most once, so a longer
        // walk must be looping
        let max_steps = 4 * self.n() * self.n() + 4;

        let mut path = vec![start];
        let mut position = advance(start, direction);
        path.push(position);
        loop {
            if self.on_outer_ring(position) {
                break;
            }
            if path.len() > max_steps {
                return Err(TraceError::PathDidNotTerminate { start, max_steps });
            }
            if let Some(piece) = self.piece_at(position) {
                direction = piece.deflect(direction);
            }
            position = advance(position, direction);
            path.push(position);
        }
        Ok(path)
    }

    /// Traces every labeled beam on the board.
    ///
    /// Labels are taken in sorted order and each is traced exactly once,
    /// from its first border cell in
    /// [canonical order](Self::edge_locations). A beam's
    /// [`colour_index`](Beam::colour_index) is its label's index in the
    /// sorted list, matching [`beam_labels`](Self::beam_labels).
    ///
    /// # Errors
    ///
    /// Returns the first [`TraceError`] hit. Boards parsed from the known
    /// piece symbols never produce one.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumelace_core::{Board, Position};
    ///
    /// let board: Board = ".A..\nA/..\n....\n....".parse().expect("valid board");
    /// let beams = board.beams().expect("beams exit");
    /// assert_eq!(beams.len(), 1);
    /// assert_eq!(beams[0].label.as_char(), 'A');
    /// assert_eq!(beams[0].endpoints(), (Position::new(1, 0), Position::new(0, 1)));
    /// ```
    pub fn beams(&self) -> Result<Vec<Beam>, TraceError> {
        let mut starts: Vec<(Label, Position)> = Vec::new();
        for position in self.edge_locations() {
            let Some(label) = self.label_at(position) else {
                continue;
            };
            if !starts.iter().any(|&(seen, _)| seen == label) {
                starts.push((label, position));
            }
        }
        starts.sort_unstable_by_key(|&(label, _)| label);

        let mut beams = Vec::with_capacity(starts.len());
        for (colour_index, (label, start)) in starts.into_iter().enumerate() {
            let path = self.trace_from(start)?;
            beams.push(Beam {
                label,
                colour_index,
                path,
            });
        }
        Ok(beams)
    }

    /// Checks that border labels and traced beams agree.
    ///
    /// For every label, the set of border cells carrying it must be
    /// exactly the traced beam's entry and exit cells. A beam that leaves
    /// through its entry cell (reversed by a mirror ball) legitimately has
    /// a single labeled cell; an orphaned label, a missing exit label, or
    /// three cells sharing a label all fail.
    ///
    /// Tracing never requires this to hold; the check is for callers that
    /// want to reject hand-edited boards before play.
    ///
    /// # Errors
    ///
    /// Returns [`BeamTopologyError::UnmatchedBeamLabel`] for the lowest
    /// label whose cells disagree, or a wrapped [`TraceError`].
    pub fn validate_beams(&self) -> Result<(), BeamTopologyError> {
        for beam in self.beams()? {
            let (entry, exit) = beam.endpoints();
            let mut expected = vec![entry, exit];
            expected.sort_unstable();
            expected.dedup();

            let mut cells: Vec<Position> = self
                .edge_locations()
                .filter(|&position| self.label_at(position) == Some(beam.label))
                .collect();
            cells.sort_unstable();

            if cells != expected {
                return Err(BeamTopologyError::UnmatchedBeamLabel { label: beam.label });
            }
        }
        Ok(())
    }

    fn entry_direction(&self, start: Position) -> Result<Direction, TraceError> {
        if !self.on_edge(start) {
            return Err(TraceError::NotOnEdge { position: start });
        }
        let direction = if start.x() == 0 {
            Direction::Right
        } else if start.x() == self.n() + 1 {
            Direction::Left
        } else if start.y() == 0 {
            Direction::Down
        } else {
            Direction::Up
        };
        Ok(direction)
    }

    fn on_outer_ring(&self, position: Position) -> bool {
        let n1 = self.n() + 1;
        position.x() == 0 || position.x() == n1 || position.y() == 0 || position.y() == n1
    }
}

/// Steps one cell in `direction`. Entry directions point inward and
/// deflections happen only on interior cells, so a step never leaves the
/// bordered grid.
const fn advance(position: Position, direction: Direction) -> Position {
    let x = position.x().wrapping_add_signed(direction.dx());
    let y = position.y().wrapping_add_signed(direction.dy());
    Position::new(x, y)
}
