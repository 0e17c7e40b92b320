//! Beam labels, traced beams, and their display colours.

use std::fmt::{self, Display};

use crate::{Position, board::EMPTY_SYMBOL};

/// Beam stroke colours, one per label in sorted label order.
///
/// This is the sashamaps accessible colour palette the drawing layers index
/// by beam number; it is part of the board contract because colour
/// assignment follows label order.
pub const BEAM_COLOURS: [&str; 16] = [
    "#e6194B", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#42d4f4", "#f032e6", "#fabed4",
    "#469990", "#dcbeff", "#9A6324", "#fffac8", "#800000", "#aaffc3", "#000075", "#a9a9a9",
];

/// Returns the colour for a beam slot.
///
/// Slots past the end of [`BEAM_COLOURS`] wrap around; published boards
/// never have that many beams.
#[must_use]
pub const fn beam_colour(colour_index: usize) -> &'static str {
    BEAM_COLOURS[colour_index % BEAM_COLOURS.len()]
}

/// A beam label: the character marking a beam's border cells.
///
/// Any border character other than `.` (the empty marker) names a beam.
/// Published puzzles stick to `A`-`Z`, but the format does not require it.
/// Labels order by character code, which fixes colour assignment.
///
/// # Examples
///
/// ```
/// use lumelace_core::Label;
///
/// let label = Label::new('A').unwrap();
/// assert_eq!(label.as_char(), 'A');
/// assert_eq!(Label::new('.'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(char);

impl Label {
    /// Creates a label from a border character.
    ///
    /// Returns `None` for the empty-cell marker `.`.
    #[must_use]
    pub const fn new(symbol: char) -> Option<Self> {
        match symbol {
            EMPTY_SYMBOL => None,
            _ => Some(Self(symbol)),
        }
    }

    /// Returns the label character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        self.0
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// One traced beam: its label, colour slot, and full cell path.
///
/// The path holds the entry border cell, every interior cell visited in
/// travel order, and the exit border cell. A beam reversed by a mirror ball
/// walks back over its own cells, so positions may repeat and both
/// endpoints may be the same cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beam {
    /// The border character naming this beam.
    pub label: Label,
    /// Index of the label in the board's sorted label list, which is also
    /// the beam's slot in [`BEAM_COLOURS`].
    pub colour_index: usize,
    /// Every cell the beam visits, in travel order.
    pub path: Vec<Position>,
}

impl Beam {
    /// Returns the entry and exit border cells.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty; traced beams always hold at least the
    /// entry and exit cells.
    #[must_use]
    pub fn endpoints(&self) -> (Position, Position) {
        let first = *self.path.first().expect("beam path is never empty");
        let last = *self.path.last().expect("beam path is never empty");
        (first, last)
    }

    /// Returns the hex colour for this beam's slot.
    #[must_use]
    pub const fn colour(&self) -> &'static str {
        beam_colour(self.colour_index)
    }
}
