//! Beam travel directions.

/// An axis-aligned direction of beam travel.
///
/// Beams move one cell at a time along exactly one axis; diagonal travel
/// does not exist. The row axis grows downward, so [`Direction::Up`] has a
/// negative row delta.
///
/// # Examples
///
/// ```
/// use lumelace_core::Direction;
///
/// assert_eq!(Direction::Right.dx(), 1);
/// assert_eq!(Direction::Right.dy(), 0);
/// assert_eq!(Direction::Right.reversed(), Direction::Left);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the top edge (decreasing row).
    Up,
    /// Toward the bottom edge (increasing row).
    Down,
    /// Toward the left edge (decreasing column).
    Left,
    /// Toward the right edge (increasing column).
    Right,
}

impl Direction {
    /// Array containing all four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the column delta of one step (`-1`, `0`, or `1`).
    #[must_use]
    pub const fn dx(&self) -> isize {
        match self {
            Self::Left => -1,
            Self::Right => 1,
            Self::Up | Self::Down => 0,
        }
    }

    /// Returns the row delta of one step (`-1`, `0`, or `1`).
    #[must_use]
    pub const fn dy(&self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
            Self::Left | Self::Right => 0,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
