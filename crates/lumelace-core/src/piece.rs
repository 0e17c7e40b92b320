//! Placeable piece representation.

use std::fmt::{self, Display};

use crate::Direction;

/// A piece that reflects beams: one of the two oblique mirrors or the
/// mirror ball.
///
/// Each piece is written as a single character in the textual board format.
/// Variants are declared in symbol order (`/` < `\` < `o` by character
/// code), so sorting pieces is the same as sorting their symbols.
///
/// # Examples
///
/// ```
/// use lumelace_core::Piece;
///
/// let piece = Piece::ObliqueMirror;
/// assert_eq!(piece.symbol(), '/');
///
/// // Create from a symbol
/// assert_eq!(Piece::from_symbol('\\'), Some(Piece::ReverseObliqueMirror));
/// assert_eq!(Piece::from_symbol('x'), None);
///
/// // Iterate over all piece kinds
/// for piece in Piece::ALL {
///     println!("{piece}");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Piece {
    /// The `/` mirror, lying along the anti-diagonal.
    ObliqueMirror = b'/',
    /// The `\` mirror, lying along the main diagonal.
    ReverseObliqueMirror = b'\\',
    /// The `o` reflector, sending beams straight back where they came from.
    MirrorBall = b'o',
}

impl Piece {
    /// Array containing all piece kinds in symbol order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumelace_core::Piece;
    ///
    /// assert_eq!(Piece::ALL.len(), 3);
    /// assert_eq!(Piece::ALL[0], Piece::ObliqueMirror);
    /// ```
    pub const ALL: [Self; 3] = [
        Self::ObliqueMirror,
        Self::ReverseObliqueMirror,
        Self::MirrorBall,
    ];

    /// Creates a piece from its textual symbol.
    ///
    /// Returns `None` for any character that is not `/`, `\`, or `o`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumelace_core::Piece;
    ///
    /// assert_eq!(Piece::from_symbol('/'), Some(Piece::ObliqueMirror));
    /// assert_eq!(Piece::from_symbol('o'), Some(Piece::MirrorBall));
    /// assert_eq!(Piece::from_symbol('.'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '/' => Some(Self::ObliqueMirror),
            '\\' => Some(Self::ReverseObliqueMirror),
            'o' => Some(Self::MirrorBall),
            _ => None,
        }
    }

    /// Returns the textual symbol for this piece.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumelace_core::Piece;
    ///
    /// assert_eq!(Piece::ObliqueMirror.symbol(), '/');
    /// assert_eq!(Piece::ReverseObliqueMirror.symbol(), '\\');
    /// assert_eq!(Piece::MirrorBall.symbol(), 'o');
    /// ```
    #[must_use]
    pub const fn symbol(&self) -> char {
        *self as u8 as char
    }

    /// Returns the direction a beam travels after hitting this piece.
    ///
    /// The `/` mirror exchanges up with right and down with left, the `\`
    /// mirror exchanges up with left and down with right, and the mirror
    /// ball reverses the beam outright. Every rule is its own inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumelace_core::{Direction, Piece};
    ///
    /// assert_eq!(Piece::ObliqueMirror.deflect(Direction::Down), Direction::Left);
    /// assert_eq!(Piece::ReverseObliqueMirror.deflect(Direction::Down), Direction::Right);
    /// assert_eq!(Piece::MirrorBall.deflect(Direction::Down), Direction::Up);
    /// ```
    #[must_use]
    pub const fn deflect(&self, direction: Direction) -> Direction {
        match self {
            Self::ObliqueMirror => match direction {
                Direction::Up => Direction::Right,
                Direction::Right => Direction::Up,
                Direction::Down => Direction::Left,
                Direction::Left => Direction::Down,
            },
            Self::ReverseObliqueMirror => match direction {
                Direction::Up => Direction::Left,
                Direction::Left => Direction::Up,
                Direction::Down => Direction::Right,
                Direction::Right => Direction::Down,
            },
            Self::MirrorBall => direction.reversed(),
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.symbol(), f)
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> char {
        piece.symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for piece in Piece::ALL {
            assert_eq!(Piece::from_symbol(piece.symbol()), Some(piece));
        }

        assert_eq!(Piece::from_symbol('.'), None);
        assert_eq!(Piece::from_symbol('A'), None);
        assert_eq!(Piece::from_symbol(' '), None);
    }

    #[test]
    fn test_sort_order_matches_symbols() {
        let mut pieces = vec![
            Piece::MirrorBall,
            Piece::ReverseObliqueMirror,
            Piece::ObliqueMirror,
        ];
        pieces.sort();
        assert_eq!(
            pieces,
            vec![
                Piece::ObliqueMirror,
                Piece::ReverseObliqueMirror,
                Piece::MirrorBall,
            ]
        );

        let symbols: Vec<_> = pieces.iter().map(|piece| piece.symbol()).collect();
        let mut sorted_symbols = symbols.clone();
        sorted_symbols.sort_unstable();
        assert_eq!(symbols, sorted_symbols);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Piece::ObliqueMirror), "/");
        assert_eq!(format!("{}", Piece::ReverseObliqueMirror), "\\");
        assert_eq!(format!("{}", Piece::MirrorBall), "o");

        let symbol: char = Piece::MirrorBall.into();
        assert_eq!(symbol, 'o');
    }

    #[test]
    fn test_deflect_oblique_mirror() {
        let piece = Piece::ObliqueMirror;
        assert_eq!(piece.deflect(Direction::Up), Direction::Right);
        assert_eq!(piece.deflect(Direction::Right), Direction::Up);
        assert_eq!(piece.deflect(Direction::Down), Direction::Left);
        assert_eq!(piece.deflect(Direction::Left), Direction::Down);
    }

    #[test]
    fn test_deflect_reverse_oblique_mirror() {
        let piece = Piece::ReverseObliqueMirror;
        assert_eq!(piece.deflect(Direction::Up), Direction::Left);
        assert_eq!(piece.deflect(Direction::Left), Direction::Up);
        assert_eq!(piece.deflect(Direction::Down), Direction::Right);
        assert_eq!(piece.deflect(Direction::Right), Direction::Down);
    }

    #[test]
    fn test_deflect_mirror_ball() {
        let piece = Piece::MirrorBall;
        for direction in Direction::ALL {
            assert_eq!(piece.deflect(direction), direction.reversed());
        }
    }

    #[test]
    fn test_deflect_is_involution() {
        for piece in Piece::ALL {
            for direction in Direction::ALL {
                assert_eq!(piece.deflect(piece.deflect(direction)), direction);
            }
        }
    }
}
