//! The authoritative 9×9 grid of resolved digits.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use crate::{Digit, Position};

/// A 9×9 grid of optional digits.
///
/// This is the single authoritative value grid of a board; the character and
/// text-table forms are derived projections of it. An empty slot means the
/// position holds no digit (either not yet generated, or blanked by puzzle
/// removal).
///
/// # Examples
///
/// ```
/// use sudowave_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid[Position::new(0, 0)] = Digit::from_value(5);
/// assert_eq!(grid.filled_count(), 1);
///
/// grid.clear(Position::new(0, 0));
/// assert_eq!(grid.filled_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitGrid([[Option<Digit>; 9]; 9]);

impl DigitGrid {
    /// The character rendered for an empty slot.
    pub const BLANK: char = ' ';

    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the digit at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.0[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Blanks the slot at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self[pos] = None;
    }

    /// Returns the number of filled slots (0-81).
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.0.iter().flatten().filter(|d| d.is_some()).count()
    }

    /// Projects the grid into 9×9 characters, digits as `'1'`-`'9'` and empty
    /// slots as [`BLANK`](Self::BLANK).
    #[must_use]
    pub fn to_char_rows(&self) -> [[char; 9]; 9] {
        self.0
            .map(|row| row.map(|slot| slot.map_or(Self::BLANK, Digit::to_char)))
    }

    /// Rebuilds a grid from 9×9 characters, the inverse of
    /// [`to_char_rows`](Self::to_char_rows).
    ///
    /// Returns `None` if any character is neither a digit `'1'`-`'9'` nor
    /// [`BLANK`](Self::BLANK).
    #[must_use]
    pub fn from_char_rows(rows: &[[char; 9]; 9]) -> Option<Self> {
        let mut grid = Self::new();
        for pos in Position::ALL {
            let c = rows[usize::from(pos.row())][usize::from(pos.col())];
            if c != Self::BLANK {
                grid[pos] = Some(Digit::from_char(c)?);
            }
        }
        Some(grid)
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.0[usize::from(pos.row())][usize::from(pos.col())]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.0[usize::from(pos.row())][usize::from(pos.col())]
    }
}

/// Renders the grid as a fixed-width box-drawing table, 3×3 blocks separated
/// by rules and empty slots rendered as spaces.
impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const HEAD: &str = "╭───────┬───────┬───────╮";
        const MID: &str = "├───────┼───────┼───────┤";
        const FOOT: &str = "╰───────┴───────┴───────╯";

        writeln!(f, "{HEAD}")?;
        for band in 0u8..3 {
            for inner in 0u8..3 {
                let row = band * 3 + inner;
                write!(f, "│")?;
                for stack in 0u8..3 {
                    for inner_col in 0u8..3 {
                        let pos = Position::new(row, stack * 3 + inner_col);
                        let c = self.get(pos).map_or(Self::BLANK, Digit::to_char);
                        write!(f, " {c}")?;
                    }
                    write!(f, " │")?;
                }
                writeln!(f)?;
            }
            if band != 2 {
                writeln!(f, "{MID}")?;
            }
        }
        write!(f, "{FOOT}")
    }
}
