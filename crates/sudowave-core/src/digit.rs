//! Type-safe sudoku digit representation.

use derive_more::Display;

/// A sudoku digit in the range 1-9.
///
/// Construction is checked, so a `Digit` always holds a valid value and the
/// rest of the crate never needs to revalidate it.
///
/// # Examples
///
/// ```
/// use sudowave_core::Digit;
///
/// let digit = Digit::from_value(7).unwrap();
/// assert_eq!(digit.value(), 7);
/// assert_eq!(digit.to_char(), '7');
///
/// // Out-of-range values are rejected.
/// assert_eq!(Digit::from_value(0), None);
/// assert_eq!(Digit::from_value(10), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Digit(u8);

impl Digit {
    /// Array containing all digits from 1 to 9, in ascending order.
    pub const ALL: [Self; 9] = {
        let mut all = [Self(1); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self(i as u8 + 1);
            i += 1;
        }
        all
    };

    /// Creates a digit from a value in the range 1-9.
    ///
    /// Returns `None` for values outside that range.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if matches!(value, 1..=9) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a digit from its character form `'1'`-`'9'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudowave_core::Digit;
    ///
    /// assert_eq!(Digit::from_char('3').map(Digit::value), Some(3));
    /// assert_eq!(Digit::from_char('0'), None);
    /// assert_eq!(Digit::from_char(' '), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::from_value)
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the character form of this digit (`'1'`-`'9'`).
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Returns the zero-based bit index used by [`DigitSet`](crate::DigitSet).
    #[must_use]
    pub(crate) const fn bit_index(self) -> u8 {
        self.0 - 1
    }

    pub(crate) const fn from_bit_index(index: u8) -> Self {
        debug_assert!(index < 9);
        Self(index + 1)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
