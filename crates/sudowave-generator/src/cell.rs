//! A single grid position's candidate set and resolved value.

use sudowave_core::{Digit, DigitSet};

use crate::{CellError, SeedStream};

/// One solving cell: the digits it can still become, and the digit it
/// resolved to, if any.
///
/// A cell is in exactly one of two states: unresolved, with zero or more
/// candidates; or collapsed, with a value and an empty candidate set.
/// Candidates only ever shrink. An unresolved cell with no candidates left
/// is a contradiction and dooms the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    candidates: DigitSet,
    value: Option<Digit>,
}

impl Cell {
    /// Creates an unresolved cell with the full candidate set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidates: DigitSet::FULL,
            value: None,
        }
    }

    /// Returns the number of remaining candidates.
    ///
    /// Lower entropy means more constrained; the generation loop always
    /// collapses among the lowest-entropy cells first.
    #[must_use]
    pub fn entropy(&self) -> usize {
        self.candidates.len()
    }

    /// Returns the resolved digit, or `None` while unresolved.
    #[must_use]
    pub fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Returns `true` if the cell has resolved to a digit.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if the cell is unresolved with no candidates left.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        !self.is_collapsed() && self.candidates.is_empty()
    }

    /// Removes `digit` from the candidate set.
    ///
    /// Removing an absent candidate, or removing from a collapsed cell
    /// (whose set is already empty), is a no-op.
    pub fn remove_candidate(&mut self, digit: Digit) {
        self.candidates.remove(digit);
    }

    /// Resolves the cell to one of its candidates, drawn uniformly from
    /// `rng`, and empties the candidate set.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::AlreadyCollapsed`] if the cell holds a value.
    /// This is checked before the candidate count so a repeated collapse
    /// fails cleanly instead of reducing a draw modulo zero.
    /// Returns [`CellError::OutOfStates`] if no candidates remain.
    pub fn collapse(&mut self, rng: &mut SeedStream) -> Result<Digit, CellError> {
        if self.is_collapsed() {
            return Err(CellError::AlreadyCollapsed);
        }
        if self.candidates.is_empty() {
            return Err(CellError::OutOfStates);
        }
        let pick = rng.pick_index(self.candidates.len());
        let digit = self.candidates.nth(pick).ok_or(CellError::OutOfStates)?;
        self.candidates = DigitSet::EMPTY;
        self.value = Some(digit);
        Ok(digit)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}
