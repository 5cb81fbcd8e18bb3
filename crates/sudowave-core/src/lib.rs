//! Core data structures for the sudowave board generator.
//!
//! This crate provides the data vocabulary shared by generation and
//! persistence: type-safe digits, ordered candidate sets, board positions,
//! and the 9×9 value grid with its text rendering.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: An ordered set of digits, used as a cell's candidate pool
//! - [`position`]: Board `(row, column)` coordinates and box arithmetic
//! - [`grid`]: The authoritative 9×9 grid of resolved digits and its
//!   box-drawing rendering
//!
//! # Examples
//!
//! ```
//! use sudowave_core::{Digit, DigitGrid, DigitSet, Position};
//!
//! let mut grid = DigitGrid::new();
//! let pos = Position::new(4, 4);
//! grid[pos] = Digit::from_value(5);
//!
//! assert_eq!(grid.filled_count(), 1);
//! assert_eq!(grid[pos].map(Digit::value), Some(5));
//!
//! // Candidate sets iterate in ascending digit order.
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::from_value(1).unwrap());
//! assert_eq!(candidates.len(), 8);
//! assert_eq!(candidates.nth(0).map(Digit::value), Some(2));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{digit::Digit, digit_set::DigitSet, grid::DigitGrid, position::Position};
