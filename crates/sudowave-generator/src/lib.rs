//! Seeded wave-function-collapse generation of Sudoku boards.
//!
//! This crate is the algorithmic core of sudowave. A [`Board`] owns 81
//! solving [`Cell`]s during generation; [`Board::generate`] drives a
//! deterministic [`SeedStream`] through rounds of contradiction scanning,
//! lowest-entropy cell selection, random collapse, and single-pass
//! constraint propagation until every cell is resolved. A dead end discards
//! the whole cell grid and restarts with the stream continuing where it left
//! off, so the finished grid is a pure function of the seed.
//!
//! [`Board::gameify`] then turns a full board into a playable puzzle by
//! blanking a difficulty-dependent number of slots.
//!
//! # Examples
//!
//! ```
//! use sudowave_generator::{Board, Difficulty, SeedStream};
//!
//! let mut board = Board::new();
//! board.generate(0)?;
//! assert!(board.is_generated());
//! assert_eq!(board.grid().filled_count(), 81);
//!
//! let mut removal = SeedStream::new(7);
//! board.gameify(Difficulty::Easy, &mut removal)?;
//! assert_eq!(board.grid().filled_count(), 53);
//! # Ok::<(), sudowave_generator::BoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod error;
pub mod rng;

pub use self::{
    board::{Board, BoardKind, Difficulty},
    cell::Cell,
    error::{BoardError, CellError},
    rng::SeedStream,
};
