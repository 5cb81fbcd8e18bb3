//! Error types for generation and puzzle derivation.

use derive_more::{Display, Error, From};

/// Precondition violations on a single solving cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CellError {
    /// The cell was collapsed before and holds a resolved value.
    #[display("cell is already collapsed")]
    AlreadyCollapsed,
    /// The cell is unresolved and its candidate set is empty.
    #[display("cell has no valid states left")]
    OutOfStates,
}

/// Precondition violations on board operations.
///
/// These signal caller misuse, not transient failure; retrying the same call
/// fails the same way. The generation loop's internal restart on
/// contradiction is normal behavior and never surfaces here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum BoardError {
    /// `generate` was called on a board that is already generated.
    #[display("board has already been generated")]
    AlreadyGenerated,
    /// `gameify` was called on a board that has not been generated.
    #[display("board has not been generated")]
    NotGenerated,
    /// `gameify` was called on a board that already has a difficulty.
    #[display("board has already been made into a game")]
    AlreadyGameified,
    /// `gameify` was called with [`Difficulty::None`], which is not a grade.
    ///
    /// [`Difficulty::None`]: crate::Difficulty::None
    #[display("`None` is not a playable difficulty")]
    UngradedDifficulty,
    /// A cell-level precondition failed.
    #[display("cell precondition failed: {_0}")]
    Cell(CellError),
}
