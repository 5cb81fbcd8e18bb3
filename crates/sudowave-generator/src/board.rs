//! The board: generation loop, puzzle derivation, and public state.

use std::fmt::{self, Display};

use derive_more::Display as DeriveDisplay;
use log::debug;
use sudowave_core::{Digit, DigitGrid, Position};

use crate::{BoardError, Cell, SeedStream};

/// What a board currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, DeriveDisplay)]
pub enum BoardKind {
    /// Freshly constructed, nothing generated yet. Persisted as 0.
    #[default]
    #[display("None")]
    None,
    /// A complete solution grid. Persisted as 1.
    #[display("Full")]
    Full,
    /// A puzzle with blanked slots. Persisted as 2.
    #[display("Game")]
    Game,
}

impl BoardKind {
    /// Returns the integer code used in the persisted record.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Full => 1,
            Self::Game => 2,
        }
    }

    /// Looks up a kind from its persisted code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Full),
            2 => Some(Self::Game),
            _ => None,
        }
    }
}

/// Puzzle difficulty grade.
///
/// The grade fixes how many of the 81 slots are blanked when a full board
/// is made into a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, DeriveDisplay)]
pub enum Difficulty {
    /// Not graded (a full board, or not generated). Persisted as 0.
    #[default]
    #[display("None")]
    None,
    /// 28 slots removed. Persisted as 1.
    #[display("Easy")]
    Easy,
    /// 37 slots removed. Persisted as 2.
    #[display("Medium")]
    Medium,
    /// 46 slots removed. Persisted as 3.
    #[display("Hard")]
    Hard,
}

impl Difficulty {
    /// Returns the integer code used in the persisted record.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Looks up a difficulty from its persisted code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Returns how many slots this grade removes, or `None` for
    /// [`Difficulty::None`], which is not a playable grade.
    #[must_use]
    pub const fn removals(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Easy => Some(28),
            Self::Medium => Some(37),
            Self::Hard => Some(46),
        }
    }
}

/// The 81 solving cells of an in-progress generation.
#[derive(Debug, Clone)]
struct CellGrid([[Cell; 9]; 9]);

impl CellGrid {
    /// A fresh grid: every cell unresolved with the full candidate set.
    fn new() -> Self {
        Self([[Cell::new(); 9]; 9])
    }

    fn cell(&self, pos: Position) -> &Cell {
        &self.0[usize::from(pos.row())][usize::from(pos.col())]
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.0[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Returns `true` if any cell is unresolved with no candidates left.
    fn has_contradiction(&self) -> bool {
        Position::ALL
            .iter()
            .any(|&pos| self.cell(pos).has_contradiction())
    }

    /// Returns the minimum entropy among unresolved cells, or `None` when
    /// every cell has entropy 0.
    fn lowest_entropy(&self) -> Option<usize> {
        Position::ALL
            .iter()
            .map(|&pos| self.cell(pos).entropy())
            .filter(|&e| e > 0)
            .min()
    }

    /// Returns the positions whose entropy equals `entropy`, in row-major
    /// order. The draw that picks among them indexes into this order.
    fn tied_at(&self, entropy: usize) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.cell(pos).entropy() == entropy)
            .collect()
    }

    /// Removes `digit` as a candidate from every cell sharing a row, column,
    /// or box with `pos`. Single pass; overlapping removals are no-ops.
    fn propagate(&mut self, pos: Position, digit: Digit) {
        for i in 0..9 {
            self.cell_mut(Position::new(pos.row(), i)).remove_candidate(digit);
            self.cell_mut(Position::new(i, pos.col())).remove_candidate(digit);
        }
        let origin = pos.box_origin();
        for row in origin.row()..origin.row() + 3 {
            for col in origin.col()..origin.col() + 3 {
                self.cell_mut(Position::new(row, col)).remove_candidate(digit);
            }
        }
    }
}

/// A Sudoku board: identity, kind, difficulty, and the value grid.
///
/// A board starts empty, is generated exactly once, and is optionally made
/// into a game exactly once. The value grid is the single authoritative
/// state; renderings and persisted forms are projections of it.
///
/// # Examples
///
/// ```
/// use sudowave_generator::Board;
///
/// let mut board = Board::new();
/// board.generate(42)?;
///
/// assert_eq!(board.id(), "42");
/// assert_eq!(board.grid().filled_count(), 81);
/// println!("{board}");
/// # Ok::<(), sudowave_generator::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    id: String,
    kind: BoardKind,
    difficulty: Difficulty,
    grid: DigitGrid,
    generated: bool,
}

impl Board {
    /// Creates an empty, ungenerated board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a board from persisted parts, marking it generated.
    #[must_use]
    pub fn restore(id: String, kind: BoardKind, difficulty: Difficulty, grid: DigitGrid) -> Self {
        Self {
            id,
            kind,
            difficulty,
            grid,
            generated: true,
        }
    }

    /// Returns the board identity: the decimal form of its generation seed,
    /// or the empty string while ungenerated.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns what the board currently holds.
    #[must_use]
    pub fn kind(&self) -> BoardKind {
        self.kind
    }

    /// Returns the board's difficulty grade.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the value grid.
    #[must_use]
    pub fn grid(&self) -> &DigitGrid {
        &self.grid
    }

    /// Returns `true` once [`generate`](Self::generate) has completed.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Fills the board with a complete solution grid derived from `seed`.
    ///
    /// The board owns a fresh [`SeedStream`] for the call, so the result is
    /// a pure function of `seed`. Each round scans for a contradiction
    /// (discarding all 81 cells and restarting if one is found — the stream
    /// is NOT reseeded, it keeps drawing where it left off), then collapses
    /// a randomly chosen cell among those with the fewest remaining
    /// candidates and propagates the placed digit through its row, column,
    /// and box. When no unresolved cell remains the resolved values become
    /// the value grid.
    ///
    /// The number of restarts is unbounded in principle; whenever the loop
    /// terminates the grid is a valid Sudoku solution.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::AlreadyGenerated`] if the board was generated
    /// before. Boards are generated at most once.
    pub fn generate(&mut self, seed: u64) -> Result<(), BoardError> {
        if self.generated {
            return Err(BoardError::AlreadyGenerated);
        }

        let mut rng = SeedStream::new(seed);
        let mut cells = CellGrid::new();
        let mut restarts = 0u32;

        loop {
            if cells.has_contradiction() {
                cells = CellGrid::new();
                restarts += 1;
                debug!("seed {seed}: dead end, restarting on a fresh grid (restart {restarts})");
            }

            let Some(lowest) = cells.lowest_entropy() else {
                // The scan above passed and no entropy is left: all resolved.
                break;
            };

            let tied = cells.tied_at(lowest);
            let pos = tied[rng.pick_index(tied.len())];
            let digit = cells.cell_mut(pos).collapse(&mut rng)?;
            cells.propagate(pos, digit);
        }

        for pos in Position::ALL {
            self.grid[pos] = cells.cell(pos).value();
        }
        self.id = seed.to_string();
        self.kind = BoardKind::Full;
        self.generated = true;
        debug!("seed {seed}: board complete after {restarts} restarts");
        Ok(())
    }

    /// Turns a full board into a playable puzzle by blanking slots.
    ///
    /// Removes `difficulty.removals()` distinct slots, sampled uniformly
    /// without replacement from the 81 positions using the caller-supplied
    /// stream (a partial Fisher-Yates over the position table). The removed
    /// values are not retained anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotGenerated`] if the board has not been
    /// generated, [`BoardError::AlreadyGameified`] if it already holds a
    /// difficulty, and [`BoardError::UngradedDifficulty`] for
    /// [`Difficulty::None`].
    pub fn gameify(
        &mut self,
        difficulty: Difficulty,
        rng: &mut SeedStream,
    ) -> Result<(), BoardError> {
        if !self.generated {
            return Err(BoardError::NotGenerated);
        }
        if self.difficulty != Difficulty::None {
            return Err(BoardError::AlreadyGameified);
        }
        let Some(removals) = difficulty.removals() else {
            return Err(BoardError::UngradedDifficulty);
        };

        let mut slots = Position::ALL;
        for i in 0..removals {
            let j = i + rng.pick_index(81 - i);
            slots.swap(i, j);
            self.grid.clear(slots[i]);
        }

        self.kind = BoardKind::Game;
        self.difficulty = difficulty;
        Ok(())
    }
}

/// Renders the value grid as the fixed-width box-drawing table.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.grid, f)
    }
}
