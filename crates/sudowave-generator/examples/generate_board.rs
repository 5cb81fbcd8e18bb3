//! Example generating a board from a seed.
//!
//! # Usage
//!
//! Generate a full solution grid:
//!
//! ```sh
//! cargo run --example generate_board -- --seed 42
//! ```
//!
//! Derive a playable puzzle from it:
//!
//! ```sh
//! cargo run --example generate_board -- --seed 42 --difficulty medium
//! ```
//!
//! The removal stream defaults to the generation seed; pass
//! `--removal-seed` to vary the blanked slots independently:
//!
//! ```sh
//! cargo run --example generate_board -- --seed 42 --difficulty hard --removal-seed 7
//! ```
//!
//! Set `RUST_LOG=debug` to see contradiction restarts as they happen.

use clap::{Parser, ValueEnum};
use sudowave_generator::{Board, Difficulty, SeedStream};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Grade {
    Easy,
    Medium,
    Hard,
}

impl From<Grade> for Difficulty {
    fn from(grade: Grade) -> Self {
        match grade {
            Grade::Easy => Difficulty::Easy,
            Grade::Medium => Difficulty::Medium,
            Grade::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed for the generation stream.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Blank slots for this difficulty after generating.
    #[arg(long, value_name = "GRADE")]
    difficulty: Option<Grade>,

    /// Seed for the removal stream (defaults to the generation seed).
    #[arg(long, value_name = "SEED")]
    removal_seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut board = Board::new();
    board.generate(args.seed).unwrap();

    if let Some(grade) = args.difficulty {
        let mut removal = SeedStream::new(args.removal_seed.unwrap_or(args.seed));
        board.gameify(grade.into(), &mut removal).unwrap();
        println!(
            "Board #{} ({} left, difficulty {})",
            board.id(),
            board.grid().filled_count(),
            board.difficulty(),
        );
    } else {
        println!("Board #{}", board.id());
    }
    println!("{board}");
}
