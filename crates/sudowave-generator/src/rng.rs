//! Deterministic seedable random stream.

use std::fmt;

use rand::Rng as _;
use rand_pcg::Pcg32;

/// Stream selector shared by every [`SeedStream`]; with it fixed, the draw
/// sequence is a pure function of the seed.
const STREAM: u64 = 0xa02_bdbf_7bb3_c0a7;

/// A seedable stream of uniformly distributed integers.
///
/// Backed by [`Pcg32`], whose output for a given `(seed, stream)` pair is
/// pinned by the PCG reference implementation, so a seed replays the exact
/// same draw sequence on every platform and in every release.
///
/// Index picks reduce draws with a plain modulo. At the set sizes used here
/// (at most 81) the modulo bias is a few parts per hundred million; it is
/// accepted in exchange for a draw protocol simple enough to reproduce
/// exactly.
///
/// Cloning captures the full stream state: the clone and the original
/// continue from the same point, which is how a stream position is saved and
/// restored.
///
/// # Examples
///
/// ```
/// use sudowave_generator::SeedStream;
///
/// let mut a = SeedStream::new(123);
/// let mut b = SeedStream::new(123);
/// assert_eq!(a.next_uint(), b.next_uint());
///
/// // A clone is a snapshot of the stream position.
/// let mut snapshot = a.clone();
/// assert_eq!(a.next_uint(), snapshot.next_uint());
/// ```
#[derive(Clone)]
pub struct SeedStream {
    rng: Pcg32,
}

impl fmt::Debug for SeedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedStream").finish_non_exhaustive()
    }
}

impl SeedStream {
    /// Creates a stream whose draws are a pure function of `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::new(seed, STREAM),
        }
    }

    /// Reinitializes the stream from `seed`, discarding the current state.
    ///
    /// Equivalent to replacing the stream with [`SeedStream::new(seed)`](Self::new).
    pub fn reseed(&mut self, seed: u64) {
        self.rng = Pcg32::new(seed, STREAM);
    }

    /// Returns the next uniformly distributed integer in the stream.
    pub fn next_uint(&mut self) -> u64 {
        u64::from(self.rng.next_u32())
    }

    /// Draws an index in `0..len` by modulo reduction.
    ///
    /// # Panics
    ///
    /// Panics if `len` is 0.
    pub fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty range");
        #[expect(clippy::cast_possible_truncation)]
        let index = (self.next_uint() % len as u64) as usize;
        index
    }
}
