//! Private deterministic random streams.
//!
//! Every combatant and every tournament owns one [`PcgStream`]. Streams are
//! threaded explicitly through construction; nothing in the crate reads a
//! process-wide generator.
//!
//! # Determinism
//!
//! The algorithm is PCG32 (XSH-RR output, 64-bit LCG state) with a fixed
//! increment, seeded the way the PCG reference `srandom` does. Any
//! implementation following the same steps produces the same draws, which
//! is what makes stored seeds replayable across hosts.

/// PCG32 stream (Permuted Congruential Generator, XSH-RR variant).
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same sequence
/// - **Small state**: Only 64 bits
/// - **Portable**: Wrapping multiply/add, shifts and a rotate
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgStream {
    state: u64,
}

impl PcgStream {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a stream from an explicit seed.
    ///
    /// `state = 0; step; state += seed; step`
    pub fn new(seed: u64) -> Self {
        let mut state = Self::pcg_step(0);
        state = state.wrapping_add(seed);
        Self {
            state: Self::pcg_step(state),
        }
    }

    /// Creates a stream seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Creates a seeded stream, or an entropy-seeded one when `seed` is `None`.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Returns the next 32-bit output and advances the stream.
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }

    /// Draws a uniform integer in `[0, bound)`.
    ///
    /// Uses rejection sampling so the result is unbiased: draws below
    /// `2^32 mod bound` are discarded. A bound of 1 still consumes one draw;
    /// a bound of 0 returns 0 without consuming one.
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let value = self.next_u32();
            if value >= threshold {
                return value % bound;
            }
        }
    }

    /// Draws a uniform index into a collection of `len` elements.
    ///
    /// Returns `None` for an empty collection without consuming a draw.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let bound = u32::try_from(len).unwrap_or(u32::MAX);
        Some(self.below(bound) as usize)
    }
}

/// Non-deterministic 64-bit seed for streams created without one.
pub fn entropy_seed() -> u64 {
    rand::random::<u64>()
}
