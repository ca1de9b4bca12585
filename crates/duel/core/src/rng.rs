//! RNG oracle for every stochastic step of a battle.
//!
//! Seat shuffling, accuracy rolls and variance jitter all draw from an
//! injected [`RngOracle`]. Core logic never reaches for ambient randomness, so
//! a seeded [`PcgRng`] replays a battle exactly and a [`SequenceRng`] forces
//! specific outcomes in tests.

/// Source of uniform samples in `[0, 1)`.
pub trait RngOracle: Send {
    /// Draws the next uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Accuracy roll: succeeds iff the drawn sample is `<= accuracy`.
    fn roll(&mut self, accuracy: f64) -> bool {
        self.next_unit() <= accuracy
    }

    /// Symmetric multiplicative jitter: `value * (1 ± fraction)` with the
    /// factor drawn uniformly from that band.
    fn vary(&mut self, value: f64, fraction: f64) -> f64 {
        let factor = self.next_unit() * (2.0 * fraction) + (1.0 - fraction);
        value * factor
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Fisher-Yates shuffle driven by the oracle.
///
/// A two-element slice consumes exactly one sample and swaps iff it is `< 0.5`.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RngOracle) {
    for i in (1..items.len()).rev() {
        let j = ((rng.next_unit() * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output. The same seed always
/// yields the same sequence of samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            state: seed.wrapping_add(Self::INCREMENT),
        };
        rng.state = Self::pcg_step(rng.state);
        rng
    }

    /// `state' = state * multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

impl RngOracle for PcgRng {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Scripted oracle replaying a fixed list of samples, cycling when exhausted.
///
/// An empty script always yields `0.0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequenceRng {
    samples: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        Self {
            samples: samples.into(),
            cursor: 0,
        }
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of samples drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RngOracle for SequenceRng {
    fn next_unit(&mut self) -> f64 {
        if self.samples.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}
