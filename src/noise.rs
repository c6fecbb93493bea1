//! Deterministic noise source for the noise oscillator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used by every [`NoiseGenerator::reseed`] call. Reseeding always
/// restarts the same sequence, which is what makes noise-based sounds
/// reproducible from their parameters alone.
const NOISE_SEED: u64 = 42;

/// A reproducible pseudo-random sample source.
///
/// Unlike a free-running noise generator, this one is reseeded at the start
/// of every note so that identical parameter sets yield identical audio. The
/// synthesizer draws from it once per oscillator period, not once per sample;
/// the held value between draws is what gives the noise waveform its stepped,
/// gritty character.
///
/// The sequence is produced by `rand`'s [`StdRng`] from a fixed seed. It is
/// stable for a given `rand` version but not guaranteed to be portable
/// across `rand` upgrades.
///
/// # Examples
///
/// ```
/// use rfxr::NoiseGenerator;
///
/// let mut noise = NoiseGenerator::new();
/// let first = noise.next_sample();
/// noise.reseed();
/// assert_eq!(noise.next_sample(), first);
/// ```
#[derive(Debug, Clone)]
pub struct NoiseGenerator {
    rng: StdRng,
}

impl NoiseGenerator {
    /// Creates a generator positioned at the start of the sequence.
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(NOISE_SEED),
        }
    }

    /// Rewinds the generator to the start of the sequence.
    pub fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(NOISE_SEED);
    }

    /// Returns the next pseudo-random value in [-1, 1].
    pub fn next_sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::new()
    }
}
