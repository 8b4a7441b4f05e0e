//! White noise for the snare, hats, toms, rim and clap.
//!
//! Every voice owns its own generator so the noise streams are uncorrelated
//! and reproducible from a seed. The generator is a PCG32 from `oorandom`:
//! no allocation, no locking, a handful of integer ops per sample.

use oorandom::Rand32;

/// Uniform white noise in [-1, 1).
#[derive(Debug, Clone)]
pub struct Noise(Rand32);

impl Noise {
    /// The same seed always yields the same stream.
    pub fn new(seed: u64) -> Self {
        Self(Rand32::new(seed))
    }

    #[inline]
    pub fn next_bipolar(&mut self) -> f32 {
        self.0.rand_float() * 2.0 - 1.0
    }
}
