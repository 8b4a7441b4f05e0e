/*
Geometric Decay Envelope
========================

Analog drum voices don't have attack/sustain stages. A strike charges a
capacitor and it bleeds away exponentially. In discrete time that is just a
multiply per sample:

    level[n] = level[n-1] * rate        (0 < rate < 1)

  Level
  strike ┐╲
         │ ╲
         │  ╲_
         │    ╲__
         │       ╲___
   floor ┼───────────╲______ ← voice goes idle here
         └─────────────────────→ Time

The rate sets the decay time. Solving strike * rate^n = floor:

    n = ln(floor / strike) / ln(rate)

Example: kick, strike 1.2, rate 0.9995, floor 0.0008
  - n = ln(0.000667) / ln(0.9995) ≈ 14,620 samples
  - at 44.1kHz that is about a third of a second


Floors
------

The floor is the level at which the owning voice deactivates. Envelopes that
only colour a voice (pitch sweeps, tone ticks) use a floor of zero and never
end the voice themselves. Those can shrink far enough to reach subnormal
floats, which are slow on most CPUs, so anything below SUBNORMAL_GUARD is
flushed to exactly zero.
*/

const SUBNORMAL_GUARD: f32 = 1.0e-20;

/// A level that shrinks by a fixed ratio every sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decay {
    level: f32,
    rate: f32,
    floor: f32,
}

impl Decay {
    /// `rate` is the per-sample multiplier, `floor` the deactivation level.
    pub fn new(rate: f32, floor: f32) -> Self {
        debug_assert!((0.0..1.0).contains(&rate), "decay rate must be in [0, 1)");
        Self {
            level: 0.0,
            rate: rate.clamp(0.0, 0.999_999_9),
            floor: floor.max(0.0),
        }
    }

    /// Restart from `level`, discarding whatever was left.
    pub fn strike(&mut self, level: f32) {
        self.level = if level.is_finite() { level.max(0.0) } else { 0.0 };
    }

    /// Decay by one sample. Returns false once the level is below the floor.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.level *= self.rate;
        if self.level < SUBNORMAL_GUARD {
            self.level = 0.0;
        }
        self.level >= self.floor
    }

    /// Damp the current level, as when one voice chokes another.
    pub fn scale(&mut self, factor: f32) {
        self.level *= factor.clamp(0.0, 1.0);
    }

    pub fn reset(&mut self) {
        self.level = 0.0;
    }

    #[inline]
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Samples a strike at `level` needs to fall below the floor.
    pub fn samples_to_floor(&self, level: f32) -> Option<u32> {
        if self.floor <= 0.0 || level <= 0.0 || self.rate <= 0.0 {
            return None;
        }
        let n = (self.floor / level).ln() / self.rate.ln();
        Some(n.max(0.0).ceil() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn level_strictly_decreases_until_floor() {
        let mut env = Decay::new(0.99, 0.01);
        env.strike(1.0);

        let mut previous = env.level();
        while env.advance() {
            assert!(env.level() < previous);
            previous = env.level();
        }
        assert!(env.level() < 0.01);
    }

    #[test]
    fn strike_discards_remaining_level() {
        let mut env = Decay::new(0.9, 0.0);
        env.strike(1.0);
        for _ in 0..10 {
            env.advance();
        }
        env.strike(0.5);
        assert_eq!(env.level(), 0.5);
    }

    #[test]
    fn scale_is_exact_multiply() {
        let mut env = Decay::new(0.9993, 0.0004);
        env.strike(0.9);
        env.advance();
        let before = env.level();
        env.scale(0.3);
        assert_eq!(env.level(), before * 0.3);
    }

    #[test]
    fn floorless_envelope_flushes_to_zero() {
        let mut env = Decay::new(0.92, 0.0);
        env.strike(1.0);
        for _ in 0..2_000 {
            assert!(env.advance());
        }
        assert_eq!(env.level(), 0.0);
    }

    #[test]
    fn samples_to_floor_matches_closed_form() {
        let env = Decay::new(0.9995, 0.0008);
        let n = env.samples_to_floor(1.2).unwrap();
        let expected = ((0.0008f32 / 1.2).ln() / 0.9995f32.ln()).ceil();
        assert_relative_eq!(n as f32, expected, epsilon = 1.0);
        assert!(Decay::new(0.9, 0.0).samples_to_floor(1.0).is_none());
    }
}
