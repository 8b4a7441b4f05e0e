use std::f32::consts::TAU;

/*
Phase Accumulator
=================

Every oscillator in the drum bank is a phase accumulator: a number that walks
from 0 up towards 1, wraps, and starts again. One trip from 0 to 1 is one
cycle of the waveform.

    increment = frequency / sample_rate

Example: 180 Hz at 48kHz
  - increment = 180 / 48000 = 0.00375
  - one cycle takes 1 / 0.00375 ≈ 267 samples

The waveform is then a function of the phase alone:

    sine = sin(2π · phase)


Wrapping
--------

   1.0 ┤    ╱│    ╱│    ╱│
       │   ╱ │   ╱ │   ╱ │
       │  ╱  │  ╱  │  ╱  │
   0.0 ┼─╱───┴─╱───┴─╱───┴──→ samples

A single subtraction of 1.0 is enough while the increment stays below 1,
i.e. while the frequency is below the sample rate. Hat partials at 7.4kHz
against an 8kHz stream come close, and a bogus sample rate can push the
increment far past 1, so anything still >= 1.0 after that subtraction falls
back to `fract()`. Non-finite increments are dropped rather than poisoning
the accumulator with NaN.
*/

/// Oscillator position, always in [0, 1).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Phase(f32);

impl Phase {
    pub const fn new() -> Self {
        Self(0.0)
    }

    /// Start at an arbitrary position. Out-of-range values are wrapped.
    pub fn at(position: f32) -> Self {
        let mut phase = Self::new();
        phase.set(position);
        phase
    }

    pub fn set(&mut self, position: f32) {
        self.0 = wrap(position);
    }

    pub fn reset(&mut self) {
        self.0 = 0.0;
    }

    /// Advance by `increment` cycles (frequency / sample rate).
    #[inline]
    pub fn advance(&mut self, increment: f32) {
        if !increment.is_finite() || increment <= 0.0 {
            return;
        }

        self.0 += increment;
        if self.0 >= 1.0 {
            self.0 -= 1.0;
            if self.0 >= 1.0 {
                self.0 = wrap(self.0);
            }
        }
    }

    #[inline]
    pub fn sine(&self) -> f32 {
        (TAU * self.0).sin()
    }

    /// Sine at `multiple` times the accumulator's rate, sharing its phase.
    #[inline]
    pub fn sine_harmonic(&self, multiple: f32) -> f32 {
        (TAU * self.0 * multiple).sin()
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.0
    }
}

#[inline]
fn wrap(position: f32) -> f32 {
    if !position.is_finite() {
        return 0.0;
    }
    let wrapped = position - position.floor();
    // A tiny negative input can round up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn advance_wraps_into_unit_range() {
        let mut phase = Phase::new();
        for _ in 0..10_000 {
            phase.advance(0.37);
            assert!((0.0..1.0).contains(&phase.value()));
        }
    }

    #[test]
    fn increments_above_one_still_wrap() {
        let mut phase = Phase::at(0.5);
        phase.advance(3.25);
        assert_relative_eq!(phase.value(), 0.75, epsilon = 1e-6);

        phase.advance(1.0e9);
        assert!((0.0..1.0).contains(&phase.value()));
    }

    #[test]
    fn non_finite_increment_is_ignored() {
        let mut phase = Phase::at(0.25);
        phase.advance(f32::NAN);
        phase.advance(f32::INFINITY);
        phase.advance(-0.1);
        assert_eq!(phase.value(), 0.25);
    }

    #[test]
    fn at_wraps_negative_and_large_positions() {
        assert_relative_eq!(Phase::at(-0.25).value(), 0.75, epsilon = 1e-6);
        assert_relative_eq!(Phase::at(2.5).value(), 0.5, epsilon = 1e-6);
        assert_eq!(Phase::at(-1.0e-12).value(), 0.0);
        assert_eq!(Phase::at(f32::NAN).value(), 0.0);
    }

    #[test]
    fn sine_matches_phase_position() {
        let phase = Phase::at(0.25);
        assert_relative_eq!(phase.sine(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(phase.sine_harmonic(2.0), 0.0, epsilon = 1e-6);
    }
}
