//! Bounded, steppable control values.
//!
//! A [`Parameter`] never rejects input: every setter saturates into
//! `[min, max]`, so encoder turns, normalised knob positions and raw values
//! can all be thrown at it from the control side without checks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters exposed by the drum bank.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrumParamId {
    MainVolume,
}

impl DrumParamId {
    pub const COUNT: usize = 1;
    pub const ALL: [DrumParamId; Self::COUNT] = [DrumParamId::MainVolume];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameter {
    label: &'static str,
    unit: &'static str,
    min: f32,
    max: f32,
    default: f32,
    step: f32,
    value: f32,
}

impl Parameter {
    pub fn new(
        label: &'static str,
        unit: &'static str,
        min: f32,
        max: f32,
        default: f32,
        step: f32,
    ) -> Self {
        let mut param = Self {
            label,
            unit,
            min,
            max,
            default,
            step,
            value: min,
        };
        param.set_value(default);
        param.default = param.value;
        param
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn unit(&self) -> &'static str {
        self.unit
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn default_value(&self) -> f32 {
        self.default
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Position of the value in its range, 0.0 to 1.0. Zero for an empty range.
    pub fn normalized(&self) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        (self.value - self.min) / (self.max - self.min)
    }

    /// Set the value, clamped to the range. NaN leaves the value unchanged.
    pub fn set_value(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }
        self.value = if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        };
    }

    /// Relative adjustment by whole steps, as from an encoder detent.
    pub fn add_steps(&mut self, steps: i32) {
        self.set_value(self.value + self.step * steps as f32);
    }

    /// Map a 0.0-1.0 position into the range. Out-of-range input saturates.
    pub fn set_normalized(&mut self, normalized: f32) {
        let normalized = if normalized.is_nan() {
            0.0
        } else {
            normalized.clamp(0.0, 1.0)
        };
        self.set_value(self.min + normalized * (self.max - self.min));
    }

    pub fn reset(&mut self) {
        self.value = self.default;
    }
}
