//! Tom voices (mid and high).
//!
//! A fixed-pitch sine with a whisper of noise on top so repeated hits don't
//! sound sampled. The two toms differ only in [`TomTuning`].
//!
//! ```text
//! sample = (sin(φ) * tone_mix + noise * noise_mix) * env * trim
//! ```

use crate::dsp::{Decay, Noise, Phase};
use crate::voices::{DrumVoice, RenderCtx};

const TOM_FLOOR: f32 = 0.0003;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TomTuning {
    pub rate: f32,
    pub frequency: f32,
    pub tone_mix: f32,
    pub noise_mix: f32,
    pub trim: f32,
}

pub const MID_TOM: TomTuning = TomTuning {
    rate: 0.99925,
    frequency: 180.0,
    tone_mix: 0.9,
    noise_mix: 0.05,
    trim: 0.8,
};

pub const HIGH_TOM: TomTuning = TomTuning {
    rate: 0.99915,
    frequency: 240.0,
    tone_mix: 0.88,
    noise_mix: 0.04,
    trim: 0.75,
};

pub struct Tom {
    tuning: TomTuning,
    env: Decay,
    phase: Phase,
    noise: Noise,
    active: bool,
}

impl Tom {
    pub fn with_tuning(tuning: TomTuning, noise: Noise) -> Self {
        Self {
            tuning,
            env: Decay::new(tuning.rate, TOM_FLOOR),
            phase: Phase::new(),
            noise,
            active: false,
        }
    }

    pub fn mid(noise: Noise) -> Self {
        Self::with_tuning(MID_TOM, noise)
    }

    pub fn high(noise: Noise) -> Self {
        Self::with_tuning(HIGH_TOM, noise)
    }

    pub fn tuning(&self) -> &TomTuning {
        &self.tuning
    }

    pub fn envelope(&self) -> f32 {
        self.env.level()
    }

    pub fn phase(&self) -> f32 {
        self.phase.value()
    }
}

impl DrumVoice for Tom {
    fn trigger(&mut self) {
        self.active = true;
        self.env.strike(1.0);
        self.phase.reset();
    }

    fn next_sample(&mut self, ctx: &RenderCtx) -> f32 {
        if !self.active {
            return 0.0;
        }

        if !self.env.advance() {
            self.active = false;
            return 0.0;
        }

        self.phase.advance(ctx.increment(self.tuning.frequency));
        let tone = self.phase.sine() * self.tuning.tone_mix;
        let dither = self.noise.next_bipolar() * self.tuning.noise_mix;

        (tone + dither) * self.env.level() * self.tuning.trim
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn reset(&mut self) {
        self.env.reset();
        self.phase.reset();
        self.active = false;
    }
}
