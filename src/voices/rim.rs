//! Rim-click voice.
//!
//! A 900Hz sine with a biased noise click. The click is scaled by the
//! envelope twice (once on its own, once with the tone), so it dies away
//! quadratically and leaves the short ring of the rim behind.

use crate::dsp::{Decay, Noise, Phase};
use crate::voices::{DrumVoice, RenderCtx};

const RATE: f32 = 0.9985;
const FLOOR: f32 = 0.0004;
const FREQUENCY: f32 = 900.0;
const TONE_MIX: f32 = 0.5;
const CLICK_NOISE: f32 = 0.6;
const CLICK_BIAS: f32 = 0.4;
const TRIM: f32 = 0.8;

pub struct Rim {
    env: Decay,
    phase: Phase,
    noise: Noise,
    active: bool,
}

impl Rim {
    pub fn new(noise: Noise) -> Self {
        Self {
            env: Decay::new(RATE, FLOOR),
            phase: Phase::new(),
            noise,
            active: false,
        }
    }

    pub fn envelope(&self) -> f32 {
        self.env.level()
    }

    pub fn phase(&self) -> f32 {
        self.phase.value()
    }
}

impl DrumVoice for Rim {
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

        self.phase.advance(ctx.increment(FREQUENCY));
        let env = self.env.level();
        let click = (self.noise.next_bipolar() * CLICK_NOISE + CLICK_BIAS) * env;

        (self.phase.sine() * TONE_MIX + click) * env * TRIM
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
