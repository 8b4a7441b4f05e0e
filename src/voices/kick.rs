//! Kick drum voice.
//!
//! A sine body with a fast downward pitch sweep, pushed through a tanh
//! saturator the way an overdriven analog VCA rounds off the peaks.
//!
//! # How It Works
//!
//! 1. Amplitude envelope: strike at 1.2, long geometric tail
//! 2. Pitch envelope: decays much faster; its square sweeps the body from
//!    ~212Hz down to 42Hz in the first few tens of milliseconds
//! 3. Drive grows with the amplitude envelope, so the attack is the most
//!    saturated part of the hit
//! 4. A third-harmonic sine, gated by the pitch sweep, adds the click
//!
//! ```text
//! freq   = 42 + 170 * pitch²
//! sample = (tanh(sin(φ) * (2.8 + 0.6 * amp)) * 0.85 + sin(3φ) * pitch² * 0.25) * amp
//! ```

use crate::dsp::{Decay, Phase};
use crate::voices::{DrumVoice, RenderCtx};

const AMP_STRIKE: f32 = 1.2;
const AMP_RATE: f32 = 0.9995;
const AMP_FLOOR: f32 = 0.0008;
const PITCH_RATE: f32 = 0.997;

const BASE_FREQUENCY: f32 = 42.0;
const SWEEP_DEPTH: f32 = 170.0;
const STRIKE_FREQUENCY: f32 = 55.0;
const IDLE_FREQUENCY: f32 = 60.0;

const DRIVE: f32 = 2.8;
const DRIVE_TRACKING: f32 = 0.6;
const BODY_LEVEL: f32 = 0.85;
const CLICK_LEVEL: f32 = 0.25;

pub struct Kick {
    phase: Phase,
    amp: Decay,
    pitch: Decay,
    /// Instantaneous body frequency, cached for inspection.
    frequency: f32,
    active: bool,
}

impl Kick {
    pub fn new() -> Self {
        Self {
            phase: Phase::new(),
            amp: Decay::new(AMP_RATE, AMP_FLOOR),
            pitch: Decay::new(PITCH_RATE, 0.0),
            frequency: IDLE_FREQUENCY,
            active: false,
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn amplitude(&self) -> f32 {
        self.amp.level()
    }

    pub fn pitch_envelope(&self) -> f32 {
        self.pitch.level()
    }

    pub fn phase(&self) -> f32 {
        self.phase.value()
    }
}

impl Default for Kick {
    fn default() -> Self {
        Self::new()
    }
}

impl DrumVoice for Kick {
    fn trigger(&mut self) {
        self.active = true;
        self.phase.reset();
        self.amp.strike(AMP_STRIKE);
        self.pitch.strike(1.0);
        self.frequency = STRIKE_FREQUENCY;
    }

    fn next_sample(&mut self, ctx: &RenderCtx) -> f32 {
        if !self.active {
            return 0.0;
        }

        let audible = self.amp.advance();
        self.pitch.advance();
        if !audible {
            self.active = false;
            return 0.0;
        }

        let sweep = self.pitch.level() * self.pitch.level();
        self.frequency = BASE_FREQUENCY + SWEEP_DEPTH * sweep;
        self.phase.advance(ctx.increment(self.frequency));

        let amp = self.amp.level();
        let driven = (self.phase.sine() * (DRIVE + DRIVE_TRACKING * amp)).tanh();
        let click = self.phase.sine_harmonic(3.0) * sweep * CLICK_LEVEL;

        (driven * BODY_LEVEL + click) * amp
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn reset(&mut self) {
        self.phase.reset();
        self.amp.reset();
        self.pitch.reset();
        self.frequency = IDLE_FREQUENCY;
        self.active = false;
    }
}
