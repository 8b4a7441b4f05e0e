//! Snare drum voice.
//!
//! An 808-flavoured snare: a bright noise burst carrying a two-sine "body".
//!
//! # How It Works
//!
//! 1. White noise through a resonant bandpass (~2kHz at 44.1kHz); the output
//!    mixes the band (35%) with the input-minus-lowpass fizz (65%)
//! 2. Two sines at 330Hz and 180Hz, mixed 55/45, for the drum shell tone
//! 3. The noise envelope decays over roughly a tenth of a second and ends the
//!    voice; the tone envelope barely moves, so the shell rings exactly as
//!    long as the noise does
//!
//! ```text
//! sample = (noise * 0.75 + tone * tone_env * 0.65) * noise_env
//! ```

use crate::dsp::{Decay, Noise, Phase, ResonantBandpass};
use crate::voices::{DrumVoice, RenderCtx};

const NOISE_STRIKE: f32 = 1.1;
const NOISE_RATE: f32 = 0.9985;
const NOISE_FLOOR: f32 = 0.0002;
const TONE_RATE: f32 = 0.99999;

const BAND_COEFFICIENT: f32 = 0.28;
const BAND_DAMPING: f32 = 0.20;
const BAND_LEVEL: f32 = 0.35;
const FIZZ_LEVEL: f32 = 0.65;

const TONE_A_FREQUENCY: f32 = 330.0;
const TONE_B_FREQUENCY: f32 = 180.0;
const TONE_A_LEVEL: f32 = 0.55;
const TONE_B_LEVEL: f32 = 0.45;

const NOISE_MIX: f32 = 0.75;
const TONE_MIX: f32 = 0.65;

pub struct Snare {
    noise_env: Decay,
    tone_env: Decay,
    filter: ResonantBandpass,
    tone_a: Phase,
    tone_b: Phase,
    noise: Noise,
    active: bool,
}

impl Snare {
    pub fn new(noise: Noise) -> Self {
        Self {
            noise_env: Decay::new(NOISE_RATE, NOISE_FLOOR),
            tone_env: Decay::new(TONE_RATE, 0.0),
            filter: ResonantBandpass::new(BAND_COEFFICIENT, BAND_DAMPING),
            tone_a: Phase::new(),
            tone_b: Phase::new(),
            noise,
            active: false,
        }
    }

    pub fn noise_envelope(&self) -> f32 {
        self.noise_env.level()
    }

    pub fn tone_envelope(&self) -> f32 {
        self.tone_env.level()
    }

    pub fn phases(&self) -> [f32; 2] {
        [self.tone_a.value(), self.tone_b.value()]
    }
}

impl DrumVoice for Snare {
    fn trigger(&mut self) {
        self.active = true;
        self.noise_env.strike(NOISE_STRIKE);
        self.tone_env.strike(1.0);
        self.tone_a.reset();
        self.tone_b.reset();
    }

    fn next_sample(&mut self, ctx: &RenderCtx) -> f32 {
        if !self.active {
            return 0.0;
        }

        let audible = self.noise_env.advance();
        self.tone_env.advance();
        if !audible {
            self.active = false;
            return 0.0;
        }

        let band = self.filter.next_sample(self.noise.next_bipolar());
        let noise = band.bandpass * BAND_LEVEL + band.highpass * FIZZ_LEVEL;

        self.tone_a.advance(ctx.increment(TONE_A_FREQUENCY));
        self.tone_b.advance(ctx.increment(TONE_B_FREQUENCY));
        let tone = (self.tone_a.sine() * TONE_A_LEVEL + self.tone_b.sine() * TONE_B_LEVEL)
            * self.tone_env.level();

        (noise * NOISE_MIX + tone * TONE_MIX) * self.noise_env.level()
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn reset(&mut self) {
        self.noise_env.reset();
        self.tone_env.reset();
        self.filter.reset();
        self.tone_a.reset();
        self.tone_b.reset();
        self.active = false;
    }
}
