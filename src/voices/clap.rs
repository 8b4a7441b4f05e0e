//! Clap voice - three quick slaps of noise.
//!
//! A hand clap is several hands hitting within a few tens of milliseconds.
//! The voice models that with a stepped gate over a noise burst rather than
//! three separate envelopes.
//!
//! # How It Works
//!
//! 1. On trigger one noise sample is latched; mixing 30% of that constant
//!    into fresh noise gives each clap a slightly different DC "weight"
//! 2. A 1100Hz sine, evaluated at the time since the strike, adds the body
//! 3. The gate steps down through the three slaps:
//!
//! ```text
//!   gate
//!   1.0 ┤████
//!   0.8 ┤    ████
//!   0.6 ┤        ████
//!   0.0 ┼────────────────────→
//!       0   24   48   72  ms
//! ```
//!
//! 4. A fast transient envelope and a slow main envelope shape the whole
//!    thing; the main envelope decides when the voice goes idle, well after
//!    the gate has closed

use std::f32::consts::TAU;

use crate::dsp::{Decay, Noise};
use crate::voices::{DrumVoice, RenderCtx};

const ENV_RATE: f32 = 0.99992;
const ENV_FLOOR: f32 = 0.0002;
const TRANSIENT_RATE: f32 = 0.9985;

/// End of each slap in seconds, paired with its level.
const SLAPS: [(f32, f32); 3] = [(0.024, 1.0), (0.048, 0.8), (0.072, 0.6)];

const TONE_FREQUENCY: f32 = 1_100.0;
const FRESH_NOISE: f32 = 0.7;
const LATCHED_NOISE: f32 = 0.3;
const NOISE_MIX: f32 = 0.7;
const TONE_MIX: f32 = 0.3;

pub struct Clap {
    env: Decay,
    transient: Decay,
    latched: f32,
    /// Seconds since the strike, accumulated one sample period at a time.
    elapsed: f32,
    noise: Noise,
    active: bool,
}

impl Clap {
    pub fn new(noise: Noise) -> Self {
        Self {
            env: Decay::new(ENV_RATE, ENV_FLOOR),
            transient: Decay::new(TRANSIENT_RATE, 0.0),
            latched: 0.0,
            elapsed: 0.0,
            noise,
            active: false,
        }
    }

    pub fn envelope(&self) -> f32 {
        self.env.level()
    }

    pub fn transient(&self) -> f32 {
        self.transient.level()
    }

    pub fn latched_noise(&self) -> f32 {
        self.latched
    }

    /// Seconds since the last strike. A sample-rate change mid-clap only
    /// alters the step size from then on.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Gate level for a point in time after the strike.
    #[inline]
    pub fn gate(elapsed: f32) -> f32 {
        if elapsed.is_nan() || elapsed < 0.0 {
            return 0.0;
        }
        SLAPS
            .iter()
            .find(|&&(end, _)| elapsed < end)
            .map_or(0.0, |&(_, level)| level)
    }
}

impl DrumVoice for Clap {
    fn trigger(&mut self) {
        self.active = true;
        self.env.strike(1.0);
        self.transient.strike(1.0);
        self.latched = self.noise.next_bipolar();
        self.elapsed = 0.0;
    }

    fn next_sample(&mut self, ctx: &RenderCtx) -> f32 {
        if !self.active {
            return 0.0;
        }

        let audible = self.env.advance();
        self.transient.advance();
        self.elapsed += ctx.inv_sample_rate;
        if !audible {
            self.active = false;
            return 0.0;
        }

        let elapsed = self.elapsed;
        let gate = Self::gate(elapsed);
        if gate == 0.0 {
            return 0.0;
        }

        let noise = self.noise.next_bipolar() * FRESH_NOISE + self.latched * LATCHED_NOISE;
        let tone = (TAU * TONE_FREQUENCY * elapsed).sin();
        let out = (noise * NOISE_MIX + tone * TONE_MIX) * self.transient.level() * gate;
        out * self.env.level()
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn reset(&mut self) {
        self.env.reset();
        self.transient.reset();
        self.latched = 0.0;
        self.elapsed = 0.0;
        self.active = false;
    }
}
