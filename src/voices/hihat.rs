//! Hi-hat voice (closed).
//!
//! A tight burst of highpassed noise with two inharmonic sine partials on top
//! for the metallic ring. Closed and open hats share this structure and
//! differ only in their [`HatTuning`]; the open tuning lives in
//! [`openhat`](super::openhat).
//!
//! # How It Works
//!
//! 1. White noise through a one-pole highpass removes the low end
//! 2. Two partials (6.2kHz and 7.4kHz, started a quarter cycle apart) give
//!    the "tss" its pitchless metal colour
//! 3. The partials fade within a few milliseconds; the noise envelope carries
//!    the rest of the hit
//!
//! ```text
//! sample = (hp * noise_mix + (sin(a) + sin(b)) / 2 * tone_env * tone_mix) * amp * trim
//! ```
//!
//! A closed hat is noise-forward, the open hat is tone-forward.

use crate::dsp::{Decay, Noise, OnePoleHighpass, Phase};
use crate::voices::{DrumVoice, RenderCtx};

/// The constants that distinguish one hat from another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HatTuning {
    pub strike: f32,
    pub amp_rate: f32,
    pub tone_rate: f32,
    pub floor: f32,
    pub highpass_alpha: f32,
    pub partials: [f32; 2],
    /// Starting position of the second partial, in cycles.
    pub partial_offset: f32,
    pub noise_mix: f32,
    pub tone_mix: f32,
    pub trim: f32,
}

pub const CLOSED_HAT: HatTuning = HatTuning {
    strike: 0.7,
    amp_rate: 0.998,
    tone_rate: 0.92,
    floor: 0.0005,
    highpass_alpha: 0.92,
    partials: [6_200.0, 7_400.0],
    partial_offset: 0.25,
    noise_mix: 0.65,
    tone_mix: 0.7,
    trim: 0.6,
};

pub struct Hat {
    tuning: HatTuning,
    amp: Decay,
    tone_env: Decay,
    highpass: OnePoleHighpass,
    partial_a: Phase,
    partial_b: Phase,
    noise: Noise,
    active: bool,
}

impl Hat {
    pub fn with_tuning(tuning: HatTuning, noise: Noise) -> Self {
        Self {
            tuning,
            amp: Decay::new(tuning.amp_rate, tuning.floor),
            tone_env: Decay::new(tuning.tone_rate, 0.0),
            highpass: OnePoleHighpass::new(tuning.highpass_alpha),
            partial_a: Phase::new(),
            partial_b: Phase::new(),
            noise,
            active: false,
        }
    }

    pub fn closed(noise: Noise) -> Self {
        Self::with_tuning(CLOSED_HAT, noise)
    }

    pub fn tuning(&self) -> &HatTuning {
        &self.tuning
    }

    pub fn amplitude(&self) -> f32 {
        self.amp.level()
    }

    pub fn tone_envelope(&self) -> f32 {
        self.tone_env.level()
    }

    pub fn phases(&self) -> [f32; 2] {
        [self.partial_a.value(), self.partial_b.value()]
    }

    /// Damp whatever is left of the amplitude envelope, ringing or not.
    pub fn choke(&mut self, factor: f32) {
        self.amp.scale(factor);
    }
}

impl DrumVoice for Hat {
    fn trigger(&mut self) {
        self.active = true;
        self.amp.strike(self.tuning.strike);
        self.tone_env.strike(1.0);
        self.partial_a.reset();
        self.partial_b.set(self.tuning.partial_offset);
    }

    fn next_sample(&mut self, ctx: &RenderCtx) -> f32 {
        if !self.active {
            return 0.0;
        }

        let audible = self.amp.advance();
        self.tone_env.advance();
        if !audible {
            self.active = false;
            return 0.0;
        }

        let hiss = self.highpass.next_sample(self.noise.next_bipolar());

        let [freq_a, freq_b] = self.tuning.partials;
        self.partial_a.advance(ctx.increment(freq_a));
        self.partial_b.advance(ctx.increment(freq_b));
        let tone = (self.partial_a.sine() + self.partial_b.sine()) * 0.5 * self.tone_env.level();

        let out = hiss * self.tuning.noise_mix + tone * self.tuning.tone_mix;
        out * self.amp.level() * self.tuning.trim
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn reset(&mut self) {
        self.amp.reset();
        self.tone_env.reset();
        self.highpass.reset();
        self.partial_a.reset();
        self.partial_b.reset();
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_offsets_second_partial() {
        let mut hat = Hat::closed(Noise::new(3));
        assert_eq!(hat.tuning(), &CLOSED_HAT);
        hat.trigger();
        assert_eq!(hat.phases(), [0.0, 0.25]);
        assert_eq!(hat.amplitude(), 0.7);
    }

    #[test]
    fn closed_hat_is_short() {
        let ctx = RenderCtx::new(44_100.0);
        let mut hat = Hat::closed(Noise::new(3));
        hat.trigger();

        let mut samples = 0;
        while hat.is_active() {
            hat.next_sample(&ctx);
            samples += 1;
        }
        // ln(0.0005 / 0.7) / ln(0.998) ≈ 3,620 samples
        assert!((3_550..=3_700).contains(&samples), "went idle after {samples}");
    }

    #[test]
    fn partials_fade_before_the_noise() {
        let ctx = RenderCtx::new(44_100.0);
        let mut hat = Hat::closed(Noise::new(3));
        hat.trigger();
        for _ in 0..100 {
            hat.next_sample(&ctx);
        }
        assert!(hat.tone_envelope() < 0.001);
        assert!(hat.amplitude() > 0.5);
    }

    #[test]
    fn choke_on_idle_hat_stays_silent() {
        let ctx = RenderCtx::new(44_100.0);
        let mut hat = Hat::closed(Noise::new(3));
        hat.choke(0.3);
        assert_eq!(hat.amplitude(), 0.0);
        assert!(!hat.is_active());
        assert_eq!(hat.next_sample(&ctx), 0.0);
    }
}
