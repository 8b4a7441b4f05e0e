//! Open hi-hat voice.
//!
//! The same [`Hat`] structure as the closed hat with a lower, wider pair of
//! partials (5.1kHz / 6.6kHz), a slower highpass and a much longer tail.
//! The mix leans on the partials, so the open hat rings where the closed one
//! hisses.
//!
//! Striking the closed hat chokes a ringing open hat; that coupling belongs
//! to the bank, which owns both voices (see [`DrumBank::trigger`]).
//!
//! [`DrumBank::trigger`]: crate::bank::DrumBank::trigger

use crate::dsp::Noise;
use crate::voices::hihat::{Hat, HatTuning};

pub const OPEN_HAT: HatTuning = HatTuning {
    strike: 0.9,
    amp_rate: 0.9993,
    tone_rate: 0.94,
    floor: 0.0004,
    highpass_alpha: 0.93,
    partials: [5_100.0, 6_600.0],
    partial_offset: 0.37,
    noise_mix: 0.55,
    tone_mix: 0.95,
    trim: 0.7,
};

/// How much of the open hat survives a closed-hat strike.
pub const CHOKE_FACTOR: f32 = 0.3;

impl Hat {
    pub fn open(noise: Noise) -> Self {
        Self::with_tuning(OPEN_HAT, noise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voices::{DrumVoice, RenderCtx};
    use approx::assert_relative_eq;

    #[test]
    fn open_hat_rings_longer_than_closed() {
        let ctx = RenderCtx::new(44_100.0);
        let mut open = Hat::open(Noise::new(4));
        let mut closed = Hat::closed(Noise::new(5));
        open.trigger();
        closed.trigger();

        let mut open_len = 0;
        let mut closed_len = 0;
        for _ in 0..40_000 {
            open.next_sample(&ctx);
            closed.next_sample(&ctx);
            open_len += open.is_active() as u32;
            closed_len += closed.is_active() as u32;
        }
        assert!(open_len > closed_len * 2, "open={open_len}, closed={closed_len}");
        assert!(!open.is_active());
    }

    #[test]
    fn trigger_uses_open_tuning() {
        let mut hat = Hat::open(Noise::new(4));
        assert_eq!(hat.tuning(), &OPEN_HAT);
        hat.trigger();
        assert_eq!(hat.amplitude(), 0.9);
        assert_relative_eq!(hat.phases()[1], 0.37);
    }

    #[test]
    fn choke_shortens_ringing_tail() {
        let ctx = RenderCtx::new(44_100.0);
        let mut hat = Hat::open(Noise::new(4));
        hat.trigger();
        for _ in 0..200 {
            hat.next_sample(&ctx);
        }
        let before = hat.amplitude();
        hat.choke(CHOKE_FACTOR);
        assert_eq!(hat.amplitude(), before * CHOKE_FACTOR);
        assert!(hat.is_active());
    }
}
