/*
| filter            | state        | passes             | used by        |
| ----------------- | ------------ | ------------------ | -------------- |
| resonant bandpass | bp, lp       | a band around ~1k  | snare          |
| (same, x - lp)    | lp           | everything above   | snare fizz     |
| one-pole highpass | hp, prev     | above a few kHz    | closed/open hat|

Neither filter is tuned in Hz. The coefficients are fixed per voice and
chosen by ear, so the colour of the noise shifts with the sample rate the
same way it does on the hardware these voices imitate.
*/

/// Outputs of a [`ResonantBandpass`] step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandpassOutputs {
    pub bandpass: f32,
    pub lowpass: f32,
    /// Input minus the lowpass state: a crude highpass.
    pub highpass: f32,
}

/// Two cascaded leaky integrators with bandpass feedback.
///
/// ```text
/// bp += f * (x - lp - damping * bp)
/// lp += f * bp
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResonantBandpass {
    bp: f32,
    lp: f32,
    coefficient: f32,
    damping: f32,
}

impl ResonantBandpass {
    pub fn new(coefficient: f32, damping: f32) -> Self {
        Self {
            bp: 0.0,
            lp: 0.0,
            coefficient,
            damping,
        }
    }

    #[inline]
    pub fn next_sample(&mut self, sample: f32) -> BandpassOutputs {
        self.bp += self.coefficient * (sample - self.lp - self.damping * self.bp);
        self.lp += self.coefficient * self.bp;

        BandpassOutputs {
            bandpass: self.bp,
            lowpass: self.lp,
            highpass: sample - self.lp,
        }
    }

    pub fn reset(&mut self) {
        self.bp = 0.0;
        self.lp = 0.0;
    }
}

/// One-pole highpass: `hp = alpha * (hp + x - prev)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnePoleHighpass {
    hp: f32,
    prev: f32,
    alpha: f32,
}

impl OnePoleHighpass {
    pub fn new(alpha: f32) -> Self {
        Self {
            hp: 0.0,
            prev: 0.0,
            alpha,
        }
    }

    #[inline]
    pub fn next_sample(&mut self, sample: f32) -> f32 {
        self.hp = self.alpha * (self.hp + sample - self.prev);
        self.prev = sample;
        self.hp
    }

    pub fn reset(&mut self) {
        self.hp = 0.0;
        self.prev = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::{Noise, Phase};

    fn peak_after_transient(buffer: &[f32]) -> f32 {
        let skip = buffer.len().min(64);
        buffer[skip..].iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    #[test]
    fn highpass_blocks_dc() {
        let mut filter = OnePoleHighpass::new(0.92);
        let mut last = 1.0;
        for _ in 0..256 {
            last = filter.next_sample(1.0);
        }
        assert!(last.abs() < 1e-6, "expected DC to decay, got {last}");
    }

    #[test]
    fn highpass_passes_fast_alternation() {
        let mut filter = OnePoleHighpass::new(0.92);
        let buffer: Vec<f32> = (0..512)
            .map(|n| filter.next_sample(if n % 2 == 0 { 1.0 } else { -1.0 }))
            .collect();
        assert!(peak_after_transient(&buffer) > 0.9);
    }

    #[test]
    fn bandpass_lowpass_settles_on_dc() {
        let mut filter = ResonantBandpass::new(0.28, 0.20);
        let mut out = filter.next_sample(1.0);
        for _ in 0..2_000 {
            out = filter.next_sample(1.0);
        }
        assert!((out.lowpass - 1.0).abs() < 1e-3);
        assert!(out.bandpass.abs() < 1e-3);
        assert!(out.highpass.abs() < 1e-3);
    }

    #[test]
    fn bandpass_emphasizes_mid_band_over_low_band() {
        let sample_rate = 44_100.0;
        let render = |frequency: f32| {
            let mut filter = ResonantBandpass::new(0.28, 0.20);
            let mut phase = Phase::new();
            let buffer: Vec<f32> = (0..2_048)
                .map(|_| {
                    phase.advance(frequency / sample_rate);
                    filter.next_sample(phase.sine()).bandpass
                })
                .collect();
            peak_after_transient(&buffer)
        };

        let centre = render(2_000.0);
        let low = render(50.0);
        assert!(centre > low * 2.0, "centre={centre}, low={low}");
    }

    #[test]
    fn filters_stay_bounded_on_long_noise_runs() {
        let mut noise = Noise::new(7);
        let mut band = ResonantBandpass::new(0.28, 0.20);
        let mut high = OnePoleHighpass::new(0.93);
        for _ in 0..200_000 {
            let n = noise.next_bipolar();
            let out = band.next_sample(n);
            let hp = high.next_sample(n);
            assert!(out.bandpass.abs() < 10.0 && out.lowpass.abs() < 10.0);
            assert!(hp.abs() < 10.0);
        }
    }
}
