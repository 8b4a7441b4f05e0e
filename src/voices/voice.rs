/// Sample rate used when a caller hands over something unusable.
pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;

/// Context passed to every voice when rendering.
///
/// Holds the sample rate and its reciprocal so phase increments are a single
/// multiply per oscillator per sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub inv_sample_rate: f32,
}

impl RenderCtx {
    /// Non-positive or non-finite rates fall back to [`DEFAULT_SAMPLE_RATE`].
    pub fn new(sample_rate: f32) -> Self {
        let sample_rate = if Self::is_valid_rate(sample_rate) {
            sample_rate
        } else {
            DEFAULT_SAMPLE_RATE
        };

        Self {
            sample_rate,
            inv_sample_rate: 1.0 / sample_rate,
        }
    }

    pub fn is_valid_rate(sample_rate: f32) -> bool {
        sample_rate.is_finite() && sample_rate > 0.0
    }

    /// Phase increment per sample for an oscillator at `frequency` Hz.
    #[inline]
    pub fn increment(&self, frequency: f32) -> f32 {
        frequency * self.inv_sample_rate
    }
}

impl Default for RenderCtx {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

/// Core trait for the drum generators.
///
/// Every voice shares the same life cycle: idle until [`trigger`], then
/// active while its main envelope decays, then idle again once that envelope
/// falls below the voice's floor. An idle voice must return exactly `0.0`
/// from [`next_sample`] without touching any of its state.
///
/// [`trigger`]: DrumVoice::trigger
/// [`next_sample`]: DrumVoice::next_sample
pub trait DrumVoice: Send {
    /// Arm the voice. Re-triggering an active voice restarts it.
    fn trigger(&mut self);

    /// Produce one sample and advance the voice's state.
    fn next_sample(&mut self, ctx: &RenderCtx) -> f32;

    /// Whether the voice is still producing sound.
    fn is_active(&self) -> bool;

    /// Return to the quiescent construction-time state.
    fn reset(&mut self);

    /// Fill `out` one sample at a time.
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        if !self.is_active() {
            out.fill(0.0);
            return;
        }
        for sample in out.iter_mut() {
            *sample = self.next_sample(ctx);
        }
    }
}
