//! The drum voice bank.
//!
//! [`DrumBank`] owns one instance of every voice, the shared volume
//! parameter and the one rule that couples two voices: striking the closed
//! hat chokes a ringing open hat. It does not mix; every frame comes back
//! as a [`VoiceFrame`] with one unscaled sample per voice, and the host
//! decides how to sum, scale and limit them.

pub mod message;

use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::Noise,
    param::{DrumParamId, Parameter},
    voices::{openhat::CHOKE_FACTOR, Clap, DrumVoice, Hat, Kick, RenderCtx, Rim, Snare, Tom},
};

use self::message::{TriggerEvent, TriggerReceiver};

const DEFAULT_SEED: u64 = 0x5eed_d3;

/// One of the eight drum voices.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceId {
    Kick,
    Snare,
    ClosedHat,
    OpenHat,
    MidTom,
    HighTom,
    Rim,
    Clap,
}

impl VoiceId {
    pub const COUNT: usize = 8;
    pub const ALL: [VoiceId; Self::COUNT] = [
        VoiceId::Kick,
        VoiceId::Snare,
        VoiceId::ClosedHat,
        VoiceId::OpenHat,
        VoiceId::MidTom,
        VoiceId::HighTom,
        VoiceId::Rim,
        VoiceId::Clap,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Two-letter label as printed on drum machine step grids.
    pub fn label(self) -> &'static str {
        match self {
            VoiceId::Kick => "BD",
            VoiceId::Snare => "SD",
            VoiceId::ClosedHat => "CH",
            VoiceId::OpenHat => "OH",
            VoiceId::MidTom => "MT",
            VoiceId::HighTom => "HT",
            VoiceId::Rim => "RS",
            VoiceId::Clap => "CP",
        }
    }
}

/// One sample from every voice, indexed by [`VoiceId`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VoiceFrame(pub [f32; VoiceId::COUNT]);

impl VoiceFrame {
    /// Plain sum of all voices, before any volume or limiting.
    #[inline]
    pub fn sum(&self) -> f32 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VoiceId, f32)> + '_ {
        VoiceId::ALL.iter().copied().zip(self.0.iter().copied())
    }
}

impl Index<VoiceId> for VoiceFrame {
    type Output = f32;

    fn index(&self, voice: VoiceId) -> &f32 {
        &self.0[voice.index()]
    }
}

impl IndexMut<VoiceId> for VoiceFrame {
    fn index_mut(&mut self, voice: VoiceId) -> &mut f32 {
        &mut self.0[voice.index()]
    }
}

pub struct DrumBank {
    ctx: RenderCtx,
    kick: Kick,
    snare: Snare,
    closed_hat: Hat,
    open_hat: Hat,
    mid_tom: Tom,
    high_tom: Tom,
    rim: Rim,
    clap: Clap,
    params: [Parameter; DrumParamId::COUNT],
}

fn default_params() -> [Parameter; DrumParamId::COUNT] {
    [Parameter::new("vol", "", 0.0, 1.0, 0.8, 1.0 / 128.0)]
}

/// Give every voice its own stream, derived from the bank seed.
fn voice_noise(seed: u64, voice: VoiceId) -> Noise {
    let salt = (voice.index() as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    Noise::new(seed ^ salt)
}

impl DrumBank {
    pub fn new(sample_rate: f32) -> Self {
        Self::with_seed(sample_rate, DEFAULT_SEED)
    }

    /// Same seed, same triggers, same sample rate: bit-identical output.
    pub fn with_seed(sample_rate: f32, seed: u64) -> Self {
        let mut bank = Self {
            ctx: RenderCtx::default(),
            kick: Kick::new(),
            snare: Snare::new(voice_noise(seed, VoiceId::Snare)),
            closed_hat: Hat::closed(voice_noise(seed, VoiceId::ClosedHat)),
            open_hat: Hat::open(voice_noise(seed, VoiceId::OpenHat)),
            mid_tom: Tom::mid(voice_noise(seed, VoiceId::MidTom)),
            high_tom: Tom::high(voice_noise(seed, VoiceId::HighTom)),
            rim: Rim::new(voice_noise(seed, VoiceId::Rim)),
            clap: Clap::new(voice_noise(seed, VoiceId::Clap)),
            params: default_params(),
        };
        bank.set_sample_rate(sample_rate);
        bank
    }

    /// Silence every voice and restore parameter defaults.
    pub fn reset(&mut self) {
        for voice in VoiceId::ALL {
            self.voice_mut(voice).reset();
        }
        for param in &mut self.params {
            param.reset();
        }
    }

    /// Non-positive or non-finite rates are replaced with 44.1kHz.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        if !RenderCtx::is_valid_rate(sample_rate) {
            log::warn!("invalid sample rate {sample_rate}, falling back to default");
        }
        self.ctx = RenderCtx::new(sample_rate);
        log::debug!("drum bank running at {} Hz", self.ctx.sample_rate);
    }

    pub fn sample_rate(&self) -> f32 {
        self.ctx.sample_rate
    }

    /// Arm a voice. A closed-hat strike also chokes the open hat.
    pub fn trigger(&mut self, voice: VoiceId) {
        self.voice_mut(voice).trigger();
        if voice == VoiceId::ClosedHat {
            self.open_hat.choke(CHOKE_FACTOR);
        }
    }

    /// One sample from a single voice. Call once per frame for every voice.
    #[inline]
    pub fn process(&mut self, voice: VoiceId) -> f32 {
        let ctx = &self.ctx;
        match voice {
            VoiceId::Kick => self.kick.next_sample(ctx),
            VoiceId::Snare => self.snare.next_sample(ctx),
            VoiceId::ClosedHat => self.closed_hat.next_sample(ctx),
            VoiceId::OpenHat => self.open_hat.next_sample(ctx),
            VoiceId::MidTom => self.mid_tom.next_sample(ctx),
            VoiceId::HighTom => self.high_tom.next_sample(ctx),
            VoiceId::Rim => self.rim.next_sample(ctx),
            VoiceId::Clap => self.clap.next_sample(ctx),
        }
    }

    /// Advance every voice by one frame.
    #[inline]
    pub fn process_frame(&mut self) -> VoiceFrame {
        let mut frame = VoiceFrame::default();
        for voice in VoiceId::ALL {
            frame[voice] = self.process(voice);
        }
        frame
    }

    /// Render a block, applying queued triggers at their frame offsets.
    ///
    /// Events are taken in queue order; each one fires just before the frame
    /// matching its offset is sampled. Offsets past the end of the block fire
    /// on its last frame. An empty `out` leaves the queue untouched.
    pub fn render_block<R: TriggerReceiver>(&mut self, rx: &mut R, out: &mut [VoiceFrame]) {
        let last = out.len().saturating_sub(1);
        for (frame_index, frame) in out.iter_mut().enumerate() {
            while let Some(event) = rx.peek() {
                if event.offset as usize > frame_index && frame_index < last {
                    break;
                }
                rx.pop();
                self.trigger(event.voice);
            }
            *frame = self.process_frame();
        }
    }

    /// Apply every pending trigger immediately. Returns how many fired.
    pub fn drain_triggers<R: TriggerReceiver>(&mut self, rx: &mut R) -> usize {
        let mut fired = 0;
        while let Some(event) = rx.pop() {
            self.apply(event);
            fired += 1;
        }
        fired
    }

    pub fn apply(&mut self, event: TriggerEvent) {
        self.trigger(event.voice);
    }

    pub fn is_active(&self, voice: VoiceId) -> bool {
        self.voice(voice).is_active()
    }

    pub fn parameter(&self, id: DrumParamId) -> &Parameter {
        &self.params[id.index()]
    }

    pub fn parameter_mut(&mut self, id: DrumParamId) -> &mut Parameter {
        &mut self.params[id.index()]
    }

    pub fn set_parameter(&mut self, id: DrumParamId, value: f32) {
        self.params[id.index()].set_value(value);
    }

    /// Current main volume, for the host's mixer.
    pub fn volume(&self) -> f32 {
        self.parameter(DrumParamId::MainVolume).value()
    }

    pub fn kick(&self) -> &Kick {
        &self.kick
    }

    pub fn snare(&self) -> &Snare {
        &self.snare
    }

    pub fn closed_hat(&self) -> &Hat {
        &self.closed_hat
    }

    pub fn open_hat(&self) -> &Hat {
        &self.open_hat
    }

    pub fn mid_tom(&self) -> &Tom {
        &self.mid_tom
    }

    pub fn high_tom(&self) -> &Tom {
        &self.high_tom
    }

    pub fn rim(&self) -> &Rim {
        &self.rim
    }

    pub fn clap(&self) -> &Clap {
        &self.clap
    }

    fn voice(&self, voice: VoiceId) -> &dyn DrumVoice {
        match voice {
            VoiceId::Kick => &self.kick,
            VoiceId::Snare => &self.snare,
            VoiceId::ClosedHat => &self.closed_hat,
            VoiceId::OpenHat => &self.open_hat,
            VoiceId::MidTom => &self.mid_tom,
            VoiceId::HighTom => &self.high_tom,
            VoiceId::Rim => &self.rim,
            VoiceId::Clap => &self.clap,
        }
    }

    fn voice_mut(&mut self, voice: VoiceId) -> &mut dyn DrumVoice {
        match voice {
            VoiceId::Kick => &mut self.kick,
            VoiceId::Snare => &mut self.snare,
            VoiceId::ClosedHat => &mut self.closed_hat,
            VoiceId::OpenHat => &mut self.open_hat,
            VoiceId::MidTom => &mut self.mid_tom,
            VoiceId::HighTom => &mut self.high_tom,
            VoiceId::Rim => &mut self.rim,
            VoiceId::Clap => &mut self.clap,
        }
    }
}
