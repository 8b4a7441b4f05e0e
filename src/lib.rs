//! Realtime-safe analog-style drum voices.
//!
//! The crate is layered the same way from the bottom up:
//!
//! - [`dsp`]: phase accumulators, geometric envelopes and the noise-shaping
//!   filters. Allocation-free building blocks.
//! - [`voices`]: one generator per drum sound, each producing a single sample
//!   per call from its own oscillator, envelope and filter state.
//! - [`bank`]: the [`DrumBank`] that owns one of every voice along with the
//!   volume [`Parameter`], plus the lock-free trigger hand-off.
//!
//! ```
//! use saavy_drums::{DrumBank, VoiceId};
//!
//! let mut bank = DrumBank::new(48_000.0);
//! bank.trigger(VoiceId::Kick);
//! let first = bank.process(VoiceId::Kick);
//! assert!(first != 0.0);
//! ```

pub mod bank; // Voice bank and trigger hand-off
pub mod dsp;
pub mod param;
pub mod voices; // Per-sound generators

pub use bank::{DrumBank, VoiceFrame, VoiceId};
pub use param::{DrumParamId, Parameter};

/// Largest block the bank is expected to render in one audio callback.
pub const MAX_BLOCK_SIZE: usize = 2048;
