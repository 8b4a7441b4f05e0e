//! The drum generators.
//!
//! Each voice owns its oscillator phases, envelopes, filter memory and noise
//! stream, and produces exactly one sample per [`DrumVoice::next_sample`]
//! call. Study them to see how a handful of decaying sines and coloured noise
//! add up to an analog drum machine.
//!
//! # Example
//!
//! ```
//! use saavy_drums::dsp::Noise;
//! use saavy_drums::voices::{DrumVoice, Kick, RenderCtx, Snare};
//!
//! let ctx = RenderCtx::new(48_000.0);
//! let mut kick = Kick::new();
//! let mut snare = Snare::new(Noise::new(1));
//!
//! kick.trigger();
//! snare.trigger();
//! let sample = kick.next_sample(&ctx) + snare.next_sample(&ctx);
//! assert!(sample.is_finite());
//! ```

pub mod clap;
pub mod hihat;
pub mod kick;
pub mod openhat;
pub mod rim;
pub mod snare;
pub mod tom;
mod voice;

pub use clap::Clap;
pub use hihat::{Hat, HatTuning};
pub use kick::Kick;
pub use rim::Rim;
pub use snare::Snare;
pub use tom::{Tom, TomTuning};
pub use voice::{DrumVoice, RenderCtx, DEFAULT_SAMPLE_RATE};
