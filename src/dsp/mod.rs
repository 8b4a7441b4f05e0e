//! Low-level DSP primitives shared by the drum voices.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside voice structs. Each one owns the invariant for a
//! single piece of state (phase wraps into [0, 1), envelopes only ever shrink),
//! so the voices built on top cannot drift out of range on their own.

/// Geometric per-sample decay with a deactivation floor.
pub mod decay;
/// One-pole filters used to colour white noise.
pub mod filter;
/// Uniform white noise source.
pub mod noise;
/// Wrapped phase accumulator and sine lookup.
pub mod phase;

pub use decay::Decay;
pub use filter::{OnePoleHighpass, ResonantBandpass};
pub use noise::Noise;
pub use phase::Phase;
