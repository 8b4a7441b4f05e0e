//! Trigger hand-off from the control side to the audio callback.
//!
//! The sequencer and the audio callback run on different threads. Rather
//! than letting the sequencer poke voice state directly, strikes travel as
//! [`TriggerEvent`]s through a fixed-size single-producer/single-consumer
//! ring buffer (`rtrb`). The bank drains it at the top of each block, so
//! the audio side never has to wait on the control thread.
//!
//! ```text
//!   sequencer thread                      audio thread
//!   ┌──────────────┐  TriggerEvent  ┌────────────────────┐
//!   │TriggerSender │ ─────────────→ │ DrumBank::         │
//!   │  .trigger()  │   SPSC ring    │   render_block(rx) │
//!   └──────────────┘                └────────────────────┘
//! ```

use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bank::VoiceId;

/// Ring capacity used by the demo and a sensible default for sequencers.
pub const DEFAULT_TRIGGER_QUEUE_SIZE: usize = 256;

/// A strike for one voice, landing `offset` frames into the next block.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TriggerEvent {
    pub voice: VoiceId,
    pub offset: u32,
}

impl TriggerEvent {
    /// Fire on the first frame of the next block.
    pub fn now(voice: VoiceId) -> Self {
        Self { voice, offset: 0 }
    }

    pub fn at(voice: VoiceId, offset: u32) -> Self {
        Self { voice, offset }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TriggerError {
    /// The audio side hasn't drained the queue; the event is handed back.
    #[error("trigger queue is full, dropped {0:?}")]
    QueueFull(TriggerEvent),
}

/// The audio-side end of a trigger queue.
pub trait TriggerReceiver {
    /// The next event without removing it.
    fn peek(&self) -> Option<TriggerEvent>;

    fn pop(&mut self) -> Option<TriggerEvent>;
}

#[cfg(feature = "rtrb")]
impl TriggerReceiver for Consumer<TriggerEvent> {
    fn peek(&self) -> Option<TriggerEvent> {
        Consumer::peek(self).ok().copied()
    }

    fn pop(&mut self) -> Option<TriggerEvent> {
        Consumer::pop(self).ok()
    }
}

/// Command buffer for hosts that trigger from the audio thread itself.
impl TriggerReceiver for VecDeque<TriggerEvent> {
    fn peek(&self) -> Option<TriggerEvent> {
        self.front().copied()
    }

    fn pop(&mut self) -> Option<TriggerEvent> {
        self.pop_front()
    }
}

/// The control-side end of a trigger queue.
#[cfg(feature = "rtrb")]
pub struct TriggerSender {
    tx: Producer<TriggerEvent>,
}

#[cfg(feature = "rtrb")]
impl TriggerSender {
    pub fn trigger(&mut self, voice: VoiceId) -> Result<(), TriggerError> {
        self.send(TriggerEvent::now(voice))
    }

    pub fn trigger_at(&mut self, voice: VoiceId, offset: u32) -> Result<(), TriggerError> {
        self.send(TriggerEvent::at(voice, offset))
    }

    pub fn send(&mut self, event: TriggerEvent) -> Result<(), TriggerError> {
        self.tx.push(event).map_err(|_| {
            log::warn!("trigger queue full, dropping {} strike", event.voice.label());
            TriggerError::QueueFull(event)
        })
    }

    /// Free slots left in the ring.
    pub fn slots(&self) -> usize {
        self.tx.slots()
    }
}

/// Create a trigger queue holding up to `capacity` pending strikes.
#[cfg(feature = "rtrb")]
pub fn trigger_channel(capacity: usize) -> (TriggerSender, Consumer<TriggerEvent>) {
    let (tx, rx) = RingBuffer::<TriggerEvent>::new(capacity.max(1));
    (TriggerSender { tx }, rx)
}

#[cfg(all(test, feature = "rtrb"))]
mod tests {
    use super::*;

    #[test]
    fn events_arrive_in_order() {
        let (mut tx, mut rx) = trigger_channel(8);
        tx.trigger(VoiceId::Kick).unwrap();
        tx.trigger_at(VoiceId::Snare, 12).unwrap();

        assert_eq!(TriggerReceiver::peek(&rx), Some(TriggerEvent::now(VoiceId::Kick)));
        assert_eq!(TriggerReceiver::pop(&mut rx), Some(TriggerEvent::now(VoiceId::Kick)));
        assert_eq!(
            TriggerReceiver::pop(&mut rx),
            Some(TriggerEvent::at(VoiceId::Snare, 12))
        );
        assert_eq!(TriggerReceiver::pop(&mut rx), None);
    }

    #[test]
    fn full_queue_hands_event_back() {
        let (mut tx, _rx) = trigger_channel(2);
        tx.trigger(VoiceId::Kick).unwrap();
        tx.trigger(VoiceId::Kick).unwrap();
        assert_eq!(tx.slots(), 0);

        let err = tx.trigger(VoiceId::Clap).unwrap_err();
        assert_eq!(err, TriggerError::QueueFull(TriggerEvent::now(VoiceId::Clap)));
    }

    #[test]
    fn sender_works_across_threads() {
        let (mut tx, mut rx) = trigger_channel(64);
        let handle = std::thread::spawn(move || {
            for voice in VoiceId::ALL {
                tx.trigger(voice).unwrap();
            }
        });
        handle.join().unwrap();

        let drained: Vec<VoiceId> = std::iter::from_fn(|| TriggerReceiver::pop(&mut rx))
            .map(|event| event.voice)
            .collect();
        assert_eq!(drained, VoiceId::ALL.to_vec());
    }
}
