//! Benchmarks for the whole bank, as an audio callback would drive it.

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_drums::bank::message::TriggerEvent;
use saavy_drums::{DrumBank, VoiceFrame, VoiceId};

use crate::BLOCK_SIZES;

pub fn bench_bank(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/bank");

    for &size in BLOCK_SIZES {
        let mut frames = vec![VoiceFrame::default(); size];

        // === IDLE ===
        // every voice takes the silent early-out
        let mut idle = DrumBank::new(48_000.0);
        let mut empty: VecDeque<TriggerEvent> = VecDeque::new();
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, _| {
            b.iter(|| {
                idle.render_block(black_box(&mut empty), black_box(&mut frames));
            })
        });

        // === FULL KIT ===
        // all eight voices struck at the top of every block
        let mut full = DrumBank::new(48_000.0);
        let mut queue: VecDeque<TriggerEvent> = VecDeque::with_capacity(VoiceId::COUNT);
        group.bench_with_input(BenchmarkId::new("full_kit", size), &size, |b, _| {
            b.iter(|| {
                queue.extend(VoiceId::ALL.map(TriggerEvent::now));
                full.render_block(black_box(&mut queue), black_box(&mut frames));
                black_box(frames.iter().map(VoiceFrame::sum).sum::<f32>());
            })
        });
    }

    group.finish();
}
