//! Benchmarks for the individual drum generators.
//!
//! Each iteration re-strikes the voice before rendering so the measurement
//! covers the active path, not the idle early-out.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_drums::dsp::Noise;
use saavy_drums::voices::{Clap, DrumVoice, Hat, Kick, RenderCtx, Rim, Snare, Tom};

use crate::BLOCK_SIZES;

fn bench_one<V: DrumVoice>(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    mut voice: V,
    ctx: &RenderCtx,
) {
    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
            b.iter(|| {
                voice.trigger();
                voice.render_block(black_box(&mut buffer), black_box(ctx));
            })
        });
    }
}

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("voices");
    let ctx = RenderCtx::new(48_000.0);

    bench_one(&mut group, "kick", Kick::new(), &ctx);
    bench_one(&mut group, "snare", Snare::new(Noise::new(1)), &ctx);
    bench_one(&mut group, "closed_hat", Hat::closed(Noise::new(2)), &ctx);
    bench_one(&mut group, "open_hat", Hat::open(Noise::new(3)), &ctx);
    bench_one(&mut group, "mid_tom", Tom::mid(Noise::new(4)), &ctx);
    bench_one(&mut group, "high_tom", Tom::high(Noise::new(5)), &ctx);
    bench_one(&mut group, "rim", Rim::new(Noise::new(6)), &ctx);
    bench_one(&mut group, "clap", Clap::new(Noise::new(7)), &ctx);

    group.finish();
}
