//! drumbox - play a drum pattern through the default output device
//!
//! Run with: cargo run --bin drumbox -- --bpm 124 --bars 8

mod pattern;

use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::{bail, eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use saavy_drums::{
    bank::message::{trigger_channel, TriggerSender, DEFAULT_TRIGGER_QUEUE_SIZE},
    DrumBank, DrumParamId, VoiceFrame, MAX_BLOCK_SIZE,
};

use pattern::{Pattern, STEPS};

#[derive(Debug, Parser)]
#[command(about = "Play the drum bank through the default audio device")]
struct Args {
    /// Tempo in beats per minute
    #[arg(long, default_value_t = 120.0)]
    bpm: f64,

    /// Number of bars to play before exiting
    #[arg(long, default_value_t = 4)]
    bars: u32,

    /// Main volume, 0.0 to 1.0
    #[arg(long, default_value_t = 0.8)]
    volume: f32,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();
    if !(args.bpm.is_finite() && args.bpm > 0.0) {
        bail!("bpm must be positive, got {}", args.bpm);
    }

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let supported = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;
    if supported.sample_format() != cpal::SampleFormat::F32 {
        bail!("unsupported sample format {:?}", supported.sample_format());
    }

    let config: cpal::StreamConfig = supported.into();
    let sample_rate = config.sample_rate.0 as f32;
    let channels = config.channels as usize;
    if channels == 0 {
        bail!("output device reports no channels");
    }
    log::info!("output: {sample_rate} Hz, {channels} channels, {} BPM", args.bpm);

    let (mut tx, mut rx) = trigger_channel(DEFAULT_TRIGGER_QUEUE_SIZE);
    let mut bank = DrumBank::new(sample_rate);
    bank.set_parameter(DrumParamId::MainVolume, args.volume);
    let mut frames = vec![VoiceFrame::default(); MAX_BLOCK_SIZE];

    let stream = device.build_output_stream(
        &config,
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            // mixing happens here, the bank only renders per-voice frames
            for chunk in data.chunks_mut(MAX_BLOCK_SIZE * channels) {
                let block = &mut frames[..chunk.len() / channels];
                bank.render_block(&mut rx, block);

                let volume = bank.volume();
                for (out, frame) in chunk.chunks_mut(channels).zip(block.iter()) {
                    out.fill((frame.sum() * volume).clamp(-1.0, 1.0));
                }
            }
        },
        |err| log::error!("audio stream error: {err}"),
        None,
    )?;
    stream.play()?;

    run_sequencer(&mut tx, &Pattern::default(), args.bpm, args.bars);

    // let the last tails ring out
    thread::sleep(Duration::from_millis(500));
    Ok(())
}

/// Step through the pattern on this thread, sleeping between sixteenths.
fn run_sequencer(tx: &mut TriggerSender, pattern: &Pattern, bpm: f64, bars: u32) {
    let step_length = Duration::from_secs_f64(60.0 / bpm / 4.0);
    let start = Instant::now();

    for tick in 0..bars as usize * STEPS {
        let deadline = start + step_length * tick as u32;
        if let Some(wait) = deadline.checked_duration_since(Instant::now()) {
            thread::sleep(wait);
        }

        for voice in pattern.hits(tick % STEPS) {
            // a full queue means the audio side stalled; skip rather than block
            if tx.trigger(voice).is_err() {
                break;
            }
        }

        if tick % STEPS == 0 {
            log::debug!("bar {}", tick / STEPS + 1);
        }
    }
}
