//! Sound cues, synthesized at startup
//!
//! Two short tones cover the game's audio: a rising two-note cue when food
//! is eaten and a falling cue on game over. Samples are generated once and
//! replayed through a single rodio output stream held for the whole session.
//! When no audio device is available the game runs muted.

use anyhow::{Context, Result};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

const SAMPLE_RATE: u32 = 44_100;

/// Owns the output stream and the pre-rendered cue buffers
pub struct AudioPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    eat_samples: Vec<f32>,
    game_over_samples: Vec<f32>,
}

impl AudioPlayer {
    pub fn new() -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("Failed to open audio output")?;

        Ok(Self {
            _stream: stream,
            handle,
            eat_samples: eat_cue(),
            game_over_samples: game_over_cue(),
        })
    }

    pub fn play_eat(&self) {
        self.play(&self.eat_samples);
    }

    pub fn play_game_over(&self) {
        self.play(&self.game_over_samples);
    }

    // Playback failures are not worth interrupting the game for.
    fn play(&self, samples: &[f32]) {
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples.to_vec()));
            sink.detach();
        }
    }
}

/// Two quick ascending notes
fn eat_cue() -> Vec<f32> {
    let mut samples = tone(660.0, 0.08, 0.2);
    samples.extend(tone(880.0, 0.10, 0.2));
    samples
}

/// A longer slide from mid to low
fn game_over_cue() -> Vec<f32> {
    let duration = 0.6;
    let count = (SAMPLE_RATE as f32 * duration) as usize;
    let mut samples = Vec::with_capacity(count);
    let mut phase = 0.0f32;

    for i in 0..count {
        let t = i as f32 / count as f32;
        let freq = 440.0 * (1.0 - t) + 110.0 * t;
        phase += std::f32::consts::TAU * freq / SAMPLE_RATE as f32;
        let envelope = 0.25 * (1.0 - t);
        samples.push(phase.sin() * envelope);
    }

    samples
}

/// A single sine note with a linear decay envelope
fn tone(freq: f32, duration: f32, amplitude: f32) -> Vec<f32> {
    let count = (SAMPLE_RATE as f32 * duration) as usize;
    (0..count)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let envelope = amplitude * (1.0 - i as f32 / count as f32);
            (std::f32::consts::TAU * freq * t).sin() * envelope
        })
        .collect()
}
