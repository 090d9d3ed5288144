//! Audio output: background track plus per-event effects.
//!
//! Effects are synthesized on the fly (short frequency sweeps with a fade-out
//! envelope) and handed to rodio as mono sample buffers, so no asset files
//! ship with the game.  Playback is fire-and-forget: each cue gets its own
//! detached sink.

use log::warn;
use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink, Source};

use crate::entities::SoundCue;

const SAMPLE_RATE: u32 = 44_100;
/// Background track volume, quiet enough to stay out of the way.
const MUSIC_VOLUME: f32 = 0.04;

pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    /// Keeps the looped background track alive for the process lifetime.
    music: Option<Sink>,
}

impl Audio {
    /// Acquire the default output device.  Failure here is fatal to the
    /// caller; the simulation never sees audio errors.
    pub fn new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            music: None,
        })
    }

    /// Start the looped background track.  Called once at process start.
    pub fn start_music(&mut self) {
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.set_volume(MUSIC_VOLUME);
                let track = SamplesBuffer::new(1, SAMPLE_RATE, music_samples());
                sink.append(track.repeat_infinite());
                self.music = Some(sink);
            }
            Err(e) => warn!("background music unavailable: {e}"),
        }
    }

    /// Trigger a short effect; returns immediately.
    pub fn play(&self, cue: SoundCue) {
        let samples = match cue {
            SoundCue::Jump => sweep(sine, 350.0, 750.0, 0.12, 0.20),
            SoundCue::Shoot => sweep(saw, 1400.0, 250.0, 0.09, 0.15),
            SoundCue::Collision => sweep(saw, 380.0, 70.0, 0.45, 0.25),
        };
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
                sink.detach();
            }
            Err(e) => warn!("sound cue dropped: {e}"),
        }
    }
}

// ── Synthesis ─────────────────────────────────────────────────────────────────

fn sine(phase: f32) -> f32 {
    (phase * std::f32::consts::TAU).sin()
}

fn saw(phase: f32) -> f32 {
    2.0 * phase - 1.0
}

/// Render a linear frequency sweep from `f0` to `f1` Hz with a linear
/// fade-out, using phase accumulation so the pitch glides without clicks.
fn sweep(wave: fn(f32) -> f32, f0: f32, f1: f32, duration: f32, gain: f32) -> Vec<f32> {
    let count = (SAMPLE_RATE as f32 * duration) as usize;
    let mut samples = Vec::with_capacity(count);
    let mut phase = 0.0f32;
    for i in 0..count {
        let t = i as f32 / count as f32;
        let freq = f0 + (f1 - f0) * t;
        phase = (phase + freq / SAMPLE_RATE as f32).fract();
        samples.push(wave(phase) * gain * (1.0 - t));
    }
    samples
}

/// An eight-note arpeggio that loops as the background track.
fn music_samples() -> Vec<f32> {
    const NOTES: [f32; 8] = [261.63, 329.63, 392.00, 523.25, 392.00, 329.63, 293.66, 329.63];
    let note_len = 0.28f32;
    let note_count = (SAMPLE_RATE as f32 * note_len) as usize;

    let mut samples = Vec::with_capacity(NOTES.len() * note_count);
    for freq in NOTES {
        let mut phase = 0.0f32;
        for i in 0..note_count {
            let t = i as f32 / note_count as f32;
            phase = (phase + freq / SAMPLE_RATE as f32).fract();
            // quick attack, linear decay: keeps note boundaries click-free
            let env = 0.5 * (1.0 - t) * (t * 40.0).min(1.0);
            samples.push(sine(phase) * env);
        }
    }
    samples
}
