//! Shutterfx - a procedural sound-effect synthesizer.
//!
//! This library renders a fixed catalog of short interface sounds, mechanical
//! "clicks" and composite camera "shutter" sounds, entirely from mathematical
//! signal generators. There are no recorded samples: every clip is built from
//! an oscillator, a time-varying frequency function, and an attack/decay
//! envelope, then written out as a mono 16-bit WAV file.

pub mod catalog;
pub mod envelope;
pub mod error;
pub mod frequency;
pub mod oscillators;
pub mod recipe;
pub mod render;
pub mod sequence;
pub mod wav;

// Re-export commonly used types at the crate root
pub use catalog::{Category, lookup};
pub use envelope::EnvelopeSpec;
pub use error::Error;
pub use frequency::FreqFn;
pub use oscillators::{Waveform, white_noise};
pub use recipe::{Element, Layer, NoiseMix, NoiseStage, Sound, Tone};
pub use render::{render, render_tone};
pub use sequence::{Part, sequence};
pub use wav::{read_wav, write_wav};

/// Sample rate for every generated clip, in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Number of samples covering `seconds` of audio at [`SAMPLE_RATE`].
pub fn sample_count(seconds: f64) -> usize {
    (seconds * SAMPLE_RATE as f64).round() as usize
}
