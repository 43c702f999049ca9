//! Recipe value types.
//!
//! A recipe is an immutable description of how to render one sound. Leaf
//! sounds are [`Tone`]s: one or more oscillator layers summed, shaped by an
//! envelope, optionally dusted with noise. Composite sounds reference other
//! catalog entries by id and splice them together with silence gaps instead
//! of re-deriving any waveform math.

use crate::envelope::EnvelopeSpec;
use crate::frequency::FreqFn;
use crate::oscillators::Waveform;

/// One oscillator voice inside a [`Tone`]: a waveform driven by a frequency
/// function, mixed in at a fixed gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub waveform: Waveform,
    pub freq: FreqFn,
    pub gain: f64,
}

impl Layer {
    pub const fn new(waveform: Waveform, freq: FreqFn, gain: f64) -> Self {
        Self {
            waveform,
            freq,
            gain,
        }
    }
}

/// Where noise is mixed relative to the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseStage {
    /// Summed with the oscillator layers, then shaped by the envelope.
    PreEnvelope,
    /// Added after the envelope, so the grain rides on top of the shaped
    /// tone at constant level (hollow-tap plastic texture).
    PostEnvelope,
}

/// White-noise component of a [`Tone`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseMix {
    pub gain: f64,
    pub stage: NoiseStage,
    /// Scale the noise by `1 - t/duration` so the grain fades out over the
    /// clip (woodblock body).
    pub fade: bool,
    /// Gate each noise sample on a fair coin flip, producing a sparse
    /// crackle instead of a continuous hiss (static spark).
    pub crackle: bool,
}

impl NoiseMix {
    pub const fn pre(gain: f64) -> Self {
        Self {
            gain,
            stage: NoiseStage::PreEnvelope,
            fade: false,
            crackle: false,
        }
    }

    pub const fn post(gain: f64) -> Self {
        Self {
            gain,
            stage: NoiseStage::PostEnvelope,
            fade: false,
            crackle: false,
        }
    }

    pub const fn with_fade(mut self) -> Self {
        self.fade = true;
        self
    }

    pub const fn crackling(mut self) -> Self {
        self.crackle = true;
        self
    }
}

/// A leaf recipe: everything the renderer needs to produce one buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Clip length in seconds.
    pub duration: f64,
    /// Output scale applied after shaping, chosen near int16 full scale
    /// (e.g. 20000 for a loud click, 8000 for a soft one).
    pub scale: f64,
    pub envelope: EnvelopeSpec,
    /// Oscillator layers summed before the envelope. May be empty for
    /// noise-only sounds.
    pub layers: &'static [Layer],
    pub noise: Option<NoiseMix>,
    /// Layers added after the envelope, unshaped (the film-winder's beating
    /// partial). Empty for almost every recipe.
    pub post_layers: &'static [Layer],
}

/// One element of a composite sound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    /// Render the click recipe with this id and splice it in.
    Click(u8),
    /// Insert this many seconds of zero samples.
    Silence(f64),
}

/// A catalog entry: either a leaf tone or a sequence of other sounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sound {
    Tone(Tone),
    Composite(&'static [Element]),
}
