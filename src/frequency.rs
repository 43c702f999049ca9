//! Time-varying frequency functions.
//!
//! A recipe picks one of these to drive its primary oscillator. The renderer
//! evaluates `freq(t)` once per sample, which is how a single sine primitive
//! turns into a zap, a water drop, a glass ping or a chirp without any new
//! oscillator code.

use std::f64::consts::PI;

/// Frequency of the primary oscillator as a function of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FreqFn {
    /// Fixed frequency in Hz.
    Const(f64),
    /// Linear sweep from `f0` down to 0 over the clip: `f0 * (1 - t/dur)`.
    FallToZero(f64),
    /// Quadratic rise: `f0 + delta * (t/dur)^2`.
    QuadRise { f0: f64, delta: f64 },
    /// Half-sine bend peaking mid-clip: `f0 + depth * sin(π t/dur)`.
    HalfSineBend { f0: f64, depth: f64 },
    /// Linear sweep in absolute terms: `f0 + slope * t`, slope in Hz/s.
    /// A negative slope may cross zero; the oscillators are well-defined
    /// for negative frequencies (the waveform mirrors).
    Ramp { f0: f64, slope: f64 },
    /// Sinusoidal vibrato with exponentially damped depth:
    /// `carrier + sin(2π rate t) * depth * e^(-damp t)`.
    Vibrato {
        carrier: f64,
        rate: f64,
        depth: f64,
        damp: f64,
    },
    /// Slow sinusoidal bend in absolute time: `base + depth * sin(rate * t)`,
    /// `rate` in radians per second.
    Lfo { base: f64, depth: f64, rate: f64 },
}

impl FreqFn {
    /// Frequency in Hz at time `t` within a clip of length `duration`.
    pub fn eval(&self, t: f64, duration: f64) -> f64 {
        match *self {
            FreqFn::Const(f) => f,
            FreqFn::FallToZero(f0) => f0 * (1.0 - t / duration),
            FreqFn::QuadRise { f0, delta } => {
                let x = t / duration;
                f0 + delta * x * x
            }
            FreqFn::HalfSineBend { f0, depth } => f0 + depth * (PI * t / duration).sin(),
            FreqFn::Ramp { f0, slope } => f0 + slope * t,
            FreqFn::Vibrato {
                carrier,
                rate,
                depth,
                damp,
            } => carrier + (2.0 * PI * rate * t).sin() * depth * (-damp * t).exp(),
            FreqFn::Lfo { base, depth, rate } => base + depth * (rate * t).sin(),
        }
    }
}
