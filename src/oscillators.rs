//! Stateless waveform generators.
//!
//! Every oscillator here is a pure function of absolute time and frequency,
//! returning an amplitude in `[-1.0, 1.0]`. Because recipes vary frequency
//! per sample (sweeps, vibrato, LFO bends), evaluation is time-based rather
//! than phase-accumulated: `eval(t, f)` answers "what would an oscillator at
//! frequency `f` output at time `t`", which is exactly what the renderer
//! needs when `f` itself is a function of `t`.

use rand::Rng;
use std::f64::consts::PI;

/// Deterministic waveform shapes available to a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Pure tone: `sin(2π f t)`.
    Sine,
    /// Hard-edged square derived from the sine's sign (no duty-cycle control).
    Square,
    /// Bipolar sawtooth with period `1/f`, range `(-1, 1]`.
    Saw,
}

impl Waveform {
    /// Evaluates the waveform at time `t` seconds and frequency `freq` Hz.
    ///
    /// # Examples
    ///
    /// ```
    /// use shutterfx::Waveform;
    ///
    /// // A sine starts at zero and peaks a quarter period in.
    /// assert!(Waveform::Sine.eval(0.0, 440.0).abs() < 1e-12);
    /// assert!((Waveform::Sine.eval(0.25 / 440.0, 440.0) - 1.0).abs() < 1e-9);
    /// ```
    pub fn eval(self, t: f64, freq: f64) -> f64 {
        match self {
            Waveform::Sine => (2.0 * PI * freq * t).sin(),
            Waveform::Square => {
                if (2.0 * PI * freq * t).sin() >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Saw => {
                let x = t * freq;
                2.0 * (x - (0.5 + x).floor())
            }
        }
    }
}

/// Draws one white-noise sample, uniformly distributed in `[-1.0, 1.0]`.
///
/// The generator is injected rather than pulled from global state so callers
/// (and tests) can seed it for reproducible renders.
pub fn white_noise<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(-1.0..=1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sine_range() {
        for i in 0..44100 {
            let t = i as f64 / 44100.0;
            let s = Waveform::Sine.eval(t, 440.0);
            assert!((-1.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn test_sine_period() {
        // One full period later the sine repeats.
        let f = 100.0;
        let a = Waveform::Sine.eval(0.003, f);
        let b = Waveform::Sine.eval(0.003 + 1.0 / f, f);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_square_is_sign_of_sine() {
        for i in 0..1000 {
            let t = i as f64 / 44100.0;
            let s = Waveform::Square.eval(t, 1000.0);
            assert!(s == 1.0 || s == -1.0);
            if Waveform::Sine.eval(t, 1000.0) >= 0.0 {
                assert_eq!(s, 1.0);
            } else {
                assert_eq!(s, -1.0);
            }
        }
    }

    #[test]
    fn test_saw_range_and_shape() {
        let f = 250.0;
        for i in 0..44100 {
            let t = i as f64 / 44100.0;
            let s = Waveform::Saw.eval(t, f);
            assert!(s > -1.0 - 1e-12 && s <= 1.0 + 1e-12);
        }
        // Rises linearly through zero at t = 0.
        assert!(Waveform::Saw.eval(0.0, f).abs() < 1e-12);
        let quarter = Waveform::Saw.eval(0.25 / f, f);
        assert!((quarter - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_noise_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let s = white_noise(&mut rng);
            assert!((-1.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn test_noise_seeded_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(white_noise(&mut a), white_noise(&mut b));
        }
    }

    #[test]
    fn test_noise_varies() {
        let mut rng = StdRng::seed_from_u64(1);
        let samples: Vec<f64> = (0..100).map(|_| white_noise(&mut rng)).collect();
        let first = samples[0];
        assert!(!samples.iter().all(|&s| s == first));
    }
}
