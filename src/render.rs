//! Sample renderer: turns a recipe into a buffer of 16-bit samples.
//!
//! Rendering is a pure function of the recipe apart from the injected RNG,
//! which feeds the noise oscillator. Composite recipes are resolved by
//! rendering each referenced click independently and splicing the buffers
//! together with zero-filled gaps.

use rand::Rng;

use crate::catalog::{self, Category};
use crate::error::Error;
use crate::oscillators::white_noise;
use crate::recipe::{Element, NoiseMix, NoiseStage, Sound, Tone};
use crate::sequence::{Part, sequence};
use crate::{SAMPLE_RATE, sample_count};

/// Renders a leaf tone recipe into exactly `round(duration * 44100)` samples.
///
/// Every sample is clamped to the i16 range before conversion; a hot mix
/// (layers plus noise can sum past 1.0) saturates instead of wrapping.
pub fn render_tone<R: Rng>(tone: &Tone, rng: &mut R) -> Result<Vec<i16>, Error> {
    if tone.envelope.attack >= tone.duration {
        return Err(Error::render(format!(
            "envelope attack {}s must be shorter than duration {}s",
            tone.envelope.attack, tone.duration
        )));
    }
    if tone.envelope.decay < 0.0 {
        return Err(Error::render(format!(
            "decay exponent {} must be non-negative",
            tone.envelope.decay
        )));
    }

    let n = sample_count(tone.duration);
    let mut buf = Vec::with_capacity(n);

    for i in 0..n {
        let t = i as f64 / SAMPLE_RATE as f64;

        let mut val = 0.0;
        for layer in tone.layers {
            let freq = layer.freq.eval(t, tone.duration);
            val += layer.gain * layer.waveform.eval(t, freq);
        }

        if let Some(noise) = tone.noise {
            if noise.stage == NoiseStage::PreEnvelope {
                val += noise_sample(&noise, t, tone.duration, rng);
            }
        }

        val *= tone.envelope.amplitude(t, tone.duration);

        if let Some(noise) = tone.noise {
            if noise.stage == NoiseStage::PostEnvelope {
                val += noise_sample(&noise, t, tone.duration, rng);
            }
        }
        for layer in tone.post_layers {
            let freq = layer.freq.eval(t, tone.duration);
            val += layer.gain * layer.waveform.eval(t, freq);
        }

        buf.push((val * tone.scale).clamp(i16::MIN as f64, i16::MAX as f64) as i16);
    }

    Ok(buf)
}

fn noise_sample<R: Rng>(noise: &NoiseMix, t: f64, duration: f64, rng: &mut R) -> f64 {
    if noise.crackle && !rng.gen_bool(0.5) {
        return 0.0;
    }
    let mut s = white_noise(rng) * noise.gain;
    if noise.fade {
        s *= 1.0 - t / duration;
    }
    s
}

/// Renders any catalog entry, resolving composite recipes recursively.
pub fn render<R: Rng>(sound: &Sound, rng: &mut R) -> Result<Vec<i16>, Error> {
    match sound {
        Sound::Tone(tone) => render_tone(tone, rng),
        Sound::Composite(elements) => {
            let mut parts = Vec::with_capacity(elements.len());
            for element in *elements {
                match *element {
                    Element::Click(id) => {
                        let clip = catalog::lookup(Category::Click, id)?;
                        parts.push(Part::Samples(render(clip, rng)?));
                    }
                    Element::Silence(secs) => parts.push(Part::Silence(secs)),
                }
            }
            Ok(sequence(parts))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::EnvelopeSpec;
    use crate::frequency::FreqFn;
    use crate::oscillators::Waveform;
    use crate::recipe::{Layer, NoiseMix};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BLIP: Tone = Tone {
        duration: 0.05,
        scale: 20000.0,
        envelope: EnvelopeSpec::new(0.001, 5.0),
        layers: &[Layer::new(Waveform::Sine, FreqFn::Const(2500.0), 1.0)],
        noise: None,
        post_layers: &[],
    };

    #[test]
    fn test_buffer_length_exact() {
        let mut rng = StdRng::seed_from_u64(0);
        let buf = render_tone(&BLIP, &mut rng).unwrap();
        assert_eq!(buf.len(), 2205);
    }

    #[test]
    fn test_starts_near_zero_and_peaks_below_scale() {
        let mut rng = StdRng::seed_from_u64(0);
        let buf = render_tone(&BLIP, &mut rng).unwrap();
        assert_eq!(buf[0], 0);
        let peak = buf.iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert!(peak <= 20000);
        assert!(peak > 10000, "blip should actually reach audible level");
    }

    #[test]
    fn test_attack_equal_to_duration_rejected() {
        let bad = Tone {
            envelope: EnvelopeSpec::new(0.05, 5.0),
            ..BLIP
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            render_tone(&bad, &mut rng),
            Err(Error::RenderFailure { .. })
        ));
    }

    const HOT_LAYERS: [Layer; 2] = [
        Layer::new(Waveform::Square, FreqFn::Const(100.0), 1.0),
        Layer::new(Waveform::Square, FreqFn::Const(100.0), 1.0),
    ];

    #[test]
    fn test_hot_mix_saturates_instead_of_wrapping() {
        // Two full-gain layers at 30000 scale can sum to 60000; the output
        // must pin at the rails, never wrap negative.
        let hot = Tone {
            duration: 0.01,
            scale: 30000.0,
            envelope: EnvelopeSpec::new(0.0, 0.0),
            layers: &HOT_LAYERS,
            noise: None,
            post_layers: &[],
        };
        let mut rng = StdRng::seed_from_u64(0);
        let buf = render_tone(&hot, &mut rng).unwrap();
        assert!(buf.iter().any(|&s| s == i16::MAX));
        assert!(buf.iter().all(|&s| s == i16::MAX || s == i16::MIN));
    }

    #[test]
    fn test_noise_only_render_is_bounded_and_nonsilent() {
        let snap = Tone {
            duration: 0.02,
            scale: 18000.0,
            envelope: EnvelopeSpec::new(0.001, 2.0),
            layers: &[],
            noise: Some(NoiseMix::pre(1.0)),
            post_layers: &[],
        };
        let mut rng = StdRng::seed_from_u64(99);
        let buf = render_tone(&snap, &mut rng).unwrap();
        assert_eq!(buf.len(), sample_count(0.02));
        assert!(buf.iter().all(|&s| s.unsigned_abs() <= 18000));
        assert!(buf.iter().any(|&s| s != 0));
    }

    #[test]
    fn test_seeded_render_is_reproducible() {
        let snap = Tone {
            duration: 0.02,
            scale: 18000.0,
            envelope: EnvelopeSpec::new(0.001, 2.0),
            layers: &[],
            noise: Some(NoiseMix::pre(1.0)),
            post_layers: &[],
        };
        let a = render_tone(&snap, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = render_tone(&snap, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_crackle_noise_is_sparse() {
        let spark = Tone {
            duration: 0.03,
            scale: 25000.0,
            envelope: EnvelopeSpec::new(0.0, 10.0),
            layers: &[],
            noise: Some(NoiseMix::pre(1.0).crackling()),
            post_layers: &[],
        };
        let mut rng = StdRng::seed_from_u64(3);
        let buf = render_tone(&spark, &mut rng).unwrap();
        let zeros = buf.iter().filter(|&&s| s == 0).count();
        // Roughly half the samples are gated off; allow wide slack since the
        // tail of the envelope also rounds small values to zero.
        assert!(zeros > buf.len() / 3);
        assert!(buf.iter().any(|&s| s != 0));
    }

    const TAP_LAYERS: [Layer; 1] = [Layer::new(Waveform::Sine, FreqFn::Const(800.0), 1.0)];

    #[test]
    fn test_faded_noise_quiets_toward_clip_end() {
        let tap = Tone {
            duration: 0.06,
            scale: 20000.0,
            envelope: EnvelopeSpec::new(0.005, 3.0),
            layers: &TAP_LAYERS,
            noise: Some(NoiseMix::post(0.1).with_fade()),
            post_layers: &[],
        };
        let mut rng = StdRng::seed_from_u64(11);
        let buf = render_tone(&tap, &mut rng).unwrap();
        // Last sample: envelope is 0 and the noise fade is 1 - t/dur ~ 0,
        // so the clip must end essentially silent.
        let tail_peak = buf[buf.len() - 10..]
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap();
        assert!(tail_peak < 500);
    }
}
