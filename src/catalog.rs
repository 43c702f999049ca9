//! The fixed generator catalog: 15 click recipes and 15 shutter recipes.
//!
//! Every sound the system can produce is enumerated here as data. There are
//! no per-id code paths: a [`Tone`] row feeds the generic renderer, and a
//! `Composite` row splices already-defined clicks together with silence.
//! Ids run 1 through 15 in each category; anything else is
//! [`Error::RecipeNotFound`].

use std::fmt;

use crate::envelope::EnvelopeSpec;
use crate::error::Error;
use crate::frequency::FreqFn;
use crate::oscillators::Waveform;
use crate::recipe::{Element, Layer, NoiseMix, Sound, Tone};

/// Sound category, also the filename prefix (`click_3.wav`, `shutter_11.wav`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Click,
    Shutter,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Click => write!(f, "click"),
            Category::Shutter => write!(f, "shutter"),
        }
    }
}

/// Number of recipes per category.
pub const RECIPES_PER_CATEGORY: u8 = 15;

/// Looks up a recipe by category and 1-based id.
pub fn lookup(category: Category, id: u8) -> Result<&'static Sound, Error> {
    let table: &[Sound; 15] = match category {
        Category::Click => &CLICKS,
        Category::Shutter => &SHUTTERS,
    };
    if (1..=RECIPES_PER_CATEGORY).contains(&id) {
        Ok(&table[(id - 1) as usize])
    } else {
        Err(Error::RecipeNotFound { category, id })
    }
}

const fn sine(freq: FreqFn, gain: f64) -> Layer {
    Layer::new(Waveform::Sine, freq, gain)
}

const fn tone(
    duration: f64,
    scale: f64,
    attack: f64,
    decay: f64,
    layers: &'static [Layer],
) -> Tone {
    Tone {
        duration,
        scale,
        envelope: EnvelopeSpec::new(attack, decay),
        layers,
        noise: None,
        post_layers: &[],
    }
}

const fn with_noise(mut t: Tone, noise: NoiseMix) -> Tone {
    t.noise = Some(noise);
    t
}

/// The 15 click recipes, indexed by id - 1.
pub static CLICKS: [Sound; 15] = [
    // 1: pure sine blip
    Sound::Tone(tone(
        0.05,
        20000.0,
        0.001,
        5.0,
        &[sine(FreqFn::Const(2500.0), 1.0)],
    )),
    // 2: retro square
    Sound::Tone(tone(
        0.05,
        15000.0,
        0.001,
        8.0,
        &[Layer::new(Waveform::Square, FreqFn::Const(1000.0), 1.0)],
    )),
    // 3: sawtooth zap, pitch dropping to zero
    Sound::Tone(tone(
        0.08,
        15000.0,
        0.001,
        4.0,
        &[Layer::new(Waveform::Saw, FreqFn::FallToZero(3000.0), 1.0)],
    )),
    // 4: paper snap, pure noise burst
    Sound::Tone(with_noise(
        tone(0.02, 18000.0, 0.001, 2.0, &[]),
        NoiseMix::pre(1.0),
    )),
    // 5: woodblock; grain rides on top of the tone and fades out
    Sound::Tone(with_noise(
        tone(0.06, 20000.0, 0.005, 3.0, &[sine(FreqFn::Const(800.0), 1.0)]),
        NoiseMix::post(0.1).with_fade(),
    )),
    // 6: glass ping, FM with damped vibrato depth
    Sound::Tone(tone(
        0.2,
        22000.0,
        0.001,
        10.0,
        &[sine(
            FreqFn::Vibrato {
                carrier: 2000.0,
                rate: 400.0,
                depth: 500.0,
                damp: 10.0,
            },
            1.0,
        )],
    )),
    // 7: water drop, pitch bending up and back
    Sound::Tone(tone(
        0.08,
        22000.0,
        0.01,
        4.0,
        &[sine(
            FreqFn::HalfSineBend {
                f0: 600.0,
                depth: 1000.0,
            },
            1.0,
        )],
    )),
    // 8: typewriter clank, inharmonic partials plus noise
    Sound::Tone(with_noise(
        tone(
            0.06,
            25000.0,
            0.001,
            10.0,
            &[
                sine(FreqFn::Const(2000.0), 0.5),
                sine(FreqFn::Const(3400.0), 0.3),
            ],
        ),
        NoiseMix::pre(0.2),
    )),
    // 9: mouse switch, very short and sharp
    Sound::Tone(tone(
        0.015,
        25000.0,
        0.0,
        5.0,
        &[sine(FreqFn::Const(5000.0), 1.0)],
    )),
    // 10: bubble pop, quadratic sweep up
    Sound::Tone(tone(
        0.04,
        25000.0,
        0.01,
        2.0,
        &[sine(
            FreqFn::QuadRise {
                f0: 400.0,
                delta: 400.0,
            },
            1.0,
        )],
    )),
    // 11: static spark, coin-gated crackle
    Sound::Tone(with_noise(
        tone(0.03, 25000.0, 0.0, 10.0, &[]),
        NoiseMix::pre(1.0).crackling(),
    )),
    // 12: muted kick, low sine falling to zero
    Sound::Tone(tone(
        0.08,
        25000.0,
        0.005,
        4.0,
        &[sine(FreqFn::FallToZero(150.0), 1.0)],
    )),
    // 13: bird chirp, undamped vibrato
    Sound::Tone(tone(
        0.05,
        15000.0,
        0.01,
        2.0,
        &[sine(
            FreqFn::Vibrato {
                carrier: 2000.0,
                rate: 50.0,
                depth: 200.0,
                damp: 0.0,
            },
            1.0,
        )],
    )),
    // 14: coin ring, two close partials beating at 50 Hz
    Sound::Tone(tone(
        0.15,
        20000.0,
        0.005,
        15.0,
        &[
            sine(FreqFn::Const(4000.0), 0.5),
            sine(FreqFn::Const(4050.0), 0.5),
        ],
    )),
    // 15: hollow plastic tap, constant grain over the tone
    Sound::Tone(with_noise(
        tone(
            0.04,
            18000.0,
            0.001,
            5.0,
            &[sine(FreqFn::Const(1200.0), 1.0)],
        ),
        NoiseMix::post(0.3),
    )),
];

/// The 15 shutter recipes, indexed by id - 1.
pub static SHUTTERS: [Sound; 15] = [
    // 1: classic DSLR, low thump then mechanical clank
    Sound::Composite(&[
        Element::Click(12),
        Element::Silence(0.04),
        Element::Click(8),
    ]),
    // 2: leaf shutter, quiet tick-tick
    Sound::Composite(&[Element::Click(9), Element::Silence(0.01), Element::Click(9)]),
    // 3: electronic beep
    Sound::Tone(tone(
        0.1,
        15000.0,
        0.01,
        2.0,
        &[sine(FreqFn::Const(800.0), 1.0)],
    )),
    // 4: film winder buzz with an unshaped beating partial
    Sound::Tone(Tone {
        duration: 0.15,
        scale: 10000.0,
        envelope: EnvelopeSpec::new(0.05, 2.0),
        layers: &[Layer::new(Waveform::Saw, FreqFn::Const(100.0), 1.0)],
        noise: None,
        post_layers: &[sine(FreqFn::Const(105.0), 0.5)],
    }),
    // 5: Polaroid clunk, woodblock then paper snap
    Sound::Composite(&[Element::Click(5), Element::Silence(0.05), Element::Click(4)]),
    // 6: old SLR spring, slow metallic boing
    Sound::Tone(tone(
        0.2,
        15000.0,
        0.01,
        5.0,
        &[sine(
            FreqFn::Lfo {
                base: 200.0,
                depth: 100.0,
                rate: 50.0,
            },
            1.0,
        )],
    )),
    // 7: motor zip, saw chirping down hard
    Sound::Tone(tone(
        0.08,
        10000.0,
        0.005,
        5.0,
        &[Layer::new(
            Waveform::Saw,
            FreqFn::Ramp {
                f0: 2000.0,
                slope: -10000.0,
            },
            1.0,
        )],
    )),
    // 8: Lomo plastic, double hollow tap
    Sound::Composite(&[
        Element::Click(15),
        Element::Silence(0.03),
        Element::Click(15),
    ]),
    // 9: cinema frame advance, "ch-k" with no gap
    Sound::Composite(&[Element::Click(4), Element::Click(1)]),
    // 10: silenced shutter, soft noise puff
    Sound::Tone(with_noise(
        tone(0.05, 8000.0, 0.02, 2.0, &[]),
        NoiseMix::pre(1.0),
    )),
    // 11: flash pop, rising tone under heavy noise
    Sound::Tone(with_noise(
        tone(
            0.1,
            15000.0,
            0.001,
            5.0,
            &[sine(
                FreqFn::Ramp {
                    f0: 500.0,
                    slope: 5000.0,
                },
                0.5,
            )],
        ),
        NoiseMix::pre(0.5),
    )),
    // 12: focus lock, beep-beep
    Sound::Composite(&[Element::Click(1), Element::Silence(0.05), Element::Click(1)]),
    // 13: Holga spring, low square plus noise
    Sound::Tone(with_noise(
        tone(
            0.12,
            15000.0,
            0.01,
            3.0,
            &[Layer::new(Waveform::Square, FreqFn::Const(150.0), 0.5)],
        ),
        NoiseMix::pre(0.5),
    )),
    // 14: sci-fi sweep, carrier swung by a fast LFO
    Sound::Tone(tone(
        0.1,
        15000.0,
        0.01,
        5.0,
        &[sine(
            FreqFn::Lfo {
                base: 0.0,
                depth: 2000.0,
                rate: 100.0,
            },
            1.0,
        )],
    )),
    // 15: hydraulic hiss, long soft noise
    Sound::Tone(with_noise(
        tone(0.15, 10000.0, 0.05, 2.0, &[]),
        NoiseMix::pre(1.0),
    )),
];
