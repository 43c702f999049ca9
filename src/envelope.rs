//! Attack/decay amplitude envelope.
//!
//! A single two-phase model covers the whole catalog: a linear ramp from 0 to
//! full level over `attack` seconds, then a power-curve decay back to 0 over
//! the remainder of the clip. A high decay exponent with a short attack gives
//! a percussive click; the same exponent over a long duration rings like a
//! struck bell; a low exponent swells and fades softly.

/// Parameters for the attack/decay envelope, stored per recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeSpec {
    /// Length of the linear 0 → 1 attack ramp, in seconds. May be zero, in
    /// which case the clip opens at full level. Must be shorter than the
    /// clip duration.
    pub attack: f64,
    /// Decay curve exponent: amplitude falls as `(1 - progress) ^ decay`.
    /// Must be non-negative; higher is snappier.
    pub decay: f64,
}

impl EnvelopeSpec {
    pub const fn new(attack: f64, decay: f64) -> Self {
        Self { attack, decay }
    }

    /// Amplitude multiplier at time `t` within a clip of length `duration`.
    ///
    /// Returns a value in `[0, 1]`. Callers must ensure `attack < duration`;
    /// the renderer rejects recipes that violate this before sampling.
    ///
    /// # Examples
    ///
    /// ```
    /// use shutterfx::EnvelopeSpec;
    ///
    /// let env = EnvelopeSpec::new(0.01, 2.0);
    /// assert_eq!(env.amplitude(0.005, 0.1), 0.5); // halfway up the ramp
    /// assert_eq!(env.amplitude(0.1, 0.1), 0.0);   // fully decayed
    /// ```
    pub fn amplitude(&self, t: f64, duration: f64) -> f64 {
        if t < self.attack {
            t / self.attack
        } else {
            let progress = ((t - self.attack) / (duration - self.attack)).clamp(0.0, 1.0);
            (1.0 - progress).powf(self.decay)
        }
    }
}
