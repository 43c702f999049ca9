//! Buffer sequencing: concatenation with silence gaps.
//!
//! Composite shutter sounds are click-silence-click structures with no
//! overlap or crossfade, so sequencing is plain concatenation.

use crate::sample_count;

/// One part of a sequence: either an already-rendered buffer or a gap.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Samples(Vec<i16>),
    /// Silence of this many seconds, expanded to zero samples.
    Silence(f64),
}

/// Concatenates all parts in order into one buffer.
///
/// # Examples
///
/// ```
/// use shutterfx::{Part, sequence};
///
/// let out = sequence(vec![
///     Part::Samples(vec![1, 2]),
///     Part::Silence(2.0 / 44100.0),
///     Part::Samples(vec![3]),
/// ]);
/// assert_eq!(out, vec![1, 2, 0, 0, 3]);
/// ```
pub fn sequence(parts: impl IntoIterator<Item = Part>) -> Vec<i16> {
    let mut out = Vec::new();
    for part in parts {
        match part {
            Part::Samples(buf) => out.extend_from_slice(&buf),
            Part::Silence(secs) => out.extend(std::iter::repeat(0).take(sample_count(secs))),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_arithmetic() {
        let a = vec![100i16; 50];
        let b = vec![-100i16; 30];
        let out = sequence(vec![
            Part::Samples(a.clone()),
            Part::Silence(0.04),
            Part::Samples(b.clone()),
        ]);
        assert_eq!(out.len(), 50 + sample_count(0.04) + 30);
    }

    #[test]
    fn test_silence_window_is_all_zero() {
        let out = sequence(vec![
            Part::Samples(vec![7; 10]),
            Part::Silence(0.001),
            Part::Samples(vec![9; 10]),
        ]);
        let gap = sample_count(0.001);
        assert!(out[10..10 + gap].iter().all(|&s| s == 0));
        assert_eq!(out[10 + gap], 9);
    }

    #[test]
    fn test_order_preserved() {
        let out = sequence(vec![Part::Samples(vec![1, 2]), Part::Samples(vec![3, 4])]);
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(sequence(Vec::new()).is_empty());
    }
}
