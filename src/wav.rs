//! WAV container I/O.
//!
//! All output is mono 16-bit integer PCM at 44100 Hz, written with `hound`,
//! which emits the canonical 44-byte RIFF header any decoder understands.
//! The reader exists for round-trip verification and rejects files that do
//! not match the generator's format.

use std::path::Path;

use crate::SAMPLE_RATE;
use crate::error::Error;

fn spec() -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Writes a sample buffer to `path` as a mono 16-bit PCM WAV file.
pub fn write_wav(path: impl AsRef<Path>, samples: &[i16]) -> Result<(), Error> {
    let mut writer = hound::WavWriter::create(path, spec())?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Reads back a file written by [`write_wav`].
///
/// Fails with [`Error::FormatMismatch`] naming the offending header field if
/// the file is not mono 16-bit integer PCM at 44100 Hz.
pub fn read_wav(path: impl AsRef<Path>) -> Result<Vec<i16>, Error> {
    let mut reader = hound::WavReader::open(path)?;
    let got = reader.spec();
    let want = spec();
    if got.channels != want.channels {
        return Err(Error::format_mismatch("channels", got.channels, want.channels));
    }
    if got.bits_per_sample != want.bits_per_sample {
        return Err(Error::format_mismatch(
            "bits_per_sample",
            got.bits_per_sample,
            want.bits_per_sample,
        ));
    }
    if got.sample_rate != want.sample_rate {
        return Err(Error::format_mismatch(
            "sample_rate",
            got.sample_rate,
            want.sample_rate,
        ));
    }
    if got.sample_format != want.sample_format {
        return Err(Error::format_mismatch(
            "sample_format",
            got.sample_format,
            want.sample_format,
        ));
    }
    let samples: Result<Vec<i16>, _> = reader.samples::<i16>().collect();
    Ok(samples?)
}
