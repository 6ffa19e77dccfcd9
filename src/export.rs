//! WAV serialization.
//!
//! Buffers are written as canonical RIFF/WAVE files: a `fmt ` chunk with the
//! PCM format tag, then a `data` chunk of 16-bit signed little-endian
//! samples. Encoding is delegated to `hound`.

use crate::buffer::AudioBuffer;
use crate::constants::{BITS_PER_SAMPLE, PEAK_AMPLITUDE};
use crate::error::ToneError;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

/// Converts `buffer` to `channels` channels.
///
/// - Same channel count: returned as-is
/// - Many to mono: each frame is averaged
/// - Mono to many: each sample is duplicated across the frame
/// - Anything else: averaged to mono, then duplicated
pub fn convert_channels(buffer: AudioBuffer, channels: u16) -> Result<AudioBuffer, ToneError> {
    if channels == 0 {
        return Err(ToneError::invalid("channel count must be greater than zero"));
    }
    let source = buffer.channels();
    if source == channels {
        return Ok(buffer);
    }

    let rate = buffer.sample_rate();
    let mono: Vec<f64> = if source == 1 {
        buffer.into_samples()
    } else {
        buffer
            .samples()
            .chunks_exact(source as usize)
            .map(|frame| frame.iter().sum::<f64>() / source as f64)
            .collect()
    };

    if channels == 1 {
        return Ok(AudioBuffer::mono(rate, mono));
    }
    let widened = mono
        .iter()
        .flat_map(|&s| std::iter::repeat_n(s, channels as usize))
        .collect();
    AudioBuffer::from_interleaved(rate, channels, widened)
}

/// Quantizes a normalized sample to a 16-bit integer.
#[inline]
fn to_i16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * PEAK_AMPLITUDE).round() as i16
}

/// Writes `buffer` to `path` as a 16-bit PCM WAV with `channels` channels.
///
/// An existing file at `path` is overwritten.
///
/// # Errors
///
/// - `InvalidParameter` if `channels` is zero
/// - `Io` if the file cannot be created or written
/// - `Wav` if `hound` rejects the stream
pub fn export_wav(
    buffer: &AudioBuffer,
    path: impl AsRef<Path>,
    channels: u16,
) -> Result<(), ToneError> {
    let path = path.as_ref();
    let converted;
    let buffer = if buffer.channels() == channels {
        buffer
    } else {
        converted = convert_channels(buffer.clone(), channels)?;
        &converted
    };

    let spec = WavSpec {
        channels,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| ToneError::from_wav(path, e))?;
    for &sample in buffer.samples() {
        writer
            .write_sample(to_i16(sample))
            .map_err(|e| ToneError::from_wav(path, e))?;
    }
    writer.finalize().map_err(|e| ToneError::from_wav(path, e))?;

    tracing::debug!(
        path = %path.display(),
        frames = buffer.frames(),
        channels,
        "wrote WAV"
    );
    Ok(())
}

/// Largest positive value of a signed integer sample `bits` wide.
fn int_peak(bits: u16) -> Result<f64, ToneError> {
    match bits.checked_sub(1) {
        Some(shift @ 0..=31) => Ok(((1_i64 << shift) - 1) as f64),
        _ => Err(ToneError::invalid(format!(
            "unsupported integer sample width of {bits} bits"
        ))),
    }
}

/// Reads a WAV file back into a normalized buffer.
///
/// Integer files are scaled by the format's peak value; float files are read
/// as-is. Channels stay interleaved.
pub fn read_wav(path: impl AsRef<Path>) -> Result<AudioBuffer, ToneError> {
    let path = path.as_ref();
    let mut reader = WavReader::open(path).map_err(|e| ToneError::from_wav(path, e))?;
    let spec = reader.spec();

    let samples: Result<Vec<f64>, _> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| v as f64))
            .collect(),
        SampleFormat::Int => {
            let max_value = int_peak(spec.bits_per_sample)?;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_value))
                .collect()
        }
    };
    let samples = samples.map_err(|e| ToneError::from_wav(path, e))?;

    AudioBuffer::from_interleaved(spec.sample_rate, spec.channels, samples)
}
