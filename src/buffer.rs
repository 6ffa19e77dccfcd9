//! In-memory audio buffers.

use crate::error::ToneError;

/// Converts a duration in milliseconds to a sample count at `sample_rate`.
///
/// Rounds to the nearest sample, half away from zero, so every stage of the
/// pipeline agrees on how long a given number of milliseconds is.
///
/// # Examples
///
/// ```
/// use alarm_tones::ms_to_samples;
///
/// assert_eq!(ms_to_samples(800, 44100), 35280);
/// assert_eq!(ms_to_samples(5, 44100), 221); // 220.5 rounds up
/// ```
pub fn ms_to_samples(ms: u32, sample_rate: u32) -> usize {
    (ms as f64 * sample_rate as f64 / 1000.0).round() as usize
}

/// A block of normalized audio samples at a fixed sample rate.
///
/// Samples are `f64` values in `[-1.0, 1.0]`, interleaved by frame when the
/// buffer has more than one channel. Integer quantization only happens on
/// export.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: u16,
    samples: Vec<f64>,
}

impl AudioBuffer {
    /// Creates a mono buffer from raw samples.
    pub fn mono(sample_rate: u32, samples: Vec<f64>) -> Self {
        Self {
            sample_rate,
            channels: 1,
            samples,
        }
    }

    /// Creates a buffer from interleaved samples.
    ///
    /// Fails if the rate or channel count is zero, or if the sample count is
    /// not a whole number of frames.
    pub fn from_interleaved(
        sample_rate: u32,
        channels: u16,
        samples: Vec<f64>,
    ) -> Result<Self, ToneError> {
        if sample_rate == 0 {
            return Err(ToneError::invalid("sample rate must be greater than zero"));
        }
        if channels == 0 {
            return Err(ToneError::invalid("channel count must be greater than zero"));
        }
        if samples.len() % channels as usize != 0 {
            return Err(ToneError::invalid(format!(
                "{} samples do not divide into {} channels",
                samples.len(),
                channels
            )));
        }
        Ok(Self {
            sample_rate,
            channels,
            samples,
        })
    }

    /// An empty buffer with the same format as `self`.
    pub fn empty_like(&self) -> Self {
        Self {
            sample_rate: self.sample_rate,
            channels: self.channels,
            samples: Vec::new(),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Total number of samples across all channels.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Playback length in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.frames() as f64 * 1000.0 / self.sample_rate as f64
    }

    /// Checks that `other` can be combined with `self`.
    pub fn ensure_compatible(&self, other: &AudioBuffer) -> Result<(), ToneError> {
        if self.sample_rate != other.sample_rate || self.channels != other.channels {
            return Err(ToneError::invalid(format!(
                "cannot combine {} Hz/{} ch with {} Hz/{} ch",
                self.sample_rate, self.channels, other.sample_rate, other.channels
            )));
        }
        Ok(())
    }

    /// Appends `other` without any blending.
    pub fn extend_from(&mut self, other: &AudioBuffer) -> Result<(), ToneError> {
        self.ensure_compatible(other)?;
        self.samples.extend_from_slice(&other.samples);
        Ok(())
    }

    /// Peak absolute sample value.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
    }
}
