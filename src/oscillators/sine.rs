//! Sine wave oscillator implementation.

use crate::signals::{AudioSignal, Signal};
use std::f64::consts::TAU;

/// A sine wave oscillator for tone synthesis.
///
/// Sample `n` is `sin(2π · frequency · n / sample_rate)`. The value is computed
/// from the sample position rather than an accumulated phase increment, so a
/// long tone lands on exactly the same samples as a short one and repeated
/// renders are bit-identical.
#[derive(Debug, Clone)]
pub struct SineOscillator {
    frequency: f64,
    sample_rate: u32,
    /// Index of the next sample to generate
    position: u64,
}

impl SineOscillator {
    /// Creates a new sine oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sine wave in Hz
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use alarm_tones::{Signal, SineOscillator};
    ///
    /// let mut osc = SineOscillator::new(2000.0, 44100);
    /// assert_eq!(osc.next_sample(), 0.0);
    /// ```
    pub fn new(frequency: f64, sample_rate: u32) -> Self {
        Self {
            frequency,
            sample_rate,
            position: 0,
        }
    }
}

impl Signal for SineOscillator {
    fn next_sample(&mut self) -> f64 {
        let t = self.position as f64 / self.sample_rate as f64;
        self.position += 1;
        (TAU * self.frequency * t).sin()
    }
}

impl AudioSignal for SineOscillator {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}
