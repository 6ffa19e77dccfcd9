//! Signal processing traits.
//!
//! This module provides the abstractions every sample generator builds on:
//! - `Signal` for anything that produces samples one at a time
//! - `AudioSignal` for signals that know their sample rate and can be
//!   rendered into an [`AudioBuffer`]

use crate::buffer::AudioBuffer;

/// Common interface for all signal sources.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// A mono signal running at a known sample rate.
pub trait AudioSignal: Signal {
    /// Sample rate in Hz.
    fn sample_rate(&self) -> u32;

    /// Renders the next `frames` samples into a mono buffer.
    fn render(&mut self, frames: usize) -> AudioBuffer {
        let mut samples = vec![0.0; frames];
        self.process(&mut samples);
        AudioBuffer::mono(self.sample_rate(), samples)
    }
}
