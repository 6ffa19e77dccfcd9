//! Linear fade-in / fade-out envelope.

use crate::buffer::{AudioBuffer, ms_to_samples};

/// Gain for frame `k` of an `n`-frame fade-in: rises from 0 towards 1.
#[inline]
pub fn fade_in_gain(k: usize, n: usize) -> f64 {
    k as f64 / n as f64
}

/// Gain for frame `k` of an `n`-frame fade-out: falls from just under 1 to 0
/// on the last frame.
#[inline]
pub fn fade_out_gain(k: usize, n: usize) -> f64 {
    1.0 - (k + 1) as f64 / n as f64
}

/// Applies a linear fade-in to the start and a linear fade-out to the end of
/// `buffer`.
///
/// Each window is clamped to the buffer length on its own. If the two windows
/// overlap, both gains apply and multiply, so this never fails. Frames outside
/// both windows are left bit-for-bit unchanged. All channels of a frame share
/// one gain.
///
/// # Examples
///
/// ```
/// use alarm_tones::{AudioBuffer, apply_fade};
///
/// let buf = AudioBuffer::mono(1000, vec![1.0; 10]);
/// let faded = apply_fade(buf, 4, 4);
/// assert_eq!(faded.samples()[0], 0.0);
/// assert_eq!(faded.samples()[5], 1.0);
/// assert_eq!(faded.samples()[9], 0.0);
/// ```
pub fn apply_fade(mut buffer: AudioBuffer, fade_in_ms: u32, fade_out_ms: u32) -> AudioBuffer {
    let rate = buffer.sample_rate();
    let channels = buffer.channels() as usize;
    let frames = buffer.frames();
    let fade_in = ms_to_samples(fade_in_ms, rate).min(frames);
    let fade_out = ms_to_samples(fade_out_ms, rate).min(frames);
    let fade_out_start = frames - fade_out;

    let samples = buffer.samples_mut();
    for (k, frame) in samples.chunks_exact_mut(channels).take(fade_in).enumerate() {
        let gain = fade_in_gain(k, fade_in);
        frame.iter_mut().for_each(|s| *s *= gain);
    }
    for (k, frame) in samples
        .chunks_exact_mut(channels)
        .skip(fade_out_start)
        .enumerate()
    {
        let gain = fade_out_gain(k, fade_out);
        frame.iter_mut().for_each(|s| *s *= gain);
    }

    buffer
}
