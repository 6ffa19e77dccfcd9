//! Buffer combinators: crossfade joins and hard repeats.
//!
//! These operate on whole [`AudioBuffer`]s rather than streaming signals. Both
//! inputs of a combinator must share sample rate and channel count.

use crate::buffer::{AudioBuffer, ms_to_samples};
use crate::error::ToneError;

/// Appends `b` to `a`, blending the tail of `a` into the head of `b`.
///
/// The overlap is `ms_to_samples(crossfade_ms)` frames long. At overlap frame
/// `i` of `n` the output is `a * (1 - i/n) + b * (i/n)`; everything before the
/// overlap comes from `a` unchanged and everything after from `b` unchanged.
/// The result is `len(a) + len(b) - overlap` long, and a zero crossfade is a
/// plain concatenation.
///
/// # Errors
///
/// - `InvalidParameter` if the buffers differ in sample rate or channel count
/// - `InvalidCrossfade` if the overlap is longer than either buffer
///
/// # Examples
///
/// ```
/// use alarm_tones::{AudioBuffer, join_crossfade};
///
/// let a = AudioBuffer::mono(1000, vec![1.0; 10]);
/// let b = AudioBuffer::mono(1000, vec![0.0; 10]);
/// let joined = join_crossfade(&a, &b, 4).unwrap();
/// assert_eq!(joined.len(), 16);
/// assert_eq!(joined.samples()[8], 0.5);
/// ```
pub fn join_crossfade(
    a: &AudioBuffer,
    b: &AudioBuffer,
    crossfade_ms: u32,
) -> Result<AudioBuffer, ToneError> {
    a.ensure_compatible(b)?;

    let channels = a.channels() as usize;
    let overlap = ms_to_samples(crossfade_ms, a.sample_rate());
    let available = a.frames().min(b.frames());
    if overlap > available {
        return Err(ToneError::InvalidCrossfade {
            requested: overlap,
            available,
        });
    }

    let overlap_len = overlap * channels;
    let head_len = a.len() - overlap_len;
    let (a_head, a_tail) = a.samples().split_at(head_len);
    let (b_head, b_rest) = b.samples().split_at(overlap_len);

    let mut samples = Vec::with_capacity(a.len() + b.len() - overlap_len);
    samples.extend_from_slice(a_head);
    for (frame, (a_frame, b_frame)) in a_tail
        .chunks_exact(channels)
        .zip(b_head.chunks_exact(channels))
        .enumerate()
    {
        let mix = frame as f64 / overlap as f64;
        samples.extend(
            a_frame
                .iter()
                .zip(b_frame)
                .map(|(&x, &y)| x * (1.0 - mix) + y * mix),
        );
    }
    samples.extend_from_slice(b_rest);

    AudioBuffer::from_interleaved(a.sample_rate(), a.channels(), samples)
}

/// Concatenates `times` copies of `buffer` back to back.
///
/// No blending is applied at the seams, so any discontinuity at the loop
/// boundary is kept and the alarm retriggers abruptly.
///
/// # Errors
///
/// `InvalidParameter` if `times` is zero.
pub fn repeat(buffer: &AudioBuffer, times: u32) -> Result<AudioBuffer, ToneError> {
    if times == 0 {
        return Err(ToneError::invalid("repeat count must be at least 1"));
    }

    let mut out = buffer.empty_like();
    for _ in 0..times {
        out.extend_from(buffer)?;
    }
    Ok(out)
}
