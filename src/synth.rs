//! Fixed-frequency tone synthesis.

use crate::buffer::{AudioBuffer, ms_to_samples};
use crate::error::ToneError;
use crate::oscillators::SineOscillator;
use crate::signals::AudioSignal;

/// Generates a mono sine tone.
///
/// The result holds `ms_to_samples(duration_ms, sample_rate)` samples at full
/// scale. A frequency of `0.0` is accepted and yields silence, which is how
/// profiles express an unused overlay tone.
///
/// # Errors
///
/// `InvalidParameter` if `duration_ms` or `sample_rate` is zero, or if the
/// frequency is negative or not finite.
///
/// # Examples
///
/// ```
/// use alarm_tones::generate_tone;
///
/// let tone = generate_tone(2000.0, 800, 44100).unwrap();
/// assert_eq!(tone.len(), 35280);
/// ```
pub fn generate_tone(
    frequency_hz: f64,
    duration_ms: u32,
    sample_rate: u32,
) -> Result<AudioBuffer, ToneError> {
    if duration_ms == 0 {
        return Err(ToneError::invalid("tone duration must be greater than zero"));
    }
    if sample_rate == 0 {
        return Err(ToneError::invalid("sample rate must be greater than zero"));
    }
    if !frequency_hz.is_finite() || frequency_hz < 0.0 {
        return Err(ToneError::invalid(format!(
            "frequency must be a non-negative number of Hz, got {frequency_hz}"
        )));
    }

    let frames = ms_to_samples(duration_ms, sample_rate);
    Ok(SineOscillator::new(frequency_hz, sample_rate).render(frames))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_length_matches_duration() {
        for (duration_ms, sample_rate) in [(800, 44100), (1200, 44100), (5, 44100), (333, 48000)] {
            let tone = generate_tone(440.0, duration_ms, sample_rate).unwrap();
            let expected = (duration_ms as f64 * sample_rate as f64 / 1000.0).round() as usize;
            assert_eq!(tone.len(), expected);
            assert_eq!(tone.sample_rate(), sample_rate);
            assert_eq!(tone.channels(), 1);
        }
    }

    #[test]
    fn test_tone_reaches_full_scale() {
        let tone = generate_tone(1000.0, 100, 44100).unwrap();
        assert!(tone.peak() > 0.999);
        assert!(tone.peak() <= 1.0);
    }

    #[test]
    fn test_zero_frequency_is_silence() {
        let tone = generate_tone(0.0, 800, 44100).unwrap();
        assert_eq!(tone.len(), 35280);
        assert_eq!(tone.peak(), 0.0);
    }

    #[test]
    fn test_tone_is_deterministic() {
        let a = generate_tone(1500.0, 250, 44100).unwrap();
        let b = generate_tone(1500.0, 250, 44100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            generate_tone(440.0, 0, 44100),
            Err(ToneError::InvalidParameter(_))
        ));
        assert!(matches!(
            generate_tone(440.0, 100, 0),
            Err(ToneError::InvalidParameter(_))
        ));
        assert!(matches!(
            generate_tone(-1.0, 100, 44100),
            Err(ToneError::InvalidParameter(_))
        ));
        assert!(matches!(
            generate_tone(f64::NAN, 100, 44100),
            Err(ToneError::InvalidParameter(_))
        ));
    }
}
