//! Alarm profiles and the per-profile render pipeline.

use crate::buffer::AudioBuffer;
use crate::combinators::{join_crossfade, repeat};
use crate::constants::{FADE_IN_MS, FADE_OUT_MS};
use crate::envelopes::apply_fade;
use crate::error::{ProfileError, Stage, ToneError};
use crate::synth::generate_tone;

/// Parameters for one alarm sound.
///
/// A profile describes a base tone joined to an overlay tone, repeated
/// `loop_count` times. Every profile in [`ALARM_PROFILES`] sets
/// `overlay_freq` to 0, so the overlay is a silent segment of `duration_ms`
/// between beeps rather than a second pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlarmProfile {
    /// Frequency of the audible tone in Hz
    pub base_freq: f64,
    /// Frequency of the segment appended after the base tone; 0 is silence
    pub overlay_freq: f64,
    /// Length of each tone segment in milliseconds
    pub duration_ms: u32,
    /// Overlap between base and overlay segments in milliseconds
    pub crossfade_ms: u32,
    /// How many times the joined segment plays
    pub loop_count: u32,
}

/// A profile paired with the name used for its output file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedProfile {
    pub name: &'static str,
    pub profile: AlarmProfile,
}

/// The built-in alarm table.
pub const ALARM_PROFILES: &[NamedProfile] = &[
    NamedProfile {
        name: "critical",
        profile: AlarmProfile {
            base_freq: 2000.0,
            overlay_freq: 0.0,
            duration_ms: 800,
            crossfade_ms: 0,
            loop_count: 3,
        },
    },
    NamedProfile {
        name: "severe",
        profile: AlarmProfile {
            base_freq: 1500.0,
            overlay_freq: 0.0,
            duration_ms: 1200,
            crossfade_ms: 0,
            loop_count: 3,
        },
    },
    NamedProfile {
        name: "normal",
        profile: AlarmProfile {
            base_freq: 1000.0,
            overlay_freq: 0.0,
            duration_ms: 1500,
            crossfade_ms: 0,
            loop_count: 3,
        },
    },
];

/// Looks up a built-in profile by name.
pub fn find_profile(name: &str) -> Option<&'static NamedProfile> {
    ALARM_PROFILES.iter().find(|p| p.name == name)
}

impl AlarmProfile {
    /// Checks the profile's own constraints before any synthesis happens.
    ///
    /// The crossfade window is checked by the join itself, against the
    /// rendered segment lengths, and reported as `InvalidCrossfade`.
    pub fn validate(&self) -> Result<(), ToneError> {
        if self.duration_ms == 0 {
            return Err(ToneError::invalid("duration_ms must be greater than zero"));
        }
        if self.loop_count == 0 {
            return Err(ToneError::invalid("loop_count must be at least 1"));
        }
        Ok(())
    }

    /// Builds the base and overlay tones joined by the crossfade, before
    /// looping and fading.
    pub fn segment(&self, sample_rate: u32) -> Result<AudioBuffer, (Stage, ToneError)> {
        self.validate().map_err(|e| (Stage::Validate, e))?;

        let base = generate_tone(self.base_freq, self.duration_ms, sample_rate)
            .map_err(|e| (Stage::Synthesize, e))?;
        let overlay = generate_tone(self.overlay_freq, self.duration_ms, sample_rate)
            .map_err(|e| (Stage::Synthesize, e))?;
        tracing::debug!(
            base_samples = base.len(),
            overlay_samples = overlay.len(),
            "synthesized tones"
        );

        join_crossfade(&base, &overlay, self.crossfade_ms).map_err(|e| (Stage::Join, e))
    }

    /// Renders the complete alarm: joined segment, looped, then faded in and
    /// out.
    pub fn render(&self, sample_rate: u32) -> Result<AudioBuffer, (Stage, ToneError)> {
        let segment = self.segment(sample_rate)?;
        let looped = repeat(&segment, self.loop_count).map_err(|e| (Stage::Repeat, e))?;
        tracing::debug!(
            segment_samples = segment.len(),
            looped_samples = looped.len(),
            loops = self.loop_count,
            "looped segment"
        );
        Ok(apply_fade(looped, FADE_IN_MS, FADE_OUT_MS))
    }
}

impl NamedProfile {
    /// Renders this profile, tagging any failure with its name and stage.
    pub fn render(&self, sample_rate: u32) -> Result<AudioBuffer, ProfileError> {
        self.profile
            .render(sample_rate)
            .map_err(|(stage, source)| ProfileError::new(self.name, stage, source))
    }
}
