//! Fixed output format and envelope timings.

/// Sample rate of every generated alarm, in Hz.
pub const SAMPLE_RATE: u32 = 44_100;
/// Channel count of exported files (mono).
pub const CHANNELS: u16 = 1;
/// Exported sample width. Samples are signed little-endian integers.
pub const BITS_PER_SAMPLE: u16 = 16;
/// Peak integer amplitude for a normalized sample of 1.0
pub const PEAK_AMPLITUDE: f64 = i16::MAX as f64;
/// Fade-in applied to every composed alarm, in milliseconds.
pub const FADE_IN_MS: u32 = 200;
/// Fade-out applied to every composed alarm, in milliseconds.
pub const FADE_OUT_MS: u32 = 200;
/// Suffix appended to a profile name to build its output file name.
pub const OUTPUT_SUFFIX: &str = "_alert.wav";
