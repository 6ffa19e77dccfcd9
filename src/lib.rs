//! Alarm Tones - synthesizes alarm-tone WAV files
//!
//! Each alarm is built from a small pipeline: two sine tones joined with a
//! crossfade, repeated a fixed number of times, shaped with a fade-in and
//! fade-out, then written as a mono 16-bit PCM WAV file.

pub mod batch;
pub mod buffer;
pub mod combinators;
pub mod constants;
pub mod envelopes;
pub mod error;
pub mod export;
pub mod oscillators;
pub mod profiles;
pub mod signals;
pub mod synth;

// Re-export commonly used types at the crate root
pub use batch::{BatchReport, Exported, export_profile, generate_all, output_path};
pub use buffer::{AudioBuffer, ms_to_samples};
pub use combinators::{join_crossfade, repeat};
pub use envelopes::apply_fade;
pub use error::{ProfileError, Stage, ToneError};
pub use export::{convert_channels, export_wav, read_wav};
pub use oscillators::SineOscillator;
pub use profiles::{ALARM_PROFILES, AlarmProfile, NamedProfile, find_profile};
pub use signals::{AudioSignal, Signal};
pub use synth::generate_tone;
