//! Amplitude envelopes applied to finished buffers.
//!
//! Alarms get a linear fade-in and fade-out so they neither click on at full
//! scale nor cut off abruptly.

mod fade;

pub use fade::{apply_fade, fade_in_gain, fade_out_gain};
