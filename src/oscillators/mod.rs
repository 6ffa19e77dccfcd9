//! Oscillators used to synthesize tones.

mod sine;

pub use sine::SineOscillator;
