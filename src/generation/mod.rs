//! Waveform generation module.
//!
//! Provides the ramp and sweep curves and the int16 synthesizer built on them.

pub mod shapes;
pub mod synth;

// Re-export commonly used items
pub use shapes::{linspace, sweep_frequency, sweep_phase, SWEEP_END_HZ, SWEEP_START_HZ};
pub use synth::{quantize, synthesize, I16_SCALE};
