//! Core types for ramp-signal.
//!
//! - [`WaveformRequest`] and [`Shape`]: what to synthesize
//! - [`SampleBuffer`]: the quantized result
//! - [`DeviceInfo`] and [`DeviceHandle`]: where to play it

mod buffer;
mod device;
mod request;

pub use buffer::SampleBuffer;
pub use device::{DeviceHandle, DeviceInfo};
pub use request::{Shape, WaveformRequest, MAX_SAMPLES};
