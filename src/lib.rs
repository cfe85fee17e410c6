//! ramp-signal: continuous playback test for audio output devices.
//!
//! Synthesizes a ramp or sweep test signal, quantizes it to int16 and plays
//! it through a selected output device, broadcast to every channel.
//!
//! # Modules
//!
//! - [`generation`]: waveform curves and the int16 synthesizer
//! - [`playback`]: device resolution and the blocking playback driver
//! - [`audio`]: cpal device service and WAV capture
//! - [`plot`]: terminal waveform plot
//! - [`config`]: run configuration (RampConfig)
//! - [`error`]: error types and codes (RampError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use ramp_signal::{
//!     audio::CpalDeviceService,
//!     playback::{resolve_device, PlaybackDriver},
//!     generation::synthesize,
//!     types::{Shape, WaveformRequest},
//! };
//!
//! let request = WaveformRequest::new(10.0, 48000, 0.9, Shape::SineSweep)?;
//! let buffer = synthesize(&request)?;
//!
//! let service = CpalDeviceService::new();
//! let device = resolve_device(&service, Some("usb"))?;
//! let report = PlaybackDriver::new(&service).play(&buffer, &device, 48000)?;
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod playback;
pub mod plot;
pub mod runner;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::RampConfig;
pub use error::{ErrorCode, RampError, Result};
pub use generation::synthesize;
pub use playback::{resolve_device, AudioDeviceService, PlaybackDriver, PlaybackReport};
pub use plot::PlottingService;
pub use types::{DeviceHandle, DeviceInfo, SampleBuffer, Shape, WaveformRequest};
