//! Playback module.
//!
//! Resolves devices and plays sample buffers through an [`AudioDeviceService`].

pub mod driver;
pub mod resolve;
pub mod service;

// Re-export commonly used items
pub use driver::{interleave, PlaybackDriver, PlaybackReport};
pub use resolve::{format_device_list, resolve_device};
pub use service::AudioDeviceService;
