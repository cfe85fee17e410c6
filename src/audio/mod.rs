//! Audio backend module.
//!
//! Provides the cpal-based device service and WAV capture.

pub mod cpal_service;
pub mod wav;

// Re-export commonly used items
pub use cpal_service::CpalDeviceService;
pub use wav::{write_wav, BITS_PER_SAMPLE, CHANNELS};
