//! Capability interface over the host audio subsystem.
//!
//! The driver and device resolution only talk to [`AudioDeviceService`], so
//! any backend (cpal, a test fake) can be plugged in.

use crate::error::{RampError, Result};
use crate::types::{DeviceHandle, DeviceInfo};

/// Enumerates audio devices and plays interleaved `i16` frames on them.
pub trait AudioDeviceService {
    /// Lists all devices. The position of a device in the returned list is
    /// its index.
    fn devices(&self) -> Result<Vec<DeviceInfo>>;

    /// Looks up the current description of a resolved device.
    fn device(&self, handle: &DeviceHandle) -> Result<DeviceInfo> {
        self.devices()?
            .into_iter()
            .find(|d| d.index == handle.index)
            .ok_or_else(|| RampError::device_not_found(handle.index.to_string()))
    }

    /// Plays `frames` (interleaved, `channels` samples per frame) at
    /// `sample_rate`, blocking until the device has consumed them.
    fn play_interleaved(
        &self,
        device: &DeviceHandle,
        frames: &[i16],
        channels: u16,
        sample_rate: u32,
    ) -> Result<()>;
}
