//! Audio device descriptions.

use serde::{Deserialize, Serialize};

/// An audio device as reported by an [`AudioDeviceService`].
///
/// [`AudioDeviceService`]: crate::playback::AudioDeviceService
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Position in the service's enumeration order.
    pub index: usize,

    /// Device name as reported by the host.
    pub name: String,

    /// Maximum number of input channels (0 for output-only devices).
    pub max_input_channels: u16,

    /// Maximum number of output channels (0 for input-only devices).
    pub max_output_channels: u16,
}

impl DeviceInfo {
    /// Returns the handle addressing this device.
    pub fn handle(&self) -> DeviceHandle {
        DeviceHandle {
            index: self.index,
            name: self.name.clone(),
        }
    }

    pub fn is_output(&self) -> bool {
        self.max_output_channels > 0
    }
}

impl std::fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} (in: {}, out: {})",
            self.index, self.name, self.max_input_channels, self.max_output_channels
        )
    }
}

/// A resolved device, addressed by its enumeration index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceHandle {
    pub index: usize,
    pub name: String,
}
