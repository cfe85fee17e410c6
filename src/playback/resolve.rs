//! Device resolution and listing.

use crate::error::{RampError, Result};
use crate::types::{DeviceHandle, DeviceInfo};

use super::service::AudioDeviceService;

/// Resolves a user-supplied device identifier.
///
/// - `None` fails with `NO_DEVICE_SELECTED`; the caller lists devices.
/// - An identifier that parses as an index inside the device list selects
///   that index.
/// - Anything else selects the first device whose name contains the
///   identifier, ignoring case.
/// - No match fails with `DEVICE_NOT_FOUND`.
pub fn resolve_device<S>(service: &S, identifier: Option<&str>) -> Result<DeviceHandle>
where
    S: AudioDeviceService + ?Sized,
{
    let identifier = identifier.ok_or_else(RampError::no_device_selected)?;
    let devices = service.devices()?;

    let handle = find_device(&devices, identifier)
        .map(DeviceInfo::handle)
        .ok_or_else(|| RampError::device_not_found(identifier))?;

    log::info!("Found device {}: {}", handle.index, handle.name);
    Ok(handle)
}

fn find_device<'a>(devices: &'a [DeviceInfo], identifier: &str) -> Option<&'a DeviceInfo> {
    let identifier = identifier.trim();
    if let Ok(index) = identifier.parse::<usize>() {
        if let Some(device) = devices.get(index) {
            return Some(device);
        }
        log::debug!("Index {} out of range, matching by name", index);
    }

    let needle = identifier.to_lowercase();
    devices
        .iter()
        .find(|d| d.name.to_lowercase().contains(&needle))
}

/// Formats the device table printed when no device is selected.
pub fn format_device_list(devices: &[DeviceInfo]) -> String {
    let mut out = String::from("Available audio devices:\n");
    if devices.is_empty() {
        out.push_str("  (none)\n");
    }
    for device in devices {
        out.push_str(&format!("{}\n", device));
    }
    out
}
