//! Device selection: which device gets the new area.
//!
//! An explicitly named device must accept an `Area` query.  Without a name,
//! the first stylus with a settable area wins; failing that, the first pad.

use tablet_area_core::{DeviceAreaCommand, DeviceKind};
use thiserror::Error;
use tracing::{debug, info};

use super::device_control::{DeviceControl, DeviceControlError};

/// Errors finding a usable device.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// No stylus or pad with a settable area was listed.
    #[error("could not find tablet")]
    NoTablet,

    /// The named device does not take an area.
    #[error("invalid tablet device id: {device}")]
    NoSettableArea { device: String },

    /// The utility failed while probing devices.
    #[error(transparent)]
    Control(#[from] DeviceControlError),
}

/// The chosen device and the area it had when it was probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDevice {
    /// Identifier passed to the utility (id or name).
    pub id: String,
    /// Area programmed on the device before this run touched it.
    pub current_area: DeviceAreaCommand,
}

/// Picks the device to configure.
///
/// # Errors
///
/// - [`DiscoveryError::NoSettableArea`] if `requested` does not take an area.
/// - [`DiscoveryError::NoTablet`] if auto-selection finds nothing.
/// - [`DiscoveryError::Control`] if the utility itself fails.
pub fn select_device<C: DeviceControl + ?Sized>(
    control: &C,
    requested: Option<&str>,
) -> Result<SelectedDevice, DiscoveryError> {
    if let Some(device) = requested {
        return probe_area(control, device)?
            .map(|current_area| SelectedDevice {
                id: device.to_string(),
                current_area,
            })
            .ok_or_else(|| DiscoveryError::NoSettableArea {
                device: device.to_string(),
            });
    }

    let devices = control.list_devices()?;
    debug!("driver lists {} device(s)", devices.len());

    for kind in [DeviceKind::Stylus, DeviceKind::Pad] {
        for device in devices.iter().filter(|d| d.kind == kind) {
            if let Some(current_area) = probe_area(control, &device.id)? {
                info!("selected {device}");
                return Ok(SelectedDevice {
                    id: device.id.clone(),
                    current_area,
                });
            }
            debug!("{device} has no settable area");
        }
    }

    Err(DiscoveryError::NoTablet)
}

/// Queries the area of `device`, mapping "no area" replies to `None`.
fn probe_area<C: DeviceControl + ?Sized>(
    control: &C,
    device: &str,
) -> Result<Option<DeviceAreaCommand>, DeviceControlError> {
    match control.query_area(device) {
        Ok(area) => Ok(Some(area)),
        Err(e) if e.is_unsupported() => Ok(None),
        Err(e) => Err(e),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
