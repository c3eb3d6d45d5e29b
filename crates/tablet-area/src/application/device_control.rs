//! The device utility as seen by the application layer.
//!
//! [`DeviceControl`] is the only seam between the use cases and the outside
//! world.  The infrastructure layer provides a process-backed implementation
//! (`XsetwacomControl`) and an in-memory fake; unit tests use the generated
//! `MockDeviceControl`.

use std::path::PathBuf;

use tablet_area_core::{DeviceAreaCommand, TabletDevice};
use thiserror::Error;

/// Errors reported by a [`DeviceControl`] implementation.
#[derive(Debug, Error)]
pub enum DeviceControlError {
    /// The utility binary does not exist at the configured location.
    #[error("{} not found", .0.display())]
    ToolNotFound(PathBuf),

    /// The utility could not be started.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The utility ran but exited unsuccessfully.
    #[error("`{command}` failed ({status}): {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The device has no settable `Area` parameter.
    #[error("device {device} has no settable area")]
    NotSupported { device: String },

    /// The utility's reply could not be understood.
    #[error("unexpected reply from device utility: {0}")]
    MalformedOutput(String),
}

impl DeviceControlError {
    /// `true` when the error means "this device cannot take an area", as
    /// opposed to the utility itself failing.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            DeviceControlError::NotSupported { .. } | DeviceControlError::MalformedOutput(_)
        )
    }
}

/// Operations the use cases need from the device utility.
#[cfg_attr(test, mockall::automock)]
pub trait DeviceControl {
    /// Lists all input devices known to the driver.
    fn list_devices(&self) -> Result<Vec<TabletDevice>, DeviceControlError>;

    /// Reads the area currently programmed on `device`.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceControlError::NotSupported`] if the device has no area.
    fn query_area(&self, device: &str) -> Result<DeviceAreaCommand, DeviceControlError>;

    /// Programs `area` on `device`.  [`DeviceAreaCommand::RESET`] restores the
    /// driver default.
    fn set_area(&self, device: &str, area: &DeviceAreaCommand) -> Result<(), DeviceControlError>;

    /// Shell-style rendering of the `set_area` call, printed in verbose mode.
    fn describe_set_area(&self, device: &str, area: &DeviceAreaCommand) -> String;
}
