//! In-memory device utility for tests.
//!
//! # Why a fake?
//!
//! The real adapter needs an X server, the Wacom driver and a tablet plugged
//! in, and it changes the tablet's configuration.  `FakeDeviceControl` keeps
//! a small device table in memory and records every call, so tests can assert
//! exactly which writes happened and in what order.
//!
//! # Usage in tests
//!
//! ```ignore
//! let control = FakeDeviceControl::intuos_s();
//! let use_case = ConfigureAreaUseCase::new(control);
//! use_case.run(&settings).unwrap();
//!
//! assert_eq!(use_case.control().writes().len(), 2); // reset + area
//! ```
//!
//! Devices are addressable by id or by name, as with the real utility.
//! Writing [`DeviceAreaCommand::RESET`] restores the device's default area.

use std::cell::RefCell;

use tablet_area_core::{DeviceAreaCommand, DeviceKind, TabletDevice};

use crate::application::device_control::{DeviceControl, DeviceControlError};

/// One recorded call on the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCall {
    ListDevices,
    QueryArea(String),
    SetArea(String, DeviceAreaCommand),
}

#[derive(Debug, Clone)]
struct FakeDevice {
    info: TabletDevice,
    /// `None` for devices without an `Area` parameter.
    default_area: Option<DeviceAreaCommand>,
    current_area: Option<DeviceAreaCommand>,
}

/// A [`DeviceControl`] backed by an in-memory device table.
#[derive(Debug, Default)]
pub struct FakeDeviceControl {
    devices: RefCell<Vec<FakeDevice>>,
    calls: RefCell<Vec<DeviceCall>>,
    /// Areas the driver refuses to program.
    rejected: Vec<DeviceAreaCommand>,
    /// When `true`, every call fails with [`DeviceControlError::Failed`].
    pub should_fail: bool,
}

impl FakeDeviceControl {
    /// Creates a fake with no devices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a device whose default (and current) area is `area`.
    pub fn with_device(self, info: TabletDevice, area: Option<DeviceAreaCommand>) -> Self {
        self.devices.borrow_mut().push(FakeDevice {
            info,
            default_area: area,
            current_area: area,
        });
        self
    }

    /// Makes every `set_area` with exactly `area` fail, as a driver would
    /// for a value it cannot program.
    pub fn rejecting(mut self, area: DeviceAreaCommand) -> Self {
        self.rejected.push(area);
        self
    }

    /// An Intuos S: stylus 10 and eraser 15 spanning `0 0 15200 9500`, and
    /// pad 11 without an area.
    pub fn intuos_s() -> Self {
        let area = Some(DeviceAreaCommand::new(0, 0, 15200, 9500));
        Self::new()
            .with_device(
                TabletDevice::new("10", "Wacom Intuos S Pen stylus", DeviceKind::Stylus),
                area,
            )
            .with_device(
                TabletDevice::new("11", "Wacom Intuos S Pad pad", DeviceKind::Pad),
                None,
            )
            .with_device(
                TabletDevice::new("15", "Wacom Intuos S Pen eraser", DeviceKind::Eraser),
                area,
            )
    }

    /// Overrides the current area of `device` without recording a call.
    pub fn set_current_area(&self, device: &str, area: DeviceAreaCommand) {
        if let Some(d) = self
            .devices
            .borrow_mut()
            .iter_mut()
            .find(|d| Self::addresses(d, device))
        {
            d.current_area = Some(area);
        }
    }

    /// Current area of `device`, if it has one.
    pub fn current_area(&self, device: &str) -> Option<DeviceAreaCommand> {
        self.devices
            .borrow()
            .iter()
            .find(|d| Self::addresses(d, device))
            .and_then(|d| d.current_area)
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.borrow().clone()
    }

    /// Only the `set_area` calls.
    pub fn writes(&self) -> Vec<(String, DeviceAreaCommand)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                DeviceCall::SetArea(device, area) => Some((device.clone(), *area)),
                _ => None,
            })
            .collect()
    }

    fn addresses(device: &FakeDevice, id_or_name: &str) -> bool {
        device.info.id == id_or_name || device.info.name == id_or_name
    }

    fn record(&self, call: DeviceCall) -> Result<(), DeviceControlError> {
        let command = format!("{call:?}");
        self.calls.borrow_mut().push(call);
        if self.should_fail {
            return Err(DeviceControlError::Failed {
                command,
                status: "exit status: 1".to_string(),
                stderr: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

impl DeviceControl for FakeDeviceControl {
    fn list_devices(&self) -> Result<Vec<TabletDevice>, DeviceControlError> {
        self.record(DeviceCall::ListDevices)?;
        Ok(self.devices.borrow().iter().map(|d| d.info.clone()).collect())
    }

    fn query_area(&self, device: &str) -> Result<DeviceAreaCommand, DeviceControlError> {
        self.record(DeviceCall::QueryArea(device.to_string()))?;
        self.current_area(device)
            .ok_or_else(|| DeviceControlError::NotSupported {
                device: device.to_string(),
            })
    }

    fn set_area(&self, device: &str, area: &DeviceAreaCommand) -> Result<(), DeviceControlError> {
        self.record(DeviceCall::SetArea(device.to_string(), *area))?;
        if self.rejected.contains(area) {
            return Err(DeviceControlError::Failed {
                command: self.describe_set_area(device, area),
                status: "exit status: 1".to_string(),
                stderr: "Value out of range".to_string(),
            });
        }
        let mut devices = self.devices.borrow_mut();
        let target = devices
            .iter_mut()
            .find(|d| Self::addresses(d, device))
            .filter(|d| d.default_area.is_some())
            .ok_or_else(|| DeviceControlError::NotSupported {
                device: device.to_string(),
            })?;
        target.current_area = if *area == DeviceAreaCommand::RESET {
            target.default_area
        } else {
            Some(*area)
        };
        Ok(())
    }

    fn describe_set_area(&self, device: &str, area: &DeviceAreaCommand) -> String {
        format!("fake --set {device} Area {area}")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
