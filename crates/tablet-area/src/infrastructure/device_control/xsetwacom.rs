//! `xsetwacom` process adapter.
//!
//! Every call runs the utility once and waits for it.  Reply parsing lives in
//! [`tablet_area_core::protocol::xsetwacom`]; this module only spawns the
//! process and maps exit status and output onto [`DeviceControlError`].

use std::path::PathBuf;
use std::process::{Command, Output};

use tablet_area_core::protocol::xsetwacom as protocol;
use tablet_area_core::protocol::ProtocolError;
use tablet_area_core::{DeviceAreaCommand, TabletDevice};
use tracing::debug;

use crate::application::device_control::{DeviceControl, DeviceControlError};

/// Talks to the driver through the `xsetwacom` binary at `tool`.
#[derive(Debug, Clone)]
pub struct XsetwacomControl {
    tool: PathBuf,
}

impl XsetwacomControl {
    /// Creates the adapter after checking that `tool` exists.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceControlError::ToolNotFound`] if nothing exists at `tool`.
    pub fn new(tool: impl Into<PathBuf>) -> Result<Self, DeviceControlError> {
        let tool = tool.into();
        if !tool.exists() {
            return Err(DeviceControlError::ToolNotFound(tool));
        }
        Ok(Self { tool })
    }

    fn command_line(&self, args: &[String]) -> String {
        let mut parts = vec![self.tool.display().to_string()];
        parts.extend(args.iter().cloned());
        parts.join(" ")
    }

    fn run(&self, args: &[String]) -> Result<Output, DeviceControlError> {
        debug!("running {}", self.command_line(args));
        Command::new(&self.tool)
            .args(args)
            .output()
            .map_err(|source| DeviceControlError::Spawn {
                tool: self.tool.display().to_string(),
                source,
            })
    }

    fn run_checked(&self, args: &[String]) -> Result<String, DeviceControlError> {
        let output = self.run(args)?;
        if !output.status.success() {
            return Err(self.failure(args, &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn failure(&self, args: &[String], output: &Output) -> DeviceControlError {
        DeviceControlError::Failed {
            command: self.command_line(args),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

impl DeviceControl for XsetwacomControl {
    fn list_devices(&self) -> Result<Vec<TabletDevice>, DeviceControlError> {
        let stdout = self.run_checked(&protocol::list_devices_args())?;
        Ok(protocol::parse_device_list(&stdout))
    }

    fn query_area(&self, device: &str) -> Result<DeviceAreaCommand, DeviceControlError> {
        let args = protocol::get_area_args(device);
        let output = self.run(&args)?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        match interpret_area_reply(device, &stdout, &stderr) {
            Err(DeviceControlError::MalformedOutput(_)) if !output.status.success() => {
                Err(self.failure(&args, &output))
            }
            other => other,
        }
    }

    fn set_area(&self, device: &str, area: &DeviceAreaCommand) -> Result<(), DeviceControlError> {
        self.run_checked(&protocol::set_area_args(device, area))?;
        Ok(())
    }

    fn describe_set_area(&self, device: &str, area: &DeviceAreaCommand) -> String {
        protocol::set_area_command_line(&self.tool.display().to_string(), device, area)
    }
}

/// Maps an `Area` reply onto the trait's error model.
///
/// The utility reports a missing parameter on stdout, but some builds use
/// stderr, so stderr is consulted when stdout is empty.
fn interpret_area_reply(
    device: &str,
    stdout: &str,
    stderr: &str,
) -> Result<DeviceAreaCommand, DeviceControlError> {
    let reply = if stdout.trim().is_empty() { stderr } else { stdout };
    protocol::parse_area_reply(reply).map_err(|e| match e {
        ProtocolError::AreaNotSupported => DeviceControlError::NotSupported {
            device: device.to_string(),
        },
        other => DeviceControlError::MalformedOutput(other.to_string()),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
