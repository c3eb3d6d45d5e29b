//! Text protocol of the `xsetwacom` command-line utility.
//!
//! The utility is driven entirely through arguments and stdout:
//!
//! ```text
//! $ xsetwacom --list devices
//! Wacom Intuos S Pen stylus       \tid: 10\ttype: STYLUS
//! Wacom Intuos S Pad pad          \tid: 11\ttype: PAD
//!
//! $ xsetwacom --get 10 Area
//! 0 0 15200 9500
//!
//! $ xsetwacom --set 10 Area "0 0 15200 8550"
//! ```
//!
//! This module only builds argument vectors and parses replies; running the
//! process is the application crate's job.

use thiserror::Error;
use tracing::debug;

use crate::domain::device::{DeviceKind, TabletDevice};
use crate::domain::quantize::DeviceAreaCommand;

/// Name of the device parameter holding the active area.
pub const AREA_PARAMETER: &str = "Area";

/// Reply suffix when a device has no such parameter (e.g. a touch ring).
const NOT_SUPPORTED_SUFFIX: &str = "does not exist on device.";

/// Errors raised while parsing utility output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// A `--list devices` line without the `id:` / `type:` columns.
    #[error("malformed device line: {0:?}")]
    MalformedDeviceLine(String),

    /// The device has no `Area` parameter.
    #[error("device has no settable area")]
    AreaNotSupported,

    /// An `Area` reply that is not exactly four integers.
    #[error("malformed area reply: {0:?}")]
    MalformedArea(String),
}

// ── Replies ───────────────────────────────────────────────────────────────────

/// Parses one line of `--list devices` output.
///
/// # Errors
///
/// Returns [`ProtocolError::MalformedDeviceLine`] if the line does not have
/// the three tab-separated columns.
pub fn parse_device_line(line: &str) -> Result<TabletDevice, ProtocolError> {
    let malformed = || ProtocolError::MalformedDeviceLine(line.to_string());
    let mut columns = line.split('\t');

    let name = columns.next().map(str::trim).filter(|n| !n.is_empty());
    let id = columns
        .next()
        .and_then(|c| c.trim().strip_prefix("id:"))
        .map(str::trim)
        .filter(|id| !id.is_empty());
    let tag = columns
        .next()
        .and_then(|c| c.trim().strip_prefix("type:"))
        .map(str::trim)
        .filter(|tag| !tag.is_empty());

    match (name, id, tag) {
        (Some(name), Some(id), Some(tag)) => {
            Ok(TabletDevice::new(id, name, DeviceKind::from_tag(tag)))
        }
        _ => Err(malformed()),
    }
}

/// Parses full `--list devices` output, skipping blank and malformed lines.
pub fn parse_device_list(output: &str) -> Vec<TabletDevice> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match parse_device_line(line) {
            Ok(device) => Some(device),
            Err(e) => {
                debug!("skipping device line: {e}");
                None
            }
        })
        .collect()
}

/// Parses the reply to `--get <device> Area`.
///
/// # Errors
///
/// - [`ProtocolError::AreaNotSupported`] when the utility says the parameter
///   does not exist on the device.
/// - [`ProtocolError::MalformedArea`] when the reply is not four integers.
pub fn parse_area_reply(output: &str) -> Result<DeviceAreaCommand, ProtocolError> {
    let reply = output.trim();
    if reply.ends_with(NOT_SUPPORTED_SUFFIX) {
        return Err(ProtocolError::AreaNotSupported);
    }

    let malformed = || ProtocolError::MalformedArea(reply.to_string());
    let coords = reply
        .split_whitespace()
        .map(|token| token.parse::<i64>().map_err(|_| malformed()))
        .collect::<Result<Vec<_>, _>>()?;

    match coords.as_slice() {
        [x1, y1, x2, y2] => Ok(DeviceAreaCommand::new(*x1, *y1, *x2, *y2)),
        _ => Err(malformed()),
    }
}

// ── Requests ──────────────────────────────────────────────────────────────────

/// Arguments for listing devices.
pub fn list_devices_args() -> Vec<String> {
    vec!["--list".to_string(), "devices".to_string()]
}

/// Arguments for reading a device's area.
pub fn get_area_args(device: &str) -> Vec<String> {
    vec![
        "--get".to_string(),
        device.to_string(),
        AREA_PARAMETER.to_string(),
    ]
}

/// Arguments for programming a device's area.
///
/// The four coordinates travel as a single argument, as the utility expects.
pub fn set_area_args(device: &str, area: &DeviceAreaCommand) -> Vec<String> {
    vec![
        "--set".to_string(),
        device.to_string(),
        AREA_PARAMETER.to_string(),
        area.to_string(),
    ]
}

/// Human-readable command line equivalent to [`set_area_args`].
pub fn set_area_command_line(tool: &str, device: &str, area: &DeviceAreaCommand) -> String {
    let mut parts = vec![tool.to_string()];
    parts.extend(set_area_args(device, area));
    parts.join(" ")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_OUTPUT: &str = "\
Wacom Intuos S Pen stylus       \tid: 10\ttype: STYLUS
Wacom Intuos S Pen eraser       \tid: 15\ttype: ERASER
Wacom Intuos S Pad pad          \tid: 11\ttype: PAD
";

    // ── device list ───────────────────────────────────────────────────────────

    #[test]
    fn test_parse_device_line_extracts_all_columns() {
        let device = parse_device_line("Wacom Intuos S Pen stylus  \tid: 10\ttype: STYLUS  ").unwrap();
        assert_eq!(device.name, "Wacom Intuos S Pen stylus");
        assert_eq!(device.id, "10");
        assert_eq!(device.kind, DeviceKind::Stylus);
    }

    #[test]
    fn test_parse_device_line_rejects_missing_type_column() {
        assert!(matches!(
            parse_device_line("Some device\tid: 3"),
            Err(ProtocolError::MalformedDeviceLine(_))
        ));
    }

    #[test]
    fn test_parse_device_line_rejects_missing_id_prefix() {
        assert!(parse_device_line("Some device\t3\ttype: PAD").is_err());
    }

    #[test]
    fn test_parse_device_list_keeps_order() {
        let devices = parse_device_list(LIST_OUTPUT);
        let ids: Vec<_> = devices.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["10", "15", "11"]);
        assert_eq!(devices[2].kind, DeviceKind::Pad);
    }

    #[test]
    fn test_parse_device_list_skips_blank_and_malformed_lines() {
        let output = "\n garbage \nPen\tid: 7\ttype: STYLUS\n\n";
        let devices = parse_device_list(output);
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id, "7");
    }

    #[test]
    fn test_parse_device_list_of_empty_output_is_empty() {
        assert!(parse_device_list("").is_empty());
    }

    // ── area reply ────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_area_reply_reads_four_integers() {
        assert_eq!(
            parse_area_reply("0 0 15200 9500\n"),
            Ok(DeviceAreaCommand::new(0, 0, 15200, 9500))
        );
    }

    #[test]
    fn test_parse_area_reply_accepts_negative_values() {
        assert_eq!(parse_area_reply("-1 -1 -1 -1"), Ok(DeviceAreaCommand::RESET));
    }

    #[test]
    fn test_parse_area_reply_detects_missing_parameter() {
        let reply = "Property 'Area' does not exist on device.\n";
        assert_eq!(parse_area_reply(reply), Err(ProtocolError::AreaNotSupported));
    }

    #[test]
    fn test_parse_area_reply_rejects_three_values() {
        assert!(matches!(
            parse_area_reply("0 0 15200"),
            Err(ProtocolError::MalformedArea(_))
        ));
    }

    #[test]
    fn test_parse_area_reply_rejects_non_numeric_values() {
        assert!(parse_area_reply("0 0 wide tall").is_err());
    }

    #[test]
    fn test_parse_area_reply_rejects_empty_output() {
        assert!(parse_area_reply("").is_err());
    }

    // ── requests ──────────────────────────────────────────────────────────────

    #[test]
    fn test_get_area_args() {
        assert_eq!(get_area_args("10"), ["--get", "10", "Area"]);
    }

    #[test]
    fn test_set_area_args_pass_coordinates_as_one_argument() {
        let args = set_area_args("10", &DeviceAreaCommand::new(2500, 1594, 7500, 4406));
        assert_eq!(args, ["--set", "10", "Area", "2500 1594 7500 4406"]);
    }

    #[test]
    fn test_set_area_args_for_reset_sentinel() {
        let args = set_area_args("stylus", &DeviceAreaCommand::RESET);
        assert_eq!(args[3], "-1 -1 -1 -1");
    }

    #[test]
    fn test_set_area_command_line_joins_with_spaces() {
        let line = set_area_command_line(
            "/usr/bin/xsetwacom",
            "10",
            &DeviceAreaCommand::new(0, 188, 10000, 5813),
        );
        assert_eq!(line, "/usr/bin/xsetwacom --set 10 Area 0 188 10000 5813");
    }
}
