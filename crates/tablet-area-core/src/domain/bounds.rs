//! Bounds validation of the quantized active area.

use std::fmt;

use super::area::TabletArea;
use super::geometry::GeometryError;
use super::quantize::{quantize, DeviceAreaCommand};

/// The axis on which a rectangle left the tablet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "width",
            Axis::Y => "height",
        })
    }
}

/// Checks that `cmd` lies inside `tablet`.
///
/// The far corner is compared against `quantize(tablet extent)`, the same
/// rounding the command itself went through.  The origin must be
/// non-negative; an oversized area with a right or bottom alignment keeps its
/// far edge on the tablet but pushes its origin below zero.
///
/// # Errors
///
/// Returns [`GeometryError::OutOfBounds`] naming the first offending axis and
/// the overflow in lines.
pub fn validate(cmd: &DeviceAreaCommand, tablet: TabletArea) -> Result<(), GeometryError> {
    check_axis(Axis::X, cmd.x1, cmd.x2, tablet.width)?;
    check_axis(Axis::Y, cmd.y1, cmd.y2, tablet.height)
}

fn check_axis(axis: Axis, start: i64, end: i64, extent: u32) -> Result<(), GeometryError> {
    let limit = quantize(f64::from(extent));
    if end > limit {
        return Err(GeometryError::OutOfBounds {
            axis,
            overflow: end.abs_diff(limit),
        });
    }
    if start < 0 {
        return Err(GeometryError::OutOfBounds {
            axis,
            overflow: start.unsigned_abs(),
        });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
