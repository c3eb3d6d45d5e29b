//! Quantization of real-valued rectangles into device coordinates.

use std::fmt;

use super::geometry::ResolvedRectangle;

/// Rounds to the nearest integer, breaking exact `.5` ties upward.
///
/// This is `floor(x + 0.5)`, not banker's rounding and not `f64::round`
/// (which rounds `-2.5` away from zero).  The bounds validator quantizes the
/// tablet edge with the same function so both sides of every comparison
/// round identically.
pub fn quantize(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// A rectangle in integer device coordinates: `(x1, y1)` top-left, `(x2, y2)`
/// bottom-right.
///
/// This is both the value handed to the device utility and the shape of the
/// area the utility reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceAreaCommand {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl DeviceAreaCommand {
    /// Sentinel asking the driver to restore the device's default (full) area.
    pub const RESET: DeviceAreaCommand = DeviceAreaCommand {
        x1: -1,
        y1: -1,
        x2: -1,
        y2: -1,
    };

    pub const fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Quantizes a resolved rectangle.
    ///
    /// The far corner is `quantize(offset + size)`, never
    /// `quantize(offset) + quantize(size)`, so rounding error cannot compound.
    pub fn from_rectangle(rect: &ResolvedRectangle) -> Self {
        Self {
            x1: quantize(rect.offset_x),
            y1: quantize(rect.offset_y),
            x2: quantize(rect.offset_x + rect.width),
            y2: quantize(rect.offset_y + rect.height),
        }
    }

    /// Returns `true` when the origin sits at `(0, 0)`.
    pub fn is_anchored_at_origin(&self) -> bool {
        self.x1 == 0 && self.y1 == 0
    }
}

impl fmt::Display for DeviceAreaCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x1, self.y1, self.x2, self.y2)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
