//! Physical length units and their conversion into device-native lines.
//!
//! Tablets describe their coordinate space in *lines*; the resolution (lines
//! per inch) ties those lines to physical size.  A user asking for a 120 mm
//! wide area on a 2540 lpi tablet gets `120 / 25.4 * 2540 = 12000` lines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::area::ParseError;

/// Unit of a user-supplied length.
///
/// The set is closed: unrecognised tags are rejected when text is parsed into
/// this enum, so conversion itself can never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Inches.
    In,
    /// Centimetres.
    Cm,
    /// Millimetres.
    #[default]
    Mm,
    /// Device-native lines (identity conversion).
    Lines,
}

impl LengthUnit {
    /// All accepted units, in the order they are listed in help output.
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::In,
        LengthUnit::Cm,
        LengthUnit::Mm,
        LengthUnit::Lines,
    ];

    /// Number of this unit per inch, or `None` for [`LengthUnit::Lines`].
    pub fn per_inch(self) -> Option<f64> {
        match self {
            LengthUnit::In => Some(1.0),
            LengthUnit::Cm => Some(2.54),
            LengthUnit::Mm => Some(25.4),
            LengthUnit::Lines => None,
        }
    }

    /// The tag used on the command line and in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            LengthUnit::In => "in",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Lines => "lines",
        }
    }

    /// Converts `value` expressed in this unit into device lines.
    pub fn to_device_units(self, value: f64, resolution_per_inch: u32) -> f64 {
        match self.per_inch() {
            Some(per_inch) => value / per_inch * f64::from(resolution_per_inch),
            None => value,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LengthUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| ParseError::Unit(s.to_string()))
    }
}

/// A length together with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Converts this length into device lines at the given resolution.
    pub fn to_device_units(self, resolution_per_inch: u32) -> f64 {
        self.unit.to_device_units(self.value, resolution_per_inch)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
