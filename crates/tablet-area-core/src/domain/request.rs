//! The size the user asked for.
//!
//! On the command line `--width`, `--height` and `--full` are mutually
//! exclusive and exactly one of them is required.  [`SizeOptions`] carries the
//! raw flags; [`SizeOptions::into_request`] enforces that rule and converts
//! the explicit dimension into device lines, producing an
//! [`ActiveAreaRequest`] that can no longer be in an invalid state.

use thiserror::Error;

use super::units::{Length, LengthUnit};

/// Configuration errors in the size options.  Raised before any device I/O.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequestError {
    /// More than one of width / height / full was supplied.
    #[error("the following arguments may not be used together: {}", .0.join(", "))]
    Conflicting(Vec<&'static str>),

    /// None of width / height / full was supplied.
    #[error("exactly one of the following arguments must be specified: width, height, full")]
    Missing,

    /// An explicit dimension was zero, negative, or not a finite number.
    #[error("{name} must be a positive number, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A physical unit was used with a resolution of zero lines per inch.
    #[error("device resolution must be greater than zero to convert from {0}")]
    ZeroResolution(LengthUnit),
}

/// Active-area request with explicit dimensions already in device lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveAreaRequest {
    /// Largest area with the screen's aspect ratio that fits the tablet.
    Full,
    /// Explicit width; the height follows from the aspect ratio.
    Width(f64),
    /// Explicit height; the width follows from the aspect ratio.
    Height(f64),
}

/// Raw size flags as supplied by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeOptions {
    pub full: bool,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub unit: LengthUnit,
    /// Device resolution in lines per inch.
    pub resolution: u32,
}

impl SizeOptions {
    /// Validates the flag combination and converts to device lines.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Conflicting`] if more than one of width/height/full is set.
    /// - [`RequestError::Missing`] if none is set.
    /// - [`RequestError::NonPositive`] for a zero, negative or non-finite size.
    /// - [`RequestError::ZeroResolution`] for a physical unit at 0 lpi.
    pub fn into_request(self) -> Result<ActiveAreaRequest, RequestError> {
        let mut given = Vec::new();
        if self.width.is_some() {
            given.push("width");
        }
        if self.height.is_some() {
            given.push("height");
        }
        if self.full {
            given.push("full");
        }
        if given.len() > 1 {
            return Err(RequestError::Conflicting(given));
        }

        match (self.full, self.width, self.height) {
            (true, _, _) => Ok(ActiveAreaRequest::Full),
            (false, Some(width), None) => {
                Ok(ActiveAreaRequest::Width(self.to_lines("width", width)?))
            }
            (false, None, Some(height)) => {
                Ok(ActiveAreaRequest::Height(self.to_lines("height", height)?))
            }
            _ => Err(RequestError::Missing),
        }
    }

    fn to_lines(&self, name: &'static str, value: f64) -> Result<f64, RequestError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(RequestError::NonPositive { name, value });
        }
        if self.unit != LengthUnit::Lines && self.resolution == 0 {
            return Err(RequestError::ZeroResolution(self.unit));
        }
        Ok(Length::new(value, self.unit).to_device_units(self.resolution))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
