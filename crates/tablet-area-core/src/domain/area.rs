//! Tablet area, screen aspect ratio, and the resolved active-area size.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::GeometryError;
use super::quantize::DeviceAreaCommand;

/// Errors raised while parsing user-supplied text into domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not of the form `W:H` with two positive integers.
    #[error("invalid screen aspect ratio: {0} (expected W:H, e.g. 16:9)")]
    AspectRatio(String),

    /// Not of the form `WxH` with two non-negative integers.
    #[error("invalid device area: {0} (expected WxH in lines, e.g. 15200x9500)")]
    DeviceArea(String),

    /// Unit tag outside the supported set.
    #[error("invalid unit: {0} (expected one of in, cm, mm, lines)")]
    Unit(String),

    /// Alignment name outside the nine supported positions.
    #[error(
        "invalid alignment: {0} (expected one of topleft, top, topright, left, center, right, bottomleft, bottom, bottomright)"
    )]
    Alignment(String),
}

/// The full addressable surface of a tablet, in device lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabletArea {
    pub width: u32,
    pub height: u32,
}

impl TabletArea {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` when either dimension is zero.
    ///
    /// Aspect comparisons are meaningless for such an area, so the resolver
    /// rejects it instead of dividing by zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Derives the tablet area from the area a device reports after a reset.
    ///
    /// The far corner `(x2, y2)` is taken as the tablet size.  A negative far
    /// corner cannot describe a real surface.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidReportedArea`] if `x2` or `y2` is
    /// negative or does not fit in a `u32`.
    pub fn from_reported(reported: &DeviceAreaCommand) -> Result<Self, GeometryError> {
        let width = u32::try_from(reported.x2)
            .map_err(|_| GeometryError::InvalidReportedArea(*reported))?;
        let height = u32::try_from(reported.y2)
            .map_err(|_| GeometryError::InvalidReportedArea(*reported))?;
        Ok(Self { width, height })
    }
}

impl fmt::Display for TabletArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for TabletArea {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::DeviceArea(s.to_string());
        let (w, h) = s.split_once('x').ok_or_else(err)?;
        let width = w.trim().parse::<u32>().map_err(|_| err())?;
        let height = h.trim().parse::<u32>().map_err(|_| err())?;
        Ok(Self { width, height })
    }
}

/// Screen aspect ratio, e.g. 16:9.
///
/// Both components are strictly positive; the fields are private so that
/// invariant survives construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AspectRatio {
    horizontal: u32,
    vertical: u32,
}

impl AspectRatio {
    /// Creates an aspect ratio, or `None` if either component is zero.
    pub fn new(horizontal: u32, vertical: u32) -> Option<Self> {
        (horizontal > 0 && vertical > 0).then_some(Self { horizontal, vertical })
    }

    pub fn horizontal(&self) -> u32 {
        self.horizontal
    }

    pub fn vertical(&self) -> u32 {
        self.vertical
    }

    /// `vertical / horizontal`, the factor that turns a width into a height.
    pub fn height_per_width(&self) -> f64 {
        f64::from(self.vertical) / f64::from(self.horizontal)
    }

    /// `horizontal / vertical`, the factor that turns a height into a width.
    pub fn width_per_height(&self) -> f64 {
        f64::from(self.horizontal) / f64::from(self.vertical)
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            horizontal: 16,
            vertical: 9,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.horizontal, self.vertical)
    }
}

impl FromStr for AspectRatio {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::AspectRatio(s.to_string());
        let (h, v) = s.split_once(':').ok_or_else(err)?;
        let horizontal = h.trim().parse::<u32>().map_err(|_| err())?;
        let vertical = v.trim().parse::<u32>().map_err(|_| err())?;
        AspectRatio::new(horizontal, vertical).ok_or_else(err)
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(value: AspectRatio) -> Self {
        value.to_string()
    }
}

/// Active-area extent in (real-valued) device lines, before alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveAreaSize {
    pub width: f64,
    pub height: f64,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── TabletArea ────────────────────────────────────────────────────────────

    #[test]
    fn test_tablet_area_parses_width_x_height() {
        assert_eq!("15200x9500".parse(), Ok(TabletArea::new(15200, 9500)));
    }

    #[test]
    fn test_tablet_area_rejects_missing_separator() {
        assert_eq!(
            "15200".parse::<TabletArea>(),
            Err(ParseError::DeviceArea("15200".to_string()))
        );
    }

    #[test]
    fn test_tablet_area_rejects_fractional_values() {
        assert!("100.5x200".parse::<TabletArea>().is_err());
    }

    #[test]
    fn test_tablet_area_rejects_negative_values() {
        assert!("-100x200".parse::<TabletArea>().is_err());
    }

    #[test]
    fn test_tablet_area_accepts_zero_but_reports_empty() {
        let area: TabletArea = "0x200".parse().unwrap();
        assert!(area.is_empty());
    }

    #[test]
    fn test_tablet_area_display_round_trips_through_from_str() {
        let area = TabletArea::new(21600, 13500);
        assert_eq!(area.to_string().parse(), Ok(area));
    }

    #[test]
    fn test_from_reported_takes_far_corner_as_size() {
        let reported = DeviceAreaCommand::new(0, 0, 15200, 9500);
        assert_eq!(
            TabletArea::from_reported(&reported),
            Ok(TabletArea::new(15200, 9500))
        );
    }

    #[test]
    fn test_from_reported_rejects_negative_far_corner() {
        let reported = DeviceAreaCommand::RESET;
        assert_eq!(
            TabletArea::from_reported(&reported),
            Err(GeometryError::InvalidReportedArea(reported))
        );
    }

    // ── AspectRatio ───────────────────────────────────────────────────────────

    #[test]
    fn test_aspect_ratio_parses_colon_pair() {
        let aspect: AspectRatio = "21:9".parse().unwrap();
        assert_eq!(aspect.horizontal(), 21);
        assert_eq!(aspect.vertical(), 9);
    }

    #[test]
    fn test_aspect_ratio_rejects_zero_component() {
        assert_eq!(
            "16:0".parse::<AspectRatio>(),
            Err(ParseError::AspectRatio("16:0".to_string()))
        );
    }

    #[test]
    fn test_aspect_ratio_rejects_decimal_component() {
        assert!("1.6:1".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_aspect_ratio_rejects_x_separator() {
        assert!("16x9".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_aspect_ratio_new_rejects_zero() {
        assert!(AspectRatio::new(0, 9).is_none());
        assert!(AspectRatio::new(16, 9).is_some());
    }

    #[test]
    fn test_aspect_ratio_default_is_16_by_9() {
        assert_eq!(AspectRatio::default().to_string(), "16:9");
    }

    #[test]
    fn test_aspect_ratio_scale_factors_are_reciprocal() {
        let aspect = AspectRatio::new(16, 10).unwrap();
        assert!((aspect.height_per_width() * aspect.width_per_height() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_aspect_ratio_deserializes_from_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            aspect: AspectRatio,
        }

        let wrapper: Wrapper = toml::from_str(r#"aspect = "4:3""#).expect("deserialize");
        assert_eq!(wrapper.aspect, AspectRatio::new(4, 3).unwrap());
    }

    #[test]
    fn test_aspect_ratio_deserialize_rejects_invalid_string() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            #[allow(dead_code)]
            aspect: AspectRatio,
        }

        let result: Result<Wrapper, _> = toml::from_str(r#"aspect = "wide""#);
        assert!(result.is_err());
    }
}
