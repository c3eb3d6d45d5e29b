//! The geometry pipeline from request to validated device command.

use thiserror::Error;
use tracing::debug;

use super::alignment::{align, Alignment};
use super::area::{ActiveAreaSize, AspectRatio, TabletArea};
use super::bounds::{validate, Axis};
use super::quantize::DeviceAreaCommand;
use super::request::ActiveAreaRequest;
use super::resolve::resolve_size;

/// Errors produced while computing the active area.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The tablet reported a zero width or height.
    #[error("tablet area {0} is empty; the device did not report a usable size")]
    EmptyTabletArea(TabletArea),

    /// The quantized rectangle leaves the tablet on `axis`.
    #[error("area {axis} is greater than tablet size (by {overflow} lines)")]
    OutOfBounds { axis: Axis, overflow: u64 },

    /// The device reported an area whose far corner is negative.
    #[error("device reported an invalid area: {0}")]
    InvalidReportedArea(DeviceAreaCommand),
}

/// Active area in real-valued device lines, before quantization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRectangle {
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything the pipeline computed, kept for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveAreaPlan {
    pub size: ActiveAreaSize,
    pub rectangle: ResolvedRectangle,
    pub command: DeviceAreaCommand,
}

/// Runs resolve → align → quantize → validate.
///
/// # Errors
///
/// - [`GeometryError::EmptyTabletArea`] for a full-area request on a tablet
///   with a zero dimension.
/// - [`GeometryError::OutOfBounds`] if the quantized rectangle does not fit.
pub fn compute_active_area(
    tablet: TabletArea,
    aspect: AspectRatio,
    request: ActiveAreaRequest,
    alignment: Alignment,
) -> Result<ActiveAreaPlan, GeometryError> {
    let size = resolve_size(request, tablet, aspect)?;
    let offset = align(tablet, size, alignment);
    let rectangle = ResolvedRectangle {
        offset_x: offset.x,
        offset_y: offset.y,
        width: size.width,
        height: size.height,
    };
    let command = DeviceAreaCommand::from_rectangle(&rectangle);

    debug!(
        %tablet, %aspect, %alignment,
        width = size.width, height = size.height,
        offset_x = offset.x, offset_y = offset.y,
        %command,
        "computed active area"
    );

    validate(&command, tablet)?;
    Ok(ActiveAreaPlan {
        size,
        rectangle,
        command,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn aspect_16_9() -> AspectRatio {
        AspectRatio::new(16, 9).unwrap()
    }

    #[test]
    fn test_explicit_width_centred_on_10000_by_6000() {
        // height = 5000 * 9/16 = 2812.5
        // offset_y = (6000 - 2812.5) / 2 = 1593.75 → 1594
        // y2 = 1593.75 + 2812.5 = 4406.25 → 4406
        let plan = compute_active_area(
            TabletArea::new(10000, 6000),
            aspect_16_9(),
            ActiveAreaRequest::Width(5000.0),
            Alignment::Center,
        )
        .unwrap();

        assert_eq!(plan.command, DeviceAreaCommand::new(2500, 1594, 7500, 4406));
        assert!((plan.size.height - 2812.5).abs() < 1e-9);
    }

    #[test]
    fn test_full_area_centred_on_10000_by_6000() {
        // size 10000 x 5625, offset_y = 187.5 → 188, y2 = 5812.5 → 5813
        let plan = compute_active_area(
            TabletArea::new(10000, 6000),
            aspect_16_9(),
            ActiveAreaRequest::Full,
            Alignment::Center,
        )
        .unwrap();

        assert_eq!(plan.command, DeviceAreaCommand::new(0, 188, 10000, 5813));
    }

    #[test]
    fn test_full_area_topleft_starts_at_origin() {
        let plan = compute_active_area(
            TabletArea::new(10000, 6000),
            aspect_16_9(),
            ActiveAreaRequest::Full,
            Alignment::TopLeft,
        )
        .unwrap();

        assert_eq!(plan.command, DeviceAreaCommand::new(0, 0, 10000, 5625));
    }

    #[test]
    fn test_width_larger_than_tablet_is_out_of_bounds() {
        let result = compute_active_area(
            TabletArea::new(10000, 6000),
            aspect_16_9(),
            ActiveAreaRequest::Width(12000.0),
            Alignment::Center,
        );

        assert!(matches!(
            result,
            Err(GeometryError::OutOfBounds { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn test_width_larger_than_tablet_is_rejected_for_right_alignment_too() {
        let result = compute_active_area(
            TabletArea::new(10000, 6000),
            aspect_16_9(),
            ActiveAreaRequest::Width(12000.0),
            Alignment::TopRight,
        );

        assert_eq!(
            result,
            Err(GeometryError::OutOfBounds { axis: Axis::X, overflow: 2000 })
        );
    }

    #[test]
    fn test_height_that_fits_but_derived_width_does_not_is_rejected() {
        // height 6000 on a 16:9 screen needs width 10666.7
        let result = compute_active_area(
            TabletArea::new(10000, 6000),
            aspect_16_9(),
            ActiveAreaRequest::Height(6000.0),
            Alignment::Left,
        );

        assert!(matches!(
            result,
            Err(GeometryError::OutOfBounds { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn test_empty_tablet_surfaces_as_geometry_error() {
        let result = compute_active_area(
            TabletArea::new(10000, 0),
            aspect_16_9(),
            ActiveAreaRequest::Full,
            Alignment::Center,
        );

        assert_eq!(
            result,
            Err(GeometryError::EmptyTabletArea(TabletArea::new(10000, 0)))
        );
    }
}
