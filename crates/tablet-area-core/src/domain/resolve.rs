//! Size resolution: turns an [`ActiveAreaRequest`] into a concrete extent.

use std::cmp::Ordering;

use super::area::{ActiveAreaSize, AspectRatio, TabletArea};
use super::geometry::GeometryError;
use super::request::ActiveAreaRequest;

/// Resolves the active-area width and height in device lines.
///
/// For [`ActiveAreaRequest::Full`] the screen and tablet aspect ratios are
/// compared.  When the screen is wider the active area spans the full tablet
/// width and the dead zone ends up above and below; when it is narrower the
/// area spans the full height with dead zones left and right.
///
/// The comparison `h/v` vs `W/H` is done as `h*H` vs `W*v` in 64-bit integers
/// so an exact match is detected without floating-point noise.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyTabletArea`] for a full-area request against
/// a tablet with a zero dimension.
pub fn resolve_size(
    request: ActiveAreaRequest,
    tablet: TabletArea,
    aspect: AspectRatio,
) -> Result<ActiveAreaSize, GeometryError> {
    match request {
        ActiveAreaRequest::Full => {
            if tablet.is_empty() {
                return Err(GeometryError::EmptyTabletArea(tablet));
            }
            let screen = u64::from(aspect.horizontal()) * u64::from(tablet.height);
            let surface = u64::from(tablet.width) * u64::from(aspect.vertical());
            let (tw, th) = (f64::from(tablet.width), f64::from(tablet.height));

            Ok(match screen.cmp(&surface) {
                Ordering::Greater => ActiveAreaSize {
                    width: tw,
                    height: tw * aspect.height_per_width(),
                },
                Ordering::Less => ActiveAreaSize {
                    width: th * aspect.width_per_height(),
                    height: th,
                },
                Ordering::Equal => ActiveAreaSize {
                    width: tw,
                    height: th,
                },
            })
        }
        ActiveAreaRequest::Width(width) => Ok(ActiveAreaSize {
            width,
            height: width * aspect.height_per_width(),
        }),
        ActiveAreaRequest::Height(height) => Ok(ActiveAreaSize {
            width: height * aspect.width_per_height(),
            height,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
