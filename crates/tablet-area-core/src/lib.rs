//! # tablet-area-core
//!
//! Geometry engine for fitting a pen tablet's active area to a screen aspect
//! ratio, plus the text protocol spoken by the `xsetwacom` utility.
//!
//! This crate has zero dependencies on processes, files, or the terminal.
//! Everything here is a pure function of its inputs, so the whole pipeline can
//! be exercised in tests without a tablet plugged in.
//!
//! # Architecture overview
//!
//! A tablet reports its addressable surface in device-native units ("lines").
//! Screens are usually a different shape than the tablet, so mapping the full
//! tablet onto the screen would stretch strokes.  The fix is to program a
//! smaller *active area* with the screen's aspect ratio.
//!
//! - **`domain`** – The geometry pipeline:
//!   unit conversion → size resolution → alignment → quantization → bounds
//!   validation.  [`compute_active_area`] runs all stages in order.
//!
//! - **`protocol`** – Parsing and formatting of `xsetwacom` text: device list
//!   lines, `Area` replies, and `Area` arguments.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `tablet_area_core::TabletArea` instead of the full module path.
pub use domain::alignment::{align, Alignment, Anchor, Offset};
pub use domain::area::{ActiveAreaSize, AspectRatio, ParseError, TabletArea};
pub use domain::bounds::{validate, Axis};
pub use domain::device::{DeviceKind, TabletDevice};
pub use domain::geometry::{compute_active_area, ActiveAreaPlan, GeometryError, ResolvedRectangle};
pub use domain::quantize::{quantize, DeviceAreaCommand};
pub use domain::request::{ActiveAreaRequest, RequestError, SizeOptions};
pub use domain::resolve::resolve_size;
pub use domain::units::{Length, LengthUnit};
