//! Domain entities for tablet-area.
//!
//! This module contains the geometry engine and nothing else: no process
//! invocation, no config files, no terminal output.  The application crate
//! feeds it values obtained from the device utility and hands the resulting
//! [`quantize::DeviceAreaCommand`] back to the utility.
//!
//! # Pipeline
//!
//! ```text
//! Length ──(units)──▶ ActiveAreaRequest
//!                           │
//! TabletArea + AspectRatio ─┴─(resolve)──▶ ActiveAreaSize
//!                                              │
//!                         Alignment ──(align)──▶ ResolvedRectangle
//!                                              │
//!                                   (quantize)──▶ DeviceAreaCommand
//!                                              │
//!                                   (bounds)───▶ validated command
//! ```

/// Nine-position alignment table.
pub mod alignment;

/// Tablet area, aspect ratio, and their textual forms.
pub mod area;

/// Post-quantization bounds check.
pub mod bounds;

/// Typed device record produced at the discovery boundary.
pub mod device;

/// The full pipeline, see [`geometry::compute_active_area`].
pub mod geometry;

/// Half-up rounding into device coordinates.
pub mod quantize;

/// What the user asked for: full area, or one explicit dimension.
pub mod request;

/// Size resolution from request + aspect ratio.
pub mod resolve;

/// Physical length units and their conversion to device lines.
pub mod units;
