//! Application layer use cases for tablet-area.
//!
//! # What use cases are there?
//!
//! - **`select_device`** – Finds the device whose area will be changed: either
//!   the one named on the command line (which must accept an `Area` query) or
//!   the first stylus, then pad, with a settable area.
//!
//! - **`configure_area`** – Measures the tablet, runs the geometry pipeline
//!   from `tablet-area-core` and writes the result.  Split into `plan` and
//!   `apply` so the binary can echo the equivalent command in between.
//!
//! Both talk to the outside world only through the [`device_control::DeviceControl`]
//! trait, implemented in the infrastructure layer.

pub mod configure_area;
pub mod device_control;
pub mod select_device;
