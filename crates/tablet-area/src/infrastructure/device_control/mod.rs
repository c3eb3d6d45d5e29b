//! [`DeviceControl`](crate::application::device_control::DeviceControl)
//! implementations.
//!
//! | Implementation        | Backend                                   |
//! |-----------------------|-------------------------------------------|
//! | `XsetwacomControl`    | `xsetwacom` child processes               |
//! | `FakeDeviceControl`   | in-memory device table, records each call |

pub mod fake;
pub mod xsetwacom;

pub use fake::{DeviceCall, FakeDeviceControl};
pub use xsetwacom::XsetwacomControl;
