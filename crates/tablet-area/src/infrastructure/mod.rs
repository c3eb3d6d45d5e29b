//! Infrastructure layer: adapters behind the application-layer traits.
//!
//! - [`device_control`] – `DeviceControl` implementations: the real
//!   `xsetwacom` process adapter and an in-memory fake.
//! - [`storage`] – TOML configuration file.

pub mod device_control;
pub mod storage;
