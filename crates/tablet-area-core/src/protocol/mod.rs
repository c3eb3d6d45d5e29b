//! Protocol module containing the `xsetwacom` text format.

pub mod xsetwacom;

pub use xsetwacom::ProtocolError;
