//! Persistent storage: the TOML configuration file.

pub mod config;
