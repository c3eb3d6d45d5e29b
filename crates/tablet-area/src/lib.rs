//! tablet-area library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does tablet-area do? (for beginners)
//!
//! A pen tablet maps its drawing surface onto the screen.  When the surface
//! and the screen have different aspect ratios, strokes come out stretched:
//! a circle drawn on the tablet appears as an ellipse.  The fix is to use
//! only part of the tablet, the *active area*, with the screen's proportions.
//!
//! A run of the binary:
//!
//! 1. Validates the size flags (`--width`, `--height` or `--full`) before
//!    touching anything.
//! 2. Picks the device: the one given with `--device`, or the first stylus
//!    (then pad) whose `Area` can be set.
//! 3. Resets the device to its default area and reads it back; that is the
//!    tablet size.  `--device-area` skips this step.
//! 4. Computes, aligns and rounds the active area (`tablet-area-core`).
//! 5. Writes it to the device with `xsetwacom --set <device> Area ...`.

/// Application layer: use cases and the device utility trait.
pub mod application;

/// Infrastructure layer: `xsetwacom` adapter, in-memory fake and config file.
pub mod infrastructure;
