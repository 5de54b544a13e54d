// PidScope - app/mod.rs
//
// Application orchestration layer: input sources and the driver loop.
// Owns all I/O; the classification logic it drives lives in core.

pub mod monitor;
pub mod source;
