//! Waste application library target.
//!
//! Exposes the app's modules for integration tests. The binary entry point
//! is in `main.rs`.

pub mod audio;
pub mod cli;
pub mod report;
pub mod shell;
pub mod util;

mod gfx;
