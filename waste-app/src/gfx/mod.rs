//! GPU Rendering Subsystem.
//!
//! Sub-modules:
//!   renderer — wgpu device/surface lifecycle, frame orchestration
//!   text     — glyphon text: the bundled font and the three lines on screen

mod renderer;
mod text;

pub use renderer::GpuState;
pub use text::TextEngine;
