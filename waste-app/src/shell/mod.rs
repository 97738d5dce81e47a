//! Application Shell — winit lifecycle, event dispatch, redraw scheduling.
//!
//! The shell owns the winit event loop and the application state. It brings
//! up the window, GPU and audio in order, translates platform events into
//! actions, and decides when the next frame is drawn.

pub(crate) mod app;
mod events;

pub use app::{WasteApp, run};
pub use events::is_mute_key;
