pub mod config;
pub mod counter;
pub mod error;
pub mod layout;
pub mod mute;
pub mod pacing;

// Re-export the main types so the app can just use `waste_core::WasteCounter`
pub use config::{Config, RedrawMode};
pub use counter::WasteCounter;
pub use error::{ConfigError, InitError};
pub use layout::{Layout, Rect};
pub use mute::{MuteSwitch, Playback};
pub use pacing::FramePacer;

/// The three lines of the screen, top to bottom.
pub const UPPER_TEXT: &str = "You just wasted";
pub const LOWER_TEXT: &str = "seconds of your life.";
