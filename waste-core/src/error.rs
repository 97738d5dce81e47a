//! Fatal start-up failures.
//!
//! Every variant carries the underlying library's message. The rendered
//! text is `"<what failed> (<why>)"`, which is what ends up both on stderr
//! and in the error dialog.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("Can't load configuration ({0})")]
    Config(#[from] ConfigError),

    #[error("Can't init event loop ({0})")]
    EventLoop(String),

    #[error("Can't create window ({0})")]
    Window(String),

    #[error("Can't create renderer ({0})")]
    Renderer(String),

    #[error("Can't load required fonts ({0})")]
    Fonts(String),

    #[error("Can't open audio device ({0})")]
    AudioDevice(String),

    #[error("Can't load required sounds ({0})")]
    Music(String),
}

impl InitError {
    /// Process exit status for any initialization failure.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
