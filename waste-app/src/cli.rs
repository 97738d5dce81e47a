//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use waste_core::{Config, InitError, RedrawMode};

#[derive(Parser, Debug)]
#[command(name = "waste", version, about = "Counts the seconds you spend looking at it")]
pub struct Cli {
    /// Start with the music paused (press M to toggle).
    #[arg(short, long)]
    pub mute: bool,

    /// Read configuration from this TOML file instead of the per-user one.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the font and music files.
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// When to repaint the window.
    #[arg(long, value_enum)]
    pub redraw: Option<RedrawArg>,

    /// Frame rate cap in every-frame mode (0 = uncapped).
    #[arg(long)]
    pub fps: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RedrawArg {
    EveryFrame,
    OnChange,
}

impl From<RedrawArg> for RedrawMode {
    fn from(arg: RedrawArg) -> Self {
        match arg {
            RedrawArg::EveryFrame => RedrawMode::EveryFrame,
            RedrawArg::OnChange => RedrawMode::OnChange,
        }
    }
}

impl Cli {
    /// Load the configuration file and lay the flags over it.
    pub fn resolve(&self) -> Result<Config, InitError> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(dir) = &self.assets {
            config.rebase_assets(dir);
        }
        if let Some(redraw) = self.redraw {
            config.redraw = redraw.into();
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        config.muted |= self.mute;

        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }
}
