//! Mute state for the background track.

/// Something that can be paused and resumed. Implemented by the audio sink.
pub trait Playback {
    fn pause(&mut self);
    fn resume(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MuteSwitch {
    muted: bool,
}

impl MuteSwitch {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Bring freshly started playback in line with the switch.
    pub fn apply(&self, playback: &mut impl Playback) {
        if self.muted {
            playback.pause();
        }
    }

    /// Flip the switch. Returns the new muted state.
    pub fn toggle(&mut self, playback: &mut impl Playback) -> bool {
        self.muted = !self.muted;
        if self.muted {
            playback.pause();
        } else {
            playback.resume();
        }
        tracing::info!(muted = self.muted, "mute toggled");
        self.muted
    }
}
