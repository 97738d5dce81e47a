//! Background music.
//!
//! One track, decoded from disk and looped forever on its own sink.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{debug, info};
use waste_core::{InitError, MuteSwitch, Playback};

pub struct Jukebox {
    // Sink goes before the stream it plays on.
    sink: Sink,
    _stream_handle: OutputStreamHandle,
    _stream: OutputStream,
}

impl Jukebox {
    /// Open the default output device and queue `path` on an endless loop.
    /// Nothing is audible until [`Jukebox::play`].
    pub fn open(path: &Path) -> Result<Self, InitError> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| InitError::AudioDevice(e.to_string()))?;

        let file = File::open(path)
            .map_err(|e| InitError::Music(format!("{}: {}", path.display(), e)))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| InitError::Music(format!("{}: {}", path.display(), e)))?;

        debug!(
            "Decoded {:?}: {} Hz, {} channels",
            path,
            source.sample_rate(),
            source.channels()
        );

        let sink = Sink::try_new(&stream_handle).map_err(|e| InitError::AudioDevice(e.to_string()))?;
        sink.pause();
        sink.append(source.repeat_infinite());

        Ok(Self {
            sink,
            _stream_handle: stream_handle,
            _stream: stream,
        })
    }

    /// Start the loop, then pause again right away if muted.
    pub fn play(&mut self, mute: &MuteSwitch) {
        self.sink.play();
        mute.apply(self);
        info!(muted = mute.is_muted(), "Music started");
    }
}

impl Playback for Jukebox {
    fn pause(&mut self) {
        self.sink.pause();
    }

    fn resume(&mut self) {
        self.sink.play();
    }
}
