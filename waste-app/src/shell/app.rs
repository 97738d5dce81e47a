//! Application state and winit event loop.
//!
//! Bring-up order: event loop, window, GPU + fonts, audio. Any failure is
//! parked in `failure`, the loop exits, and `run` hands it back to `main`.
//! Everything already acquired is released by drop, in reverse order of
//! the fields below.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use waste_core::{
    Config, FramePacer, InitError, Layout, MuteSwitch, Playback, RedrawMode, WasteCounter,
};

use crate::audio::Jukebox;
use crate::gfx::GpuState;

/// The Waste application. Owns all state.
pub struct WasteApp {
    // ── Window + GPU ──
    gpu: Option<GpuState>,
    window: Option<Arc<Window>>,

    // ── Audio ──
    jukebox: Option<Jukebox>,
    mute: MuteSwitch,

    // ── Counter + frame timing ──
    counter: WasteCounter,
    pacer: FramePacer,
    layout: Layout,
    frame_started: Instant,
    dirty: bool,

    config: Config,
    failure: Option<InitError>,
}

impl WasteApp {
    pub fn new(config: Config) -> Self {
        let now = Instant::now();
        Self {
            gpu: None,
            window: None,
            jukebox: None,
            mute: MuteSwitch::new(config.muted),
            counter: WasteCounter::start(now),
            pacer: FramePacer::from_fps(config.fps),
            layout: Layout::new(config.width, config.height),
            frame_started: now,
            dirty: true,
            config,
            failure: None,
        }
    }

    pub fn count(&self) -> u64 {
        self.counter.count()
    }

    pub fn is_muted(&self) -> bool {
        self.mute.is_muted()
    }

    /// Request a window redraw.
    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    pub fn toggle_mute(&mut self) {
        if let Some(jukebox) = &mut self.jukebox {
            self.mute.toggle(jukebox);
        }
    }

    pub fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(size);
        }
        self.dirty = true;
        self.request_redraw();
    }

    /// Draw one frame.
    pub fn redraw(&mut self) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        self.frame_started = Instant::now();
        let scale = self
            .window
            .as_ref()
            .map(|w| w.scale_factor() as f32)
            .unwrap_or(1.0);

        match gpu.render_frame(&self.layout, scale) {
            Ok(true) => self.dirty = false,
            Ok(false) => {}
            Err(e) => tracing::error!("Render failed: {:#}", e),
        }
    }

    /// Advance the counter and re-shape its text when it moved.
    fn tick(&mut self, now: Instant) {
        if let Some(count) = self.counter.tick(now) {
            if let Some(gpu) = &mut self.gpu {
                gpu.text.set_counter(&self.counter.label());
            }
            tracing::debug!(count, "Counter advanced");
            self.dirty = true;
        }
    }

    fn bring_up(&mut self, event_loop: &ActiveEventLoop) -> Result<(), InitError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| InitError::Window(e.to_string()))?,
        );

        let gpu = GpuState::new(window.clone(), &self.config)?;
        let mut jukebox = Jukebox::open(&self.config.music_path)?;
        tracing::info!("Window + GPU + audio initialized");

        jukebox.play(&self.mute);
        self.counter = WasteCounter::start(Instant::now());

        self.gpu = Some(gpu);
        self.window = Some(window);
        self.jukebox = Some(jukebox);
        self.request_redraw();
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════
// ApplicationHandler (winit 0.30)
// ════════════════════════════════════════════════════════════════════

impl ApplicationHandler for WasteApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.failure.is_some() {
            return;
        }

        if let Err(e) = self.bring_up(event_loop) {
            tracing::error!("Start-up failed: {}", e);
            self.failure = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        super::events::handle_window_event(self, event_loop, event);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }

        let now = Instant::now();
        self.tick(now);

        match self.config.redraw {
            RedrawMode::EveryFrame => match self.pacer.remaining(self.frame_started, now) {
                Some(left) => event_loop.set_control_flow(ControlFlow::WaitUntil(now + left)),
                None => {
                    self.request_redraw();
                    event_loop.set_control_flow(ControlFlow::Wait);
                }
            },
            RedrawMode::OnChange => {
                if self.dirty {
                    self.request_redraw();
                }
                event_loop.set_control_flow(ControlFlow::WaitUntil(self.counter.next_due()));
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(jukebox) = &mut self.jukebox {
            jukebox.pause();
        }
        tracing::info!(seconds = self.counter.count(), "Shutting down");
    }
}

// ════════════════════════════════════════════════════════════════════
// Entry Point
// ════════════════════════════════════════════════════════════════════

/// Run the application until the window is closed.
pub fn run(config: Config) -> Result<(), InitError> {
    tracing::info!(
        "Waste v{} starting ({:?}, muted: {})",
        env!("CARGO_PKG_VERSION"),
        config.redraw,
        config.muted
    );

    let event_loop = EventLoop::new().map_err(|e| InitError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = WasteApp::new(config);
    event_loop
        .run_app(&mut app)
        .map_err(|e| InitError::EventLoop(e.to_string()))?;

    match app.failure.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
