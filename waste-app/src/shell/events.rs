//! Winit event handling.
//!
//! Keybindings:
//!   M      → toggle music
//!   (close) → quit

use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;

use super::app::WasteApp;

pub fn handle_window_event(app: &mut WasteApp, event_loop: &ActiveEventLoop, event: WindowEvent) {
    match event {
        // ── Window lifecycle ──────────────────────────────────────
        WindowEvent::CloseRequested => {
            tracing::info!("Window close requested");
            event_loop.exit();
        }

        WindowEvent::Resized(new_size) => app.resize(new_size),

        WindowEvent::ScaleFactorChanged { .. } | WindowEvent::Occluded(false) => {
            app.request_redraw();
        }

        // ── Keyboard ─────────────────────────────────────────────
        WindowEvent::KeyboardInput { event, .. } => {
            if event.state != ElementState::Pressed || event.repeat {
                return;
            }
            if is_mute_key(&event.logical_key) {
                app.toggle_mute();
            }
        }

        // ── Redraw ───────────────────────────────────────────────
        WindowEvent::RedrawRequested => app.redraw(),

        _ => {}
    }
}

/// `M`, with or without Shift / Caps Lock.
pub fn is_mute_key(key: &Key) -> bool {
    matches!(key, Key::Character(c) if c.eq_ignore_ascii_case("m"))
}
