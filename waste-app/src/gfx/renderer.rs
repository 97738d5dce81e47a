//! wgpu device/surface lifecycle and per-frame orchestration.
//!
//! GpuState owns the device, queue, surface, and config. It acquires the
//! swapchain texture each frame, clears it to white and hands the pass to
//! the text engine.

use std::sync::Arc;

use anyhow::{Context, anyhow};
use wgpu::{
    Backends, CompositeAlphaMode, Device, DeviceDescriptor, Instance, InstanceDescriptor,
    PowerPreference, Queue, RequestAdapterOptions, Surface, SurfaceConfiguration, TextureUsages,
    TextureViewDescriptor,
};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use waste_core::{Config, InitError, Layout};

use super::text::TextEngine;

const CLEAR_COLOR: wgpu::Color = wgpu::Color::WHITE;

/// Owns all GPU state. Created once per window.
pub struct GpuState {
    // Text resources are released before the device and surface.
    pub text: TextEngine,

    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
}

impl GpuState {
    /// Initialize wgpu for `window` and load the fonts. Blocks until the
    /// adapter is ready.
    pub fn new(window: Arc<Window>, settings: &Config) -> Result<Self, InitError> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let (surface, device, queue, config) = configure_surface(window, width, height)
            .map_err(|e| InitError::Renderer(format!("{e:#}")))?;
        let text = TextEngine::new(&device, &queue, config.format, settings)?;

        Ok(Self {
            text,
            surface,
            device,
            queue,
            config,
        })
    }

    /// Handle window resize.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Render a frame. Returns Ok(true) if a frame was presented, Ok(false) if skipped.
    pub fn render_frame(&mut self, layout: &Layout, scale: f32) -> anyhow::Result<bool> {
        let output = match self.surface.get_current_texture() {
            Ok(tex) => tex,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(false);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(anyhow!("GPU out of memory"));
            }
            Err(e) => {
                tracing::warn!("Surface error: {:?}", e);
                return Ok(false);
            }
        };

        let view = output
            .texture
            .create_view(&TextureViewDescriptor::default());

        if let Err(e) = self.text.prepare(
            &self.device,
            &self.queue,
            layout,
            scale,
            [self.config.width, self.config.height],
        ) {
            tracing::warn!("Text prepare failed: {:#}", e);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let Err(e) = self.text.draw(&mut pass) {
                tracing::warn!("Text render failed: {:#}", e);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.text.trim();

        Ok(true)
    }
}

fn configure_surface(
    window: Arc<Window>,
    width: u32,
    height: u32,
) -> anyhow::Result<(Surface<'static>, Device, Queue, SurfaceConfiguration)> {
    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::all(),
        ..Default::default()
    });

    let surface = instance
        .create_surface(window)
        .context("creating window surface")?;

    let adapter = pollster::block_on(instance.request_adapter(&RequestAdapterOptions {
        power_preference: PowerPreference::default(),
        compatible_surface: Some(&surface),
        force_fallback_adapter: false,
    }))
    .context("no suitable GPU adapter found")?;

    tracing::info!(
        "GPU adapter: {} ({:?})",
        adapter.get_info().name,
        adapter.get_info().backend
    );

    let (device, queue) = pollster::block_on(adapter.request_device(&DeviceDescriptor {
        label: Some("waste-device"),
        required_features: wgpu::Features::empty(),
        required_limits: wgpu::Limits::downlevel_webgl2_defaults()
            .using_resolution(adapter.limits()),
        ..Default::default()
    }))
    .context("requesting GPU device")?;

    let surface_caps = surface.get_capabilities(&adapter);
    let format = surface_caps
        .formats
        .iter()
        .find(|f| f.is_srgb())
        .or_else(|| surface_caps.formats.first())
        .copied()
        .ok_or_else(|| anyhow!("surface is not supported by the adapter"))?;

    let config = SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(CompositeAlphaMode::Auto),
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    Ok((surface, device, queue, config))
}
