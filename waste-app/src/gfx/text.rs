//! Glyphon-based text rendering.
//!
//! Loads the bundled font from disk into an otherwise empty font database
//! and keeps one shaped buffer per line on screen. The two static lines are
//! shaped once; only the counter is re-shaped when its value changes.

use std::path::Path;
use std::sync::Arc;

use glyphon::{
    Attrs, Buffer as GlyphonBuffer, Cache, Color as GColor, Family, FontSystem, Metrics,
    Resolution, Shaping, SwashCache, TextArea, TextAtlas, TextBounds, TextRenderer, Viewport,
    fontdb,
};
use wgpu::{Device, MultisampleState, Queue, RenderPass, TextureFormat};

use waste_core::{Config, InitError, LOWER_TEXT, Layout, Rect, UPPER_TEXT};

const TEXT_COLOR: GColor = GColor::rgb(0, 0, 0);

/// Line height relative to the font size.
const LINE_SPACING: f32 = 1.2;

const FONT_LOCALE: &str = "en-US";

/// The text rendering engine. Wraps glyphon's font system, atlas and the
/// three buffers drawn every frame.
pub struct TextEngine {
    upper: GlyphonBuffer,
    lower: GlyphonBuffer,
    counter: GlyphonBuffer,
    family: String,

    renderer: TextRenderer,
    atlas: TextAtlas,
    viewport: Viewport,
    swash_cache: SwashCache,
    font_system: FontSystem,
}

impl TextEngine {
    pub fn new(
        device: &Device,
        queue: &Queue,
        format: TextureFormat,
        config: &Config,
    ) -> Result<Self, InitError> {
        let mut font_system =
            FontSystem::new_with_locale_and_db(FONT_LOCALE.to_string(), fontdb::Database::new());
        let family = load_font(&mut font_system, &config.font_path)?;
        tracing::info!(family = %family, path = %config.font_path.display(), "Font loaded");

        let normal = metrics(config.normal_font_size);
        let upper = shaped(&mut font_system, normal, &family, UPPER_TEXT);
        let lower = shaped(&mut font_system, normal, &family, LOWER_TEXT);
        let counter = shaped(
            &mut font_system,
            metrics(config.counter_font_size),
            &family,
            "0",
        );

        let swash_cache = SwashCache::new();
        let cache = Cache::new(device);
        let viewport = Viewport::new(device, &cache);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let renderer = TextRenderer::new(&mut atlas, device, MultisampleState::default(), None);

        Ok(Self {
            upper,
            lower,
            counter,
            family,
            renderer,
            atlas,
            viewport,
            swash_cache,
            font_system,
        })
    }

    /// Replace the counter text.
    pub fn set_counter(&mut self, label: &str) {
        self.counter.set_text(
            &mut self.font_system,
            label,
            &Attrs::new().family(Family::Name(&self.family)),
            Shaping::Advanced,
            None,
        );
        self.counter.shape_until_scroll(&mut self.font_system, false);
    }

    /// Where the upper line, lower line and counter land, in logical pixels.
    pub fn placements(&self, layout: &Layout) -> [Rect; 3] {
        let (w, h) = extent(&self.upper);
        let upper = layout.upper(w, h);
        let (w, h) = extent(&self.lower);
        let lower = layout.lower(w, h);
        let (w, h) = extent(&self.counter);
        let counter = layout.counter(w, h);
        [upper, lower, counter]
    }

    /// Upload glyphs for this frame. `viewport` is the surface size in
    /// physical pixels; `scale` converts logical positions to it.
    pub fn prepare(
        &mut self,
        device: &Device,
        queue: &Queue,
        layout: &Layout,
        scale: f32,
        viewport: [u32; 2],
    ) -> anyhow::Result<()> {
        self.viewport.update(
            queue,
            Resolution {
                width: viewport[0],
                height: viewport[1],
            },
        );

        let bounds = TextBounds {
            left: 0,
            top: 0,
            right: viewport[0] as i32,
            bottom: viewport[1] as i32,
        };

        let [upper, lower, counter] = self.placements(layout);
        let areas = [
            (&self.upper, upper),
            (&self.lower, lower),
            (&self.counter, counter),
        ]
        .map(|(buffer, rect)| TextArea {
            buffer,
            left: rect.x as f32 * scale,
            top: rect.y as f32 * scale,
            scale,
            bounds,
            default_color: TEXT_COLOR,
            custom_glyphs: &[],
        });

        self.renderer.prepare(
            device,
            queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            areas,
            &mut self.swash_cache,
        )?;
        Ok(())
    }

    /// Draw what the last `prepare` uploaded.
    pub fn draw(&self, pass: &mut RenderPass<'_>) -> anyhow::Result<()> {
        self.renderer.render(&self.atlas, &self.viewport, pass)?;
        Ok(())
    }

    /// Evict glyphs that were not used this frame.
    pub fn trim(&mut self) {
        self.atlas.trim();
    }
}

/// Read a font file into the database. Returns its family name.
fn load_font(font_system: &mut FontSystem, path: &Path) -> Result<String, InitError> {
    let bytes =
        std::fs::read(path).map_err(|e| InitError::Fonts(format!("{}: {}", path.display(), e)))?;

    let db = font_system.db_mut();
    let ids = db.load_font_source(fontdb::Source::Binary(Arc::new(bytes)));

    ids.iter()
        .filter_map(|id| db.face(*id))
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        .ok_or_else(|| InitError::Fonts(format!("{}: not a usable font file", path.display())))
}

fn metrics(font_size: f32) -> Metrics {
    Metrics::new(font_size, (font_size * LINE_SPACING).ceil())
}

fn shaped(font_system: &mut FontSystem, metrics: Metrics, family: &str, text: &str) -> GlyphonBuffer {
    let mut buffer = GlyphonBuffer::new(font_system, metrics);
    buffer.set_size(font_system, None, None);
    buffer.set_text(
        font_system,
        text,
        &Attrs::new().family(Family::Name(family)),
        Shaping::Advanced,
        None,
    );
    buffer.shape_until_scroll(font_system, false);
    buffer
}

/// Width and height of the shaped text, rounded up to whole pixels.
fn extent(buffer: &GlyphonBuffer) -> (i32, i32) {
    let (w, h) = buffer
        .layout_runs()
        .fold((0.0f32, 0.0f32), |(w, h), run| {
            (w.max(run.line_w), h + run.line_height)
        });
    (w.ceil() as i32, h.ceil() as i32)
}
