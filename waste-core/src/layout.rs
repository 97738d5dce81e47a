//! Screen placement of the three text lines.

/// Distance from the top edge to the upper line, and from the bottom edge
/// to the lower line.
pub const TEXT_MARGIN: i32 = 210;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Window dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub margin: i32,
}

impl Layout {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_margin(width, height, TEXT_MARGIN)
    }

    pub fn with_margin(width: u32, height: u32, margin: i32) -> Self {
        Self {
            width: clamp_dim(width),
            height: clamp_dim(height),
            margin,
        }
    }

    fn center_x(&self, w: i32) -> i32 {
        self.width / 2 - w / 2
    }

    /// "You just wasted", `margin` pixels below the top edge.
    pub fn upper(&self, w: i32, h: i32) -> Rect {
        Rect::new(self.center_x(w), self.margin, w, h)
    }

    /// "seconds of your life.", its bottom edge `margin` pixels above the
    /// bottom of the window.
    pub fn lower(&self, w: i32, h: i32) -> Rect {
        Rect::new(self.center_x(w), self.height - self.margin - h, w, h)
    }

    /// The counter, centered on both axes.
    pub fn counter(&self, w: i32, h: i32) -> Rect {
        Rect::new(self.center_x(w), self.height / 2 - h / 2, w, h)
    }
}

fn clamp_dim(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
