use super::constants::POINTER_DIVISOR;

/// Viewport dimensions in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Drawing-buffer size in device pixels, never zero.
    pub fn buffer_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).round() as u32;
        let h = (self.height * self.pixel_ratio).round() as u32;
        (w.max(1), h.max(1))
    }

    /// Returns true when the dimensions actually changed.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) -> bool {
        let next = Viewport::new(width, height, pixel_ratio);
        if next == *self {
            return false;
        }
        *self = next;
        true
    }
}

/// Pointer displacement from the viewport center, scaled down for camera use.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

#[inline]
pub fn pointer_offset(client_x: f32, client_y: f32, viewport: &Viewport) -> PointerOffset {
    let half_x = viewport.width / 2.0;
    let half_y = viewport.height / 2.0;
    PointerOffset {
        x: (client_x - half_x) / POINTER_DIVISOR,
        y: (client_y - half_y) / POINTER_DIVISOR,
    }
}
