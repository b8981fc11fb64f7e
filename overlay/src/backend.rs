//! Render backend seam
//!
//! The overlay core computes geometry and text draw commands; the host's
//! renderer owns the pixels. Keeping text measurement on its own trait lets
//! the layout engine stay a pure function that is testable without a real
//! backend.

use uniquefinder_types::{RectF, Rgba, Vec2};

/// Horizontal text alignment relative to the draw position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

pub trait TextMeasurer {
    /// Width and height of `text` in the backend's panel font, unscaled.
    fn measure_text(&self, text: &str) -> (f32, f32);
}

/// Draw commands the overlay emits once per frame.
pub trait RenderBackend: TextMeasurer {
    fn draw_box(&mut self, rect: RectF, color: Rgba);
    fn draw_frame(&mut self, rect: RectF, color: Rgba, thickness: f32);
    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba);
    /// `scale` applies for the duration of this call only (the scoped
    /// text-scale adjustment).
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Rgba, align: TextAlign, scale: f32);
}
