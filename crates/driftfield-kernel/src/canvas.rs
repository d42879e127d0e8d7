//! CPU trail canvas.
//!
//! An RGBA8 pixel buffer the presenter uploads as a texture each frame.
//! The canvas is never cleared: each frame starts with a low-opacity fill
//! toward the background color, so recent motion stays faintly visible for a
//! few frames, then one line segment is blended per particle.

use driftfield_common::{Rgba, SurfaceSize, BACKGROUND};
use glam::Vec2;

/// Opacity of the per-frame background fill that produces the fading trail.
pub const FADE_ALPHA: f32 = 0.05;

/// RGBA8 drawing surface for motion trails.
#[derive(Debug, Clone)]
pub struct TrailCanvas {
    size: SurfaceSize,
    pixels: Vec<Rgba>,
}

impl TrailCanvas {
    /// Creates a canvas filled with the background color.
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            pixels: vec![BACKGROUND; size.area() as usize],
        }
    }

    /// Discards the contents and rebuilds the canvas for a new surface size.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.pixels.clear();
        self.pixels.resize(size.area() as usize, BACKGROUND);
    }

    /// Blends every pixel toward the background color by `alpha`.
    ///
    /// This is the trail effect: the previous frame is only partially erased.
    pub fn fade(&mut self, alpha: f32) {
        for pixel in &mut self.pixels {
            *pixel = pixel.blend_toward(BACKGROUND, alpha);
        }
    }

    /// Blends a one-pixel-wide line segment from `from` to `to`.
    ///
    /// Pixels outside the surface are skipped; segments are short (a particle
    /// moves at most a couple of pixels per frame), so a simple DDA walk is
    /// enough.
    pub fn draw_segment(&mut self, from: Vec2, to: Vec2, color: Rgba, alpha: f32) {
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let p = from + delta * (i as f32 / steps as f32);
            self.blend_pixel(p.x.floor() as i64, p.y.floor() as i64, color, alpha);
        }
    }

    /// Blends a single pixel; out-of-bounds coordinates are ignored.
    fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba, alpha: f32) {
        if x < 0 || y < 0 || x >= i64::from(self.size.width) || y >= i64::from(self.size.height) {
            return;
        }
        let index = y as usize * self.size.width as usize + x as usize;
        self.pixels[index] = self.pixels[index].blend_toward(color, alpha);
    }

    /// The pixel at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(self.pixels[y as usize * self.size.width as usize + x as usize])
    }

    /// Canvas dimensions.
    #[must_use]
    pub const fn size(&self) -> SurfaceSize {
        self.size
    }

    /// The pixel buffer as raw bytes, row-major RGBA8.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftfield_common::BLUE;

    #[test]
    fn test_new_canvas_is_background() {
        let canvas = TrailCanvas::new(SurfaceSize::new(8, 4));
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(canvas.pixel(x, y), Some(BACKGROUND));
            }
        }
    }

    #[test]
    fn test_byte_length_matches_area() {
        let canvas = TrailCanvas::new(SurfaceSize::new(8, 4));
        assert_eq!(canvas.as_bytes().len(), 8 * 4 * 4);
    }

    #[test]
    fn test_draw_segment_touches_pixels() {
        let mut canvas = TrailCanvas::new(SurfaceSize::new(16, 16));
        canvas.draw_segment(Vec2::new(2.0, 2.0), Vec2::new(6.0, 2.0), BLUE, 1.0);
        for x in 2..=6 {
            assert_eq!(canvas.pixel(x, 2), Some(BLUE));
        }
        assert_eq!(canvas.pixel(8, 2), Some(BACKGROUND));
    }

    #[test]
    fn test_draw_segment_blends_by_alpha() {
        let mut canvas = TrailCanvas::new(SurfaceSize::new(4, 4));
        canvas.draw_segment(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), BLUE, 0.5);
        let px = canvas.pixel(1, 1).expect("in bounds");
        assert_ne!(px, BACKGROUND);
        assert_ne!(px, BLUE);
    }

    #[test]
    fn test_draw_segment_out_of_bounds_is_ignored() {
        let mut canvas = TrailCanvas::new(SurfaceSize::new(4, 4));
        canvas.draw_segment(Vec2::new(-10.0, -10.0), Vec2::new(-2.0, -2.0), BLUE, 1.0);
        canvas.draw_segment(Vec2::new(10.0, 1.0), Vec2::new(20.0, 1.0), BLUE, 1.0);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), Some(BACKGROUND));
            }
        }
    }

    #[test]
    fn test_fade_converges_toward_background() {
        let mut canvas = TrailCanvas::new(SurfaceSize::new(4, 4));
        canvas.draw_segment(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), BLUE, 1.0);
        for _ in 0..400 {
            canvas.fade(FADE_ALPHA);
        }
        // 8-bit blending stalls once the per-channel step rounds to zero, so
        // the trail settles within blending resolution of the background.
        let px = canvas.pixel(1, 1).expect("in bounds");
        assert!(i16::from(px.r).abs_diff(i16::from(BACKGROUND.r)) <= 10);
        assert!(i16::from(px.g).abs_diff(i16::from(BACKGROUND.g)) <= 10);
        assert!(i16::from(px.b).abs_diff(i16::from(BACKGROUND.b)) <= 10);
    }

    #[test]
    fn test_fade_keeps_recent_trail_visible() {
        let mut canvas = TrailCanvas::new(SurfaceSize::new(4, 4));
        canvas.draw_segment(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), BLUE, 1.0);
        canvas.fade(FADE_ALPHA);
        assert_ne!(canvas.pixel(1, 1), Some(BACKGROUND));
    }

    #[test]
    fn test_resize_rebuilds_contents() {
        let mut canvas = TrailCanvas::new(SurfaceSize::new(4, 4));
        canvas.draw_segment(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), BLUE, 1.0);
        canvas.resize(SurfaceSize::new(8, 8));
        assert_eq!(canvas.size(), SurfaceSize::new(8, 8));
        assert_eq!(canvas.pixel(1, 1), Some(BACKGROUND));
    }

    #[test]
    fn test_zero_size_canvas() {
        let mut canvas = TrailCanvas::new(SurfaceSize::ZERO);
        assert!(canvas.as_bytes().is_empty());
        canvas.fade(FADE_ALPHA);
        canvas.draw_segment(Vec2::ZERO, Vec2::new(1.0, 1.0), BLUE, 1.0);
        assert_eq!(canvas.pixel(0, 0), None);
    }
}
