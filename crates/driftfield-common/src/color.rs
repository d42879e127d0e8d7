//! RGBA color type and the backdrop palette.
//!
//! Colors are stored as 8-bit RGBA so a full canvas row can be handed to the
//! GPU without conversion. The palette holds the five trail colors particles
//! draw from at spawn, plus the page background used for the fade fill.

use bytemuck::{Pod, Zeroable};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component.
    pub a: u8,
}

impl Rgba {
    /// Creates a new color from all four components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB components.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Blends this color toward `other` by `t` (0.0 keeps self, 1.0 is other).
    #[must_use]
    pub fn blend_toward(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            let v = f32::from(from) + (f32::from(to) - f32::from(from)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Returns the color as normalized f32 components.
    #[must_use]
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

/// Trail color: blue (#3b82f6).
pub const BLUE: Rgba = Rgba::from_rgb(0x3b, 0x82, 0xf6);

/// Trail color: indigo (#6366f1).
pub const INDIGO: Rgba = Rgba::from_rgb(0x63, 0x66, 0xf1);

/// Trail color: purple (#a855f7).
pub const PURPLE: Rgba = Rgba::from_rgb(0xa8, 0x55, 0xf7);

/// Trail color: pink (#ec4899).
pub const PINK: Rgba = Rgba::from_rgb(0xec, 0x48, 0x99);

/// Trail color: teal (#14b8a6).
pub const TEAL: Rgba = Rgba::from_rgb(0x14, 0xb8, 0xa6);

/// The five trail colors particles draw from at spawn.
pub const PALETTE: [Rgba; 5] = [BLUE, INDIGO, PURPLE, PINK, TEAL];

/// Page background color (#fbfbfb), used for the fade fill.
pub const BACKGROUND: Rgba = Rgba::from_rgb(0xfb, 0xfb, 0xfb);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_is_opaque() {
        let c = Rgba::from_rgb(10, 20, 30);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn test_blend_toward_endpoints() {
        let black = Rgba::from_rgb(0, 0, 0);
        let white = Rgba::from_rgb(255, 255, 255);
        assert_eq!(black.blend_toward(white, 0.0), black);
        assert_eq!(black.blend_toward(white, 1.0), white);
    }

    #[test]
    fn test_blend_toward_midpoint() {
        let black = Rgba::from_rgb(0, 0, 0);
        let white = Rgba::from_rgb(255, 255, 255);
        let mid = black.blend_toward(white, 0.5);
        assert!(mid.r >= 127 && mid.r <= 128);
    }

    #[test]
    fn test_blend_toward_clamps_t() {
        let black = Rgba::from_rgb(0, 0, 0);
        let white = Rgba::from_rgb(255, 255, 255);
        assert_eq!(black.blend_toward(white, 2.0), white);
        assert_eq!(black.blend_toward(white, -1.0), black);
    }

    #[test]
    fn test_to_f32_array() {
        let c = Rgba::from_rgb(255, 0, 255);
        let f = c.to_f32_array();
        assert!((f[0] - 1.0).abs() < f32::EPSILON);
        assert!(f[1].abs() < f32::EPSILON);
        assert!((f[3] - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rgba_size() {
        // Canvas rows are cast directly to GPU upload bytes
        assert_eq!(std::mem::size_of::<Rgba>(), 4);
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in PALETTE.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
