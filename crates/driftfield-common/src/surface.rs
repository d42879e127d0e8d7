//! Surface geometry.
//!
//! The drawing surface tracks the window exactly. This module holds the
//! sizing rules derived from it: the particle-density rule used to size the
//! pool and the flow-grid resolution rule, plus toroidal wrap math.

use glam::Vec2;

/// Surface area covered by each particle, in square pixels.
///
/// The pool holds `floor(area / PARTICLE_AREA_DIVISOR)` particles.
pub const PARTICLE_AREA_DIVISOR: u64 = 8000;

/// Size of each flow-grid cell in pixels.
pub const FLOW_CELL_SIZE: u32 = 20;

/// Drawing surface dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Flow-grid resolution derived from the surface size.
///
/// The grid is bookkeeping only: the field is evaluated analytically at each
/// particle's own coordinates, never cached per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowGrid {
    /// Number of grid columns.
    pub columns: u32,
    /// Number of grid rows.
    pub rows: u32,
}

impl SurfaceSize {
    /// An empty surface.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Creates a new surface size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Surface area in square pixels.
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the surface has no drawable area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of particles the surface supports under the density rule.
    #[must_use]
    pub const fn particle_budget(&self) -> usize {
        (self.area() / PARTICLE_AREA_DIVISOR) as usize
    }

    /// Flow-grid resolution for this surface.
    #[must_use]
    pub const fn flow_grid(&self) -> FlowGrid {
        FlowGrid {
            columns: self.width / FLOW_CELL_SIZE + 1,
            rows: self.height / FLOW_CELL_SIZE + 1,
        }
    }

    /// Whether a point lies within the surface bounds (half-open on both axes).
    #[must_use]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width as f32 && p.y >= 0.0 && p.y < self.height as f32
    }

    /// Wraps a point toroidally into the surface bounds.
    ///
    /// Returns the wrapped point and whether any axis crossed a boundary.
    /// The result always satisfies `0 <= x < width` and `0 <= y < height`.
    #[must_use]
    pub fn wrap(&self, p: Vec2) -> (Vec2, bool) {
        if self.is_empty() {
            return (p, false);
        }
        let w = self.width as f32;
        let h = self.height as f32;
        let mut x = p.x.rem_euclid(w);
        let mut y = p.y.rem_euclid(h);
        // rem_euclid of a tiny negative can round back up to the modulus
        if x >= w {
            x = 0.0;
        }
        if y >= h {
            y = 0.0;
        }
        let wrapped = Vec2::new(x, y);
        (wrapped, wrapped != p)
    }
}
