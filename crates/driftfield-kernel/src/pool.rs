//! Fixed-capacity particle pool.
//!
//! The pool owns every piece of per-frame simulation state: the particles,
//! the field clock, and the spawn RNG. Its cardinality is set by the surface
//! density rule and never changes between resizes; a resize discards the old
//! pool and builds a fresh one atomically before the next frame.

use driftfield_common::{FlowGrid, SurfaceSize};
use tracing::debug;

use crate::canvas::TrailCanvas;
use crate::clock::FieldClock;
use crate::particle::Particle;

/// The particle pool and its simulation state.
#[derive(Debug)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    size: SurfaceSize,
    grid: FlowGrid,
    clock: FieldClock,
    rng: fastrand::Rng,
}

impl ParticlePool {
    /// Creates a pool sized to the surface.
    ///
    /// With `seed` set, every spawn and respawn is reproducible; with `None`
    /// the generator is seeded from entropy.
    #[must_use]
    pub fn new(size: SurfaceSize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let mut pool = Self {
            particles: Vec::new(),
            size: SurfaceSize::ZERO,
            grid: FlowGrid::default(),
            clock: FieldClock::new(),
            rng,
        };
        pool.regenerate(size);
        pool
    }

    /// Discards all particles and builds a fresh pool for the new surface.
    ///
    /// The replacement is atomic with respect to the frame loop: the new pool
    /// is fully built before it becomes visible to the next `step`. A zero
    /// area surface yields an empty pool.
    pub fn regenerate(&mut self, size: SurfaceSize) {
        let budget = size.particle_budget();
        let mut particles = Vec::with_capacity(budget);
        for _ in 0..budget {
            particles.push(Particle::spawn(&mut self.rng, size));
        }
        self.particles = particles;
        self.size = size;
        self.grid = size.flow_grid();
        debug!(
            width = size.width,
            height = size.height,
            particles = budget,
            columns = self.grid.columns,
            rows = self.grid.rows,
            "regenerated particle pool"
        );
    }

    /// Advances the simulation by one frame: ticks the field clock, then
    /// updates every particle against the new time.
    pub fn step(&mut self) {
        let t = self.clock.advance();
        for particle in &mut self.particles {
            particle.update(&mut self.rng, self.size, t);
        }
    }

    /// Draws one trail segment per particle into the canvas.
    pub fn render(&self, canvas: &mut TrailCanvas) {
        for particle in &self.particles {
            canvas.draw_segment(
                particle.previous,
                particle.position,
                particle.color,
                particle.alpha,
            );
        }
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the pool holds no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The particles, in pool order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The surface the pool was generated for.
    #[must_use]
    pub const fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Flow-grid resolution bookkeeping for the current surface.
    ///
    /// Computed on every regeneration but never consumed for spatial lookup;
    /// the field is evaluated analytically per particle.
    #[must_use]
    pub const fn grid(&self) -> FlowGrid {
        self.grid
    }

    /// Current field time.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.clock.time()
    }

    /// Number of frames simulated so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.clock.frames()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TIME_STEP;
    use crate::particle::LIFE_RANGE;

    #[test]
    fn test_pool_count_follows_density_rule() {
        for (w, h) in [(1280, 720), (1920, 1080), (333, 777), (80, 99)] {
            let size = SurfaceSize::new(w, h);
            let pool = ParticlePool::new(size, Some(1));
            assert_eq!(pool.len(), size.particle_budget());
        }
    }

    #[test]
    fn test_empty_surface_yields_empty_pool() {
        let pool = ParticlePool::new(SurfaceSize::ZERO, Some(1));
        assert!(pool.is_empty());
        // The +1 in the grid rule means even an empty surface books one cell
        assert_eq!(pool.grid(), FlowGrid { columns: 1, rows: 1 });
    }

    #[test]
    fn test_regenerate_replaces_pool() {
        let mut pool = ParticlePool::new(SurfaceSize::new(800, 600), Some(1));
        let before = pool.len();
        pool.regenerate(SurfaceSize::new(1600, 1200));
        assert_eq!(pool.len(), SurfaceSize::new(1600, 1200).particle_budget());
        assert_ne!(pool.len(), before);
        assert!(pool
            .particles()
            .iter()
            .all(|p| pool.size().contains(p.position)));
    }

    #[test]
    fn test_regenerate_preserves_clock() {
        let mut pool = ParticlePool::new(SurfaceSize::new(800, 600), Some(1));
        pool.step();
        pool.step();
        pool.regenerate(SurfaceSize::new(400, 300));
        assert_eq!(pool.frames(), 2);
    }

    #[test]
    fn test_step_advances_time_by_fixed_step() {
        let mut pool = ParticlePool::new(SurfaceSize::new(800, 600), Some(1));
        pool.step();
        assert_eq!(pool.time(), TIME_STEP);
        pool.step();
        assert_eq!(pool.time(), TIME_STEP * 2.0);
    }

    #[test]
    fn test_all_positions_in_bounds_after_every_step() {
        let size = SurfaceSize::new(400, 300);
        let mut pool = ParticlePool::new(size, Some(99));
        for _ in 0..1000 {
            pool.step();
            for p in pool.particles() {
                assert!(size.contains(p.position));
                assert!(p.remaining_life >= 0);
                assert!(p.remaining_life < LIFE_RANGE.end);
            }
        }
    }

    #[test]
    fn test_previous_never_stale_by_more_than_one_frame() {
        let size = SurfaceSize::new(400, 300);
        let mut pool = ParticlePool::new(size, Some(5));
        for _ in 0..50 {
            let before: Vec<_> = pool.particles().iter().map(|p| p.position).collect();
            pool.step();
            for (p, old) in pool.particles().iter().zip(&before) {
                // Previous is either last frame's position (normal move) or
                // this frame's position (respawn or wrap reset).
                assert!(p.previous == *old || p.previous == p.position);
            }
        }
    }

    #[test]
    fn test_cardinality_constant_between_resizes() {
        let size = SurfaceSize::new(640, 480);
        let mut pool = ParticlePool::new(size, Some(3));
        let count = pool.len();
        for _ in 0..600 {
            pool.step();
            assert_eq!(pool.len(), count);
        }
    }
}
