//! Particle state and per-frame update.
//!
//! A particle is an ephemeral visual entity: it drifts along the flow field
//! for a bounded lifetime, then respawns in place at a fresh random position.
//! Speed, color, alpha, and lifetime are fixed at spawn and only redrawn on
//! respawn, so the respawn operation is the single source of randomness in
//! the simulation.

use driftfield_common::{Rgba, SurfaceSize, PALETTE};
use glam::Vec2;

use crate::field::field_angle;

/// Minimum spawn speed in pixels per frame.
pub const SPEED_MIN: f32 = 0.5;

/// Width of the uniform spawn-speed range.
pub const SPEED_RANGE: f32 = 1.5;

/// Minimum spawn alpha.
pub const ALPHA_MIN: f32 = 0.1;

/// Width of the uniform spawn-alpha range.
pub const ALPHA_RANGE: f32 = 0.3;

/// Spawn lifetime range in frames (half-open).
pub const LIFE_RANGE: std::ops::Range<i32> = 100..300;

/// A single flow-field particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current location in surface coordinates.
    pub position: Vec2,
    /// Location one frame prior; the trail segment is drawn from here.
    pub previous: Vec2,
    /// Per-frame travel distance, fixed at spawn.
    pub speed: f32,
    /// Trail color, fixed at spawn.
    pub color: Rgba,
    /// Trail opacity, fixed at spawn.
    pub alpha: f32,
    /// Frames left until respawn; counts down every frame.
    pub remaining_life: i32,
}

impl Particle {
    /// Spawns a new particle at a random position on the surface.
    #[must_use]
    pub fn spawn(rng: &mut fastrand::Rng, size: SurfaceSize) -> Self {
        let mut particle = Self {
            position: Vec2::ZERO,
            previous: Vec2::ZERO,
            speed: 0.0,
            color: PALETTE[0],
            alpha: 0.0,
            remaining_life: 0,
        };
        particle.respawn(rng, size);
        particle
    }

    /// Resets the particle in place: fresh random position, previous set to
    /// match, and speed/color/alpha/lifetime redrawn from their ranges.
    pub fn respawn(&mut self, rng: &mut fastrand::Rng, size: SurfaceSize) {
        self.position = Vec2::new(
            rng.f32() * size.width as f32,
            rng.f32() * size.height as f32,
        );
        self.previous = self.position;
        self.speed = SPEED_MIN + rng.f32() * SPEED_RANGE;
        self.color = PALETTE[rng.usize(..PALETTE.len())];
        self.alpha = ALPHA_MIN + rng.f32() * ALPHA_RANGE;
        self.remaining_life = rng.i32(LIFE_RANGE);
    }

    /// Advances the particle by one frame at field time `t`.
    ///
    /// Decrements the lifetime and respawns when it goes negative; otherwise
    /// records the previous position, steers along the field, and wraps
    /// toroidally. A wrap also resets the previous position so no trail
    /// segment spans the surface.
    pub fn update(&mut self, rng: &mut fastrand::Rng, size: SurfaceSize, t: f64) {
        self.remaining_life -= 1;
        if self.remaining_life < 0 {
            self.respawn(rng, size);
            return;
        }

        self.previous = self.position;
        let angle = field_angle(self.position.x, self.position.y, t);
        self.position += Vec2::new(angle.cos(), angle.sin()) * self.speed;

        let (wrapped, crossed) = size.wrap(self.position);
        if crossed {
            self.position = wrapped;
            self.previous = wrapped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: SurfaceSize = SurfaceSize::new(800, 600);

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(42)
    }

    #[test]
    fn test_spawn_attributes_in_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let p = Particle::spawn(&mut rng, SIZE);
            assert!(SIZE.contains(p.position));
            assert_eq!(p.previous, p.position);
            assert!(p.speed >= SPEED_MIN && p.speed < SPEED_MIN + SPEED_RANGE);
            assert!(p.alpha >= ALPHA_MIN && p.alpha < ALPHA_MIN + ALPHA_RANGE);
            assert!(LIFE_RANGE.contains(&p.remaining_life));
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_update_decrements_life() {
        let mut rng = rng();
        let mut p = Particle::spawn(&mut rng, SIZE);
        let life = p.remaining_life;
        p.update(&mut rng, SIZE, 16.0);
        assert_eq!(p.remaining_life, life - 1);
    }

    #[test]
    fn test_life_never_observed_negative() {
        let mut rng = rng();
        let mut p = Particle::spawn(&mut rng, SIZE);
        p.remaining_life = 0;
        p.update(&mut rng, SIZE, 16.0);
        assert!(LIFE_RANGE.contains(&p.remaining_life));
    }

    #[test]
    fn test_respawn_resets_previous_and_skips_movement() {
        let mut rng = rng();
        let mut p = Particle::spawn(&mut rng, SIZE);
        p.remaining_life = 0;
        p.update(&mut rng, SIZE, 16.0);
        assert_eq!(p.previous, p.position);
    }

    #[test]
    fn test_update_records_previous_position() {
        let mut rng = rng();
        let mut p = Particle::spawn(&mut rng, SIZE);
        // Keep it away from the edges so no wrap occurs
        p.position = Vec2::new(400.0, 300.0);
        p.previous = p.position;
        let before = p.position;
        p.update(&mut rng, SIZE, 16.0);
        assert_eq!(p.previous, before);
        assert_ne!(p.position, before);
    }

    #[test]
    fn test_step_length_matches_speed() {
        let mut rng = rng();
        let mut p = Particle::spawn(&mut rng, SIZE);
        p.position = Vec2::new(400.0, 300.0);
        p.previous = p.position;
        p.update(&mut rng, SIZE, 16.0);
        let travelled = p.position.distance(p.previous);
        assert!((travelled - p.speed).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_right_edge_resets_previous() {
        let mut rng = rng();
        let mut p = Particle::spawn(&mut rng, SIZE);
        // Force an eastbound crossing: at x = w - 0.1 with the maximum speed,
        // any angle with cos > 0.1 / speed crosses the boundary. Pick a field
        // time and position where the angle is ~0 (origin at t = 0).
        p.position = Vec2::new(SIZE.width as f32 - 0.1, 0.0);
        p.previous = p.position;
        p.speed = 2.0;
        p.remaining_life = 100;
        p.update(&mut rng, SIZE, 0.0);
        assert!(p.position.x < 2.0, "expected wrap to ~0, got {}", p.position.x);
        assert!(SIZE.contains(p.position));
        assert_eq!(p.previous, p.position);
    }

    #[test]
    fn test_positions_stay_in_bounds_over_many_frames() {
        let mut rng = rng();
        let mut p = Particle::spawn(&mut rng, SIZE);
        let mut t = 0.0;
        for _ in 0..5000 {
            t += 16.0;
            p.update(&mut rng, SIZE, t);
            assert!(SIZE.contains(p.position));
        }
    }
}
