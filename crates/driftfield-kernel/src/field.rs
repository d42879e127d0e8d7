//! Analytic flow-field evaluation.
//!
//! The field maps every surface point and time to a steering angle. It is a
//! smooth, slowly evolving function, not a physical simulation and not
//! per-frame noise: nearby particles receive similar angles, and the whole
//! field drifts as time advances.

use std::f64::consts::PI;

/// Spatial frequency of the field on both axes.
pub const SPATIAL_SCALE: f64 = 0.002;

/// Temporal frequency applied to the x term.
pub const TIME_SCALE_X: f64 = 0.0002;

/// Temporal frequency applied to the y term.
pub const TIME_SCALE_Y: f64 = 0.0001;

/// Angle amplitude: the product term is scaled into [-4pi, 4pi].
pub const ANGLE_AMPLITUDE: f64 = PI * 4.0;

/// Evaluates the flow-field steering angle in radians at `(x, y)` and time `t`.
///
/// Pure function: the same inputs always yield the same angle. Time is in
/// clock units (see [`crate::clock::TIME_STEP`]).
#[must_use]
pub fn field_angle(x: f32, y: f32, t: f64) -> f32 {
    let sx = (f64::from(x) * SPATIAL_SCALE + t * TIME_SCALE_X).sin();
    let cy = (f64::from(y) * SPATIAL_SCALE - t * TIME_SCALE_Y).cos();
    (sx * cy * ANGLE_AMPLITUDE) as f32
}
