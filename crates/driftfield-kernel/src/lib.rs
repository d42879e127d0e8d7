//! # Driftfield Kernel
//!
//! Flow-field particle simulation core.
//!
//! This crate provides the backdrop simulation:
//! - Analytic flow-field angle function (pure in position and time)
//! - Fixed-capacity particle pool with seeded respawn
//! - Deterministic frame clock (fixed time step per frame)
//! - CPU trail canvas (fade fill plus alpha-blended line segments)
//!
//! ## Architecture
//!
//! The pool owns all simulation state: particles, clock, and the spawn RNG.
//! One call to [`pool::ParticlePool::step`] advances the clock and updates
//! every particle; one call to [`pool::ParticlePool::render`] draws the
//! resulting motion trails into a [`canvas::TrailCanvas`]. The canvas is a
//! plain RGBA8 buffer the presenter uploads as a texture.
//!
//! ## Determinism
//!
//! The field angle is a pure function of position and time, the clock
//! advances by a fixed step regardless of wall clock, and all randomness
//! flows through the respawn operation on a single seeded generator. Two
//! pools built with the same seed and stepped the same number of times are
//! identical.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod canvas;
pub mod clock;
pub mod field;
pub mod particle;
pub mod pool;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::canvas::*;
    pub use crate::clock::*;
    pub use crate::field::*;
    pub use crate::particle::*;
    pub use crate::pool::*;
}

pub use prelude::*;
