//! # Driftfield Common
//!
//! Common types, utilities, and shared abstractions for Driftfield.
//!
//! This crate provides foundational types used across the backdrop
//! subsystems:
//! - RGBA color and the particle palette
//! - Surface geometry (dimensions, density rule, flow-grid bookkeeping)
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod color;
pub mod error;
pub mod surface;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::*;
    pub use crate::error::*;
    pub use crate::surface::*;
}

pub use prelude::*;
