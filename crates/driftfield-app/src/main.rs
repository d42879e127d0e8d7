//! # Driftfield
//!
//! Windowed presenter for the Driftfield flow-field particle backdrop.
//!
//! This crate ties together the pieces:
//! - Kernel: the deterministic particle simulation and trail canvas
//! - Renderer: wgpu upload and fullscreen blit of the canvas
//! - Config: TOML-backed settings for window, animation, and diagnostics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod app;
mod config;
mod renderer;
mod timing;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Main entry point.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("driftfield=info".parse()?))
        .init();

    info!("Driftfield starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    app::run()?;

    info!("Driftfield shutdown complete");
    Ok(())
}
