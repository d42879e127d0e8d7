//! Application lifecycle.
//!
//! Owns the window, the renderer, and the simulation, and drives them from
//! the winit event loop: one simulation step and one presented frame per
//! redraw. The simulation side of the lifecycle lives in [`Backdrop`] so it
//! can be exercised without a window.

use anyhow::Result;
use tracing::{info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use driftfield_common::SurfaceSize;
use driftfield_kernel::{ParticlePool, TrailCanvas};

use crate::config::BackdropConfig;
use crate::renderer::BackdropRenderer;
use crate::timing::{FpsCounter, FrameTiming};

/// Simulation lifecycle state: pool, canvas, and the exit flag.
///
/// Once exit is requested no further frame is produced and resizes become
/// no-ops, so nothing runs between teardown being requested and the event
/// loop actually stopping.
struct Backdrop {
    pool: ParticlePool,
    canvas: TrailCanvas,
    fade_alpha: f32,
    exiting: bool,
}

impl Backdrop {
    fn new(size: SurfaceSize, seed: Option<u64>, fade_alpha: f32) -> Self {
        Self {
            pool: ParticlePool::new(size, seed),
            canvas: TrailCanvas::new(size),
            fade_alpha,
            exiting: false,
        }
    }

    /// Produces one frame into the canvas.
    ///
    /// Returns whether another frame should be scheduled; `false` once exit
    /// has been requested.
    fn step_frame(&mut self) -> bool {
        if self.exiting {
            return false;
        }
        self.pool.step();
        self.canvas.fade(self.fade_alpha);
        self.pool.render(&mut self.canvas);
        true
    }

    /// Rebuilds pool and canvas for a new surface size.
    ///
    /// Zero-size resizes and resizes after exit are ignored.
    fn resize(&mut self, size: SurfaceSize) {
        if self.exiting || size.is_empty() {
            return;
        }
        self.pool.regenerate(size);
        self.canvas.resize(size);
    }

    /// Requests exit; subsequent frames and resizes are no-ops.
    fn request_exit(&mut self) {
        self.exiting = true;
    }

    const fn canvas(&self) -> &TrailCanvas {
        &self.canvas
    }
}

/// Application state machine.
struct DriftApp {
    /// Backdrop configuration
    config: BackdropConfig,
    /// Renderer (initialized after window creation).
    /// Declared before `window`: the surface borrows the window handle and
    /// must drop first.
    renderer: Option<BackdropRenderer>,
    /// Window handle (created after resume)
    window: Option<Window>,

    /// Simulation lifecycle state
    backdrop: Backdrop,

    /// Frame timing
    timing: FrameTiming,
    /// FPS counter for diagnostics
    fps_counter: FpsCounter,
}

impl DriftApp {
    /// Creates a new application instance.
    fn new(config: BackdropConfig) -> Self {
        let timing = FrameTiming::new(config.target_fps).with_vsync(config.vsync);
        let size = SurfaceSize::new(config.window_width, config.window_height);
        let backdrop = Backdrop::new(size, config.field_seed, config.fade_alpha);

        Self {
            config,
            renderer: None,
            window: None,
            backdrop,
            timing,
            fps_counter: FpsCounter::new(),
        }
    }

    /// Runs one simulation step and presents the frame.
    ///
    /// Returns whether another frame should be scheduled. Without a renderer
    /// there is nothing to present, so no simulation runs and no further
    /// frame is requested; the event loop keeps running idle.
    fn update_and_render(&mut self) -> bool {
        let Some(renderer) = &mut self.renderer else {
            return false;
        };

        self.timing.begin_frame();

        if !self.backdrop.step_frame() {
            return false;
        }

        if let Err(e) = renderer.render(self.backdrop.canvas()) {
            warn!("Render error: {e}");
        }

        if self.config.log_fps {
            if let Some((fps, frame_time)) = self.fps_counter.tick() {
                info!("FPS: {fps:.0} ({frame_time:.2}ms/frame)");
            }
        }

        // Frame rate limiting (if not using VSync)
        self.timing.sleep_remainder();
        true
    }
}

impl ApplicationHandler for DriftApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        info!("Application resumed, creating window...");

        let window_attrs = Window::default_attributes()
            .with_title("Driftfield")
            .with_inner_size(PhysicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        match event_loop.create_window(window_attrs) {
            Ok(window) => {
                info!("Window created successfully");

                match pollster::block_on(BackdropRenderer::new(
                    &window,
                    self.config.backdrop_opacity,
                    self.config.vsync,
                )) {
                    Ok(renderer) => {
                        self.renderer = Some(renderer);
                    },
                    Err(e) => {
                        warn!("Failed to initialize renderer: {e}");
                    },
                }

                // The created window may not match the requested size
                // (DPI scaling, tiling window managers)
                let actual = window.inner_size();
                self.backdrop
                    .resize(SurfaceSize::new(actual.width, actual.height));

                // No renderer means nothing to present: stay idle instead of
                // scheduling frames
                if self.renderer.is_some() {
                    window.request_redraw();
                }
                self.window = Some(window);
                self.timing.begin_frame();

                info!(
                    "Driftfield ready - {}x{} @ {} FPS target",
                    actual.width, actual.height, self.config.target_fps
                );
            },
            Err(e) => {
                warn!("Failed to create window: {e}");
                event_loop.exit();
            },
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down...");
                self.backdrop.request_exit();
                // Save config on exit
                if let Err(e) = self.config.save() {
                    warn!("Failed to save config: {e}");
                }
                event_loop.exit();
            },
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
                self.config.window_width = new_size.width;
                self.config.window_height = new_size.height;
                self.backdrop
                    .resize(SurfaceSize::new(new_size.width, new_size.height));
            },
            WindowEvent::RedrawRequested => {
                if self.update_and_render() {
                    // Request next frame
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            },
            _ => {},
        }
    }
}

/// Runs the main application loop.
pub fn run() -> Result<()> {
    let mut config = BackdropConfig::load();
    config.validate();

    info!("Configuration loaded:");
    info!("  Window: {}x{}", config.window_width, config.window_height);
    info!("  VSync: {}", config.vsync);
    info!("  Backdrop opacity: {}", config.backdrop_opacity);

    info!("Creating event loop...");
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DriftApp::new(config);

    info!("Starting event loop...");
    event_loop.run_app(&mut app)?;

    Ok(())
}
