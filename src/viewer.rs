//! Windowed viewer for particle fields.
//!
//! The viewer owns a [`ParticleField`] and drives the frame loop: tick the
//! clock, advance the field, upload the transforms, draw. Drag to orbit,
//! scroll to zoom, space to pause the animation.
//!
//! # Example
//!
//! ```ignore
//! let field = ParticleField::new(ShapeSpec {
//!     shape: Shape::Sphere { radius: 1.2 },
//!     count: 5_000,
//! })?;
//!
//! Viewer::new(field)
//!     .with_particle_size(0.012)
//!     .with_color(Vec3::new(0.4, 0.7, 1.0))
//!     .run()?;
//! ```

use std::sync::Arc;

use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::error::ViewerError;
use crate::field::ParticleField;
use crate::gpu::GpuState;
use crate::time::Clock;

/// A windowed particle-field viewer.
///
/// Use method chaining to configure, then call `.run()` to open the window.
/// `run` blocks until the window is closed.
pub struct Viewer {
    field: ParticleField,
    particle_size: f32,
    color: Vec3,
    background: Vec3,
    title: String,
}

impl Viewer {
    /// Create a viewer for the given field with default visuals.
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            particle_size: 0.015,
            color: Vec3::new(0.55, 0.75, 1.0),
            background: Vec3::new(0.02, 0.02, 0.05),
            title: "shimmer".to_string(),
        }
    }

    /// Set the on-screen particle size (clip-space units).
    pub fn with_particle_size(mut self, size: f32) -> Self {
        self.particle_size = size;
        self
    }

    /// Set the particle color (RGB, 0.0-1.0).
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Set the window clear color (RGB, 0.0-1.0).
    pub fn with_background(mut self, background: Vec3) -> Self {
        self.background = background;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Open the window and run the frame loop until the window closes.
    pub fn run(self) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        // Window or GPU setup failures surface here: `resumed` cannot
        // return a Result, so the app stashes the error and exits the loop.
        if let Some(error) = app.init_error.take() {
            return Err(error);
        }

        Ok(())
    }
}

struct App {
    viewer: Viewer,
    clock: Clock,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    init_error: Option<ViewerError>,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
}

impl App {
    fn new(viewer: Viewer) -> Self {
        Self {
            viewer,
            clock: Clock::new(),
            window: None,
            gpu_state: None,
            init_error: None,
            mouse_pressed: false,
            last_mouse_pos: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.viewer.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.window = Some(window.clone());

        let gpu_state = pollster::block_on(GpuState::new(
            window,
            self.viewer.field.transforms(),
            self.viewer.particle_size,
            self.viewer.color,
            self.viewer.background,
        ))?;
        self.gpu_state = Some(gpu_state);
        self.clock.reset();

        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let elapsed = self.clock.tick();
        let transforms = self.viewer.field.advance(elapsed);

        if let Some(gpu_state) = &mut self.gpu_state {
            match gpu_state.render(transforms, elapsed) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => gpu_state.resize(winit::dpi::PhysicalSize {
                    width: gpu_state.config.width,
                    height: gpu_state.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => eprintln!("Render error: {:?}", e),
            }
        }

        if let Some(window) = &self.window {
            if self.clock.frames() % 30 == 0 {
                window.set_title(&format!(
                    "{} - {} particles - {:.0} fps",
                    self.viewer.title,
                    self.viewer.field.len(),
                    self.clock.fps(),
                ));
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Space),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.clock.toggle_pause();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                    if !self.mouse_pressed {
                        self.last_mouse_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = position.x - last_x;
                        let dy = position.y - last_y;

                        if let Some(gpu_state) = &mut self.gpu_state {
                            gpu_state.camera.yaw -= dx as f32 * 0.005;
                            gpu_state.camera.pitch += dy as f32 * 0.005;
                            gpu_state.camera.pitch = gpu_state.camera.pitch.clamp(-1.5, 1.5);
                        }
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.camera.distance -= scroll * 0.3;
                    gpu_state.camera.distance = gpu_state.camera.distance.clamp(0.5, 20.0);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}
