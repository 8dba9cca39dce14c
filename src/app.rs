//! Application shell and event loop
//!
//! Drives the renderer from winit callbacks: window creation initializes
//! the graphics backend, resize events reconfigure it, and every redraw
//! renders one frame then requests the next for continuous animation.

use std::sync::Arc;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::graphics::{Graphics, RenderError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(String),
}

/// Application state
#[derive(Default)]
pub struct App {
    /// Window handle (created during resumed event)
    window: Option<Arc<Window>>,
    /// Graphics backend (initialized after window creation)
    graphics: Option<Graphics>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recreate the renderer after a lost context.
    ///
    /// The old `Graphics` is dropped first so its surface and device go
    /// away before a new surface is created for the same window.
    fn recover_context(&mut self) {
        self.graphics = None;
        let Some(window) = &self.window else {
            return;
        };
        match Graphics::new_blocking(window.clone()) {
            Ok(graphics) => {
                tracing::info!("Graphics context recreated");
                self.graphics = Some(graphics);
            }
            Err(e) => {
                tracing::error!("Failed to recreate graphics context: {}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Spincube")
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match Graphics::new_blocking(window.clone()) {
            Ok(graphics) => {
                tracing::info!("Graphics initialized successfully");
                self.graphics = Some(graphics);
            }
            Err(e) => {
                tracing::error!("Failed to initialize graphics: {}", e);
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                tracing::debug!("Window resized to {:?}", new_size);
                if let Some(graphics) = &mut self.graphics {
                    graphics.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(graphics) = &mut self.graphics {
                    match graphics.render_frame() {
                        Ok(()) => {}
                        Err(RenderError::ContextLost) => {
                            tracing::warn!("Graphics context lost, recreating renderer");
                            self.recover_context();
                        }
                        Err(e) => {
                            tracing::error!("Render error: {}", e);
                        }
                    }
                }
                // Continuous animation: one frame per refresh
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

pub fn run() -> Result<(), AppError> {
    let event_loop = EventLoop::new()
        .map_err(|e| AppError::EventLoop(format!("Event loop error: {}", e)))?;

    let mut app = App::new();
    event_loop
        .run_app(&mut app)
        .map_err(|e| AppError::EventLoop(format!("Event loop error: {}", e)))?;

    Ok(())
}
