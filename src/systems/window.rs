//! Window management system
//!
//! Handles window creation and the orientation readout in the title.

use std::sync::Arc;
use quatcube_core::Quaternion;
use winit::{event_loop::ActiveEventLoop, window::Window};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        // Physical size so the surface matches the projection's screen size
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_resizable(false)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                config.width,
                config.height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Update window title with the current orientation
    pub fn update_title(&self, orientation: Quaternion, paused: bool) {
        self.window.set_title(&format_title(&self.base_title, orientation, paused));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Title with angle (degrees) and axis of `orientation`
pub fn format_title(base: &str, orientation: Quaternion, paused: bool) -> String {
    let (axis, angle) = orientation.to_axis_angle();
    let title = format!(
        "{} - {:.1}\u{b0} about ({:.2}, {:.2}, {:.2})",
        base,
        angle.to_degrees(),
        axis.x,
        axis.y,
        axis.z
    );
    if paused {
        format!("{} [paused]", title)
    } else {
        title
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
