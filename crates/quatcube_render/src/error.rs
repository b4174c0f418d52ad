//! Render error types

/// Errors from GPU setup and frame presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// No adapter compatible with the window surface
    NoAdapter,
    /// Adapter refused the device request
    DeviceRequest(String),
    /// Could not create or configure the window surface
    SurfaceCreation(String),
    /// Other surface error
    Other(String),
}

impl RenderError {
    /// Whether reconfiguring the surface and retrying next frame can recover
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RenderError::SurfaceLost | RenderError::Other(_))
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::NoAdapter => write!(f, "No compatible GPU adapter found"),
            RenderError::DeviceRequest(msg) => write!(f, "Device request failed: {}", msg),
            RenderError::SurfaceCreation(msg) => write!(f, "Surface creation failed: {}", msg),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}
