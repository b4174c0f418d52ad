//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Line pipeline
//! - Frame presentation as a [`DisplaySurface`]

use std::sync::Arc;
use winit::window::Window;
use quatcube_core::{DisplaySurface, Frame};
use quatcube_render::{
    context::RenderContext,
    pipeline::{LinePipeline, LineUniforms},
    LineGeometry, RenderError,
};
use crate::config::RenderingConfig;

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    line_pipeline: LinePipeline,
    /// Reused each frame to avoid reallocating
    geometry: LineGeometry,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    ///
    /// `screen_size` is the pixel space the projected points live in.
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        screen_size: (u32, u32),
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let line_pipeline = LinePipeline::new(&context.device, context.config.format);
        line_pipeline.update_uniforms(
            &context.queue,
            &LineUniforms::new(screen_size.0, screen_size.1),
        );

        log::info!(
            "Render surface {}x{} ({:?})",
            context.config.width,
            context.config.height,
            context.config.format
        );

        Ok(Self {
            context,
            line_pipeline,
            geometry: LineGeometry::new(),
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure after a lost surface
    pub fn recover(&mut self) {
        self.context.reconfigure();
    }

    fn clear_color(&self) -> wgpu::Color {
        let bg = &self.render_config.background_color;
        wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: bg[3] as f64,
        }
    }
}

impl DisplaySurface for RenderSystem {
    type Error = RenderError;

    fn present(&mut self, frame: &Frame<'_>) -> Result<(), RenderError> {
        self.geometry.clear();
        self.geometry
            .add_frame(frame, self.render_config.show_center_marker);
        self.line_pipeline.upload_vertices(
            &self.context.device,
            &self.context.queue,
            &self.geometry.vertices,
        );

        let output = self.context.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.line_pipeline
            .render(&mut encoder, &view, self.clear_color());

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
