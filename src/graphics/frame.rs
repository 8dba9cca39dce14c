//! Frame rendering and presentation
//!
//! One frame: acquire the surface texture, advance the rotation, upload
//! the new MVP, record a single pass that clears color + depth and issues
//! the indexed cube draw, then present.

use super::cube::CUBE_INDEX_COUNT;
use super::error::RenderError;
use super::Graphics;

/// Background clear color.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.05,
    a: 1.0,
};

impl Graphics {
    /// Render one frame.
    ///
    /// Returns `ContextLost` when the surface cannot be reacquired even
    /// after a reconfigure; the host reacts by dropping this instance and
    /// creating a fresh one. A timed-out acquire just skips the frame.
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("Surface acquire timed out, skipping frame");
                return Ok(());
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure surface and try again
                self.surface.configure(&self.device, &self.config);
                match self.surface.get_current_texture() {
                    Ok(frame) => frame,
                    Err(e) => {
                        tracing::error!("Failed to acquire frame after reconfigure: {:?}", e);
                        return Err(RenderError::ContextLost);
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed to acquire frame: {:?}", e);
                return Err(RenderError::ContextLost);
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Step the rotation and upload the new transform
        self.scene.advance();
        let mvp = self.scene.mvp();
        self.queue
            .write_buffer(&self.mvp_buffer, 0, bytemuck::cast_slice(&mvp.to_cols_array()));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Cube Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Cube Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.mvp_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.position_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.color_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..CUBE_INDEX_COUNT, 0, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        tracing::trace!("Rendered frame at angle {}", self.scene.angle_deg());
        Ok(())
    }
}
