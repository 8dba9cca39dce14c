//! wgpu renderer for the rotating cube
//!
//! `Graphics` owns every GPU resource: surface, device, queue, depth
//! buffer, the cube's vertex/color/index buffers, the MVP uniform, and the
//! render pipeline. All handles are plain owned fields, so dropping the
//! struct releases them; there is no ambient bound state shared between
//! instances. All methods are called serially from the winit event loop
//! thread.

pub mod cube;
pub mod error;
mod frame;
mod init;
pub mod pipeline;
pub mod scene;

pub use error::RenderError;

use scene::CubeScene;

/// GPU state and transform state for the cube renderer.
pub struct Graphics {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    #[allow(dead_code)] // Needed to keep texture alive for depth_view
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    pipeline: wgpu::RenderPipeline,
    mvp_buffer: wgpu::Buffer,
    mvp_bind_group: wgpu::BindGroup,
    position_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    scene: CubeScene,
}

impl Graphics {
    /// Handle a viewport change.
    ///
    /// Reconfigures the surface, recreates the depth buffer, and updates
    /// the projection. Zero-sized events (minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);

        // Recreate depth buffer
        let (depth_texture, depth_view) = Self::create_depth_texture(&self.device, width, height);
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;

        self.scene.resize(width, height);

        tracing::debug!("Resized graphics to {}x{}", width, height);
    }

    /// Current surface width.
    pub fn width(&self) -> u32 {
        self.config.width
    }

    /// Current surface height.
    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Transform state, exposed for integration tests.
    pub fn scene(&self) -> &CubeScene {
        &self.scene
    }
}
