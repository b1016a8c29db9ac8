//! WebGPU renderer for the 3D layer: the lit torus knot and the instanced
//! wireframe grid, drawn in one pass with depth and linear fog.

use crate::camera::Camera;
use crate::scene::SceneState;
use glam::{EulerRot, Mat4};
use web_sys as web;

mod grid;
mod knot;

// Shaders bundled as string constants
pub(crate) static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub(crate) static GRID_WGSL: &str = include_str!("../shaders/grid.wgsl");

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

// Background and fog share the same near-black so the squares dissolve into
// the backdrop instead of popping at the far plane.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.039,
    g: 0.039,
    b: 0.039,
    a: 1.0,
};
const FOG_COLOR: [f32; 4] = [0.039, 0.039, 0.039, 0.0];
const FOG_RANGE: [f32; 4] = [5.0, 40.0, 0.0, 0.0];

// Centerpiece material: pink body, hot-pink emissive.
const KNOT_BASE_COLOR: [f32; 4] = [1.0, 0.102, 0.459, 0.95];
const KNOT_EMISSIVE: [f32; 4] = [1.0, 0.0, 0.431, 0.8];
const GRID_LINE_COLOR: [f32; 4] = [1.0, 0.0, 0.431, 0.0];

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    knot: knot::KnotResources,
    grid: grid::GridResources,
    width: u32,
    height: u32,
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_view = create_depth_view(&device, width, height);
        let knot = knot::create_knot_resources(&device, format, DEPTH_FORMAT);
        let grid = grid::create_grid_resources(&device, format, DEPTH_FORMAT);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            knot,
            grid,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    pub fn render(
        &mut self,
        scene: &SceneState,
        camera: &Camera,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_proj = (camera.projection_matrix() * camera.view_matrix()).to_cols_array_2d();
        let camera_pos = [camera.position.x, camera.position.y, camera.position.z, 0.0];

        let spiral = &scene.spiral;
        let model = Mat4::from_euler(
            EulerRot::XYZ,
            spiral.rotation.x,
            spiral.rotation.y,
            spiral.rotation.z,
        ) * Mat4::from_scale(spiral.scale);
        self.queue.write_buffer(
            &self.knot.uniform_buffer,
            0,
            bytemuck::bytes_of(&knot::KnotUniforms {
                view_proj,
                model: model.to_cols_array_2d(),
                base_color: KNOT_BASE_COLOR,
                emissive: KNOT_EMISSIVE,
                camera_pos,
                fog_color: FOG_COLOR,
                fog_range: FOG_RANGE,
            }),
        );

        let instances: Vec<grid::SquareInstance> = scene
            .squares
            .iter()
            .map(|sq| grid::SquareInstance {
                translation: [sq.position.x, sq.position.y, sq.position.z, sq.opacity],
                tilt: [sq.tilt.x, sq.tilt.y, 0.0, 0.0],
            })
            .collect();
        self.queue
            .write_buffer(&self.grid.instance_buffer, 0, bytemuck::cast_slice(&instances));
        self.queue.write_buffer(
            &self.grid.uniform_buffer,
            0,
            bytemuck::bytes_of(&grid::GridUniforms {
                view_proj,
                line_color: GRID_LINE_COLOR,
                fog_color: FOG_COLOR,
                fog_range: FOG_RANGE,
                camera_pos,
            }),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
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

            rpass.set_pipeline(&self.knot.pipeline);
            rpass.set_bind_group(0, &self.knot.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.knot.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.knot.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.knot.index_count, 0, 0..1);

            rpass.set_pipeline(&self.grid.pipeline);
            rpass.set_bind_group(0, &self.grid.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.grid.edge_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.grid.instance_buffer.slice(..));
            rpass.draw(0..self.grid.edge_vertex_count, 0..instances.len() as u32);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
