use std::{iter, mem};

use anyhow::{bail, Context, Result};
use shared::{bytemuck, ScreenSize};
use wgpu::util::DeviceExt;
use winit::window::Window;

const VERTICES: &[[f32; 2]] = &[[-1.0, 1.0], [-1.0, -1.0], [1.0, -1.0], [1.0, 1.0]];

const INDICES: &[u16] = &[0, 1, 2, 0, 2, 3];

/// Something that can be drawn into the frame's render pass.
pub trait Scene {
    /// Pushes a new viewport to the GPU before the next frame.
    fn sync(&mut self, gpu: &Gpu, viewport: &shared::Viewport);

    fn resize(&mut self, _gpu: &Gpu, _screen: ScreenSize) {}

    fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>);
}

/// Surface, device and queue of the single window.
pub struct Gpu {
    pub surface: wgpu::Surface,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
}

impl Gpu {
    pub async fn new(window: &Window) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            dx12_shader_compiler: Default::default(),
        });
        // The window is moved into the event loop next to the surface and
        // outlives it.
        let surface = unsafe { instance.create_surface(window) }
            .context("failed to create a surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no graphics adapter can present to this window")?;
        let info = adapter.get_info();
        tracing::info!(adapter = %info.name, backend = ?info.backend, "using adapter");

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("mandelbrot"),
                    features: wgpu::Features::empty(),
                    limits: wgpu::Limits::downlevel_defaults()
                        .using_resolution(adapter.limits()),
                },
                None,
            )
            .await
            .context("failed to open the graphics device")?;

        let capabilities = surface.get_capabilities(&adapter);
        let format = surface_format(&capabilities.formats)
            .context("the surface supports no texture format")?;
        let alpha_mode = capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        tracing::info!(?format, "configuring surface");

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    /// Whether the surface encodes fragment output to sRGB on store.
    pub fn is_srgb(&self) -> bool {
        self.config.format.describe().srgb
    }

    pub fn screen(&self) -> ScreenSize {
        ScreenSize::new(self.config.width, self.config.height)
    }

    pub fn resize(&mut self, screen: ScreenSize) {
        if screen.width > 0 && screen.height > 0 {
            self.config.width = screen.width;
            self.config.height = screen.height;
            self.reconfigure();
        }
    }

    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Clears the surface, draws `scene` and presents the frame.
    pub fn render<S: Scene>(&self, scene: &S) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: true,
                    },
                })],
                depth_stencil_attachment: None,
            });

            scene.draw(&mut render_pass);
        }

        self.queue.submit(iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Creates a shader module, returning wgpu validation failures as errors
    /// instead of letting them reach the uncaptured error handler.
    pub fn create_shader_module(&self, label: &str, source: &str) -> Result<wgpu::ShaderModule> {
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = self
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(source.into()),
            });
        if let Some(error) = pollster::block_on(self.device.pop_error_scope()) {
            bail!("shader `{label}` failed to compile: {error}");
        }
        Ok(module)
    }
}

/// Picks a surface format that stores fragment output unchanged, falling back
/// to the adapter's preferred format when every format is sRGB.
pub fn surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|format| !format.describe().srgb)
        .or_else(|| formats.first().copied())
}

/// The full-screen rectangle every scene draws.
pub struct Quad {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_module: wgpu::ShaderModule,
}

impl Quad {
    pub fn new(gpu: &Gpu) -> Result<Self> {
        let vertex_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("quad vertices"),
                contents: bytemuck::cast_slice(VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("quad indices"),
                contents: bytemuck::cast_slice(INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });

        let vertex_module =
            gpu.create_shader_module("quad", include_str!("../shaders/quad.wgsl"))?;

        Ok(Self {
            vertex_buffer,
            index_buffer,
            vertex_module,
        })
    }

    /// Pipeline drawing the quad with `fragment`'s `fs_main`.
    pub fn pipeline(
        &self,
        gpu: &Gpu,
        label: &str,
        bind_group_layout: &wgpu::BindGroupLayout,
        fragment: &wgpu::ShaderModule,
    ) -> Result<wgpu::RenderPipeline> {
        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(label),
                bind_group_layouts: &[bind_group_layout],
                push_constant_ranges: &[],
            });

        gpu.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = gpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &self.vertex_module,
                    entry_point: "vs_main",
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x2,
                        }],
                    }],
                },
                fragment: Some(wgpu::FragmentState {
                    module: fragment,
                    entry_point: "fs_main",
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.config.format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
            });
        if let Some(error) = pollster::block_on(gpu.device.pop_error_scope()) {
            bail!("pipeline `{label}` is invalid: {error}");
        }
        Ok(pipeline)
    }

    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..INDICES.len() as u32, 0, 0..1);
    }
}
