use std::{fs, path::Path};

use anyhow::{Context, Result};
use shared::{bytemuck, Params, ScreenSize, Viewport};
use wgpu::util::DeviceExt;

use crate::gpu::{Gpu, Quad, Scene};

/// Reads the fragment program from disk.
pub fn load_shader_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to load shader from {}", path.display()))
}

/// Quad shaded by the escape-time fragment program, driven by a uniform block.
pub struct ShaderScene {
    params: Params,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
    quad: Quad,
}

impl ShaderScene {
    pub fn new(gpu: &Gpu, shader_path: &Path, max_iterations: u32) -> Result<Self> {
        let source = load_shader_source(shader_path)?;
        let fragment = gpu
            .create_shader_module("mandelbrot", &source)
            .with_context(|| format!("invalid shader {}", shader_path.display()))?;
        tracing::info!(path = %shader_path.display(), "loaded fragment shader");

        let mut params = Params::new(gpu.screen(), &Viewport::default(), max_iterations);
        params.set_srgb_output(gpu.is_srgb());

        let uniform_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("params"),
                contents: bytemuck::bytes_of(&params),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("params"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("params"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let quad = Quad::new(gpu)?;
        let pipeline = quad
            .pipeline(gpu, "mandelbrot", &bind_group_layout, &fragment)
            .with_context(|| {
                format!(
                    "shader {} does not match the expected uniforms",
                    shader_path.display()
                )
            })?;

        Ok(Self {
            params,
            uniform_buffer,
            bind_group,
            pipeline,
            quad,
        })
    }

    fn upload(&self, gpu: &Gpu) {
        gpu.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.params));
    }
}

impl Scene for ShaderScene {
    fn sync(&mut self, gpu: &Gpu, viewport: &Viewport) {
        self.params.set_viewport(viewport);
        self.upload(gpu);
    }

    fn resize(&mut self, gpu: &Gpu, screen: ScreenSize) {
        self.params.set_resolution(screen);
        self.upload(gpu);
    }

    fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        self.quad.draw(render_pass);
    }
}
