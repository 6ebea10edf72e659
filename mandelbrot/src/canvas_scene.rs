use std::{num::NonZeroU32, time::Instant};

use anyhow::Result;
use shared::{Canvas, ScreenSize, Viewport};

use crate::gpu::{Gpu, Quad, Scene};

/// Quad textured with a canvas painted on the CPU.
pub struct CanvasScene {
    canvas: Canvas,
    max_iterations: u32,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
    quad: Quad,
}

impl CanvasScene {
    pub fn new(gpu: &Gpu, size: ScreenSize, max_iterations: u32) -> Result<Self> {
        let texture = gpu.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("canvas"),
            size: extent(size),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: canvas_format(gpu.is_srgb()),
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = gpu.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("canvas"),
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("canvas"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("canvas"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let quad = Quad::new(gpu)?;
        let fragment =
            gpu.create_shader_module("canvas", include_str!("../shaders/canvas.wgsl"))?;
        let pipeline = quad.pipeline(gpu, "canvas", &bind_group_layout, &fragment)?;

        Ok(Self {
            canvas: Canvas::new(size),
            max_iterations,
            texture,
            bind_group,
            pipeline,
            quad,
        })
    }
}

/// Texture format that shows canvas bytes unchanged on a surface: an sRGB
/// surface re-encodes what the sampler decoded.
fn canvas_format(srgb_surface: bool) -> wgpu::TextureFormat {
    if srgb_surface {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

fn extent(size: ScreenSize) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: size.width,
        height: size.height,
        depth_or_array_layers: 1,
    }
}

impl Scene for CanvasScene {
    /// Repaints the whole canvas and uploads it.
    fn sync(&mut self, gpu: &Gpu, viewport: &Viewport) {
        let started = Instant::now();
        self.canvas.render(viewport, self.max_iterations);
        tracing::debug!(elapsed = ?started.elapsed(), "canvas repainted");

        let size = self.canvas.size();
        gpu.queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            self.canvas.as_bytes(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: NonZeroU32::new(4 * size.width),
                rows_per_image: NonZeroU32::new(size.height),
            },
            extent(size),
        );
    }

    fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        self.quad.draw(render_pass);
    }
}
