//! Particle field rendering
//!
//! Two pipelines into one render pass: link lines first, particle discs on
//! top. Both pull vertices from storage buffers; instances and line vertices
//! are re-uploaded every frame.

use crate::theme::{background, Theme, ThemeReceiver};
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use particle_field::{Link, ParticleField};

/// Shared uniform: surface size in pixels plus the theme accent
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct FieldUniform {
    size: [f32; 2],
    _padding: [f32; 2],
    accent: [f32; 4],
}

/// Per-particle instance data (matches WGSL)
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct ParticleInstance {
    position: [f32; 2],
    size: f32,
    opacity: f32,
}

/// One endpoint of a link line (matches WGSL)
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct LinkVertex {
    position: [f32; 2],
    alpha: f32,
    _padding: f32,
}

pub struct FieldRenderer {
    particle_pipeline: wgpu::RenderPipeline,
    link_pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,

    particle_buffer: wgpu::Buffer,
    particle_capacity: usize,
    link_buffer: wgpu::Buffer,
    link_capacity: usize,

    theme_rx: ThemeReceiver,
    accent: [f32; 4],
    surface_config: wgpu::SurfaceConfiguration,
}

impl FieldRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_config: &wgpu::SurfaceConfiguration,
        theme: Theme,
        theme_rx: ThemeReceiver,
    ) -> Self {
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Field Uniform Buffer"),
            size: std::mem::size_of::<FieldUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Field Bind Group Layout"),
            entries: &[
                // Uniform - Binding 0
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // Geometry (Storage) - Binding 1
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Field Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let particle_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Particle Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/particles.wgsl").into()),
        });

        let link_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Link Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/links.wgsl").into()),
        });

        let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Particle Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &particle_shader,
                entry_point: Some("vertex"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &particle_shader,
                entry_point: Some("fragment"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let link_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Link Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &link_shader,
                entry_point: Some("vertex"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &link_shader,
                entry_point: Some("fragment"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        // Initial capacities; both buffers grow geometrically on demand
        let particle_capacity = 128;
        let particle_buffer = Self::create_storage_buffer(
            device,
            "Particle Instance Buffer",
            (particle_capacity * std::mem::size_of::<ParticleInstance>()) as u64,
        );

        let link_capacity = 1024;
        let link_buffer = Self::create_storage_buffer(
            device,
            "Link Vertex Buffer",
            (link_capacity * std::mem::size_of::<LinkVertex>()) as u64,
        );

        Self {
            particle_pipeline,
            link_pipeline,
            bind_group_layout,
            uniform_buffer,
            particle_buffer,
            particle_capacity,
            link_buffer,
            link_capacity,
            theme_rx,
            accent: theme.accent_linear(),
            surface_config: surface_config.clone(),
        }
    }

    fn create_storage_buffer(device: &wgpu::Device, label: &str, size: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub fn resize(&mut self, new_config: &wgpu::SurfaceConfiguration) {
        self.surface_config = new_config.clone();
    }

    /// Draw one frame of the field into `surface_view`
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_view: &wgpu::TextureView,
        field: &ParticleField,
    ) {
        // Pick up the latest theme change, if one arrived since last frame
        if let Some(theme) = self.theme_rx.latest() {
            log::debug!("theme changed: {:?}", theme);
            self.accent = theme.accent_linear();
        }

        let instances: Vec<ParticleInstance> = field
            .particles()
            .iter()
            .map(|p| ParticleInstance {
                position: p.position.to_array(),
                size: p.size,
                opacity: p.opacity,
            })
            .collect();

        let mut link_vertices = Vec::new();
        Self::push_links(&mut link_vertices, &field.links());
        Self::push_links(&mut link_vertices, &field.pointer_links());

        self.upload(device, queue, &instances, &link_vertices);

        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[FieldUniform {
                size: [
                    self.surface_config.width as f32,
                    self.surface_config.height as f32,
                ],
                _padding: [0.0; 2],
                accent: self.accent,
            }]),
        );

        let particle_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Particle Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: self.particle_buffer.as_entire_binding(),
                },
            ],
        });

        let link_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Link Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: self.link_buffer.as_entire_binding(),
                },
            ],
        });

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Field Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Field Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(background()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Links first so particles draw on top
            if !link_vertices.is_empty() {
                render_pass.set_pipeline(&self.link_pipeline);
                render_pass.set_bind_group(0, &link_bind_group, &[]);
                render_pass.draw(0..link_vertices.len() as u32, 0..1);
            }

            if !instances.is_empty() {
                render_pass.set_pipeline(&self.particle_pipeline);
                render_pass.set_bind_group(0, &particle_bind_group, &[]);
                render_pass.draw(0..6, 0..instances.len() as u32);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn push_links(vertices: &mut Vec<LinkVertex>, links: &[Link]) {
        fn endpoint(position: Vec2, alpha: f32) -> LinkVertex {
            LinkVertex {
                position: position.to_array(),
                alpha,
                _padding: 0.0,
            }
        }

        for link in links {
            vertices.push(endpoint(link.a, link.alpha));
            vertices.push(endpoint(link.b, link.alpha));
        }
    }

    fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[ParticleInstance],
        link_vertices: &[LinkVertex],
    ) {
        if instances.len() > self.particle_capacity {
            self.particle_capacity = instances.len().next_power_of_two();
            self.particle_buffer = Self::create_storage_buffer(
                device,
                "Particle Instance Buffer",
                (self.particle_capacity * std::mem::size_of::<ParticleInstance>()) as u64,
            );
        }
        if link_vertices.len() > self.link_capacity {
            self.link_capacity = link_vertices.len().next_power_of_two();
            self.link_buffer = Self::create_storage_buffer(
                device,
                "Link Vertex Buffer",
                (self.link_capacity * std::mem::size_of::<LinkVertex>()) as u64,
            );
        }

        if !instances.is_empty() {
            queue.write_buffer(&self.particle_buffer, 0, bytemuck::cast_slice(instances));
        }
        if !link_vertices.is_empty() {
            queue.write_buffer(&self.link_buffer, 0, bytemuck::cast_slice(link_vertices));
        }
    }
}
