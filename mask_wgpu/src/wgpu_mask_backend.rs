/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::mask_uniforms::*;
use super::texture::*;
use super::wgpu_shader::*;

use flo_mask::*;

use futures::executor;
use log::{debug, error, info};
use wgpu::util::DeviceExt;

///
/// Usages a texture format needs to support to be used for the line textures and the render target
///
const FLOAT_TEXTURE_USAGES: wgpu::TextureUsages = wgpu::TextureUsages::RENDER_ATTACHMENT
    .union(wgpu::TextureUsages::COPY_SRC)
    .union(wgpu::TextureUsages::TEXTURE_BINDING);

///
/// Mask backend that samples lines in a fragment shader
///
/// The reference frame is uploaded to a texture when the backend is created. Each pass uploads the lines as a pair
/// of float textures, renders one fragment per line to a float target and reads the target back. Batches that
/// are too big for a single texture are split into several draws.
///
pub struct WgpuMaskBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    frame_texture: MaskTexture,
    frame_view: wgpu::TextureView,
    frame_size: (f64, f64),
    max_texture_dimension: usize,
}

impl WgpuMaskBackend {
    ///
    /// Creates a backend on the default GPU adapter, blocking until the device is ready
    ///
    pub fn new(frame: &ReferenceFrame) -> Result<WgpuMaskBackend, MaskError> {
        executor::block_on(Self::new_async(frame))
    }

    ///
    /// Creates a backend on the default GPU adapter
    ///
    pub async fn new_async(frame: &ReferenceFrame) -> Result<WgpuMaskBackend, MaskError> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(MaskError::NoAdapter)?;

        Self::from_adapter(&adapter, frame).await
    }

    ///
    /// Creates a backend using a device requested from the specified adapter
    ///
    pub async fn from_adapter(adapter: &wgpu::Adapter, frame: &ReferenceFrame) -> Result<WgpuMaskBackend, MaskError> {
        let format_features = adapter.get_texture_format_features(wgpu::TextureFormat::Rgba32Float);
        if !format_features.allowed_usages.contains(FLOAT_TEXTURE_USAGES) {
            error!("Adapter {} cannot render to float textures (supports {:?})", adapter.get_info().name, format_features.allowed_usages);
            return Err(MaskError::FloatTexturesUnsupported);
        }

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("flo_mask"),
                    features: wgpu::Features::empty(),
                    limits: adapter.limits(),
                },
                None,
            )
            .await
            .map_err(|err| MaskError::RequestDevice(err.to_string()))?;

        let adapter_info = adapter.get_info();
        info!("GPU mask backend on {} ({:?}), frame {}x{}", adapter_info.name, adapter_info.backend, frame.width(), frame.height());

        Self::from_device(device, queue, frame)
    }

    fn from_device(device: wgpu::Device, queue: wgpu::Queue, frame: &ReferenceFrame) -> Result<WgpuMaskBackend, MaskError> {
        let max_texture_dimension = device.limits().max_texture_dimension_2d as usize;
        let (pixel_width, pixel_height) = frame.pixel_size();

        if pixel_width > max_texture_dimension || pixel_height > max_texture_dimension {
            return Err(MaskError::FrameTooLarge {
                width: pixel_width,
                height: pixel_height,
                max_dimension: max_texture_dimension,
            });
        }

        let bind_group_layout = Self::create_bind_group_layout(&device);
        let pipeline = Self::create_pipeline(&device, &bind_group_layout)?;
        let frame_texture = MaskTexture::with_frame(&device, &queue, frame);
        let frame_view = frame_texture.create_view();

        Ok(WgpuMaskBackend {
            device,
            queue,
            pipeline,
            bind_group_layout,
            frame_texture,
            frame_view,
            frame_size: frame.size(),
            max_texture_dimension,
        })
    }

    ///
    /// The device that this backend runs on
    ///
    #[inline]
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    ///
    /// The size of the texture that the reference frame was uploaded to, in pixels
    ///
    #[inline]
    pub fn frame_texture_size(&self) -> (u32, u32) {
        (self.frame_texture.width(), self.frame_texture.height())
    }

    ///
    /// The largest number of lines that are sampled in a single draw
    ///
    #[inline]
    pub fn max_batch_size(&self) -> usize {
        self.max_texture_dimension * self.max_texture_dimension
    }

    fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: false },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };

        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("flo_mask::bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                texture_entry(1),
                texture_entry(2),
                texture_entry(3),
            ],
        })
    }

    fn create_pipeline(device: &wgpu::Device, bind_group_layout: &wgpu::BindGroupLayout) -> Result<wgpu::RenderPipeline, MaskError> {
        let shader = compile_mask_shader(device, MASK_SHADER_WGSL)?;

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("flo_mask::pipeline_layout"),
            bind_group_layouts: &[bind_group_layout],
            push_constant_ranges: &[],
        });

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("flo_mask::pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: MASK_VERTEX_ENTRY_POINT,
                buffers: &[],
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: MASK_FRAGMENT_ENTRY_POINT,
                targets: &[Some(wgpu::ColorTargetState {
                    format: wgpu::TextureFormat::Rgba32Float,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview: None,
        });

        if let Some(err) = executor::block_on(device.pop_error_scope()) {
            let log = err.to_string();
            let annotated_source = annotate_shader_source(MASK_SHADER_WGSL, &log);

            error!("Could not create mask pipeline: {}", log);
            return Err(MaskError::ShaderCompile { log, annotated_source });
        }

        Ok(pipeline)
    }

    ///
    /// Renders the first visible run of each line in a batch that fits in a single texture
    ///
    fn sample_lines(&self, lines: &[CandidateLine], settings: &MaskSettings) -> Result<Vec<Option<VisibleRun>>, MaskError> {
        let layout = BatchLayout::for_count(lines.len());
        debug!("GPU mask draw: {} lines in a {}x{} batch", lines.len(), layout.width, layout.height);

        let coords = MaskTexture::with_float_data(&self.device, &self.queue, "flo_mask::line_coords", &layout, &layout.pack_coordinates(lines));
        let colors = MaskTexture::with_float_data(&self.device, &self.queue, "flo_mask::line_colors", &layout, &layout.pack_colors(lines));
        let target = MaskTexture::render_target(&self.device, &layout);

        let uniforms = MaskUniforms::new(settings, self.frame_size, &layout, lines.len());
        let uniform_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("flo_mask::uniforms"),
            contents: &uniforms.to_bytes(),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let coords_view = coords.create_view();
        let colors_view = colors.create_view();
        let target_view = target.create_view();

        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("flo_mask::bind_group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: uniform_buffer.as_entire_binding() },
                wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(&coords_view) },
                wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::TextureView(&colors_view) },
                wgpu::BindGroupEntry { binding: 3, resource: wgpu::BindingResource::TextureView(&self.frame_view) },
            ],
        });

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("flo_mask::pass") });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("flo_mask::render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &bind_group, &[]);
            render_pass.draw(0..3, 0..1);
        }

        let readback = ReadbackBuffer::copy_from(&self.device, &mut encoder, &target);
        self.queue.submit(Some(encoder.finish()));

        let texels = readback.read(&self.device)?;
        layout.unpack_results(&texels, lines.len())
    }
}

impl MaskBackend for WgpuMaskBackend {
    #[inline]
    fn frame_size(&self) -> (f64, f64) {
        self.frame_size
    }

    fn run_pass(&self, lines: &[CandidateLine], settings: &MaskSettings) -> Result<Vec<PassVisibility>, MaskError> {
        settings.validate()?;

        let batch = QueryBatch::new(lines, settings.coordinate_limit);
        if batch.is_empty() {
            debug!("GPU mask pass: no lines to check ({} out of bounds)", batch.num_dropped());
            return Ok(vec![]);
        }

        let mut runs = Vec::with_capacity(batch.len());
        for chunk in batch.lines().chunks(self.max_batch_size()) {
            runs.extend(self.sample_lines(chunk, settings)?);
        }

        let visible = batch.collect_visible(runs);
        debug!("GPU mask pass: checked {} lines ({} out of bounds), {} visible", batch.len(), batch.num_dropped(), visible.len());

        Ok(visible)
    }
}
