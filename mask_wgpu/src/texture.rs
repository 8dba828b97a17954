/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask::*;

use futures::channel::oneshot;
use futures::executor;

/// Size of a `Rgba32Float` texel in bytes
pub(crate) const FLOAT_TEXEL_BYTES: u32 = 16;

///
/// A texture used by the mask backend, along with the descriptor used to create it
///
pub(crate) struct MaskTexture {
    /// The descriptor used to create the texture
    pub descriptor: wgpu::TextureDescriptor<'static>,

    /// The WGPU texture stored here
    pub texture: wgpu::Texture,
}

impl MaskTexture {
    fn new(device: &wgpu::Device, label: &'static str, width: u32, height: u32, format: wgpu::TextureFormat, usage: wgpu::TextureUsages) -> MaskTexture {
        let descriptor = wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage,
            view_formats: &[],
        };
        let texture = device.create_texture(&descriptor);

        MaskTexture { descriptor, texture }
    }

    ///
    /// Creates a float texture containing the specified RGBA data (as generated by `BatchLayout::pack_coordinates()` or `pack_colors()`)
    ///
    pub fn with_float_data(device: &wgpu::Device, queue: &wgpu::Queue, label: &'static str, layout: &BatchLayout, data: &[f32]) -> MaskTexture {
        let texture = MaskTexture::new(device, label, layout.width as u32, layout.height as u32, wgpu::TextureFormat::Rgba32Float, wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST);
        let bytes = data.iter().flat_map(|val| val.to_ne_bytes()).collect::<Vec<u8>>();

        texture.write(queue, &bytes, FLOAT_TEXEL_BYTES);
        texture
    }

    ///
    /// Creates the texture that a reference frame is sampled from
    ///
    pub fn with_frame(device: &wgpu::Device, queue: &wgpu::Queue, frame: &ReferenceFrame) -> MaskTexture {
        let (width, height) = frame.pixel_size();
        let texture = MaskTexture::new(device, "flo_mask::frame", width as u32, height as u32, wgpu::TextureFormat::Rgba8Unorm, wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST);

        texture.write(queue, &frame.top_down_pixels(), 4);
        texture
    }

    ///
    /// Creates a float texture that a batch of results can be rendered to and then read back
    ///
    pub fn render_target(device: &wgpu::Device, layout: &BatchLayout) -> MaskTexture {
        MaskTexture::new(device, "flo_mask::results", layout.width as u32, layout.height as u32, wgpu::TextureFormat::Rgba32Float, wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.descriptor.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.descriptor.size.height
    }

    #[inline]
    pub fn create_view(&self) -> wgpu::TextureView {
        self.texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn write(&self, queue: &wgpu::Queue, bytes: &[u8], bytes_per_texel: u32) {
        queue.write_texture(
            self.texture.as_image_copy(),
            bytes,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(self.width() * bytes_per_texel),
                rows_per_image: Some(self.height()),
            },
            self.descriptor.size,
        );
    }
}

///
/// The number of bytes per row when copying a row of `unpadded` bytes from a texture into a buffer
///
#[inline]
pub(crate) fn padded_bytes_per_row(unpadded: u32) -> u32 {
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;

    ((unpadded + align - 1) / align) * align
}

///
/// A buffer that the contents of a float render target have been copied into
///
pub(crate) struct ReadbackBuffer {
    buffer: wgpu::Buffer,
    width: u32,
    height: u32,
    bytes_per_row: u32,
}

impl ReadbackBuffer {
    ///
    /// Adds a command to copy a float texture into a new readback buffer
    ///
    pub fn copy_from(device: &wgpu::Device, encoder: &mut wgpu::CommandEncoder, texture: &MaskTexture) -> ReadbackBuffer {
        let width = texture.width();
        let height = texture.height();
        let bytes_per_row = padded_bytes_per_row(width * FLOAT_TEXEL_BYTES);

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("flo_mask::readback"),
            size: (bytes_per_row as u64) * (height as u64),
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        encoder.copy_texture_to_buffer(
            texture.texture.as_image_copy(),
            wgpu::ImageCopyBuffer {
                buffer: &buffer,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(bytes_per_row),
                    rows_per_image: Some(height),
                },
            },
            texture.descriptor.size,
        );

        ReadbackBuffer { buffer, width, height, bytes_per_row }
    }

    ///
    /// Waits for the copy to finish, and returns the texels with the row padding removed
    ///
    pub fn read(self, device: &wgpu::Device) -> Result<Vec<f32>, MaskError> {
        let slice = self.buffer.slice(..);
        let (sender, receiver) = oneshot::channel();

        slice.map_async(wgpu::MapMode::Read, move |result| {
            sender.send(result).ok();
        });
        device.poll(wgpu::Maintain::Wait);

        match executor::block_on(receiver) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => return Err(MaskError::Readback(err.to_string())),
            Err(_) => return Err(MaskError::Readback("the buffer was dropped before it could be mapped".to_string())),
        }

        let row_bytes = (self.width * FLOAT_TEXEL_BYTES) as usize;
        let mut texels = Vec::with_capacity((self.width * self.height * 4) as usize);

        {
            let mapped = slice.get_mapped_range();

            for row in mapped.chunks(self.bytes_per_row as usize) {
                texels.extend(row[..row_bytes].chunks_exact(4).map(|bytes| f32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])));
            }
        }

        self.buffer.unmap();
        Ok(texels)
    }
}
