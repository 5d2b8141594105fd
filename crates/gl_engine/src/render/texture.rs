//! 2D texture wrapper

use crate::assets::ImageData;
use crate::render::{GlContext, RenderError};
use glow::HasContext;

/// An immutable 2D RGBA texture with mipmaps
///
/// Created once from decoded pixels; the only GPU-side mutation is mipmap
/// generation at creation time. Sampling parameters are fixed: repeat wrap,
/// linear-mipmap-linear minification, linear magnification. The texture
/// object is deleted on drop.
pub struct Texture {
    ctx: GlContext,
    handle: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Upload decoded RGBA pixels as a 2D texture and generate mipmaps
    pub fn from_image(ctx: &GlContext, image: &ImageData) -> Result<Self, RenderError> {
        let expected = image.width as usize * image.height as usize * 4;
        if image.data.len() != expected {
            return Err(RenderError::InvalidTextureData(format!(
                "{}x{} RGBA image needs {} bytes, got {}",
                image.width,
                image.height,
                expected,
                image.data.len()
            )));
        }

        let gl = ctx.raw();
        unsafe {
            let handle = gl.create_texture().map_err(RenderError::ResourceAlloc)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(handle));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                image.width as i32,
                image.height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(image.data.as_slice())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );

            log::debug!("Uploaded {}x{} texture", image.width, image.height);

            Ok(Self {
                ctx: ctx.clone(),
                handle,
                width: image.width,
                height: image.height,
            })
        }
    }

    /// Bind this texture to a texture unit and point a sampler uniform at it
    ///
    /// Activates texture unit `unit`, binds the texture there, and writes the
    /// unit index into `sampler`, so activation and uniform assignment happen
    /// as one call. The owning program must be bound.
    pub fn bind_to_unit(&self, unit: u32, sampler: Option<&glow::UniformLocation>) {
        let gl = self.ctx.raw();
        unsafe {
            gl.active_texture(glow::TEXTURE0 + unit);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.handle));
            gl.uniform_1_i32(sampler, unit as i32);
        }
    }

    /// Texture width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.ctx.raw().delete_texture(self.handle);
        }
    }
}
