//! GPU vertex buffer wrapper

use crate::render::{GlContext, RenderError};
use glow::HasContext;

/// Number of whole vertices a flat scalar array holds
///
/// One buffer carries one attribute, so the element count is simply the
/// scalar count divided by the components per vertex. A trailing partial
/// vertex is ignored.
pub(crate) fn vertex_count(scalar_len: usize, components: usize) -> usize {
    if components == 0 {
        return 0;
    }
    scalar_len / components
}

/// A GPU-resident array holding one vertex attribute's data
///
/// Construction uploads an immutable snapshot of the caller's slice with
/// `STATIC_DRAW` usage; mutating the source data afterwards has no effect on
/// GPU contents. Each buffer stores a single logical attribute at zero
/// offset: stride always equals components times the scalar size, with no
/// interleaving and no sub-range views. The buffer object is deleted on drop.
pub struct VertexBuffer {
    ctx: GlContext,
    handle: glow::Buffer,
    components: usize,
    vertex_count: usize,
}

impl VertexBuffer {
    /// Upload a snapshot of `data`, interpreted as `components` floats per
    /// vertex
    pub fn new(ctx: &GlContext, data: &[f32], components: usize) -> Result<Self, RenderError> {
        let gl = ctx.raw();
        unsafe {
            let handle = gl.create_buffer().map_err(RenderError::ResourceAlloc)?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(handle));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STATIC_DRAW,
            );

            let count = vertex_count(data.len(), components);
            log::debug!(
                "Uploaded vertex buffer: {} vertices x {} components ({} bytes)",
                count,
                components,
                std::mem::size_of_val(data)
            );

            Ok(Self {
                ctx: ctx.clone(),
                handle,
                components,
                vertex_count: count,
            })
        }
    }

    /// Make this buffer the active array-buffer target
    pub fn bind(&self) {
        unsafe {
            self.ctx.raw().bind_buffer(glow::ARRAY_BUFFER, Some(self.handle));
        }
    }

    /// Scalars per vertex in this buffer
    pub fn components(&self) -> usize {
        self.components
    }

    /// Byte distance between consecutive vertices (components × scalar size)
    pub fn stride(&self) -> usize {
        self.components * std::mem::size_of::<f32>()
    }

    /// Number of whole vertices stored
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            self.ctx.raw().delete_buffer(self.handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_divides_by_components() {
        assert_eq!(vertex_count(108, 3), 36); // cube positions
        assert_eq!(vertex_count(72, 2), 36); // cube texture coordinates
        assert_eq!(vertex_count(0, 3), 0);
    }

    #[test]
    fn vertex_count_ignores_trailing_partial_vertex() {
        assert_eq!(vertex_count(10, 3), 3);
    }

    #[test]
    fn zero_components_yields_no_vertices() {
        assert_eq!(vertex_count(12, 0), 0);
    }
}
