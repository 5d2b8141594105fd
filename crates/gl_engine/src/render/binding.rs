//! Vertex attribute binding (vertex-array object wrapper)

use crate::render::{GlContext, RenderError, ShaderProgram, VertexBuffer};
use glow::HasContext;

/// Associates named shader attributes with vertex buffers
///
/// Wraps one vertex-array object. Each [`bind_attribute`] call wires one
/// buffer to one attribute slot resolved against a program; several bindings
/// may reference the same buffer. An optional index buffer can be attached
/// for indexed drawing. The array object and any index buffer are deleted on
/// drop.
///
/// [`bind_attribute`]: VertexAttributeBinding::bind_attribute
pub struct VertexAttributeBinding {
    ctx: GlContext,
    vao: glow::VertexArray,
    index_buffer: Option<glow::Buffer>,
}

impl VertexAttributeBinding {
    /// Create an empty binding
    pub fn new(ctx: &GlContext) -> Result<Self, RenderError> {
        let gl = ctx.raw();
        unsafe {
            let vao = gl.create_vertex_array().map_err(RenderError::ResourceAlloc)?;
            Ok(Self {
                ctx: ctx.clone(),
                vao,
                index_buffer: None,
            })
        }
    }

    /// Wire `buffer` to the attribute named `name` in `program`
    ///
    /// Resolves the attribute location against the linked program, then
    /// configures the attribute pointer from the buffer's layout (component
    /// count, float type, tight stride, zero offset) and enables the slot.
    /// Fails with [`RenderError::UnknownAttribute`] when the program does not
    /// expose the name.
    pub fn bind_attribute(
        &self,
        name: &str,
        program: &ShaderProgram,
        buffer: &VertexBuffer,
    ) -> Result<(), RenderError> {
        program.bind();
        let slot = program
            .attribute_location(name)
            .ok_or_else(|| RenderError::UnknownAttribute(name.to_string()))?;

        let gl = self.ctx.raw();
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            buffer.bind();
            gl.vertex_attrib_pointer_f32(
                slot,
                buffer.components() as i32,
                glow::FLOAT,
                false,
                buffer.stride() as i32,
                0,
            );
            gl.enable_vertex_attrib_array(slot);
        }

        log::debug!(
            "Bound attribute '{}' at slot {} ({} components)",
            name,
            slot,
            buffer.components()
        );
        Ok(())
    }

    /// Attach an index buffer to this binding
    ///
    /// Uploads `indices` into a new element-array buffer recorded in the
    /// vertex-array object. Calling this again replaces the previous index
    /// buffer and releases its GPU handle.
    pub fn set_index_buffer(&mut self, indices: &[u32]) -> Result<(), RenderError> {
        let gl = self.ctx.raw();
        unsafe {
            let ebo = gl.create_buffer().map_err(RenderError::ResourceAlloc)?;
            gl.bind_vertex_array(Some(self.vao));
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );

            if let Some(old) = self.index_buffer.replace(ebo) {
                gl.delete_buffer(old);
            }
        }
        Ok(())
    }

    /// Whether an index buffer is attached
    pub fn has_index_buffer(&self) -> bool {
        self.index_buffer.is_some()
    }

    /// Make this binding's vertex layout current for subsequent draw calls
    pub fn bind(&self) {
        unsafe {
            self.ctx.raw().bind_vertex_array(Some(self.vao));
        }
    }
}

impl Drop for VertexAttributeBinding {
    fn drop(&mut self) {
        let gl = self.ctx.raw();
        unsafe {
            if let Some(ebo) = self.index_buffer.take() {
                gl.delete_buffer(ebo);
            }
            gl.delete_vertex_array(self.vao);
        }
    }
}
