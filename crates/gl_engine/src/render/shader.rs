//! Shader stage compilation and program linking

use crate::foundation::math::{Mat4, Vec3};
use crate::render::{GlContext, RenderError};
use glow::HasContext;

/// One compilable unit of the rendering pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex processing stage
    Vertex,
    /// Fragment processing stage
    Fragment,
}

impl ShaderStage {
    fn gl_kind(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex => write!(f, "Vertex"),
            Self::Fragment => write!(f, "Fragment"),
        }
    }
}

/// A compiled shader stage
///
/// Owns the GL shader object; the object is deleted on drop. Stages only
/// live long enough to be attached and linked into a [`ShaderProgram`].
pub struct Shader {
    ctx: GlContext,
    handle: glow::Shader,
    stage: ShaderStage,
}

impl Shader {
    /// Compile one shader stage from GLSL source text
    ///
    /// On compile failure the driver's diagnostic log is captured into the
    /// returned [`RenderError::ShaderCompile`]. There is no retry.
    pub fn compile(ctx: &GlContext, stage: ShaderStage, source: &str) -> Result<Self, RenderError> {
        let gl = ctx.raw();
        unsafe {
            let handle = gl
                .create_shader(stage.gl_kind())
                .map_err(RenderError::ResourceAlloc)?;
            gl.shader_source(handle, source);
            gl.compile_shader(handle);

            if !gl.get_shader_compile_status(handle) {
                let log = gl.get_shader_info_log(handle);
                gl.delete_shader(handle);
                log::error!("{stage} shader compilation failed: {log}");
                return Err(RenderError::ShaderCompile { stage, log });
            }

            log::debug!("Compiled {stage} shader");
            Ok(Self {
                ctx: ctx.clone(),
                handle,
                stage,
            })
        }
    }

    /// Which pipeline stage this shader was compiled for
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub(crate) fn handle(&self) -> glow::Shader {
        self.handle
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.ctx.raw().delete_shader(self.handle);
        }
    }
}

/// A linked vertex + fragment shader program
///
/// Linking is a two-phase protocol: the vertex stage is compiled first and a
/// failure short-circuits before the fragment stage is ever compiled; only
/// when both stages compile does linking run. The program object is deleted
/// on drop.
pub struct ShaderProgram {
    ctx: GlContext,
    handle: glow::Program,
}

impl ShaderProgram {
    /// Compile both stages and link them into a program
    pub fn link(
        ctx: &GlContext,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, RenderError> {
        // Fail-fast: a vertex compile error propagates before the fragment
        // stage is compiled.
        let vertex = Shader::compile(ctx, ShaderStage::Vertex, vertex_source)?;
        let fragment = Shader::compile(ctx, ShaderStage::Fragment, fragment_source)?;

        let gl = ctx.raw();
        unsafe {
            let handle = gl.create_program().map_err(RenderError::ResourceAlloc)?;
            gl.attach_shader(handle, vertex.handle());
            gl.attach_shader(handle, fragment.handle());
            gl.link_program(handle);
            gl.detach_shader(handle, vertex.handle());
            gl.detach_shader(handle, fragment.handle());

            if !gl.get_program_link_status(handle) {
                let log = gl.get_program_info_log(handle);
                gl.delete_program(handle);
                log::error!("Shader program link failed: {log}");
                return Err(RenderError::ProgramLink(log));
            }

            log::debug!("Linked shader program");
            Ok(Self {
                ctx: ctx.clone(),
                handle,
            })
        }
        // The stage objects are dropped here, which deletes them; the linked
        // program keeps its own copy of the compiled code.
    }

    /// Make this program the active pipeline for subsequent draw and
    /// uniform calls
    ///
    /// Idempotent; one program is current per context at any time.
    pub fn bind(&self) {
        unsafe {
            self.ctx.raw().use_program(Some(self.handle));
        }
    }

    /// Resolve a uniform name to its location
    ///
    /// Returns `None` when the name is absent from the linked program (or
    /// was optimized out); absence is not an error at this layer, callers
    /// decide how severe a missing uniform is.
    pub fn uniform_location(&self, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.ctx.raw().get_uniform_location(self.handle, name) }
    }

    /// Resolve a vertex attribute name to its slot index
    ///
    /// Returns `None` when the name is absent, never an error.
    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        unsafe { self.ctx.raw().get_attrib_location(self.handle, name) }
    }

    /// Upload a 4x4 matrix uniform (program must be bound)
    pub fn set_mat4(&self, location: Option<&glow::UniformLocation>, value: &Mat4) {
        unsafe {
            self.ctx
                .raw()
                .uniform_matrix_4_f32_slice(location, false, value.as_slice());
        }
    }

    /// Upload a vec3 uniform (program must be bound)
    pub fn set_vec3(&self, location: Option<&glow::UniformLocation>, value: Vec3) {
        unsafe {
            self.ctx
                .raw()
                .uniform_3_f32(location, value.x, value.y, value.z);
        }
    }

    /// Upload a float uniform (program must be bound)
    pub fn set_f32(&self, location: Option<&glow::UniformLocation>, value: f32) {
        unsafe {
            self.ctx.raw().uniform_1_f32(location, value);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.ctx.raw().delete_program(self.handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names_match_gl_terminology() {
        assert_eq!(ShaderStage::Vertex.to_string(), "Vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "Fragment");
    }

    #[test]
    fn compile_error_reports_stage_and_log() {
        let err = RenderError::ShaderCompile {
            stage: ShaderStage::Fragment,
            log: "0:1(1): error: syntax error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("Fragment"));
        assert!(message.contains("syntax error"));
    }
}
