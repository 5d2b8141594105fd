//! # Rendering System
//!
//! A thin object model over the OpenGL 3.3 core-profile pipeline. Each type
//! wraps exactly one kind of GPU object:
//!
//! - [`Shader`] / [`ShaderProgram`]: GLSL stage compilation and program linking
//! - [`VertexBuffer`]: one attribute's worth of per-vertex data
//! - [`VertexAttributeBinding`]: a vertex-array object tying named shader
//!   attributes to buffers, with an optional index buffer
//! - [`Texture`]: an immutable 2D RGBA texture with mipmaps
//! - [`Camera`]: view-matrix derivation from a free-look or Euler pose
//! - [`Window`]: GLFW window, GL context and per-frame event handling
//!
//! GL state is reached through an explicit [`GlContext`] handle rather than a
//! process global. Every wrapper keeps a clone of the context so its `Drop`
//! impl can release the underlying GPU handle.

mod binding;
mod buffer;
mod camera;
mod context;
mod shader;
mod texture;
mod window;

pub use binding::VertexAttributeBinding;
pub use buffer::VertexBuffer;
pub use camera::{Camera, CameraPose};
pub use context::GlContext;
pub use shader::{Shader, ShaderProgram, ShaderStage};
pub use texture::Texture;
pub use window::Window;

use thiserror::Error;

/// Errors from the rendering layer
#[derive(Error, Debug)]
pub enum RenderError {
    /// GLFW library initialization failed
    #[error("Failed to initialize GLFW: {0}")]
    GlfwInit(String),

    /// Window or GL context creation failed
    #[error("Failed to create window and OpenGL context")]
    WindowCreation,

    /// A shader stage failed to compile
    #[error("{stage} shader compilation failed: {log}")]
    ShaderCompile {
        /// Which pipeline stage failed
        stage: ShaderStage,
        /// Driver-provided diagnostic log
        log: String,
    },

    /// Program linking failed after both stages compiled
    #[error("Shader program link failed: {0}")]
    ProgramLink(String),

    /// A named attribute does not exist in the linked program
    #[error("Attribute not found in program: {0}")]
    UnknownAttribute(String),

    /// GPU object allocation failed
    #[error("GPU resource allocation failed: {0}")]
    ResourceAlloc(String),

    /// Texture pixel data did not match the declared dimensions
    #[error("Invalid texture data: {0}")]
    InvalidTextureData(String),
}
