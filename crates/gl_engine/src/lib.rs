//! # GL Engine
//!
//! A thin object model over the OpenGL 3.3 core-profile pipeline.
//!
//! ## Features
//!
//! - **Shader Management**: Runtime compilation and linking of GLSL stages
//! - **Vertex Data**: One-attribute-per-buffer vertex uploads with attribute bindings
//! - **Textures**: RGBA image upload with mipmaps and fixed sampling parameters
//! - **Cameras**: Free-look and Euler-angle poses sharing one look-at derivation
//! - **Windowing**: GLFW window and context management with per-frame key polling
//!
//! Every GPU object holds a clone of the shared [`render::GlContext`] and
//! releases its underlying handle on drop, so resource lifetimes follow
//! ordinary Rust ownership instead of a global cleanup pass.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     gl_engine::foundation::logging::init();
//!     let mut window = Window::new(&WindowConfig::default())?;
//!     let ctx = window.context();
//!     let program = ShaderProgram::link(&ctx, VERTEX_SRC, FRAGMENT_SRC)?;
//!     while !window.should_close() {
//!         window.poll_events();
//!         program.bind();
//!         // issue draw calls...
//!         window.swap_buffers();
//!     }
//!     Ok(())
//! }
//! # const VERTEX_SRC: &str = "";
//! # const FRAGMENT_SRC: &str = "";
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{load_shader_source, AssetError, ImageData},
        config::WindowConfig,
        foundation::math::{Mat4, Mat4Ext, Vec3},
        render::{
            Camera, CameraPose, GlContext, RenderError, Shader, ShaderProgram, ShaderStage,
            Texture, VertexAttributeBinding, VertexBuffer, Window,
        },
    };
}
