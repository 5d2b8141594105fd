//! Asset loading
//!
//! File-based collaborators of the renderer: shader source text and decoded
//! image pixels. The renderer itself never touches the filesystem; it is
//! handed source strings and [`ImageData`] buffers produced here.

mod image_loader;
mod shader_loader;

pub use image_loader::ImageData;
pub use shader_loader::load_shader_source;

use thiserror::Error;

/// Errors from asset loading
#[derive(Error, Debug)]
pub enum AssetError {
    /// Failed to decode or load asset content
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Asset content was readable but malformed
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
