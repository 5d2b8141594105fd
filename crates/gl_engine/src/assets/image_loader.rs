//! Image loading utilities for texture data
//!
//! Decodes image files into RGBA pixel buffers ready for GPU upload.

use crate::assets::AssetError;
use std::path::Path;

/// Loaded image data ready for GPU upload
///
/// Rows are stored bottom-up: [`ImageData::from_file`] flips the decoded
/// image vertically so texture coordinates follow the OpenGL convention
/// (origin at the lower-left corner).
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (always 4 for RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    ///
    /// Decodes via the `image` crate, converts to RGBA8 and flips the rows
    /// vertically for OpenGL. Fails with [`AssetError::LoadFailed`] when the
    /// file is missing or not a decodable image.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image: {e}")))?;

        let rgba_img = img.flipv().to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
            channels: 4,
        })
    }

    /// Create a solid color image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Create a two-color checkerboard image
    ///
    /// Used by the demo as a stand-in texture when an asset file is missing,
    /// so the scene still renders with a visible surface pattern.
    pub fn checkerboard(width: u32, height: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let cell = cell.max(1);
        let mut data = Vec::with_capacity((width * height * 4) as usize);

        for y in 0..height {
            for x in 0..width {
                let color = if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b };
                data.extend_from_slice(&color);
            }
        }

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_color_image_layout() {
        let img = ImageData::solid_color(4, 4, [255, 0, 0, 255]);
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.channels, 4);
        assert_eq!(img.size_bytes(), 4 * 4 * 4); // 4x4 pixels, 4 bytes each

        // Check first pixel is red
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let white = [255, 255, 255, 255];
        let black = [0, 0, 0, 255];
        let img = ImageData::checkerboard(4, 4, 2, white, black);
        assert_eq!(img.size_bytes(), 4 * 4 * 4);

        // (0,0) lands in the first cell, (2,0) in the second.
        assert_eq!(&img.data[0..4], &white);
        let idx = (2 * 4) as usize;
        assert_eq!(&img.data[idx..idx + 4], &black);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = ImageData::from_file("definitely/not/a/real/image.png");
        assert!(matches!(result, Err(AssetError::LoadFailed(_))));
    }
}
