//! Vector image descriptors and their rasterization to PNG

pub mod descriptor;
pub mod paint;
pub mod raster;

use std::path::Path;

pub use descriptor::ImageDescriptor;

/// A rasterized image, PNG encoded
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl RasterImage {
    /// Write the PNG to `path`, creating parent directories, and return the
    /// number of bytes on disk.
    pub fn write_to(&self, path: &Path) -> crate::Result<u64> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &self.png_data)?;
        Ok(std::fs::metadata(path)?.len())
    }
}
