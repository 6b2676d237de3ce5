//! Square "Q" logo in the QUANTA gold gradient

use std::path::{Path, PathBuf};

use log::info;

use crate::config::size_kb;
use crate::rendering::paint::{Element, Fill, Text, TextAnchor};
use crate::rendering::{raster, ImageDescriptor};
use crate::Result;

/// Canonical large/retina size
pub const CANONICAL_SIZE: u32 = 512;

/// Sizes written by [`generate_logo_set`] and their intended use
pub const LOGO_SIZES: [(u32, &str); 4] = [
    (44, "email signature"),
    (64, "small icons"),
    (128, "medium icons"),
    (CANONICAL_SIZE, "large/retina"),
];

const CORNER_RATIO: f32 = 0.1875;
const GLYPH_SIZE_RATIO: f32 = 0.5625;
const BASELINE_RATIO: f32 = 0.72;

pub fn file_name(size: u32) -> String {
    format!("quanta-logo-{}.png", size)
}

/// Build the logo descriptor for a `size`x`size` square
pub fn descriptor(size: u32) -> ImageDescriptor {
    let s = size as f32;
    ImageDescriptor::new(size, size)
        .with_gradient(super::gold_gradient("gold"))
        .with(Element::Rect {
            x: 0.0,
            y: 0.0,
            width: s,
            height: s,
            rx: Some(s * CORNER_RATIO),
            fill: Fill::reference("gold"),
            opacity: None,
        })
        .with(Element::Text(Text {
            x: s / 2.0,
            y: s * BASELINE_RATIO,
            content: "Q".to_string(),
            font_family: super::FONT_FAMILY.to_string(),
            font_weight: 700,
            font_size: s * GLYPH_SIZE_RATIO,
            letter_spacing: None,
            anchor: TextAnchor::Middle,
            fill: Fill::color(super::INK),
        }))
}

/// Rasterize the logo at `size` and write it into `dir`. Returns the written
/// path and its size in bytes.
pub fn generate_logo(size: u32, dir: &Path) -> Result<(PathBuf, u64)> {
    let image = raster::rasterize(&descriptor(size))?;
    let path = dir.join(file_name(size));
    let bytes = image.write_to(&path)?;
    info!(
        "  {} ({}x{}) - {} KB",
        file_name(size),
        size,
        size,
        size_kb(bytes)
    );
    Ok((path, bytes))
}

/// Write every size in [`LOGO_SIZES`] into `dir`
pub fn generate_logo_set(dir: &Path) -> Result<Vec<PathBuf>> {
    info!("Generating QUANTA logo PNGs...");
    let mut written = Vec::with_capacity(LOGO_SIZES.len());
    for (size, _usage) in LOGO_SIZES {
        let (path, _) = generate_logo(size, dir)?;
        written.push(path);
    }
    info!("PNGs generated in: {}", dir.display());
    Ok(written)
}
