//! SVG rasterization backed by resvg

use log::{debug, warn};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::fontdb::{Database, Family, Query, Stretch, Style, Weight};
use resvg::usvg::{Options, Tree};

use crate::rendering::{ImageDescriptor, RasterImage};
use crate::{Error, Result};

/// Installed faces tried, in order, when the database's `sans-serif` family
/// does not resolve
const SANS_FALLBACKS: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "FreeSans",
    "Helvetica",
    "Arial",
];

/// Point the generic `sans-serif` family at a face that is installed.
///
/// fontdb maps `sans-serif` to "Arial" regardless of what is present, and
/// usvg drops text whose font stack resolves to nothing. Returns the family
/// now used, or `None` when the database holds no faces.
pub fn resolve_sans_serif(db: &mut Database) -> Option<String> {
    let query = Query {
        families: &[Family::SansSerif],
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };
    if let Some(id) = db.query(&query) {
        return db
            .face(id)
            .and_then(|face| face.families.first())
            .map(|(name, _)| name.clone());
    }

    let installed = |name: &str| {
        db.faces()
            .any(|face| face.families.iter().any(|(family, _)| family == name))
    };
    let family = SANS_FALLBACKS
        .iter()
        .copied()
        .find(|name| installed(*name))
        .map(|name| name.to_string())
        .or_else(|| {
            db.faces()
                .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        })?;

    debug!("sans-serif resolves to {}", family);
    db.set_sans_serif_family(family.clone());
    Some(family)
}

/// Rasterize a descriptor at its own pixel size
pub fn rasterize(descriptor: &ImageDescriptor) -> Result<RasterImage> {
    rasterize_svg(&descriptor.to_svg(), descriptor.width, descriptor.height)
}

/// Rasterize SVG markup to exactly `width`x`height` pixels.
///
/// The document is stretched to fill the target on both axes, so the output
/// dimensions never depend on the intrinsic size of the markup.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> Result<RasterImage> {
    let mut opt = Options::default();
    opt.fontdb_mut().load_system_fonts();
    if resolve_sans_serif(opt.fontdb_mut()).is_none() {
        if svg.contains("<text") {
            return Err(Error::RenderError(
                "No system fonts found to render text".to_string(),
            ));
        }
        warn!("No system fonts found");
    }

    let tree = Tree::from_str(svg, &opt)
        .map_err(|e| Error::RenderError(format!("Failed to parse SVG: {}", e)))?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(Error::RenderError(format!(
            "Invalid SVG size: {}x{}",
            size.width(),
            size.height()
        )));
    }

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        Error::RenderError(format!("Failed to create {}x{} pixmap", width, height))
    })?;

    let transform = Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let png_data = pixmap
        .encode_png()
        .map_err(|e| Error::RenderError(format!("PNG encoding failed: {}", e)))?;

    debug!("rasterized {}x{} ({} bytes)", width, height, png_data.len());

    Ok(RasterImage {
        width,
        height,
        png_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;

    #[test]
    fn output_matches_requested_dimensions() {
        let img = rasterize_svg(SQUARE, 40, 20).unwrap();
        assert_eq!(img.width, 40);
        assert_eq!(img.height, 20);
        assert_eq!(&img.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn malformed_markup_is_a_render_error() {
        let err = rasterize_svg("<svg", 10, 10).unwrap_err();
        assert!(matches!(err, Error::RenderError(_)));
    }

    fn opaque_pixels(img: &RasterImage) -> usize {
        let pixmap = Pixmap::decode_png(&img.png_data).unwrap();
        pixmap.pixels().iter().filter(|p| p.alpha() == 255).count()
    }

    #[test]
    fn empty_database_has_no_sans_family() {
        let mut db = Database::new();
        assert_eq!(resolve_sans_serif(&mut db), None);
    }

    #[test]
    fn sans_serif_resolves_to_an_installed_face() {
        let mut db = Database::new();
        db.load_system_fonts();
        let family = resolve_sans_serif(&mut db).expect("no system fonts");
        assert!(db
            .faces()
            .any(|face| face.families.iter().any(|(name, _)| *name == family)));
    }

    #[test]
    fn generic_font_stack_draws_glyphs() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><text x="50" y="80" text-anchor="middle" font-family="Arial, Helvetica, sans-serif" font-weight="bold" font-size="80" fill="#000000">Q</text></svg>"##;
        let img = rasterize_svg(svg, 100, 100).unwrap();
        assert!(opaque_pixels(&img) > 200, "text was not drawn");
    }

    #[test]
    fn zero_sized_target_is_rejected() {
        let err = rasterize_svg(SQUARE, 0, 10).unwrap_err();
        assert!(err.to_string().contains("pixmap"));
    }
}
