//! 1500x500 X/Twitter header with the QUANTA wordmark and tagline

use std::path::Path;

use log::info;

use crate::config::size_kb;
use crate::rendering::paint::{
    Element, Fill, GradientStop, LinearGradient, Pattern, Stroke, Text, TextAnchor,
};
use crate::rendering::{raster, ImageDescriptor};
use crate::Result;

pub const WIDTH: u32 = 1500;
pub const HEIGHT: u32 = 500;
pub const FILE_NAME: &str = "quanta-x-header.png";

pub const WORDMARK: &str = "QUANTA";
pub const TAGLINE: &str = "Decentralized Alpha Subnet";

const GRID_CELL: f32 = 60.0;

pub fn descriptor() -> ImageDescriptor {
    let w = WIDTH as f32;
    let h = HEIGHT as f32;
    let center = w / 2.0;

    let background = LinearGradient::diagonal(
        "bgGrad",
        vec![
            GradientStop::new(0.0, "#0a0a0f"),
            GradientStop::new(0.5, "#12121a"),
            GradientStop::new(1.0, "#0a0a0f"),
        ],
    );

    // Only the top and left edges of each cell are stroked so tiles join
    // into a continuous grid.
    let grid = Pattern {
        id: "grid".to_string(),
        width: GRID_CELL,
        height: GRID_CELL,
        content: vec![Element::Path {
            d: format!("M {c} 0 L 0 0 0 {c}", c = GRID_CELL),
            fill: Fill::None,
            stroke: Some(Stroke {
                color: "rgba(212,175,55,0.03)".to_string(),
                width: 1.0,
            }),
        }],
    };

    ImageDescriptor::new(WIDTH, HEIGHT)
        .with_gradient(background)
        .with_gradient(super::gold_gradient("goldGrad"))
        .with_pattern(grid)
        .with(Element::backdrop(w, h, Fill::reference("bgGrad")))
        .with(Element::backdrop(w, h, Fill::reference("grid")))
        .with(Element::Text(Text {
            x: center,
            y: 230.0,
            content: WORDMARK.to_string(),
            font_family: super::FONT_FAMILY.to_string(),
            font_weight: 700,
            font_size: 120.0,
            letter_spacing: Some(18.0),
            anchor: TextAnchor::Middle,
            fill: Fill::reference("goldGrad"),
        }))
        .with(Element::Text(Text {
            x: center,
            y: 310.0,
            content: TAGLINE.to_string(),
            font_family: super::FONT_FAMILY.to_string(),
            font_weight: 400,
            font_size: 28.0,
            letter_spacing: Some(1.5),
            anchor: TextAnchor::Middle,
            fill: Fill::color("rgba(232,230,227,0.85)"),
        }))
        .with(Element::Rect {
            x: 550.0,
            y: 340.0,
            width: 400.0,
            height: 1.0,
            rx: None,
            fill: Fill::reference("goldGrad"),
            opacity: Some(0.4),
        })
}

/// Rasterize the header and write it to `path`, returning the size in bytes
pub fn generate_header(path: &Path) -> Result<u64> {
    info!("Generating X/Twitter header ({}x{})...", WIDTH, HEIGHT);
    let image = raster::rasterize(&descriptor())?;
    let bytes = image.write_to(path)?;
    info!("PNG generated: {}", path.display());
    info!("File size: {} KB", size_kb(bytes));
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wordmark_and_tagline_are_centered() {
        let d = descriptor();
        let texts: Vec<&Text> = d
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Text(t) => Some(t),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].content, WORDMARK);
        assert_eq!(texts[0].letter_spacing, Some(18.0));
        assert_eq!(texts[0].fill, Fill::reference("goldGrad"));
        assert_eq!(texts[1].content, TAGLINE);
        assert!(texts.iter().all(|t| t.x == 750.0 && t.anchor == TextAnchor::Middle));
    }

    #[test]
    fn every_reference_is_defined() {
        let d = descriptor();
        for el in &d.elements {
            let fill = match el {
                Element::Rect { fill, .. } | Element::Path { fill, .. } => fill,
                Element::Text(t) => &t.fill,
            };
            if let Fill::Ref(id) = fill {
                assert!(d.defines(id), "undefined paint server {}", id);
            }
        }
    }

    #[test]
    fn background_gradient_has_three_stops() {
        let svg = descriptor().to_svg();
        assert!(svg.contains(r##"<stop offset="50%" stop-color="#12121a"/>"##));
        assert!(svg.contains(r#"patternUnits="userSpaceOnUse""#));
        assert!(svg.contains(r#"opacity="0.4""#));
    }
}
