//! Brand image generators (logo set and X/Twitter header)

pub mod header;
pub mod logo;

use crate::rendering::paint::{GradientStop, LinearGradient};

/// Font stack for brand text. Custom web fonts are not available to the
/// rasterizer, so the glyphs fall back to a bold system sans-serif.
pub const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

/// Near-black used for text drawn on gold
pub const INK: &str = "#0d0d14";

pub const GOLD_START: &str = "#d4af37";
pub const GOLD_END: &str = "#f4d03f";

/// Diagonal two-stop brand gold
pub fn gold_gradient(id: &str) -> LinearGradient {
    LinearGradient::diagonal(
        id,
        vec![
            GradientStop::new(0.0, GOLD_START),
            GradientStop::new(1.0, GOLD_END),
        ],
    )
}
