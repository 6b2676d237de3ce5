//! Pitch deck export: screenshot every slide of the live deck and bind the
//! captures into a landscape PDF, one slide per page.

use std::path::PathBuf;
use std::time::Duration;

use base64::Engine as Base64Engine;
use log::info;

use crate::config::{size_mb, SiteConfig};
use crate::pdf::{self, Margins, PageFormat, PdfOptions, PdfRenderer};
use crate::{Error, Result};

pub const BASE_URL: &str = "https://qsub.net";

/// Deck page size in points, half the 1920x1080 capture
pub const PAGE_WIDTH_PT: f64 = 960.0;
pub const PAGE_HEIGHT_PT: f64 = 540.0;

/// A deck published on the website
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Route under the base URL
    pub route: &'static str,
    /// Output file stem
    pub name: &'static str,
    pub slides: usize,
}

pub const FULL_DECK: Deck = Deck {
    route: "/pitch",
    name: "QUANTA_Pitch_Deck",
    slides: 25,
};

pub const LITE_DECK: Deck = Deck {
    route: "/pitch-lite",
    name: "QUANTA_Pitch_Deck_Lite",
    slides: 12,
};

/// Pauses while driving the deck
#[derive(Debug, Clone, PartialEq)]
pub struct SlideTiming {
    /// After the first navigation, before the first capture
    pub hydrate: Duration,
    /// Before each capture, for slide transitions to finish
    pub settle: Duration,
    /// After pressing the next-slide key
    pub advance: Duration,
}

impl Default for SlideTiming {
    fn default() -> Self {
        Self {
            hydrate: Duration::from_millis(2000),
            settle: Duration::from_millis(400),
            advance: Duration::from_millis(300),
        }
    }
}

impl SlideTiming {
    /// No pauses, for offline backends
    pub fn immediate() -> Self {
        Self {
            hydrate: Duration::ZERO,
            settle: Duration::ZERO,
            advance: Duration::ZERO,
        }
    }
}

/// Source of slide screenshots
pub trait SlideCapture {
    /// Load `url` and return `count` PNG captures, advancing one slide
    /// between captures.
    fn capture_slides(&self, url: &str, count: usize, timing: &SlideTiming) -> Result<Vec<Vec<u8>>>;
}

/// Page options for the bound deck: 960x540pt, no margins, no header/footer
pub fn deck_options() -> PdfOptions {
    PdfOptions {
        format: PageFormat::Custom {
            width_in: PAGE_WIDTH_PT / 72.0,
            height_in: PAGE_HEIGHT_PT / 72.0,
        },
        margins: Margins::none(),
        print_background: true,
        header_template: None,
        footer_template: None,
        prefer_css_page_size: true,
    }
}

/// An HTML page with one full-bleed image per printed page
pub fn slides_to_html(title: &str, slides: &[Vec<u8>]) -> String {
    let mut body = String::new();
    for png in slides {
        body.push_str(r#"<section class="slide"><img src="data:image/png;base64,"#);
        body.push_str(&base64::engine::general_purpose::STANDARD.encode(png));
        body.push_str("\"></section>\n");
    }
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
@page {{ size: {w}pt {h}pt; margin: 0; }}
html, body {{ margin: 0; padding: 0; }}
.slide {{ width: {w}pt; height: {h}pt; overflow: hidden; page-break-after: always; }}
.slide:last-child {{ page-break-after: auto; }}
.slide img {{ display: block; width: 100%; height: 100%; }}
</style>
</head>
<body>
{body}</body>
</html>
"#,
        title = pdf::escape_html(title),
        w = PAGE_WIDTH_PT,
        h = PAGE_HEIGHT_PT,
        body = body
    )
}

/// Capture `deck` from `base_url` and write `<tools>/<name>.pdf` plus its
/// public copy. Returns the written path.
pub fn export_deck(
    deck: &Deck,
    base_url: &str,
    cfg: &SiteConfig,
    capture: &dyn SlideCapture,
    renderer: &dyn PdfRenderer,
    timing: &SlideTiming,
) -> Result<PathBuf> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), deck.route);
    let output = cfg.tools_dir().join(format!("{}.pdf", deck.name));

    info!("Generating {}...", deck.name);
    info!("URL: {}", url);
    info!("Output: {}", output.display());
    info!("Slides: {}", deck.slides);

    let slides = capture.capture_slides(&url, deck.slides, timing)?;
    if slides.len() != deck.slides {
        return Err(Error::RenderError(format!(
            "expected {} slides, captured {}",
            deck.slides,
            slides.len()
        )));
    }

    info!("  Combining into PDF...");
    let page = slides_to_html(deck.name, &slides);
    let bytes = renderer.render_html(&page, &std::env::temp_dir(), &deck_options())?;

    let public = cfg.public_copy_of(&output);
    let size = pdf::write_output(&bytes, &output, public.as_deref())?;
    info!("  Done! Size: {} MB", size_mb(size));
    Ok(output)
}

/// Export both the full and the lite deck
pub fn export_all(
    base_url: &str,
    cfg: &SiteConfig,
    capture: &dyn SlideCapture,
    renderer: &dyn PdfRenderer,
) -> Result<Vec<PathBuf>> {
    info!("=== QUANTA Pitch Deck PDF Generator ===");
    let timing = SlideTiming::default();
    let written = [FULL_DECK, LITE_DECK]
        .iter()
        .map(|deck| export_deck(deck, base_url, cfg, capture, renderer, &timing))
        .collect::<Result<Vec<_>>>()?;
    info!("=== All PDFs generated successfully! ===");
    Ok(written)
}
