//! Markdown to PDF pipeline
//!
//! A [`RenderJob`] names the Markdown source, the stylesheets, the output
//! and the page options. [`generate_pdf`] converts the Markdown to a styled
//! HTML page and hands it to a [`PdfRenderer`] backend (headless Chrome in
//! production, see [`crate::cdp`]).

use std::path::{Path, PathBuf};

use log::{error, info};
use pulldown_cmark::{html, Options, Parser};

use crate::config::{size_mb, SiteConfig};
use crate::{Error, Result};

/// Technical specification version; the file names carry only the major part
pub const SPEC_VERSION: &str = "4.0";

/// Paper size
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageFormat {
    Letter,
    A4,
    /// Explicit size in inches
    Custom { width_in: f64, height_in: f64 },
}

impl PageFormat {
    /// Paper width and height in inches
    pub fn size_inches(self) -> (f64, f64) {
        match self {
            PageFormat::Letter => (8.5, 11.0),
            PageFormat::A4 => (8.27, 11.69),
            PageFormat::Custom { width_in, height_in } => (width_in, height_in),
        }
    }

    /// Paper size in PDF points (1/72in)
    pub fn size_points(self) -> (f64, f64) {
        let (w, h) = self.size_inches();
        (w * 72.0, h * 72.0)
    }
}

/// Page margins in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    pub fn none() -> Self {
        Self { top: 0.0, bottom: 0.0, left: 0.0, right: 0.0 }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self { top: 0.9, bottom: 0.9, left: 1.0, right: 1.0 }
    }
}

/// Print options forwarded to the renderer.
///
/// Header and footer templates are HTML fragments; elements with the classes
/// `pageNumber`, `totalPages`, `title` and `date` are filled in by the
/// renderer on every page.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    pub format: PageFormat,
    pub margins: Margins,
    pub print_background: bool,
    pub header_template: Option<String>,
    pub footer_template: Option<String>,
    /// Let an `@page { size: ... }` rule in the document override `format`
    pub prefer_css_page_size: bool,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            format: PageFormat::Letter,
            margins: Margins::default(),
            print_background: true,
            header_template: None,
            footer_template: None,
            prefer_css_page_size: false,
        }
    }
}

impl PdfOptions {
    /// Whether the renderer should draw the header/footer band
    pub fn display_header_footer(&self) -> bool {
        self.header_template.is_some() || self.footer_template.is_some()
    }
}

/// Backend that prints an HTML page to PDF bytes
pub trait PdfRenderer {
    /// Print `html`. Relative URLs in the page resolve against `base_dir`.
    fn render_html(&self, html: &str, base_dir: &Path, options: &PdfOptions) -> Result<Vec<u8>>;
}

/// One Markdown to PDF conversion
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Where the finished PDF is published, if anywhere
    pub public_copy: Option<PathBuf>,
    pub stylesheets: Vec<PathBuf>,
    pub title: String,
    pub options: PdfOptions,
}

impl RenderJob {
    /// The QUANTA technical specification job with its fixed paths and
    /// Letter layout.
    pub fn technical_specification(cfg: &SiteConfig) -> Self {
        let major = SPEC_VERSION.split('.').next().unwrap_or(SPEC_VERSION);
        let stem = format!("QUANTA_Technical_Specification_v{}", major);
        let title = format!("QUANTA Technical Specification v{}", SPEC_VERSION);
        let tools = cfg.tools_dir();
        let destination = tools.join(format!("{}.pdf", stem));

        Self {
            source: tools.join(format!("{}.md", stem)),
            public_copy: cfg.public_copy_of(&destination),
            destination,
            stylesheets: vec![tools.join("academic-style.css")],
            options: PdfOptions {
                header_template: Some(header_template(&title)),
                footer_template: Some(footer_template()),
                ..PdfOptions::default()
            },
            title,
        }
    }
}

/// Running header: document title on the left, CONFIDENTIAL on the right
pub fn header_template(title: &str) -> String {
    format!(
        r#"<div style="font-size: 8pt; font-family: sans-serif; color: #888; width: 100%; padding: 0 0.5in; display: flex; justify-content: space-between;"><span>{}</span><span style="color: #c9a227;">CONFIDENTIAL</span></div>"#,
        escape_html(title)
    )
}

/// Running footer: `Page n of m`
pub fn footer_template() -> String {
    r#"<div style="font-size: 8pt; font-family: sans-serif; color: #888; width: 100%; text-align: center; padding: 0 0.5in;">Page <span class="pageNumber"></span> of <span class="totalPages"></span></div>"#.to_string()
}

/// Convert Markdown to an HTML fragment with every extension enabled
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::all());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Wrap an HTML fragment into a standalone page with inline stylesheets
pub fn wrap_document(title: &str, stylesheets: &[String], body: &str) -> String {
    let mut styles = String::new();
    for css in stylesheets {
        styles.push_str("<style>\n");
        styles.push_str(css);
        styles.push_str("\n</style>\n");
    }
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n{}</head>\n<body>\n<article class=\"markdown-body\">\n{}</article>\n</body>\n</html>\n",
        escape_html(title),
        styles,
        body
    )
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Write `bytes` to `destination` and, if requested, publish a copy.
/// Returns the size of the written file.
pub(crate) fn write_output(bytes: &[u8], destination: &Path, public_copy: Option<&Path>) -> Result<u64> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(destination, bytes)?;
    let size = std::fs::metadata(destination)?.len();

    if let Some(copy) = public_copy {
        if let Some(dir) = copy.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::copy(destination, copy)?;
        info!("Copied to public folder: {}", copy.display());
    }
    Ok(size)
}

fn read_source(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::PdfError(format!("Failed to read {} {}: {}", what, path.display(), e)))
}

/// Run a render job end to end. Returns the size of the PDF in bytes.
pub fn generate_pdf(job: &RenderJob, renderer: &dyn PdfRenderer) -> Result<u64> {
    info!("Generating PDF...");
    info!("Document Title: {}", job.title);
    info!("Input: {}", job.source.display());
    info!("Output: {}", job.destination.display());
    if let Some(copy) = &job.public_copy {
        info!("Public Output: {}", copy.display());
    }

    let result = render_job(job, renderer);
    match &result {
        Ok(size) => {
            info!("PDF generated successfully: {}", job.destination.display());
            info!("File size: {} MB", size_mb(*size));
        }
        Err(e) => error!("Error during PDF generation: {}", e),
    }
    result
}

fn render_job(job: &RenderJob, renderer: &dyn PdfRenderer) -> Result<u64> {
    let markdown = read_source(&job.source, "markdown source")?;
    let stylesheets = job
        .stylesheets
        .iter()
        .map(|p| {
            info!("Stylesheet: {}", p.display());
            read_source(p, "stylesheet")
        })
        .collect::<Result<Vec<_>>>()?;

    let page = wrap_document(&job.title, &stylesheets, &markdown_to_html(&markdown));
    let base_dir = job
        .source
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let bytes = renderer.render_html(&page, base_dir, &job.options)?;
    if bytes.is_empty() {
        return Err(Error::PdfError("renderer returned an empty document".into()));
    }

    write_output(&bytes, &job.destination, job.public_copy.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_is_612_by_792_points() {
        assert_eq!(PageFormat::Letter.size_points(), (612.0, 792.0));
    }

    #[test]
    fn default_margins_match_print_layout() {
        let m = Margins::default();
        assert_eq!((m.top, m.bottom, m.left, m.right), (0.9, 0.9, 1.0, 1.0));
    }

    #[test]
    fn spec_job_uses_major_version_in_file_names() {
        let job = RenderJob::technical_specification(&SiteConfig::new("site"));
        assert_eq!(
            job.source,
            PathBuf::from("site/tools/QUANTA_Technical_Specification_v4.md")
        );
        assert_eq!(
            job.public_copy,
            Some(PathBuf::from("site/public/docs/QUANTA_Technical_Specification_v4.pdf"))
        );
        assert_eq!(job.title, "QUANTA Technical Specification v4.0");
        assert!(job.options.display_header_footer());
        assert!(job.options.print_background);
    }

    #[test]
    fn header_and_footer_carry_placeholders() {
        let header = header_template("Spec <draft>");
        assert!(header.contains("Spec &lt;draft&gt;"));
        assert!(header.contains("CONFIDENTIAL"));
        let footer = footer_template();
        assert!(footer.contains(r#"<span class="pageNumber"></span>"#));
        assert!(footer.contains(r#"<span class="totalPages"></span>"#));
    }

    #[test]
    fn markdown_tables_are_rendered() {
        let html = markdown_to_html("# Title\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<h1"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn wrapped_document_inlines_styles() {
        let page = wrap_document("T", &["h1 { color: red; }".to_string()], "<p>x</p>");
        assert!(page.contains("<title>T</title>"));
        assert!(page.contains("h1 { color: red; }"));
        assert!(page.contains("<p>x</p>"));
    }
}
