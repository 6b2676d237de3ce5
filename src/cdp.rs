//! Chrome DevTools Protocol backend

use crate::deck::{SlideCapture, SlideTiming};
use crate::pdf::{PdfOptions, PdfRenderer};
use crate::{BrowserConfig, Error, Result};
use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use log::{debug, info};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Headless Chrome backend (uses the `headless_chrome` crate)
///
/// Every call launches its own browser and drops it when done, so a failed
/// render never leaves a stray tab behind for the next one.
#[derive(Debug, Clone, Default)]
pub struct ChromeBackend {
    config: BrowserConfig,
}

impl ChromeBackend {
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }

    fn launch(&self) -> Result<(Browser, Arc<Tab>)> {
        let args: Vec<&OsStr> = self.config.args.iter().map(|a| OsStr::new(a.as_str())).collect();

        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(self.config.sandbox)
            .window_size(Some((self.config.viewport.width, self.config.viewport.height)))
            .args(args)
            .build()
            .map_err(|e| Error::InitializationError(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| Error::InitializationError(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::InitializationError(format!("Failed to create tab: {}", e)))?;

        Ok((browser, tab))
    }

    fn goto(tab: &Tab, url: &str) -> Result<()> {
        tab.navigate_to(url)
            .map_err(|e| Error::PdfError(format!("Navigation to {} failed: {}", url, e)))?;
        tab.wait_until_navigated()
            .map_err(|e| Error::PdfError(format!("Wait for navigation failed: {}", e)))?;
        Ok(())
    }
}

fn print_options(options: &PdfOptions) -> PrintToPdfOptions {
    let (paper_width, paper_height) = options.format.size_inches();
    PrintToPdfOptions {
        landscape: Some(false),
        display_header_footer: Some(options.display_header_footer()),
        print_background: Some(options.print_background),
        paper_width: Some(paper_width),
        paper_height: Some(paper_height),
        margin_top: Some(options.margins.top),
        margin_bottom: Some(options.margins.bottom),
        margin_left: Some(options.margins.left),
        margin_right: Some(options.margins.right),
        // Chrome substitutes its own default band when a template is missing
        header_template: Some(options.header_template.clone().unwrap_or_else(|| "<span></span>".into())),
        footer_template: Some(options.footer_template.clone().unwrap_or_else(|| "<span></span>".into())),
        prefer_css_page_size: Some(options.prefer_css_page_size),
        ..Default::default()
    }
}

impl PdfRenderer for ChromeBackend {
    fn render_html(&self, html: &str, base_dir: &Path, options: &PdfOptions) -> Result<Vec<u8>> {
        // The page is loaded from disk so relative links resolve next to the source
        let mut page = tempfile::Builder::new()
            .prefix(".render-")
            .suffix(".html")
            .tempfile_in(base_dir)?;
        page.write_all(html.as_bytes())?;
        page.flush()?;

        let abs = page.path().canonicalize()?;
        let url = url::Url::from_file_path(&abs)
            .map_err(|_| Error::PdfError(format!("Not an absolute path: {}", abs.display())))?;

        let (browser, tab) = self.launch()?;
        Self::goto(&tab, url.as_str())?;
        debug!("printing {}", url);

        let pdf = tab
            .print_to_pdf(Some(print_options(options)))
            .map_err(|e| Error::PdfError(format!("Print to PDF failed: {}", e)))?;

        drop(tab);
        drop(browser);
        Ok(pdf)
    }
}

impl SlideCapture for ChromeBackend {
    fn capture_slides(&self, url: &str, count: usize, timing: &SlideTiming) -> Result<Vec<Vec<u8>>> {
        let (browser, tab) = self.launch()?;
        Self::goto(&tab, url)?;

        // Client-side hydration
        std::thread::sleep(timing.hydrate);

        let mut shots = Vec::with_capacity(count);
        for i in 0..count {
            info!("  Capturing slide {}/{}...", i + 1, count);
            std::thread::sleep(timing.settle);

            let png = tab
                .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, None, true)
                .map_err(|e| Error::RenderError(format!("Screenshot failed: {}", e)))?;
            shots.push(png);

            if i + 1 < count {
                tab.press_key("ArrowRight")
                    .map_err(|e| Error::RenderError(format!("Failed to advance slide: {}", e)))?;
                std::thread::sleep(timing.advance);
            }
        }

        drop(tab);
        drop(browser);
        Ok(shots)
    }
}
