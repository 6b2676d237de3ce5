//! QUANTA site tooling
//!
//! Generators and components behind the QUANTA website:
//!
//! - **Brand images**: the logo set and the X/Twitter header, built as vector
//!   image descriptors and rasterized with resvg ([`assets`], [`rendering`])
//! - **Documents**: the technical specification rendered from Markdown to PDF
//!   through headless Chrome ([`pdf`]), and the pitch deck export ([`deck`])
//! - **Docs preview**: launcher for the mintlify dev server ([`preview`])
//! - **Contact form**: form state, validation and the `POST /api/contact`
//!   call ([`contact`])
//!
//! # Example
//!
//! ```no_run
//! use quanta_tools::{assets, SiteConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = SiteConfig::default();
//! let bytes = assets::header::generate_header(&cfg.header_path())?;
//! println!("header: {} bytes", bytes);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::SiteConfig;

pub mod assets;
pub mod rendering;

pub mod contact;
pub mod deck;
pub mod pdf;
pub mod preview;

// Headless Chrome backend for PDF printing and slide capture
#[cfg(feature = "cdp")]
pub mod cdp;

#[cfg(feature = "cdp")]
pub use cdp::ChromeBackend;

/// Configuration for the headless browser
///
/// Defaults suit containers and CI: the Chrome sandbox is off and the
/// setuid sandbox helper is disabled.
///
/// # Examples
///
/// ```
/// let cfg = quanta_tools::BrowserConfig::default();
/// assert!(!cfg.sandbox);
/// assert!(cfg.args.iter().any(|a| a == "--no-sandbox"));
/// ```
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Window size of the headless browser
    pub viewport: Viewport,
    /// Whether to keep Chrome's sandbox enabled
    pub sandbox: bool,
    /// Extra command-line flags passed to Chrome
    pub args: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            sandbox: false,
            args: vec![
                "--no-sandbox".to_string(),
                "--disable-setuid-sandbox".to_string(),
            ],
        }
    }
}

impl BrowserConfig {
    /// 1920x1080 presentation window for slide capture. Web security is off
    /// so cross-origin slide assets load.
    pub fn presentation() -> Self {
        let mut cfg = Self {
            viewport: Viewport {
                width: 1920,
                height: 1080,
            },
            ..Default::default()
        };
        cfg.args.push("--disable-web-security".to_string());
        cfg
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}
