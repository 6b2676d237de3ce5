//! Output locations for the generators
//!
//! Every path is derived from a single site root so the binary can run from
//! anywhere with `--root`. The layout matches the website checkout:
//!
//! ```text
//! <root>/public/images/   logo PNGs
//! <root>/public/          X header
//! <root>/public/docs/     published PDFs
//! <root>/tools/           Markdown sources, stylesheet, generated PDFs
//! <root>/docs/            mintlify project
//! ```

use std::path::{Path, PathBuf};

/// Site layout configuration
///
/// # Examples
///
/// ```
/// let cfg = quanta_tools::SiteConfig::default();
/// assert!(cfg.header_path().ends_with("public/quanta-x-header.png"));
/// ```
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Website checkout root
    pub root: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl SiteConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn public_dir(&self) -> PathBuf {
        self.root.join("public")
    }

    /// Directory receiving the logo PNG set
    pub fn images_dir(&self) -> PathBuf {
        self.public_dir().join("images")
    }

    /// Directory receiving published copies of generated PDFs
    pub fn public_docs_dir(&self) -> PathBuf {
        self.public_dir().join("docs")
    }

    pub fn header_path(&self) -> PathBuf {
        self.public_dir().join(crate::assets::header::FILE_NAME)
    }

    pub fn tools_dir(&self) -> PathBuf {
        self.root.join("tools")
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root.join("docs")
    }

    /// Published copy location for a file generated under `tools/`
    pub fn public_copy_of(&self, generated: &Path) -> Option<PathBuf> {
        generated
            .file_name()
            .map(|name| self.public_docs_dir().join(name))
    }
}

/// Size of a file in kilobytes, formatted with one decimal like `12.3`
pub fn size_kb(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / 1024.0)
}

/// Size of a file in megabytes, formatted with two decimals like `1.25`
pub fn size_mb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0 / 1024.0)
}
