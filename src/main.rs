use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::error;

use quanta_tools::{assets, deck, preview, SiteConfig};

#[derive(Parser)]
#[command(name = "quanta-tools", version, about = "QUANTA website asset and document generators")]
struct Cli {
    /// Website checkout root
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the logo PNG set (44, 64, 128 and 512 px)
    Logo,
    /// Write the 1500x500 X/Twitter header PNG
    Header,
    /// Render the technical specification Markdown to PDF
    Pdf,
    /// Export the full and lite pitch decks to PDF
    Deck {
        /// Site serving the decks
        #[arg(long, default_value = deck::BASE_URL)]
        base_url: String,
    },
    /// Start the mintlify docs preview server
    Docs,
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let cfg = SiteConfig::new(cli.root);

    match cli.command {
        Command::Logo => {
            assets::logo::generate_logo_set(&cfg.images_dir())
                .context("logo generation failed")?;
        }
        Command::Header => {
            assets::header::generate_header(&cfg.header_path())
                .context("header generation failed")?;
        }
        Command::Pdf => render_spec(&cfg)?,
        Command::Deck { base_url } => export_decks(&cfg, &base_url)?,
        Command::Docs => {
            let cmd = preview::PreviewCommand::mintlify(&cfg.docs_dir());
            let code = cmd
                .run()
                .with_context(|| format!("failed to start {}", cmd.program))?;
            return Ok(code);
        }
    }
    Ok(0)
}

#[cfg(feature = "cdp")]
fn render_spec(cfg: &SiteConfig) -> anyhow::Result<()> {
    let job = quanta_tools::pdf::RenderJob::technical_specification(cfg);
    let backend = quanta_tools::ChromeBackend::default();
    quanta_tools::pdf::generate_pdf(&job, &backend).context("PDF generation failed")?;
    Ok(())
}

#[cfg(not(feature = "cdp"))]
fn render_spec(_cfg: &SiteConfig) -> anyhow::Result<()> {
    anyhow::bail!("PDF generation requires the 'cdp' feature")
}

#[cfg(feature = "cdp")]
fn export_decks(cfg: &SiteConfig, base_url: &str) -> anyhow::Result<()> {
    let backend = quanta_tools::ChromeBackend::new(quanta_tools::BrowserConfig::presentation());
    deck::export_all(base_url, cfg, &backend, &backend).context("pitch deck export failed")?;
    Ok(())
}

#[cfg(not(feature = "cdp"))]
fn export_decks(_cfg: &SiteConfig, _base_url: &str) -> anyhow::Result<()> {
    anyhow::bail!("pitch deck export requires the 'cdp' feature")
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
