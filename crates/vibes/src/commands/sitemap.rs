//! `vibes sitemap` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use vibes_config::{CliSettings, Config};
use vibes_content::{ContentIndex, FsSource};
use vibes_sitemap::{generate, to_xml};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sitemap command.
#[derive(Args)]
pub(crate) struct SitemapArgs {
    /// Path to configuration file (default: auto-discover vibes.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content root directory (overrides config).
    #[arg(short = 'd', long)]
    content_dir: Option<PathBuf>,

    /// Public base URL (overrides config).
    #[arg(long, env = "VIBES_BASE_URL")]
    base_url: Option<String>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SitemapArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            base_url: self.base_url,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let xml = render(&config)?;

        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &xml)?;
                output.success(&format!("Sitemap written to {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(xml.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

/// Build the index described by `config` and render its sitemap.
fn render(config: &Config) -> Result<String, CliError> {
    let base_url = config.base_url()?;
    let source = FsSource::with_extension(
        config.content_resolved.root_dir.clone(),
        &config.content_resolved.extension,
    );
    let index = ContentIndex::load(&source)?;

    let entries = generate(&index, &config.sitemap_resolved, &base_url);
    tracing::info!(entries = entries.len(), "Generated sitemap");

    Ok(to_xml(&entries)?)
}
