//! `mdsite build` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdsite_config::{CliSettings, Config};
use mdsite_site::SiteBuilder;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Deployment base path, e.g. `/repo/` (same as --base-path).
    #[arg(value_name = "BASE_PATH", conflicts_with = "base_path")]
    base_path_arg: Option<String>,

    /// Path to configuration file (default: auto-discover mdsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Static assets directory (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Page template file (overrides config).
    #[arg(long)]
    template: Option<PathBuf>,

    /// Deployment base path (overrides config).
    #[arg(long)]
    base_path: Option<String>,

    /// Skip pages that fail to convert instead of aborting.
    #[arg(long)]
    keep_going: bool,

    /// Enable verbose output (log every generated page).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the site cannot be built.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = &config.site_resolved;

        output.info(&format!("Content: {}", site.content_dir.display()));
        output.info(&format!("Output: {}", site.output_dir.display()));

        let report = SiteBuilder::from_config(&config)?.build()?;

        for skipped in &report.skipped {
            output.warning(&format!(
                "Skipped {}: {}",
                skipped.source.display(),
                skipped.error
            ));
        }

        output.success(&format!(
            "Built {} pages to {}",
            report.pages.len(),
            site.output_dir.display()
        ));
        Ok(())
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            content_dir: self.content_dir.clone(),
            static_dir: self.static_dir.clone(),
            output_dir: self.output_dir.clone(),
            template: self.template.clone(),
            base_path: self.base_path.clone().or_else(|| self.base_path_arg.clone()),
            fail_fast: self.keep_going.then_some(false),
        }
    }
}
