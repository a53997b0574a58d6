//! `mdsite render` command implementation.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use mdsite_markup::{extract_title, markdown_to_html_node};

use crate::error::CliError;

/// Output format for a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// HTML markup.
    Html,
    /// Document tree as JSON.
    Json,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to convert.
    file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Print the page title instead of the converted document.
    #[arg(long, conflicts_with = "format")]
    title: bool,
}

impl RenderArgs {
    /// Execute the render command, writing the result to stdout.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let markdown = fs::read_to_string(&self.file)?;
        let rendered = self.render(&markdown)?;
        writeln!(io::stdout().lock(), "{rendered}")?;
        Ok(())
    }

    fn render(&self, markdown: &str) -> Result<String, CliError> {
        if self.title {
            return Ok(extract_title(markdown)?);
        }
        let root = markdown_to_html_node(markdown)?;
        match self.format {
            Format::Html => Ok(root.to_html()),
            Format::Json => Ok(serde_json::to_string_pretty(&root)?),
        }
    }
}
