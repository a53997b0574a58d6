//! mdsite CLI - Markdown static site generator.
//!
//! Provides commands for:
//! - `build`: Generate the site from the content and static directories
//! - `render`: Convert a single markdown file and print the result

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, RenderArgs};
use output::Output;

/// mdsite - Markdown static site generator.
#[derive(Parser)]
#[command(name = "mdsite", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site.
    Build(BuildArgs),
    /// Convert one markdown file to HTML.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);

    // --verbose enables INFO level, otherwise defer to RUST_LOG
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_verbose() {
        let cli = Cli::try_parse_from(["mdsite", "build", "-v"]).unwrap();
        assert!(matches!(cli.command, Commands::Build(args) if args.verbose));
    }

    #[test]
    fn test_parse_render_requires_file() {
        assert!(Cli::try_parse_from(["mdsite", "render"]).is_err());
    }

    #[test]
    fn test_parse_render_json() {
        let cli = Cli::try_parse_from(["mdsite", "render", "page.md", "--format", "json"]);
        assert!(matches!(cli.map(|c| c.command), Ok(Commands::Render(_))));
    }
}
