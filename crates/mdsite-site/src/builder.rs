//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};

use mdsite_config::Config;
use mdsite_markup::MarkupError;

use crate::files::{copy_static, find_markdown};
use crate::page::generate_page;
use crate::template::Template;

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Filesystem failure at `path`.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Markdown in `path` could not be converted.
    #[error("Failed to convert {}: {source}", path.display())]
    Markup { path: PathBuf, source: MarkupError },
    /// Required input directory does not exist.
    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
}

/// Inputs for a site build.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Directory containing markdown sources.
    pub content_dir: PathBuf,
    /// Directory copied verbatim into `output_dir`.
    pub static_dir: PathBuf,
    /// Generated site directory. Deleted and recreated on every build.
    pub output_dir: PathBuf,
    /// Prefix for root-relative `href`/`src` URLs.
    pub base_path: String,
    /// Abort on the first failing page instead of skipping it.
    pub fail_fast: bool,
}

/// A page that was left out of the build.
#[derive(Debug)]
pub struct SkippedPage {
    /// Markdown source path.
    pub source: PathBuf,
    /// Why the page could not be generated.
    pub error: BuildError,
}

/// Outcome of a successful build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Generated HTML files, in build order.
    pub pages: Vec<PathBuf>,
    /// Pages skipped because they failed to convert.
    pub skipped: Vec<SkippedPage>,
    /// Number of static files copied.
    pub static_files: usize,
}

/// Builds a static site from a content directory.
///
/// Every `.md` file under the content directory becomes an `.html` file at the
/// same relative location in the output directory.
#[derive(Debug)]
pub struct SiteBuilder {
    settings: SiteSettings,
    template: Template,
}

impl SiteBuilder {
    /// Create a builder with the built-in template.
    #[must_use]
    pub fn new(settings: SiteSettings) -> Self {
        Self {
            settings,
            template: Template::default(),
        }
    }

    /// Create a builder from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Io`] if the configured template cannot be read.
    pub fn from_config(config: &Config) -> Result<Self, BuildError> {
        let site = &config.site_resolved;
        let template = Template::load_or_default(site.template.as_deref())?;
        Ok(Self::new(SiteSettings {
            content_dir: site.content_dir.clone(),
            static_dir: site.static_dir.clone(),
            output_dir: site.output_dir.clone(),
            base_path: site.base_path.clone(),
            fail_fast: config.build.fail_fast,
        })
        .with_template(template))
    }

    /// Use a custom page template.
    #[must_use]
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// Build settings.
    #[must_use]
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Regenerate the output directory.
    ///
    /// The content directory is checked before anything is deleted. Pages are
    /// generated in sorted path order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingDirectory`] if the content directory does
    /// not exist, [`BuildError::Io`] on filesystem failures, and, when
    /// `fail_fast` is set, the first page error.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let SiteSettings {
            content_dir,
            static_dir,
            output_dir,
            ..
        } = &self.settings;

        if !content_dir.is_dir() {
            return Err(BuildError::MissingDirectory(content_dir.clone()));
        }

        let mut report = BuildReport {
            static_files: copy_static(static_dir, output_dir)?,
            ..BuildReport::default()
        };

        for relative in find_markdown(content_dir)? {
            let source = content_dir.join(&relative);
            let dest = output_dir.join(&relative).with_extension("html");

            match self.build_page(&source, &dest) {
                Ok(()) => {
                    tracing::info!(
                        source = %source.display(),
                        dest = %dest.display(),
                        "Generated page"
                    );
                    report.pages.push(dest);
                }
                Err(error) if !self.settings.fail_fast => {
                    tracing::warn!(path = %source.display(), %error, "Skipping page");
                    report.skipped.push(SkippedPage { source, error });
                }
                Err(error) => return Err(error),
            }
        }

        tracing::info!(
            pages = report.pages.len(),
            skipped = report.skipped.len(),
            "Site build complete"
        );
        Ok(report)
    }

    fn build_page(&self, source: &Path, dest: &Path) -> Result<(), BuildError> {
        let html = generate_page(source, &self.template, &self.settings.base_path)?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(dest, html).map_err(|e| BuildError::Io {
            path: dest.to_path_buf(),
            source: e,
        })
    }
}
