//! HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.

use std::fs;
use std::path::Path;

use crate::builder::BuildError;

/// Placeholder replaced with the page title.
const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Placeholder replaced with the converted page body.
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Template used when no template file is configured.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ Title }}</title>
<link rel="stylesheet" href="/index.css">
</head>
<body>
<article>
{{ Content }}
</article>
</body>
</html>
"#;

/// Page template.
///
/// Placeholders are substituted textually; no escaping is applied to either
/// the title or the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Create a template from its source text.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a template file.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Io`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let source = fs::read_to_string(path).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded template");
        Ok(Self::new(source))
    }

    /// Load from `path` when given, otherwise use [`DEFAULT_TEMPLATE`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Io`] if an explicit template cannot be read.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, BuildError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Template source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fill every occurrence of both placeholders.
    ///
    /// The title is substituted first, so a title containing the content
    /// placeholder is itself expanded.
    #[must_use]
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}
