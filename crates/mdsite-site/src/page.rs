//! Single page generation.

use std::fs;
use std::path::Path;

use mdsite_markup::{MarkupError, extract_title, markdown_to_html_node};

use crate::builder::BuildError;
use crate::template::Template;

/// Point root-relative `href` and `src` attributes at `base_path`.
///
/// Only attributes whose value starts with `/` are rewritten. A `base_path`
/// of `/` leaves the HTML unchanged.
///
/// # Examples
///
/// ```
/// use mdsite_site::rewrite_base_path;
///
/// assert_eq!(
///     rewrite_base_path(r#"<a href="/about">About</a>"#, "/blog/"),
///     r#"<a href="/blog/about">About</a>"#
/// );
/// ```
#[must_use]
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    if base_path == "/" {
        return html.to_owned();
    }
    html.replace(r#"href="/"#, &format!(r#"href="{base_path}"#))
        .replace(r#"src="/"#, &format!(r#"src="{base_path}"#))
}

/// Render markdown into a complete HTML page.
///
/// # Errors
///
/// Returns a [`MarkupError`] if the markdown cannot be converted or has no
/// top-level heading.
pub fn render_page(
    markdown: &str,
    template: &Template,
    base_path: &str,
) -> Result<String, MarkupError> {
    let content = markdown_to_html_node(markdown)?.to_html();
    let title = extract_title(markdown)?;
    Ok(rewrite_base_path(
        &template.render(&title, &content),
        base_path,
    ))
}

/// Read a markdown file and render it into a complete HTML page.
///
/// # Errors
///
/// Returns [`BuildError::Io`] if the file cannot be read and
/// [`BuildError::Markup`] if it cannot be rendered.
pub fn generate_page(
    source: &Path,
    template: &Template,
    base_path: &str,
) -> Result<String, BuildError> {
    let markdown = fs::read_to_string(source).map_err(|e| BuildError::Io {
        path: source.to_path_buf(),
        source: e,
    })?;
    render_page(&markdown, template, base_path).map_err(|e| BuildError::Markup {
        path: source.to_path_buf(),
        source: e,
    })
}
