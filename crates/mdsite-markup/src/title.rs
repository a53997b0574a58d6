//! Page title extraction.

use crate::error::MarkupError;

/// Extract the page title from the first top-level heading.
///
/// Scans lines in order and returns the text of the first line that, once
/// trimmed, starts with a single `#`. Unlike block classification, the space
/// after the marker is optional: `#Title` yields `"Title"`.
///
/// # Errors
///
/// Returns [`MarkupError::MissingHeading`] if no line qualifies.
///
/// # Examples
///
/// ```
/// use mdsite_markup::extract_title;
///
/// assert_eq!(extract_title("Intro\n# Title\n## Sub").unwrap(), "Title");
/// assert!(extract_title("## Only a subheading").is_err());
/// ```
pub fn extract_title(markdown: &str) -> Result<String, MarkupError> {
    markdown
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("##"))
        .find_map(|line| line.strip_prefix('#'))
        .map(|title| title.trim().to_owned())
        .ok_or(MarkupError::MissingHeading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header() {
        assert_eq!(extract_title("# Hello").unwrap(), "Hello");
    }

    #[test]
    fn test_header_with_spaces() {
        assert_eq!(extract_title("   #   Welcome  ").unwrap(), "Welcome");
    }

    #[test]
    fn test_header_among_other_text() {
        assert_eq!(
            extract_title("Intro text\n# Title\nMore text").unwrap(),
            "Title"
        );
    }

    #[test]
    fn test_header_no_space_after_hash() {
        assert_eq!(extract_title("#Title").unwrap(), "Title");
    }

    #[test]
    fn test_first_top_level_heading_wins() {
        assert_eq!(extract_title("## Sub\n# First\n# Second").unwrap(), "First");
    }

    #[test]
    fn test_no_h1_errors() {
        assert_eq!(
            extract_title("No headers here\n## Subheading"),
            Err(MarkupError::MissingHeading)
        );
    }

    #[test]
    fn test_empty_markdown_errors() {
        assert_eq!(extract_title(""), Err(MarkupError::MissingHeading));
    }
}
