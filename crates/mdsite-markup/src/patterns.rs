//! Cached regex patterns for block classification and inline tokenization.
//!
//! Patterns are compiled once on first use and shared read-only.

use std::sync::LazyLock;

use regex::Regex;

/// Inline code span: `` `text` ``.
pub(crate) static CODE_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

/// Bold span: `**text**`.
pub(crate) static BOLD_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Italic span: `_text_`.
pub(crate) static ITALIC_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

/// Image: `![alt](url)`.
pub(crate) static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Link: `[text](url)`. Callers reject matches preceded by `!`.
pub(crate) static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Heading marker: 1-6 `#` followed by a space.
pub(crate) static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6} ").unwrap());

/// Ordered list marker: `<n>. `.
pub(crate) static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\. ").unwrap());
