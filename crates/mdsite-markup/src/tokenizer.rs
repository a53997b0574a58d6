//! Inline tokenizer.
//!
//! Splits raw text into [`InlineNode`]s in fixed passes: code spans, bold,
//! italic, images, then links. Each pass only re-splits nodes that are still
//! plain text, so text claimed by an earlier pass is never re-interpreted.

use regex::{Captures, Regex};

use crate::error::MarkupError;
use crate::inline::{InlineKind, InlineNode};
use crate::patterns::{BOLD_SPAN_RE, CODE_SPAN_RE, IMAGE_RE, ITALIC_SPAN_RE, LINK_RE};

/// Paired inline delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `` ` ``
    Code,
    /// `**`
    Bold,
    /// `_`
    Italic,
}

impl Delimiter {
    /// The marker text that opens and closes a span.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Code => "`",
            Self::Bold => "**",
            Self::Italic => "_",
        }
    }

    /// Kind of node produced for the text between two markers.
    #[must_use]
    pub fn kind(self) -> InlineKind {
        match self {
            Self::Code => InlineKind::Code,
            Self::Bold => InlineKind::Bold,
            Self::Italic => InlineKind::Italic,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Code => &*CODE_SPAN_RE,
            Self::Bold => &*BOLD_SPAN_RE,
            Self::Italic => &*ITALIC_SPAN_RE,
        }
    }
}

/// Tokenize text into inline nodes.
///
/// The concatenated text of the returned nodes equals the input with all
/// recognised markup removed.
///
/// # Errors
///
/// Returns [`MarkupError::UnmatchedDelimiter`] if a plain segment contains an
/// odd number of a delimiter.
///
/// # Examples
///
/// ```
/// use mdsite_markup::{InlineKind, InlineNode, tokenize};
///
/// let nodes = tokenize("This is **bold** text").unwrap();
/// assert_eq!(
///     nodes,
///     vec![
///         InlineNode::plain("This is "),
///         InlineNode::styled("bold", InlineKind::Bold),
///         InlineNode::plain(" text"),
///     ]
/// );
/// ```
pub fn tokenize(text: &str) -> Result<Vec<InlineNode>, MarkupError> {
    let nodes = vec![InlineNode::plain(text)];
    let nodes = split_nodes_delimiter(nodes, Delimiter::Code)?;
    let nodes = split_nodes_delimiter(nodes, Delimiter::Bold)?;
    let nodes = split_nodes_delimiter(nodes, Delimiter::Italic)?;
    let nodes = split_nodes_image(nodes);
    Ok(split_nodes_link(nodes))
}

/// Split plain nodes on pairs of `delimiter`.
///
/// Pairs are matched left to right, each closing at the earliest following
/// marker on the same line. Non-plain nodes pass through unchanged.
///
/// # Errors
///
/// Returns [`MarkupError::UnmatchedDelimiter`] if a plain node contains an odd
/// number of markers.
pub fn split_nodes_delimiter(
    nodes: Vec<InlineNode>,
    delimiter: Delimiter,
) -> Result<Vec<InlineNode>, MarkupError> {
    let marker = delimiter.marker();
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }

        if node.text().matches(marker).count() % 2 != 0 {
            return Err(MarkupError::UnmatchedDelimiter {
                delimiter: marker.to_owned(),
                text: node.text().to_owned(),
            });
        }

        let matched = split_plain(node.text(), delimiter.pattern(), &mut out, |caps| {
            let (_, [inner]) = caps.extract();
            Some(InlineNode::styled(inner, delimiter.kind()))
        });
        if !matched {
            out.push(node);
        }
    }

    Ok(out)
}

/// Split plain nodes on `![alt](url)` images.
#[must_use]
pub fn split_nodes_image(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }
        let matched = split_plain(node.text(), &IMAGE_RE, &mut out, |caps| {
            let (_, [alt, url]) = caps.extract();
            Some(InlineNode::image(alt, url))
        });
        if !matched {
            out.push(node);
        }
    }
    out
}

/// Split plain nodes on `[text](url)` links not preceded by `!`.
#[must_use]
pub fn split_nodes_link(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }
        let text = node.text();
        let matched = split_plain(text, &LINK_RE, &mut out, |caps| {
            if preceded_by_bang(text, caps) {
                return None;
            }
            let (_, [label, url]) = caps.extract();
            Some(InlineNode::link(label, url))
        });
        if !matched {
            out.push(node);
        }
    }
    out
}

/// Extract `(alt, url)` pairs of all images in `text`.
///
/// # Examples
///
/// ```
/// use mdsite_markup::extract_markdown_images;
///
/// assert_eq!(
///     extract_markdown_images("This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)"),
///     vec![("image", "https://i.imgur.com/zjjcJKZ.png")]
/// );
/// ```
#[must_use]
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| {
            let (_, [alt, url]) = caps.extract();
            (alt, url)
        })
        .collect()
}

/// Extract `(text, url)` pairs of all links in `text`, ignoring images.
#[must_use]
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    LINK_RE
        .captures_iter(text)
        .filter(|caps| !preceded_by_bang(text, caps))
        .map(|caps| {
            let (_, [label, url]) = caps.extract();
            (label, url)
        })
        .collect()
}

fn preceded_by_bang(text: &str, caps: &Captures<'_>) -> bool {
    text[..caps.get_match().start()].ends_with('!')
}

/// Split `text` around every accepted match of `re`.
///
/// `styled` builds the node for a match or rejects it with `None`, in which
/// case the matched text stays plain. Nothing is pushed when no match is
/// accepted; the return value says whether any was.
fn split_plain<'t>(
    text: &'t str,
    re: &Regex,
    out: &mut Vec<InlineNode>,
    mut styled: impl FnMut(&Captures<'t>) -> Option<InlineNode>,
) -> bool {
    let mut cursor = 0;
    let mut matched = false;

    for caps in re.captures_iter(text) {
        let Some(node) = styled(&caps) else {
            continue;
        };
        let whole = caps.get_match();
        if whole.start() > cursor {
            out.push(InlineNode::plain(&text[cursor..whole.start()]));
        }
        out.push(node);
        cursor = whole.end();
        matched = true;
    }

    if matched && cursor < text.len() {
        out.push(InlineNode::plain(&text[cursor..]));
    }
    matched
}
