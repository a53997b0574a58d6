//! Block segmentation and classification.

use std::fmt;

use crate::patterns::{HEADING_RE, ORDERED_ITEM_RE};

/// Marker opening and closing a fenced code block.
const CODE_FENCE: &str = "```";

/// Structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::Code => "code",
            Self::Quote => "quote",
            Self::UnorderedList => "unordered_list",
            Self::OrderedList => "ordered_list",
        })
    }
}

/// Split markdown into blocks separated by blank lines.
///
/// Splits on `"\n\n"`, trims each piece and drops the empty ones. Blocks are
/// returned in document order.
///
/// # Examples
///
/// ```
/// use mdsite_markup::markdown_to_blocks;
///
/// let blocks = markdown_to_blocks("# Title\n\n\n\nBody\ntext\n");
/// assert_eq!(blocks, vec!["# Title", "Body\ntext"]);
/// ```
#[must_use]
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block by its structure.
///
/// Tests run in fixed precedence: code fence, heading, quote, unordered
/// list, ordered list, and finally paragraph. Whitespace-only lines are
/// ignored by the quote and list tests.
#[must_use]
pub fn block_to_block_type(block: &str) -> BlockType {
    let lines: Vec<&str> = block.lines().collect();

    if is_code(&lines) {
        return BlockType::Code;
    }
    if lines.first().is_some_and(|line| HEADING_RE.is_match(line)) {
        return BlockType::Heading;
    }
    if content_lines(&lines).next().is_none() {
        return BlockType::Paragraph;
    }
    if content_lines(&lines).all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if content_lines(&lines).all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }
    if is_ordered_list(&lines) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

fn is_code(lines: &[&str]) -> bool {
    match lines {
        [first, .., last] => first.starts_with(CODE_FENCE) && last.starts_with(CODE_FENCE),
        _ => false,
    }
}

/// Every content line must be `<n>. ` with `n` counting up from 1.
fn is_ordered_list(lines: &[&str]) -> bool {
    content_lines(lines)
        .zip(1_usize..)
        .all(|(line, expected)| ordered_item_number(line) == Some(expected))
}

/// Number of an ordered list item line, if it has a `<n>. ` marker.
pub(crate) fn ordered_item_number(line: &str) -> Option<usize> {
    let caps = ORDERED_ITEM_RE.captures(line)?;
    caps.get(1)?.as_str().parse().ok()
}

fn content_lines<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = &'a str> {
    lines
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
}
