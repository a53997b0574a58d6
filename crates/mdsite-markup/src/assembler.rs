//! Conversion of classified blocks into document nodes.

use crate::block::{BlockType, block_to_block_type, markdown_to_blocks};
use crate::error::MarkupError;
use crate::node::{DocumentNode, LeafNode, ParentNode};
use crate::tokenizer::tokenize;

/// Convert markdown into a document tree rooted at a `div`.
///
/// Each block becomes one child of the root, in document order. Conversion is
/// all-or-nothing: the first inline error aborts it.
///
/// # Errors
///
/// Propagates [`MarkupError::UnmatchedDelimiter`] and
/// [`MarkupError::MissingTarget`] from inline tokenization.
///
/// # Examples
///
/// ```
/// use mdsite_markup::markdown_to_html_node;
///
/// let root = markdown_to_html_node("# Heading 1\n\nThis is a paragraph.").unwrap();
/// assert_eq!(root.to_html(), "<div><h1>Heading 1</h1><p>This is a paragraph.</p></div>");
/// ```
pub fn markdown_to_html_node(markdown: &str) -> Result<DocumentNode, MarkupError> {
    let children = markdown_to_blocks(markdown)
        .into_iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(blocks = children.len(), "Converted markdown to document tree");
    Ok(ParentNode::new("div", children).into())
}

/// Convert a single block into its document node.
///
/// # Errors
///
/// Propagates inline tokenization errors.
pub fn block_to_html_node(block: &str) -> Result<DocumentNode, MarkupError> {
    let block_type = block_to_block_type(block);
    tracing::trace!(%block_type, "Classified block");

    let node = match block_type {
        BlockType::Paragraph => ParentNode::new("p", text_to_children(block)?),
        BlockType::Heading => heading_to_node(block)?,
        BlockType::Code => code_to_node(block),
        BlockType::Quote => quote_to_node(block)?,
        BlockType::UnorderedList => list_to_node("ul", block, |line| {
            line.strip_prefix("- ").unwrap_or(line)
        })?,
        BlockType::OrderedList => list_to_node("ol", block, |line| {
            line.split_once('.').map_or(line, |(_, rest)| rest)
        })?,
    };
    Ok(node.into())
}

/// Tokenize text and convert every inline node into a document node.
///
/// # Errors
///
/// Returns the first tokenization or conversion error.
pub fn text_to_children(text: &str) -> Result<Vec<DocumentNode>, MarkupError> {
    tokenize(text)?
        .iter()
        .map(|node| node.to_document_node())
        .collect()
}

fn heading_to_node(block: &str) -> Result<ParentNode, MarkupError> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    // Marker is followed by exactly one consumed space.
    let text = block.get(level + 1..).unwrap_or_default();
    Ok(ParentNode::new(format!("h{level}"), text_to_children(text)?))
}

/// Code content is emitted verbatim, never tokenized.
fn code_to_node(block: &str) -> ParentNode {
    let lines: Vec<&str> = block.lines().collect();
    let body = match lines.as_slice() {
        [_open, body @ .., _close] => body.join("\n"),
        _ => String::new(),
    };
    let code = ParentNode::new("code", vec![LeafNode::raw(body).into()]);
    ParentNode::new("pre", vec![code.into()])
}

fn quote_to_node(block: &str) -> Result<ParentNode, MarkupError> {
    let text = block
        .lines()
        .map(|line| {
            let mut chars = line.chars();
            chars.next();
            chars.as_str().trim_start()
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(ParentNode::new("blockquote", text_to_children(&text)?))
}

/// Every line of the block becomes one `li`, including whitespace-only lines.
fn list_to_node(
    tag: &str,
    block: &str,
    strip_marker: impl Fn(&str) -> &str,
) -> Result<ParentNode, MarkupError> {
    let items = block
        .lines()
        .map(|line| -> Result<DocumentNode, MarkupError> {
            let children = text_to_children(strip_marker(line).trim())?;
            Ok(ParentNode::new("li", children).into())
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(tag, items))
}
