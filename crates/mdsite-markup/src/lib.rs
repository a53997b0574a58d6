//! Markdown to HTML document tree conversion.
//!
//! This crate converts a small, fixed subset of markdown (headings,
//! paragraphs, fenced code, blockquotes, ordered and unordered lists, bold,
//! italic and code spans, links and images) into a [`DocumentNode`] tree that
//! renders to HTML.
//!
//! # Architecture
//!
//! Conversion runs in two phases:
//! - Block phase: [`markdown_to_blocks`] splits the source on blank lines and
//!   [`block_to_block_type`] classifies each block.
//! - Inline phase: [`tokenize`] splits block text into [`InlineNode`]s, which
//!   are mapped to document leaves.
//!
//! [`markdown_to_html_node`] drives both phases and assembles the blocks under
//! a root `div`. There is no escaping mechanism: an unpaired delimiter is an
//! error rather than literal text.
//!
//! # Example
//!
//! ```
//! use mdsite_markup::{extract_title, markdown_to_html_node};
//!
//! let markdown = "# Hello\n\n**Bold** text";
//! let root = markdown_to_html_node(markdown).unwrap();
//! assert_eq!(root.to_html(), "<div><h1>Hello</h1><p><b>Bold</b> text</p></div>");
//! assert_eq!(extract_title(markdown).unwrap(), "Hello");
//! ```

mod assembler;
mod block;
mod error;
mod inline;
mod node;
mod patterns;
mod title;
mod tokenizer;

pub use assembler::{block_to_html_node, markdown_to_html_node, text_to_children};
pub use block::{BlockType, block_to_block_type, markdown_to_blocks};
pub use error::MarkupError;
pub use inline::{InlineKind, InlineNode};
pub use node::{Attributes, DocumentNode, LeafNode, ParentNode};
pub use title::extract_title;
pub use tokenizer::{
    Delimiter, extract_markdown_images, extract_markdown_links, split_nodes_delimiter,
    split_nodes_image, split_nodes_link, tokenize,
};
