//! Inline text spans.

use std::fmt;

use crate::error::MarkupError;
use crate::node::{Attributes, DocumentNode, LeafNode};

/// Formatting kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum InlineKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl InlineKind {
    /// Whether nodes of this kind carry a URL.
    #[must_use]
    pub fn has_target(self) -> bool {
        matches!(self, Self::Link | Self::Image)
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Code => "code",
            Self::Link => "link",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for InlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A span of text with a formatting kind and, for links and images, a URL.
///
/// Equality compares all fields, treating a missing target as an empty one.
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InlineNode {
    text: String,
    kind: InlineKind,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    target: Option<String>,
}

impl InlineNode {
    /// Create a node from its parts.
    ///
    /// No check is made that `target` matches `kind`; a link or image without
    /// a target fails later in [`to_document_node`](Self::to_document_node).
    #[must_use]
    pub fn new(text: impl Into<String>, kind: InlineKind, target: Option<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            target,
        }
    }

    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, InlineKind::Plain, None)
    }

    /// Create a bold, italic or code span (or plain text).
    ///
    /// # Panics
    ///
    /// Panics if `kind` is [`InlineKind::Link`] or [`InlineKind::Image`].
    #[must_use]
    pub fn styled(text: impl Into<String>, kind: InlineKind) -> Self {
        assert!(!kind.has_target(), "{kind} nodes need a target");
        Self::new(text, kind, None)
    }

    #[must_use]
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, InlineKind::Link, Some(url.into()))
    }

    #[must_use]
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, InlineKind::Image, Some(url.into()))
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> InlineKind {
        self.kind
    }

    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.kind == InlineKind::Plain
    }

    /// Convert to the document node that renders this span.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::MissingTarget`] for a link or image without a URL.
    pub fn to_document_node(&self) -> Result<DocumentNode, MarkupError> {
        let leaf = match self.kind {
            InlineKind::Plain => LeafNode::raw(&self.text),
            InlineKind::Bold => LeafNode::new("b", &self.text),
            InlineKind::Italic => LeafNode::new("i", &self.text),
            InlineKind::Code => LeafNode::new("code", &self.text),
            InlineKind::Link => LeafNode::new("a", &self.text)
                .with_attributes(Attributes::new().with("href", self.require_target()?)),
            InlineKind::Image => LeafNode::new("img", "").with_attributes(
                Attributes::new()
                    .with("src", self.require_target()?)
                    .with("alt", &self.text),
            ),
        };
        Ok(leaf.into())
    }

    fn require_target(&self) -> Result<&str, MarkupError> {
        self.target
            .as_deref()
            .ok_or(MarkupError::MissingTarget { kind: self.kind })
    }
}

impl PartialEq for InlineNode {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.kind == other.kind
            && self.target.as_deref().unwrap_or_default()
                == other.target.as_deref().unwrap_or_default()
    }
}
