//! Document tree nodes and HTML rendering.
//!
//! A document is a tree of [`DocumentNode`]s. Leaves carry a value (raw text
//! when untagged), parents carry an ordered list of children. Both render to
//! markup through [`DocumentNode::to_html`].

use std::fmt;

/// Ordered HTML attributes.
///
/// Attributes render in insertion order. Inserting an existing key replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Create an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an attribute, keeping the original position of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as ` key="value"` pairs, one leading space per attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdsite_markup::Attributes;
    ///
    /// let attrs = Attributes::new()
    ///     .with("href", "https://www.google.com")
    ///     .with("target", "_blank");
    /// assert_eq!(attrs.to_html(), r#" href="https://www.google.com" target="_blank""#);
    /// assert_eq!(Attributes::new().to_html(), "");
    /// ```
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Attributes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// A node holding a single value.
///
/// Without a tag the value is raw text and renders as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LeafNode {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    tag: Option<String>,
    value: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Attributes::is_empty"))]
    attributes: Attributes,
}

impl LeafNode {
    /// Create a tagged leaf.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is empty.
    #[must_use]
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        let tag = tag.into();
        assert!(!tag.is_empty(), "leaf node tag must not be empty");
        Self {
            tag: Some(tag),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create an untagged leaf rendered as raw text.
    #[must_use]
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn write_html(&self, out: &mut String) {
        let Some(tag) = &self.tag else {
            out.push_str(&self.value);
            return;
        };
        out.push('<');
        out.push_str(tag);
        self.attributes.write_html(out);
        out.push('>');
        out.push_str(&self.value);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

/// A tagged node wrapping child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParentNode {
    tag: String,
    children: Vec<DocumentNode>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Attributes::is_empty"))]
    attributes: Attributes,
}

impl ParentNode {
    /// Create a parent node. An empty `children` list is allowed.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is empty.
    #[must_use]
    pub fn new(tag: impl Into<String>, children: Vec<DocumentNode>) -> Self {
        let tag = tag.into();
        assert!(!tag.is_empty(), "parent node tag must not be empty");
        Self {
            tag,
            children,
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn children(&self) -> &[DocumentNode] {
        &self.children
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        self.attributes.write_html(out);
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// A node of the rendered document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum DocumentNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl DocumentNode {
    /// Tag of the node, `None` for raw text.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => leaf.tag(),
            Self::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Children of a parent node; leaves have none.
    #[must_use]
    pub fn children(&self) -> &[DocumentNode] {
        match self {
            Self::Leaf(_) => &[],
            Self::Parent(parent) => parent.children(),
        }
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::Leaf(leaf) => leaf.attributes(),
            Self::Parent(parent) => parent.attributes(),
        }
    }

    /// Render the node and its descendants to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(256);
        self.write_html(&mut out);
        out
    }

    /// Append the rendered HTML to `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Leaf(leaf) => leaf.write_html(out),
            Self::Parent(parent) => parent.write_html(out),
        }
    }
}

impl From<LeafNode> for DocumentNode {
    fn from(leaf: LeafNode) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<ParentNode> for DocumentNode {
    fn from(parent: ParentNode) -> Self {
        Self::Parent(parent)
    }
}

impl fmt::Display for DocumentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
