//! Conversion error types.

use crate::inline::InlineKind;

/// Error raised while converting markdown to a document tree.
///
/// Every variant is fatal for the conversion call that produced it: there is
/// no partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    /// A plain text segment contains an odd number of a delimiter.
    #[error("unmatched `{delimiter}` delimiter in text: {text}")]
    UnmatchedDelimiter {
        /// The delimiter that could not be paired (e.g. `**`).
        delimiter: String,
        /// The plain text segment containing the odd occurrence.
        text: String,
    },

    /// A link or image node has no URL.
    #[error("missing URL for {kind} node")]
    MissingTarget {
        /// Kind of the offending node.
        kind: InlineKind,
    },

    /// Title extraction found no `# ` heading line.
    #[error("no top-level heading found")]
    MissingHeading,
}
