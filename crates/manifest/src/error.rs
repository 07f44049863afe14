//! Error types for gallery manifest parsing.

use thiserror::Error;

/// Errors that can occur when reading a gallery manifest.
///
/// The layout itself never fails; everything a caller can get wrong about
/// its input is reported here, before a grid is built.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ManifestError {
    /// Text that does not match the manifest grammar.
    #[error("syntax error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    /// A block other than `gallery` or `photos`.
    #[error("unknown block: {0}")]
    UnknownBlock(String),

    /// The same block appears twice.
    #[error("duplicate block: {0}")]
    DuplicateBlock(String),

    /// A property the `gallery` block does not support.
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    /// The same property is set twice.
    #[error("duplicate property: {0}")]
    DuplicateProperty(String),

    /// A value that is not a non-negative whole number of pixels.
    #[error("invalid value for {property}: {value:?} ({reason})")]
    InvalidValue {
        property: String,
        value: String,
        reason: &'static str,
    },

    /// No `gallery` block.
    #[error("missing gallery block")]
    MissingGallery,

    /// The `gallery` block does not set `width`.
    #[error("gallery width is required")]
    MissingWidth,
}
