//! Element model error types

use thiserror::Error;

/// Result type for element model operations
pub type OoxmlResult<T> = std::result::Result<T, OoxmlError>;

/// Errors that can occur while reading or writing SpreadsheetML fragments
#[derive(Debug, Error)]
pub enum OoxmlError {
    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Element or attribute name is not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Written fragment is not valid UTF-8
    #[error("UTF-8 error: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),

    /// The fragment root is not the element the caller asked for
    #[error("Unexpected element: expected <{expected}>, found <{found}>")]
    UnexpectedElement {
        expected: &'static str,
        found: String,
    },

    /// A required attribute is absent
    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// An enumerated attribute value is not part of the schema
    #[error("Invalid {kind} value: {value}")]
    InvalidValue { kind: &'static str, value: String },

    /// The fragment contains no element
    #[error("Empty XML fragment")]
    Empty,
}
