//! Error types for the catalog build pipeline.
//!
//! Every failure mode is a structured [`CatalogError`] variant carrying the
//! identifying fields of the offending record, so callers (and tests) can
//! match on error kind instead of message text. All errors are fatal: the
//! pipeline aborts on the first one and writes no output.

use std::io;
use thiserror::Error;

/// Which field constraint a catalog object violated.
///
/// Used with [`CatalogError::Validation`] to pinpoint the failing check.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Name is empty or whitespace-only.
    NameEmpty,
    /// Name is 255 characters or longer.
    NameTooLong { length: usize },
    /// Catalog code is empty or whitespace-only.
    CodeEmpty,
    /// Catalog code is 255 characters or longer.
    CodeTooLong { length: usize },
    /// Type attribute is not one of the eight known categories.
    UnknownType { value: String },
    /// Right ascension outside `[0, 24)` hours.
    RaOutOfRange { value: f64 },
    /// Declination outside `[-90, 90]` degrees.
    DecOutOfRange { value: f64 },
    /// Apparent magnitude outside `[-30, 30]`.
    MagnitudeOutOfRange { value: f64 },
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameEmpty => write!(f, "name must not be empty"),
            Self::NameTooLong { length } => {
                write!(f, "name too long ({} chars, max 254)", length)
            }
            Self::CodeEmpty => write!(f, "catalog code must not be empty"),
            Self::CodeTooLong { length } => {
                write!(f, "catalog code too long ({} chars, max 254)", length)
            }
            Self::UnknownType { value } => {
                write!(f, "unsupported catalog type '{}'", value)
            }
            Self::RaOutOfRange { value } => {
                write!(f, "RA {} outside [0, 24) hours", value)
            }
            Self::DecOutOfRange { value } => {
                write!(f, "Dec {} outside [-90, 90] degrees", value)
            }
            Self::MagnitudeOutOfRange { value } => {
                write!(f, "magnitude {} outside [-30, 30]", value)
            }
        }
    }
}

/// Unified error type for catalog loading, generation, and emission.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document's root element is not `<catalog>`.
    #[error("expected <catalog> as root element, found <{found}>")]
    Schema { found: String },

    /// A required attribute is missing or a numeric attribute failed to parse.
    #[error("object '{object}': attribute '{attribute}' missing or not numeric (got '{value}')")]
    Format {
        object: String,
        attribute: String,
        value: String,
    },

    /// A catalog object violated one of the field constraints.
    #[error("object '{name}': {constraint}")]
    Validation { name: String, constraint: Constraint },

    /// A name or code destined for the packed string table is not pure ASCII.
    #[error("object '{name}': {field} contains non-ASCII characters ('{value}')")]
    Encoding {
        name: String,
        field: &'static str,
        value: String,
    },

    /// The input markup is not well-formed XML.
    #[error("malformed catalog XML: {0}")]
    Xml(String),

    /// I/O failure reading the input file or writing an output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CatalogError {
    /// Creates a [`Validation`](Self::Validation) error for the named object.
    pub fn validation(name: &str, constraint: Constraint) -> Self {
        Self::Validation {
            name: name.to_string(),
            constraint,
        }
    }

    /// Creates a [`Format`](Self::Format) error for an attribute of the named object.
    pub fn format(object: &str, attribute: &str, value: &str) -> Self {
        Self::Format {
            object: object.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }
}

/// Convenience alias for `Result<T, CatalogError>`.
pub type Result<T> = std::result::Result<T, CatalogError>;
