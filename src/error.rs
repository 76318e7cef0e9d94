//! Unified error types for glycan-tools.
//!
//! Expected negative outcomes — an identifier that matches nothing, a
//! conversion service that is down — are modeled as ordinary return values
//! elsewhere in the crate. The types here cover genuine failures: malformed
//! notation, unreadable datasets, broken configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for glycan-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GlycanToolsError {
    /// Errors while parsing a glycan notation string
    #[error("Failed to parse notation: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors while talking to an external format-conversion collaborator
    #[error("Format conversion failed: {context}")]
    Conversion {
        context: String,
        #[source]
        source: ConversionErrorKind,
    },

    /// Errors while loading or indexing the catalog dataset
    #[error("Catalog error: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific notation parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Missing WURCS= prefix")]
    MissingWurcsPrefix,

    #[error("Malformed WURCS header: {0}")]
    InvalidWurcsHeader(String),

    #[error("Expected {expected} residue descriptors, found {found}")]
    ResidueCountMismatch { expected: usize, found: usize },

    #[error("Unbalanced residue brackets at offset {0}")]
    UnbalancedBrackets(usize),

    #[error("Expected sequence and linkage sections, found {found} sections")]
    SectionCountMismatch { found: usize },

    #[error("Length of {field} ({found}) does not match declared count ({expected})")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid residue sequence entry: {0}")]
    InvalidSequenceEntry(String),

    #[error("Empty input")]
    EmptyInput,
}

/// Specific conversion error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConversionErrorKind {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Converter unavailable: {0}")]
    Unavailable(String),

    #[error("External tool failed: {0}")]
    ToolFailed(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Record {0} has no archetype variant")]
    MissingArchetype(String),

    #[error("Dataset is empty")]
    EmptyDataset,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for glycan-tools operations
pub type Result<T> = std::result::Result<T, GlycanToolsError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl GlycanToolsError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a conversion error with context
    pub fn conversion(context: impl Into<String>, source: ConversionErrorKind) -> Self {
        Self::Conversion {
            context: context.into(),
            source,
        }
    }

    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for GlycanToolsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for GlycanToolsError {
    fn from(err: serde_json::Error) -> Self {
        Self::catalog(
            "JSON deserialization",
            CatalogErrorKind::InvalidJson(err.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = GlycanToolsError::parse("wurcs split", ParseErrorKind::MissingWurcsPrefix);
        let display = err.to_string();
        assert!(
            display.contains("parse"),
            "Error message should mention parsing: {}",
            display
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = GlycanToolsError::io("/data/GLYCOSHAPE.json", io_err);
        assert!(err.to_string().contains("GLYCOSHAPE.json"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let kind = ParseErrorKind::LengthMismatch {
            field: "linkage list",
            expected: 3,
            found: 2,
        };
        let display = kind.to_string();
        assert!(display.contains("linkage list"));
        assert!(display.contains('3'));
        assert!(display.contains('2'));
    }
}
