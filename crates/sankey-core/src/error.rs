//! Error types for Sankey flow preparation
//!
//! Provides error handling for:
//! - Document loading (file → JSON/YAML value)
//! - Section validation (value → section mapping)
//! - D3 node/link interchange

use std::path::PathBuf;

/// Errors at the document-loading boundary
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Input file does not exist
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// IO error during file read
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid structured data
    #[error("file is not valid structured data: {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },
}

impl LoadError {
    /// Create IO error for path, mapping a missing file to [`LoadError::NotFound`]
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create malformed-data error for path
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Path of the document that failed to load
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } | Self::Malformed { path, .. } => path,
        }
    }
}

/// Errors converting a D3 node/link document into a flow graph
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum D3Error {
    /// Two nodes share the same name
    #[error("duplicate node name '{name}' at index {index}")]
    DuplicateNode { name: String, index: usize },

    /// Link endpoint does not name a node
    #[error("link {link} references node {index}, but only {node_count} nodes exist")]
    LinkOutOfRange {
        link: usize,
        index: usize,
        node_count: usize,
    },
}

/// Main error type for flow preparation
///
/// Every variant is recoverable: callers report it and stop processing
/// the current document.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Document could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// `sections` is missing or empty
    #[error("no sections found in the document; expected a 'sections' object")]
    EmptySections,

    /// `sections` holds something other than an object
    #[error("'sections' must be an object, found {found}")]
    InvalidSections { found: &'static str },

    /// D3 document is inconsistent
    #[error("invalid node/link document: {0}")]
    D3(#[from] D3Error),
}

impl FlowError {
    /// Check if the error came from reading or decoding the input file
    #[inline]
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Check if the document loaded but had no usable sections
    #[inline]
    #[must_use]
    pub fn is_empty_sections(&self) -> bool {
        matches!(self, Self::EmptySections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_maps_not_found() {
        let err = LoadError::io_error("missing.json", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.path(), std::path::Path::new("missing.json"));
    }

    #[test]
    fn io_error_keeps_other_kinds() {
        let err = LoadError::io_error("locked.json", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn flow_error_classification() {
        let load: FlowError = LoadError::malformed("a.json", "eof").into();
        assert!(load.is_load_error());
        assert!(!load.is_empty_sections());
        assert!(FlowError::EmptySections.is_empty_sections());
    }

    #[test]
    fn messages_name_the_file() {
        let err = LoadError::NotFound {
            path: "data/disney_2023.json".into(),
        };
        assert_eq!(err.to_string(), "file not found: data/disney_2023.json");
    }
}
