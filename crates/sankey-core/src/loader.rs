//! Document loading
//!
//! Reads a file from disk and decodes it by extension: `.yaml`/`.yml` as
//! YAML, anything else as JSON.

use crate::document::FinancialDocument;
use crate::error::LoadError;
use serde_json::{Map, Value};
use std::path::Path;

/// Supported document encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    /// JSON (default)
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from the file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Decode text in this format
    ///
    /// # Errors
    /// Returns the decoder's message on invalid input.
    pub fn decode(self, content: &str) -> Result<Value, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Read and decode the top-level object of a document
///
/// # Errors
/// [`LoadError::NotFound`] for a missing file, [`LoadError::Io`] for other
/// read failures, [`LoadError::Malformed`] for undecodable content or a
/// top level that is not an object.
pub fn load_object(path: &Path) -> Result<Map<String, Value>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::io_error(path, e))?;
    let format = DocumentFormat::from_path(path);
    tracing::debug!("Decoding {} as {:?}", path.display(), format);

    match format.decode(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(LoadError::malformed(
            path,
            format!(
                "expected a top-level object, found {}",
                crate::types::json_kind(&other)
            ),
        )),
        Err(message) => Err(LoadError::malformed(path, message)),
    }
}

/// Load a financial statement document
///
/// # Errors
/// See [`load_object`].
pub fn load_document(path: impl AsRef<Path>) -> Result<FinancialDocument, LoadError> {
    let path = path.as_ref();
    let object = load_object(path)?;
    Ok(FinancialDocument::from_object(object))
}
