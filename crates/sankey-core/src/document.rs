//! Financial statement document
//!
//! The input document is an object with optional `company` and `year`
//! fields and a `sections` object:
//!
//! ```json
//! {
//!   "company": "Disney",
//!   "year": 2024,
//!   "sections": {
//!     "Revenue": {"Services": 79562, "Products": 12674},
//!     "Net Income": 4972
//!   }
//! }
//! ```
//!
//! Key order is preserved, so node indices follow the order of the file.

use crate::config::FlowConfig;
use crate::error::FlowError;
use crate::types::json_kind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resolved document metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Company name
    pub company: String,
    /// Fiscal year, as text
    pub year: String,
}

impl DocumentMeta {
    /// Title passed to the renderer
    #[must_use]
    pub fn title(&self) -> String {
        crate::sankey::income_flow_title(&self.company, &self.year)
    }
}

/// Decoded input document
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialDocument {
    company: Option<String>,
    year: Option<String>,
    sections: Option<Value>,
}

impl FinancialDocument {
    /// Build from a decoded top-level object
    ///
    /// `company` and `year` accept strings and numbers; other non-null
    /// scalars are rendered as JSON text. Null counts as absent.
    #[must_use]
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        Self {
            company: object.get("company").and_then(scalar_text),
            year: object.get("year").and_then(scalar_text),
            sections: object.remove("sections"),
        }
    }

    /// Company name, if present
    #[inline]
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Year, if present
    #[inline]
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    /// Metadata with configured defaults applied
    #[must_use]
    pub fn meta(&self, config: &FlowConfig) -> DocumentMeta {
        DocumentMeta {
            company: self
                .company
                .clone()
                .unwrap_or_else(|| config.default_company.clone()),
            year: self
                .year
                .clone()
                .unwrap_or_else(|| config.default_year.clone()),
        }
    }

    /// The section mapping
    ///
    /// # Errors
    /// [`FlowError::EmptySections`] when `sections` is missing or empty,
    /// [`FlowError::InvalidSections`] when it is a non-empty non-object.
    pub fn sections(&self) -> Result<&Map<String, Value>, FlowError> {
        let Some(value) = self.sections.as_ref() else {
            return Err(FlowError::EmptySections);
        };
        if is_empty_value(value) {
            return Err(FlowError::EmptySections);
        }
        match value {
            Value::Object(map) => Ok(map),
            other => Err(FlowError::InvalidSections {
                found: json_kind(other),
            }),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Null, `false`, zero, and empty strings/arrays/objects
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
