//! Testing utilities for the Sankey flow workspace
//!
//! Shared fixture documents and temp-file helpers.

#![allow(missing_docs)]

use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Minimal document with one nested and one bare section
pub fn minimal_document() -> Value {
    json!({
        "sections": {
            "Revenue": {"A": 10, "B": 20},
            "NetIncome": 5
        }
    })
}

/// Realistic income statement, amounts in millions
pub fn income_statement_document() -> Value {
    json!({
        "company": "Disney",
        "year": 2024,
        "sections": {
            "Revenue": {
                "Entertainment": 41186,
                "Sports": 17619,
                "Experiences": 34151
            },
            "Costs and Expenses": {
                "Revenue": 80957
            },
            "Operating Income": {
                "Revenue": 10024
            },
            "Net Income": 4972
        }
    })
}

/// Node/link document as produced for D3 layouts
pub fn d3_document() -> Value {
    json!({
        "company": "Disney",
        "year": 2024,
        "nodes": [
            {"name": "Subscriptions"},
            {"name": "Advertising"},
            {"name": "Revenue"},
            {"name": "Net Profit"}
        ],
        "links": [
            {"source": 0, "target": 2, "value": 1000000},
            {"source": 1, "target": 2, "value": 500000},
            {"source": 2, "target": 3, "value": 250000}
        ]
    })
}

/// Temporary directory holding fixture files
///
/// Files live until the value is dropped.
#[derive(Debug)]
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write raw text to `name`
    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create fixture file");
        file.write_all(content.as_bytes()).expect("write fixture file");
        path
    }

    /// Write a JSON value to `name`
    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        let text = serde_json::to_string_pretty(value).expect("serialize fixture");
        self.write_text(name, &text)
    }

    /// Path of a file that does not exist
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for FixtureDir {
    fn default() -> Self {
        Self::new()
    }
}
