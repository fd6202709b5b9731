//! Sankey Core
//!
//! Income-flow graph construction for Sankey diagrams.
//!
//! # Overview
//!
//! - **FlowGraphBuilder**: section mapping → deduplicated labels + edges
//! - **Loader**: JSON/YAML file → [`FinancialDocument`]
//! - **SankeyData**: positional `labels/sources/targets/values` for a renderer
//! - **D3Document**: node/link interchange form
//!
//! # Example
//!
//! ```rust
//! use sankey_core::graph::build_flow_graph;
//! use serde_json::json;
//!
//! let sections = json!({
//!     "Revenue": {"A": 10, "B": 20},
//!     "NetIncome": 5
//! });
//! let graph = build_flow_graph(sections.as_object().unwrap());
//!
//! assert_eq!(graph.labels(), ["A", "B", "Revenue", "Total Revenue", "NetIncome"]);
//! assert_eq!(graph.edge_count(), 3);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod d3;
pub mod document;
pub mod error;
pub mod graph;
pub mod loader;
pub mod pipeline;
pub mod sankey;
pub mod types;

// Re-exports
pub use config::{FlowConfig, TOTAL_REVENUE_LABEL};
pub use d3::{load_d3_document, D3Document, D3Link, D3Node};
pub use document::{DocumentMeta, FinancialDocument};
pub use error::{D3Error, FlowError, LoadError};
pub use graph::{build_flow_graph, FlowEdge, FlowGraph, FlowGraphBuilder, LabelIndex, SkippedEntry};
pub use loader::{load_document, DocumentFormat};
pub use pipeline::{prepare_d3_sankey, prepare_document, prepare_sankey, FlowReport};
pub use sankey::{income_flow_title, SankeyData};
pub use types::{Amount, NodeIndex};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for flow preparation
    pub use crate::{
        build_flow_graph, prepare_sankey, Amount, FlowConfig, FlowError, FlowGraph, FlowGraphBuilder,
        SankeyData, TOTAL_REVENUE_LABEL,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
