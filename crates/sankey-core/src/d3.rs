//! D3 node/link interchange
//!
//! The categorised form of an income statement, as produced for D3-style
//! Sankey layouts:
//!
//! ```json
//! {
//!   "company": "Disney",
//!   "year": 2024,
//!   "nodes": [{"name": "Parks"}, {"name": "Revenue"}],
//!   "links": [{"source": 0, "target": 1, "value": 32549}]
//! }
//! ```

use crate::document::DocumentMeta;
use crate::error::{D3Error, LoadError};
use crate::graph::{FlowEdge, FlowGraph, LabelIndex};
use crate::loader::load_object;
use crate::types::{Amount, NodeIndex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Named node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct D3Node {
    /// Node label
    pub name: String,
}

/// Link between node positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct D3Link {
    /// Source node position
    pub source: NodeIndex,
    /// Target node position
    pub target: NodeIndex,
    /// Amount
    pub value: Amount,
}

/// Node/link document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct D3Document {
    /// Company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Value>,
    /// Fiscal year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,
    /// Nodes in index order
    pub nodes: Vec<D3Node>,
    /// Links in order
    pub links: Vec<D3Link>,
}

impl D3Document {
    /// Convert a flow graph, keeping label and edge order
    #[must_use]
    pub fn from_graph(graph: &FlowGraph, meta: &DocumentMeta) -> Self {
        Self {
            company: Some(Value::String(meta.company.clone())),
            year: Some(Value::String(meta.year.clone())),
            nodes: graph
                .labels()
                .iter()
                .map(|name| D3Node { name: name.clone() })
                .collect(),
            links: graph
                .edges()
                .iter()
                .map(|e| D3Link {
                    source: e.source,
                    target: e.target,
                    value: e.value.clone(),
                })
                .collect(),
        }
    }

    /// Metadata with the given fallbacks for absent fields
    #[must_use]
    pub fn meta(&self, default_company: &str, default_year: &str) -> DocumentMeta {
        let text = |value: Option<&Value>, fallback: &str| match value {
            None | Some(Value::Null) => fallback.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        DocumentMeta {
            company: text(self.company.as_ref(), default_company),
            year: text(self.year.as_ref(), default_year),
        }
    }

    /// Convert into a flow graph
    ///
    /// # Errors
    /// [`D3Error::DuplicateNode`] if two nodes share a name,
    /// [`D3Error::LinkOutOfRange`] if a link names a missing node.
    pub fn into_graph(self) -> Result<FlowGraph, D3Error> {
        let mut labels = LabelIndex::new();
        for (index, node) in self.nodes.iter().enumerate() {
            if labels.resolve(&node.name) != index {
                return Err(D3Error::DuplicateNode {
                    name: node.name.clone(),
                    index,
                });
            }
        }

        let node_count = labels.len();
        let mut edges = Vec::with_capacity(self.links.len());
        for (link_idx, link) in self.links.into_iter().enumerate() {
            for index in [link.source, link.target] {
                if index >= node_count {
                    return Err(D3Error::LinkOutOfRange {
                        link: link_idx,
                        index,
                        node_count,
                    });
                }
            }
            edges.push(FlowEdge::new(link.source, link.target, link.value));
        }

        Ok(FlowGraph::from_parts(labels.into_labels(), edges, Vec::new()))
    }
}

/// Load a node/link document
///
/// # Errors
/// Loader errors as in [`load_object`]; a document without valid
/// `nodes`/`links` is reported as [`LoadError::Malformed`].
pub fn load_d3_document(path: impl AsRef<Path>) -> Result<D3Document, LoadError> {
    let path = path.as_ref();
    let object = load_object(path)?;
    serde_json::from_value(Value::Object(object)).map_err(|e| LoadError::malformed(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_flow_graph;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: Value) -> D3Document {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn round_trip_keeps_labels_and_edges() {
        let sections = json!({"Revenue": {"A": 10, "B": 20}, "NetIncome": 5});
        let graph = build_flow_graph(sections.as_object().unwrap());
        let meta = DocumentMeta {
            company: "Disney".into(),
            year: "2024".into(),
        };

        let d3 = D3Document::from_graph(&graph, &meta);
        assert_eq!(d3.nodes.len(), 5);
        assert_eq!(d3.links[2].source, 3);

        let back = d3.into_graph().unwrap();
        assert_eq!(back.labels(), graph.labels());
        assert_eq!(back.edges(), graph.edges());
    }

    #[test]
    fn rejects_link_out_of_range() {
        let d3 = parse(json!({
            "nodes": [{"name": "A"}, {"name": "B"}],
            "links": [{"source": 0, "target": 1, "value": 1},
                      {"source": 1, "target": 2, "value": 1}]
        }));
        assert_eq!(
            d3.into_graph().unwrap_err(),
            D3Error::LinkOutOfRange {
                link: 1,
                index: 2,
                node_count: 2
            }
        );
    }

    #[test]
    fn rejects_duplicate_node() {
        let d3 = parse(json!({
            "nodes": [{"name": "A"}, {"name": "A"}],
            "links": []
        }));
        assert!(matches!(
            d3.into_graph(),
            Err(D3Error::DuplicateNode { index: 1, .. })
        ));
    }

    #[test]
    fn meta_renders_numeric_year() {
        let d3 = parse(json!({"company": "Disney", "year": 2024, "nodes": [], "links": []}));
        let meta = d3.meta("Company", "Year");
        assert_eq!(meta.title(), "Disney Income Flow (2024)");

        let bare = parse(json!({"nodes": [], "links": []}));
        assert_eq!(bare.meta("Company", "Year").title(), "Company Income Flow (Year)");
    }
}
