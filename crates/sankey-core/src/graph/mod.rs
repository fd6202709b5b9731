//! Flow graph
//!
//! A flow graph is a deduplicated label list plus an ordered list of
//! weighted edges between label indices. Built by [`FlowGraphBuilder`]
//! from a document's section mapping; no positivity, acyclicity or
//! connectivity is enforced.

pub mod builder;
pub mod labels;

pub use builder::{build_flow_graph, FlowGraphBuilder};
pub use labels::LabelIndex;

use crate::types::{Amount, NodeIndex};
use serde::Serialize;

/// Weighted directed edge between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowEdge {
    /// Index of the source label
    pub source: NodeIndex,
    /// Index of the target label
    pub target: NodeIndex,
    /// Amount flowing from source to target
    pub value: Amount,
}

impl FlowEdge {
    /// Create edge
    #[inline]
    #[must_use]
    pub fn new(source: NodeIndex, target: NodeIndex, value: Amount) -> Self {
        Self {
            source,
            target,
            value,
        }
    }
}

/// Entry of the section mapping that produced no edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// Section the entry belongs to
    pub category: String,
    /// Sub-item label, when the entry sits inside a nested mapping
    pub sub_label: Option<String>,
    /// JSON kind that was found instead of a number or mapping
    pub found: String,
}

impl std::fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.sub_label {
            Some(sub) => write!(f, "{} / {}: {}", self.category, sub, self.found),
            None => write!(f, "{}: {}", self.category, self.found),
        }
    }
}

/// Built flow graph
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlowGraph {
    labels: Vec<String>,
    edges: Vec<FlowEdge>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<SkippedEntry>,
}

impl FlowGraph {
    pub(crate) fn from_parts(
        labels: Vec<String>,
        edges: Vec<FlowEdge>,
        skipped: Vec<SkippedEntry>,
    ) -> Self {
        Self {
            labels,
            edges,
            skipped,
        }
    }

    /// Labels in node-index order
    #[inline]
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Edges in insertion order
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Entries dropped while building
    #[inline]
    #[must_use]
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no edges
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Index of a label
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<NodeIndex> {
        self.labels.iter().position(|l| l == label)
    }

    /// Edges as `(source, target, value)` triples
    pub fn triples(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, &Amount)> + '_ {
        self.edges.iter().map(|e| (e.source, e.target, &e.value))
    }

    /// Edges as `(source label, target label, value)`
    ///
    /// Edges whose endpoints name no label are left out.
    pub fn labeled_edges(&self) -> impl Iterator<Item = (&str, &str, &Amount)> + '_ {
        self.edges.iter().filter_map(|e| {
            let source = self.labels.get(e.source)?;
            let target = self.labels.get(e.target)?;
            Some((source.as_str(), target.as_str(), &e.value))
        })
    }

    /// Sum of amounts flowing into `label`
    #[must_use]
    pub fn inflow(&self, label: &str) -> f64 {
        self.index_of(label).map_or(0.0, |idx| {
            self.edges
                .iter()
                .filter(|e| e.target == idx)
                .map(|e| e.value.as_f64())
                .sum()
        })
    }

    /// Sum of amounts flowing out of `label`
    #[must_use]
    pub fn outflow(&self, label: &str) -> f64 {
        self.index_of(label).map_or(0.0, |idx| {
            self.edges
                .iter()
                .filter(|e| e.source == idx)
                .map(|e| e.value.as_f64())
                .sum()
        })
    }
}
