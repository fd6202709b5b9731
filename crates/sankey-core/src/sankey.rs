//! Sankey projection
//!
//! The renderer takes nodes as a label list and edges as three parallel
//! lists (`sources`, `targets`, `values`) of equal length.

use crate::graph::FlowGraph;
use crate::types::{Amount, NodeIndex};
use serde::{Deserialize, Serialize};

/// Chart title for an income-flow diagram
#[must_use]
pub fn income_flow_title(company: &str, year: &str) -> String {
    format!("{company} Income Flow ({year})")
}

/// Positional edge list plus labels, ready for a Sankey renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyData {
    /// Chart title
    pub title: String,
    /// Node labels in index order
    pub labels: Vec<String>,
    /// Source index of each edge
    pub sources: Vec<NodeIndex>,
    /// Target index of each edge
    pub targets: Vec<NodeIndex>,
    /// Amount of each edge
    pub values: Vec<Amount>,
}

impl SankeyData {
    /// Project a flow graph
    #[must_use]
    pub fn from_graph(graph: &FlowGraph, title: impl Into<String>) -> Self {
        let edges = graph.edges();
        Self {
            title: title.into(),
            labels: graph.labels().to_vec(),
            sources: edges.iter().map(|e| e.source).collect(),
            targets: edges.iter().map(|e| e.target).collect(),
            values: edges.iter().map(|e| e.value.clone()).collect(),
        }
    }

    /// Number of links
    #[inline]
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.values.len()
    }

    /// Check that the parallel lists agree and every index names a label
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let n = self.labels.len();
        self.sources.len() == self.values.len()
            && self.targets.len() == self.values.len()
            && self.sources.iter().chain(&self.targets).all(|&i| i < n)
    }
}
