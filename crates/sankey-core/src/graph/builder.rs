//! Flow Graph Builder
//!
//! Turns a section mapping into a [`FlowGraph`].
//!
//! Each section is either a nested mapping of sub-label → amount, producing
//! one `sub-label → category` edge per entry, or a bare amount, producing a
//! single `root label → category` edge. Anything else produces no edge and
//! is recorded as a [`SkippedEntry`].

use crate::config::TOTAL_REVENUE_LABEL;
use crate::graph::{FlowEdge, FlowGraph, LabelIndex, SkippedEntry};
use crate::types::{json_kind, Amount, NodeIndex};
use serde_json::{Map, Value};

/// Builder for flow graphs
///
/// Usage:
/// ```rust
/// use sankey_core::graph::FlowGraphBuilder;
/// use sankey_core::types::Amount;
///
/// let mut builder = FlowGraphBuilder::new();
/// let a = builder.resolve("Parks");
/// let revenue = builder.resolve("Revenue");
/// builder.add_edge(a, revenue, Amount::from(32_549));
///
/// let graph = builder.build();
/// assert_eq!(graph.labels(), ["Parks", "Revenue"]);
/// ```
#[derive(Debug, Clone)]
pub struct FlowGraphBuilder {
    labels: LabelIndex,
    edges: Vec<FlowEdge>,
    skipped: Vec<SkippedEntry>,
    root_label: String,
}

impl FlowGraphBuilder {
    /// Create a builder using [`TOTAL_REVENUE_LABEL`] for bare amounts
    #[must_use]
    pub fn new() -> Self {
        Self::with_root_label(TOTAL_REVENUE_LABEL)
    }

    /// Create a builder with a custom source label for bare amounts
    #[must_use]
    pub fn with_root_label(root_label: impl Into<String>) -> Self {
        Self {
            labels: LabelIndex::new(),
            edges: Vec::new(),
            skipped: Vec::new(),
            root_label: root_label.into(),
        }
    }

    /// Source label used for bare-amount sections
    #[inline]
    #[must_use]
    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    /// Get the number of nodes
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Get the number of edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Index of `label`, assigning the next index if unseen
    pub fn resolve(&mut self, label: &str) -> NodeIndex {
        self.labels.resolve(label)
    }

    /// Append an edge
    ///
    /// Parallel edges are kept; nothing is merged.
    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, value: Amount) {
        debug_assert!(source < self.labels.len() && target < self.labels.len());
        self.edges.push(FlowEdge::new(source, target, value));
    }

    /// Add one section of the document
    ///
    /// Source is resolved before target, so sub-labels get lower indices
    /// than the category they flow into. A sub-item without a numeric
    /// amount is skipped before its sub-label is resolved, so it never
    /// becomes a node and later labels keep contiguous indices.
    pub fn add_section(&mut self, category: &str, payload: &Value) {
        match payload {
            Value::Object(items) => self.add_breakdown(category, items),
            Value::Number(_) => {
                if let Some(value) = Amount::from_value(payload) {
                    let source = self.labels.resolve(&self.root_label);
                    let target = self.labels.resolve(category);
                    self.add_edge(source, target, value);
                }
            }
            other => self.skip(category, None, other),
        }
    }

    /// Add every section of a mapping, in mapping order
    pub fn add_sections(&mut self, sections: &Map<String, Value>) {
        for (category, payload) in sections {
            self.add_section(category, payload);
        }
    }

    fn add_breakdown(&mut self, category: &str, items: &Map<String, Value>) {
        for (sub_label, value) in items {
            let Some(amount) = Amount::from_value(value) else {
                self.skip(category, Some(sub_label), value);
                continue;
            };
            let source = self.labels.resolve(sub_label);
            let target = self.labels.resolve(category);
            self.add_edge(source, target, amount);
        }
    }

    fn skip(&mut self, category: &str, sub_label: Option<&str>, value: &Value) {
        let entry = SkippedEntry {
            category: category.to_owned(),
            sub_label: sub_label.map(str::to_owned),
            found: json_kind(value).to_owned(),
        };
        tracing::debug!("Skipping entry without a numeric amount: {}", entry);
        self.skipped.push(entry);
    }

    /// Finish construction
    #[must_use]
    pub fn build(self) -> FlowGraph {
        tracing::debug!(
            "Built flow graph: {} nodes, {} edges, {} skipped",
            self.labels.len(),
            self.edges.len(),
            self.skipped.len()
        );
        FlowGraph::from_parts(self.labels.into_labels(), self.edges, self.skipped)
    }
}

impl Default for FlowGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a flow graph from a section mapping with the default root label
#[must_use]
pub fn build_flow_graph(sections: &Map<String, Value>) -> FlowGraph {
    let mut builder = FlowGraphBuilder::new();
    builder.add_sections(sections);
    builder.build()
}
