//! Load → sections → build → project
//!
//! Every failure along the way is returned as a [`FlowError`]; nothing
//! here panics on bad input.

use crate::config::FlowConfig;
use crate::d3::load_d3_document;
use crate::document::{DocumentMeta, FinancialDocument};
use crate::error::FlowError;
use crate::graph::{FlowGraph, FlowGraphBuilder};
use crate::loader::load_document;
use crate::sankey::SankeyData;
use std::path::Path;

/// Result of preparing one document
#[derive(Debug, Clone)]
pub struct FlowReport {
    /// Resolved company and year
    pub meta: DocumentMeta,
    /// Built graph
    pub graph: FlowGraph,
    /// Renderer input
    pub sankey: SankeyData,
}

impl FlowReport {
    /// Check if any section entry was dropped while building
    #[inline]
    #[must_use]
    pub fn has_skipped(&self) -> bool {
        !self.graph.skipped().is_empty()
    }
}

/// Build the report for an already-decoded document
///
/// # Errors
/// [`FlowError::EmptySections`] or [`FlowError::InvalidSections`].
pub fn prepare_document(
    document: &FinancialDocument,
    config: &FlowConfig,
) -> Result<FlowReport, FlowError> {
    let sections = document.sections()?;
    let meta = document.meta(config);

    let mut builder = FlowGraphBuilder::with_root_label(config.root_label.clone());
    builder.add_sections(sections);
    let graph = builder.build();

    let sankey = SankeyData::from_graph(&graph, meta.title());
    tracing::info!(
        "Prepared '{}': {} nodes, {} links",
        sankey.title,
        graph.node_count(),
        graph.edge_count()
    );

    Ok(FlowReport {
        meta,
        graph,
        sankey,
    })
}

/// Load a document from disk and build its report
///
/// # Errors
/// Any [`FlowError`]: load failures, then section failures.
pub fn prepare_sankey(path: impl AsRef<Path>, config: &FlowConfig) -> Result<FlowReport, FlowError> {
    let path = path.as_ref();
    tracing::info!("Loading {}", path.display());
    let document = load_document(path)?;
    prepare_document(&document, config)
}

/// Load a node/link document and project it for the renderer
///
/// # Errors
/// Any load failure, or an inconsistent node/link document.
pub fn prepare_d3_sankey(path: impl AsRef<Path>, config: &FlowConfig) -> Result<SankeyData, FlowError> {
    let path = path.as_ref();
    tracing::info!("Loading node/link document {}", path.display());
    let document = load_d3_document(path)?;
    let meta = document.meta(&config.default_company, &config.default_year);
    let graph = document.into_graph()?;
    Ok(SankeyData::from_graph(&graph, meta.title()))
}
