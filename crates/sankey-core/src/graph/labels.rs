//! Label arena
//!
//! Node identity is the label itself. [`LabelIndex`] hands out contiguous
//! indices in first-seen order and returns the same index for repeated
//! lookups.

use crate::types::NodeIndex;
use indexmap::IndexSet;

/// Append-only mapping between labels and node indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelIndex {
    labels: IndexSet<String>,
}

impl LabelIndex {
    /// Create empty index
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `label`, appending it first if unseen
    pub fn resolve(&mut self, label: &str) -> NodeIndex {
        if let Some(index) = self.labels.get_index_of(label) {
            return index;
        }
        let (index, _) = self.labels.insert_full(label.to_owned());
        index
    }

    /// Index of `label` without inserting
    #[inline]
    #[must_use]
    pub fn get(&self, label: &str) -> Option<NodeIndex> {
        self.labels.get_index_of(label)
    }

    /// Label at `index`
    #[inline]
    #[must_use]
    pub fn label(&self, index: NodeIndex) -> Option<&str> {
        self.labels.get_index(index).map(String::as_str)
    }

    /// Number of distinct labels
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if no label has been resolved
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Consume into the ordered label list
    #[must_use]
    pub fn into_labels(self) -> Vec<String> {
        self.labels.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_assigns_first_seen_order() {
        let mut index = LabelIndex::new();
        assert_eq!(index.resolve("A"), 0);
        assert_eq!(index.resolve("B"), 1);
        assert_eq!(index.resolve("Revenue"), 2);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut index = LabelIndex::new();
        let first = index.resolve("Revenue");
        index.resolve("Costs");
        let second = index.resolve("Revenue");

        assert_eq!(first, second);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn lookup_without_insert() {
        let mut index = LabelIndex::new();
        index.resolve("A");

        assert_eq!(index.get("A"), Some(0));
        assert_eq!(index.get("B"), None);
        assert_eq!(index.label(0), Some("A"));
        assert_eq!(index.label(1), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn labels_are_case_sensitive() {
        let mut index = LabelIndex::new();
        assert_ne!(index.resolve("revenue"), index.resolve("Revenue"));
        assert_eq!(index.into_labels(), vec!["revenue", "Revenue"]);
    }
}
