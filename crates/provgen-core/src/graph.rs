use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::ProvDocument;

/// Degree of one declared node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDegree {
    pub id: String,
    pub degree: usize,
}

/// Counts and degree distribution of a provenance document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub total_nodes: usize,
    pub entity_count: usize,
    pub activity_count: usize,
    pub generation_count: usize,
    pub usage_count: usize,
    pub derivation_count: usize,
    /// Number of nodes per observed degree, ascending by degree.
    pub degree_histogram: Vec<(usize, usize)>,
    /// `Some(d)` when every declared node has exactly `d` relations.
    pub regular_degree: Option<usize>,
    pub entity_degrees: Vec<NodeDegree>,
    pub activity_degrees: Vec<NodeDegree>,
}

impl DocumentSummary {
    pub fn relation_count(&self) -> usize {
        self.generation_count + self.usage_count
    }
}

/// Build a deterministic summary of a document.
///
/// Relations pointing at undeclared nodes are ignored here; they are
/// reported by `validate_document`.
pub fn summarize_document(document: &ProvDocument) -> DocumentSummary {
    let mut entity_degrees: IndexMap<&str, usize> =
        document.entity.keys().map(|id| (id.as_str(), 0)).collect();
    let mut activity_degrees: IndexMap<&str, usize> =
        document.activity.keys().map(|id| (id.as_str(), 0)).collect();

    for (_, entity, activity) in document.edges() {
        if let Some(degree) = entity_degrees.get_mut(entity) {
            *degree += 1;
        }
        if let Some(degree) = activity_degrees.get_mut(activity) {
            *degree += 1;
        }
    }

    let mut histogram: IndexMap<usize, usize> = IndexMap::new();
    for degree in entity_degrees.values().chain(activity_degrees.values()) {
        *histogram.entry(*degree).or_insert(0) += 1;
    }
    histogram.sort_keys();
    let degree_histogram: Vec<(usize, usize)> = histogram.into_iter().collect();

    let regular_degree = match degree_histogram.as_slice() {
        [(degree, _)] => Some(*degree),
        _ => None,
    };

    DocumentSummary {
        total_nodes: document.entity.len() + document.activity.len(),
        entity_count: document.entity.len(),
        activity_count: document.activity.len(),
        generation_count: document.was_generated_by.len(),
        usage_count: document.used.len(),
        derivation_count: document.was_derived_from.len(),
        degree_histogram,
        regular_degree,
        entity_degrees: to_node_degrees(entity_degrees),
        activity_degrees: to_node_degrees(activity_degrees),
    }
}

fn to_node_degrees(degrees: IndexMap<&str, usize>) -> Vec<NodeDegree> {
    degrees
        .into_iter()
        .map(|(id, degree)| NodeDegree {
            id: id.to_string(),
            degree,
        })
        .collect()
}
