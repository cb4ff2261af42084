use rand::Rng;

use provgen_core::{
    EdgeIdSequence, GenerationRelation, ProvDocument, UsageRelation, activity_id, entity_id,
};

use crate::bipartite::Assignment;

/// Turns an accepted assignment into a provenance document.
///
/// Each `(activity, entity)` pair independently becomes either a
/// `wasGeneratedBy` or a `used` relation with equal probability. Edge ids
/// are issued in processing order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationEncoder;

impl RelationEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn encode<R: Rng + ?Sized>(&self, assignment: &Assignment, rng: &mut R) -> ProvDocument {
        let mut document = ProvDocument::with_nodes(assignment.partite_size());
        let mut edge_ids = EdgeIdSequence::new();

        for (activity, entity) in assignment.pairs() {
            let edge_id = edge_ids.next_id();
            let activity = activity_id(activity + 1);
            let entity = entity_id(entity + 1);

            if rng.random_bool(0.5) {
                document
                    .was_generated_by
                    .insert(edge_id, GenerationRelation { entity, activity });
            } else {
                document
                    .used
                    .insert(edge_id, UsageRelation { activity, entity });
            }
        }

        document
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use provgen_core::{summarize_document, validate_document};

    use super::*;
    use crate::bipartite::BipartiteGenerator;

    fn encode(partite_size: usize, degree: usize, seed: u64) -> ProvDocument {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let assignment = BipartiteGenerator::new(partite_size, degree)
            .generate(&mut rng)
            .expect("assignment");
        RelationEncoder::new().encode(&assignment, &mut rng)
    }

    #[test]
    fn one_relation_per_pair() {
        let document = encode(10, 3, 3);
        assert_eq!(document.relation_count(), 30);
        assert!(document.was_derived_from.is_empty());
        assert!(validate_document(&document).is_ok());
    }

    #[test]
    fn edge_ids_are_sequential_across_kinds() {
        let document = encode(8, 2, 11);
        let mut numbers: Vec<u64> = document
            .edges()
            .map(|(id, _, _)| provgen_core::parse_edge_id(id).expect("edge id"))
            .collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=16).collect::<Vec<_>>());
    }

    #[test]
    fn both_relation_kinds_appear_over_many_pairs() {
        let document = encode(500, 3, 5);
        assert!(!document.was_generated_by.is_empty());
        assert!(!document.used.is_empty());
    }

    #[test]
    fn encoded_document_is_regular() {
        let summary = summarize_document(&encode(25, 2, 17));
        assert_eq!(summary.regular_degree, Some(2));
    }
}
