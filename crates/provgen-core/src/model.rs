use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{activity_id, entity_id};

/// Type tag carried by every entity declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum EntityKind {
    #[default]
    #[serde(rename = "prov:entity")]
    Entity,
}

/// Type tag carried by every activity declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ActivityKind {
    #[default]
    #[serde(rename = "prov:activity")]
    Activity,
}

/// Declaration of a data object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EntityRecord {
    #[serde(rename = "prov:type")]
    pub kind: EntityKind,
}

/// Declaration of a process that produces or consumes entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ActivityRecord {
    #[serde(rename = "prov:type")]
    pub kind: ActivityKind,
}

/// `wasGeneratedBy`: the entity was produced by the activity.
///
/// Field order is part of the output contract: entity first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GenerationRelation {
    #[serde(rename = "prov:entity")]
    pub entity: String,
    #[serde(rename = "prov:activity")]
    pub activity: String,
}

/// `used`: the activity consumed the entity.
///
/// Field order is part of the output contract: activity first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UsageRelation {
    #[serde(rename = "prov:activity")]
    pub activity: String,
    #[serde(rename = "prov:entity")]
    pub entity: String,
}

/// `wasDerivedFrom`: reserved, never emitted by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DerivationRelation {
    #[serde(rename = "prov:generatedEntity")]
    pub generated_entity: String,
    #[serde(rename = "prov:usedEntity")]
    pub used_entity: String,
}

/// A complete provenance document.
///
/// Collections keep insertion order so that declarations appear in index
/// order and relations in the order their edges were encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProvDocument {
    pub entity: IndexMap<String, EntityRecord>,
    pub activity: IndexMap<String, ActivityRecord>,
    #[serde(rename = "wasDerivedFrom", default)]
    pub was_derived_from: IndexMap<String, DerivationRelation>,
    #[serde(rename = "wasGeneratedBy", default)]
    pub was_generated_by: IndexMap<String, GenerationRelation>,
    #[serde(default)]
    pub used: IndexMap<String, UsageRelation>,
}

impl ProvDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `partite_size` entities and `partite_size` activities using
    /// the standard 1-based identifiers.
    pub fn with_nodes(partite_size: usize) -> Self {
        let mut document = Self::new();
        for index in 1..=partite_size {
            document.declare_entity(entity_id(index));
        }
        for index in 1..=partite_size {
            document.declare_activity(activity_id(index));
        }
        document
    }

    pub fn declare_entity(&mut self, id: impl Into<String>) {
        self.entity.insert(id.into(), EntityRecord::default());
    }

    pub fn declare_activity(&mut self, id: impl Into<String>) {
        self.activity.insert(id.into(), ActivityRecord::default());
    }

    pub fn contains_entity(&self, id: &str) -> bool {
        self.entity.contains_key(id)
    }

    pub fn contains_activity(&self, id: &str) -> bool {
        self.activity.contains_key(id)
    }

    /// Number of generation and usage relations. Derivations are not counted
    /// since the generator never produces them.
    pub fn relation_count(&self) -> usize {
        self.was_generated_by.len() + self.used.len()
    }

    /// Iterate every `(edge id, entity, activity)` triple across both
    /// relation kinds.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        let generated = self.was_generated_by.iter().map(|(id, relation)| {
            (
                id.as_str(),
                relation.entity.as_str(),
                relation.activity.as_str(),
            )
        });
        let used = self.used.iter().map(|(id, relation)| {
            (
                id.as_str(),
                relation.entity.as_str(),
                relation.activity.as_str(),
            )
        });
        generated.chain(used)
    }
}
