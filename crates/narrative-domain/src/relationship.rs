//! Relationship module - edges between graph nodes

use crate::id::{NodeId, RelationshipId};
use crate::kind::{Direction, RelationType};
use crate::value::{null_as_default, AttributeValue, Attributes};
use serde::{Deserialize, Serialize};

/// An edge between two nodes, referenced by id
///
/// Endpoints are weak references to an entity or a driver. `strength` is
/// meant to lie in [0.0, 1.0] but any value is stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Unique identifier
    pub id: RelationshipId,

    /// Source node
    pub source_id: NodeId,

    /// Target node
    pub target_id: NodeId,

    /// Relation label
    #[serde(rename = "type")]
    pub relation_type: RelationType,

    /// Strength of relationship, nominally [0.0, 1.0]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,

    /// Conventionally "unidirectional" or "bidirectional"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,

    /// Explanation with `{source_name}`, `{target_name}` and `{type}` placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation_template: Option<String>,

    /// Extensible metadata
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Attributes,

    /// Labels
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Relationship {
    /// Create a new relationship
    pub fn new(
        id: impl Into<RelationshipId>,
        source_id: impl Into<NodeId>,
        target_id: impl Into<NodeId>,
        relation_type: impl Into<RelationType>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            relation_type: relation_type.into(),
            strength: None,
            direction: None,
            explanation_template: None,
            attributes: Attributes::new(),
            tags: Vec::new(),
        }
    }

    /// Set the strength (not range-checked)
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = Some(strength);
        self
    }

    /// Set the direction
    pub fn with_direction(mut self, direction: impl Into<Direction>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    /// Set the explanation template
    pub fn with_explanation_template(mut self, template: impl Into<String>) -> Self {
        self.explanation_template = Some(template.into());
        self
    }

    /// Add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Check if the edge is declared bidirectional
    pub fn is_bidirectional(&self) -> bool {
        self.direction == Some(Direction::Bidirectional)
    }

    /// Check if either endpoint names the given node
    pub fn touches(&self, node: &str) -> bool {
        self.source_id.as_str() == node || self.target_id.as_str() == node
    }
}
