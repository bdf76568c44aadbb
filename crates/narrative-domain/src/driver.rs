//! Drivers - exogenous factors that influence entities

use crate::id::DriverId;
use crate::kind::{EntityKind, ImpactPotential};
use crate::value::null_as_default;
use serde::{Deserialize, Serialize};

/// An exogenous causal factor (macro trend, regulation, technology shift, ...)
///
/// Drivers are not entities, but they may appear as relationship endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique identifier
    pub id: DriverId,

    /// Display name
    pub name: String,

    /// What the driver is
    #[serde(default)]
    pub description: String,

    /// Conventional "High"/"Medium"/"Low", a score, or a custom label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_potential: Option<ImpactPotential>,

    /// How the driver typically propagates its effects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influence_pattern: Option<String>,

    /// Entity kinds this driver is relevant to
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_entity_types: Vec<EntityKind>,

    /// Labels
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Driver {
    /// Create a new driver
    pub fn new(id: impl Into<DriverId>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            impact_potential: None,
            influence_pattern: None,
            related_entity_types: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Set the impact potential
    pub fn with_impact(mut self, impact: impl Into<ImpactPotential>) -> Self {
        self.impact_potential = Some(impact.into());
        self
    }

    /// Set the influence pattern
    pub fn with_influence_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.influence_pattern = Some(pattern.into());
        self
    }

    /// Add a related entity kind
    pub fn with_related_type(mut self, kind: impl Into<EntityKind>) -> Self {
        self.related_entity_types.push(kind.into());
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Check whether the driver lists the given entity kind as relevant
    pub fn is_relevant_to(&self, kind: &EntityKind) -> bool {
        self.related_entity_types.contains(kind)
    }
}
