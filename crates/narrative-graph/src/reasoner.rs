//! Driver reasoning and narrative generation for companies

use crate::config::NarrativeConfig;
use crate::error::GraphError;
use crate::index::GraphIndex;
use crate::template::{render_template, TemplateContext};
use narrative_domain::{
    Driver, DriverId, EntityId, GraphLookup, ImpactPotential, KnowledgeGraphData, NarrativeEntity,
    RelationType, Relationship, RelationshipId,
};
use serde::Serialize;
use tracing::debug;

/// A driver acting directly on a company through one relationship
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverInfluence {
    /// Driver id
    pub driver_id: DriverId,

    /// Driver name
    pub driver_name: String,

    /// Relationship carrying the influence
    pub relationship_id: RelationshipId,

    /// Relation label of that relationship
    pub relationship_type: RelationType,

    /// Human-readable explanation
    pub explanation: String,

    /// Driver's impact potential
    pub impact_potential: Option<ImpactPotential>,

    /// Relationship strength
    pub strength: Option<f64>,
}

/// Answers "what drives this company?" over an indexed snapshot
pub struct Reasoner {
    index: GraphIndex,
    config: NarrativeConfig,
}

impl Reasoner {
    /// Create a reasoner over an existing index
    pub fn new(index: GraphIndex, config: NarrativeConfig) -> Self {
        Self { index, config }
    }

    /// Index a snapshot and create a reasoner over it
    pub fn from_data(data: KnowledgeGraphData, config: NarrativeConfig) -> Self {
        Self::new(GraphIndex::build(data), config)
    }

    /// The underlying index
    pub fn index(&self) -> &GraphIndex {
        &self.index
    }

    /// Active configuration
    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    /// Drivers that are the source of a relationship targeting the company
    ///
    /// Every incoming relationship is considered, including records that
    /// share an id. Relationships whose source is not a known driver are
    /// skipped.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EntityNotFound`] if no entity has the id
    /// - [`GraphError::NotACompany`] if the entity is of another kind
    pub fn direct_drivers(&self, company_id: &EntityId) -> Result<Vec<DriverInfluence>, GraphError> {
        let company = self
            .index
            .entity(company_id)
            .ok_or_else(|| GraphError::EntityNotFound(company_id.to_string()))?;

        if !company.is_company() {
            return Err(GraphError::NotACompany {
                id: company_id.to_string(),
                kind: company.type_label().to_string(),
            });
        }

        let mut influences = Vec::new();
        for rel in self.index.edges_into(company_id.as_str()) {
            let Some(driver) = self.index.driver(&DriverId::new(rel.source_id.as_str())) else {
                continue;
            };

            if let (Some(min), Some(strength)) = (self.config.min_strength, rel.strength) {
                if strength < min {
                    debug!(
                        "Skipping relationship '{}': strength {} below {}",
                        rel.id, strength, min
                    );
                    continue;
                }
            }

            influences.push(DriverInfluence {
                driver_id: driver.id.clone(),
                driver_name: driver.name.clone(),
                relationship_id: rel.id.clone(),
                relationship_type: rel.relation_type.clone(),
                explanation: explain(rel, driver, company),
                impact_potential: driver.impact_potential.clone(),
                strength: rel.strength,
            });
        }

        if self.config.sort_by_strength {
            influences.sort_by(|a, b| {
                let a = a.strength.unwrap_or(f64::NEG_INFINITY);
                let b = b.strength.unwrap_or(f64::NEG_INFINITY);
                b.total_cmp(&a)
            });
        }

        Ok(influences)
    }

    /// Plain-text summary of the drivers acting on a company
    pub fn company_narrative(&self, company_id: &EntityId) -> String {
        let Some(company) = self.index.entity(company_id) else {
            return format!("No company found with ID {}.", company_id);
        };

        let drivers = match self.direct_drivers(company_id) {
            Ok(drivers) => drivers,
            Err(e) => {
                debug!("No drivers for '{}': {}", company_id, e);
                Vec::new()
            }
        };

        if drivers.is_empty() {
            return format!("No direct drivers found for {} ({}).", company.name, company_id);
        }

        let mut lines = Vec::with_capacity(drivers.len() + 1);
        lines.push(format!("Key drivers influencing {} ({}):", company.name, company_id));

        for info in &drivers {
            let mut line = format!("- {}: {}", info.driver_name, info.explanation);
            if self.config.include_strength {
                if let Some(strength) = info.strength.filter(|s| *s != 0.0) {
                    // Debug formatting keeps the trailing ".0" on whole numbers
                    line.push_str(&format!(" (Strength: {:?})", strength));
                }
            }
            if self.config.include_impact_potential {
                if let Some(impact) = info.impact_potential.as_ref().filter(|p| !p.is_blank()) {
                    line.push_str(&format!(" (Potential Impact: {})", impact));
                }
            }
            lines.push(line);
        }

        lines.join("\n")
    }
}

/// Rendered explanation template, or a default sentence
fn explain(rel: &Relationship, driver: &Driver, company: &NarrativeEntity) -> String {
    if let Some(template) = &rel.explanation_template {
        let ctx = TemplateContext {
            source_name: &driver.name,
            target_name: &company.name,
            relation_type: rel.relation_type.as_str(),
        };
        match render_template(template, &ctx) {
            Ok(text) => return text,
            Err(e) => debug!("Template of relationship '{}' not rendered: {}", rel.id, e),
        }
    }

    format!(
        "Driver '{}' ({}) {} Company '{}' ({}).",
        driver.name, driver.id, rel.relation_type, company.name, company.id
    )
}
