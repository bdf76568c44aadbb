//! Knowledge graph snapshot - the aggregate of all record kinds

use crate::driver::Driver;
use crate::entity::NarrativeEntity;
use crate::relationship::Relationship;
use crate::semantic_link::SemanticLink;
use crate::value::null_as_default;
use serde::{Deserialize, Serialize};

/// A full, exportable graph state
///
/// Four independent sequences in insertion order. Nothing checks that the
/// ids referenced by relationships or links exist, and duplicate ids are
/// kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeGraphData {
    /// Graph nodes
    #[serde(default, deserialize_with = "null_as_default")]
    pub entities: Vec<NarrativeEntity>,

    /// Exogenous factors
    #[serde(default, deserialize_with = "null_as_default")]
    pub drivers: Vec<Driver>,

    /// Edges
    #[serde(default, deserialize_with = "null_as_default")]
    pub relationships: Vec<Relationship>,

    /// Metric observations
    #[serde(default, deserialize_with = "null_as_default")]
    pub semantic_links: Vec<SemanticLink>,
}

/// Record counts per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphCounts {
    /// Number of entities
    pub entities: usize,
    /// Number of drivers
    pub drivers: usize,
    /// Number of relationships
    pub relationships: usize,
    /// Number of semantic links
    pub semantic_links: usize,
}

impl GraphCounts {
    /// Total number of records
    pub fn total(&self) -> usize {
        self.entities + self.drivers + self.relationships + self.semantic_links
    }
}

impl KnowledgeGraphData {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot from supplied sequences
    pub fn from_parts(
        entities: Vec<NarrativeEntity>,
        drivers: Vec<Driver>,
        relationships: Vec<Relationship>,
        semantic_links: Vec<SemanticLink>,
    ) -> Self {
        Self {
            entities,
            drivers,
            relationships,
            semantic_links,
        }
    }

    /// Append an entity
    pub fn add_entity(&mut self, entity: NarrativeEntity) {
        self.entities.push(entity);
    }

    /// Append a driver
    pub fn add_driver(&mut self, driver: Driver) {
        self.drivers.push(driver);
    }

    /// Append a relationship
    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    /// Append a semantic link
    pub fn add_semantic_link(&mut self, link: SemanticLink) {
        self.semantic_links.push(link);
    }

    /// Record counts per kind
    pub fn counts(&self) -> GraphCounts {
        GraphCounts {
            entities: self.entities.len(),
            drivers: self.drivers.len(),
            relationships: self.relationships.len(),
            semantic_links: self.semantic_links.len(),
        }
    }

    /// Check if the snapshot holds no records at all
    pub fn is_empty(&self) -> bool {
        self.counts().total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let graph = KnowledgeGraphData::new();
        assert!(graph.is_empty());
        assert_eq!(graph.counts(), GraphCounts::default());
    }

    #[test]
    fn test_appends_keep_insertion_order() {
        let mut graph = KnowledgeGraphData::new();
        for i in 0..3 {
            graph.add_entity(NarrativeEntity::new(format!("e{i}"), format!("Entity {i}"), "Generic"));
        }
        for i in 0..2 {
            graph.add_driver(Driver::new(format!("d{i}"), format!("Driver {i}"), ""));
        }
        graph.add_relationship(Relationship::new("r0", "d0", "e0", "influences"));
        for i in 0..4 {
            graph.add_semantic_link(SemanticLink::new(format!("s{i}"), "e1", "Metric", ""));
        }

        let counts = graph.counts();
        assert_eq!(counts.entities, 3);
        assert_eq!(counts.drivers, 2);
        assert_eq!(counts.relationships, 1);
        assert_eq!(counts.semantic_links, 4);
        assert_eq!(counts.total(), 10);

        let ids: Vec<&str> = graph.entities.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e0", "e1", "e2"]);
    }

    #[test]
    fn test_dangling_references_are_accepted() {
        let mut graph = KnowledgeGraphData::new();
        graph.add_relationship(Relationship::new("r1", "ghost", "phantom", "owns"));
        assert_eq!(graph.counts().relationships, 1);
    }

    #[test]
    fn test_missing_sequences_decode_empty() {
        let graph: KnowledgeGraphData =
            serde_json::from_str(r#"{"drivers": [], "semantic_links": null}"#).unwrap();
        assert!(graph.is_empty());
    }
}
