//! In-memory id index over a graph snapshot
//!
//! The index owns the snapshot and maps every id to the record's position.
//! It is immutable once built; rebuild it after changing the snapshot.

use narrative_domain::{
    Driver, DriverId, ElementId, ElementRef, EntityId, EntityKind, GraphCounts, GraphLookup,
    KnowledgeGraphData, NarrativeEntity, NodeId, NodeRef, Relationship, RelationshipId,
    SemanticLink, SemanticLinkId,
};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use tracing::{debug, info, warn};

/// Which relationships of a node to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    /// The node is the source
    Outgoing,
    /// The node is the target
    Incoming,
    /// Either endpoint
    Both,
}

/// Id lookup tables over an owned [`KnowledgeGraphData`]
#[derive(Debug, Clone)]
pub struct GraphIndex {
    data: KnowledgeGraphData,
    entities: HashMap<EntityId, usize>,
    drivers: HashMap<DriverId, usize>,
    relationships: HashMap<RelationshipId, usize>,
    links: HashMap<SemanticLinkId, usize>,
    outgoing: HashMap<NodeId, Vec<usize>>,
    incoming: HashMap<NodeId, Vec<usize>>,
    links_by_element: HashMap<ElementId, Vec<usize>>,
}

/// Map ids to positions; a repeated id points at its last record
fn position_map<K, T>(records: &[T], key: impl Fn(&T) -> &K, kind: &str) -> HashMap<K, usize>
where
    K: Eq + Hash + Clone + std::fmt::Display,
{
    let mut map = HashMap::with_capacity(records.len());
    for (pos, record) in records.iter().enumerate() {
        let id = key(record);
        if let Some(previous) = map.insert(id.clone(), pos) {
            warn!(
                "Duplicate {} id '{}' at positions {} and {}; keeping the later record",
                kind, id, previous, pos
            );
        }
    }
    map
}

impl GraphIndex {
    /// Build the index, taking ownership of the snapshot
    pub fn build(data: KnowledgeGraphData) -> Self {
        let entities = position_map(&data.entities, |e| &e.id, "entity");
        let drivers = position_map(&data.drivers, |d| &d.id, "driver");
        let relationships = position_map(&data.relationships, |r| &r.id, "relationship");
        let links = position_map(&data.semantic_links, |l| &l.id, "semantic link");

        let mut outgoing: HashMap<NodeId, Vec<usize>> = HashMap::new();
        let mut incoming: HashMap<NodeId, Vec<usize>> = HashMap::new();
        for (pos, rel) in data.relationships.iter().enumerate() {
            outgoing.entry(rel.source_id.clone()).or_default().push(pos);
            incoming.entry(rel.target_id.clone()).or_default().push(pos);
        }

        let mut links_by_element: HashMap<ElementId, Vec<usize>> = HashMap::new();
        for (pos, link) in data.semantic_links.iter().enumerate() {
            links_by_element
                .entry(link.narrative_element_id.clone())
                .or_default()
                .push(pos);
        }

        let index = Self {
            data,
            entities,
            drivers,
            relationships,
            links,
            outgoing,
            incoming,
            links_by_element,
        };

        let dangling = index.dangling_endpoints();
        if dangling > 0 {
            debug!("{} relationship endpoints do not resolve to an entity or driver", dangling);
        }

        let counts = index.counts();
        info!(
            "Indexed graph: {} entities, {} drivers, {} relationships, {} semantic links",
            counts.entities, counts.drivers, counts.relationships, counts.semantic_links
        );

        index
    }

    /// The indexed snapshot
    pub fn data(&self) -> &KnowledgeGraphData {
        &self.data
    }

    /// Give the snapshot back
    pub fn into_data(self) -> KnowledgeGraphData {
        self.data
    }

    /// Record counts per kind
    pub fn counts(&self) -> GraphCounts {
        self.data.counts()
    }

    /// Get a semantic link by id
    pub fn semantic_link(&self, id: &SemanticLinkId) -> Option<&SemanticLink> {
        self.links
            .get(id.as_str())
            .map(|&pos| &self.data.semantic_links[pos])
    }

    /// All entities of the given kind, in snapshot order
    pub fn entities_of_kind<'a>(
        &'a self,
        kind: &'a EntityKind,
    ) -> impl Iterator<Item = &'a NarrativeEntity> + 'a {
        self.data.entities.iter().filter(move |e| &e.kind() == kind)
    }

    /// Resolve a company's industry reference
    ///
    /// Returns `None` for non-companies, companies without an industry id,
    /// and ids that do not resolve.
    pub fn industry_of(&self, company: &NarrativeEntity) -> Option<&NarrativeEntity> {
        let industry_id = company.as_company()?.industry_id.as_ref()?;
        self.entity(industry_id)
    }

    /// Relationships touching a node
    ///
    /// Outgoing edges come before incoming ones, each in snapshot order.
    /// Results are deduplicated by relationship id, so a self-loop appears once.
    pub fn relationships_for(&self, node: &str, direction: EdgeDirection) -> Vec<&Relationship> {
        let mut positions: Vec<usize> = Vec::new();
        if matches!(direction, EdgeDirection::Outgoing | EdgeDirection::Both) {
            if let Some(found) = self.outgoing.get(node) {
                positions.extend(found);
            }
        }
        if matches!(direction, EdgeDirection::Incoming | EdgeDirection::Both) {
            if let Some(found) = self.incoming.get(node) {
                positions.extend(found);
            }
        }

        let mut seen: HashSet<&RelationshipId> = HashSet::new();
        let mut found = Vec::with_capacity(positions.len());
        for pos in positions {
            let rel = &self.data.relationships[pos];
            if seen.insert(&rel.id) {
                found.push(rel);
            }
        }
        found
    }

    /// Every relationship targeting a node, in snapshot order
    ///
    /// Unlike [`relationships_for`](Self::relationships_for) nothing is
    /// deduplicated: records that share an id are all returned.
    pub fn edges_into(&self, node: &str) -> Vec<&Relationship> {
        self.incoming
            .get(node)
            .map(|found| found.iter().map(|&pos| &self.data.relationships[pos]).collect())
            .unwrap_or_default()
    }

    /// Semantic links observing the given element, in snapshot order
    pub fn semantic_links_for(&self, element: &str) -> Vec<&SemanticLink> {
        self.links_by_element
            .get(element)
            .map(|found| found.iter().map(|&pos| &self.data.semantic_links[pos]).collect())
            .unwrap_or_default()
    }

    fn entity_by_key(&self, key: &str) -> Option<&NarrativeEntity> {
        self.entities.get(key).map(|&pos| &self.data.entities[pos])
    }

    fn driver_by_key(&self, key: &str) -> Option<&Driver> {
        self.drivers.get(key).map(|&pos| &self.data.drivers[pos])
    }

    fn relationship_by_key(&self, key: &str) -> Option<&Relationship> {
        self.relationships
            .get(key)
            .map(|&pos| &self.data.relationships[pos])
    }

    fn dangling_endpoints(&self) -> usize {
        self.data
            .relationships
            .iter()
            .flat_map(|rel| [&rel.source_id, &rel.target_id])
            .filter(|node| self.resolve_node(node).is_none())
            .count()
    }
}

impl GraphLookup for GraphIndex {
    fn entity(&self, id: &EntityId) -> Option<&NarrativeEntity> {
        self.entity_by_key(id.as_str())
    }

    fn driver(&self, id: &DriverId) -> Option<&Driver> {
        self.driver_by_key(id.as_str())
    }

    fn relationship(&self, id: &RelationshipId) -> Option<&Relationship> {
        self.relationship_by_key(id.as_str())
    }

    fn resolve_node(&self, id: &NodeId) -> Option<NodeRef<'_>> {
        let key = id.as_str();
        self.entity_by_key(key)
            .map(NodeRef::Entity)
            .or_else(|| self.driver_by_key(key).map(NodeRef::Driver))
    }

    fn resolve_element(&self, id: &ElementId) -> Option<ElementRef<'_>> {
        let key = id.as_str();
        self.entity_by_key(key)
            .map(ElementRef::Entity)
            .or_else(|| self.driver_by_key(key).map(ElementRef::Driver))
            .or_else(|| self.relationship_by_key(key).map(ElementRef::Relationship))
    }
}
