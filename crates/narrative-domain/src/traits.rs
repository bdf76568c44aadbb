//! Trait definitions for id resolution
//!
//! Records only hold weak id references. These types define how a
//! reference is turned back into a record; implementations live in other
//! crates (see `narrative-graph`).

use crate::{
    Driver, DriverId, ElementId, EntityId, NarrativeEntity, NodeId, Relationship, RelationshipId,
};

/// A resolved relationship endpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    /// Endpoint is an entity
    Entity(&'a NarrativeEntity),
    /// Endpoint is a driver
    Driver(&'a Driver),
}

impl<'a> NodeRef<'a> {
    /// Display name of the node
    pub fn name(&self) -> &'a str {
        match self {
            NodeRef::Entity(entity) => &entity.name,
            NodeRef::Driver(driver) => &driver.name,
        }
    }

    /// The driver, if the node is one
    pub fn as_driver(&self) -> Option<&'a Driver> {
        match self {
            NodeRef::Driver(driver) => Some(driver),
            NodeRef::Entity(_) => None,
        }
    }

    /// The entity, if the node is one
    pub fn as_entity(&self) -> Option<&'a NarrativeEntity> {
        match self {
            NodeRef::Entity(entity) => Some(entity),
            NodeRef::Driver(_) => None,
        }
    }
}

/// A resolved semantic link subject
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementRef<'a> {
    /// Subject is an entity
    Entity(&'a NarrativeEntity),
    /// Subject is a driver
    Driver(&'a Driver),
    /// Subject is a relationship
    Relationship(&'a Relationship),
}

/// Explicit resolution of weak id references
///
/// Lookups never fail; an unknown id yields `None`.
pub trait GraphLookup {
    /// Get an entity by id
    fn entity(&self, id: &EntityId) -> Option<&NarrativeEntity>;

    /// Get a driver by id
    fn driver(&self, id: &DriverId) -> Option<&Driver>;

    /// Get a relationship by id
    fn relationship(&self, id: &RelationshipId) -> Option<&Relationship>;

    /// Resolve a relationship endpoint; entities take precedence over drivers
    fn resolve_node(&self, id: &NodeId) -> Option<NodeRef<'_>> {
        let key = id.as_str();
        if let Some(entity) = self.entity(&EntityId::new(key)) {
            return Some(NodeRef::Entity(entity));
        }
        self.driver(&DriverId::new(key)).map(NodeRef::Driver)
    }

    /// Resolve a semantic link subject: entity, then driver, then relationship
    fn resolve_element(&self, id: &ElementId) -> Option<ElementRef<'_>> {
        let key = id.as_str();
        if let Some(entity) = self.entity(&EntityId::new(key)) {
            return Some(ElementRef::Entity(entity));
        }
        if let Some(driver) = self.driver(&DriverId::new(key)) {
            return Some(ElementRef::Driver(driver));
        }
        self.relationship(&RelationshipId::new(key))
            .map(ElementRef::Relationship)
    }
}
