//! Narrative Graph Domain Layer
//!
//! This crate contains the data model for the narrative knowledge graph.
//! It performs no I/O and defines the record types, identifiers, open
//! vocabularies and the lookup trait that the other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **NarrativeEntity**: A node in the graph (company, industry, macro indicator, ...)
//! - **Driver**: An exogenous factor that can influence entities
//! - **Relationship**: A directed or bidirectional edge between two nodes
//! - **SemanticLink**: A timestamped observation tying a narrative element to a metric
//! - **KnowledgeGraphData**: A full snapshot bundling the four record kinds
//!
//! ## Architecture
//!
//! - Records are plain values with public fields; nothing is validated
//! - Cross-record links are weak, typed ids resolved through [`traits::GraphLookup`]
//! - Index and reasoning implementations live in `narrative-graph`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod driver;
pub mod entity;
pub mod graph;
pub mod id;
pub mod kind;
pub mod relationship;
pub mod semantic_link;
pub mod traits;
pub mod value;

// Re-exports for convenience
pub use driver::Driver;
pub use entity::{Company, EntityVariant, Industry, MacroIndicator, NarrativeEntity};
pub use graph::{GraphCounts, KnowledgeGraphData};
pub use id::{DriverId, ElementId, EntityId, NodeId, RelationshipId, SemanticLinkId};
pub use kind::{Direction, EntityKind, ImpactPotential, RelationType};
pub use relationship::Relationship;
pub use semantic_link::{parse_observation_time, SemanticLink};
pub use traits::{ElementRef, GraphLookup, NodeRef};
pub use value::{AttributeValue, Attributes, ObservedValue, ValueRange};
