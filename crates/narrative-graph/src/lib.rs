//! Narrative Graph
//!
//! Id resolution and reasoning over a narrative knowledge graph snapshot.
//!
//! # Overview
//!
//! The domain crate defines plain records whose links are weak ids. This
//! crate builds an index over a snapshot so those ids can be resolved
//! explicitly, and uses it to explain which drivers act on a company.
//!
//! ```text
//! JSON → snapshot → KnowledgeGraphData → GraphIndex → Reasoner → narrative
//! ```
//!
//! # Example Usage
//!
//! ```
//! use narrative_graph::{snapshot, NarrativeConfig, Reasoner};
//! use narrative_domain::EntityId;
//!
//! # fn example() -> Result<(), narrative_graph::GraphError> {
//! let data = snapshot::from_json_str(r#"{
//!     "entities": [{"id": "c1", "name": "Acme", "type": "Company"}],
//!     "drivers": [{"id": "d1", "name": "Tariffs", "description": "Import duties"}],
//!     "relationships": [{"id": "r1", "source_id": "d1", "target_id": "c1", "type": "pressures"}]
//! }"#)?;
//!
//! let reasoner = Reasoner::from_data(data, NarrativeConfig::default());
//! let narrative = reasoner.company_narrative(&EntityId::new("c1"));
//! assert!(narrative.starts_with("Key drivers influencing Acme (c1):"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod index;
mod reasoner;
pub mod snapshot;
mod template;

pub use config::NarrativeConfig;
pub use error::{GraphError, TemplateError};
pub use index::{EdgeDirection, GraphIndex};
pub use narrative_domain::GraphLookup;
pub use reasoner::{DriverInfluence, Reasoner};
pub use template::{render_template, TemplateContext};
