//! Typed opaque identifiers
//!
//! Every record kind has its own id type so that a driver id cannot be
//! passed where an entity id is expected. All of them are plain strings on
//! the wire. Two wider id types name references whose target kind is only
//! known after lookup:
//!
//! - [`NodeId`]: a relationship endpoint (an entity or a driver)
//! - [`ElementId`]: the subject of a semantic link (an entity, a driver or a relationship)

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing key
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a fresh, chronologically sortable key (UUIDv7 text)
            pub fn generate() -> Self {
                Self(uuid::Uuid::now_v7().to_string())
            }

            /// Borrow the key as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the id, returning the raw key
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id!(
    /// Identifier of a [`NarrativeEntity`](crate::NarrativeEntity)
    EntityId
);

opaque_id!(
    /// Identifier of a [`Driver`](crate::Driver)
    DriverId
);

opaque_id!(
    /// Identifier of a [`Relationship`](crate::Relationship)
    RelationshipId
);

opaque_id!(
    /// Identifier of a [`SemanticLink`](crate::SemanticLink)
    SemanticLinkId
);

opaque_id!(
    /// Relationship endpoint: names an entity or a driver
    NodeId
);

opaque_id!(
    /// Subject of a semantic link: names an entity, a driver or a relationship
    ElementId
);

impl From<EntityId> for NodeId {
    fn from(id: EntityId) -> Self {
        Self(id.0)
    }
}

impl From<DriverId> for NodeId {
    fn from(id: DriverId) -> Self {
        Self(id.0)
    }
}

impl From<EntityId> for ElementId {
    fn from(id: EntityId) -> Self {
        Self(id.0)
    }
}

impl From<DriverId> for ElementId {
    fn from(id: DriverId) -> Self {
        Self(id.0)
    }
}

impl From<RelationshipId> for ElementId {
    fn from(id: RelationshipId) -> Self {
        Self(id.0)
    }
}

impl From<NodeId> for ElementId {
    fn from(id: NodeId) -> Self {
        Self(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_display_is_raw_key() {
        let id = EntityId::new("comp_alpha");
        assert_eq!(id.to_string(), "comp_alpha");
        assert_eq!(id.as_str(), "comp_alpha");
    }

    #[test]
    fn test_generated_ids_are_uuid_text() {
        let id = DriverId::generate();
        // 8-4-4-4-12 with hyphens
        assert_eq!(id.as_str().len(), 36);
        assert_ne!(id, DriverId::generate());
    }

    #[test]
    fn test_borrow_allows_str_lookup() {
        let mut map = HashMap::new();
        map.insert(EntityId::new("ind_tech"), 1);
        assert_eq!(map.get("ind_tech"), Some(&1));
    }

    #[test]
    fn test_widening_conversions_keep_key() {
        let node: NodeId = EntityId::new("c1").into();
        assert_eq!(node.as_str(), "c1");

        let element: ElementId = RelationshipId::new("rel_1").into();
        assert_eq!(element.as_str(), "rel_1");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = SemanticLinkId::new("sl1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"sl1\"");
        let parsed: SemanticLinkId = serde_json::from_str("\"sl1\"").unwrap();
        assert_eq!(parsed, id);
    }
}
