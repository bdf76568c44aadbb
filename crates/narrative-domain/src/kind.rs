//! Open vocabularies
//!
//! Fields that are conventionally drawn from a small set of labels but are
//! never restricted to it. Each vocabulary has a variant per known label
//! plus an `Other` case that carries any unrecognised label verbatim, so
//! parsing never fails and every label survives a round trip unchanged.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Classification of a [`NarrativeEntity`](crate::NarrativeEntity)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityKind {
    /// A listed or private company
    Company,

    /// An industry grouping companies
    Industry,

    /// A macroeconomic indicator (rates, GDP, inflation, ...)
    MacroIndicator,

    /// Any other classification label
    Other(String),
}

impl EntityKind {
    /// Get the kind label as a string
    pub fn as_str(&self) -> &str {
        match self {
            EntityKind::Company => "Company",
            EntityKind::Industry => "Industry",
            EntityKind::MacroIndicator => "MacroIndicator",
            EntityKind::Other(label) => label,
        }
    }

    /// Parse a kind label (exact match; unknown labels become `Other`)
    pub fn parse(s: &str) -> Self {
        match s {
            "Company" => EntityKind::Company,
            "Industry" => EntityKind::Industry,
            "MacroIndicator" => EntityKind::MacroIndicator,
            other => EntityKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for EntityKind {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for EntityKind {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Type of a [`Relationship`](crate::Relationship)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationType {
    /// Source influences target
    Influences,

    /// Source owns target
    Owns,

    /// Source and target compete
    CompetesWith,

    /// Source is a part of target
    IsPartOf,

    /// Source is subject to the target driver
    HasDriver,

    /// Any other relation label
    Other(String),
}

impl RelationType {
    /// Get the relation label as a string
    pub fn as_str(&self) -> &str {
        match self {
            RelationType::Influences => "influences",
            RelationType::Owns => "owns",
            RelationType::CompetesWith => "competes_with",
            RelationType::IsPartOf => "is_part_of",
            RelationType::HasDriver => "has_driver",
            RelationType::Other(label) => label,
        }
    }

    /// Parse a relation label (exact match; unknown labels become `Other`)
    pub fn parse(s: &str) -> Self {
        match s {
            "influences" => RelationType::Influences,
            "owns" => RelationType::Owns,
            "competes_with" => RelationType::CompetesWith,
            "is_part_of" => RelationType::IsPartOf,
            "has_driver" => RelationType::HasDriver,
            other => RelationType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for RelationType {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for RelationType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<RelationType> for String {
    fn from(kind: RelationType) -> Self {
        match kind {
            RelationType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Direction of a [`Relationship`](crate::Relationship)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    /// Source to target only
    Unidirectional,

    /// Both ways
    Bidirectional,

    /// Any other direction label
    Other(String),
}

impl Direction {
    /// Get the direction label as a string
    pub fn as_str(&self) -> &str {
        match self {
            Direction::Unidirectional => "unidirectional",
            Direction::Bidirectional => "bidirectional",
            Direction::Other(label) => label,
        }
    }

    /// Parse a direction label (exact match; unknown labels become `Other`)
    pub fn parse(s: &str) -> Self {
        match s {
            "unidirectional" => Direction::Unidirectional,
            "bidirectional" => Direction::Bidirectional,
            other => Direction::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Direction {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Direction {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Potential impact of a [`Driver`](crate::Driver)
///
/// Either a qualitative label or a numeric score. Scores are not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ImpactRepr", into = "ImpactRepr")]
pub enum ImpactPotential {
    /// "High"
    High,

    /// "Medium"
    Medium,

    /// "Low"
    Low,

    /// Numeric impact score
    Score(f64),

    /// Any other label
    Other(String),
}

impl ImpactPotential {
    /// Parse an impact label (exact match; unknown labels become `Other`)
    pub fn parse(s: &str) -> Self {
        match s {
            "High" => ImpactPotential::High,
            "Medium" => ImpactPotential::Medium,
            "Low" => ImpactPotential::Low,
            other => ImpactPotential::Other(other.to_string()),
        }
    }

    /// Get the label, if this is not a numeric score
    pub fn label(&self) -> Option<&str> {
        match self {
            ImpactPotential::High => Some("High"),
            ImpactPotential::Medium => Some("Medium"),
            ImpactPotential::Low => Some("Low"),
            ImpactPotential::Score(_) => None,
            ImpactPotential::Other(label) => Some(label),
        }
    }

    /// Check if the value carries no information (a zero score or an empty label)
    pub fn is_blank(&self) -> bool {
        match self {
            ImpactPotential::Score(score) => *score == 0.0,
            ImpactPotential::Other(label) => label.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for ImpactPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the fraction on whole scores ("2.0", not "2")
            ImpactPotential::Score(score) => write!(f, "{:?}", score),
            labelled => f.write_str(labelled.label().unwrap_or_default()),
        }
    }
}

impl From<&str> for ImpactPotential {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<f64> for ImpactPotential {
    fn from(score: f64) -> Self {
        ImpactPotential::Score(score)
    }
}

/// Wire shape: a bare number or a bare string
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ImpactRepr {
    Score(f64),
    Label(String),
}

impl From<ImpactRepr> for ImpactPotential {
    fn from(repr: ImpactRepr) -> Self {
        match repr {
            ImpactRepr::Score(score) => ImpactPotential::Score(score),
            ImpactRepr::Label(label) => ImpactPotential::parse(&label),
        }
    }
}

impl From<ImpactPotential> for ImpactRepr {
    fn from(impact: ImpactPotential) -> Self {
        match impact {
            ImpactPotential::Score(score) => ImpactRepr::Score(score),
            ImpactPotential::Other(label) => ImpactRepr::Label(label),
            labelled => ImpactRepr::Label(labelled.to_string()),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any entity kind label survives parse then as_str
        #[test]
        fn test_entity_kind_label_roundtrip(label in ".*") {
            let kind = EntityKind::parse(&label);
            prop_assert_eq!(kind.as_str(), label.as_str());
        }

        /// Property: any relation label survives parse then as_str
        #[test]
        fn test_relation_label_roundtrip(label in "[a-z_]{0,20}") {
            let kind = RelationType::parse(&label);
            prop_assert_eq!(kind.as_str(), label.as_str());
        }
    }
}
