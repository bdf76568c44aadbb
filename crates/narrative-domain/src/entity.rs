//! Narrative entities - the nodes of the knowledge graph

use crate::id::EntityId;
use crate::kind::EntityKind;
use crate::value::{null_as_default, AttributeValue, Attributes};
use serde::{Deserialize, Serialize};

/// Fields specific to companies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Company {
    /// Exchange ticker
    pub ticker_symbol: Option<String>,

    /// Weak reference to the company's industry entity
    pub industry_id: Option<EntityId>,

    /// Country of domicile
    pub country: Option<String>,
}

/// Fields specific to industries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Industry {
    /// Sector the industry belongs to
    pub sector: Option<String>,
}

/// Fields specific to macroeconomic indicators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroIndicator {
    /// Geographical region the indicator covers
    pub region: Option<String>,
}

/// Kind-specific part of an entity
///
/// The variant fixes the entity's `type` label: a `Company` variant always
/// reports `"Company"`, and so on. `Generic` carries any other label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityVariant {
    /// `type = "Company"`
    Company(Company),

    /// `type = "Industry"`
    Industry(Industry),

    /// `type = "MacroIndicator"`
    MacroIndicator(MacroIndicator),

    /// Any other type label, carried verbatim
    Generic(String),
}

impl EntityVariant {
    /// Default variant for a kind
    pub fn from_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Company => EntityVariant::Company(Company::default()),
            EntityKind::Industry => EntityVariant::Industry(Industry::default()),
            EntityKind::MacroIndicator => EntityVariant::MacroIndicator(MacroIndicator::default()),
            EntityKind::Other(label) => EntityVariant::Generic(label),
        }
    }

    /// Classification implied by the variant
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityVariant::Company(_) => EntityKind::Company,
            EntityVariant::Industry(_) => EntityKind::Industry,
            EntityVariant::MacroIndicator(_) => EntityKind::MacroIndicator,
            EntityVariant::Generic(label) => EntityKind::parse(label),
        }
    }
}

/// A node in the knowledge graph
///
/// Base fields are shared by every kind; kind-specific fields live in
/// [`EntityVariant`]. On the wire the entity is a single flat object with a
/// `type` discriminant, e.g.
///
/// ```json
/// {"id": "comp_alpha", "name": "AlphaSoft Inc.", "type": "Company", "ticker_symbol": "ASFT"}
/// ```
///
/// # Examples
///
/// ```
/// use narrative_domain::{Company, EntityKind, NarrativeEntity};
///
/// let acme = NarrativeEntity::company(
///     "c1",
///     "Acme Corp",
///     Company { ticker_symbol: Some("ACME".into()), industry_id: Some("ind-1".into()), country: None },
/// );
/// assert_eq!(acme.kind(), EntityKind::Company);
/// assert_eq!(acme.type_label(), "Company");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EntityRecord", into = "EntityRecord")]
pub struct NarrativeEntity {
    /// Unique identifier
    pub id: EntityId,

    /// Display name
    pub name: String,

    /// Optional long-form description
    pub description: Option<String>,

    /// Extensible metadata
    pub attributes: Attributes,

    /// Labels (unordered by meaning, kept in insertion order)
    pub tags: Vec<String>,

    /// Kind-specific fields; determines the `type` label
    pub variant: EntityVariant,
}

impl NarrativeEntity {
    /// Create an entity of the given kind with default kind-specific fields
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, kind: impl Into<EntityKind>) -> Self {
        Self::with_variant(id, name, EntityVariant::from_kind(kind.into()))
    }

    /// Create a company entity
    pub fn company(id: impl Into<EntityId>, name: impl Into<String>, company: Company) -> Self {
        Self::with_variant(id, name, EntityVariant::Company(company))
    }

    /// Create an industry entity
    pub fn industry(id: impl Into<EntityId>, name: impl Into<String>, industry: Industry) -> Self {
        Self::with_variant(id, name, EntityVariant::Industry(industry))
    }

    /// Create a macro indicator entity
    pub fn macro_indicator(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        indicator: MacroIndicator,
    ) -> Self {
        Self::with_variant(id, name, EntityVariant::MacroIndicator(indicator))
    }

    fn with_variant(id: impl Into<EntityId>, name: impl Into<String>, variant: EntityVariant) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            attributes: Attributes::new(),
            tags: Vec::new(),
            variant,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

    /// Entity classification
    pub fn kind(&self) -> EntityKind {
        self.variant.kind()
    }

    /// The `type` label as written on the wire
    pub fn type_label(&self) -> &str {
        match &self.variant {
            EntityVariant::Company(_) => "Company",
            EntityVariant::Industry(_) => "Industry",
            EntityVariant::MacroIndicator(_) => "MacroIndicator",
            EntityVariant::Generic(label) => label,
        }
    }

    /// Company fields, if this is a company
    pub fn as_company(&self) -> Option<&Company> {
        match &self.variant {
            EntityVariant::Company(company) => Some(company),
            _ => None,
        }
    }

    /// Mutable company fields, if this is a company
    pub fn as_company_mut(&mut self) -> Option<&mut Company> {
        match &mut self.variant {
            EntityVariant::Company(company) => Some(company),
            _ => None,
        }
    }

    /// Industry fields, if this is an industry
    pub fn as_industry(&self) -> Option<&Industry> {
        match &self.variant {
            EntityVariant::Industry(industry) => Some(industry),
            _ => None,
        }
    }

    /// Macro indicator fields, if this is a macro indicator
    pub fn as_macro_indicator(&self) -> Option<&MacroIndicator> {
        match &self.variant {
            EntityVariant::MacroIndicator(indicator) => Some(indicator),
            _ => None,
        }
    }

    /// Check if this entity is a company
    pub fn is_company(&self) -> bool {
        matches!(self.variant, EntityVariant::Company(_))
    }
}

/// Flat wire shape shared by every entity kind
#[derive(Serialize, Deserialize)]
struct EntityRecord {
    id: EntityId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    attributes: Attributes,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ticker_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    industry_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region: Option<String>,
}

impl From<EntityRecord> for NarrativeEntity {
    fn from(record: EntityRecord) -> Self {
        // Kind-specific fields that do not belong to the record's kind are dropped
        let variant = match EntityKind::parse(&record.kind) {
            EntityKind::Company => EntityVariant::Company(Company {
                ticker_symbol: record.ticker_symbol,
                industry_id: record.industry_id,
                country: record.country,
            }),
            EntityKind::Industry => EntityVariant::Industry(Industry {
                sector: record.sector,
            }),
            EntityKind::MacroIndicator => EntityVariant::MacroIndicator(MacroIndicator {
                region: record.region,
            }),
            EntityKind::Other(label) => EntityVariant::Generic(label),
        };

        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            attributes: record.attributes,
            tags: record.tags,
            variant,
        }
    }
}

impl From<NarrativeEntity> for EntityRecord {
    fn from(entity: NarrativeEntity) -> Self {
        let mut record = EntityRecord {
            kind: entity.type_label().to_string(),
            id: entity.id,
            name: entity.name,
            description: entity.description,
            attributes: entity.attributes,
            tags: entity.tags,
            ticker_symbol: None,
            industry_id: None,
            country: None,
            sector: None,
            region: None,
        };

        match entity.variant {
            EntityVariant::Company(company) => {
                record.ticker_symbol = company.ticker_symbol;
                record.industry_id = company.industry_id;
                record.country = company.country;
            }
            EntityVariant::Industry(industry) => record.sector = industry.sector,
            EntityVariant::MacroIndicator(indicator) => record.region = indicator.region,
            EntityVariant::Generic(_) => {}
        }

        record
    }
}
