//! Integration tests for narrative-graph
//!
//! These tests load the sample snapshot and exercise indexing, resolution
//! and narrative generation end to end.

use narrative_domain::{
    parse_observation_time, DriverId, ElementRef, EntityId, ImpactPotential, KnowledgeGraphData,
    NodeId, NodeRef, ObservedValue, ValueRange,
};
use narrative_graph::{
    snapshot, EdgeDirection, GraphError, GraphIndex, GraphLookup, NarrativeConfig, Reasoner,
};
use std::collections::HashSet;

const SAMPLE: &str = include_str!("fixtures/sample_graph.json");

fn sample() -> KnowledgeGraphData {
    snapshot::from_json_str(SAMPLE).expect("sample snapshot should decode")
}

fn reasoner() -> Reasoner {
    Reasoner::from_data(sample(), NarrativeConfig::default())
}

#[test]
fn test_sample_loads_every_record() {
    let counts = sample().counts();
    assert_eq!(counts.entities, 5);
    assert_eq!(counts.drivers, 3);
    assert_eq!(counts.relationships, 5);
    assert_eq!(counts.semantic_links, 2);
}

#[test]
fn test_entity_lookup_by_id() {
    let index = GraphIndex::build(sample());

    let alpha = index.entity(&EntityId::new("comp_alpha")).unwrap();
    assert_eq!(alpha.name, "AlphaSoft Inc.");
    assert!(alpha.is_company());

    let tech = index.entity(&EntityId::new("ind_tech")).unwrap();
    assert_eq!(tech.name, "Technology Software");
    assert_eq!(tech.type_label(), "Industry");

    assert!(index.entity(&EntityId::new("fake_id_123")).is_none());
}

#[test]
fn test_driver_lookup_by_id() {
    let index = GraphIndex::build(sample());

    let cloud = index.driver(&DriverId::new("drv_cloud_adoption")).unwrap();
    assert_eq!(cloud.name, "Cloud Computing Adoption");

    let ev = index.driver(&DriverId::new("drv_ev_transition")).unwrap();
    assert_eq!(ev.impact_potential, Some(ImpactPotential::Score(0.7)));

    assert!(index.driver(&DriverId::new("fake_driver_id")).is_none());
}

#[test]
fn test_relationships_for_company() {
    let index = GraphIndex::build(sample());

    let all: HashSet<&str> = index
        .relationships_for("comp_alpha", EdgeDirection::Both)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    let expected: HashSet<&str> = [
        "rel_asft_industry",
        "rel_cloud_asft",
        "rel_interest_asft_valuation",
    ]
    .into_iter()
    .collect();
    assert_eq!(all, expected);

    let outgoing = index.relationships_for("comp_alpha", EdgeDirection::Outgoing);
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0].id.as_str(), "rel_asft_industry");

    let incoming = index.relationships_for("comp_alpha", EdgeDirection::Incoming);
    assert_eq!(incoming.len(), 2);
}

#[test]
fn test_weak_references_resolve_explicitly() {
    let index = GraphIndex::build(sample());

    let alpha = index.entity(&EntityId::new("comp_alpha")).unwrap();
    assert_eq!(index.industry_of(alpha).unwrap().name, "Technology Software");

    // Macro indicator feeding a driver: entity source, driver target
    let rel = index
        .relationships_for("macro_us_rates", EdgeDirection::Outgoing)
        .into_iter()
        .next()
        .unwrap();
    assert!(matches!(index.resolve_node(&rel.source_id), Some(NodeRef::Entity(_))));
    assert!(matches!(index.resolve_node(&rel.target_id), Some(NodeRef::Driver(_))));
    assert!(index.resolve_node(&NodeId::new("nowhere")).is_none());

    let links = index.semantic_links_for("rel_cloud_asft");
    assert_eq!(links.len(), 1);
    assert!(matches!(
        index.resolve_element(&links[0].narrative_element_id),
        Some(ElementRef::Relationship(r)) if r.id.as_str() == "rel_cloud_asft"
    ));

    let target = index.semantic_links_for("comp_alpha");
    assert_eq!(
        target[0].observed_value,
        Some(ObservedValue::Range(ValueRange::new(180.0, 215.0)))
    );
    // Written without an offset in the fixture; read as UTC
    assert_eq!(
        target[0].observation_time,
        parse_observation_time("2024-04-12T09:30:00Z")
    );
    assert!(target[0].observation_time.is_some());
}

#[test]
fn test_direct_drivers_for_company() {
    let reasoner = reasoner();
    let drivers = reasoner.direct_drivers(&EntityId::new("comp_alpha")).unwrap();
    assert_eq!(drivers.len(), 2);

    let names: HashSet<&str> = drivers.iter().map(|d| d.driver_name.as_str()).collect();
    assert!(names.contains("Cloud Computing Adoption"));
    assert!(names.contains("Interest Rate Hikes"));

    let cloud = drivers
        .iter()
        .find(|d| d.driver_id.as_str() == "drv_cloud_adoption")
        .unwrap();
    assert_eq!(cloud.relationship_type.as_str(), "positively_impacts");
    assert_eq!(
        cloud.explanation,
        "Cloud Computing Adoption significantly benefits AlphaSoft Inc. due to its strong cloud portfolio."
    );
}

#[test]
fn test_direct_drivers_rejects_non_companies() {
    let reasoner = reasoner();
    assert!(matches!(
        reasoner.direct_drivers(&EntityId::new("ind_tech")),
        Err(GraphError::NotACompany { .. })
    ));
    assert!(matches!(
        reasoner.direct_drivers(&EntityId::new("fake_comp_id")),
        Err(GraphError::EntityNotFound(_))
    ));
}

#[test]
fn test_company_narrative() {
    let reasoner = reasoner();

    let alpha = reasoner.company_narrative(&EntityId::new("comp_alpha"));
    let lines: Vec<&str> = alpha.lines().collect();
    assert_eq!(lines[0], "Key drivers influencing AlphaSoft Inc. (comp_alpha):");
    assert_eq!(
        lines[1],
        "- Cloud Computing Adoption: Cloud Computing Adoption significantly benefits AlphaSoft Inc. \
         due to its strong cloud portfolio. (Strength: 0.8) (Potential Impact: High)"
    );
    assert_eq!(
        lines[2],
        "- Interest Rate Hikes: Interest Rate Hikes pressure the valuation of AlphaSoft Inc. \
         (Strength: 0.6) (Potential Impact: Medium)"
    );

    assert_eq!(
        reasoner.company_narrative(&EntityId::new("comp_beta")),
        "No direct drivers found for BetaDrive Motors (comp_beta)."
    );
    assert_eq!(
        reasoner.company_narrative(&EntityId::new("fake_comp_id")),
        "No company found with ID fake_comp_id."
    );
    assert_eq!(
        reasoner.company_narrative(&EntityId::new("ind_tech")),
        "No direct drivers found for Technology Software (ind_tech)."
    );
}

#[test]
fn test_config_from_toml_drives_narrative() {
    let config = NarrativeConfig::from_toml(
        r#"
        include_impact_potential = false
        sort_by_strength = true
        min_strength = 0.7
        "#,
    )
    .unwrap();
    let reasoner = Reasoner::from_data(sample(), config);

    assert_eq!(
        reasoner.company_narrative(&EntityId::new("comp_alpha")),
        "Key drivers influencing AlphaSoft Inc. (comp_alpha):\n\
         - Cloud Computing Adoption: Cloud Computing Adoption significantly benefits AlphaSoft Inc. \
         due to its strong cloud portfolio. (Strength: 0.8)"
    );
}

#[test]
fn test_snapshot_round_trip() {
    let data = sample();
    let json = snapshot::to_json_string(&data).unwrap();
    let back = snapshot::from_json_str(&json).unwrap();
    assert_eq!(back, data);
}
