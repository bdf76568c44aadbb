//! JSON encoding of graph snapshots

use crate::error::GraphError;
use narrative_domain::KnowledgeGraphData;
use std::io::{Read, Write};
use tracing::info;

/// Decode a snapshot from JSON text
///
/// Missing or `null` sequences decode as empty.
pub fn from_json_str(json: &str) -> Result<KnowledgeGraphData, GraphError> {
    let data: KnowledgeGraphData = serde_json::from_str(json)?;
    log_loaded(&data);
    Ok(data)
}

/// Decode a snapshot from a reader
pub fn from_reader(reader: impl Read) -> Result<KnowledgeGraphData, GraphError> {
    let data: KnowledgeGraphData = serde_json::from_reader(reader)?;
    log_loaded(&data);
    Ok(data)
}

/// Encode a snapshot as pretty-printed JSON
pub fn to_json_string(data: &KnowledgeGraphData) -> Result<String, GraphError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Encode a snapshot as pretty-printed JSON into a writer
pub fn to_writer(data: &KnowledgeGraphData, writer: impl Write) -> Result<(), GraphError> {
    serde_json::to_writer_pretty(writer, data)?;
    Ok(())
}

fn log_loaded(data: &KnowledgeGraphData) {
    let counts = data.counts();
    info!(
        "Loaded snapshot: {} entities, {} drivers, {} relationships, {} semantic links",
        counts.entities, counts.drivers, counts.relationships, counts.semantic_links
    );
}
