//! Demo catalog data source.
//!
//! Stands in for the real data layer: a small JSON document embedded at
//! compile time, deserialized on demand. Hosts look entities up by id and
//! pass them into the views as plain props.

use crate::core::entity::CoreEntity;

const CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// Load the embedded catalog, sorted by entity name.
pub fn load_entities() -> Result<Vec<CoreEntity>, serde_json::Error> {
    let mut entities: Vec<CoreEntity> = serde_json::from_str(CATALOG_JSON)?;
    entities.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entities)
}

/// Look a single entity up by id.
pub fn find_entity(id: &str) -> Option<CoreEntity> {
    load_entities()
        .ok()?
        .into_iter()
        .find(|entity| entity.id == id)
}
