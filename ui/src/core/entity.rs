//! Core catalog entity model.

use serde::{Deserialize, Serialize};

/// What kind of catalog entry an entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Artist,
    Release,
    Label,
}

/// A catalog entity as supplied by the data layer.
///
/// `last_updated` is the RFC 3339 instant of the entity's last modification.
/// The column is nullable upstream, so it is optional here; consumers that
/// need a timestamp fail explicitly rather than invent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreEntity {
    pub id: String,
    pub name: String,
    pub kind: EntityKind,
    pub last_updated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_last_updated_deserializes_to_none() {
        let json = r#"{
            "id": "artist-unknown-session",
            "name": "Unknown Session Player",
            "kind": "artist",
            "last_updated": null
        }"#;
        let entity: CoreEntity = serde_json::from_str(json).expect("deserialize entity");
        assert!(entity.last_updated.is_none());
    }

    #[test]
    fn kind_round_trips_through_serde_as_snake_case() {
        let json = serde_json::to_string(&EntityKind::Release).expect("serialize kind");
        assert_eq!(json, "\"release\"");
        let kind: EntityKind = serde_json::from_str(&json).expect("deserialize kind");
        assert_eq!(kind, EntityKind::Release);
    }
}
