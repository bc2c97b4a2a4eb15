//! Core record types shared by state, sync and GUI

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::constants::draft::{WEAPON_JOINER, WEAPON_SEPARATOR};

/// Remote-assigned identity. The collaborator may hand out numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(u64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{n}"),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

/// One catalogued record as returned by the remote resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub faction: String,
    pub alt_mode: String,
    /// Absent or null on the wire is read as empty
    #[serde(default, deserialize_with = "deserialize_weapons")]
    pub weapons: Vec<String>,
    pub image: String,
}

impl Entity {
    /// All text attributes non-empty after trimming
    pub fn is_well_formed(&self) -> bool {
        [&self.name, &self.faction, &self.alt_mode, &self.image]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    /// Weapons rendered for display and for the edit draft
    pub fn weapons_text(&self) -> String {
        self.weapons.join(WEAPON_JOINER)
    }
}

fn deserialize_weapons<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body sent on create and update (no id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityPayload {
    pub name: String,
    pub faction: String,
    pub alt_mode: String,
    pub weapons: Vec<String>,
    pub image: String,
}

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Faction,
    AltMode,
    Weapons,
    Image,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Faction,
        Field::AltMode,
        Field::Weapons,
        Field::Image,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Faction => "Faction",
            Field::AltMode => "Alt Mode",
            Field::Weapons => "Weapons (comma separated)",
            Field::Image => "Image URL",
        }
    }
}

/// Transient form input. Weapons stay as raw delimited text until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub faction: String,
    pub alt_mode: String,
    pub weapons: String,
    pub image: String,
}

impl Draft {
    /// Entering edit mode: sequence -> joined text
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            name: entity.name.clone(),
            faction: entity.faction.clone(),
            alt_mode: entity.alt_mode.clone(),
            weapons: entity.weapons_text(),
            image: entity.image.clone(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Faction => &self.faction,
            Field::AltMode => &self.alt_mode,
            Field::Weapons => &self.weapons,
            Field::Image => &self.image,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Faction => &mut self.faction,
            Field::AltMode => &mut self.alt_mode,
            Field::Weapons => &mut self.weapons,
            Field::Image => &mut self.image,
        }
    }

    /// Fails iff any field is empty after trimming
    pub fn is_valid(&self) -> bool {
        Field::ALL
            .iter()
            .all(|&field| !self.field(field).trim().is_empty())
    }

    /// Submitting: text -> sequence (split on comma, trim, drop empties)
    pub fn to_payload(&self) -> EntityPayload {
        EntityPayload {
            name: self.name.clone(),
            faction: self.faction.clone(),
            alt_mode: self.alt_mode.clone(),
            weapons: parse_weapons(&self.weapons),
            image: self.image.clone(),
        }
    }
}

pub fn parse_weapons(text: &str) -> Vec<String> {
    text.split(WEAPON_SEPARATOR)
        .map(str::trim)
        .filter(|weapon| !weapon.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optimus() -> Entity {
        Entity {
            id: EntityId::Number(1),
            name: "Optimus Prime".to_string(),
            faction: "Autobot".to_string(),
            alt_mode: "Truck".to_string(),
            weapons: vec!["Ion Blaster".to_string(), "Energon Axe".to_string()],
            image: "x".to_string(),
        }
    }

    #[test]
    fn test_entity_deserialize_null_weapons() {
        let json = r#"{"id":3,"name":"Soundwave","faction":"Decepticon","alt_mode":"Cassette Player","weapons":null,"image":"y"}"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.id, EntityId::Number(3));
        assert!(entity.weapons.is_empty());
    }

    #[test]
    fn test_entity_deserialize_missing_weapons_and_string_id() {
        let json = r#"{"id":"a1f3","name":"Jazz","faction":"Autobot","alt_mode":"Porsche","image":"z"}"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.id, EntityId::Text("a1f3".to_string()));
        assert!(entity.weapons.is_empty());
        assert_eq!(entity.id.to_string(), "a1f3");
    }

    #[test]
    fn test_payload_serializes_without_id() {
        let payload = Draft::from_entity(&optimus()).to_payload();
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["weapons"], serde_json::json!(["Ion Blaster", "Energon Axe"]));
        assert_eq!(value["alt_mode"], "Truck");
    }

    #[test]
    fn test_draft_from_entity_joins_weapons() {
        let draft = Draft::from_entity(&optimus());
        assert_eq!(draft.weapons, "Ion Blaster, Energon Axe");
        assert_eq!(draft.name, "Optimus Prime");
    }

    #[test]
    fn test_parse_weapons_trims_and_drops_empties() {
        assert_eq!(
            parse_weapons(" Fusion Cannon ,, Null Ray ,"),
            vec!["Fusion Cannon".to_string(), "Null Ray".to_string()]
        );
        assert!(parse_weapons(" , ").is_empty());
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = Draft::from_entity(&optimus());
        assert!(draft.is_valid());

        draft.alt_mode = "   ".to_string();
        assert!(!draft.is_valid());

        // Default draft is all-empty
        assert!(!Draft::default().is_valid());
    }

    #[test]
    fn test_entity_well_formed() {
        let mut entity = optimus();
        assert!(entity.is_well_formed());
        entity.image = " ".to_string();
        assert!(!entity.is_well_formed());
    }
}
