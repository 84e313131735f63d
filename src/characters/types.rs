use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

pub const FIELD_CHARACTER_NAME: &str = "character_name";
pub const FIELD_PLAYER_NAME: &str = "player_name";

/// A single character record.
///
/// `id` is a UUID v4 string unless the caller supplied one. Serializes to a
/// flat JSON object with the three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub character_name: String,
    pub player_name: String,
}

impl Character {
    /// Builds a record with a freshly generated id.
    pub fn new(character_name: impl Into<String>, player_name: impl Into<String>) -> Self {
        Self::with_id(new_character_id(), character_name, player_name)
    }

    pub fn with_id(
        id: impl Into<String>,
        character_name: impl Into<String>,
        player_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            character_name: character_name.into(),
            player_name: player_name.into(),
        }
    }

    /// Validating constructor used by the HTTP layer.
    ///
    /// Both name fields must be present. An absent or empty `id` gets a
    /// generated one.
    pub fn from_payload(
        id: Option<String>,
        payload: CharacterPayload,
    ) -> Result<Self, ValidationError> {
        let mut missing = Vec::new();
        if payload.character_name.is_none() {
            missing.push(FIELD_CHARACTER_NAME);
        }
        if payload.player_name.is_none() {
            missing.push(FIELD_PLAYER_NAME);
        }

        match (payload.character_name, payload.player_name) {
            (Some(character_name), Some(player_name)) => {
                let id = id
                    .filter(|id| !id.is_empty())
                    .unwrap_or_else(new_character_id);
                Ok(Self::with_id(id, character_name, player_name))
            }
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

/// Request body for create and replace.
///
/// Every field is optional at the wire level so that a missing name is
/// reported as a `ValidationError` naming the field, not a parse failure.
/// Only JSON objects are accepted; serde's positional (array) form is not.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CharacterPayload {
    pub id: Option<String>,
    pub character_name: Option<String>,
    pub player_name: Option<String>,
}

impl<'de> Deserialize<'de> for CharacterPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Fields {
            #[serde(default)]
            id: Option<String>,
            #[serde(default)]
            character_name: Option<String>,
            #[serde(default)]
            player_name: Option<String>,
        }

        struct ObjectOnly;

        impl<'de> Visitor<'de> for ObjectOnly {
            type Value = CharacterPayload;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let fields = Fields::deserialize(MapAccessDeserializer::new(map))?;
                Ok(CharacterPayload {
                    id: fields.id,
                    character_name: fields.character_name,
                    player_name: fields.player_name,
                })
            }
        }

        deserializer.deserialize_map(ObjectOnly)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl ValidationError {
    /// Names of the fields this error refers to (empty for body errors).
    pub fn fields(&self) -> Vec<String> {
        match self {
            ValidationError::MissingFields(fields) => {
                fields.iter().map(|f| f.to_string()).collect()
            }
            ValidationError::InvalidBody(_) => Vec::new(),
        }
    }
}

pub fn new_character_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
