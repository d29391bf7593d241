//! Logical asset kinds and their texture channels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A logical asset kind rendered by the viewer.
///
/// The set is closed: every theme pack ships exactly one mesh and four
/// texture channels for each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Agent,
    Location,
    Asset,
    PowerPlant,
    PowerStorage,
}

impl Entity {
    /// All entities in canonical pack order.
    pub const ALL: [Entity; 5] = [
        Entity::Agent,
        Entity::Location,
        Entity::Asset,
        Entity::PowerPlant,
        Entity::PowerStorage,
    ];

    /// File-name stem, e.g. `power_plant`.
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Agent => "agent",
            Entity::Location => "location",
            Entity::Asset => "asset",
            Entity::PowerPlant => "power_plant",
            Entity::PowerStorage => "power_storage",
        }
    }

    /// Upper-case key fragment used in preset variables, e.g. `POWER_PLANT`.
    pub fn env_key(self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity: {0}")]
pub struct ParseEntityError(pub String);

impl FromStr for Entity {
    type Err = ParseEntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Entity::ALL
            .into_iter()
            .find(|entity| entity.as_str() == s)
            .ok_or_else(|| ParseEntityError(s.to_string()))
    }
}

/// One of the four PBR texture maps shipped per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureChannel {
    Base,
    Normal,
    MetallicRoughness,
    Emissive,
}

impl TextureChannel {
    /// All channels in canonical pack order.
    pub const ALL: [TextureChannel; 4] = [
        TextureChannel::Base,
        TextureChannel::Normal,
        TextureChannel::MetallicRoughness,
        TextureChannel::Emissive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextureChannel::Base => "base",
            TextureChannel::Normal => "normal",
            TextureChannel::MetallicRoughness => "metallic_roughness",
            TextureChannel::Emissive => "emissive",
        }
    }

    /// Upper-case key fragment, e.g. `METALLIC_ROUGHNESS`.
    pub fn env_key(self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl fmt::Display for TextureChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
