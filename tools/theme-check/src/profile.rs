//! Validation profiles
//!
//! A profile fixes the mesh file suffix, the preset files a pack must ship,
//! the minimum texture edge and the per-entity vertex budgets. `v1` and `v2`
//! are built in; custom profiles load from TOML:
//!
//! ```toml
//! name = "hd"
//! mesh_suffix = "_hd"
//! preset_files = ["industrial_hd_default.env"]
//! min_texture_size = 1024
//!
//! [min_vertices]
//! agent = 96
//! location = 2400
//! asset = 180
//! power_plant = 180
//! power_storage = 1800
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use theme_shared::{Entity, PresetVariant};

/// Errors loading a profile file
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read profile {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse profile: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Minimum vertex count per entity mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexBudgets {
    pub agent: usize,
    pub location: usize,
    pub asset: usize,
    pub power_plant: usize,
    pub power_storage: usize,
}

impl VertexBudgets {
    pub fn get(&self, entity: Entity) -> usize {
        match entity {
            Entity::Agent => self.agent,
            Entity::Location => self.location,
            Entity::Asset => self.asset,
            Entity::PowerPlant => self.power_plant,
            Entity::PowerStorage => self.power_storage,
        }
    }
}

/// Thresholds and file naming one pack is checked against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationProfile {
    pub name: String,
    #[serde(default)]
    pub mesh_suffix: String,
    pub preset_files: Vec<String>,
    pub min_texture_size: u32,
    pub min_vertices: VertexBudgets,
}

impl ValidationProfile {
    pub fn v1() -> Self {
        Self {
            name: "v1".to_string(),
            mesh_suffix: String::new(),
            preset_files: preset_files(""),
            min_texture_size: 256,
            min_vertices: VertexBudgets {
                agent: 18,
                location: 300,
                asset: 16,
                power_plant: 30,
                power_storage: 200,
            },
        }
    }

    pub fn v2() -> Self {
        Self {
            name: "v2".to_string(),
            mesh_suffix: "_v2".to_string(),
            preset_files: preset_files("v2"),
            min_texture_size: 512,
            min_vertices: VertexBudgets {
                agent: 48,
                location: 1200,
                asset: 90,
                power_plant: 90,
                power_storage: 900,
            },
        }
    }

    /// Look up a built-in profile by name
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "v1" => Some(Self::v1()),
            "v2" => Some(Self::v2()),
            _ => None,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str(content)?)
    }

    /// Minimum texture edge after applying a command-line override (0 keeps
    /// the profile's own value)
    pub fn effective_min_texture_size(&self, override_size: u32) -> u32 {
        if override_size > 0 {
            override_size
        } else {
            self.min_texture_size
        }
    }
}

fn preset_files(tag: &str) -> Vec<String> {
    PresetVariant::ALL
        .into_iter()
        .map(|variant| variant.file_name(tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles() {
        let v1 = ValidationProfile::builtin("v1").unwrap();
        assert_eq!(v1.mesh_suffix, "");
        assert_eq!(
            v1.preset_files,
            ["industrial_default.env", "industrial_matte.env", "industrial_glossy.env"]
        );
        assert_eq!(v1.min_vertices.get(Entity::Agent), 18);

        let v2 = ValidationProfile::builtin("v2").unwrap();
        assert_eq!(v2.mesh_suffix, "_v2");
        assert_eq!(v2.preset_files[2], "industrial_v2_glossy.env");
        assert_eq!(v2.min_texture_size, 512);
        assert_eq!(v2.min_vertices.get(Entity::PowerStorage), 900);

        assert!(ValidationProfile::builtin("v3").is_none());
    }

    #[test]
    fn test_texture_size_override() {
        let v1 = ValidationProfile::v1();
        assert_eq!(v1.effective_min_texture_size(0), 256);
        assert_eq!(v1.effective_min_texture_size(64), 64);
    }

    #[test]
    fn test_parse_custom_profile() {
        let profile = ValidationProfile::parse(
            r#"
            name = "tiny"
            preset_files = ["tiny.env"]
            min_texture_size = 8

            [min_vertices]
            agent = 1
            location = 2
            asset = 3
            power_plant = 4
            power_storage = 5
            "#,
        )
        .unwrap();

        assert_eq!(profile.name, "tiny");
        assert_eq!(profile.mesh_suffix, "");
        assert_eq!(profile.min_vertices.get(Entity::PowerPlant), 4);
    }

    #[test]
    fn test_builtin_survives_toml() {
        let v2 = ValidationProfile::v2();
        let text = toml::to_string(&v2).unwrap();
        assert_eq!(ValidationProfile::parse(&text).unwrap(), v2);
    }

    #[test]
    fn test_parse_rejects_missing_budget() {
        let err = ValidationProfile::parse(
            r#"
            name = "broken"
            preset_files = []
            min_texture_size = 8

            [min_vertices]
            agent = 1
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ProfileError::Toml(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ValidationProfile::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ProfileError::Io { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }
}
