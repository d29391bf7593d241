//! On-disk layout of a theme directory.
//!
//! ```text
//! <theme_dir>/meshes/<entity>_industrial[<suffix>].gltf   (+ .bin)
//! <theme_dir>/textures/<entity>_<channel>.png
//! <theme_dir>/presets/<preset_name>.env
//! ```

use crate::constants::{
    GLTF_EXTENSION, MESHES_DIR, PRESETS_DIR, TEXTURES_DIR, THEME_FAMILY,
};
use crate::entity::{Entity, TextureChannel};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Material flavour of a preset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetVariant {
    Default,
    Matte,
    Glossy,
}

impl PresetVariant {
    pub const ALL: [PresetVariant; 3] =
        [PresetVariant::Default, PresetVariant::Matte, PresetVariant::Glossy];

    pub fn as_str(self) -> &'static str {
        match self {
            PresetVariant::Default => "default",
            PresetVariant::Matte => "matte",
            PresetVariant::Glossy => "glossy",
        }
    }

    /// Preset file name for a theme generation tag.
    ///
    /// An empty tag yields `industrial_<variant>.env`, a tag of `v2` yields
    /// `industrial_v2_<variant>.env`.
    pub fn file_name(self, tag: &str) -> String {
        if tag.is_empty() {
            format!("{THEME_FAMILY}_{}.env", self.as_str())
        } else {
            format!("{THEME_FAMILY}_{tag}_{}.env", self.as_str())
        }
    }
}

/// Mesh file name, e.g. `agent_industrial_v2.gltf` for suffix `_v2`.
pub fn mesh_file_name(entity: Entity, suffix: &str) -> String {
    format!("{entity}_{THEME_FAMILY}{suffix}.{GLTF_EXTENSION}")
}

/// Texture file name, e.g. `agent_metallic_roughness.png`.
pub fn texture_file_name(entity: Entity, channel: TextureChannel) -> String {
    format!("{entity}_{channel}.png")
}

/// Resolves every path inside one theme directory.
#[derive(Debug, Clone)]
pub struct ThemeLayout {
    root: PathBuf,
}

impl ThemeLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn meshes_dir(&self) -> PathBuf {
        self.root.join(MESHES_DIR)
    }

    pub fn textures_dir(&self) -> PathBuf {
        self.root.join(TEXTURES_DIR)
    }

    pub fn presets_dir(&self) -> PathBuf {
        self.root.join(PRESETS_DIR)
    }

    /// The three required sub-directories, in check order.
    pub fn required_dirs(&self) -> [PathBuf; 3] {
        [self.meshes_dir(), self.textures_dir(), self.presets_dir()]
    }

    pub fn mesh_path(&self, entity: Entity, suffix: &str) -> PathBuf {
        self.meshes_dir().join(mesh_file_name(entity, suffix))
    }

    pub fn texture_path(&self, entity: Entity, channel: TextureChannel) -> PathBuf {
        self.textures_dir().join(texture_file_name(entity, channel))
    }

    pub fn preset_path(&self, file_name: &str) -> PathBuf {
        self.presets_dir().join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_names_carry_suffix() {
        assert_eq!(mesh_file_name(Entity::Agent, ""), "agent_industrial.gltf");
        assert_eq!(
            mesh_file_name(Entity::PowerStorage, "_v2"),
            "power_storage_industrial_v2.gltf"
        );
    }

    #[test]
    fn test_preset_names_follow_tag() {
        assert_eq!(PresetVariant::Matte.file_name(""), "industrial_matte.env");
        assert_eq!(
            PresetVariant::Glossy.file_name("v2"),
            "industrial_v2_glossy.env"
        );
    }

    #[test]
    fn test_layout_paths_nest_under_root() {
        let layout = ThemeLayout::new("themes/industrial_v1");
        assert_eq!(
            layout.texture_path(Entity::Location, TextureChannel::Normal),
            Path::new("themes/industrial_v1/textures/location_normal.png")
        );
        assert_eq!(
            layout.mesh_path(Entity::Asset, ""),
            Path::new("themes/industrial_v1/meshes/asset_industrial.gltf")
        );
        assert_eq!(layout.required_dirs()[2], Path::new("themes/industrial_v1/presets"));
    }
}
