//! Viewer material preset files
//!
//! A preset is a `KEY=VALUE` env file the viewer loads to point each entity at
//! its mesh and textures and to tint its material. Asset paths are relative to
//! the viewer's asset root, i.e. `themes/<theme>/meshes/...`.
//!
//! The viewer groups material scalars as agent, asset and facility; power
//! plant and power storage share the facility group, and locations have none.

use crate::palette::{hex_color, Palette};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use theme_shared::constants::{MESHES_DIR, PRESET_ENV_PREFIX, TEXTURES_DIR};
use theme_shared::layout::{mesh_file_name, texture_file_name};
use theme_shared::{Entity, PresetVariant, TextureChannel, ThemeLayout};

/// Shift applied to roughness (up) and metallic (down) for the matte variant,
/// and the other way round for glossy
const ROUGHNESS_SHIFT: f64 = 0.2;
const METALLIC_SHIFT: f64 = 0.15;

/// Viewer material group an entity's roughness and metallic are written to
///
/// `None` for entities the viewer reads no material scalars for, or whose
/// group is already written by another entity.
pub fn material_group(entity: Entity) -> Option<&'static str> {
    match entity {
        Entity::Agent => Some("AGENT"),
        Entity::Asset => Some("ASSET"),
        Entity::PowerPlant => Some("FACILITY"),
        Entity::Location | Entity::PowerStorage => None,
    }
}

/// Roughness and metallic for an entity under a variant, clamped to [0, 1]
pub fn material_scalars(palette: &Palette, variant: PresetVariant) -> (f64, f64) {
    let (roughness, metallic) = match variant {
        PresetVariant::Default => (palette.roughness, palette.metallic),
        PresetVariant::Matte => (
            palette.roughness + ROUGHNESS_SHIFT,
            palette.metallic - METALLIC_SHIFT,
        ),
        PresetVariant::Glossy => (
            palette.roughness - ROUGHNESS_SHIFT,
            palette.metallic + METALLIC_SHIFT,
        ),
    };
    (roughness.clamp(0.0, 1.0), metallic.clamp(0.0, 1.0))
}

/// Render one preset file
///
/// `theme` is the theme directory name under `themes/`, and `mesh_suffix` the
/// suffix of the mesh files it references.
pub fn render_preset(theme: &str, mesh_suffix: &str, variant: PresetVariant) -> String {
    let asset = |dir: &str, file: String| format!("themes/{theme}/{dir}/{file}");

    let mut lines = vec![
        format!("# {theme} {} material preset", variant.as_str()),
        "# generated by gen-theme-assets; edits are overwritten".to_string(),
        format!(
            "{PRESET_ENV_PREFIX}MATERIAL_VARIANT_PRESET={}",
            variant.as_str()
        ),
    ];

    for entity in Entity::ALL {
        let key = entity.env_key();
        let palette = Palette::for_entity(entity);

        lines.push(String::new());
        lines.push(format!("# {entity}"));
        lines.push(format!(
            "{PRESET_ENV_PREFIX}{key}_MESH_ASSET={}",
            asset(MESHES_DIR, mesh_file_name(entity, mesh_suffix))
        ));
        for channel in TextureChannel::ALL {
            lines.push(format!(
                "{PRESET_ENV_PREFIX}{key}_{}_TEXTURE_ASSET={}",
                channel.env_key(),
                asset(TEXTURES_DIR, texture_file_name(entity, channel))
            ));
        }
        lines.push(format!(
            "{PRESET_ENV_PREFIX}{key}_BASE_COLOR={}",
            hex_color(palette.base_tint())
        ));
        lines.push(format!(
            "{PRESET_ENV_PREFIX}{key}_EMISSIVE_COLOR={}",
            hex_color(palette.emissive)
        ));
        if let Some(group) = material_group(entity) {
            let (roughness, metallic) = material_scalars(&palette, variant);
            lines.push(format!("{PRESET_ENV_PREFIX}MATERIAL_{group}_ROUGHNESS={roughness:.2}"));
            lines.push(format!("{PRESET_ENV_PREFIX}MATERIAL_{group}_METALLIC={metallic:.2}"));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Write the three v1 presets under `layout`
pub fn write_presets(layout: &ThemeLayout, theme: &str) -> Result<Vec<PathBuf>> {
    PresetVariant::ALL
        .into_iter()
        .map(|variant| -> Result<PathBuf> {
            let path = layout.preset_path(&variant.file_name(""));
            fs::write(&path, render_preset(theme, "", variant))
                .with_context(|| format!("Failed to write preset {}", path.display()))?;
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(text: &'a str, key: &str) -> Option<&'a str> {
        text.lines()
            .filter(|line| !line.starts_with('#'))
            .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
    }

    #[test]
    fn test_default_preset_keys() {
        let text = render_preset("industrial_v1", "", PresetVariant::Default);

        assert_eq!(
            value(&text, "AGENT_WORLD_VIEWER_MATERIAL_VARIANT_PRESET"),
            Some("default")
        );
        assert_eq!(
            value(&text, "AGENT_WORLD_VIEWER_AGENT_MESH_ASSET"),
            Some("themes/industrial_v1/meshes/agent_industrial.gltf")
        );
        assert_eq!(
            value(&text, "AGENT_WORLD_VIEWER_POWER_STORAGE_METALLIC_ROUGHNESS_TEXTURE_ASSET"),
            Some("themes/industrial_v1/textures/power_storage_metallic_roughness.png")
        );
        assert_eq!(
            value(&text, "AGENT_WORLD_VIEWER_AGENT_EMISSIVE_COLOR"),
            Some("#48B6FF")
        );
        assert_eq!(
            value(&text, "AGENT_WORLD_VIEWER_MATERIAL_AGENT_ROUGHNESS"),
            Some("0.46")
        );
        assert_eq!(
            value(&text, "AGENT_WORLD_VIEWER_MATERIAL_AGENT_METALLIC"),
            Some("0.58")
        );
    }

    #[test]
    fn test_every_entity_has_all_assets() {
        let text = render_preset("industrial_v1", "", PresetVariant::Glossy);
        for entity in Entity::ALL {
            let key = entity.env_key();
            assert!(value(&text, &format!("AGENT_WORLD_VIEWER_{key}_MESH_ASSET")).is_some());
            for channel in TextureChannel::ALL {
                let channel_key = channel.env_key();
                assert!(
                    value(&text, &format!("AGENT_WORLD_VIEWER_{key}_{channel_key}_TEXTURE_ASSET"))
                        .is_some()
                );
            }
        }
    }

    #[test]
    fn test_material_keys_match_viewer_groups() {
        let text = render_preset("industrial_v1", "", PresetVariant::Matte);
        let mut keys: Vec<&str> = text
            .lines()
            .filter(|line| !line.starts_with('#'))
            .filter_map(|line| line.split_once('=').map(|(key, _)| key))
            .filter(|key| key.ends_with("_ROUGHNESS") || key.ends_with("_METALLIC"))
            .collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            [
                "AGENT_WORLD_VIEWER_MATERIAL_AGENT_METALLIC",
                "AGENT_WORLD_VIEWER_MATERIAL_AGENT_ROUGHNESS",
                "AGENT_WORLD_VIEWER_MATERIAL_ASSET_METALLIC",
                "AGENT_WORLD_VIEWER_MATERIAL_ASSET_ROUGHNESS",
                "AGENT_WORLD_VIEWER_MATERIAL_FACILITY_METALLIC",
                "AGENT_WORLD_VIEWER_MATERIAL_FACILITY_ROUGHNESS",
            ]
        );
    }

    #[test]
    fn test_variants_shift_material() {
        let palette = Palette::for_entity(Entity::Location);
        let (r, m) = material_scalars(&palette, PresetVariant::Matte);
        assert!((r - 0.89).abs() < 1e-9);
        assert!((m - 0.19).abs() < 1e-9);

        let (r, m) = material_scalars(&palette, PresetVariant::Glossy);
        assert!((r - 0.49).abs() < 1e-9);
        assert!((m - 0.49).abs() < 1e-9);
    }

    #[test]
    fn test_variant_scalars_clamp() {
        let palette = Palette {
            roughness: 0.95,
            metallic: 0.05,
            ..Palette::for_entity(Entity::Agent)
        };
        assert_eq!(material_scalars(&palette, PresetVariant::Matte), (1.0, 0.0));
    }

    #[test]
    fn test_write_presets() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ThemeLayout::new(dir.path());
        fs::create_dir_all(layout.presets_dir()).unwrap();

        let paths = write_presets(&layout, "industrial_v1").unwrap();

        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            ["industrial_default.env", "industrial_matte.env", "industrial_glossy.env"]
        );
        let matte = fs::read_to_string(&paths[1]).unwrap();
        assert_eq!(
            value(&matte, "AGENT_WORLD_VIEWER_MATERIAL_VARIANT_PRESET"),
            Some("matte")
        );
    }
}
