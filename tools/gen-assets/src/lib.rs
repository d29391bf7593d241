//! Industrial theme pack generator
//!
//! Writes a complete v1 theme directory:
//!
//! ```text
//! <out_dir>/meshes/<entity>_industrial.gltf   (+ .bin)
//! <out_dir>/textures/<entity>_<channel>.png
//! <out_dir>/presets/industrial_{default,matte,glossy}.env
//! ```
//!
//! Output is fully determined by the recipes, palette and texture size, so
//! regenerating into a fresh directory reproduces every file byte for byte.
//!
//! Only v1-shaped assets are produced. The validator's v2 profile expects
//! `_v2` meshes with much larger vertex budgets; no recipe here targets it.

pub mod entities;
pub mod mesh_helpers;
pub mod palette;
pub mod presets;
pub mod texture;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use theme_shared::{Entity, ThemeLayout};
use tracing::info;

/// Theme name written into preset asset paths when the output directory has
/// no usable file name
pub const DEFAULT_THEME_NAME: &str = "industrial_v1";

/// Default edge length of generated textures
pub const DEFAULT_TEXTURE_SIZE: u32 = 256;

/// Knobs for one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub texture_size: u32,
    pub write_presets: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            texture_size: DEFAULT_TEXTURE_SIZE,
            write_presets: true,
        }
    }
}

/// Files written by a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub meshes: Vec<PathBuf>,
    pub textures: Vec<PathBuf>,
    pub presets: Vec<PathBuf>,
}

/// Generate meshes, textures and (optionally) presets under `layout`
pub fn generate_theme(layout: &ThemeLayout, options: &GenerateOptions) -> Result<GenerationReport> {
    let mut dirs = vec![layout.meshes_dir(), layout.textures_dir()];
    if options.write_presets {
        dirs.push(layout.presets_dir());
    }
    for dir in &dirs {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let mut report = GenerationReport::default();

    for entity in Entity::ALL {
        let mesh = entities::build_mesh(entity);
        let path = layout.mesh_path(entity, "");
        mesh_helpers::write_mesh(&mesh, entities::mesh_name(entity), &path)?;
        report.meshes.push(path);
    }

    report.textures = texture::generate_textures(layout, options.texture_size)?;
    info!(
        "{} textures ({}x{})",
        report.textures.len(),
        options.texture_size,
        options.texture_size
    );

    if options.write_presets {
        let theme = layout
            .root()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_THEME_NAME.to_string());
        report.presets = presets::write_presets(layout, &theme)?;
    }

    Ok(report)
}
