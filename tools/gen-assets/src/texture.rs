//! Texture generation for every entity/channel pair
//!
//! Each texture is an independent pure function of its palette entry, so the
//! twenty jobs run on the rayon pool. Output bytes do not depend on
//! scheduling order.

use crate::palette::Palette;
use anyhow::{Context, Result};
use proc_gen::texture::*;
use rayon::prelude::*;
use std::path::PathBuf;
use theme_shared::{Entity, TextureChannel, ThemeLayout};
use tracing::debug;

/// One texture to synthesize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureJob {
    pub entity: Entity,
    pub channel: TextureChannel,
}

impl TextureJob {
    /// Every entity/channel pair in pack order
    pub fn all() -> Vec<TextureJob> {
        Entity::ALL
            .into_iter()
            .flat_map(|entity| {
                TextureChannel::ALL
                    .into_iter()
                    .map(move |channel| TextureJob { entity, channel })
            })
            .collect()
    }

    /// Synthesize the raster for this job
    pub fn render(&self, size: u32) -> TextureBuffer {
        let palette = Palette::for_entity(self.entity);
        let seed = palette.channel_seed(self.channel);
        match self.channel {
            TextureChannel::Base => base_color(size, palette.base_a, palette.base_b, seed),
            TextureChannel::Normal => normal_map(size, seed),
            TextureChannel::MetallicRoughness => {
                metallic_roughness(size, palette.metallic, palette.roughness, seed)
            }
            TextureChannel::Emissive => emissive(size, palette.emissive, seed),
        }
    }
}

/// Render and write all textures under `layout`, returning the written paths
/// in pack order
pub fn generate_textures(layout: &ThemeLayout, size: u32) -> Result<Vec<PathBuf>> {
    TextureJob::all()
        .par_iter()
        .map(|job| -> Result<PathBuf> {
            let path = layout.texture_path(job.entity, job.channel);
            let texture = job.render(size);
            write_png(&texture, &path)
                .with_context(|| format!("Failed to write texture {}", path.display()))?;
            debug!("wrote {}", path.display());
            Ok(path)
        })
        .collect()
}
