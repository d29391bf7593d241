//! Per-entity material palette

use theme_shared::{Entity, TextureChannel};

/// Colors, PBR scalars and noise seed for one entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub base_a: [u8; 3],
    pub base_b: [u8; 3],
    pub emissive: [u8; 3],
    pub metallic: f64,
    pub roughness: f64,
    pub seed: u32,
}

impl Palette {
    pub fn for_entity(entity: Entity) -> Self {
        let (base_a, base_b, emissive, metallic, roughness, seed) = match entity {
            Entity::Agent => ([84, 118, 138], [173, 209, 228], [72, 182, 255], 0.58, 0.46, 11),
            Entity::Location => ([54, 70, 80], [124, 149, 162], [44, 132, 184], 0.34, 0.69, 23),
            Entity::Asset => ([86, 92, 84], [166, 156, 118], [198, 142, 52], 0.72, 0.41, 31),
            Entity::PowerPlant => ([96, 74, 66], [183, 127, 97], [255, 122, 64], 0.63, 0.39, 47),
            Entity::PowerStorage => ([53, 68, 91], [117, 142, 182], [84, 152, 255], 0.52, 0.36, 59),
        };
        Self {
            base_a,
            base_b,
            emissive,
            metallic,
            roughness,
            seed,
        }
    }

    /// Noise seed for one texture channel
    ///
    /// Channels are offset from the entity seed so their patterns do not line up.
    pub fn channel_seed(&self, channel: TextureChannel) -> u32 {
        let offset = match channel {
            TextureChannel::Base => 0,
            TextureChannel::Normal => 5,
            TextureChannel::MetallicRoughness => 9,
            TextureChannel::Emissive => 13,
        };
        self.seed + offset
    }

    /// Midpoint of the two base color endpoints
    pub fn base_tint(&self) -> [u8; 3] {
        std::array::from_fn(|i| ((self.base_a[i] as u16 + self.base_b[i] as u16) / 2) as u8)
    }
}

/// `#RRGGBB`
pub fn hex_color(color: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_seeds() {
        let palette = Palette::for_entity(Entity::Agent);
        assert_eq!(palette.channel_seed(TextureChannel::Base), 11);
        assert_eq!(palette.channel_seed(TextureChannel::Normal), 16);
        assert_eq!(palette.channel_seed(TextureChannel::MetallicRoughness), 20);
        assert_eq!(palette.channel_seed(TextureChannel::Emissive), 24);
    }

    #[test]
    fn test_seeds_are_distinct_per_entity() {
        let mut seeds: Vec<u32> = Entity::ALL.iter().map(|e| Palette::for_entity(*e).seed).collect();
        seeds.dedup();
        assert_eq!(seeds.len(), 5);
    }

    #[test]
    fn test_base_tint_and_hex() {
        let palette = Palette::for_entity(Entity::PowerPlant);
        assert_eq!(palette.base_tint(), [139, 100, 81]);
        assert_eq!(hex_color(palette.emissive), "#FF7A40");
        assert_eq!(hex_color([0, 10, 171]), "#000AAB");
    }
}
