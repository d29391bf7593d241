//! Procedural texture generation
//!
//! Textures are RGB8 rasters filled by a per-pixel function of `(x, y)`. The
//! four PBR channels of a theme pack each have a synthesizer here, all driven
//! by the same integer hash noise so output is reproducible from a seed.
//!
//! # Example
//! ```no_run
//! use proc_gen::texture::*;
//!
//! let base = base_color(256, [84, 118, 138], [173, 209, 228], 11);
//! let normal = normal_map(256, 16);
//! let mr = metallic_roughness(256, 0.58, 0.46, 20);
//! let glow = emissive(256, [72, 182, 255], 24);
//!
//! write_png(&base, std::path::Path::new("agent_base.png")).unwrap();
//! # let _ = (normal, mr, glow);
//! ```

mod export;
mod materials;
mod noise;
mod normal;
mod patterns;

// Core type
pub use self::buffer::TextureBuffer;

// Noise
pub use noise::hash_noise;

// Helpers
pub use patterns::{clamp01, mix, to_channel};

// Channel synthesizers
pub use materials::{base_color, emissive, metallic_roughness};
pub use normal::normal_map;

// Export
pub use export::{encode_png, write_png, PNG_SIGNATURE};

mod buffer {
    /// RGB texture buffer for procedural texture generation
    #[derive(Clone, Debug, PartialEq)]
    pub struct TextureBuffer {
        /// Width in pixels
        pub width: u32,
        /// Height in pixels
        pub height: u32,
        /// RGB pixel data (3 bytes per pixel, row-major, top row first)
        pub pixels: Vec<u8>,
    }

    impl TextureBuffer {
        /// Create a new texture buffer initialized to black
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                pixels: vec![0u8; width as usize * height as usize * 3],
            }
        }

        /// Create a texture buffer filled with a solid color
        pub fn filled(width: u32, height: u32, color: [u8; 3]) -> Self {
            let mut buffer = Self::new(width, height);
            for chunk in buffer.pixels.chunks_exact_mut(3) {
                chunk.copy_from_slice(&color);
            }
            buffer
        }

        /// Fill a new buffer by evaluating `pixel(x, y)` in row-major order
        pub fn from_fn(width: u32, height: u32, mut pixel: impl FnMut(u32, u32) -> [u8; 3]) -> Self {
            let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
            for y in 0..height {
                for x in 0..width {
                    pixels.extend_from_slice(&pixel(x, y));
                }
            }
            Self {
                width,
                height,
                pixels,
            }
        }

        /// Get pixel at (x, y)
        #[inline]
        pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
            let idx = self.index(x, y);
            [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
        }

        /// Set pixel at (x, y)
        #[inline]
        pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
            let idx = self.index(x, y);
            self.pixels[idx..idx + 3].copy_from_slice(&color);
        }

        /// Raw bytes of one row
        pub fn row(&self, y: u32) -> &[u8] {
            let stride = self.width as usize * 3;
            let start = y as usize * stride;
            &self.pixels[start..start + stride]
        }

        pub fn is_square(&self) -> bool {
            self.width == self.height
        }

        #[inline]
        fn index(&self, x: u32, y: u32) -> usize {
            (y as usize * self.width as usize + x as usize) * 3
        }
    }
}
