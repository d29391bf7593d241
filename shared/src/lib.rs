//! Shared types for the industrial theme pack tools.
//!
//! Both the asset generator and the pack validator agree on the closed set of
//! entities, the four texture channels, and the on-disk layout of a theme
//! directory. Those conventions live here so the two tools never drift apart.

pub mod constants;
pub mod entity;
pub mod layout;

pub use entity::{Entity, ParseEntityError, TextureChannel};
pub use layout::{PresetVariant, ThemeLayout};
