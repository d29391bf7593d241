//! Theme pack validator
//!
//! Checks a theme directory against a [`ValidationProfile`]: required
//! sub-directories and preset files, one mesh per entity meeting its vertex
//! budget with every referenced buffer present, and four square PNG channels
//! per entity at or above the minimum edge. All problems are collected into
//! one [`ValidationReport`].

pub mod mesh;
pub mod png;
pub mod preset;
pub mod profile;
pub mod validate;

pub use profile::{ProfileError, ValidationProfile, VertexBudgets};
pub use validate::{validate_theme_pack, ValidationIssue, ValidationReport};
