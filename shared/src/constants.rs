//! Centralized constants for theme pack layout.

/// Sub-directory holding `.gltf`/`.bin` mesh pairs.
pub const MESHES_DIR: &str = "meshes";

/// Sub-directory holding PNG texture channels.
pub const TEXTURES_DIR: &str = "textures";

/// Sub-directory holding `.env` material presets.
pub const PRESETS_DIR: &str = "presets";

/// Theme family name embedded in mesh and preset file names.
pub const THEME_FAMILY: &str = "industrial";

/// Extension of the JSON half of a mesh pair.
pub const GLTF_EXTENSION: &str = "gltf";

/// Environment variable prefix used by viewer presets.
pub const PRESET_ENV_PREFIX: &str = "AGENT_WORLD_VIEWER_";
