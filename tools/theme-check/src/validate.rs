//! Whole-pack validation
//!
//! Every check runs regardless of earlier failures; problems are collected
//! into a [`ValidationReport`] instead of stopping at the first one.

use crate::mesh::{read_mesh, MeshParseError};
use crate::png::{read_png_size, PngHeaderError};
use crate::preset::read_preset;
use crate::profile::ValidationProfile;
use std::fmt;
use std::path::{Path, PathBuf};
use theme_shared::{Entity, TextureChannel, ThemeLayout};
use tracing::debug;

/// One problem found in a theme pack
#[derive(Debug, thiserror::Error)]
pub enum ValidationIssue {
    #[error("missing directory: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("missing preset file: {}", .0.display())]
    MissingPreset(PathBuf),
    #[error("{}: failed to read preset ({message})", .path.display())]
    UnreadablePreset { path: PathBuf, message: String },
    #[error("{}: preset defines no variables", .0.display())]
    EmptyPreset(PathBuf),
    #[error("missing mesh file: {}", .0.display())]
    MissingMesh(PathBuf),
    #[error("{}: {error}", .path.display())]
    InvalidMesh {
        path: PathBuf,
        error: MeshParseError,
    },
    #[error("{}: missing buffer file {uri}", .path.display())]
    MissingBuffer { path: PathBuf, uri: String },
    #[error("{}: vertex count {actual} < required {required}", .path.display())]
    VertexBudget {
        entity: Entity,
        path: PathBuf,
        actual: u64,
        required: usize,
    },
    #[error("missing texture file: {}", .0.display())]
    MissingTexture(PathBuf),
    #[error("{}: invalid png ({error})", .path.display())]
    InvalidPng {
        path: PathBuf,
        error: PngHeaderError,
    },
    #[error("{}: size {width}x{height} < {min}x{min}", .path.display())]
    TextureTooSmall {
        path: PathBuf,
        width: u32,
        height: u32,
        min: u32,
    },
    #[error("{}: texture must be square (got {width}x{height})", .path.display())]
    NonSquareTexture { path: PathBuf, width: u32, height: u32 },
}

/// Outcome of validating one theme directory
#[derive(Debug)]
pub struct ValidationReport {
    pub theme_dir: PathBuf,
    pub profile: String,
    pub min_texture_size: u32,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(
                f,
                "theme pack validation passed: {} (profile={}, min_texture={})",
                self.theme_dir.display(),
                self.profile,
                self.min_texture_size
            );
        }
        write!(f, "theme pack validation failed:")?;
        for issue in &self.issues {
            write!(f, "\n- {issue}")?;
        }
        Ok(())
    }
}

/// Validate the pack under `theme_dir` against `profile`
///
/// `min_texture_size` is the already-resolved minimum edge, see
/// [`ValidationProfile::effective_min_texture_size`].
pub fn validate_theme_pack(
    theme_dir: &Path,
    profile: &ValidationProfile,
    min_texture_size: u32,
) -> ValidationReport {
    let layout = ThemeLayout::new(theme_dir);
    let mut issues = Vec::new();

    for dir in layout.required_dirs() {
        if !dir.is_dir() {
            issues.push(ValidationIssue::MissingDirectory(dir));
        }
    }

    for file_name in &profile.preset_files {
        check_preset(&layout.preset_path(file_name), &mut issues);
    }

    for entity in Entity::ALL {
        check_mesh(&layout, profile, entity, &mut issues);
        for channel in TextureChannel::ALL {
            check_texture(&layout.texture_path(entity, channel), min_texture_size, &mut issues);
        }
    }

    debug!(
        "validated {} with profile {}: {} issue(s)",
        theme_dir.display(),
        profile.name,
        issues.len()
    );

    ValidationReport {
        theme_dir: theme_dir.to_path_buf(),
        profile: profile.name.clone(),
        min_texture_size,
        issues,
    }
}

fn check_preset(path: &Path, issues: &mut Vec<ValidationIssue>) {
    if !path.exists() {
        issues.push(ValidationIssue::MissingPreset(path.to_path_buf()));
        return;
    }
    match read_preset(path) {
        Ok(vars) if vars.is_empty() => {
            issues.push(ValidationIssue::EmptyPreset(path.to_path_buf()));
        }
        Ok(vars) => debug!("{}: {} variables", path.display(), vars.len()),
        Err(e) => issues.push(ValidationIssue::UnreadablePreset {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

fn check_mesh(
    layout: &ThemeLayout,
    profile: &ValidationProfile,
    entity: Entity,
    issues: &mut Vec<ValidationIssue>,
) {
    let path = layout.mesh_path(entity, &profile.mesh_suffix);
    if !path.exists() {
        issues.push(ValidationIssue::MissingMesh(path));
        return;
    }

    // An unreadable document counts as zero vertices, so the budget check
    // below still reports against it.
    let vertex_count = match read_mesh(&path) {
        Ok(summary) => {
            for (uri, _) in summary.missing_buffers(&path) {
                issues.push(ValidationIssue::MissingBuffer {
                    path: path.clone(),
                    uri,
                });
            }
            summary.vertex_count
        }
        Err(error) => {
            issues.push(ValidationIssue::InvalidMesh {
                path: path.clone(),
                error,
            });
            0
        }
    };

    let required = profile.min_vertices.get(entity);
    debug!("{}: {} vertices (min {})", path.display(), vertex_count, required);
    if vertex_count < required as u64 {
        issues.push(ValidationIssue::VertexBudget {
            entity,
            path,
            actual: vertex_count,
            required,
        });
    }
}

fn check_texture(path: &Path, min_size: u32, issues: &mut Vec<ValidationIssue>) {
    if !path.exists() {
        issues.push(ValidationIssue::MissingTexture(path.to_path_buf()));
        return;
    }
    let (width, height) = match read_png_size(path) {
        Ok(size) => size,
        Err(error) => {
            issues.push(ValidationIssue::InvalidPng {
                path: path.to_path_buf(),
                error,
            });
            return;
        }
    };
    if width < min_size || height < min_size {
        issues.push(ValidationIssue::TextureTooSmall {
            path: path.to_path_buf(),
            width,
            height,
            min: min_size,
        });
    }
    if width != height {
        issues.push(ValidationIssue::NonSquareTexture {
            path: path.to_path_buf(),
            width,
            height,
        });
    }
}
