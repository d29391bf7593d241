//! Shared mesh generation helpers

use anyhow::{Context, Result};
use gltf_builder::{export_mesh, ExportSummary};
use proc_gen::mesh::Mesh;
use std::path::Path;
use tracing::info;

/// Export a mesh as a `.gltf` + `.bin` pair with consistent logging.
///
/// Logs `<file> (<verts> verts, <tris> tris)` once both files are on disk.
pub fn write_mesh(mesh: &Mesh, name: &str, path: &Path) -> Result<ExportSummary> {
    let summary = export_mesh(mesh, name, path)
        .with_context(|| format!("Failed to export mesh {}", path.display()))?;

    let file = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
    info!(
        "{} ({} verts, {} tris)",
        file, summary.vertex_count, summary.triangle_count
    );

    Ok(summary)
}
