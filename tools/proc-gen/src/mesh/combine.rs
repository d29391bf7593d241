//! Mesh combining utilities
//!
//! Functions for merging multiple meshes into a single mesh.

use super::modifiers::Transform;
use super::Mesh;

/// Combine multiple meshes into one
///
/// Vertices are concatenated in argument order. Indices of the i-th mesh are
/// rebased by the number of vertices that precede it, so the combined vertex
/// count is exactly the sum of the inputs.
///
/// # Example
/// ```no_run
/// use proc_gen::mesh::*;
/// use glam::Vec3;
///
/// let base = generate_box(Vec3::new(0.95, 0.6, 0.95));
/// let lid = generate_box(Vec3::new(0.78, 0.22, 0.78));
///
/// let crate_mesh = combine(&[&base, &lid]);
/// assert_eq!(crate_mesh.vertex_count(), 16);
/// ```
pub fn combine(meshes: &[&Mesh]) -> Mesh {
    let total_vertices: usize = meshes.iter().map(|m| m.positions.len()).sum();
    let total_indices: usize = meshes.iter().map(|m| m.indices.len()).sum();

    let mut result = Mesh::with_capacity(total_vertices, total_indices);

    for mesh in meshes {
        let vertex_offset = result.positions.len() as u32;

        result.positions.extend_from_slice(&mesh.positions);
        result
            .indices
            .extend(mesh.indices.iter().map(|&idx| vertex_offset + idx));
    }

    result
}

/// Combine multiple meshes with per-mesh transforms
///
/// Useful for building an entity out of simpler parts.
///
/// # Example
/// ```no_run
/// use proc_gen::mesh::*;
/// use glam::Vec3;
///
/// let cap = generate_uv_sphere(0.43, 16, 10);
/// let body = generate_prism(0.46, 1.3, 18);
/// let squash = Vec3::new(1.0, 0.44, 1.0);
///
/// let tank = combine_transformed(&[
///     (&body, Transform::identity()),
///     (&cap, Transform::new(squash, Vec3::new(0.0, 0.65, 0.0))),
///     (&cap, Transform::new(squash, Vec3::new(0.0, -0.65, 0.0))),
/// ]);
/// ```
pub fn combine_transformed(meshes: &[(&Mesh, Transform)]) -> Mesh {
    let transformed_meshes: Vec<Mesh> = meshes
        .iter()
        .map(|(mesh, transform)| transform.transformed(mesh))
        .collect();

    let mesh_refs: Vec<&Mesh> = transformed_meshes.iter().collect();
    combine(&mesh_refs)
}
