//! Per-vertex normal derivation

use glam::Vec3;

use super::math::normalize_or_up;
use super::Mesh;

/// Compute smooth per-vertex normals from triangle winding
///
/// Each triangle contributes its unnormalized face normal
/// `(p1 - p0) x (p2 - p0)` to all three of its vertices; the magnitude of that
/// cross product scales with triangle area, so large faces dominate the
/// average. Sums are normalized at the end. Vertices that no triangle
/// references (or whose contributions cancel) get +Y.
pub fn compute_normals(mesh: &Mesh) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; mesh.positions.len()];

    for [i0, i1, i2] in mesh.triangles() {
        let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
        let p0 = mesh.positions[i0];
        let p1 = mesh.positions[i1];
        let p2 = mesh.positions[i2];

        let face = (p1 - p0).cross(p2 - p0);
        normals[i0] += face;
        normals[i1] += face;
        normals[i2] += face;
    }

    normals.into_iter().map(normalize_or_up).collect()
}
