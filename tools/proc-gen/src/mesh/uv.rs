//! UV projection

use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

use super::Mesh;

/// Smallest height span used when normalizing V, so flat meshes stay finite
const MIN_SPAN: f32 = 1e-6;

/// Cylindrical UV projection around the Y axis
///
/// * `u = 0.5 + atan2(z, x) / 2π` wraps once around the mesh; it jumps at the
///   -X seam.
/// * `v = 1 - (y - min_y) / (max_y - min_y)` runs top (0) to bottom (1) over
///   the whole mesh's height range.
pub fn compute_uvs(mesh: &Mesh) -> Vec<Vec2> {
    let Some((min, max)) = mesh.bounds() else {
        return Vec::new();
    };
    let span_y = (max.y - min.y).max(MIN_SPAN);

    mesh.positions
        .iter()
        .map(|p| project(*p, min.y, span_y))
        .collect()
}

#[inline]
fn project(p: Vec3, min_y: f32, span_y: f32) -> Vec2 {
    let u = 0.5 + p.z.atan2(p.x) / TAU;
    let v = 1.0 - (p.y - min_y) / span_y;
    Vec2::new(u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{generate_octahedron, generate_prism};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_empty_mesh() {
        assert!(compute_uvs(&Mesh::new()).is_empty());
    }

    #[test]
    fn test_octahedron_uvs() {
        let mesh = generate_octahedron(1.0);
        let uvs = compute_uvs(&mesh);
        // top apex: v = 0, bottom apex: v = 1
        assert!((uvs[0].y - 0.0).abs() < 1e-6);
        assert!((uvs[5].y - 1.0).abs() < 1e-6);
        // +X at u = 0.5, +Z a quarter turn later, -X on the seam
        assert!(close(uvs[3], Vec2::new(0.5, 0.5)));
        assert!(close(uvs[2], Vec2::new(0.75, 0.5)));
        assert!(close(uvs[4], Vec2::new(0.25, 0.5)));
        assert!(close(uvs[1], Vec2::new(1.0, 0.5)));
    }

    #[test]
    fn test_uvs_within_unit_square() {
        let mesh = generate_prism(0.56, 1.22, 8);
        for uv in compute_uvs(&mesh) {
            assert!((0.0..=1.0).contains(&uv.x));
            assert!((0.0..=1.0).contains(&uv.y));
        }
    }

    #[test]
    fn test_flat_mesh_has_finite_v() {
        let mesh = Mesh {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Z],
            indices: vec![0, 2, 1],
        };
        for uv in compute_uvs(&mesh) {
            assert_eq!(uv.y, 1.0);
        }
    }
}
