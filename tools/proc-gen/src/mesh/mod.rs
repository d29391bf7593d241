//! Mesh generation and modification
//!
//! Primitives are built as plain position/index lists. Surface attributes
//! (normals, UVs) are derived afterwards from the final composite, so merging
//! never has to reconcile per-part attribute streams.

mod math;
mod primitives;

pub mod combine;
pub mod modifiers;
pub mod normals;
pub mod uv;

pub use glam::{Vec2, Vec3};
pub use math::{normalize_or_up, NORMAL_EPSILON};

// Primitives
pub use primitives::{generate_box, generate_octahedron, generate_prism, generate_uv_sphere};

// Composition
pub use combine::{combine, combine_transformed};
pub use modifiers::{MeshApply, MeshModifier, Transform};

// Attribute derivation
pub use normals::compute_normals;
pub use uv::compute_uvs;

pub use self::data::Mesh;

mod data {
    use glam::Vec3;

    /// Indexed triangle mesh
    ///
    /// Vertex order is significant: indices refer to it and duplicates are
    /// allowed. Every consecutive index triple is one counter-clockwise
    /// triangle as seen from outside the surface.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Mesh {
        /// Vertex positions
        pub positions: Vec<Vec3>,
        /// Triangle list, three indices per face
        pub indices: Vec<u32>,
    }

    impl Mesh {
        /// Create an empty mesh
        pub fn new() -> Self {
            Self::default()
        }

        /// Create an empty mesh with room for the given vertex and index counts
        pub fn with_capacity(vertices: usize, indices: usize) -> Self {
            Self {
                positions: Vec::with_capacity(vertices),
                indices: Vec::with_capacity(indices),
            }
        }

        /// Append a vertex, returning its index
        pub fn add_vertex(&mut self, position: Vec3) -> u32 {
            self.positions.push(position);
            (self.positions.len() - 1) as u32
        }

        /// Append one triangle
        pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
            self.indices.extend_from_slice(&[i0, i1, i2]);
        }

        #[inline]
        pub fn vertex_count(&self) -> usize {
            self.positions.len()
        }

        #[inline]
        pub fn triangle_count(&self) -> usize {
            self.indices.len() / 3
        }

        /// Iterate triangles as index triples
        pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
            self.indices
                .chunks_exact(3)
                .map(|tri| [tri[0], tri[1], tri[2]])
        }

        /// True when the index list is a whole number of triangles and every
        /// index refers to an existing vertex
        pub fn is_well_formed(&self) -> bool {
            let count = self.positions.len();
            self.indices.len() % 3 == 0 && self.indices.iter().all(|&i| (i as usize) < count)
        }

        /// Per-axis bounding box, `None` for an empty mesh
        pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
            let first = *self.positions.first()?;
            Some(
                self.positions
                    .iter()
                    .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_add_vertex_returns_index() {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.add_vertex(Vec3::ZERO), 0);
        assert_eq!(mesh.add_vertex(Vec3::X), 1);
        assert_eq!(mesh.add_vertex(Vec3::Y), 2);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.is_well_formed());
    }

    #[test]
    fn test_mesh_detects_dangling_index() {
        let mesh = Mesh {
            positions: vec![Vec3::ZERO, Vec3::X],
            indices: vec![0, 1, 2],
        };
        assert!(!mesh.is_well_formed());
    }

    #[test]
    fn test_mesh_bounds() {
        let mesh = Mesh {
            positions: vec![Vec3::new(-1.0, 2.0, 0.5), Vec3::new(3.0, -4.0, 0.0)],
            indices: Vec::new(),
        };
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::new(-1.0, -4.0, 0.0));
        assert_eq!(max, Vec3::new(3.0, 2.0, 0.5));
        assert!(Mesh::new().bounds().is_none());
    }
}
