//! Mesh modifiers
//!
//! Modifiers edit a mesh in place and can be chained:
//!
//! ```no_run
//! use proc_gen::mesh::*;
//! use glam::Vec3;
//!
//! let mut mesh = generate_uv_sphere(0.43, 16, 10);
//! mesh.apply(Transform::scale(Vec3::new(1.0, 0.44, 1.0)))
//!     .apply(Transform::translate(Vec3::new(0.0, 0.65, 0.0)));
//! ```

use glam::Vec3;

use super::Mesh;

/// Trait for mesh modifiers
pub trait MeshModifier {
    /// Apply this modifier to a mesh, modifying it in place
    fn apply(&self, mesh: &mut Mesh);
}

/// Extension trait for fluent modifier application
pub trait MeshApply {
    /// Apply a modifier and return `&mut Self` for chaining
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self;
}

impl MeshApply for Mesh {
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self {
        modifier.apply(self);
        self
    }
}

/// Per-axis scale followed by a translation: `v' = v * scale + translate`
///
/// Indices are left untouched, so winding is preserved for positive scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: Vec3,
    pub translate: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create an identity transform (no change)
    pub fn identity() -> Self {
        Self {
            scale: Vec3::ONE,
            translate: Vec3::ZERO,
        }
    }

    pub fn new(scale: Vec3, translate: Vec3) -> Self {
        Self { scale, translate }
    }

    /// Create a translation-only transform
    pub fn translate(offset: Vec3) -> Self {
        Self::new(Vec3::ONE, offset)
    }

    /// Create a scale-only transform
    pub fn scale(scale: Vec3) -> Self {
        Self::new(scale, Vec3::ZERO)
    }

    /// Transform a single point
    #[inline]
    pub fn point(&self, v: Vec3) -> Vec3 {
        v * self.scale + self.translate
    }

    /// Return a transformed copy, leaving `mesh` untouched
    pub fn transformed(&self, mesh: &Mesh) -> Mesh {
        let mut out = mesh.clone();
        self.apply(&mut out);
        out
    }
}

impl MeshModifier for Transform {
    fn apply(&self, mesh: &mut Mesh) {
        for pos in &mut mesh.positions {
            *pos = self.point(*pos);
        }
    }
}
