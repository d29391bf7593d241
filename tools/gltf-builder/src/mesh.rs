//! Vertex streams of one primitive and their packing

use crate::buffer::{AccessorIndex, BufferBuilder};
use crate::export::ExportError;

/// Largest vertex count addressable by 16-bit indices
pub const MAX_VERTICES: usize = u16::MAX as usize;

/// Check that `indices` form whole triangles over `vertex_count` vertices
pub fn check_indices(indices: &[u32], vertex_count: usize) -> Result<(), ExportError> {
    if indices.len() % 3 != 0 {
        return Err(ExportError::IncompleteTriangle { len: indices.len() });
    }
    match indices.iter().find(|&&i| i as usize >= vertex_count) {
        Some(&index) => Err(ExportError::IndexOutOfRange {
            index,
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Vertex streams for one exported primitive
#[derive(Debug, Clone, Copy)]
pub struct MeshStreams<'a> {
    pub positions: &'a [[f32; 3]],
    pub normals: &'a [[f32; 3]],
    pub uvs: &'a [[f32; 2]],
    pub indices: &'a [u32],
}

/// Accessors written for one primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshAccessors {
    pub positions: AccessorIndex,
    pub normals: AccessorIndex,
    pub uvs: AccessorIndex,
    pub indices: AccessorIndex,
}

impl MeshStreams<'_> {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Reject streams that cannot become a valid 16-bit indexed primitive
    pub fn validate(&self) -> Result<(), ExportError> {
        let vertex_count = self.vertex_count();
        if vertex_count == 0 || self.indices.is_empty() {
            return Err(ExportError::EmptyMesh);
        }
        if vertex_count > MAX_VERTICES {
            return Err(ExportError::IndexOverflow { vertex_count });
        }
        check_indices(self.indices, vertex_count)?;
        for (attribute, actual) in [("NORMAL", self.normals.len()), ("TEXCOORD_0", self.uvs.len())] {
            if actual != vertex_count {
                return Err(ExportError::AttributeMismatch {
                    attribute,
                    expected: vertex_count,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Validate, then pack positions, normals, UVs and indices in that order
    ///
    /// Into an empty buffer this yields accessors 0 to 3.
    pub fn pack(&self, buffer: &mut BufferBuilder) -> Result<MeshAccessors, ExportError> {
        self.validate()?;

        // In range: validate() bounds every index by MAX_VERTICES
        let indices: Vec<u16> = self.indices.iter().map(|&i| i as u16).collect();

        Ok(MeshAccessors {
            positions: buffer.pack_positions(self.positions),
            normals: buffer.pack_vec3(self.normals),
            uvs: buffer.pack_vec2(self.uvs),
            indices: buffer.pack_indices_u16(&indices),
        })
    }
}
