//! Low-level buffer packing with aligned views and accessor creation
//!
//! Every stream lands in its own buffer view. Padding is inserted *before* a
//! blob so its view starts on the required boundary; nothing is appended after
//! the last blob, so the buffer length equals the end of the final view.

use crate::utils::{align_to, compute_bounds};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// Alignment of 32-bit float streams
pub const FLOAT_ALIGN: usize = 4;
/// Alignment of 16-bit index streams
pub const INDEX_ALIGN: usize = 2;

/// Accessor index returned by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Builder for a single binary buffer with aligned views
#[derive(Default)]
pub struct BufferBuilder {
    buffer: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl BufferBuilder {
    /// Create a new empty buffer builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current accessor count
    pub fn accessor_count(&self) -> u32 {
        self.accessors.len() as u32
    }

    /// Get the binary buffer data
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the builder, returning the binary buffer
    pub fn into_data(self) -> Vec<u8> {
        self.buffer
    }

    /// Get the buffer views
    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    /// Get the accessors
    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    /// Pack Vec3 positions with per-axis bounds
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        let view = self.push_view(
            positions.iter().flatten(),
            FLOAT_ALIGN,
            json::buffer::Target::ArrayBuffer,
        );

        let (min, max) = compute_bounds(positions);
        self.push_accessor(
            view,
            positions.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            Some(float_array(&min)),
            Some(float_array(&max)),
        )
    }

    /// Pack Vec3 data (normals)
    pub fn pack_vec3(&mut self, data: &[[f32; 3]]) -> AccessorIndex {
        let view = self.push_view(
            data.iter().flatten(),
            FLOAT_ALIGN,
            json::buffer::Target::ArrayBuffer,
        );
        self.push_accessor(
            view,
            data.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            None,
            None,
        )
    }

    /// Pack Vec2 data (UVs)
    pub fn pack_vec2(&mut self, data: &[[f32; 2]]) -> AccessorIndex {
        let view = self.push_view(
            data.iter().flatten(),
            FLOAT_ALIGN,
            json::buffer::Target::ArrayBuffer,
        );
        self.push_accessor(
            view,
            data.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec2,
            None,
            None,
        )
    }

    /// Pack u16 indices, recording their min/max
    pub fn pack_indices_u16(&mut self, indices: &[u16]) -> AccessorIndex {
        let offset = self.begin_view(INDEX_ALIGN);
        for idx in indices {
            self.buffer.extend_from_slice(&idx.to_le_bytes());
        }
        let view = self.finish_view(offset, json::buffer::Target::ElementArrayBuffer);

        let bounds = |value: Option<&u16>| {
            value.map(|v| json::Value::Array(vec![json::Value::from(*v)]))
        };
        self.push_accessor(
            view,
            indices.len(),
            json::accessor::ComponentType::U16,
            json::accessor::Type::Scalar,
            bounds(indices.iter().min()),
            bounds(indices.iter().max()),
        )
    }

    /// Append little-endian floats as a new view
    fn push_view<'a>(
        &mut self,
        floats: impl Iterator<Item = &'a f32>,
        alignment: usize,
        target: json::buffer::Target,
    ) -> json::Index<json::buffer::View> {
        let offset = self.begin_view(alignment);
        for f in floats {
            self.buffer.extend_from_slice(&f.to_le_bytes());
        }
        self.finish_view(offset, target)
    }

    fn begin_view(&mut self, alignment: usize) -> usize {
        align_to(&mut self.buffer, alignment);
        self.buffer.len()
    }

    fn finish_view(
        &mut self,
        offset: usize,
        target: json::buffer::Target,
    ) -> json::Index<json::buffer::View> {
        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: (self.buffer.len() - offset).into(),
            byte_offset: Some(offset.into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(target)),
        });
        json::Index::new(self.views.len() as u32 - 1)
    }

    fn push_accessor(
        &mut self,
        view: json::Index<json::buffer::View>,
        count: usize,
        component_type: json::accessor::ComponentType,
        type_: json::accessor::Type,
        min: Option<json::Value>,
        max: Option<json::Value>,
    ) -> AccessorIndex {
        let accessor_idx = self.accessors.len() as u32;
        self.accessors.push(json::Accessor {
            buffer_view: Some(view),
            byte_offset: Some(0u64.into()),
            count: count.into(),
            component_type: Valid(json::accessor::GenericComponentType(component_type)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(type_),
            min,
            max,
            name: None,
            normalized: false,
            sparse: None,
        });
        AccessorIndex(accessor_idx)
    }
}

fn float_array(values: &[f32]) -> json::Value {
    json::Value::Array(values.iter().map(|v| json::Value::from(*v)).collect())
}
