//! glTF document assembly
//!
//! Every document written here has exactly one buffer, stored next to the
//! `.gltf` file and referenced by a relative URI.

use crate::buffer::BufferBuilder;
use crate::mesh::MeshAccessors;
use gltf_json as json;
use gltf_json::mesh::Semantic;
use gltf_json::validation::Checked::Valid;

/// Collects meshes, nodes and scenes for a single-buffer document
#[derive(Default)]
pub struct GltfBuilder {
    nodes: Vec<json::Node>,
    meshes: Vec<json::Mesh>,
    scenes: Vec<json::Scene>,
    buffer_uri: Option<String>,
}

impl GltfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// File name of the companion buffer, relative to the document
    pub fn buffer_uri(mut self, uri: impl Into<String>) -> Self {
        self.buffer_uri = Some(uri.into());
        self
    }

    /// Add a mesh with one indexed triangle-list primitive
    pub fn add_mesh(mut self, name: &str, accessors: &MeshAccessors) -> Self {
        let attributes = [
            (Semantic::Positions, accessors.positions),
            (Semantic::Normals, accessors.normals),
            (Semantic::TexCoords(0), accessors.uvs),
        ]
        .into_iter()
        .map(|(semantic, accessor)| (Valid(semantic), accessor.as_json_index()))
        .collect();

        self.meshes.push(json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            primitives: vec![json::mesh::Primitive {
                attributes,
                extensions: Default::default(),
                extras: Default::default(),
                indices: Some(accessors.indices.as_json_index()),
                material: None,
                mode: Valid(json::mesh::Mode::Triangles),
                targets: None,
            }],
            weights: None,
        });
        self
    }

    /// Add an untransformed node instancing `mesh`
    pub fn add_mesh_node(mut self, name: &str, mesh: u32) -> Self {
        self.nodes.push(json::Node {
            camera: None,
            children: None,
            extensions: Default::default(),
            extras: Default::default(),
            matrix: None,
            mesh: Some(json::Index::new(mesh)),
            name: Some(name.to_string()),
            rotation: None,
            scale: None,
            skin: None,
            translation: None,
            weights: None,
        });
        self
    }

    /// Add a scene over the given root nodes; the first scene is the default
    pub fn add_scene(mut self, root_nodes: &[u32]) -> Self {
        self.scenes.push(json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            nodes: root_nodes.iter().copied().map(json::Index::new).collect(),
        });
        self
    }

    /// Finish the document over the views and accessors packed in `buffer`
    ///
    /// The buffer's `byteLength` is the packed length, with no trailing
    /// padding.
    pub fn build(self, buffer: &BufferBuilder, generator: &str) -> json::Root {
        let scene = (!self.scenes.is_empty()).then(|| json::Index::new(0));

        json::Root {
            accessors: buffer.accessors().to_vec(),
            animations: Vec::new(),
            asset: json::Asset {
                copyright: None,
                extensions: Default::default(),
                extras: Default::default(),
                generator: Some(generator.to_string()),
                min_version: None,
                version: "2.0".to_string(),
            },
            buffers: vec![json::Buffer {
                byte_length: (buffer.data().len() as u64).into(),
                extensions: Default::default(),
                extras: Default::default(),
                name: None,
                uri: self.buffer_uri,
            }],
            buffer_views: buffer.views().to_vec(),
            cameras: Vec::new(),
            extensions: Default::default(),
            extensions_required: Vec::new(),
            extensions_used: Vec::new(),
            extras: Default::default(),
            images: Vec::new(),
            materials: Vec::new(),
            meshes: self.meshes,
            nodes: self.nodes,
            samplers: Vec::new(),
            scene,
            scenes: self.scenes,
            skins: Vec::new(),
            textures: Vec::new(),
        }
    }
}
