//! `.gltf` + `.bin` pair export for procedural meshes

use crate::mesh::{check_indices, MeshStreams, MAX_VERTICES};
use crate::{BufferBuilder, GltfBuilder};
use gltf_json as json;
use proc_gen::mesh::{compute_normals, compute_uvs, Mesh};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const GENERATOR: &str = concat!("gltf-builder ", env!("CARGO_PKG_VERSION"));

/// Errors that can occur while exporting a mesh
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize gltf json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("mesh has {vertex_count} vertices; 16-bit indices address at most {}", MAX_VERTICES)]
    IndexOverflow { vertex_count: usize },

    #[error("mesh has no vertices or no triangles")]
    EmptyMesh,

    #[error("{attribute} stream has {actual} entries, expected {expected}")]
    AttributeMismatch {
        attribute: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("index count {len} is not a multiple of 3")]
    IncompleteTriangle { len: usize },

    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("output path has no file name: {0}")]
    InvalidPath(PathBuf),
}

/// Result of a successful export
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub gltf_path: PathBuf,
    pub bin_path: PathBuf,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub buffer_len: usize,
}

/// Build the glTF document and binary buffer for one mesh
///
/// The document holds one scene, one node named `<name>Node`, one mesh with a
/// single primitive (POSITION, NORMAL, TEXCOORD_0 at accessors 0, 1, 2 and
/// indices at 3), and one buffer whose URI is `bin_uri`.
pub fn build_document(
    name: &str,
    streams: MeshStreams<'_>,
    bin_uri: &str,
) -> Result<(json::Root, Vec<u8>), ExportError> {
    let mut buffer = BufferBuilder::new();
    let accessors = streams.pack(&mut buffer)?;

    let root = GltfBuilder::new()
        .buffer_uri(bin_uri)
        .add_mesh(name, &accessors)
        .add_mesh_node(&format!("{name}Node"), 0)
        .add_scene(&[0])
        .build(&buffer, GENERATOR);

    Ok((root, buffer.into_data()))
}

/// Export a mesh as `<path>` plus a sibling `<stem>.bin`
///
/// Normals and UVs are derived from the mesh before packing. Indices are
/// narrowed to 16 bits; meshes with more than [`MAX_VERTICES`] vertices are
/// rejected rather than truncated. Malformed index lists are rejected before
/// any attribute is derived.
pub fn export_mesh(mesh: &Mesh, name: &str, path: &Path) -> Result<ExportSummary, ExportError> {
    check_indices(&mesh.indices, mesh.positions.len())?;

    let positions: Vec<[f32; 3]> = mesh.positions.iter().map(|p| p.to_array()).collect();
    let normals: Vec<[f32; 3]> = compute_normals(mesh).iter().map(|n| n.to_array()).collect();
    let uvs: Vec<[f32; 2]> = compute_uvs(mesh).iter().map(|uv| uv.to_array()).collect();

    export_streams(
        name,
        MeshStreams {
            positions: &positions,
            normals: &normals,
            uvs: &uvs,
            indices: &mesh.indices,
        },
        path,
    )
}

/// Export precomputed vertex streams as a `.gltf` + `.bin` pair
pub fn export_streams(
    name: &str,
    streams: MeshStreams<'_>,
    path: &Path,
) -> Result<ExportSummary, ExportError> {
    let bin_path = path.with_extension(crate::BIN_EXTENSION);
    let bin_uri = bin_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .ok_or_else(|| ExportError::InvalidPath(path.to_path_buf()))?;

    let (root, data) = build_document(name, streams, &bin_uri)?;

    let mut text = json::serialize::to_string_pretty(&root)?;
    text.push('\n');

    fs::write(&bin_path, &data).map_err(|source| ExportError::Io {
        path: bin_path.clone(),
        source,
    })?;
    fs::write(path, text).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "wrote {} ({} bytes) and {}",
        path.display(),
        data.len(),
        bin_path.display()
    );

    Ok(ExportSummary {
        gltf_path: path.to_path_buf(),
        bin_path,
        vertex_count: streams.vertex_count(),
        triangle_count: streams.triangle_count(),
        buffer_len: data.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_gen::mesh::{generate_octahedron, Vec3};

    fn triangle() -> Mesh {
        Mesh {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_single_triangle_byte_layout() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let normals = [[0.0, 0.0, 1.0]; 3];
        let uvs = [[0.5, 1.0], [0.5, 1.0], [0.75, 0.0]];
        let (root, data) = build_document(
            "Tri",
            MeshStreams {
                positions: &positions,
                normals: &normals,
                uvs: &uvs,
                indices: &[0, 1, 2],
            },
            "tri.bin",
        )
        .unwrap();

        assert_eq!(data.len(), 36 + 36 + 24 + 6);
        assert_eq!(root.buffers[0].byte_length.0, data.len() as u64);

        let offsets: Vec<(u64, u64)> = root
            .buffer_views
            .iter()
            .map(|v| (v.byte_offset.as_ref().unwrap().0, v.byte_length.0))
            .collect();
        assert_eq!(offsets, vec![(0, 36), (36, 36), (72, 24), (96, 6)]);

        // Second position is (1, 0, 0)
        assert_eq!(&data[12..16], &[0x00, 0x00, 0x80, 0x3F]);
        // First normal z component
        assert_eq!(&data[44..48], &[0x00, 0x00, 0x80, 0x3F]);
        // Index stream
        assert_eq!(&data[96..], &[0, 0, 1, 0, 2, 0]);
    }

    #[test]
    fn test_document_shape() {
        let mesh = generate_octahedron(0.56);
        let positions: Vec<[f32; 3]> = mesh.positions.iter().map(|p| p.to_array()).collect();
        let normals = vec![[0.0, 1.0, 0.0]; 6];
        let uvs = vec![[0.0, 0.0]; 6];
        let (root, _) = build_document(
            "Octa",
            MeshStreams {
                positions: &positions,
                normals: &normals,
                uvs: &uvs,
                indices: &mesh.indices,
            },
            "octa.bin",
        )
        .unwrap();

        let value = serde_json::to_value(&root).unwrap();
        let prim = &value["meshes"][0]["primitives"][0];
        assert_eq!(prim["attributes"]["POSITION"], 0);
        assert_eq!(prim["attributes"]["NORMAL"], 1);
        assert_eq!(prim["attributes"]["TEXCOORD_0"], 2);
        assert_eq!(prim["indices"], 3);
        assert_eq!(value["nodes"][0]["name"], "OctaNode");
        assert_eq!(value["nodes"][0]["mesh"], 0);
        assert_eq!(value["scenes"][0]["nodes"][0], 0);
        assert_eq!(value["scene"], 0);
        assert_eq!(value["buffers"][0]["uri"], "octa.bin");

        let accessors = value["accessors"].as_array().unwrap();
        assert_eq!(accessors.len(), 4);
        assert_eq!(accessors[0]["componentType"], 5126);
        assert_eq!(accessors[0]["type"], "VEC3");
        assert_eq!(accessors[0]["count"], 6);
        assert!(accessors[0]["min"].is_array() && accessors[0]["max"].is_array());
        assert_eq!(accessors[2]["type"], "VEC2");
        assert_eq!(accessors[3]["componentType"], 5123);
        assert_eq!(accessors[3]["type"], "SCALAR");
        assert_eq!(accessors[3]["count"], 24);
        assert_eq!(accessors[3]["min"][0], 0);
        assert_eq!(accessors[3]["max"][0], 5);

        let views = value["bufferViews"].as_array().unwrap();
        assert_eq!(views[0]["target"], 34962);
        assert_eq!(views[3]["target"], 34963);
    }

    #[test]
    fn test_rejects_empty_mesh() {
        let err = build_document(
            "Empty",
            MeshStreams {
                positions: &[],
                normals: &[],
                uvs: &[],
                indices: &[],
            },
            "empty.bin",
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::EmptyMesh));
    }

    #[test]
    fn test_rejects_attribute_mismatch() {
        let err = build_document(
            "Bad",
            MeshStreams {
                positions: &[[0.0; 3]; 3],
                normals: &[[0.0; 3]; 2],
                uvs: &[[0.0; 2]; 3],
                indices: &[0, 1, 2],
            },
            "bad.bin",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ExportError::AttributeMismatch {
                attribute: "NORMAL",
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_rejects_dangling_index() {
        let err = build_document(
            "Dangling",
            MeshStreams {
                positions: &[[0.0; 3]; 2],
                normals: &[[0.0; 3]; 2],
                uvs: &[[0.0; 2]; 2],
                indices: &[0, 1, 2],
            },
            "dangling.bin",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ExportError::IndexOutOfRange {
                index: 2,
                vertex_count: 2
            }
        ));
    }

    #[test]
    fn test_rejects_partial_triangle() {
        let err = build_document(
            "Two",
            MeshStreams {
                positions: &[[0.0; 3]; 3],
                normals: &[[0.0; 3]; 3],
                uvs: &[[0.0; 2]; 3],
                indices: &[0, 1],
            },
            "two.bin",
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::IncompleteTriangle { len: 2 }));
    }

    #[test]
    fn test_export_mesh_rejects_dangling_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dangling.gltf");
        let mesh = Mesh {
            indices: vec![0, 1, 3],
            ..triangle()
        };

        let err = export_mesh(&mesh, "Dangling", &path).unwrap_err();

        assert!(matches!(
            err,
            ExportError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            }
        ));
        assert!(!path.exists());
        assert!(!dir.path().join("dangling.bin").exists());
    }

    #[test]
    fn test_export_mesh_rejects_partial_triangle() {
        let dir = tempfile::tempdir().unwrap();
        let mesh = Mesh {
            indices: vec![0, 1, 2, 2],
            ..triangle()
        };

        let err = export_mesh(&mesh, "Partial", &dir.path().join("partial.gltf")).unwrap_err();
        assert!(matches!(err, ExportError::IncompleteTriangle { len: 4 }));
    }

    #[test]
    fn test_rejects_index_overflow() {
        let count = MAX_VERTICES + 1;
        let positions = vec![[0.0f32; 3]; count];
        let normals = vec![[0.0f32, 1.0, 0.0]; count];
        let uvs = vec![[0.0f32; 2]; count];
        let err = build_document(
            "Huge",
            MeshStreams {
                positions: &positions,
                normals: &normals,
                uvs: &uvs,
                indices: &[0, 1, 65535],
            },
            "huge.bin",
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::IndexOverflow { vertex_count } if vertex_count == count));
    }

    #[test]
    fn test_export_mesh_writes_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri_industrial.gltf");

        let summary = export_mesh(&triangle(), "Tri", &path).unwrap();

        assert_eq!(summary.vertex_count, 3);
        assert_eq!(summary.triangle_count, 1);
        assert_eq!(summary.bin_path, dir.path().join("tri_industrial.bin"));
        let bin = std::fs::read(&summary.bin_path).unwrap();
        assert_eq!(bin.len(), summary.buffer_len);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["buffers"][0]["uri"], "tri_industrial.bin");
        assert_eq!(value["buffers"][0]["byteLength"], bin.len());
    }

    #[test]
    fn test_export_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.gltf");
        let b = dir.path().join("b.gltf");
        let mesh = generate_octahedron(1.0);

        export_mesh(&mesh, "Same", &a).unwrap();
        export_mesh(&mesh, "Same", &b).unwrap();

        assert_eq!(
            std::fs::read(dir.path().join("a.bin")).unwrap(),
            std::fs::read(dir.path().join("b.bin")).unwrap()
        );
    }
}
