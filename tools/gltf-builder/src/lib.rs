//! glTF 2.0 export utilities for procedural theme meshes
//!
//! Writes a `.gltf` JSON document with its companion `.bin` buffer:
//! - BufferBuilder: packs streams into aligned views with accessors
//! - MeshStreams: validated vertex streams of one primitive
//! - GltfBuilder: assembles the single-buffer document
//! - export_mesh: one-call export of a proc-gen mesh
//!
//! # Example
//!
//! ```no_run
//! use gltf_builder::export_mesh;
//! use proc_gen::mesh::generate_octahedron;
//! use std::path::Path;
//!
//! let mesh = generate_octahedron(0.56);
//! let summary = export_mesh(&mesh, "Gem", Path::new("gem.gltf")).unwrap();
//! assert_eq!(summary.vertex_count, 6);
//! ```

pub mod buffer;
pub mod document;
pub mod export;
pub mod mesh;
pub mod utils;

pub use buffer::{AccessorIndex, BufferBuilder};
pub use document::GltfBuilder;
pub use export::{build_document, export_mesh, export_streams, ExportError, ExportSummary};
pub use mesh::{check_indices, MeshAccessors, MeshStreams, MAX_VERTICES};
pub use utils::{align_to, compute_bounds};

// Re-export commonly used gltf-json types
pub use gltf_json as json;

/// Extension of the companion buffer file
pub const BIN_EXTENSION: &str = "bin";
