//! Procedural asset generation for viewer theme packs
//!
//! This library builds the low-poly meshes and PBR texture maps that make up an
//! industrial theme pack. Everything here is a pure function of its inputs:
//! generating twice with the same parameters and seeds yields identical bytes.
//!
//! # Mesh Example
//! ```no_run
//! use proc_gen::mesh::*;
//! use glam::Vec3;
//!
//! // Build a composite from primitives
//! let body = generate_octahedron(0.56);
//! let mut mast = generate_prism(0.16, 0.55, 6);
//! mast.apply(Transform::translate(Vec3::new(0.0, 0.54, 0.0)));
//!
//! let agent = combine(&[&body, &mast]);
//! assert_eq!(agent.vertex_count(), 20);
//!
//! // Derive surface attributes for export
//! let normals = compute_normals(&agent);
//! let uvs = compute_uvs(&agent);
//! # let _ = (normals, uvs);
//! ```
//!
//! # Texture Example
//! ```no_run
//! use proc_gen::texture::*;
//! use std::path::Path;
//!
//! let tex = base_color(256, [84, 118, 138], [173, 209, 228], 11);
//! write_png(&tex, Path::new("agent_base.png"))?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod mesh;
pub mod texture;
