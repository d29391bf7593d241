//! glTF JSON reader
//!
//! Extracts the declared vertex count and external buffer URIs from a `.gltf`
//! document without loading any buffer. Only the first primitive of the first
//! mesh is inspected.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum MeshParseError {
    #[error("failed to read gltf ({0})")]
    Io(#[from] std::io::Error),
    #[error("failed to parse gltf json ({0})")]
    Json(#[from] serde_json::Error),
    #[error("missing POSITION accessor/count ({0})")]
    MissingPosition(String),
}

/// What the validator needs from a mesh document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshSummary {
    pub vertex_count: u64,
    /// Non-empty `buffers[].uri` values, in document order
    pub buffer_uris: Vec<String>,
}

impl MeshSummary {
    /// Buffer files referenced by a document at `gltf_path` that do not exist
    pub fn missing_buffers(&self, gltf_path: &Path) -> Vec<(String, PathBuf)> {
        let base = gltf_path.parent().unwrap_or_else(|| Path::new(""));
        self.buffer_uris
            .iter()
            .map(|uri| (uri.clone(), base.join(uri)))
            .filter(|(_, path)| !path.exists())
            .collect()
    }
}

pub fn parse_mesh_json(text: &str) -> Result<MeshSummary, MeshParseError> {
    let doc: Value = serde_json::from_str(text)?;
    let vertex_count = position_count(&doc).map_err(MeshParseError::MissingPosition)?;

    let buffer_uris = doc
        .get("buffers")
        .and_then(Value::as_array)
        .map(|buffers| {
            buffers
                .iter()
                .filter_map(|buffer| buffer.get("uri").and_then(Value::as_str))
                .filter(|uri| !uri.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(MeshSummary {
        vertex_count,
        buffer_uris,
    })
}

pub fn read_mesh(path: &Path) -> Result<MeshSummary, MeshParseError> {
    let text = fs::read_to_string(path)?;
    parse_mesh_json(&text)
}

fn position_count(doc: &Value) -> Result<u64, String> {
    let primitive = doc
        .get("meshes")
        .and_then(|meshes| meshes.get(0))
        .and_then(|mesh| mesh.get("primitives"))
        .and_then(|primitives| primitives.get(0))
        .ok_or("no meshes[0].primitives[0]")?;
    let index = primitive
        .get("attributes")
        .and_then(|attributes| attributes.get("POSITION"))
        .and_then(Value::as_u64)
        .ok_or("primitive has no POSITION attribute")?;
    let accessor = doc
        .get("accessors")
        .and_then(|accessors| accessors.get(index as usize))
        .ok_or_else(|| format!("accessor {index} not found"))?;
    accessor
        .get("count")
        .and_then(Value::as_u64)
        .ok_or_else(|| format!("accessor {index} has no count"))
}
