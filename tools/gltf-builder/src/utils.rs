//! Utility functions for GLTF buffer construction

/// Compute bounding box for positions
pub fn compute_bounds(positions: &[[f32; 3]]) -> (Vec<f32>, Vec<f32>) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for pos in positions {
        for i in 0..3 {
            min[i] = min[i].min(pos[i]);
            max[i] = max[i].max(pos[i]);
        }
    }

    (min.to_vec(), max.to_vec())
}

/// Zero-pad buffer until its length is a multiple of `alignment`
///
/// Returns the number of padding bytes written.
pub fn align_to(buffer: &mut Vec<u8>, alignment: usize) -> usize {
    let padding = (alignment - buffer.len() % alignment) % alignment;
    buffer.resize(buffer.len() + padding, 0);
    padding
}
