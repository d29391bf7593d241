//! Low-poly primitive shapes: box, octahedron, UV sphere, prism
//!
//! Every builder returns a fresh mesh centred on the origin with a fixed,
//! documented vertex order and counter-clockwise (outward-facing) triangles.

use glam::Vec3;
use std::f32::consts::{PI, TAU};
use tracing::warn;

use super::Mesh;

/// Generate an axis-aligned box
///
/// # Arguments
/// * `size` - Full extent along each axis
///
/// # Returns
/// 8 corner vertices and 12 triangles. Corners 0..4 lie on the -Z face
/// (`---`, `+--`, `++-`, `-+-`), corners 4..8 repeat that order on +Z.
/// Faces are emitted back, front, bottom, top, left, right.
pub fn generate_box(size: Vec3) -> Mesh {
    let h = size * 0.5;
    let mut mesh = Mesh::with_capacity(8, 36);

    for z in [-h.z, h.z] {
        mesh.add_vertex(Vec3::new(-h.x, -h.y, z));
        mesh.add_vertex(Vec3::new(h.x, -h.y, z));
        mesh.add_vertex(Vec3::new(h.x, h.y, z));
        mesh.add_vertex(Vec3::new(-h.x, h.y, z));
    }

    const FACES: [[u32; 6]; 6] = [
        [0, 2, 1, 0, 3, 2], // back
        [4, 5, 6, 4, 6, 7], // front
        [0, 5, 4, 0, 1, 5], // bottom
        [3, 6, 2, 3, 7, 6], // top
        [0, 7, 3, 0, 4, 7], // left
        [1, 6, 5, 1, 2, 6], // right
    ];
    for face in FACES {
        mesh.add_triangle(face[0], face[1], face[2]);
        mesh.add_triangle(face[3], face[4], face[5]);
    }

    mesh
}

/// Generate a regular octahedron
///
/// # Returns
/// 6 vertices (top, -X, +Z, +X, -Z, bottom) and 8 triangles, one per
/// quadrant around each apex.
pub fn generate_octahedron(radius: f32) -> Mesh {
    let mut mesh = Mesh::with_capacity(6, 24);

    let top = mesh.add_vertex(Vec3::new(0.0, radius, 0.0));
    let ring = [
        mesh.add_vertex(Vec3::new(-radius, 0.0, 0.0)),
        mesh.add_vertex(Vec3::new(0.0, 0.0, radius)),
        mesh.add_vertex(Vec3::new(radius, 0.0, 0.0)),
        mesh.add_vertex(Vec3::new(0.0, 0.0, -radius)),
    ];
    let bottom = mesh.add_vertex(Vec3::new(0.0, -radius, 0.0));

    for i in 0..4 {
        mesh.add_triangle(top, ring[i], ring[(i + 1) % 4]);
    }
    for i in 0..4 {
        mesh.add_triangle(bottom, ring[(i + 1) % 4], ring[i]);
    }

    mesh
}

/// Generate a latitude/longitude sphere
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `segments_u` - Longitude divisions (min 3)
/// * `segments_v` - Latitude divisions (min 2)
///
/// # Returns
/// `(segments_v + 1) * (segments_u + 1)` vertices on a plain grid. Pole rows
/// and the seam column repeat positions; they are not collapsed. Two
/// triangles per grid quad.
pub fn generate_uv_sphere(radius: f32, segments_u: u32, segments_v: u32) -> Mesh {
    let segments_u = if segments_u < 3 {
        warn!("generate_uv_sphere: segments_u must be >= 3, clamping to 3");
        3
    } else {
        segments_u
    };
    let segments_v = if segments_v < 2 {
        warn!("generate_uv_sphere: segments_v must be >= 2, clamping to 2");
        2
    } else {
        segments_v
    };

    let row = segments_u + 1;
    let mut mesh = Mesh::with_capacity(
        ((segments_v + 1) * row) as usize,
        (segments_u * segments_v * 6) as usize,
    );

    for y in 0..=segments_v {
        let phi = PI * (y as f32 / segments_v as f32);
        let (sin_phi, cos_phi) = phi.sin_cos();
        for x in 0..=segments_u {
            let theta = TAU * (x as f32 / segments_u as f32);
            let (sin_theta, cos_theta) = theta.sin_cos();
            mesh.add_vertex(Vec3::new(
                radius * sin_phi * cos_theta,
                radius * cos_phi,
                radius * sin_phi * sin_theta,
            ));
        }
    }

    for y in 0..segments_v {
        for x in 0..segments_u {
            let a = y * row + x;
            let b = a + 1;
            let c = a + row;
            let d = c + 1;
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(b, d, c);
        }
    }

    mesh
}

/// Generate a closed N-sided prism standing on the Y axis
///
/// # Arguments
/// * `radius` - Circumradius of the cross-section
/// * `height` - Total height, centred on the origin
/// * `sides` - Number of sides (min 3)
///
/// # Returns
/// `2 + 2 * sides` vertices: top centre, bottom centre, then one
/// (top, bottom) pair per side. `4 * sides` triangles: a top and bottom fan
/// plus two per barrel quad.
pub fn generate_prism(radius: f32, height: f32, sides: u32) -> Mesh {
    let sides = if sides < 3 {
        warn!("generate_prism: sides must be >= 3, clamping to 3");
        3
    } else {
        sides
    };

    let half_height = height * 0.5;
    let mut mesh = Mesh::with_capacity((2 + 2 * sides) as usize, (12 * sides) as usize);

    let top_center = mesh.add_vertex(Vec3::new(0.0, half_height, 0.0));
    let bottom_center = mesh.add_vertex(Vec3::new(0.0, -half_height, 0.0));

    for i in 0..sides {
        let angle = TAU * (i as f32 / sides as f32);
        let (sin, cos) = angle.sin_cos();
        mesh.add_vertex(Vec3::new(cos * radius, half_height, sin * radius));
        mesh.add_vertex(Vec3::new(cos * radius, -half_height, sin * radius));
    }

    for i in 0..sides {
        let next = (i + 1) % sides;
        let top_i = 2 + i * 2;
        let bottom_i = top_i + 1;
        let top_n = 2 + next * 2;
        let bottom_n = top_n + 1;

        mesh.add_triangle(top_center, top_n, top_i);
        mesh.add_triangle(bottom_center, bottom_i, bottom_n);
        mesh.add_triangle(top_i, top_n, bottom_i);
        mesh.add_triangle(bottom_i, top_n, bottom_n);
    }

    mesh
}
