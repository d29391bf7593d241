//! Mesh recipes for the five theme entities
//!
//! Each entity is a small composite of primitives. Vertex counts are the sum
//! of the parts, so they are fixed for a given recipe:
//!
//! | Entity | Parts | Vertices |
//! |---|---|---|
//! | agent | octahedron + 6-sided prism | 20 |
//! | location | 24x16 UV sphere | 425 |
//! | asset | two boxes | 16 |
//! | power_plant | two 8-sided prisms | 36 |
//! | power_storage | 18-sided prism + two squashed 16x10 spheres | 412 |

use proc_gen::mesh::*;
use theme_shared::Entity;

/// glTF mesh name, e.g. `PowerPlantIndustrialMesh`
pub fn mesh_name(entity: Entity) -> &'static str {
    match entity {
        Entity::Agent => "AgentIndustrialMesh",
        Entity::Location => "LocationIndustrialMesh",
        Entity::Asset => "AssetIndustrialMesh",
        Entity::PowerPlant => "PowerPlantIndustrialMesh",
        Entity::PowerStorage => "PowerStorageIndustrialMesh",
    }
}

/// Build the v1 mesh for an entity
pub fn build_mesh(entity: Entity) -> Mesh {
    match entity {
        Entity::Agent => agent(),
        Entity::Location => generate_uv_sphere(1.05, 24, 16),
        Entity::Asset => asset(),
        Entity::PowerPlant => power_plant(),
        Entity::PowerStorage => power_storage(),
    }
}

/// Gem body with an antenna mast
fn agent() -> Mesh {
    combine_transformed(&[
        (&generate_octahedron(0.56), Transform::identity()),
        (
            &generate_prism(0.16, 0.55, 6),
            Transform::translate(Vec3::new(0.0, 0.54, 0.0)),
        ),
    ])
}

/// Crate with a lid
fn asset() -> Mesh {
    combine_transformed(&[
        (&generate_box(Vec3::new(0.95, 0.6, 0.95)), Transform::identity()),
        (
            &generate_box(Vec3::new(0.78, 0.22, 0.78)),
            Transform::translate(Vec3::new(0.0, 0.41, 0.0)),
        ),
    ])
}

/// Octagonal hall with a stack
fn power_plant() -> Mesh {
    combine_transformed(&[
        (&generate_prism(0.56, 1.22, 8), Transform::identity()),
        (
            &generate_prism(0.22, 0.72, 8),
            Transform::translate(Vec3::new(0.0, 0.74, 0.0)),
        ),
    ])
}

/// Cylinder tank with domed caps
fn power_storage() -> Mesh {
    let cap = generate_uv_sphere(0.43, 16, 10);
    let squash = Vec3::new(1.0, 0.44, 1.0);
    combine_transformed(&[
        (&generate_prism(0.46, 1.3, 18), Transform::identity()),
        (&cap, Transform::new(squash, Vec3::new(0.0, 0.65, 0.0))),
        (&cap, Transform::new(squash, Vec3::new(0.0, -0.65, 0.0))),
    ])
}
