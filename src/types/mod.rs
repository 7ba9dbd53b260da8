//! Input data model: a read-only snapshot of the host scene graph.
//!
//! The host's loosely-typed object list is ingested once into this finite set
//! of plain structs; everything downstream consumes only these.

mod geometry;
mod transform;

pub use geometry::{Corner, EvaluatedGeometry, GeometrySource, Polygon};
pub use transform::AxisTransform;

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// The active camera: its world transform plus lens parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraInput {
    /// Object-to-world matrix in the authoring convention.
    pub world_matrix: DMat4,
    /// Vertical field of view in radians.
    pub angle_y: f64,
}

/// World/environment settings, when the scene has any.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldInput {
    /// Environment color, channels in 0-1.
    pub color: [f32; 3],
}

/// Light sub-type as tagged by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightKind {
    Point,
    Sun,
    Spot,
    Area,
}

/// A scene light. Only [`LightKind::Point`] survives export; the output
/// format has no representation for the other kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightInput {
    pub kind: LightKind,
    /// World-space location in the authoring convention.
    pub location: DVec3,
    /// Photometric energy (watts-like host unit).
    pub energy: f64,
}

/// One material as found in an object's slot list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialInput {
    /// "Base Color" default value of a physically-based shader node, when the
    /// material's shading network has one. RGBA, channels nominally 0-1.
    pub base_color: Option<[f32; 4]>,
    /// Legacy scalar diffuse color of the material. RGBA.
    pub diffuse_color: [f32; 4],
}

/// A renderable mesh object.
pub struct MeshInput {
    /// Object-to-world matrix in the authoring convention.
    pub world_matrix: DMat4,
    /// Material slots in slot order. A slot can exist with nothing assigned.
    pub material_slots: Vec<Option<MaterialInput>>,
    /// Deferred evaluated-geometry source (see [`GeometrySource`]).
    pub geometry: Box<dyn GeometrySource>,
}

impl MeshInput {
    /// Convenience constructor for inline geometry.
    pub fn new(
        world_matrix: DMat4,
        material_slots: Vec<Option<MaterialInput>>,
        geometry: EvaluatedGeometry,
    ) -> Self {
        Self {
            world_matrix,
            material_slots,
            geometry: Box::new(geometry),
        }
    }
}

/// The full read-only snapshot one export call consumes.
pub struct SceneInput {
    /// Active camera, if any. Export fails without one.
    pub camera: Option<CameraInput>,
    /// Render resolution (width, height) in pixels.
    pub resolution: (u32, u32),
    /// World/environment settings, if the scene has a world.
    pub world: Option<WorldInput>,
    /// All lights, in host enumeration order.
    pub lights: Vec<LightInput>,
    /// All mesh objects, in host enumeration order.
    pub meshes: Vec<MeshInput>,
}
