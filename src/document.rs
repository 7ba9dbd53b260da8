//! Output records: the serialized scene document the renderer consumes.
//!
//! Field order in these structs is the key order in the emitted JSON, so it
//! is part of the format and must not be rearranged.

use glam::DVec3;
use serde::Serialize;

/// A 3D vector serialized as `{"x": f, "y": f, "z": f}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<DVec3> for Vec3 {
    fn from(v: DVec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Camera block of the scene document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraRecord {
    pub width: u32,
    pub height: u32,
    pub lookfrom: Vec3,
    pub lookat: Vec3,
    pub vup: Vec3,
    /// Vertical field of view in degrees.
    pub vfov: f64,
}

/// One point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightRecord {
    pub position: Vec3,
    pub intensity: f64,
}

/// Resolved per-object material.
///
/// Channels are i32, not u8: the float-to-byte conversion is deliberately
/// unclamped, so out-of-range shader values pass through as written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum MaterialSpec {
    Lambertian { color: [i32; 3] },
}

impl MaterialSpec {
    pub fn color(&self) -> [i32; 3] {
        match self {
            MaterialSpec::Lambertian { color } => *color,
        }
    }
}

/// One exported scene object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ObjectRecord {
    Mesh {
        /// Renderer-space positions; `vertices[i]` pairs with `normals[i]`.
        vertices: Vec<Vec3>,
        /// Triangle corner indices into `vertices`/`normals`.
        indices: Vec<[u32; 3]>,
        normals: Vec<Vec3>,
        material: MaterialSpec,
    },
}

/// The complete document, serialized once per export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDocument {
    pub camera: CameraRecord,
    pub background_color: [i32; 3],
    pub ambient_light: Vec3,
    pub lights: Vec<LightRecord>,
    pub objects: Vec<ObjectRecord>,
}
