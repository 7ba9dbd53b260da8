//! Evaluated mesh geometry and the source trait that produces it.

use crate::error::Result;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One corner of a polygon: a vertex index plus the normal at that corner.
///
/// Normals live on corners, not vertices, because a position shared between
/// faces can carry a different normal on each face (hard edges).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corner {
    /// Index into [`EvaluatedGeometry::positions`].
    pub vertex: usize,
    /// Corner normal in local (object) space.
    pub normal: DVec3,
}

impl Corner {
    pub fn new(vertex: usize, normal: DVec3) -> Self {
        Self { vertex, normal }
    }
}

/// A polygon as a list of corners, wound consistently around the face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub corners: Vec<Corner>,
}

impl Polygon {
    pub fn new(corners: Vec<Corner>) -> Self {
        Self { corners }
    }

    /// Build a polygon whose corners all share one normal (a flat face).
    pub fn flat(vertices: &[usize], normal: DVec3) -> Self {
        Self {
            corners: vertices.iter().map(|&v| Corner::new(v, normal)).collect(),
        }
    }
}

/// A mesh snapshot with all procedural modifications already applied.
///
/// Positions and normals are in local (object) space; the mesh extractor
/// applies the object's world matrix and the axis conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedGeometry {
    /// Local-space vertex positions.
    pub positions: Vec<DVec3>,
    /// Polygons referencing `positions` by index. Arbitrary n-gons are
    /// allowed; triangulation happens during extraction.
    pub polygons: Vec<Polygon>,
}

impl EvaluatedGeometry {
    pub fn new(positions: Vec<DVec3>, polygons: Vec<Polygon>) -> Self {
        Self {
            positions,
            polygons,
        }
    }
}

/// Source of evaluated geometry for one mesh object.
///
/// Hosts with procedural modifiers evaluate geometry lazily and the result
/// can be large, so the exporter asks for the snapshot only while extracting
/// the object that owns it. The returned value is dropped as soon as that
/// object's extraction finishes, which bounds peak memory in scenes with many
/// large meshes.
pub trait GeometrySource {
    /// Produce the evaluated snapshot for this object.
    fn evaluate(&self) -> Result<EvaluatedGeometry>;
}

/// Inline geometry is its own source; useful for tests and serialized scenes.
impl GeometrySource for EvaluatedGeometry {
    fn evaluate(&self) -> Result<EvaluatedGeometry> {
        Ok(self.clone())
    }
}
