//! Mesh extraction: evaluated geometry to flat vertex/index/normal arrays.

use crate::document::{ObjectRecord, Vec3};
use crate::error::{ExportError, Result};
use crate::extract::material::resolve_material;
use crate::types::{AxisTransform, Corner, MeshInput};
use glam::{DMat3, DMat4, DVec3};
use std::collections::HashMap;

/// Extract one mesh object into a flat record.
///
/// The evaluated-geometry snapshot is acquired here and dropped when this
/// function returns, success or error, so a scene with many large meshes
/// never holds more than one snapshot at a time.
pub fn extract_mesh(mesh: &MeshInput, axis: &AxisTransform) -> Result<ObjectRecord> {
    let geometry = mesh.geometry.evaluate()?;

    let final_matrix = axis.matrix(mesh.world_matrix);
    let normal_matrix = axis.normal_matrix(mesh.world_matrix);

    let mut builder = VertexBuilder::new(final_matrix, normal_matrix);
    let mut indices: Vec<[u32; 3]> = Vec::new();

    for (poly_index, polygon) in geometry.polygons.iter().enumerate() {
        let corners = &polygon.corners;
        if corners.len() < 3 {
            return Err(ExportError::InvalidGeometry(format!(
                "polygon {} has {} corners, need at least 3",
                poly_index,
                corners.len()
            )));
        }
        for corner in corners {
            if corner.vertex >= geometry.positions.len() {
                return Err(ExportError::InvalidGeometry(format!(
                    "polygon {} references vertex {} of {}",
                    poly_index,
                    corner.vertex,
                    geometry.positions.len()
                )));
            }
        }

        // Fan triangulation around corner 0. Winding is kept as authored:
        // the axis conversion is a pure rotation and cannot flip handedness.
        for i in 1..corners.len() - 1 {
            indices.push([
                builder.corner(&geometry.positions, corners[0]),
                builder.corner(&geometry.positions, corners[i]),
                builder.corner(&geometry.positions, corners[i + 1]),
            ]);
        }
    }

    let (vertices, normals) = builder.finish();

    Ok(ObjectRecord::Mesh {
        vertices,
        indices,
        normals,
        material: resolve_material(&mesh.material_slots),
    })
}

/// Accumulates split vertices: one output entry per distinct
/// (vertex index, corner normal) pair.
///
/// Corners sharing position and normal reuse one entry; a position shared by
/// faces with different normals is duplicated, since the output format stores
/// exactly one normal per vertex entry.
struct VertexBuilder {
    final_matrix: DMat4,
    normal_matrix: DMat3,
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    seen: HashMap<(usize, [u64; 3]), u32>,
}

impl VertexBuilder {
    fn new(final_matrix: DMat4, normal_matrix: DMat3) -> Self {
        Self {
            final_matrix,
            normal_matrix,
            vertices: Vec::new(),
            normals: Vec::new(),
            seen: HashMap::new(),
        }
    }

    fn corner(&mut self, positions: &[DVec3], corner: Corner) -> u32 {
        let key = (
            corner.vertex,
            [
                corner.normal.x.to_bits(),
                corner.normal.y.to_bits(),
                corner.normal.z.to_bits(),
            ],
        );
        if let Some(&index) = self.seen.get(&key) {
            return index;
        }

        let position = self.final_matrix.transform_point3(positions[corner.vertex]);
        let normal = (self.normal_matrix * corner.normal).normalize_or_zero();

        let index = self.vertices.len() as u32;
        self.vertices.push(position.into());
        self.normals.push(normal.into());
        self.seen.insert(key, index);
        index
    }

    fn finish(self) -> (Vec<Vec3>, Vec<Vec3>) {
        (self.vertices, self.normals)
    }
}
