//! The fixed axis-convention transform applied to everything leaving the exporter.

use glam::{DMat3, DMat4, DVec3, DVec4};

/// Converts points and matrices from the authoring convention (right-handed,
/// Z-up) to the renderer convention (right-handed, Y-up).
///
/// The single instance [`AxisTransform::Z_UP_TO_Y_UP`] is passed into every
/// extractor rather than being consulted as a global, so each stage can be
/// tested in isolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransform {
    matrix: DMat4,
}

impl AxisTransform {
    /// The Z-up to Y-up conversion: a -90 degree rotation about X.
    /// Maps a point (x, y, z) to (x, z, -y).
    pub const Z_UP_TO_Y_UP: AxisTransform = AxisTransform {
        matrix: DMat4::from_cols(
            DVec4::new(1.0, 0.0, 0.0, 0.0),
            DVec4::new(0.0, 0.0, -1.0, 0.0),
            DVec4::new(0.0, 1.0, 0.0, 0.0),
            DVec4::new(0.0, 0.0, 0.0, 1.0),
        ),
    };

    /// Transform a world-space point into renderer space.
    pub fn point(&self, p: DVec3) -> DVec3 {
        self.matrix.transform_point3(p)
    }

    /// Combine the conversion with an object's world matrix: `M * world`.
    pub fn matrix(&self, world: DMat4) -> DMat4 {
        self.matrix * world
    }

    /// Normal transform for an object: transpose(inverse(upper 3x3 of `M * world`)).
    ///
    /// Normals transform contravariantly, so a plain application of the point
    /// matrix is wrong under non-uniform scale or shear. A singular linear
    /// part gets a small diagonal nudge before inversion instead of failing,
    /// so an object with a degenerate transform exports (possibly degenerate)
    /// normals rather than aborting the whole scene.
    pub fn normal_matrix(&self, world: DMat4) -> DMat3 {
        let linear = DMat3::from_mat4(self.matrix * world);
        inverted_safe(linear).transpose()
    }
}

fn inverted_safe(m: DMat3) -> DMat3 {
    if m.determinant().abs() > f64::EPSILON {
        m.inverse()
    } else {
        let nudged = DMat3::from_cols(
            m.x_axis + DVec3::new(1e-8, 0.0, 0.0),
            m.y_axis + DVec3::new(0.0, 1e-8, 0.0),
            m.z_axis + DVec3::new(0.0, 0.0, 1e-8),
        );
        nudged.inverse()
    }
}
