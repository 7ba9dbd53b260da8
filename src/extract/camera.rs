//! Camera extraction.

use crate::document::{CameraRecord, Vec3};
use crate::error::{ExportError, Result};
use crate::types::{AxisTransform, SceneInput};
use glam::DVec3;

// Degree conversion keeps the truncated pi the renderer's scenes were
// authored against, so vfov stays byte-identical across exporter versions.
const DEG_PER_RAD: f64 = 180.0 / 3.141_592_65;

/// Derive the camera record from the scene's active camera.
///
/// The camera looks down its local -Z axis; the look target is one unit along
/// that direction. `vup` is fixed to world +Y, which assumes the camera never
/// rolls relative to the vertical axis.
pub fn extract_camera(scene: &SceneInput, axis: &AxisTransform) -> Result<CameraRecord> {
    let camera = scene.camera.as_ref().ok_or(ExportError::NoActiveCamera)?;

    let cam_matrix = axis.matrix(camera.world_matrix);
    let (_, rotation, lookfrom) = cam_matrix.to_scale_rotation_translation();
    let lookdir = rotation * DVec3::NEG_Z;
    let lookat = lookfrom + lookdir;

    Ok(CameraRecord {
        width: scene.resolution.0,
        height: scene.resolution.1,
        lookfrom: lookfrom.into(),
        lookat: lookat.into(),
        vup: Vec3::new(0.0, 1.0, 0.0),
        vfov: camera.angle_y * DEG_PER_RAD,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CameraInput;
    use glam::DMat4;

    fn scene_with_camera(camera: Option<CameraInput>) -> SceneInput {
        SceneInput {
            camera,
            resolution: (1920, 1080),
            world: None,
            lights: Vec::new(),
            meshes: Vec::new(),
        }
    }

    #[test]
    fn test_missing_camera_is_fatal() {
        let scene = scene_with_camera(None);
        let err = extract_camera(&scene, &AxisTransform::Z_UP_TO_Y_UP).unwrap_err();
        assert!(matches!(err, ExportError::NoActiveCamera));
    }

    #[test]
    fn test_identity_camera_looks_down_negative_y() {
        // A camera at the origin with no rotation faces local -Z, which the
        // axis conversion maps to -Y in renderer space.
        let scene = scene_with_camera(Some(CameraInput {
            world_matrix: DMat4::IDENTITY,
            angle_y: 0.5,
        }));
        let record = extract_camera(&scene, &AxisTransform::Z_UP_TO_Y_UP).unwrap();

        assert_eq!(record.lookfrom, Vec3::new(0.0, 0.0, 0.0));
        assert!((record.lookat.x - 0.0).abs() < 1e-12);
        assert!((record.lookat.y - -1.0).abs() < 1e-12);
        assert!((record.lookat.z - 0.0).abs() < 1e-12);
        assert_eq!(record.vup, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(record.width, 1920);
        assert_eq!(record.height, 1080);
    }

    #[test]
    fn test_translated_camera_lookfrom() {
        let scene = scene_with_camera(Some(CameraInput {
            world_matrix: DMat4::from_translation(glam::DVec3::new(4.0, -2.0, 7.0)),
            angle_y: 0.5,
        }));
        let record = extract_camera(&scene, &AxisTransform::Z_UP_TO_Y_UP).unwrap();
        // (x, y, z) -> (x, z, -y)
        assert_eq!(record.lookfrom, Vec3::new(4.0, 7.0, 2.0));
    }

    #[test]
    fn test_vfov_in_degrees() {
        let scene = scene_with_camera(Some(CameraInput {
            world_matrix: DMat4::IDENTITY,
            angle_y: 3.141_592_65 / 4.0,
        }));
        let record = extract_camera(&scene, &AxisTransform::Z_UP_TO_Y_UP).unwrap();
        assert!((record.vfov - 45.0).abs() < 1e-9);
    }
}
