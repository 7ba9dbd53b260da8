//! Extraction pipeline: scene snapshot in, scene document out.

pub mod camera;
pub mod light;
pub mod material;
pub mod mesh;

pub use camera::extract_camera;
pub use light::extract_lights;
pub use material::resolve_material;
pub use mesh::extract_mesh;

use crate::document::{SceneDocument, Vec3};
use crate::error::Result;
use crate::types::{AxisTransform, SceneInput, WorldInput};

/// Background color used when the scene has no world settings.
const DEFAULT_BACKGROUND: [i32; 3] = [10, 10, 20];
/// Ambient term used when the scene has no world settings.
const DEFAULT_AMBIENT: Vec3 = Vec3 {
    x: 0.1,
    y: 0.1,
    z: 0.1,
};

/// Build the complete scene document.
///
/// Fatal errors (no camera, a malformed mesh) abort the whole export; there
/// is no partial output and no skipping of failed objects.
pub fn build_document(scene: &SceneInput) -> Result<SceneDocument> {
    let axis = AxisTransform::Z_UP_TO_Y_UP;

    let camera = extract_camera(scene, &axis)?;
    let (background_color, ambient_light) = environment(scene.world.as_ref());
    let lights = extract_lights(&scene.lights, &axis);

    let objects = scene
        .meshes
        .iter()
        .map(|mesh| extract_mesh(mesh, &axis))
        .collect::<Result<Vec<_>>>()?;

    Ok(SceneDocument {
        camera,
        background_color,
        ambient_light,
        lights,
        objects,
    })
}

/// Background color and ambient term, with documented defaults when the scene
/// has no world. The ambient term is 10% of the environment color.
fn environment(world: Option<&WorldInput>) -> ([i32; 3], Vec3) {
    match world {
        Some(world) => {
            let [r, g, b] = world.color;
            let background = [
                (r * 255.0) as i32,
                (g * 255.0) as i32,
                (b * 255.0) as i32,
            ];
            let ambient = Vec3::new(r as f64 * 0.1, g as f64 * 0.1, b as f64 * 0.1);
            (background, ambient)
        }
        None => (DEFAULT_BACKGROUND, DEFAULT_AMBIENT),
    }
}
