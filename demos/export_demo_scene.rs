//! Builds a small scene programmatically and exports it.
//!
//! Run with: cargo run --example export_demo_scene

use glam::{DMat4, DVec3};
use scene_exporter::{
    export_scene, CameraInput, Corner, EvaluatedGeometry, LightInput, LightKind, MaterialInput,
    MeshInput, Polygon, SceneInput, WorldInput,
};

/// A unit cube centered on the origin, one flat-shaded polygon per face.
fn cube() -> EvaluatedGeometry {
    let positions = vec![
        DVec3::new(-0.5, -0.5, -0.5),
        DVec3::new(0.5, -0.5, -0.5),
        DVec3::new(0.5, 0.5, -0.5),
        DVec3::new(-0.5, 0.5, -0.5),
        DVec3::new(-0.5, -0.5, 0.5),
        DVec3::new(0.5, -0.5, 0.5),
        DVec3::new(0.5, 0.5, 0.5),
        DVec3::new(-0.5, 0.5, 0.5),
    ];
    let faces: [([usize; 4], DVec3); 6] = [
        ([4, 5, 6, 7], DVec3::Z),
        ([1, 0, 3, 2], DVec3::NEG_Z),
        ([0, 1, 5, 4], DVec3::NEG_Y),
        ([2, 3, 7, 6], DVec3::Y),
        ([1, 2, 6, 5], DVec3::X),
        ([3, 0, 4, 7], DVec3::NEG_X),
    ];
    let polygons = faces
        .iter()
        .map(|(quad, normal)| Polygon::flat(quad, *normal))
        .collect();
    EvaluatedGeometry::new(positions, polygons)
}

/// A large ground quad at z = 0, smooth +Z normals.
fn ground() -> EvaluatedGeometry {
    let positions = vec![
        DVec3::new(-10.0, -10.0, 0.0),
        DVec3::new(10.0, -10.0, 0.0),
        DVec3::new(10.0, 10.0, 0.0),
        DVec3::new(-10.0, 10.0, 0.0),
    ];
    let corners = (0..4usize).map(|v| Corner::new(v, DVec3::Z)).collect();
    EvaluatedGeometry::new(positions, vec![Polygon::new(corners)])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Camera at (7, -7, 5) in the authoring convention, aimed at the origin.
    let eye = DVec3::new(7.0, -7.0, 5.0);
    let camera_world = DMat4::look_at_rh(eye, DVec3::ZERO, DVec3::Z).inverse();

    let red = MaterialInput {
        base_color: Some([0.8, 0.1, 0.1, 1.0]),
        diffuse_color: [0.8, 0.1, 0.1, 1.0],
    };

    let scene = SceneInput {
        camera: Some(CameraInput {
            world_matrix: camera_world,
            angle_y: 0.69, // ~40 degrees
        }),
        resolution: (800, 600),
        world: Some(WorldInput {
            color: [0.05, 0.05, 0.1],
        }),
        lights: vec![LightInput {
            kind: LightKind::Point,
            location: DVec3::new(3.0, -4.0, 6.0),
            energy: 1000.0,
        }],
        meshes: vec![
            MeshInput::new(
                DMat4::from_translation(DVec3::new(0.0, 0.0, 0.5)),
                vec![Some(red)],
                cube(),
            ),
            MeshInput::new(DMat4::IDENTITY, Vec::new(), ground()),
        ],
    };

    export_scene(&scene, "demo_scene.json")?;
    println!("Wrote demo_scene.json");

    Ok(())
}
