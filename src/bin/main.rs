//! Scene Exporter CLI
//!
//! Converts a captured scene snapshot (JSON) into the ray tracer's scene
//! format.

use clap::Parser;
use glam::DMat4;
use scene_exporter::{
    build_document, export, CameraInput, EvaluatedGeometry, LightInput, MaterialInput, MeshInput,
    SceneInput, WorldInput,
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scene-exporter")]
#[command(author, version, about = "Export a scene snapshot to ray tracer JSON", long_about = None)]
struct Cli {
    /// Input scene snapshot JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Output scene file path (.json)
    #[arg(short, long)]
    output: PathBuf,
}

/// On-disk form of a scene snapshot: the library DTOs with inline geometry.
#[derive(Deserialize)]
struct SceneSnapshot {
    camera: Option<CameraInput>,
    resolution: (u32, u32),
    #[serde(default)]
    world: Option<WorldInput>,
    #[serde(default)]
    lights: Vec<LightInput>,
    #[serde(default)]
    meshes: Vec<MeshSnapshot>,
}

#[derive(Deserialize)]
struct MeshSnapshot {
    world_matrix: DMat4,
    #[serde(default)]
    material_slots: Vec<Option<MaterialInput>>,
    geometry: EvaluatedGeometry,
}

impl From<SceneSnapshot> for SceneInput {
    fn from(snapshot: SceneSnapshot) -> Self {
        SceneInput {
            camera: snapshot.camera,
            resolution: snapshot.resolution,
            world: snapshot.world,
            lights: snapshot.lights,
            meshes: snapshot
                .meshes
                .into_iter()
                .map(|m| MeshInput::new(m.world_matrix, m.material_slots, m.geometry))
                .collect(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    println!("Loading scene snapshot from {}...", cli.input.display());
    let text = fs::read_to_string(&cli.input)?;
    let snapshot: SceneSnapshot = serde_json::from_str(&text)?;
    let scene: SceneInput = snapshot.into();

    let document = build_document(&scene)?;

    let vertex_count: usize = document
        .objects
        .iter()
        .map(|obj| match obj {
            scene_exporter::ObjectRecord::Mesh { vertices, .. } => vertices.len(),
        })
        .sum();
    println!(
        "Extracted {} objects ({} vertices), {} lights",
        document.objects.len(),
        vertex_count,
        document.lights.len()
    );

    export::write_document(&document, &cli.output)?;
    println!("Scene exported to {}", cli.output.display());

    Ok(())
}
