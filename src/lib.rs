//! # Scene Exporter
//!
//! A Rust library for exporting 3D scenes to a flat JSON description
//! consumed by an external ray tracer.
//!
//! ## Overview
//!
//! Scenes are authored in a right-handed Z-up convention; the renderer
//! expects right-handed Y-up. This library applies that single axis
//! conversion consistently to camera, lights, and mesh geometry, flattens
//! hierarchical material-indexed meshes into parallel vertex/index/normal
//! arrays, resolves one diffuse color per object, and writes the whole scene
//! as one JSON document.
//!
//! ## Quick Start
//!
//! ```ignore
//! use scene_exporter::{export_scene, SceneInput};
//!
//! // Take a read-only snapshot of the host scene graph
//! let scene: SceneInput = snapshot_host_scene();
//!
//! // One-shot export: fails outright or writes the complete document
//! export_scene(&scene, "scene.json")?;
//! ```
//!
//! ## Host Integration
//!
//! Ingest the host's object list once into the [`types`] DTOs. Mesh geometry
//! comes through the [`GeometrySource`] trait so that modifier-evaluated
//! snapshots are produced per object and released as soon as that object is
//! extracted.

pub mod document;
pub mod error;
pub mod export;
pub mod extract;
pub mod types;

// Re-export main types for convenience
pub use document::{CameraRecord, LightRecord, MaterialSpec, ObjectRecord, SceneDocument, Vec3};
pub use error::{ExportError, Result};
pub use extract::build_document;
pub use types::{
    AxisTransform, CameraInput, Corner, EvaluatedGeometry, GeometrySource, LightInput, LightKind,
    MaterialInput, MeshInput, Polygon, SceneInput, WorldInput,
};

use std::path::Path;

/// Export a scene snapshot to a JSON file.
///
/// Builds the full document first, then writes it; a failure anywhere leaves
/// no output at `path`.
pub fn export_scene<P: AsRef<Path>>(scene: &SceneInput, path: P) -> Result<()> {
    let document = build_document(scene)?;
    export::write_document(&document, path)
}
