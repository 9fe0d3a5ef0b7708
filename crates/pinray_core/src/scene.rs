//! Scene description types for pinray.
//!
//! This module defines the renderer-agnostic input of a render: an ordered
//! list of colored triangles plus the pinhole camera settings. Scenes are
//! either built in code or deserialized from JSON.

use std::fs;
use std::path::Path;

use pinray_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Default object color (white, 0-255 units).
pub const DEFAULT_COLOR: Vec3 = Vec3::new(255.0, 255.0, 255.0);

fn default_color() -> Vec3 {
    DEFAULT_COLOR
}

/// A flat-colored triangle as described in the scene.
///
/// Vertex order matters: the renderer treats triangles as single-sided,
/// with the front face determined by `(p2 - p0) x (p1 - p0)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneTriangle {
    /// Vertex positions p0, p1, p2
    pub vertices: [Vec3; 3],

    /// Flat color (RGB, 0-255)
    #[serde(default = "default_color")]
    pub color: Vec3,
}

impl SceneTriangle {
    /// Create a white triangle.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        Self {
            vertices: [p0, p1, p2],
            color: DEFAULT_COLOR,
        }
    }

    /// Set the triangle's color.
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }
}

/// Fixed pinhole camera settings.
///
/// `right` and `up` are already scaled to one pixel step; a pixel's ray
/// direction is `right * dx + up * dy + forward` before normalization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Eye position
    pub origin: Vec3,
    /// Viewing direction through the image center
    pub forward: Vec3,
    /// Horizontal offset per pixel
    pub right: Vec3,
    /// Vertical offset per pixel
    pub up: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            origin: Vec3::new(0.0, 1.0, -4.0),
            forward: Vec3::new(0.0, 0.0, 1.0),
            right: Vec3::new(0.002, 0.0, 0.0),
            up: Vec3::new(0.0, 0.002, 0.0),
        }
    }
}

/// A complete render input: camera plus ordered triangles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub camera: CameraSettings,
    pub triangles: Vec<SceneTriangle>,
}

impl Scene {
    /// Create an empty scene with the default camera.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in two-triangle scene: a blue triangle in front of the
    /// camera and a smaller green one further back to the left.
    pub fn reference() -> Self {
        Self {
            camera: CameraSettings::default(),
            triangles: vec![
                SceneTriangle::new(
                    Vec3::new(-1.0, 0.0, 0.0),
                    Vec3::new(1.0, 0.0, 0.0),
                    Vec3::new(0.0, 1.73, 0.0),
                )
                .with_color(Vec3::new(0.0, 0.0, 255.0)),
                SceneTriangle::new(
                    Vec3::new(-3.0, 0.0, 10.0),
                    Vec3::new(-2.0, 0.0, 10.0),
                    Vec3::new(-1.0, 1.73, 10.0),
                )
                .with_color(Vec3::new(0.0, 255.0, 0.0)),
            ],
        }
    }

    /// Append a triangle.
    pub fn add_triangle(&mut self, triangle: SceneTriangle) {
        self.triangles.push(triangle);
    }

    /// Number of triangles in the scene.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Parse a scene from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Load a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let scene = Scene::from_json_str(&contents)?;

    log::info!(
        "Loaded scene {}: {} triangles, {}x{} image",
        path.display(),
        scene.triangle_count(),
        scene.camera.width,
        scene.camera.height
    );

    Ok(scene)
}
