//! pinray core - scene description for the pinray ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `SceneTriangle`, `CameraSettings`
//! - **JSON loading**: `load_scene` / `Scene::from_json_str`
//!
//! # Example
//!
//! ```ignore
//! use pinray_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} triangles", scene.triangle_count());
//! ```

pub mod scene;

// Re-export commonly used types
pub use scene::{load_scene, CameraSettings, Scene, SceneError, SceneResult, SceneTriangle};
