//! Hittable trait and the scene object list.

use crate::triangle::{GeometryError, Triangle};
use pinray_core::Scene;
use pinray_math::{Ray, Vec3};

/// RGB color in 0-255 units (unclamped until the pixel is emitted).
pub type Color = Vec3;

/// Record of an accepted ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance from the ray origin to the intersection point
    pub distance: f32,
    /// Color reported by the object that was hit
    pub color: Color,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object.
    ///
    /// Returns the hit distance and the object's color, or `None` on a miss.
    fn hit(&self, ray: &Ray) -> Option<Hit>;
}

/// An ordered list of hittable objects. This is the render-time scene.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Build the render-time objects from a scene description.
    ///
    /// Fails on the first degenerate triangle.
    pub fn from_scene(scene: &Scene) -> Result<Self, GeometryError> {
        let mut list = Self::new();
        for (index, desc) in scene.triangles.iter().enumerate() {
            let [p0, p1, p2] = desc.vertices;
            let triangle = Triangle::new(p0, p1, p2)
                .map_err(|e| e.at_index(index))?
                .with_color(desc.color);
            list.add(Box::new(triangle));
        }

        log::debug!("Built {} scene objects", list.len());
        Ok(list)
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    /// Nearest-hit search over every object.
    ///
    /// A later hit replaces the current one only if strictly closer, so the
    /// first object seen wins an exact tie.
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let mut closest: Option<Hit> = None;

        for object in &self.objects {
            if let Some(hit) = object.hit(ray) {
                match closest {
                    Some(best) if hit.distance >= best.distance => {}
                    _ => closest = Some(hit),
                }
            }
        }

        closest
    }
}
