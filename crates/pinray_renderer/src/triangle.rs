//! Triangle primitive for ray tracing.
//!
//! Intersection solves `O + t*D = P0 + alpha*u + beta*v` for
//! `(alpha, beta, t)` directly with Cramer's rule. Triangles are
//! single-sided: hits on the back face are culled.

use crate::hittable::{Color, Hit, Hittable};
use pinray_core::scene::DEFAULT_COLOR;
use pinray_math::{Ray, Vec3};
use thiserror::Error;

/// Hits closer than this are treated as the ray re-hitting its own surface.
pub const SELF_HIT_EPSILON: f32 = 1e-6;

/// Rays whose direction makes a cosine below this with the face normal are
/// treated as parallel to the plane.
pub const PARALLEL_EPSILON: f32 = 1e-8;

/// Errors for geometry that cannot be rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("degenerate triangle{} with zero area: {p0}, {p1}, {p2}", index_suffix(.index))]
    DegenerateTriangle {
        index: Option<usize>,
        p0: Vec3,
        p1: Vec3,
        p2: Vec3,
    },
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" #{}", i),
        None => String::new(),
    }
}

impl GeometryError {
    /// Attach the triangle's position in the scene.
    pub fn at_index(self, i: usize) -> Self {
        match self {
            GeometryError::DegenerateTriangle { p0, p1, p2, .. } => {
                GeometryError::DegenerateTriangle {
                    index: Some(i),
                    p0,
                    p1,
                    p2,
                }
            }
        }
    }
}

/// Determinant of the 3x3 matrix with columns `a`, `b`, `c`.
#[inline]
fn det3(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    a.dot(b.cross(c))
}

/// A flat-colored, single-sided triangle.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    /// Edges from p0, fixed at construction
    u: Vec3,
    v: Vec3,
    /// Face normal `v x u` (not normalized)
    normal: Vec3,
    color: Color,
}

impl Triangle {
    /// Create a white triangle from three vertices.
    ///
    /// Fails if the vertices are collinear or coincident.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Result<Self, GeometryError> {
        let u = p1 - p0;
        let v = p2 - p0;
        let normal = v.cross(u);

        let area2 = normal.length();
        if area2 == 0.0 || !area2.is_finite() {
            return Err(GeometryError::DegenerateTriangle {
                index: None,
                p0,
                p1,
                p2,
            });
        }

        Ok(Self {
            p0,
            p1,
            p2,
            u,
            v,
            normal,
            color: DEFAULT_COLOR,
        })
    }

    /// Set the flat color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Edge vectors `(p1 - p0, p2 - p0)`.
    pub fn edges(&self) -> (Vec3, Vec3) {
        (self.u, self.v)
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Solve for `(alpha, beta, t)`, or `None` when the ray is parallel to
    /// the triangle's plane.
    fn solve(&self, ray: &Ray) -> Option<(f32, f32, f32)> {
        // alpha*u + beta*v - t*D = O - P0
        let neg_dir = -ray.direction();
        let s = ray.origin() - self.p0;

        // det == D . normal, so compare against the scale of both vectors
        let det = det3(self.u, self.v, neg_dir);
        let scale = self.normal.length() * ray.direction().length();
        if det.abs() <= PARALLEL_EPSILON * scale {
            return None;
        }

        let inv_det = 1.0 / det;
        let alpha = det3(s, self.v, neg_dir) * inv_det;
        let beta = det3(self.u, s, neg_dir) * inv_det;
        let t = det3(self.u, self.v, s) * inv_det;

        if alpha.is_finite() && beta.is_finite() && t.is_finite() {
            Some((alpha, beta, t))
        } else {
            None
        }
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        // Back-face cull
        if self.normal.dot(-ray.direction()) < 0.0 {
            return None;
        }

        let (alpha, beta, t) = self.solve(ray)?;

        if alpha < 0.0 || beta < 0.0 || alpha + beta > 1.0 || t < 0.0 {
            return None;
        }

        // D is not assumed to be unit length
        let distance = (ray.direction() * t).length();
        if distance <= SELF_HIT_EPSILON {
            return None;
        }

        Some(Hit {
            distance,
            color: self.color,
        })
    }
}
