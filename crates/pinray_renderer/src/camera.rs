//! Pinhole camera for primary ray generation.

use pinray_core::CameraSettings;
use pinray_math::{checked_normalize, MathError, Ray, Vec3};

/// Camera generating one ray per pixel from a single eye point.
///
/// `right` and `up` are scaled to one pixel step. Pixel offsets are taken
/// from the pixel center, symmetric about the optical axis.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    origin: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    /// Create a camera with the default settings.
    pub fn new() -> Self {
        Self::from_settings(&CameraSettings::default())
    }

    /// Create a camera from scene settings.
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self {
            image_width: settings.width,
            image_height: settings.height,
            origin: settings.origin,
            forward: settings.forward,
            right: settings.right,
            up: settings.up,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the eye position.
    pub fn with_position(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Set the viewing direction and the per-pixel right/up steps.
    pub fn with_basis(mut self, forward: Vec3, right: Vec3, up: Vec3) -> Self {
        self.forward = forward;
        self.right = right;
        self.up = up;
        self
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Offset of pixel (i, j) from the image center, in pixel steps.
    ///
    /// `i` grows to the right, `j` grows downward from the top row.
    pub fn pixel_offset(&self, i: u32, j: u32) -> (f32, f32) {
        let half_w = (self.image_width as f32 - 1.0) / 2.0;
        let half_h = (self.image_height as f32 - 1.0) / 2.0;
        (i as f32 - half_w, half_h - j as f32)
    }

    /// Generate the primary ray for pixel (i, j).
    ///
    /// Fails if the basis vectors combine to a zero direction.
    pub fn get_ray(&self, i: u32, j: u32) -> Result<Ray, MathError> {
        let (dx, dy) = self.pixel_offset(i, j);
        let direction = checked_normalize(self.right * dx + self.up * dy + self.forward)?;
        Ok(Ray::new(self.origin, direction))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_offsets_are_symmetric() {
        let camera = Camera::new().with_resolution(512, 512);

        assert_eq!(camera.pixel_offset(0, 0), (-255.5, 255.5));
        assert_eq!(camera.pixel_offset(511, 511), (255.5, -255.5));
        assert_eq!(camera.pixel_offset(255, 256), (-0.5, -0.5));
    }

    #[test]
    fn test_odd_resolution_has_exact_center() {
        let camera = Camera::new().with_resolution(5, 3);
        assert_eq!(camera.pixel_offset(2, 1), (0.0, 0.0));

        let ray = camera.get_ray(2, 1).unwrap();
        assert_eq!(ray.direction(), Vec3::Z);
        assert_eq!(ray.origin(), Vec3::new(0.0, 1.0, -4.0));
    }

    #[test]
    fn test_ray_directions_are_normalized() {
        let camera = Camera::new();
        for (i, j) in [(0, 0), (511, 0), (0, 511), (300, 100)] {
            let ray = camera.get_ray(i, j).unwrap();
            assert!((ray.direction().length() - 1.0).abs() < 1e-5);
            assert!(ray.direction().z > 0.0);
        }
    }

    #[test]
    fn test_top_left_points_up_and_left() {
        let camera = Camera::new();
        let ray = camera.get_ray(0, 0).unwrap();
        assert!(ray.direction().x < 0.0);
        assert!(ray.direction().y > 0.0);
    }

    #[test]
    fn test_from_settings() {
        let settings = CameraSettings {
            width: 8,
            height: 4,
            origin: Vec3::new(1.0, 2.0, 3.0),
            ..CameraSettings::default()
        };
        let camera = Camera::from_settings(&settings);
        assert_eq!(camera.image_width, 8);
        assert_eq!(camera.image_height, 4);
        assert_eq!(camera.origin(), settings.origin);
    }

    #[test]
    fn test_zero_direction_fails() {
        let camera = Camera::new()
            .with_resolution(1, 1)
            .with_basis(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!(camera.get_ray(0, 0).is_err());
    }
}
