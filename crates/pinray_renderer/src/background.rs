//! Procedural background shading for rays that miss every object.
//!
//! Downward rays see a checkerboard ground plane at y = 0. Everything else,
//! horizontal rays included, sees a sky gradient.

use crate::hittable::Color;
use pinray_math::{Ray, Vec3};

/// Ground checker color for cells with even parity.
pub const GROUND_EVEN: Color = Vec3::new(255.0, 150.0, 150.0);
/// Ground checker color for cells with odd parity.
pub const GROUND_ODD: Color = Vec3::new(255.0, 200.0, 200.0);
/// Sky color at the horizon, fading to black straight up.
pub const SKY_TINT: Color = Vec3::new(150.0, 150.0, 255.0);

/// Color of the ground plane where the ray crosses y = 0.
///
/// Returns `None` unless the ray points downward; a horizontal ray never
/// reaches the plane.
pub fn ground_color(ray: &Ray) -> Option<Color> {
    let dir_y = ray.direction().y;
    if dir_y.is_nan() || dir_y >= 0.0 {
        return None;
    }

    let t = -ray.origin().y / dir_y;
    let p = ray.at(t);

    let cells = p.x.abs().floor() + p.z.abs().floor();
    if cells % 2.0 == 0.0 {
        Some(GROUND_EVEN)
    } else {
        Some(GROUND_ODD)
    }
}

/// Sky gradient: `SKY_TINT * (1 - dir.y)^2`.
pub fn sky_color(ray: &Ray) -> Color {
    SKY_TINT * (1.0 - ray.direction().y).powi(2)
}

/// Background for a ray that hit nothing.
pub fn background_color(ray: &Ray) -> Color {
    ground_color(ray).unwrap_or_else(|| sky_color(ray))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_from(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 1.0, z), -Vec3::Y)
    }

    #[test]
    fn test_ground_checker_parity() {
        // floor(0.5) + floor(0.5) = 0
        assert_eq!(ground_color(&down_from(0.5, 0.5)), Some(GROUND_EVEN));
        // floor(1.5) + floor(0.5) = 1
        assert_eq!(ground_color(&down_from(1.5, 0.5)), Some(GROUND_ODD));
        // floor(1.5) + floor(1.5) = 2
        assert_eq!(ground_color(&down_from(1.5, 1.5)), Some(GROUND_EVEN));
    }

    #[test]
    fn test_ground_uses_absolute_coordinates() {
        // floor(|-0.5|) + floor(|-1.5|) = 1
        assert_eq!(ground_color(&down_from(-0.5, -1.5)), Some(GROUND_ODD));
        // floor(|-2.5|) + floor(|0.5|) = 2
        assert_eq!(ground_color(&down_from(-2.5, 0.5)), Some(GROUND_EVEN));
    }

    #[test]
    fn test_ground_follows_slanted_ray() {
        // Crosses y = 0 at (1.5, 0, 0.5)
        let ray = Ray::new(Vec3::new(0.5, 1.0, 0.5), Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(ground_color(&ray), Some(GROUND_ODD));
    }

    #[test]
    fn test_no_ground_for_level_or_rising_rays() {
        let origin = Vec3::new(0.0, 1.0, -4.0);
        assert_eq!(ground_color(&Ray::new(origin, Vec3::Z)), None);
        assert_eq!(ground_color(&Ray::new(origin, Vec3::Y)), None);
    }

    #[test]
    fn test_sky_gradient() {
        let origin = Vec3::new(0.0, 1.0, -4.0);

        // Horizon is the full tint
        assert_eq!(sky_color(&Ray::new(origin, Vec3::Z)), SKY_TINT);
        // Straight up fades out completely
        assert_eq!(sky_color(&Ray::new(origin, Vec3::Y)), Vec3::ZERO);

        let color = sky_color(&Ray::new(origin, Vec3::new(0.0, 0.6, 0.8)));
        let expected = Vec3::new(24.0, 24.0, 40.8);
        assert!((color - expected).length() < 1e-3);
    }

    #[test]
    fn test_background_selects_by_direction() {
        let origin = Vec3::new(0.5, 1.0, 0.5);
        assert_eq!(background_color(&Ray::new(origin, -Vec3::Y)), GROUND_EVEN);
        assert_eq!(background_color(&Ray::new(origin, Vec3::X)), SKY_TINT);
    }
}
