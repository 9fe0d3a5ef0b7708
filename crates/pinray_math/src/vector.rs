//! Checked vector helpers on top of glam's `Vec3`.
//!
//! glam's own `normalize` yields NaN/Inf for a zero vector. Everything in
//! pinray that normalizes goes through [`checked_normalize`] instead, so a
//! degenerate direction is reported where it happens.

use crate::Vec3;
use thiserror::Error;

/// Errors produced by vector operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize zero-length vector ({x}, {y}, {z})")]
    ZeroLength { x: f32, y: f32, z: f32 },
}

/// Scale `v` to unit length.
///
/// Fails with [`MathError::ZeroLength`] when the length is zero or not finite.
pub fn checked_normalize(v: Vec3) -> Result<Vec3, MathError> {
    let length = v.length();
    if length == 0.0 || !length.is_finite() {
        return Err(MathError::ZeroLength {
            x: v.x,
            y: v.y,
            z: v.z,
        });
    }
    Ok(v * (1.0 / length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vec3() -> impl Strategy<Value = Vec3> {
        (-1e3f32..1e3f32, -1e3f32..1e3f32, -1e3f32..1e3f32)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    fn approx_eq(a: Vec3, b: Vec3, tolerance: f32) -> bool {
        (a - b).abs().max_element() <= tolerance
    }

    #[test]
    fn test_normalize_unit_axis() {
        let n = checked_normalize(Vec3::new(0.0, 0.0, 5.0)).unwrap();
        assert_eq!(n, Vec3::Z);
    }

    #[test]
    fn test_normalize_zero_fails() {
        let err = checked_normalize(Vec3::ZERO).unwrap_err();
        assert_eq!(
            err,
            MathError::ZeroLength {
                x: 0.0,
                y: 0.0,
                z: 0.0
            }
        );
    }

    #[test]
    fn test_normalize_non_finite_fails() {
        assert!(checked_normalize(Vec3::new(f32::NAN, 1.0, 0.0)).is_err());
        assert!(checked_normalize(Vec3::new(f32::INFINITY, 0.0, 0.0)).is_err());
    }

    proptest! {
        #[test]
        fn prop_addition_commutes(a in vec3(), b in vec3()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn prop_addition_associates(a in vec3(), b in vec3(), c in vec3()) {
            prop_assert!(approx_eq((a + b) + c, a + (b + c), 1e-3));
        }

        #[test]
        fn prop_self_dot_is_length_squared(a in vec3()) {
            let length = a.length();
            let tolerance = 1e-4 * (1.0 + a.dot(a));
            prop_assert!((a.dot(a) - length * length).abs() <= tolerance);
        }

        #[test]
        fn prop_normalize_has_unit_length(a in vec3()) {
            prop_assume!(a.length() > 1e-3);
            let n = checked_normalize(a).unwrap();
            prop_assert!((n.length() - 1.0).abs() < 1e-5);
        }

        #[test]
        fn prop_cross_anticommutes(a in vec3(), b in vec3()) {
            prop_assert_eq!(a.cross(b), -(b.cross(a)));
        }
    }
}
