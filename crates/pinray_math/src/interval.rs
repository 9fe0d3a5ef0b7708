use crate::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Valid range of an 8-bit color channel, in 0-255 units.
    pub const COLOR: Interval = Interval {
        min: 0.0,
        max: 255.0,
    };

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Clamps every component of `v`.
    pub fn clamp_vec3(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.clamp(v.x), self.clamp(v.y), self.clamp(v.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_clamp() {
        let interval = Interval {
            min: 0.0,
            max: 10.0,
        };

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(0.0), 0.0);
        assert_eq!(interval.clamp(5.0), 5.0);
        assert_eq!(interval.clamp(10.0), 10.0);
        assert_eq!(interval.clamp(15.0), 10.0);
    }

    #[test]
    fn test_color_clamp_vec3() {
        let clamped = Interval::COLOR.clamp_vec3(Vec3::new(-20.0, 128.5, 400.0));
        assert_eq!(clamped, Vec3::new(0.0, 128.5, 255.0));
    }
}
