//! Per-pixel resolution loop.
//!
//! Every pixel gets exactly one primary ray. The ray takes the color of the
//! nearest object it hits, or the procedural background when it hits
//! nothing. Channels are clamped to [0, 255] before they are stored.

use std::time::Instant;

use crate::background::background_color;
use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, Color, Hittable};
use pinray_math::{Interval, MathError, Ray};
use rayon::prelude::*;
use thiserror::Error;

/// Errors that abort a render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("image must be at least 1x1 pixels, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("invalid camera ray: {0}")]
    Math(#[from] MathError),
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Edge length of the square tiles handed to worker threads
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Compute the clamped color seen by a ray.
pub fn ray_color(ray: &Ray, world: &dyn Hittable) -> Color {
    let color = match world.hit(ray) {
        Some(hit) => hit.color,
        None => background_color(ray),
    };
    Interval::COLOR.clamp_vec3(color)
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
) -> Result<Color, RenderError> {
    let ray = camera.get_ray(x, y)?;
    Ok(ray_color(&ray, world))
}

/// Row-major pixel grid, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a rendered bucket into its region of the image.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (row, chunk) in result
            .pixels
            .chunks(bucket.width as usize)
            .enumerate()
            .take(bucket.height as usize)
        {
            let start = self.index(bucket.x, bucket.y + row as u32);
            self.pixels[start..start + chunk.len()].copy_from_slice(chunk);
        }
    }

    /// Convert to 8-bit RGB bytes. Channels are truncated toward zero.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            let c = Interval::COLOR.clamp_vec3(*color);
            bytes.extend_from_slice(&[c.x as u8, c.y as u8, c.z as u8]);
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Buckets are rendered in parallel; the result is identical to visiting
/// every pixel in order.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> Result<ImageBuffer, RenderError> {
    let (width, height) = (camera.image_width, camera.image_height);
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyImage { width, height });
    }

    let buckets = generate_buckets(width, height, config.bucket_size);
    log::info!(
        "Rendering {}x{} in {} buckets of {}px",
        width,
        height,
        buckets.len(),
        config.bucket_size
    );

    let start = Instant::now();
    let results = buckets
        .par_iter()
        .map(|bucket| {
            render_bucket(bucket, camera, world).map(|pixels| BucketResult::new(*bucket, pixels))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered {} pixels in {:?}", image.pixels.len(), start.elapsed());
    Ok(image)
}
