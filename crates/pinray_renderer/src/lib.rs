//! pinray renderer - one primary ray per pixel.
//!
//! Each pixel's ray is tested against every scene triangle. The nearest hit
//! supplies the pixel's flat color; rays that miss everything fall through to
//! a checkerboard ground plane or a sky gradient.

mod background;
mod bucket;
mod camera;
mod hittable;
mod output;
mod renderer;
mod triangle;

pub use background::{background_color, ground_color, sky_color, GROUND_EVEN, GROUND_ODD, SKY_TINT};
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hittable::{Color, Hit, Hittable, HittableList};
pub use output::{save_image, write_ppm, OutputError};
pub use renderer::{ray_color, render, render_pixel, ImageBuffer, RenderConfig, RenderError};
pub use triangle::{GeometryError, Triangle, PARALLEL_EPSILON, SELF_HIT_EPSILON};

/// Re-export math types from pinray_math
pub use pinray_math::{Ray, Vec3};
