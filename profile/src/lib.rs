//! Circular profile thumbnails.
//!
//! A source photo is cropped to its centered square, resampled to 400x400 with
//! Lanczos3, masked with an inscribed circle, flattened onto white and written as
//! `profile.jpg` into the output dir.
//!
//! ```no_run
//! if profile::setup_profile_image("me.png", "site/img") {
//!     println!("done");
//! }
//! ```

pub mod actions;
pub mod resize;
pub mod source;
pub mod transform;

use std::path::Path;

pub use actions::{process, render_profile, ProfileOutcome};


/// Side of the square output image in pixels.
pub const PROFILE_SIZE: u32 = 400;
/// JPEG encoder quality of the written profile image.
pub const JPEG_QUALITY: u8 = 95;
/// File name written into the output dir, replaced on every run.
pub const PROFILE_FILE_NAME: &str = "profile.jpg";

/// Create `<output_dir>/profile.jpg` from `image_path`. Returns `false` on any
/// failure after printing the reason.
pub fn setup_profile_image<P, Q>(image_path: P, output_dir: Q) -> bool
where P: AsRef<Path>, Q: AsRef<Path> {
    process(image_path, output_dir).success
}
