use std::any::Any;
use std::fs;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use anyhow::{Result, anyhow, bail};
use tracing::{debug, error, info};

use crate::resize::jpeg::jpeg_writer;
use crate::resize::resize_square;
use crate::source::{load_source, to_working_rgb};
use crate::transform::{apply_mask, circle_mask, flatten_onto, SquareCrop, WHITE};
use crate::{JPEG_QUALITY, PROFILE_FILE_NAME, PROFILE_SIZE};


/// Result of a single profile image run. Failures of any kind end up here as a
/// message, nothing is propagated past [`process`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileOutcome {
    pub success: bool,
    pub message: Option<String>,
    pub output: Option<PathBuf>,
}

impl ProfileOutcome {
    fn created(output: PathBuf) -> Self {
        Self { success: true, message: None, output: Some(output) }
    }
    fn failed(message: String) -> Self {
        Self { success: false, message: Some(message), output: None }
    }
}

pub fn render_profile(image_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    // Output dir is never created on the fly
    if !output_dir.is_dir() {
        bail!("Output dir {:?} does not exist or is not a directory", output_dir)
    }

    let (source, img) = load_source(image_path)?;
    let img = to_working_rgb(img);

    let crop = SquareCrop::centered(source.width.get(), source.height.get());

    debug!(
        "Square crop for {:?}: left {} top {} right {} bottom {}",
        source.source_path, crop.left, crop.top, crop.right(), crop.bottom()
    );

    let square = resize_square(&img, &crop, PROFILE_SIZE)?;
    drop(img);

    let mask = circle_mask(PROFILE_SIZE)?;
    let composite = apply_mask(&square, &mask)?;
    let profile = flatten_onto(&composite, WHITE);

    let buf = jpeg_writer(&profile, JPEG_QUALITY)?;
    let output_path = output_dir.join(PROFILE_FILE_NAME);

    fs::write(&output_path, &buf).map_err(|e|
        anyhow!("Failed to write profile image {}: {}", output_path.display(), e)
    )?;

    info!(
        "Wrote {} bytes to {} from {:?} {:?} source (checksum {})",
        buf.len(), output_path.display(), source.format, source.color, source.checksum
    );

    Ok(output_path)
}

/// Run the whole pipeline and report on stdout. Errors and panics from the
/// imaging stack are both folded into a failed [`ProfileOutcome`].
pub fn process<P, Q>(image_path: P, output_dir: Q) -> ProfileOutcome
where P: AsRef<Path>, Q: AsRef<Path> {
    let image_path = image_path.as_ref();
    let output_dir = output_dir.as_ref();

    info!("Creating profile image from {:?} into {:?}", image_path, output_dir);

    let result = catch_unwind(AssertUnwindSafe(|| render_profile(image_path, output_dir)))
        .unwrap_or_else(|panic| Err(anyhow!("Image processing panicked: {}", panic_message(&*panic))));

    match result {
        Ok(output) => {
            println!("✅ Profile image successfully created: {}", output.display());
            println!("Image size: {}x{} pixels", PROFILE_SIZE, PROFILE_SIZE);

            ProfileOutcome::created(output)
        },
        Err(e) => {
            println!("❌ Error processing image: {}", e);
            error!("Profile image from {:?} failed: {}", image_path, e);

            ProfileOutcome::failed(e.to_string())
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    match panic.downcast_ref::<&str>() {
        Some(s) => s.to_string(),
        None => match panic.downcast_ref::<String>() {
            Some(s) => s.to_owned(),
            None => "unknown panic".to_string(),
        },
    }
}
