use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use adler::adler32_slice;
use anyhow::{Result, anyhow, bail};
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use tracing::debug;


#[derive(Clone, Debug)]
pub struct SourceImage {
    pub source_path: PathBuf,
    pub format: ImageFormat,
    pub width: NonZeroU32,
    pub height: NonZeroU32,
    pub color: ColorType,
    pub checksum: u32,
}

/// Decode the image at `importable`, guessing the format from its content.
pub fn load_source<P>(importable: P) -> Result<(SourceImage, DynamicImage)>
where P: AsRef<Path> {
    let importable = importable.as_ref();

    if !importable.is_file() {
        bail!("Source image {:?} does not exist or is not a file", importable)
    }

    // Read source image from file
    let reader = ImageReader::open(importable)
        .map_err(|e| anyhow!("Unable to open source image {:?}: {}", importable, e))?
        .with_guessed_format()
        .map_err(|e| anyhow!("Unable to read source image {:?}: {}", importable, e))?;

    let format = match reader.format() {
        Some(f) => f,
        None => bail!("Unable to detect image format from file {:?}", importable),
    };

    let img = reader.decode()
        .map_err(|e| anyhow!("Unable to decode {:?} image {:?}: {}", format, importable, e))?;

    // Read image width and height into non-zero enum to avoid problems later on
    let width = match NonZeroU32::new(img.width()) {
        Some(w) => w,
        None => bail!("Source image {:?} has zero width", importable),
    };

    let height = match NonZeroU32::new(img.height()) {
        Some(h) => h,
        None => bail!("Source image {:?} has zero height", importable),
    };

    let checksum = adler32_slice(img.as_bytes());

    debug!(
        "Decoded {:?} image {:?} ({:?}) width: {} height: {} checksum: {}",
        format, importable, img.color(), width, height, checksum
    );

    let source = SourceImage {
        source_path: importable.to_owned(),
        format,
        width,
        height,
        color: img.color(),
        checksum,
    };

    Ok((source, img))
}

/// Normalize any color encoding into 8-bit RGB. Alpha is dropped, not composited.
pub fn to_working_rgb(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::Rgb8 => img,
        c => {
            debug!("Converting {:?} source image to RGB", c);
            DynamicImage::ImageRgb8(img.to_rgb8())
        }
    }
}
