pub mod jpeg;

use anyhow::{Result, anyhow, bail};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{ColorType, DynamicImage, RgbImage};
use tracing::debug;

use crate::transform::SquareCrop;


/// Cut `crop` out of an RGB image and resample it into a `size` x `size` square
/// with a Lanczos3 convolution. The crop box is snapped to whole pixels first.
pub fn resize_square(img: &DynamicImage, crop: &SquareCrop, size: u32) -> Result<RgbImage> {
    if img.color() != ColorType::Rgb8 {
        bail!("Resizer expects an RGB source image, got {:?}", img.color())
    }

    let (left, top, right, bottom) = crop.pixel_bounds();

    let options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        .crop(left as f64, top as f64, (right - left) as f64, (bottom - top) as f64);

    let mut resized = Image::new(size, size, PixelType::U8x3);
    let mut resizer = Resizer::new();

    debug!(
        "Resizing {}x{} source cropped to {:?} into {}x{}...",
        img.width(), img.height(), crop, size, size
    );

    resizer.resize(img, &mut resized, &options)
        .map_err(|e| anyhow!("Failed to resize square crop: {}", e))?;

    RgbImage::from_raw(size, size, resized.buffer().to_vec())
        .ok_or_else(|| anyhow!("Resized buffer does not fit a {}x{} RGB image", size, size))
}
