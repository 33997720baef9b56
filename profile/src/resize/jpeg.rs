use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use anyhow::{Result, anyhow};


pub fn jpeg_writer(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut buf = vec![];

    JpegEncoder::new_with_quality(&mut buf, quality).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    ).map_err(|e| anyhow!("Failed to create JPEG image: {}", e))
    .map(|_| buf)
}
