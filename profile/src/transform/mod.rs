mod round;
mod square;

use anyhow::{Result, bail};
use image::{imageops, DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

pub use round::*;
pub use square::*;


pub const TRANSPARENT: Rgba<u8> = Rgba::<u8>([0, 0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb::<u8>([255, 255, 255]);
pub const MASK_OPAQUE: Luma<u8> = Luma::<u8>([255]);
pub const MASK_CLEAR: Luma<u8> = Luma::<u8>([0]);

/// Paste `buf` onto a transparent canvas, using `mask` as per pixel visibility.
pub fn apply_mask(buf: &RgbImage, mask: &GrayImage) -> Result<RgbaImage> {
    if buf.dimensions() != mask.dimensions() {
        bail!(
            "Mask {:?} does not match image dimensions {:?}",
            mask.dimensions(), buf.dimensions()
        )
    }

    let (w, h) = buf.dimensions();
    let mut img = RgbaImage::from_pixel(w, h, TRANSPARENT);

    for (x, y, p) in img.enumerate_pixels_mut() {
        let alpha = mask.get_pixel(x, y).0[0];

        if alpha == 0 {
            continue
        }

        let Rgb([r, g, b]) = *buf.get_pixel(x, y);
        p.0 = [r, g, b, alpha];
    }

    Ok(img)
}

/// Paint `composite` over a solid `background` using its alpha channel as blend weight.
pub fn flatten_onto(composite: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    let (w, h) = composite.dimensions();
    let Rgb([r, g, b]) = background;
    let mut canvas = RgbaImage::from_pixel(w, h, Rgba([r, g, b, 255]));

    imageops::overlay(&mut canvas, composite, 0, 0);

    DynamicImage::ImageRgba8(canvas).to_rgb8()
}
