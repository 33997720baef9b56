use anyhow::{Result, anyhow};
use image::GrayImage;
use imageproc::drawing::draw_filled_ellipse_mut;

use super::*;


/// Single channel mask with an opaque ellipse inscribed in a `size` x `size` square.
pub fn circle_mask(size: u32) -> Result<GrayImage> {
    let div2: i32 = (size / 2).try_into()
        .map_err(|e| anyhow!("Mask size {} is out of range: {}", size, e))?;

    let mut mask = GrayImage::from_pixel(size, size, MASK_CLEAR);

    // Ellipse touches the midpoint of every edge, corners stay clear
    draw_filled_ellipse_mut(
        &mut mask,
        (div2, div2),
        div2,
        div2,
        MASK_OPAQUE
    );

    Ok(mask)
}
