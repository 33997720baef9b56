use std::fs;
use std::path::{Path, PathBuf};
use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};

use profile::{process, setup_profile_image, PROFILE_FILE_NAME, PROFILE_SIZE};


fn write_source(dir: &Path, name: &str, img: DynamicImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

fn read_profile(dir: &Path) -> RgbImage {
    let bytes = fs::read(dir.join(PROFILE_FILE_NAME)).unwrap();

    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);

    image::load_from_memory(&bytes).unwrap().to_rgb8()
}

fn assert_close(got: Rgb<u8>, want: [u8; 3], tolerance: u8) {
    for (g, w) in got.0.iter().zip(want) {
        assert!(g.abs_diff(w) <= tolerance, "got {:?}, want {:?}", got, want);
    }
}

#[test]
fn landscape_photo_becomes_400_square() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_source(
        dir.path(),
        "landscape.png",
        DynamicImage::ImageRgb8(RgbImage::from_pixel(1200, 800, Rgb([30, 110, 190]))),
    );

    assert!(setup_profile_image(&src, dir.path()));

    let out = read_profile(dir.path());
    assert_eq!(out.dimensions(), (PROFILE_SIZE, PROFILE_SIZE));
}

#[test]
fn corners_are_white_and_center_is_photo() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_source(
        dir.path(),
        "portrait.png",
        DynamicImage::ImageRgb8(RgbImage::from_pixel(600, 900, Rgb([200, 40, 40]))),
    );

    assert!(setup_profile_image(&src, dir.path()));

    let out = read_profile(dir.path());

    for (x, y) in [(0, 0), (399, 0), (0, 399), (399, 399)] {
        assert_close(*out.get_pixel(x, y), [255, 255, 255], 3);
    }

    assert_close(*out.get_pixel(200, 200), [200, 40, 40], 6);
}

#[test]
fn crop_keeps_the_center_of_the_long_axis() {
    let dir = tempfile::tempdir().unwrap();

    // Only the middle third is green, the margins cut off by the crop are not
    let img = RgbImage::from_fn(300, 100, |x, _| match x {
        0..=99 => Rgb([255, 0, 0]),
        100..=199 => Rgb([0, 255, 0]),
        _ => Rgb([0, 0, 255]),
    });
    let src = write_source(dir.path(), "strip.png", DynamicImage::ImageRgb8(img));

    assert!(setup_profile_image(&src, dir.path()));

    let out = read_profile(dir.path());

    for (x, y) in [(200, 200), (40, 200), (360, 200), (200, 40), (200, 360)] {
        assert_close(*out.get_pixel(x, y), [0, 255, 0], 8);
    }
}

#[test]
fn small_source_is_upsampled() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_source(
        dir.path(),
        "tiny.png",
        DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 150, Rgb([0, 0, 0]))),
    );

    let outcome = process(&src, dir.path());

    assert!(outcome.success);
    assert_eq!(outcome.message, None);
    assert_eq!(outcome.output, Some(dir.path().join(PROFILE_FILE_NAME)));
    assert_eq!(read_profile(dir.path()).dimensions(), (400, 400));
}

#[test]
fn other_color_encodings_are_accepted() {
    let dir = tempfile::tempdir().unwrap();

    let sources = [
        write_source(
            dir.path(),
            "alpha.png",
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(50, 80, Rgba([10, 200, 10, 0]))),
        ),
        write_source(
            dir.path(),
            "gray.png",
            DynamicImage::ImageLuma8(GrayImage::from_pixel(80, 50, Luma([128]))),
        ),
        write_source(
            dir.path(),
            "photo.jpg",
            DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 64, Rgb([1, 2, 3]))),
        ),
        write_source(
            dir.path(),
            "bitmap.bmp",
            DynamicImage::ImageRgb8(RgbImage::from_pixel(33, 47, Rgb([9, 9, 9]))),
        ),
    ];

    for src in sources {
        let out_dir = tempfile::tempdir().unwrap();

        assert!(setup_profile_image(&src, out_dir.path()), "{:?}", src);
        assert_eq!(read_profile(out_dir.path()).dimensions(), (400, 400));
    }
}

#[test]
fn alpha_is_dropped_not_composited() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_source(
        dir.path(),
        "ghost.png",
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(120, 120, Rgba([10, 200, 10, 0]))),
    );

    assert!(setup_profile_image(&src, dir.path()));

    assert_close(*read_profile(dir.path()).get_pixel(200, 200), [10, 200, 10], 8);
}

#[test]
fn second_run_overwrites_with_same_content() {
    let dir = tempfile::tempdir().unwrap();
    let img = RgbImage::from_fn(257, 199, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
    let src = write_source(dir.path(), "pattern.png", DynamicImage::ImageRgb8(img));
    let target = dir.path().join(PROFILE_FILE_NAME);

    fs::write(&target, b"stale").unwrap();

    assert!(setup_profile_image(&src, dir.path()));
    let first = fs::read(&target).unwrap();

    assert!(setup_profile_image(&src, dir.path()));
    let second = fs::read(&target).unwrap();

    assert_ne!(first, b"stale");
    assert_eq!(first, second);
}

#[test]
fn missing_source_reports_failure() {
    let dir = tempfile::tempdir().unwrap();

    assert!(!setup_profile_image(dir.path().join("missing.jpg"), dir.path()));
    assert!(!dir.path().join(PROFILE_FILE_NAME).exists());
}

#[test]
fn missing_output_dir_is_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_source(
        dir.path(),
        "me.png",
        DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]))),
    );
    let out_dir = dir.path().join("does").join("not").join("exist");

    let outcome = process(&src, &out_dir);

    assert!(!outcome.success);
    assert!(outcome.message.is_some());
    assert!(!out_dir.exists());
}

#[test]
fn directory_or_garbage_source_fails() {
    let dir = tempfile::tempdir().unwrap();
    let garbage = dir.path().join("notes.png");
    fs::write(&garbage, b"definitely not a png").unwrap();

    let empty = dir.path().join("empty.jpg");
    fs::write(&empty, b"").unwrap();

    assert!(!setup_profile_image(dir.path(), dir.path()));
    assert!(!setup_profile_image(&garbage, dir.path()));
    assert!(!setup_profile_image(&empty, dir.path()));
}
