use wallstack::{ScreenRect, StackLayout, SplitError, WallpaperSplitter};

use image::codecs::png::PngEncoder;
use image::{ImageEncoder, RgbImage, RgbaImage};

fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ]);
    }
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}

/// Red RGBA image whose top-left quadrant is fully transparent.
fn quadrant_png(width: u32, height: u32) -> Vec<u8> {
    let mut img = RgbaImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let alpha = if x < width / 2 && y < height / 2 { 0 } else { 255 };
        *pixel = image::Rgba([200, 30, 30, alpha]);
    }
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .unwrap();
    buffer
}

fn dual_1080_layout() -> StackLayout {
    StackLayout::new(
        ScreenRect::new(1920, 1080).unwrap(),
        ScreenRect::new(1920, 515).unwrap(),
        100,
    )
}

#[test]
fn uhd_source_covers_footprint_without_upscaling() {
    // 3840x2160 against the 1920x1695 footprint: already covering, so the
    // scale stays at or below 1.0 and both crops come out exact.
    let input = gradient_png(3840, 2160);
    let result = WallpaperSplitter::new(input, dual_1080_layout())
        .unwrap()
        .split()
        .unwrap();

    assert!(result.scale <= 1.0 + 1e-9);
    assert_eq!((result.upper.width, result.upper.height), (1920, 1080));
    assert_eq!((result.lower.width, result.lower.height), (1920, 515));
}

#[test]
fn undersized_source_is_upscaled() {
    let input = gradient_png(960, 540);
    let result = WallpaperSplitter::new(input, dual_1080_layout())
        .unwrap()
        .split()
        .unwrap();

    assert!(result.scale > 1.0);
    assert_eq!((result.upper.width, result.upper.height), (1920, 1080));
    assert_eq!((result.lower.width, result.lower.height), (1920, 515));
}

#[test]
fn identical_inputs_produce_identical_outputs() {
    let input = gradient_png(2560, 1440);
    let layout = dual_1080_layout();

    let a = WallpaperSplitter::new(input.clone(), layout)
        .unwrap()
        .split()
        .unwrap();
    let b = WallpaperSplitter::new(input, layout)
        .unwrap()
        .split()
        .unwrap();

    assert_eq!(a.upper.data, b.upper.data);
    assert_eq!(a.lower.data, b.lower.data);
    assert_eq!(a.scale, b.scale);
}

#[test]
fn transparent_quadrant_renders_white() {
    // Source 2000x1800 with a transparent top-left quadrant, layout
    // 1000x500 over 1000x400 with gap 100 → footprint 1000x1000,
    // scale = 1000/1800, scaled ≈ 1111x1000, offset_x = 55.
    let layout = StackLayout::new(
        ScreenRect::new(1000, 500).unwrap(),
        ScreenRect::new(1000, 400).unwrap(),
        100,
    );
    let input = quadrant_png(2000, 1800);
    let result = WallpaperSplitter::new(input, layout)
        .unwrap()
        .split()
        .unwrap();

    let upper = image::load_from_memory(&result.upper.data)
        .unwrap()
        .to_rgb8();

    // Well inside the transparent quadrant: composited onto white.
    let white = upper.get_pixel(10, 10);
    assert!(
        white.0.iter().all(|&c| c > 235),
        "expected near-white, got {:?}",
        white
    );

    // Well inside the opaque region: still red.
    let red = upper.get_pixel(990, 10);
    assert!(
        red.0[0] > 150 && red.0[1] < 100 && red.0[2] < 100,
        "expected red, got {:?}",
        red
    );
}

#[test]
fn jpeg_input_is_accepted() {
    let rgb_png = gradient_png(2000, 1800);
    let decoded = image::load_from_memory(&rgb_png).unwrap().to_rgb8();

    let mut jpeg = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, 90)
        .write_image(
            decoded.as_raw(),
            decoded.width(),
            decoded.height(),
            image::ExtendedColorType::Rgb8,
        )
        .unwrap();

    let result = WallpaperSplitter::new(jpeg, dual_1080_layout())
        .unwrap()
        .split()
        .unwrap();
    assert_eq!((result.upper.width, result.upper.height), (1920, 1080));
}

#[test]
fn split_to_files_writes_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let upper_path = dir.path().join("wallpaper_upper.jpg");
    let lower_path = dir.path().join("wallpaper_lower.jpg");

    let input = gradient_png(3840, 2160);
    WallpaperSplitter::new(input, dual_1080_layout())
        .unwrap()
        .split_to_files(&upper_path, &lower_path)
        .unwrap();

    let upper = image::open(&upper_path).unwrap();
    let lower = image::open(&lower_path).unwrap();
    assert_eq!((upper.width(), upper.height()), (1920, 1080));
    assert_eq!((lower.width(), lower.height()), (1920, 515));
}

#[test]
fn failed_second_write_removes_first_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let upper_path = dir.path().join("wallpaper_upper.jpg");
    // Directory as the lower target forces the second write to fail.
    let lower_path = dir.path().join("not_a_file");
    std::fs::create_dir(&lower_path).unwrap();

    let input = gradient_png(3840, 2160);
    let result = WallpaperSplitter::new(input, dual_1080_layout())
        .unwrap()
        .split_to_files(&upper_path, &lower_path);

    assert!(matches!(result, Err(SplitError::WriteFailure { .. })));
    assert!(
        !upper_path.exists(),
        "upper artifact should not survive a failed pair"
    );
}

#[test]
fn garbage_input_is_rejected() {
    let result = WallpaperSplitter::new(vec![0u8; 64], dual_1080_layout());
    assert!(result.is_err());
}
