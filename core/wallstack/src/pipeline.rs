use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageEncoder, ImageFormat, RgbImage, RgbaImage};

use crate::error::SplitError;
use crate::fit::{plan_fit, CropRegion, StackLayout};
use crate::{CropOutput, SplitWallpaper};

/// Decode input bytes into a `DynamicImage`.
pub(crate) fn decode_image(input: &[u8]) -> Result<DynamicImage, SplitError> {
    image::load_from_memory(input).map_err(|e| SplitError::DecodeFailure(e.to_string()))
}

/// Detect the input image format from the raw bytes.
pub(crate) fn detect_format(input: &[u8]) -> Result<ImageFormat, SplitError> {
    image::guess_format(input).map_err(|e| SplitError::DecodeFailure(e.to_string()))
}

/// Normalize any decoded image to plain RGB8.
///
/// Images with an alpha channel are composited onto an opaque white
/// background; everything else converts directly.
pub(crate) fn normalize_rgb(image: &DynamicImage) -> Result<RgbImage, SplitError> {
    match image {
        DynamicImage::ImageRgb8(rgb) => Ok(rgb.clone()),
        img if img.color().has_alpha() => Ok(flatten_alpha(img)),
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgb32F(_) => Ok(image.to_rgb8()),
        other => Err(SplitError::UnsupportedColorMode(format!(
            "{:?}",
            other.color()
        ))),
    }
}

/// Flatten alpha channel by compositing onto a white background.
pub(crate) fn flatten_alpha(image: &DynamicImage) -> RgbImage {
    let rgba: RgbaImage = image.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    let mut rgb = RgbImage::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as f32 / 255.0;
        let remainder = 1.0 - alpha;
        // Composite over white (255, 255, 255)
        let out_r = (r as f32 * alpha + 255.0 * remainder).round() as u8;
        let out_g = (g as f32 * alpha + 255.0 * remainder).round() as u8;
        let out_b = (b as f32 * alpha + 255.0 * remainder).round() as u8;
        rgb.put_pixel(x, y, image::Rgb([out_r, out_g, out_b]));
    }

    rgb
}

/// Resample the source to the plan's scaled dimensions with Lanczos3.
/// An exact 1.0 scale passes the buffer through untouched.
pub(crate) fn resample(
    rgb: RgbImage,
    scale: f64,
    scaled_width: u32,
    scaled_height: u32,
) -> RgbImage {
    if scale == 1.0 {
        return rgb;
    }
    image::imageops::resize(&rgb, scaled_width, scaled_height, FilterType::Lanczos3)
}

/// Extract one crop region as an independent image.
pub(crate) fn extract_crop(scaled: &RgbImage, region: &CropRegion) -> RgbImage {
    image::imageops::crop_imm(
        scaled,
        region.left,
        region.top,
        region.width(),
        region.height(),
    )
    .to_image()
}

/// Encode an RGB image as JPEG at the given quality (0.0–1.0).
pub(crate) fn encode_jpeg(image: &RgbImage, quality: f32) -> Result<Vec<u8>, SplitError> {
    let mut buffer = Vec::new();
    let quality_percent = (quality * 100.0).round() as u8;
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality_percent);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| SplitError::EncodeFailure(e.to_string()))?;
    Ok(buffer)
}

/// Full fitting pipeline: decode → plan → normalize → resample → crop → encode.
pub(crate) fn split_pipeline(
    input: &[u8],
    layout: &StackLayout,
    quality: f32,
) -> Result<SplitWallpaper, SplitError> {
    let decoded = decode_image(input)?;
    let plan = plan_fit(decoded.width(), decoded.height(), layout)?;

    let rgb = normalize_rgb(&decoded)?;
    drop(decoded);

    let scaled = resample(rgb, plan.scale, plan.scaled_width, plan.scaled_height);

    let upper = extract_crop(&scaled, &plan.upper);
    let lower = extract_crop(&scaled, &plan.lower);
    drop(scaled);

    let upper_data = encode_jpeg(&upper, quality)?;
    let lower_data = encode_jpeg(&lower, quality)?;

    Ok(SplitWallpaper {
        upper: CropOutput {
            data: upper_data,
            width: upper.width(),
            height: upper.height(),
        },
        lower: CropOutput {
            data: lower_data,
            width: lower.width(),
            height: lower.height(),
        },
        scale: plan.scale,
        original_size: input.len(),
    })
}
