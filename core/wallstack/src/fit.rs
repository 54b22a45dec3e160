use crate::error::SplitError;

/// Target output size for one monitor, fixed by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    /// Width in pixels, always positive.
    pub width: u32,
    /// Height in pixels, always positive.
    pub height: u32,
}

impl ScreenRect {
    /// Create a screen rectangle. Both dimensions must be positive.
    pub fn new(width: u32, height: u32) -> Result<Self, SplitError> {
        if width == 0 || height == 0 {
            return Err(SplitError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Two vertically stacked monitors separated by a bezel gap in pixels.
///
/// The gap represents physical separation between the screens, so the
/// image content "behind" it is discarded rather than shown twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackLayout {
    /// The upper monitor.
    pub upper: ScreenRect,
    /// The lower monitor.
    pub lower: ScreenRect,
    /// Vertical bezel gap between the two, in pixels. May be zero.
    pub gap: u32,
}

impl StackLayout {
    /// Assemble a layout from two validated rectangles and a gap.
    pub fn new(upper: ScreenRect, lower: ScreenRect, gap: u32) -> Self {
        Self { upper, lower, gap }
    }

    /// Width of the combined footprint both crops are taken from.
    pub fn required_width(&self) -> u32 {
        self.upper.width.max(self.lower.width)
    }

    /// Height of the combined footprint, including the bezel gap.
    pub fn required_height(&self) -> u32 {
        self.upper.height + self.gap + self.lower.height
    }
}

/// Crop region within the scaled image: (left, top, right, bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    /// Left edge, inclusive.
    pub left: u32,
    /// Top edge, inclusive.
    pub top: u32,
    /// Right edge, exclusive.
    pub right: u32,
    /// Bottom edge, exclusive.
    pub bottom: u32,
}

impl CropRegion {
    /// Width of the region in pixels.
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the region in pixels.
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Uniform scale and crop placement for one source image.
///
/// Computed once per image and never reused — the next image may have a
/// different aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitPlan {
    /// Uniform scale factor applied to the source (cover-fit).
    pub scale: f64,
    /// Source width after scaling.
    pub scaled_width: u32,
    /// Source height after scaling.
    pub scaled_height: u32,
    /// Crop for the upper monitor.
    pub upper: CropRegion,
    /// Crop for the lower monitor. Shares `left` with the upper crop so the
    /// two stay horizontally aligned when mounted as a stack; its `top` is
    /// shifted down by the upper height plus the gap.
    pub lower: CropRegion,
}

impl FitPlan {
    /// Resampling is skipped only on an exact 1.0 match, to avoid needless
    /// quality loss when the source already fits.
    pub fn needs_resample(&self) -> bool {
        self.scale != 1.0
    }
}

/// Compute the cover-fit plan for a source image against a stack layout.
///
/// The scale is the smallest uniform factor that makes the scaled source at
/// least as large as the combined footprint in both axes. The footprint is
/// then centered within the scaled image and both crops are placed inside it.
pub fn plan_fit(
    source_width: u32,
    source_height: u32,
    layout: &StackLayout,
) -> Result<FitPlan, SplitError> {
    if source_width == 0 || source_height == 0 {
        return Err(SplitError::InvalidDimension {
            width: source_width,
            height: source_height,
        });
    }

    let required_width = layout.required_width();
    let required_height = layout.required_height();

    let sx = required_width as f64 / source_width as f64;
    let sy = required_height as f64 / source_height as f64;
    // The larger factor guarantees coverage in both axes — never letterbox.
    let scale = sx.max(sy);

    let scaled_width = (source_width as f64 * scale).round() as u32;
    let scaled_height = (source_height as f64 * scale).round() as u32;

    // Center the footprint. Floor division keeps this deterministic.
    let offset_x = scaled_width.saturating_sub(required_width) / 2;
    let offset_y = scaled_height.saturating_sub(required_height) / 2;

    let upper = CropRegion {
        left: offset_x,
        top: offset_y,
        right: offset_x + layout.upper.width,
        bottom: offset_y + layout.upper.height,
    };

    let lower_top = offset_y + layout.upper.height + layout.gap;
    let lower = CropRegion {
        left: offset_x,
        top: lower_top,
        right: offset_x + layout.lower.width,
        bottom: lower_top + layout.lower.height,
    };

    verify_bounds(upper, scaled_width, scaled_height)?;
    verify_bounds(lower, scaled_width, scaled_height)?;

    Ok(FitPlan {
        scale,
        scaled_width,
        scaled_height,
        upper,
        lower,
    })
}

/// Reject a crop that would reach outside the scaled image.
///
/// The scale factor already guarantees coverage of the combined footprint,
/// so this should never fire; verify rather than assume.
fn verify_bounds(region: CropRegion, width: u32, height: u32) -> Result<(), SplitError> {
    if region.right > width || region.bottom > height {
        return Err(SplitError::CropOutOfBounds {
            region,
            width,
            height,
        });
    }
    Ok(())
}
