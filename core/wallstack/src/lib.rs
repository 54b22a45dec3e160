//! Split one photo across two vertically stacked monitors.
//!
//! Scales the source with a cover-fit policy (fill, never letterbox),
//! centers the combined screen footprint, and cuts two horizontally aligned
//! crops separated by the physical bezel gap.
//!
//! # Example
//!
//! ```no_run
//! use wallstack::{ScreenRect, StackLayout, WallpaperSplitter};
//!
//! let layout = StackLayout::new(
//!     ScreenRect::new(1920, 1080).unwrap(),
//!     ScreenRect::new(1920, 515).unwrap(),
//!     100,
//! );
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let result = WallpaperSplitter::new(bytes, layout)
//!     .unwrap()
//!     .split()
//!     .unwrap();
//! println!("upper: {}x{}", result.upper.width, result.upper.height);
//! ```
#![warn(missing_docs)]

mod error;
/// Cover-fit geometry: layouts, crop regions, and fit planning.
pub mod fit;
mod pipeline;

use std::path::Path;

/// Error type returned by wallstack operations.
pub use error::SplitError;
pub use fit::{plan_fit, CropRegion, FitPlan, ScreenRect, StackLayout};

/// Default JPEG quality on a 0.0–1.0 scale (→ quality 95).
const DEFAULT_QUALITY: f32 = 0.95;

/// One encoded crop, ready to hand to the wallpaper-setting tool.
#[derive(Debug, Clone)]
pub struct CropOutput {
    /// JPEG-encoded image bytes.
    pub data: Vec<u8>,

    /// Width of the crop in pixels — always equals the requested rectangle.
    pub width: u32,

    /// Height of the crop in pixels — always equals the requested rectangle.
    pub height: u32,
}

/// Result of a split operation: one crop per monitor.
#[derive(Debug, Clone)]
pub struct SplitWallpaper {
    /// Crop for the upper monitor.
    pub upper: CropOutput,

    /// Crop for the lower monitor.
    pub lower: CropOutput,

    /// The uniform scale factor that was applied to the source.
    pub scale: f64,

    /// Size of the original input in bytes.
    pub original_size: usize,
}

/// Builder for splitting a photo across a monitor stack.
///
/// Validates the input on construction, then runs decode → normalize →
/// resample → crop → encode with configurable quality.
pub struct WallpaperSplitter {
    input: Vec<u8>,
    layout: StackLayout,
    quality: f32,
}

impl WallpaperSplitter {
    /// Create a new splitter from raw image bytes (JPEG, PNG, or WebP) and
    /// a stack layout.
    pub fn new(input: Vec<u8>, layout: StackLayout) -> Result<Self, SplitError> {
        // Validate that the input can be decoded
        pipeline::detect_format(&input)?;

        Ok(Self {
            input,
            layout,
            quality: DEFAULT_QUALITY,
        })
    }

    /// Set the JPEG quality from 0.0 (lowest) to 1.0 (highest).
    /// Default: 0.95.
    pub fn quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    /// Run the fitting pipeline and return both encoded crops.
    pub fn split(self) -> Result<SplitWallpaper, SplitError> {
        self.run()
    }

    /// Run the fitting pipeline and persist the crops to two paths.
    ///
    /// Both crops are encoded before either file is written, and a failed
    /// second write removes the first file, so a failure never leaves a
    /// partial pair behind for the wallpaper tool to pick up.
    pub fn split_to_files(
        self,
        upper_path: &Path,
        lower_path: &Path,
    ) -> Result<SplitWallpaper, SplitError> {
        let result = self.run()?;

        write_crop(upper_path, &result.upper.data)?;
        if let Err(err) = write_crop(lower_path, &result.lower.data) {
            let _ = std::fs::remove_file(upper_path);
            return Err(err);
        }

        Ok(result)
    }

    fn run(self) -> Result<SplitWallpaper, SplitError> {
        if !(0.0..=1.0).contains(&self.quality) {
            return Err(SplitError::InvalidQuality(self.quality));
        }

        pipeline::split_pipeline(&self.input, &self.layout, self.quality)
    }
}

fn write_crop(path: &Path, data: &[u8]) -> Result<(), SplitError> {
    std::fs::write(path, data).map_err(|e| SplitError::WriteFailure {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
