//! Center-crop planning.
//!
//! Approximates the face region of a selfie by taking a centered square
//! covering 60% of the shorter side.

use image::DynamicImage;

/// Both sides must exceed this before a crop is attempted.
const MIN_SIDE_FOR_CROP: u32 = 100;
/// Fraction of the shorter side kept by the crop.
const CROP_FRACTION: f64 = 0.6;
/// The crop square must exceed this size to be used.
const MIN_CROP_SIZE: u32 = 50;

/// A square region inside an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    /// Left edge in pixels.
    pub left: u32,
    /// Top edge in pixels.
    pub top: u32,
    /// Side length in pixels.
    pub size: u32,
}

/// Which region of the photo the statistics are computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropPlan {
    /// Use the centered square.
    Center(CropRegion),
    /// Use the whole image because it is too small to crop.
    TooSmall,
    /// Use the whole image because the computed region was unusable.
    Degenerate,
}

impl CropPlan {
    /// Plans the crop for an image of the given size.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap
    )]
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        if width <= MIN_SIDE_FOR_CROP || height <= MIN_SIDE_FOR_CROP {
            return Self::TooSmall;
        }

        // Safe: the product is non-negative and below u32::MAX
        let size = (f64::from(width.min(height)) * CROP_FRACTION).floor() as u32;
        let left = (i64::from(width) - i64::from(size)).div_euclid(2);
        let top = (i64::from(height) - i64::from(size)).div_euclid(2);

        if size > MIN_CROP_SIZE && left >= 0 && top >= 0 {
            Self::Center(CropRegion {
                left: left as u32,
                top: top as u32,
                size,
            })
        } else {
            Self::Degenerate
        }
    }

    /// Returns the crop region, if one is used.
    #[must_use]
    pub const fn region(&self) -> Option<CropRegion> {
        match self {
            Self::Center(region) => Some(*region),
            Self::TooSmall | Self::Degenerate => None,
        }
    }

    /// Produces the working image for this plan.
    #[must_use]
    pub fn apply(&self, image: &DynamicImage) -> DynamicImage {
        match self {
            Self::Center(r) => image.crop_imm(r.left, r.top, r.size, r.size),
            Self::TooSmall | Self::Degenerate => image.clone(),
        }
    }
}
