//! Synthetic image builders for testing.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};

/// Builder for creating encoded synthetic photos.
///
/// Every constructor returns PNG bytes unless noted, ready to hand to the
/// estimator or write to disk.
pub struct SyntheticImageBuilder;

impl SyntheticImageBuilder {
    // === Flat Images ===

    /// Creates a single-color RGB image.
    #[must_use]
    pub fn uniform_rgb(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        Self::png(&Self::uniform_rgb_image(width, height, rgb))
    }

    /// Creates a single-color RGB image, unencoded.
    #[must_use]
    pub fn uniform_rgb_image(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |_, _| Rgb(rgb)))
    }

    /// Creates a single-value grayscale image (one channel).
    #[must_use]
    pub fn grayscale(width: u32, height: u32, value: u8) -> Vec<u8> {
        let img = GrayImage::from_fn(width, height, |_, _| Luma([value]));
        Self::png(&DynamicImage::ImageLuma8(img))
    }

    // === Textured Images ===

    /// Creates a one-pixel checkerboard alternating between two colors.
    #[must_use]
    pub fn checkerboard(width: u32, height: u32, a: [u8; 3], b: [u8; 3]) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb(a)
            } else {
                Rgb(b)
            }
        });
        Self::png(&DynamicImage::ImageRgb8(img))
    }

    /// Creates an image whose centered square (60% of the shorter side) is
    /// `inner` and everything else is `outer`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::suboptimal_flops
    )]
    pub fn centered_square(width: u32, height: u32, inner: [u8; 3], outer: [u8; 3]) -> Vec<u8> {
        let size = (f64::from(width.min(height)) * 0.6).floor() as u32;
        let left = (width - size) / 2;
        let top = (height - size) / 2;
        let img = RgbImage::from_fn(width, height, |x, y| {
            if (left..left + size).contains(&x) && (top..top + size).contains(&y) {
                Rgb(inner)
            } else {
                Rgb(outer)
            }
        });
        Self::png(&DynamicImage::ImageRgb8(img))
    }

    // === Broken Inputs ===

    /// Returns bytes that no decoder accepts.
    #[must_use]
    pub fn not_an_image() -> Vec<u8> {
        b"this is a diary note, not a photo".to_vec()
    }

    /// Returns a valid PNG cut off partway through its pixel data.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncated_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
        });
        let mut bytes = Self::png(&DynamicImage::ImageRgb8(img));
        bytes.truncate(bytes.len() / 3);
        bytes
    }

    // === Encoding ===

    /// Encodes an image as PNG.
    ///
    /// # Panics
    ///
    /// Panics if encoding fails, which does not happen for in-memory
    /// 8-bit images.
    #[must_use]
    pub fn png(image: &DynamicImage) -> Vec<u8> {
        Self::encode(image, ImageFormat::Png)
    }

    /// Encodes an image as JPEG.
    ///
    /// # Panics
    ///
    /// Panics if encoding fails.
    #[must_use]
    pub fn jpeg(image: &DynamicImage) -> Vec<u8> {
        Self::encode(image, ImageFormat::Jpeg)
    }

    #[allow(clippy::expect_used)]
    fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buf), format)
            .expect("in-memory encoding should succeed");
        buf
    }
}
