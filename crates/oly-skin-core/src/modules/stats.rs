//! Per-channel intensity statistics.

use image::{DynamicImage, RgbImage};

use crate::domain::ChannelStats;
use crate::error::EstimateError;

/// Color channel of an RGB image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Position of the channel within an `Rgb` pixel.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// 256-bin histogram of one 8-bit channel.
#[derive(Debug, Clone)]
pub struct Histogram {
    bins: [u64; 256],
    total: u64,
}

impl Histogram {
    /// Compute the histogram of one channel.
    #[must_use]
    pub fn from_rgb_channel(image: &RgbImage, channel: Channel) -> Self {
        let mut bins = [0u64; 256];
        for pixel in image.pixels() {
            bins[usize::from(pixel.0[channel.index()])] += 1;
        }
        let total = bins.iter().sum();
        Self { bins, total }
    }

    /// Returns the total pixel count.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Calculate mean intensity.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let sum: u64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(i, &count)| (i as u64) * count)
            .sum();
        sum as f64 / self.total as f64
    }

    /// Calculate population standard deviation of intensity.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let mean = self.mean();
        let variance: f64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let diff = (i as f64) - mean;
                diff * diff * (count as f64)
            })
            .sum::<f64>()
            / (self.total as f64);
        variance.sqrt()
    }

    /// Summarizes the histogram as channel statistics.
    #[must_use]
    pub fn stats(&self) -> ChannelStats {
        ChannelStats {
            mean: self.mean(),
            std_dev: self.std_dev(),
        }
    }
}

/// Computes red, green and blue statistics over a decoded image.
///
/// Alpha is ignored. Images with fewer than three color channels
/// (grayscale, grayscale with alpha) are rejected rather than expanded.
///
/// # Errors
///
/// Returns [`EstimateError::InsufficientChannels`] for images with fewer
/// than three channels and [`EstimateError::EmptyImage`] for images
/// without pixels.
pub fn rgb_channel_stats(image: &DynamicImage) -> Result<[ChannelStats; 3], EstimateError> {
    let found = image.color().channel_count();
    if found < 3 {
        return Err(EstimateError::InsufficientChannels { found });
    }

    let rgb = image.to_rgb8();
    let red = Histogram::from_rgb_channel(&rgb, Channel::Red);
    if red.total() == 0 {
        return Err(EstimateError::EmptyImage);
    }
    let green = Histogram::from_rgb_channel(&rgb, Channel::Green);
    let blue = Histogram::from_rgb_channel(&rgb, Channel::Blue);

    Ok([red.stats(), green.stats(), blue.stats()])
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::cast_possible_truncation, clippy::float_cmp)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, LumaA, Rgb, RgbaImage};

    #[test]
    fn test_uniform_channel_has_zero_std_dev() {
        let img = RgbImage::from_fn(10, 10, |_, _| Rgb([128, 64, 0]));
        let red = Histogram::from_rgb_channel(&img, Channel::Red);
        assert_eq!(red.total(), 100);
        assert!((red.mean() - 128.0).abs() < f64::EPSILON);
        assert!(red.std_dev().abs() < f64::EPSILON);

        let green = Histogram::from_rgb_channel(&img, Channel::Green);
        assert!((green.mean() - 64.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_two_level_population_std_dev() {
        // Half 0, half 100 -> mean 50, population std dev 50
        let img = RgbImage::from_fn(10, 10, |x, _| {
            if x < 5 {
                Rgb([0, 0, 0])
            } else {
                Rgb([100, 100, 100])
            }
        });
        let stats = Histogram::from_rgb_channel(&img, Channel::Blue).stats();
        assert!((stats.mean - 50.0).abs() < 1e-9, "mean={}", stats.mean);
        assert!((stats.std_dev - 50.0).abs() < 1e-9, "std={}", stats.std_dev);
    }

    #[test]
    fn test_gradient_mean() {
        let img = RgbImage::from_fn(256, 1, |x, _| Rgb([x as u8, 0, 0]));
        let hist = Histogram::from_rgb_channel(&img, Channel::Red);
        assert!((hist.mean() - 127.5).abs() < 1e-9);
        // Population std dev of 0..=255 is sqrt((256^2 - 1) / 12)
        let expected = ((256.0f64 * 256.0 - 1.0) / 12.0).sqrt();
        assert!((hist.std_dev() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_channel_indices_cover_rgb_pixel() {
        let img = RgbImage::from_fn(2, 2, |_, _| Rgb([1, 2, 3]));
        let means: Vec<f64> = Channel::ALL
            .iter()
            .map(|&c| Histogram::from_rgb_channel(&img, c).mean())
            .collect();
        assert_eq!(means, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram {
            bins: [0u64; 256],
            total: 0,
        };
        assert!((hist.mean() - 0.0).abs() < f64::EPSILON);
        assert!((hist.std_dev() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rgb_stats_per_channel() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(4, 4, |_, _| Rgb([10, 20, 30])));
        let [r, g, b] = rgb_channel_stats(&img).expect("rgb stats");
        assert!((r.mean - 10.0).abs() < f64::EPSILON);
        assert!((g.mean - 20.0).abs() < f64::EPSILON);
        assert!((b.mean - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rgba_ignores_alpha() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(4, 4, |x, _| {
            image::Rgba([200, 100, 50, if x % 2 == 0 { 0 } else { 255 }])
        }));
        let [r, g, b] = rgb_channel_stats(&img).expect("rgba stats");
        assert!((r.mean - 200.0).abs() < f64::EPSILON);
        assert!(g.std_dev.abs() < f64::EPSILON);
        assert!((b.mean - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grayscale_rejected() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(4, 4));
        assert!(matches!(
            rgb_channel_stats(&img),
            Err(EstimateError::InsufficientChannels { found: 1 })
        ));

        let img = DynamicImage::ImageLumaA8(GrayAlphaImage::from_fn(4, 4, |_, _| {
            LumaA([128, 255])
        }));
        assert!(matches!(
            rgb_channel_stats(&img),
            Err(EstimateError::InsufficientChannels { found: 2 })
        ));
    }

    #[test]
    fn test_empty_image_rejected() {
        let img = DynamicImage::new_rgb8(0, 0);
        assert!(matches!(
            rgb_channel_stats(&img),
            Err(EstimateError::EmptyImage)
        ));
    }
}
