//! Dominant color extraction.
//!
//! The image is shrunk to a small fixed grid, reduced to opaque RGB, stripped
//! of near-white pixels and tallied. The most frequent surviving color wins;
//! ties go to the color seen first in row-major order.

use super::pixel::Pixel;
use super::tally::ColorTally;
use crate::errors::{ExtractError, Result};
use crate::image_loader;
use crate::settings::Settings;
use image::{DynamicImage, GenericImageView, RgbImage};
use std::path::Path;
use std::time::Instant;

/// Winning color of an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominantColor {
    pub pixel: Pixel,
    /// Occurrences of `pixel` in the sampled grid.
    pub count: usize,
    /// Pixels left after near-white filtering.
    pub considered: usize,
}

impl DominantColor {
    pub fn hex(&self) -> String {
        self.pixel.to_hex()
    }

    /// Fraction of the considered pixels that matched the dominant color.
    pub fn share(&self) -> f32 {
        if self.considered == 0 {
            0.0
        } else {
            self.count as f32 / self.considered as f32
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DominantColorExtractor {
    settings: Settings,
}

impl DominantColorExtractor {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load the image at `path` and extract its dominant color.
    ///
    /// `Ok(None)` means every sampled pixel was near-white.
    pub fn extract_from_path(&self, path: &Path) -> Result<Option<DominantColor>> {
        let start = Instant::now();
        let img = image_loader::load_image(path)?;
        let result = self.extract_from_image(&img)?;
        tracing::debug!(
            path = %path.display(),
            duration_ms = ?start.elapsed().as_millis(),
            found = result.is_some(),
            "extraction finished"
        );
        Ok(result)
    }

    pub fn extract_from_image(&self, img: &DynamicImage) -> Result<Option<DominantColor>> {
        self.settings.validate()?;

        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ExtractError::ImageProcessingError {
                message: format!("image has no pixels ({}x{})", width, height),
            });
        }

        let sample = self.downsample(img);
        let tally = self.tally(&sample);

        let Some((pixel, count)) = tally.dominant() else {
            tracing::debug!("no pixel survived near-white filtering");
            return Ok(None);
        };

        tracing::debug!(
            color = %pixel,
            count,
            considered = tally.total(),
            distinct = tally.distinct(),
            "dominant color selected"
        );
        Ok(Some(DominantColor {
            pixel,
            count,
            considered: tally.total(),
        }))
    }

    /// Resize to the sample grid and drop any alpha channel.
    pub fn downsample(&self, img: &DynamicImage) -> RgbImage {
        let (w, h) = (self.settings.sample_width, self.settings.sample_height);
        if img.dimensions() == (w, h) {
            return img.to_rgb8();
        }
        img.resize_exact(w, h, self.settings.resample_filter.filter_type())
            .to_rgb8()
    }

    /// Count every non-near-white pixel of `rgb` in row-major order.
    pub fn tally(&self, rgb: &RgbImage) -> ColorTally {
        let threshold = self.settings.white_threshold;
        rgb.pixels()
            .map(Pixel::from)
            .filter(|pixel| !pixel.is_near_white(threshold))
            .collect()
    }
}
