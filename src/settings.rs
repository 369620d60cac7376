use crate::errors::{ExtractError, Result};
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Path of the logo the binary analyzes, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "src/assets/logo_crop.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Downsampling
    pub sample_width: u32,
    pub sample_height: u32,
    pub resample_filter: ResampleFilter,

    /// A pixel is near-white when all three channels are strictly above this.
    pub white_threshold: u8,

    // Diagnostics
    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sample_width: 50,
            sample_height: 50,
            resample_filter: ResampleFilter::Nearest,
            white_threshold: 240,
            debug_logging: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Settings {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_width == 0 || self.sample_height == 0 {
            return Err(ExtractError::SettingsError {
                message: format!(
                    "sample size must be non-zero, got {}x{}",
                    self.sample_width, self.sample_height
                ),
            });
        }
        Ok(())
    }

    pub fn sample_pixel_count(&self) -> usize {
        self.sample_width as usize * self.sample_height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_fixed_constants() {
        let settings = Settings::default();
        assert_eq!(settings.sample_width, 50);
        assert_eq!(settings.sample_height, 50);
        assert_eq!(settings.sample_pixel_count(), 2500);
        assert_eq!(settings.white_threshold, 240);
        assert_eq!(settings.resample_filter, ResampleFilter::Nearest);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings = Settings::from_json_str(r#"{ "white_threshold": 200 }"#).unwrap();
        assert_eq!(settings.white_threshold, 200);
        assert_eq!(settings.sample_width, 50);
        assert_eq!(settings.resample_filter, ResampleFilter::Nearest);
    }

    #[test]
    fn test_zero_sample_size_rejected() {
        let err = Settings::from_json_str(r#"{ "sample_width": 0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "SETTINGS_ERROR");
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Settings::from_json_str("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "JSON_ERROR");
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.resample_filter = ResampleFilter::CatmullRom;
        settings.debug_logging = true;

        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(settings.to_json().unwrap().as_bytes()).unwrap();

        let loaded = Settings::from_json_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::from_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
