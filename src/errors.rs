use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to load image '{}': {message}", path.display())]
    ImageLoadError { path: PathBuf, message: String },

    #[error("No decoder available for {format} images")]
    CapabilityMissing { format: String },

    #[error("Image processing error: {message}")]
    ImageProcessingError { message: String },

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;

impl ExtractError {
    /// True when the imaging capability itself is unavailable, as opposed to a
    /// bad input or a processing failure.
    pub fn is_capability_missing(&self) -> bool {
        matches!(self, ExtractError::CapabilityMissing { .. })
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ExtractError::FileNotFound { .. } => "FILE_NOT_FOUND",
            ExtractError::ImageLoadError { .. } => "IMAGE_LOAD_ERROR",
            ExtractError::CapabilityMissing { .. } => "CAPABILITY_MISSING",
            ExtractError::ImageProcessingError { .. } => "IMAGE_PROCESSING_ERROR",
            ExtractError::SettingsError { .. } => "SETTINGS_ERROR",
            ExtractError::IoError { .. } => "IO_ERROR",
            ExtractError::JsonError { .. } => "JSON_ERROR",
        }
    }

    /// Logs the error with its code. Output goes through the tracing
    /// subscriber, never stdout.
    pub fn log(&self) {
        if self.is_capability_missing() {
            tracing::warn!(code = self.error_code(), "{}", self);
        } else {
            tracing::error!(code = self.error_code(), "{}", self);
        }
    }
}
