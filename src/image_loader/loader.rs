use super::capability::{self, Capability};
use crate::errors::{ExtractError, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

pub fn is_supported_image(path: &Path) -> bool {
    image::ImageFormat::from_path(path)
        .map(|format| format.reading_enabled())
        .unwrap_or(false)
}

/// Open and decode the image at `path`.
///
/// The file handle lives only for the duration of this call.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(ExtractError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if let Capability::Missing(format) = capability::check(path) {
        return Err(ExtractError::CapabilityMissing {
            format: format!("{:?}", format),
        });
    }

    log::debug!("Decoding image: {:?}", path);
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| ExtractError::ImageLoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // Contents can disagree with the extension; re-check what was sniffed
    if let Some(format) = reader.format() {
        if let Capability::Missing(format) = capability::for_format(format) {
            return Err(ExtractError::CapabilityMissing {
                format: format!("{:?}", format),
            });
        }
    }

    let img = reader.decode().map_err(|e| {
        log::error!("Decoding failed for {:?}: {}", path, e);
        ExtractError::ImageLoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    let (width, height) = img.dimensions();
    log::info!("Loaded image {:?} ({}x{}, {:?})", path, width, height, img.color());
    Ok(img)
}
