//! Decoder availability.
//!
//! Which formats can be read is fixed when the `image` crate is compiled, so
//! the check is a lookup rather than a runtime probe.

use image::ImageFormat;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Available,
    /// The format is known but its decoder was not built in.
    Missing(ImageFormat),
}

impl Capability {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available)
    }
}

pub fn for_format(format: ImageFormat) -> Capability {
    if format.reading_enabled() {
        Capability::Available
    } else {
        Capability::Missing(format)
    }
}

/// Capability for the format named by the path's extension.
///
/// Unknown extensions report `Available`: the decoder guesses the format from
/// the file contents and rejects it with a load error if it cannot.
pub fn check(path: &Path) -> Capability {
    match ImageFormat::from_path(path) {
        Ok(format) => for_format(format),
        Err(_) => Capability::Available,
    }
}

/// Names of every format this build can decode.
pub fn decodable_formats() -> Vec<&'static str> {
    ImageFormat::all()
        .filter(|format| format.reading_enabled())
        .flat_map(|format| format.extensions_str().iter().copied())
        .collect()
}
