//! Dominant color of an image, ignoring near-white background.
//!
//! ```rust,no_run
//! use dominant_color::{DominantColorExtractor, Outcome};
//! use std::path::Path;
//!
//! let extractor = DominantColorExtractor::default();
//! let outcome = Outcome::from_result(extractor.extract_from_path(Path::new("logo.png")));
//! println!("{}", outcome);
//! ```

pub mod color;
pub mod errors;
pub mod image_loader;
pub mod logging;
pub mod report;
pub mod settings;


pub use color::{ColorTally, DominantColor, DominantColorExtractor, Pixel};
pub use errors::{ExtractError, Result};
pub use image_loader::Capability;
pub use report::Outcome;
pub use settings::{ResampleFilter, Settings, DEFAULT_INPUT_PATH};
