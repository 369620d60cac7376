//! The single line the binary prints.

use crate::color::DominantColor;
use crate::errors::Result;
use std::fmt;

pub const RESULT_TAG: &str = "DOMINANT_COLOR:";
pub const ERROR_TAG: &str = "ERROR:";
pub const CAPABILITY_MISSING_SENTINEL: &str = "PIL_NOT_YOUR_FAULT";

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Dominant(DominantColor),
    NoColor,
    /// The decoder needed for the image is not available in this build.
    CapabilityMissing,
    Error(String),
}

impl Outcome {
    pub fn from_result(result: Result<Option<DominantColor>>) -> Self {
        match result {
            Ok(Some(color)) => Outcome::Dominant(color),
            Ok(None) => Outcome::NoColor,
            Err(e) => {
                e.log();
                if e.is_capability_missing() {
                    Outcome::CapabilityMissing
                } else {
                    Outcome::Error(e.to_string())
                }
            }
        }
    }

    /// 0 unless something genuinely failed.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Error(_) => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Dominant(color) => write!(f, "{}{}", RESULT_TAG, color.pixel),
            Outcome::NoColor => write!(f, "{}None", RESULT_TAG),
            Outcome::CapabilityMissing => f.write_str(CAPABILITY_MISSING_SENTINEL),
            // Keep the report on one line whatever the message contains
            Outcome::Error(message) => {
                let flat: Vec<&str> = message.lines().map(str::trim).collect();
                write!(f, "{}{}", ERROR_TAG, flat.join(" "))
            }
        }
    }
}
