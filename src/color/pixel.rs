use image::Rgb;
use std::fmt;

/// An opaque sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// True when every channel is strictly greater than `threshold`.
    /// A pixel sitting exactly on the threshold is kept.
    pub fn is_near_white(&self, threshold: u8) -> bool {
        self.r > threshold && self.g > threshold && self.b > threshold
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb<u8>> for Pixel {
    fn from(rgb: Rgb<u8>) -> Self {
        let [r, g, b] = rgb.0;
        Self::new(r, g, b)
    }
}

impl From<&Rgb<u8>> for Pixel {
    fn from(rgb: &Rgb<u8>) -> Self {
        Self::from(*rgb)
    }
}

impl From<Pixel> for Rgb<u8> {
    fn from(pixel: Pixel) -> Self {
        Rgb([pixel.r, pixel.g, pixel.b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(Pixel::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(Pixel::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Pixel::new(0xAB, 0xCD, 0xEF).to_string(), "#abcdef");
    }

    #[test]
    fn test_hex_shape_for_every_channel_value() {
        for v in 0..=255u8 {
            let hex = Pixel::new(v, 255 - v, v / 2).to_hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn test_near_white_boundary() {
        assert!(!Pixel::new(240, 240, 240).is_near_white(240));
        assert!(Pixel::new(241, 241, 241).is_near_white(240));
        assert!(!Pixel::new(241, 241, 240).is_near_white(240));
        assert!(Pixel::new(255, 255, 255).is_near_white(240));
        assert!(!Pixel::new(255, 0, 255).is_near_white(240));
    }

    #[test]
    fn test_rgb_conversion() {
        let pixel = Pixel::from(Rgb([10, 20, 30]));
        assert_eq!(pixel, Pixel::new(10, 20, 30));
        assert_eq!(Rgb::<u8>::from(pixel), Rgb([10, 20, 30]));
    }
}
