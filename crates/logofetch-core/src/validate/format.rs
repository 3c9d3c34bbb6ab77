//! Supported image formats and their magic-number checks.

use std::fmt;

/// Magic-number prefix every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Image formats the resolver accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Svg,
    Webp,
}

impl ImageFormat {
    /// Maps a URL path extension to a format.
    ///
    /// WEBP is deliberately absent: `.webp` URLs are not treated as direct
    /// images, the format is only accepted when a server declares it via
    /// `Content-Type`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "svg" => Some(ImageFormat::Svg),
            _ => None,
        }
    }

    /// Maps a media type (parameters already stripped) to a format.
    pub fn from_content_type(media_type: &str) -> Option<Self> {
        match media_type.to_ascii_lowercase().as_str() {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/svg+xml" => Some(ImageFormat::Svg),
            "image/webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    /// True if `body` carries this format's signature.
    ///
    /// PNG checks the 8-byte prefix; JPEG requires the SOI marker at the
    /// start and the EOI marker at the end; SVG lower-cases the text and
    /// requires an `<svg` tag and the SVG namespace declaration (either
    /// quote style); WEBP requires the RIFF container header with the
    /// `WEBP` tag at offset 8.
    pub fn matches_signature(&self, body: &[u8]) -> bool {
        match self {
            ImageFormat::Png => body.starts_with(&PNG_SIGNATURE),
            ImageFormat::Jpeg => {
                body.starts_with(&[0xFF, 0xD8]) && body.ends_with(&[0xFF, 0xD9])
            }
            ImageFormat::Svg => {
                let text = String::from_utf8_lossy(body).to_lowercase();
                text.contains("<svg")
                    && (text.contains(r#"xmlns="http://www.w3.org/2000/svg""#)
                        || text.contains(r#"xmlns='http://www.w3.org/2000/svg'"#))
            }
            ImageFormat::Webp => {
                body.len() >= 12 && &body[0..4] == b"RIFF" && &body[8..12] == b"WEBP"
            }
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Svg => "SVG",
            ImageFormat::Webp => "WEBP",
        };
        write!(f, "{}", name)
    }
}
