//! Magic-number detection for image files.

use std::fmt;

/// Image family identified by a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Jpeg => write!(f, "JPEG"),
            ImageFormat::Png => write!(f, "PNG"),
            ImageFormat::Gif => write!(f, "GIF"),
        }
    }
}

/// A magic-number prefix. `None` positions match any byte.
pub struct Signature {
    pub format: ImageFormat,
    pub pattern: &'static [Option<u8>],
}

impl Signature {
    /// Whether `data` starts with this signature.
    pub fn matches(&self, data: &[u8]) -> bool {
        data.len() >= self.pattern.len()
            && self
                .pattern
                .iter()
                .zip(data)
                .all(|(expected, actual)| expected.map_or(true, |b| b == *actual))
    }
}

/// Known image signatures, checked in order.
pub static SIGNATURES: [Signature; 7] = [
    // JPEG raw
    Signature {
        format: ImageFormat::Jpeg,
        pattern: &[Some(0xFF), Some(0xD8), Some(0xFF), Some(0xD8)],
    },
    // JPEG/JFIF
    Signature {
        format: ImageFormat::Jpeg,
        pattern: &[
            Some(0xFF),
            Some(0xD8),
            Some(0xFF),
            Some(0xE0),
            Some(0x00),
            Some(0x10),
            Some(0x4A),
            Some(0x46),
            Some(0x49),
            Some(0x46),
            Some(0x00),
            Some(0x01),
        ],
    },
    // JPEG/Adobe
    Signature {
        format: ImageFormat::Jpeg,
        pattern: &[Some(0xFF), Some(0xD8), Some(0xFF), Some(0xEE)],
    },
    Signature {
        format: ImageFormat::Png,
        pattern: &[
            Some(0x89),
            Some(0x50),
            Some(0x4E),
            Some(0x47),
            Some(0x0D),
            Some(0x0A),
            Some(0x1A),
            Some(0x0A),
        ],
    },
    // GIF87a
    Signature {
        format: ImageFormat::Gif,
        pattern: &[
            Some(0x47),
            Some(0x49),
            Some(0x46),
            Some(0x38),
            Some(0x37),
            Some(0x61),
        ],
    },
    // GIF89a
    Signature {
        format: ImageFormat::Gif,
        pattern: &[
            Some(0x47),
            Some(0x49),
            Some(0x46),
            Some(0x38),
            Some(0x39),
            Some(0x61),
        ],
    },
    // JPEG/Exif, bytes 4-5 hold the APP1 segment length
    Signature {
        format: ImageFormat::Jpeg,
        pattern: &[
            Some(0xFF),
            Some(0xD8),
            Some(0xFF),
            Some(0xE1),
            None,
            None,
            Some(0x45),
            Some(0x78),
            Some(0x69),
            Some(0x66),
            Some(0x00),
            Some(0x00),
        ],
    },
];

/// Detect the image format from magic bytes.
pub fn detect_image_format(data: &[u8]) -> Option<ImageFormat> {
    SIGNATURES
        .iter()
        .find(|signature| signature.matches(data))
        .map(|signature| signature.format)
}

/// Check whether `data` starts with a known image signature.
#[inline]
pub fn is_image(data: &[u8]) -> bool {
    detect_image_format(data).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JFIF: [u8; 12] = [
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01,
    ];

    fn concrete(signature: &Signature, fill: u8) -> Vec<u8> {
        signature
            .pattern
            .iter()
            .map(|b| b.unwrap_or(fill))
            .collect()
    }

    #[test]
    fn test_every_signature_matches_with_trailing_bytes() {
        for signature in &SIGNATURES {
            let mut data = concrete(signature, 0x00);
            data.extend_from_slice(b"trailing payload");
            assert!(is_image(&data), "{:?} not detected", signature.pattern);
            assert_eq!(detect_image_format(&data), Some(signature.format));
        }
    }

    #[test]
    fn test_exact_length_signature_matches() {
        assert!(is_image(&JFIF));
        assert_eq!(detect_image_format(b"GIF89a"), Some(ImageFormat::Gif));
    }

    #[test]
    fn test_short_buffers_never_match() {
        assert!(!is_image(&[]));
        assert!(!is_image(&[0xFF]));
        assert!(!is_image(&[0xFF, 0xD8, 0xFF]));
        assert!(!is_image(b"GIF89"));
        // JFIF prefix cut short of its full length
        assert!(!is_image(&JFIF[..11]));
    }

    #[test]
    fn test_non_images_rejected() {
        assert!(!is_image(b"<!DOCTYPE html><html></html>"));
        assert!(!is_image(b"%PDF-1.7\n"));
        assert!(!is_image(&[0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x43]));
    }

    #[test]
    fn test_exif_wildcards_match_any_byte() {
        let exif = &SIGNATURES[6];
        for fill in [0x00u8, 0x16, 0x7F, 0xFF] {
            let mut data = concrete(exif, 0x00);
            data[4] = fill;
            data[5] = fill.wrapping_add(1);
            assert!(is_image(&data));
        }
    }

    #[test]
    fn test_exif_fixed_byte_mismatch_rejected() {
        let mut data = concrete(&SIGNATURES[6], 0x10);
        data[6] = b'X';
        assert!(!is_image(&data));
    }

    #[test]
    fn test_png_corrupted_header() {
        let mut data = concrete(&SIGNATURES[3], 0);
        data[7] = 0x00;
        assert!(!is_image(&data));
    }

    #[test]
    fn test_display() {
        assert_eq!(ImageFormat::Jpeg.to_string(), "JPEG");
        assert_eq!(ImageFormat::Png.to_string(), "PNG");
    }
}
