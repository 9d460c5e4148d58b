use image::{ColorType, DynamicImage, ImageFormat};

use crate::layout::compose::ImageExtent;
use crate::render::RenderError;

/// Pixel data ready to be embedded.
pub enum ImageSource {
    /// Baseline JPEG that can be embedded byte-for-byte.
    Jpeg { data: Vec<u8>, grey: bool },
    Pixels(DynamicImage),
}

/// A decoded image together with its natural size in pixels.
pub struct DecodedImage {
    pub natural_width: u32,
    pub natural_height: u32,
    pub source: ImageSource,
}

impl DecodedImage {
    pub fn extent(&self) -> ImageExtent {
        ImageExtent {
            natural_width: self.natural_width as f32,
            natural_height: self.natural_height as f32,
        }
    }
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.source {
            ImageSource::Jpeg { .. } => "jpeg",
            ImageSource::Pixels(_) => "pixels",
        };
        f.debug_struct("DecodedImage")
            .field("natural_width", &self.natural_width)
            .field("natural_height", &self.natural_height)
            .field("source", &kind)
            .finish()
    }
}

/// Decodes an uploaded image. The format is sniffed from the content first; `hint`
/// (extension or MIME type) is only used when sniffing fails.
pub fn decode_image(bytes: &[u8], hint: Option<&str>) -> Result<DecodedImage, RenderError> {
    let format = match image::guess_format(bytes) {
        Ok(format) => format,
        Err(e) => hint.and_then(format_from_hint).ok_or(e)?,
    };
    let image = image::load_from_memory_with_format(bytes, format)?;

    let (natural_width, natural_height) = (image.width(), image.height());
    if natural_width == 0 || natural_height == 0 {
        return Err(RenderError::EmptyImage);
    }

    let source = match (format, image.color(), jpeg_components(bytes)) {
        (ImageFormat::Jpeg, ColorType::Rgb8, Some(3)) => ImageSource::Jpeg {
            data: bytes.to_vec(),
            grey: false,
        },
        (ImageFormat::Jpeg, ColorType::L8, Some(1)) => ImageSource::Jpeg {
            data: bytes.to_vec(),
            grey: true,
        },
        _ => ImageSource::Pixels(image),
    };

    Ok(DecodedImage {
        natural_width,
        natural_height,
        source,
    })
}

/// Component count from the first JPEG frame header. CMYK (4) must not be embedded as RGB.
fn jpeg_components(bytes: &[u8]) -> Option<u8> {
    let mut i = 2;
    while i + 4 <= bytes.len() {
        if bytes[i] != 0xFF {
            return None;
        }
        let marker = bytes[i + 1];
        let len = u16::from_be_bytes([bytes[i + 2], bytes[i + 3]]) as usize;
        // SOF0..SOF15, excluding DHT (C4), JPG (C8) and DAC (CC)
        if (0xC0..=0xCF).contains(&marker) && ![0xC4, 0xC8, 0xCC].contains(&marker) {
            return bytes.get(i + 9).copied();
        }
        i += 2 + len;
    }
    None
}

fn format_from_hint(hint: &str) -> Option<ImageFormat> {
    let hint = hint.trim();
    if hint.contains('/') {
        ImageFormat::from_mime_type(hint)
    } else {
        ImageFormat::from_extension(hint.trim_start_matches('.'))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{ImageOutputFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    pub(crate) fn encode(image: DynamicImage, format: ImageOutputFormat) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, format).unwrap();
        out.into_inner()
    }

    pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 40, 40]));
        encode(DynamicImage::ImageRgb8(img), ImageOutputFormat::Png)
    }

    #[test]
    fn test_png_reports_natural_size() {
        let decoded = decode_image(&png_bytes(64, 32), None).unwrap();
        assert_eq!((decoded.natural_width, decoded.natural_height), (64, 32));
        assert!(matches!(decoded.source, ImageSource::Pixels(_)));
        assert_eq!(decoded.extent().natural_width, 64.0);
    }

    #[test]
    fn test_rgb_jpeg_is_kept_verbatim() {
        let img = RgbImage::from_pixel(16, 16, Rgb([10, 120, 200]));
        let bytes = encode(DynamicImage::ImageRgb8(img), ImageOutputFormat::Jpeg(90));
        let decoded = decode_image(&bytes, Some("image/jpeg")).unwrap();
        match decoded.source {
            ImageSource::Jpeg { data, grey } => {
                assert_eq!(data, bytes);
                assert!(!grey);
            }
            ImageSource::Pixels(_) => panic!("expected a passthrough JPEG"),
        }
    }

    #[test]
    fn test_alpha_png_is_decoded_to_pixels() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 128]));
        let bytes = encode(DynamicImage::ImageRgba8(img), ImageOutputFormat::Png);
        let decoded = decode_image(&bytes, Some("png")).unwrap();
        match decoded.source {
            ImageSource::Pixels(image) => assert!(image.color().has_alpha()),
            ImageSource::Jpeg { .. } => panic!("PNG must not be passed through"),
        }
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let result = decode_image(b"Sample image content", Some("image.jpg"));
        assert!(matches!(result, Err(RenderError::ImageDecode(_))), "got {result:?}");
        assert!(decode_image(b"", None).is_err());
    }

    #[test]
    fn test_jpeg_component_count() {
        let img = RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]));
        let bytes = encode(DynamicImage::ImageRgb8(img), ImageOutputFormat::Jpeg(80));
        assert_eq!(jpeg_components(&bytes), Some(3));
        assert_eq!(jpeg_components(&png_bytes(2, 2)), None);
    }

    #[test]
    fn test_hint_parsing() {
        assert_eq!(format_from_hint("image/png"), Some(ImageFormat::Png));
        assert_eq!(format_from_hint(".jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(format_from_hint("gif"), Some(ImageFormat::Gif));
        assert_eq!(format_from_hint("application/octet-stream"), None);
    }
}
