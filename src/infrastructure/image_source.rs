// SPDX-License-Identifier: MPL-2.0
//! Source image loading.
//!
//! Any raster format `image` can decode is accepted; the enhancer always
//! receives PNG.

use crate::error::{Error, Result};
use image_rs::ImageFormat;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Extensions offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "webp", "gif", "bmp", "tif", "tiff",
];

/// Reads an image file and re-encodes it as PNG.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// it cannot be decoded or encoded.
pub fn load_png<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let png = to_png(&bytes)?;
    tracing::debug!(path = %path.display(), bytes = png.len(), "source image loaded");
    Ok(png)
}

/// Decodes in-memory image bytes and re-encodes them as PNG.
pub fn to_png(bytes: &[u8]) -> Result<Vec<u8>> {
    let image = image_rs::load_from_memory(bytes)?;
    if image.width() == 0 || image.height() == 0 {
        return Err(Error::Image("image has empty dimensions".into()));
    }

    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn jpeg_is_reencoded_as_png() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("photo.jpg");
        image_rs::DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 3, Rgba([200, 10, 10, 255])))
            .to_rgb8()
            .save(&path)
            .expect("write jpeg");

        let png = load_png(&path).expect("load");
        assert_eq!(image_rs::guess_format(&png).expect("format"), ImageFormat::Png);
        let decoded = image_rs::load_from_memory(&png).expect("decode");
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let err = load_png(dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn garbage_is_image_error() {
        let err = to_png(b"definitely not an image").unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }
}
