//! Image decoding for display.
//!
//! Decoding runs on a worker thread (the UI layer spawns it via rayon); the
//! Slint image conversion happens back on the event loop thread.

use crate::error::Result;
use std::path::Path;

/// Decodes an image file to raw RGB8 data with dimensions.
///
/// Formats outside the decoder set (HEIC/HEIF among the supported
/// extensions) fail here; the caller reports that as a per-file error.
pub fn load_image_blocking(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::ImageReader::open(path)
        .map_err(|e| crate::error::AppError::ImageLoad(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| crate::error::AppError::ImageLoad(e.to_string()))?
        .decode()?;

    let width = img.width();
    let height = img.height();
    Ok((img.to_rgb8().into_raw(), width, height))
}

/// Converts raw RGB8 data into a Slint image.
pub fn create_slint_image(data: Vec<u8>, width: u32, height: u32) -> slint::Image {
    let buffer =
        slint::SharedPixelBuffer::<slint::Rgb8Pixel>::clone_from_slice(&data, width, height);
    slint::Image::from_rgb8(buffer)
}
