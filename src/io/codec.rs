use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage, RgbaImage};

use crate::error::{Error, Result};

/// Quality for JPEG outputs; the original canvas is lossless, keep the loss small
pub const JPEG_QUALITY: u8 = 95;

/// Decode the image at `path`. The format is sniffed from the content,
/// so a file whose extension disagrees with its bytes still decodes.
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| Error::image(path, e))
}

/// Width and height from the image header, without decoding pixel data.
pub fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()
        .map_err(|e| Error::image(path, e))
}

/// Output format named by the extension of `path`.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path).map_err(|e| Error::image(path, e))
}

/// Encode `canvas` to `path` as `format`, replacing any existing file.
///
/// JPEG has no alpha channel: the canvas is flattened to RGB, which turns
/// transparent padding black.
pub fn encode_image(canvas: &RgbaImage, path: &Path, format: ImageFormat) -> Result<()> {
    match format {
        ImageFormat::Jpeg => {
            let rgb: RgbImage = canvas.convert();
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
            rgb.write_with_encoder(encoder)
                .map_err(|e| Error::image(path, e))?;
        }
        _ => {
            canvas
                .save_with_format(path, format)
                .map_err(|e| Error::image(path, e))?;
        }
    }

    Ok(())
}
