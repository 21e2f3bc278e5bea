use std::io::Cursor;

use image::{ImageError, ImageFormat, RgbaImage};
use log::{debug, error, info};
use thiserror::Error;

use crate::palette::Palette;

#[derive(Error, Debug)]
pub enum RecolorError {
    #[error("Palette does not have a color at index {index} (pixel #{pixel})")]
    MissingColor { index: u8, pixel: usize },
    #[error("Invalid pixel data length: expected multiple of 4 bytes, got {0}")]
    InvalidPixelDataLength(usize),
    #[error("Pixel data of {actual} bytes does not fit a {width}x{height} image")]
    DimensionMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),
}

/// Replaces the color of every visible pixel with a palette entry.
///
/// # Parameters
/// - `palette`: the lookup table, indexed by the red channel of each pixel.
/// - `pixels`: raw RGBA pixel data.
///
/// # Returns
/// A new RGBA buffer of the same length. Pixels with alpha 0 are copied as is.
/// For the others red, green and blue come from the palette while alpha is
/// kept from the source, whatever the palette color's alpha is.
///
/// # Errors
/// - Returns `RecolorError::InvalidPixelDataLength` if input length is not a multiple of 4
/// - Returns `RecolorError::MissingColor` on the first visible pixel whose index has no color
pub fn recolor_pixels(palette: &Palette, pixels: &[u8]) -> Result<Vec<u8>, RecolorError> {
    if pixels.len() % 4 != 0 {
        return Err(RecolorError::InvalidPixelDataLength(pixels.len()));
    }

    let mut output = pixels.to_vec();
    for (pixel, rgba) in output.chunks_exact_mut(4).enumerate() {
        if rgba[3] == 0 {
            continue;
        }

        let index = rgba[0];
        let color = palette.get(index as usize).ok_or_else(|| {
            error!("Palette does not have a color in {}", index);
            RecolorError::MissingColor { index, pixel }
        })?;
        rgba[..3].copy_from_slice(&color.rgb());
    }

    Ok(output)
}

/// Recolors an already decoded image. The result has the same dimensions.
pub fn recolor_image(palette: &Palette, source: &RgbaImage) -> Result<RgbaImage, RecolorError> {
    let (width, height) = source.dimensions();
    debug!("Recoloring {}x{} image", width, height);

    let pixels = recolor_pixels(palette, source.as_raw())?;
    let actual = pixels.len();
    RgbaImage::from_raw(width, height, pixels).ok_or(RecolorError::DimensionMismatch {
        width,
        height,
        actual,
    })
}

/// Decodes an encoded source image (any format the `image` crate reads),
/// recolors it and returns the result encoded as PNG.
pub fn recolor(palette: &Palette, source: &[u8]) -> Result<Vec<u8>, RecolorError> {
    info!("Starting recolor");

    let decoded = image::load_from_memory(source)?.to_rgba8();
    debug!(
        "Source image decoded: {}x{}",
        decoded.width(),
        decoded.height()
    );

    let recolored = recolor_image(palette, &decoded)?;

    let mut encoded = Vec::new();
    recolored.write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)?;

    info!("Recolor completed: {} bytes of PNG", encoded.len());
    Ok(encoded)
}
