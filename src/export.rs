//! PNG output for figures.
//!
//! The image is fully encoded in memory before the target file is touched,
//! so a failed render leaves any previous image in place.

use crate::canvas::{self, Raster};
use crate::error::{PlotError, Result};
use crate::render::Figure;
use log::debug;
use std::path::Path;

const METERS_PER_INCH: f64 = 0.0254;

/// What part of the canvas ends up in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BBox {
    /// the whole figure canvas
    Full,
    /// cropped to the drawn content, plus the style padding
    Tight,
}

impl std::str::FromStr for BBox {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(BBox::Full),
            "tight" => Ok(BBox::Tight),
            other => Err(PlotError::UnknownBBox(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedImage {
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}

impl Figure {
    /// Draws the figure at `dpi` and writes it as a PNG, replacing `path`.
    pub fn savefig<P: AsRef<Path>>(&self, path: P, dpi: u32, bbox: BBox) -> Result<SavedImage> {
        let path = path.as_ref();
        let raster = canvas::rasterize(self, dpi)?;
        let raster = match bbox {
            BBox::Full => raster,
            BBox::Tight => {
                let pad = (self.style().pad_inches * dpi as f64).round() as u32;
                tight_crop(&raster, pad)
            }
        };
        let png = encode_png(&raster, dpi)?;
        std::fs::write(path, &png).map_err(|source| PlotError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("wrote {} bytes to {}", png.len(), path.display());
        Ok(SavedImage {
            width: raster.width,
            height: raster.height,
            bytes: png.len(),
        })
    }
}

/// smallest (x0, y0, x1, y1) box holding every non-background pixel, bounds exclusive
pub fn content_bounds(raster: &Raster) -> Option<(u32, u32, u32, u32)> {
    let bg = [raster.background.0, raster.background.1, raster.background.2];
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..raster.height {
        for x in 0..raster.width {
            if raster.pixel(x, y) == bg {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x + 1, y + 1),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
            });
        }
    }
    bounds
}

/// Crops to the content and surrounds it with `pad` pixels of background.
/// A blank raster is returned unchanged.
pub fn tight_crop(raster: &Raster, pad: u32) -> Raster {
    let (x0, y0, x1, y1) = match content_bounds(raster) {
        Some(b) => b,
        None => return raster.clone(),
    };
    let width = x1 - x0 + 2 * pad;
    let height = y1 - y0 + 2 * pad;
    let bg = [raster.background.0, raster.background.1, raster.background.2];
    let mut pixels: Vec<u8> = bg
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 3)
        .collect();
    let row_bytes = (x1 - x0) as usize * 3;
    for y in y0..y1 {
        let src = raster.offset(x0, y);
        let dst = ((y - y0 + pad) as usize * width as usize + pad as usize) * 3;
        pixels[dst..dst + row_bytes].copy_from_slice(&raster.pixels[src..src + row_bytes]);
    }
    debug!(
        "tight crop {}x{} -> {}x{}",
        raster.width, raster.height, width, height
    );
    Raster {
        width,
        height,
        pixels,
        background: raster.background,
    }
}

/// RGB PNG bytes, with the resolution stored in the pHYs chunk
pub fn encode_png(raster: &Raster, dpi: u32) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, raster.width, raster.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let ppu = (dpi as f64 / METERS_PER_INCH).round() as u32;
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppu,
            yppu: ppu,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&raster.pixels)?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::RGBColor;

    fn blank(width: u32, height: u32) -> Raster {
        Raster {
            width,
            height,
            pixels: vec![255; (width * height * 3) as usize],
            background: RGBColor(255, 255, 255),
        }
    }

    fn paint(raster: &mut Raster, x: u32, y: u32) {
        let i = ((y * raster.width + x) * 3) as usize;
        raster.pixels[i..i + 3].copy_from_slice(&[10, 20, 30]);
    }

    #[test]
    fn test_content_bounds() {
        let mut r = blank(10, 8);
        assert_eq!(content_bounds(&r), None);
        paint(&mut r, 2, 3);
        paint(&mut r, 6, 5);
        assert_eq!(content_bounds(&r), Some((2, 3, 7, 6)));
    }

    #[test]
    fn test_tight_crop_with_padding() {
        let mut r = blank(10, 8);
        paint(&mut r, 2, 3);
        paint(&mut r, 6, 5);
        let cropped = tight_crop(&r, 1);
        assert_eq!((cropped.width, cropped.height), (7, 5));
        assert_eq!(cropped.pixels.len(), 7 * 5 * 3);
        assert_eq!(cropped.pixel(1, 1), [10, 20, 30]);
        assert_eq!(cropped.pixel(5, 3), [10, 20, 30]);
        assert_eq!(cropped.pixel(0, 0), [255, 255, 255]);
        assert_eq!(cropped.pixel(3, 2), [255, 255, 255]);
    }

    #[test]
    fn test_blank_is_not_cropped() {
        let r = blank(4, 4);
        assert_eq!(tight_crop(&r, 2), r);
    }

    #[test]
    fn test_png_header_and_resolution() {
        let mut r = blank(3, 2);
        paint(&mut r, 1, 1);
        let bytes = encode_png(&r, 600).unwrap();
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

        let decoder = png::Decoder::new(bytes.as_slice());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (3, 2));
        let dims = info.pixel_dims.unwrap();
        assert_eq!(dims.unit, png::Unit::Meter);
        assert_eq!(dims.xppu, 23622);
    }
}
