//! Output Formats - a closed set, each with its own encode path
//!
//! The extension lookup is total: everything outside the table is
//! "unsupported", there is no fallthrough.

use std::borrow::Cow;
use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::RenderError;
use crate::grid::Grid;
use crate::palette::Palette;
use crate::{raster, svg};

/// JPEG quality used for encoded responses.
const JPEG_QUALITY: u8 = 1;

/// The output formats the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Gif,
    Jpeg,
    Svg,
}

impl OutputFormat {
    /// Look up the format for a path extension. A missing extension selects
    /// PNG; an unrecognized one selects nothing.
    pub fn from_extension(extension: Option<&str>) -> Option<OutputFormat> {
        let extension = match extension {
            None => return Some(OutputFormat::Png),
            Some(extension) => extension,
        };

        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "gif" => Some(OutputFormat::Gif),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "svg" => Some(OutputFormat::Svg),
            _ => None,
        }
    }

    /// The Content-Type header value for this format.
    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Gif => "image/gif",
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Svg => "image/svg+xml",
        }
    }

    /// Whether this format renders through the raster pipeline.
    pub fn is_raster(self) -> bool {
        !matches!(self, OutputFormat::Svg)
    }
}

/// Render the grid and encode it in the requested format.
///
/// `size` only applies to raster formats; the vector output is
/// size-independent. Every call writes into a fresh buffer.
pub fn render_to_bytes(
    format: OutputFormat,
    grid: &Grid,
    palette: &Palette,
    size: i32,
) -> Result<Vec<u8>, RenderError> {
    match format {
        OutputFormat::Svg => Ok(svg::render(grid, palette).into_bytes()),
        OutputFormat::Png => encode_png(&raster::render(grid, palette, size)?),
        OutputFormat::Gif => encode_gif(&raster::render(grid, palette, size)?, palette),
        OutputFormat::Jpeg => encode_jpeg(raster::render(grid, palette, size)?),
    }
}

fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buffer = Vec::new();
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;

    Ok(buffer)
}

/// GIF output carries a binary palette: index 0 is the background, index 1
/// the foreground, exactly as the bitmap was filled.
fn encode_gif(image: &RgbaImage, palette: &Palette) -> Result<Vec<u8>, RenderError> {
    let foreground = palette.foreground.0;
    let background = palette.background.0;

    let global = [
        background[0],
        background[1],
        background[2],
        foreground[0],
        foreground[1],
        foreground[2],
    ];

    let indices: Vec<u8> = image.pixels().map(|p| u8::from(p.0 == foreground)).collect();

    let width = image.width() as u16;
    let height = image.height() as u16;

    let mut buffer = Vec::new();

    {
        let mut encoder = gif::Encoder::new(&mut buffer, width, height, &global)?;

        let mut frame = gif::Frame::default();
        frame.width = width;
        frame.height = height;
        frame.buffer = Cow::from(indices);

        encoder.write_frame(&frame)?;
    }

    Ok(buffer)
}

fn encode_jpeg(image: RgbaImage) -> Result<Vec<u8>, RenderError> {
    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgba8(image).into_rgb8();

    let mut buffer = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;

    #[test]
    fn from_extension_maps_the_supported_table() {
        assert_eq!(OutputFormat::from_extension(None), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_extension(Some("png")), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_extension(Some("gif")), Some(OutputFormat::Gif));
        assert_eq!(OutputFormat::from_extension(Some("jpg")), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_extension(Some("jpeg")), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_extension(Some("svg")), Some(OutputFormat::Svg));
    }

    #[test]
    fn from_extension_is_case_insensitive() {
        assert_eq!(OutputFormat::from_extension(Some("PNG")), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_extension(Some("JpEg")), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_extension(Some("SVG")), Some(OutputFormat::Svg));
    }

    #[test]
    fn from_extension_rejects_everything_else() {
        for extension in ["", ".", "xyz", "bmp", "png ", "svgz"] {
            assert_eq!(OutputFormat::from_extension(Some(extension)), None, "{extension:?}");
        }
    }

    #[test]
    fn content_types_match_formats() {
        assert_eq!(OutputFormat::Png.content_type(), "image/png");
        assert_eq!(OutputFormat::Gif.content_type(), "image/gif");
        assert_eq!(OutputFormat::Jpeg.content_type(), "image/jpeg");
        assert_eq!(OutputFormat::Svg.content_type(), "image/svg+xml");
    }

    #[test]
    fn render_to_bytes_produces_decodable_rasters() {
        let grid = generate("pixicon", true, false);

        for (format, expected) in [
            (OutputFormat::Png, ImageFormat::Png),
            (OutputFormat::Gif, ImageFormat::Gif),
            (OutputFormat::Jpeg, ImageFormat::Jpeg),
        ] {
            let bytes = render_to_bytes(format, &grid, &Palette::DEFAULT, 64).unwrap();
            let guessed = image::guess_format(&bytes).unwrap();
            assert_eq!(guessed, expected);

            let decoded = image::load_from_memory(&bytes).unwrap();
            assert_eq!(decoded.width(), 64);
            assert_eq!(decoded.height(), 64);
        }
    }

    #[test]
    fn render_to_bytes_ignores_size_for_vectors() {
        let grid = generate("pixicon", true, false);

        // 1023 would be rejected by the raster pipeline.
        let bytes = render_to_bytes(OutputFormat::Svg, &grid, &Palette::DEFAULT, 1023).unwrap();
        assert!(String::from_utf8(bytes).unwrap().contains("viewBox=\"0 0 8 8\""));
    }

    #[test]
    fn gif_payloads_round_trip_the_palette() {
        let grid = generate("jackwilsdon", true, false);
        let palette = Palette::derive("jackwilsdon");

        let bytes = render_to_bytes(OutputFormat::Gif, &grid, &palette, 16).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().into_rgba8();

        for y in 0..16u32 {
            for x in 0..16u32 {
                let expected = if grid[y as usize / 2][x as usize / 2] {
                    palette.foreground
                } else {
                    palette.background
                };

                assert_eq!(*decoded.get_pixel(x, y), expected, "({x}, {y})");
            }
        }
    }
}
