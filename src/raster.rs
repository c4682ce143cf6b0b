//! Raster Rendering - grid cells to uniform pixel blocks
//!
//! The 8 row bands touch disjoint regions of the pixel buffer, so the fill
//! is a fork-join with no synchronization beyond the join; the result is
//! identical regardless of execution order.

use image::RgbaImage;
use rayon::prelude::*;

use crate::error::RenderError;
use crate::grid::Grid;
use crate::palette::Palette;
use crate::GRID_SIZE;

/// Render the grid into a `size` x `size` bitmap.
///
/// `size` must be a positive multiple of 8; anything else is `InvalidSize`.
pub fn render(grid: &Grid, palette: &Palette, size: i32) -> Result<RgbaImage, RenderError> {
    if size <= 0 || size % 8 != 0 {
        return Err(RenderError::InvalidSize);
    }

    let size = size as u32;

    // The side length of each cell block, in pixels.
    let cell = size as usize / GRID_SIZE;
    let stride = size as usize * 4;

    let mut image = RgbaImage::new(size, size);

    let buffer: &mut [u8] = &mut image;

    buffer
        .par_chunks_mut(stride * cell)
        .zip(grid.par_iter())
        .for_each(|(band, row)| {
            for (x, &set) in row.iter().enumerate() {
                let color = if set { palette.foreground } else { palette.background };
                let start = x * cell * 4;

                for line in band.chunks_mut(stride) {
                    for pixel in line[start..start + cell * 4].chunks_mut(4) {
                        pixel.copy_from_slice(&color.0);
                    }
                }
            }
        });

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;

    #[test]
    fn render_rejects_invalid_sizes() {
        let grid = generate("pixicon", true, false);

        for size in [0, -8, -1, 4, 12, 31, 1023] {
            let result = render(&grid, &Palette::DEFAULT, size);
            assert!(
                matches!(result, Err(RenderError::InvalidSize)),
                "size {size} should be rejected"
            );
        }
    }

    #[test]
    fn render_produces_square_bitmaps() {
        let grid = generate("pixicon", true, false);

        for size in [8, 16, 64, 512, 1024] {
            let image = render(&grid, &Palette::DEFAULT, size).unwrap();
            assert_eq!(image.width(), size as u32);
            assert_eq!(image.height(), size as u32);
        }
    }

    #[test]
    fn render_fills_blocks_uniformly() {
        let grid = generate("jackwilsdon", true, false);
        let palette = Palette::derive("jackwilsdon");
        let image = render(&grid, &palette, 16).unwrap();

        // 2x2 pixel blocks: every pixel of a block carries the cell's color.
        for y in 0..16 {
            for x in 0..16 {
                let expected = if grid[y / 2][x / 2] {
                    palette.foreground
                } else {
                    palette.background
                };

                assert_eq!(*image.get_pixel(x as u32, y as u32), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn render_is_order_independent() {
        let grid = generate("pixicon", false, true);

        let first = render(&grid, &Palette::DEFAULT, 256).unwrap();
        let second = render(&grid, &Palette::DEFAULT, 256).unwrap();

        assert_eq!(first.as_raw(), second.as_raw());
    }
}
