//! Vector Rendering - an 8x8 unit canvas with one rect per foreground cell
//!
//! Background cells rely on the base fill and never produce a rect.

use image::Rgba;

use crate::grid::Grid;
use crate::palette::Palette;
use crate::GRID_SIZE;

fn hex(color: &Rgba<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0[0], color.0[1], color.0[2])
}

/// Render the grid as an SVG document over a fixed 8x8 viewBox.
pub fn render(grid: &Grid, palette: &Palette) -> String {
    let mut doc = String::with_capacity(4096);

    doc.push_str("<?xml version=\"1.0\"?>\n");
    doc.push_str(
        "<svg viewBox=\"0 0 8 8\" shape-rendering=\"crispEdges\" \
         xmlns=\"http://www.w3.org/2000/svg\">\n",
    );

    doc.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{GRID_SIZE}\" height=\"{GRID_SIZE}\" style=\"fill: {}\"/>\n",
        hex(&palette.background)
    ));

    let fill = hex(&palette.foreground);

    for (y, row) in grid.iter().enumerate() {
        for (x, &set) in row.iter().enumerate() {
            if !set {
                continue;
            }

            doc.push_str(&format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"1\" height=\"1\" style=\"fill: {fill}\"/>\n"
            ));
        }
    }

    doc.push_str("</svg>\n");

    doc
}
