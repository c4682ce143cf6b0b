//! Pixicon CLI - render one identicon to stdout
//!
//! Raster formats refuse to write to a terminal; pipe the output to a file
//! or another program instead.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;

use pixicon_core::format::{self, OutputFormat};
use pixicon_core::palette::Palette;
use pixicon_core::{grid, handler, DEFAULT_IMAGE_SIZE};

#[derive(Parser)]
#[command(name = "pixicon-cli")]
#[command(about = "Render a deterministic identicon for a piece of text")]
struct Cli {
    /// Text to derive the pattern from
    text: String,

    /// Output size in pixels (a positive multiple of 8; ignored for svg)
    #[arg(short, long, default_value_t = DEFAULT_IMAGE_SIZE)]
    size: i32,

    /// Mirror axes: "x", "y", "xy" or "" for none
    #[arg(short, long, default_value = "x")]
    mirror: String,

    /// Use the black-on-white palette instead of the text-derived one
    #[arg(long)]
    monochrome: bool,

    /// Output format: png, gif, jpg, jpeg or svg
    #[arg(short, long, default_value = "png")]
    format: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let format = match OutputFormat::from_extension(Some(&cli.format)) {
        Some(format) => format,
        None => {
            eprintln!("pixicon-cli: unsupported format {:?}", cli.format);
            return ExitCode::FAILURE;
        }
    };

    let (mirror_x, mirror_y) = match handler::parse_axes(&cli.mirror) {
        Ok(axes) => axes,
        Err(err) => {
            eprintln!("pixicon-cli: {err}");
            return ExitCode::FAILURE;
        }
    };

    // If we're trying to write image bytes to a terminal then prevent it.
    if format.is_raster() && io::stdout().is_terminal() {
        eprintln!("pixicon-cli: refusing to output image data to a terminal");
        eprintln!("\ntry piping the output to a file:");
        eprintln!("\tpixicon-cli {} > image.png", cli.text);
        return ExitCode::FAILURE;
    }

    let palette = if cli.monochrome {
        Palette::DEFAULT
    } else {
        Palette::derive(&cli.text)
    };

    let grid = grid::generate(&cli.text, mirror_x, mirror_y);

    let bytes = match format::render_to_bytes(format, &grid, &palette, cli.size) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("pixicon-cli: failed to generate image: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = io::stdout().write_all(&bytes) {
        eprintln!("pixicon-cli: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
