//! Grid Generation - seeded random bits under symmetry constraints
//!
//! Mirroring halves the number of independent pixels per axis; only the
//! independent pixels consume random bytes, the rest are copies. The byte
//! source is pinned to SplitMix64 so that a given text renders identically
//! on every build.

use rand::{RngCore, SeedableRng};
use rand_xoshiro::SplitMix64;

use crate::hash;
use crate::GRID_SIZE;

/// An 8x8 pattern, row-major: `grid[y][x]` is true for foreground cells.
pub type Grid = [[bool; GRID_SIZE]; GRID_SIZE];

/// Generate the pattern for `text`, optionally mirrored on the X or Y axis.
///
/// Invariant: with `mirror_x`, `grid[y][x] == grid[y][7 - x]`; with
/// `mirror_y`, `grid[y][x] == grid[7 - y][x]`; both hold when both axes are
/// mirrored.
pub fn generate(text: &str, mirror_x: bool, mirror_y: bool) -> Grid {
    let mut rng = SplitMix64::seed_from_u64(hash::seed(text) as u64);

    // Number of pixels that have to be drawn, halved per mirrored axis.
    let mut pixels = GRID_SIZE * GRID_SIZE;

    if mirror_x {
        pixels /= 2;
    }

    if mirror_y {
        pixels /= 2;
    }

    // 8 pixels per byte.
    let mut bytes = vec![0u8; pixels / 8];
    rng.fill_bytes(&mut bytes);

    // The width of the independent region.
    let width = if mirror_x { GRID_SIZE / 2 } else { GRID_SIZE };

    let mut grid: Grid = [[false; GRID_SIZE]; GRID_SIZE];

    for i in 0..pixels {
        let set = (bytes[i / 8] >> (i % 8)) & 1 != 0;

        let x = i % width;
        let y = i / width;

        grid[y][x] = set;

        if mirror_x {
            grid[y][GRID_SIZE - 1 - x] = set;
        }

        if mirror_y {
            grid[GRID_SIZE - 1 - y][x] = set;

            // Mirroring on both axes also fills the opposite corner.
            if mirror_x {
                grid[GRID_SIZE - 1 - y][GRID_SIZE - 1 - x] = set;
            }
        }
    }

    grid
}
