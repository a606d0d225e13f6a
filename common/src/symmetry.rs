//! The eight symmetries of the square grid: four rotations, each of them
//! optionally followed by a mirror image.
//!
//! All transforms work on raw 49-bit cell masks. The permutation tables are
//! derived from [`Coord::rotate`] and [`Coord::mirror`] the first time they
//! are needed and shared for the rest of the process.

use std::sync::OnceLock;

use bitvec::{prelude::Lsb0, view::BitView};

use crate::{CELL_MASK, NR_CELLS, coord::Coord};

struct Tables {
    rotate: [u8; NR_CELLS],
    reflect: [u8; NR_CELLS],
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut rotate = [0; NR_CELLS];
        let mut reflect = [0; NR_CELLS];
        for coord in Coord::all() {
            rotate[coord.index()] = coord.rotate().index() as u8;
            reflect[coord.index()] = coord.mirror().index() as u8;
        }
        Tables { rotate, reflect }
    })
}

fn permute(bits: u64, table: &[u8; NR_CELLS]) -> u64 {
    let bits = bits & CELL_MASK;
    bits.view_bits::<Lsb0>()
        .iter_ones()
        .fold(0, |out, idx| out | 1u64 << table[idx])
}

/// Rotate the mask by 90 degrees.
pub fn rotate(bits: u64) -> u64 {
    permute(bits, &tables().rotate)
}

/// Mirror the mask along the vertical axis.
pub fn reflect(bits: u64) -> u64 {
    permute(bits, &tables().reflect)
}

/// The mask under all eight transforms. The first four entries are the
/// rotations by 0, 90, 180 and 270 degrees, the last four their mirror
/// images.
pub fn variants(bits: u64) -> [u64; 8] {
    let mut candidates = [bits & CELL_MASK; 8];

    for i in 1..4 {
        candidates[i] = rotate(candidates[i - 1]);
    }
    for i in 4..8 {
        candidates[i] = reflect(candidates[i - 4]);
    }

    candidates
}

/// The numerically smallest of the eight variants.
pub fn canonicalize(bits: u64) -> u64 {
    let candidates = variants(bits);
    candidates.iter().copied().min().unwrap_or(candidates[0])
}

/// True if the mask is mapped onto itself by every transform. Checking the
/// two generators is enough.
pub fn is_symmetric(bits: u64) -> bool {
    let bits = bits & CELL_MASK;
    rotate(bits) == bits && reflect(bits) == bits
}
