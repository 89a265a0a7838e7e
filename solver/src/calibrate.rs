use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    grid::{Cell, Geometry},
    pixel::{PixelBuffer, PixelClassifier},
};

/// Probe spacings, coarse to fine
const PROBE_INCREMENTS: [u32; 7] = [64, 32, 16, 8, 4, 2, 1];

/// The grid inferred from the start marker
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub geometry: Geometry,
    /// the cell holding the start marker
    pub start: Cell,
}

/// Looks for a start-colored pixel on increasingly finer probe grids. Returns the first hit
/// and the increment it was found at.
fn find_start_pixel<B: PixelBuffer>(classifier: &mut PixelClassifier<B>) -> Option<(u32, u32, u32)> {
    let (width, height) = (classifier.width(), classifier.height());

    for increment in PROBE_INCREMENTS {
        for y in (0..height).step_by(increment as usize) {
            for x in (0..width).step_by(increment as usize) {
                if classifier.is_start(x, y) {
                    return Some((x, y, increment));
                }
            }
        }
    }

    None
}

/// Infers the cell size and the start cell from the start marker alone.
///
/// The marker is assumed to fill its cell except for a one pixel border on each side, so the
/// cell size is the marker height plus two. Returns `None` if there is no start-colored pixel.
pub fn calibrate<B: PixelBuffer>(classifier: &mut PixelClassifier<B>) -> Option<Calibration> {
    let (x, y, increment) = find_start_pixel(classifier)?;

    let mut x_start = x;
    while x_start > 0 && classifier.is_start(x_start - 1, y) {
        x_start -= 1;
    }

    let mut y_start = y;
    while y_start > 0 && classifier.is_start(x, y_start - 1) {
        y_start -= 1;
    }

    // exclusive: first row below the marker
    let mut y_end = y + 1;
    while classifier.is_start(x, y_end) {
        y_end += 1;
    }

    let cell_size = y_end - y_start + 2;
    let geometry = Geometry::from_cell_size(cell_size, classifier.width(), classifier.height());
    let start = geometry.cell_at(x_start + cell_size / 2, y_start + cell_size / 2);

    debug!(
        "start marker found at ({}, {}) with probe increment {}: cell size {}, grid {}x{}, start cell {}",
        x, y, increment, cell_size, geometry.columns, geometry.rows, start
    );

    Some(Calibration { geometry, start })
}
