use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use crate::{find::PathResult, grid::Geometry, SolverConfig};

/// Draws a solved path as straight strokes between the cell centers
#[derive(Copy, Clone, Debug)]
pub struct PathRenderer {
    pub color: Rgb<u8>,
    pub stroke_width: u32,
}

impl PathRenderer {
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            color: Rgb(config.path_color),
            stroke_width: config.stroke_width.max(1),
        }
    }

    /// Strokes are drawn from the goal back to the start
    pub fn draw(&self, image: &mut RgbImage, geometry: &Geometry, path: &PathResult) {
        for (from, to) in path.edges().rev() {
            self.draw_segment(
                image,
                geometry.center_pixel(from),
                geometry.center_pixel(to),
            );
        }
    }

    /// A filled rectangle `stroke_width` thick around the segment, both endpoints included
    pub fn draw_segment(&self, image: &mut RgbImage, a: (u32, u32), b: (u32, u32)) {
        let width = self.stroke_width.max(1);
        let offset = ((width - 1) / 2) as i32;

        let left = a.0.min(b.0) as i32 - offset;
        let top = a.1.min(b.1) as i32 - offset;
        let rect = Rect::at(left, top).of_size(a.0.abs_diff(b.0) + width, a.1.abs_diff(b.1) + width);

        draw_filled_rect_mut(image, rect, self.color);
    }
}
