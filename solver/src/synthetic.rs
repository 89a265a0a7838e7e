//! Generates maze images in the layout the calibrator expects: a white canvas, one pixel wide
//! black walls on the cell boundaries and start/end markers inset one pixel from the cell edges.
//! Used by the tests and the benchmarks.

use image::{Rgb, RgbImage};

use crate::{grid::Cell, SolverConfig};

const FLOOR: Rgb<u8> = Rgb([255, 255, 255]);
const WALL: Rgb<u8> = Rgb([0, 0, 0]);

pub struct MazeImageBuilder {
    cell_size: u32,
    start_color: Rgb<u8>,
    end_color: Rgb<u8>,
    image: RgbImage,
}

impl MazeImageBuilder {
    pub fn new(columns: usize, rows: usize, cell_size: u32) -> Self {
        assert!(cell_size >= 3, "cell size must leave room for the markers");
        let config = SolverConfig::default();
        Self {
            cell_size,
            start_color: Rgb(config.start_color),
            end_color: Rgb(config.end_color),
            image: RgbImage::from_pixel(
                columns as u32 * cell_size,
                rows as u32 * cell_size,
                FLOOR,
            ),
        }
    }

    /// A maze that can only be walked row by row, alternating direction, so the only path from
    /// the top left to the end visits every cell
    pub fn serpentine(columns: usize, rows: usize, cell_size: u32) -> Self {
        let mut builder = Self::new(columns, rows, cell_size);
        for row in 0..rows.saturating_sub(1) {
            let gap = if row % 2 == 0 { columns - 1 } else { 0 };
            for col in (0..columns).filter(|&c| c != gap) {
                builder.wall(Cell::new(col, row), Cell::new(col, row + 1));
            }
        }

        let last_row = rows - 1;
        let end_col = if last_row % 2 == 0 { columns - 1 } else { 0 };
        builder
            .start(Cell::new(0, 0))
            .end(Cell::new(end_col, last_row));
        builder
    }

    pub fn with_colors(mut self, start: [u8; 3], end: [u8; 3]) -> Self {
        self.start_color = Rgb(start);
        self.end_color = Rgb(end);
        self
    }

    /// Draws the boundary shared by two four-adjacent cells
    pub fn wall(&mut self, a: Cell, b: Cell) -> &mut Self {
        assert!(a.is_adjacent(&b), "{} and {} are not adjacent", a, b);
        let cs = self.cell_size;

        if a.row == b.row {
            let x = a.col.max(b.col) as u32 * cs;
            let y = a.row as u32 * cs;
            self.fill(x, y, 1, cs + 1, WALL);
        } else {
            let x = a.col as u32 * cs;
            let y = a.row.max(b.row) as u32 * cs;
            self.fill(x, y, cs + 1, 1, WALL);
        }
        self
    }

    /// Walls on all four sides of the cell
    pub fn enclose(&mut self, cell: Cell) -> &mut Self {
        let cs = self.cell_size;
        let x = cell.col as u32 * cs;
        let y = cell.row as u32 * cs;
        self.fill(x, y, cs + 1, 1, WALL)
            .fill(x, y + cs, cs + 1, 1, WALL)
            .fill(x, y, 1, cs + 1, WALL)
            .fill(x + cs, y, 1, cs + 1, WALL)
    }

    pub fn start(&mut self, cell: Cell) -> &mut Self {
        let color = self.start_color;
        self.marker(cell, color)
    }

    pub fn end(&mut self, cell: Cell) -> &mut Self {
        let color = self.end_color;
        self.marker(cell, color)
    }

    fn marker(&mut self, cell: Cell, color: Rgb<u8>) -> &mut Self {
        let cs = self.cell_size;
        self.fill(
            cell.col as u32 * cs + 1,
            cell.row as u32 * cs + 1,
            cs - 2,
            cs - 2,
            color,
        )
    }

    /// Fills a rectangle, clipped to the image
    pub fn fill(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) -> &mut Self {
        let x_end = (x + width).min(self.image.width());
        let y_end = (y + height).min(self.image.height());
        for py in y..y_end {
            for px in x..x_end {
                self.image.put_pixel(px, py, color);
            }
        }
        self
    }

    pub fn build(&self) -> RgbImage {
        self.image.clone()
    }
}
