use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::pixel::{PixelBuffer, PixelClass, PixelClassifier};

/// A single maze cell, addressed by column and row
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// The neighboring cell in the given direction, `None` when it would leave the first
    /// row or column. Bounds on the far side are checked by the graph.
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.offset();
        Some(Cell {
            col: self.col.checked_add_signed(dx)?,
            row: self.row.checked_add_signed(dy)?,
        })
    }

    /// True if the cells share an edge
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row) == 1
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The order in which the solver explores the neighbors of a cell
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::North => "north",
                Direction::South => "south",
                Direction::East => "east",
                Direction::West => "west",
            }
        )
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            _ => Err(anyhow::anyhow!("Invalid direction: {}", s)),
        }
    }
}

/// Size of the cell grid laid over the image
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// side length of a cell in pixels
    pub cell_size: u32,
    pub columns: usize,
    pub rows: usize,
}

impl Geometry {
    pub fn from_cell_size(cell_size: u32, width: u32, height: u32) -> Self {
        Self {
            cell_size,
            columns: (width / cell_size) as usize,
            rows: (height / cell_size) as usize,
        }
    }

    pub fn is_valid(&self, cell: Cell) -> bool {
        cell.col < self.columns && cell.row < self.rows
    }

    /// The pixel that represents the cell
    pub fn center_pixel(&self, cell: Cell) -> (u32, u32) {
        let half = self.cell_size / 2;
        (
            cell.col as u32 * self.cell_size + half,
            cell.row as u32 * self.cell_size + half,
        )
    }

    /// The cell that contains the pixel
    pub fn cell_at(&self, x: u32, y: u32) -> Cell {
        Cell {
            col: (x / self.cell_size) as usize,
            row: (y / self.cell_size) as usize,
        }
    }
}

/// One value per cell of the grid, stored row by row
#[derive(Debug, Clone)]
pub struct CellStorage<T> {
    columns: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> CellStorage<T> {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            cells: vec![T::default(); columns * rows],
        }
    }

    pub fn get(&self, cell: Cell) -> T {
        self.cells[cell.row * self.columns + cell.col]
    }

    pub fn get_mut(&mut self, cell: Cell) -> &mut T {
        &mut self.cells[cell.row * self.columns + cell.col]
    }

    /// All cells together with their values, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Cell, T)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (Cell::new(i % columns, i / columns), v))
    }
}

impl Display for CellStorage<bool> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.columns.max(1)) {
            for &visited in row {
                write!(f, "{}", if visited { "#" } else { "." })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// The cells of a calibrated maze and the walls between them, as seen through the classifier
pub struct CellGraph<'a, B: PixelBuffer> {
    classifier: PixelClassifier<'a, B>,
    geometry: Geometry,
}

impl<'a, B: PixelBuffer> CellGraph<'a, B> {
    pub fn new(classifier: PixelClassifier<'a, B>, geometry: Geometry) -> Self {
        Self {
            classifier,
            geometry,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn is_valid(&self, cell: Cell) -> bool {
        self.geometry.is_valid(cell)
    }

    pub fn center_pixel(&self, cell: Cell) -> (u32, u32) {
        self.geometry.center_pixel(cell)
    }

    /// The neighbor in the given direction, if it is inside the grid
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.step(direction).filter(|&n| self.is_valid(n))
    }

    pub fn is_end(&mut self, cell: Cell) -> bool {
        let (x, y) = self.center_pixel(cell);
        self.classifier.classify(x, y) == PixelClass::End
    }

    /// Samples every pixel on the straight run between the two cell centers (inclusive).
    /// Only defined for four-adjacent cells.
    pub fn has_wall_between(&mut self, a: Cell, b: Cell) -> bool {
        debug_assert!(a.is_adjacent(&b), "{} and {} are not adjacent", a, b);

        let (ax, ay) = self.center_pixel(a);
        let (bx, by) = self.center_pixel(b);

        if ay == by {
            (ax.min(bx)..=ax.max(bx)).any(|x| self.classifier.classify(x, ay) == PixelClass::Wall)
        } else {
            (ay.min(by)..=ay.max(by)).any(|y| self.classifier.classify(ax, y) == PixelClass::Wall)
        }
    }

    pub fn create_storage<T: Copy + Default>(&self) -> CellStorage<T> {
        CellStorage::new(self.geometry.columns, self.geometry.rows)
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::{pixel::Palette, synthetic::MazeImageBuilder};

    fn palette() -> Palette {
        crate::SolverConfig::default().palette()
    }

    #[test]
    fn test_step_and_bounds() {
        let c = Cell::new(0, 0);
        assert_eq!(c.step(Direction::North), None);
        assert_eq!(c.step(Direction::West), None);
        assert_eq!(c.step(Direction::South), Some(Cell::new(0, 1)));
        assert_eq!(c.step(Direction::East), Some(Cell::new(1, 0)));

        let geometry = Geometry::from_cell_size(10, 35, 20);
        assert_eq!(geometry.columns, 3);
        assert_eq!(geometry.rows, 2);
        assert!(geometry.is_valid(Cell::new(2, 1)));
        assert!(!geometry.is_valid(Cell::new(3, 1)));
        assert!(!geometry.is_valid(Cell::new(0, 2)));
    }

    #[test]
    fn test_center_pixel() {
        let geometry = Geometry::from_cell_size(10, 30, 30);
        assert_eq!(geometry.center_pixel(Cell::new(0, 0)), (5, 5));
        assert_eq!(geometry.center_pixel(Cell::new(2, 1)), (25, 15));
        assert_eq!(geometry.cell_at(25, 15), Cell::new(2, 1));

        let odd = Geometry::from_cell_size(7, 70, 70);
        assert_eq!(odd.center_pixel(Cell::new(1, 3)), (10, 24));
    }

    #[test]
    fn test_direction_parse() {
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>().unwrap(), d);
        }
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_wall_sampling() {
        let mut builder = MazeImageBuilder::new(3, 3, 10);
        builder
            .wall(Cell::new(0, 0), Cell::new(1, 0))
            .wall(Cell::new(1, 1), Cell::new(1, 2));
        let img = builder.build();

        let geometry = Geometry::from_cell_size(10, 30, 30);
        let mut graph = CellGraph::new(PixelClassifier::new(&img, palette()), geometry);

        assert!(graph.has_wall_between(Cell::new(0, 0), Cell::new(1, 0)));
        assert!(graph.has_wall_between(Cell::new(1, 0), Cell::new(0, 0)));
        assert!(graph.has_wall_between(Cell::new(1, 1), Cell::new(1, 2)));
        assert!(!graph.has_wall_between(Cell::new(0, 0), Cell::new(0, 1)));
        assert!(!graph.has_wall_between(Cell::new(1, 0), Cell::new(2, 0)));
        assert!(!graph.has_wall_between(Cell::new(2, 1), Cell::new(2, 2)));
    }

    #[test]
    fn test_neighbor_inside_grid() {
        let img = MazeImageBuilder::new(2, 2, 10).build();
        let graph = CellGraph::new(
            PixelClassifier::new(&img, palette()),
            Geometry::from_cell_size(10, 20, 20),
        );

        assert_eq!(graph.neighbor(Cell::new(1, 1), Direction::East), None);
        assert_eq!(graph.neighbor(Cell::new(1, 1), Direction::South), None);
        assert_eq!(
            graph.neighbor(Cell::new(1, 1), Direction::North),
            Some(Cell::new(1, 0))
        );
    }

    #[test]
    fn test_storage_display() {
        let mut storage: CellStorage<bool> = CellStorage::new(3, 2);
        *storage.get_mut(Cell::new(1, 0)) = true;
        *storage.get_mut(Cell::new(2, 1)) = true;
        assert_eq!(storage.to_string(), ".#.\n..#\n");
        assert_eq!(storage.iter().filter(|(_, v)| *v).count(), 2);
    }
}
