pub mod calibrate;
pub mod config;
pub mod find;
pub mod grid;
pub mod pixel;
pub mod render;
pub mod synthetic;
pub mod util;

pub use calibrate::*;
pub use config::*;
pub use find::*;
pub use grid::*;
pub use pixel::*;
pub use render::*;

use image::RgbImage;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub calibration: Calibration,
    pub path: PathResult,
}

/// What came out of solving one image. Every variant is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    NoStartFound,
    NoPathFound(Calibration),
    Solved(Solution),
}

/// Calibrates the grid from the start marker and searches for a path to the end marker
pub fn solve_maze<B: PixelBuffer>(buffer: &B, config: &SolverConfig) -> SolveOutcome {
    let mut classifier = PixelClassifier::new(buffer, config.palette());

    let Some(calibration) = calibrate(&mut classifier) else {
        return SolveOutcome::NoStartFound;
    };

    let mut graph = CellGraph::new(classifier, calibration.geometry);
    let visited = graph.create_storage();

    match MazeSolver::new(calibration.start, visited).finish(&mut graph).0 {
        SolverState::PathFound(path) => SolveOutcome::Solved(Solution { calibration, path }),
        _ => SolveOutcome::NoPathFound(calibration),
    }
}

/// Like [`solve_maze`], and draws the path onto the image if one was found
pub fn solve_and_render(image: &mut RgbImage, config: &SolverConfig) -> SolveOutcome {
    let outcome = solve_maze(&*image, config);

    if let SolveOutcome::Solved(solution) = &outcome {
        debug!("drawing {} segments", solution.path.edges().count());
        PathRenderer::new(config).draw(image, &solution.calibration.geometry, &solution.path);
    }

    outcome
}
