use std::iter::once;

use log::{debug, trace};

use crate::{
    grid::{Cell, CellGraph, CellStorage, Direction},
    pixel::PixelBuffer,
};

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct PathResult {
    /// every cell from start to goal, both included
    pub path: Vec<Cell>,
    pub start: Cell,
    pub goal: Cell,
}

impl PathResult {
    /// Consecutive pairs of cells along the path, from start to goal
    pub fn edges(&self) -> impl DoubleEndedIterator<Item = (Cell, Cell)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverState {
    Computing,
    NoPathFound,
    PathFound(PathResult),
}

impl SolverState {
    pub fn is_done(&self) -> bool {
        !matches!(self, SolverState::Computing)
    }
}

/// A cell on the active branch and the index of the next direction to try from it
#[derive(Debug)]
struct Frame {
    cell: Cell,
    next: usize,
}

/// Depth first search with backtracking over a [`CellGraph`].
///
/// The search keeps its own stack of frames instead of recursing, so the depth of the maze is
/// only limited by memory. Directions are tried in the order of [`Direction::ALL`], which makes
/// the returned path deterministic for a given image.
#[derive(Debug)]
pub struct MazeSolver {
    start: Cell,
    /// true for cells on the active branch only
    visited: CellStorage<bool>,
    stack: Vec<Frame>,
    started: bool,
    state: SolverState,
}

impl MazeSolver {
    pub fn new(start: Cell, visited: CellStorage<bool>) -> Self {
        Self {
            start,
            visited,
            stack: Vec::new(),
            started: false,
            state: SolverState::Computing,
        }
    }

    pub fn finish<B: PixelBuffer>(
        mut self,
        graph: &mut CellGraph<B>,
    ) -> (SolverState, CellStorage<bool>) {
        loop {
            match self.step(graph) {
                SolverState::Computing => {}
                s => {
                    match &s {
                        SolverState::PathFound(result) => debug!(
                            "reached {} from {} over {} cells",
                            result.goal,
                            result.start,
                            result.path.len()
                        ),
                        _ => debug!("no path from {}", self.start),
                    }
                    trace!("visited cells:\n{}", self.visited);
                    return (s, self.visited);
                }
            }
        }
    }

    /// Tries one direction of the cell on top of the stack, or backtracks if all of them failed
    pub fn step<B: PixelBuffer>(&mut self, graph: &mut CellGraph<B>) -> SolverState {
        if self.state.is_done() {
            return self.state.clone();
        }

        if !self.started {
            self.started = true;
            self.enter(graph, self.start, Some(self.start));
            if self.stack.is_empty() && !self.state.is_done() {
                self.state = SolverState::NoPathFound;
            }
            return self.state.clone();
        }

        let Some(frame) = self.stack.last_mut() else {
            self.state = SolverState::NoPathFound;
            return self.state.clone();
        };

        match Direction::ALL.get(frame.next) {
            Some(&direction) => {
                frame.next += 1;
                let from = frame.cell;
                self.enter(graph, from, from.step(direction));
            }
            None => {
                // dead end, take the cell off the active branch
                if let Some(frame) = self.stack.pop() {
                    *self.visited.get_mut(frame.cell) = false;
                }
                if self.stack.is_empty() {
                    self.state = SolverState::NoPathFound;
                }
            }
        }

        self.state.clone()
    }

    /// Moves from `from` into `to` unless it is outside the grid, already on the branch or
    /// behind a wall. Walls are not checked for the start cell, where `from == to`.
    fn enter<B: PixelBuffer>(&mut self, graph: &mut CellGraph<B>, from: Cell, to: Option<Cell>) {
        let Some(to) = to.filter(|&c| graph.is_valid(c)) else {
            return;
        };

        if self.visited.get(to) {
            return;
        }

        if from != to && graph.has_wall_between(from, to) {
            return;
        }

        *self.visited.get_mut(to) = true;

        if graph.is_end(to) {
            let path: Vec<Cell> = self.stack.iter().map(|f| f.cell).chain(once(to)).collect();
            self.state = SolverState::PathFound(PathResult {
                path,
                start: self.start,
                goal: to,
            });
            return;
        }

        self.stack.push(Frame { cell: to, next: 0 });
    }

    pub fn state(&self) -> &SolverState {
        &self.state
    }

    pub fn get_visited(&self) -> &CellStorage<bool> {
        &self.visited
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    /// Number of cells on the active branch
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
