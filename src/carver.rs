use rand::prelude::*;

use crate::error::MazeError;
use crate::grid::{Direction, Grid};

/// One unit of forward progress: a newly visited cell and the wall pair
/// cleared against the cell it was entered from. The root event carries
/// neither a predecessor nor a cleared pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent {
    pub cell: (usize, usize),
    pub from: Option<(usize, usize)>,
    pub cleared: Option<(Direction, Direction)>,
}

/// Randomized recursive backtracker over a single grid, driven one step at
/// a time. The walk keeps its own path stack instead of recursing, so a
/// caller can suspend between steps or drop the carver mid-build with no
/// unwinding to worry about.
pub struct Carver {
    stack: Vec<(usize, usize)>,
    rng: StdRng,
    entry: (usize, usize),
    started: bool,
    done: bool,
}

impl Carver {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            stack: Vec::new(),
            rng,
            entry: (0, 0),
            started: false,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances the walk by one forward visit and reports it. Cells with no
    /// unvisited neighbor are popped off the path silently inside the call;
    /// an empty stack after that unwind means every cell has been reached
    /// and the carver reports `None` from here on.
    pub fn step(&mut self, grid: &mut Grid) -> Result<Option<StepEvent>, MazeError> {
        if self.done {
            return Ok(None);
        }

        if !self.started {
            self.started = true;
            grid.visit(self.entry.0, self.entry.1)?;
            self.stack.push(self.entry);
            return Ok(Some(StepEvent {
                cell: self.entry,
                from: None,
                cleared: None,
            }));
        }

        while let Some(&current) = self.stack.last() {
            let neighbors = grid.unvisited_neighbors(current.0, current.1);
            if neighbors.is_empty() {
                // backtrack
                self.stack.pop();
                continue;
            }

            // uniform pick keeps the maze unbiased; no direction ordering
            let next = neighbors[self.rng.gen_range(0, neighbors.len())];

            let cleared = grid.clear_wall_between(current, next)?;
            grid.visit(next.0, next.1)?;
            self.stack.push(next);

            return Ok(Some(StepEvent {
                cell: next,
                from: Some(current),
                cleared: Some(cleared),
            }));
        }

        self.done = true;
        Ok(None)
    }
}
