use thiserror::Error;

use crate::grid::{MAX_DIM, MIN_DIM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("grid dimensions {width}x{height} outside [{}, {}]", MIN_DIM, MAX_DIM)]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell ({x}, {z}) outside grid extents")]
    OutOfBounds { x: usize, z: usize },

    #[error("cells {a:?} and {b:?} are not grid-adjacent")]
    NotAdjacent { a: (usize, usize), b: (usize, usize) },
}
