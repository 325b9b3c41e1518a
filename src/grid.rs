pub const MIN_DIM: usize = 10;
pub const MAX_DIM: usize = 250;

use log::warn;

use crate::error::MazeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit offset on the (x, z) plane. North is +z.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Direction of travel from `a` to `b`, or `None` when the two
    /// coordinates are not grid-adjacent.
    pub fn between(a: (usize, usize), b: (usize, usize)) -> Option<Direction> {
        let dx = b.0 as isize - a.0 as isize;
        let dz = b.1 as isize - a.1 as isize;

        match (dx, dz) {
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            (0, 1) => Some(Direction::North),
            (0, -1) => Some(Direction::South),
            _ => None,
        }
    }
}

/// Per-cell state: whether the walk has entered it, and which of its four
/// walls are still standing. `visited` never reverts and walls are only
/// ever removed, so both are monotonic over a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    visited: bool,
    walls: [bool; 4],
}

impl Cell {
    fn new() -> Self {
        Self {
            visited: false,
            walls: [true; 4],
        }
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir as usize]
    }
}

pub struct Grid {
    width: usize,
    height: usize,

    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width < MIN_DIM || width > MAX_DIM || height < MIN_DIM || height > MAX_DIM {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        Ok(Self {
            cells: vec![Cell::new(); width * height],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, z: usize) -> bool {
        x < self.width && z < self.height
    }

    #[inline]
    fn index_of(&self, x: usize, z: usize) -> Result<usize, MazeError> {
        if !self.in_bounds(x, z) {
            return Err(MazeError::OutOfBounds { x, z });
        }
        Ok((self.width * z) + x)
    }

    pub fn cell_at(&self, x: usize, z: usize) -> Result<&Cell, MazeError> {
        let index = self.index_of(x, z)?;
        Ok(&self.cells[index])
    }

    /// Marks a cell visited. Revisiting is a no-op rather than an error,
    /// but a correct walk never does it, so it is logged.
    pub fn visit(&mut self, x: usize, z: usize) -> Result<(), MazeError> {
        let index = self.index_of(x, z)?;
        let cell = &mut self.cells[index];

        if cell.visited {
            warn!("cell ({}, {}) visited twice", x, z);
            return Ok(());
        }
        cell.visited = true;
        Ok(())
    }

    /// Removes the matching wall on each side of two adjacent cells and
    /// reports which pair went down, `a`'s side first.
    pub fn clear_wall_between(
        &mut self,
        a: (usize, usize),
        b: (usize, usize),
    ) -> Result<(Direction, Direction), MazeError> {
        let dir = Direction::between(a, b).ok_or(MazeError::NotAdjacent { a, b })?;

        let index_a = self.index_of(a.0, a.1)?;
        let index_b = self.index_of(b.0, b.1)?;

        self.cells[index_a].walls[dir as usize] = false;
        self.cells[index_b].walls[(-dir) as usize] = false;

        Ok((dir, -dir))
    }

    pub fn unvisited_neighbors(&self, x: usize, z: usize) -> Vec<(usize, usize)> {
        let mut neighbors = Vec::with_capacity(4);

        for dir in Direction::ALL.iter() {
            let (dx, dz) = dir.delta();
            let nx = x as isize + dx;
            let nz = z as isize + dz;
            if nx < 0 || nz < 0 {
                continue;
            }

            let (nx, nz) = (nx as usize, nz as usize);
            if self.in_bounds(nx, nz) && !self.cells[(self.width * nz) + nx].visited {
                neighbors.push((nx, nz));
            }
        }

        neighbors
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }
}

#[cfg(test)]
mod test_grid {
    use super::*;

    #[test]
    fn rejects_out_of_range_dims() {
        assert_eq!(
            Grid::new(5, 5).err(),
            Some(MazeError::InvalidDimensions { width: 5, height: 5 })
        );
        assert_eq!(
            Grid::new(10, 251).err(),
            Some(MazeError::InvalidDimensions {
                width: 10,
                height: 251
            })
        );
        assert!(Grid::new(10, 10).is_ok());
        assert!(Grid::new(250, 250).is_ok());
    }

    #[test]
    fn fresh_grid_is_unvisited_and_walled() {
        let grid = Grid::new(10, 12).unwrap();

        for x in 0..10 {
            for z in 0..12 {
                let cell = grid.cell_at(x, z).unwrap();
                assert!(!cell.is_visited());
                for dir in Direction::ALL.iter() {
                    assert!(cell.has_wall(*dir));
                }
            }
        }
        assert_eq!(grid.visited_count(), 0);
    }

    #[test]
    fn cell_at_out_of_bounds() {
        let grid = Grid::new(10, 10).unwrap();

        assert_eq!(
            grid.cell_at(10, 0).err(),
            Some(MazeError::OutOfBounds { x: 10, z: 0 })
        );
        assert_eq!(
            grid.cell_at(0, 10).err(),
            Some(MazeError::OutOfBounds { x: 0, z: 10 })
        );
    }

    #[test]
    fn visit_is_idempotent() {
        let mut grid = Grid::new(10, 10).unwrap();

        grid.visit(3, 4).unwrap();
        assert!(grid.cell_at(3, 4).unwrap().is_visited());

        grid.visit(3, 4).unwrap();
        assert_eq!(grid.visited_count(), 1);
    }

    #[test]
    fn clears_matching_wall_pair() {
        let mut grid = Grid::new(10, 10).unwrap();

        let pair = grid.clear_wall_between((2, 2), (3, 2)).unwrap();
        assert_eq!(pair, (Direction::East, Direction::West));

        assert!(!grid.cell_at(2, 2).unwrap().has_wall(Direction::East));
        assert!(!grid.cell_at(3, 2).unwrap().has_wall(Direction::West));

        // the other walls of both cells still stand
        assert!(grid.cell_at(2, 2).unwrap().has_wall(Direction::West));
        assert!(grid.cell_at(2, 2).unwrap().has_wall(Direction::North));
        assert!(grid.cell_at(2, 2).unwrap().has_wall(Direction::South));
        assert!(grid.cell_at(3, 2).unwrap().has_wall(Direction::East));

        let pair = grid.clear_wall_between((5, 5), (5, 4)).unwrap();
        assert_eq!(pair, (Direction::South, Direction::North));
    }

    #[test]
    fn rejects_non_adjacent_pairs() {
        let mut grid = Grid::new(10, 10).unwrap();

        assert_eq!(
            grid.clear_wall_between((0, 0), (2, 0)).err(),
            Some(MazeError::NotAdjacent {
                a: (0, 0),
                b: (2, 0)
            })
        );
        assert_eq!(
            grid.clear_wall_between((0, 0), (1, 1)).err(),
            Some(MazeError::NotAdjacent {
                a: (0, 0),
                b: (1, 1)
            })
        );
        assert_eq!(
            grid.clear_wall_between((4, 4), (4, 4)).err(),
            Some(MazeError::NotAdjacent {
                a: (4, 4),
                b: (4, 4)
            })
        );
    }

    #[test]
    fn neighbor_counts_at_corner_edge_interior() {
        let mut grid = Grid::new(10, 10).unwrap();

        assert_eq!(grid.unvisited_neighbors(0, 0).len(), 2);
        assert_eq!(grid.unvisited_neighbors(5, 0).len(), 3);
        assert_eq!(grid.unvisited_neighbors(5, 5).len(), 4);
        assert_eq!(grid.unvisited_neighbors(9, 9).len(), 2);

        grid.visit(5, 6).unwrap();
        assert_eq!(grid.unvisited_neighbors(5, 5).len(), 3);
    }
}
