use crate::wrap::neighbors;
use rand::Rng;
use std::mem;

/// Alive/dead state of every cell of one generation, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with all cells dead.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "Grid dimensions must be positive, got {}x{}.",
            width,
            height
        );
        Grid {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Creates a grid where each cell is alive with probability 1/2.
    pub fn new_random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut grid = Self::new(width, height);
        grid.cells.iter_mut().for_each(|cell| *cell = rng.gen());
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Cell ({}, {}) is outside the {}x{} grid.",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) -> &mut Self {
        let index = self.index(x, y);
        self.cells[index] = state;
        self
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Exchanges the cell buffers of two grids of the same size without copying.
    pub fn swap(&mut self, other: &mut Grid) {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "Only grids of the same size can be swapped."
        );
        mem::swap(&mut self.cells, &mut other.cells);
    }

    /// Counts the live cells among the 8 toroidal neighbors of `(x, y)` by
    /// looking at each of them.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let _ = self.index(x, y);
        neighbors(x, y, self.width, self.height)
            .filter(|&i| self.cells[i])
            .count() as u8
    }
}
