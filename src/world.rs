use crate::{
    counts::{DiffGrid, NeighborCounts},
    evolve,
    grid::Grid,
    wrap::neighbors,
};

/// A toroidal Game of Life with incrementally maintained neighbor counts.
///
/// Holds two grid buffers that trade places every generation.
#[derive(Clone, Debug)]
pub struct World<C = DiffGrid> {
    current: Grid,
    next: Grid,
    counts: C,
    generation: u64,
}

impl World {
    pub fn new(grid: Grid) -> Self {
        Self::with_counts(grid)
    }
}

impl<C: NeighborCounts> World<C> {
    /// Starts from `grid`, using `C` to keep the neighbor counts.
    pub fn with_counts(grid: Grid) -> Self {
        let counts = C::seed(&grid);
        let next = Grid::new(grid.width(), grid.height());
        World {
            current: grid,
            next,
            counts,
            generation: 0,
        }
    }

    pub fn step(&mut self) {
        evolve::step(&self.current, &mut self.next, &mut self.counts);
        self.current.swap(&mut self.next);
        self.generation += 1;
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn get_cell(&self, x: usize, y: usize) -> bool {
        self.current.get(x, y)
    }

    /// Changes a cell between generations, keeping the neighbor counts exact.
    pub fn set_cell(&mut self, x: usize, y: usize, state: bool) -> &mut Self {
        if self.current.get(x, y) != state {
            self.current.set(x, y, state);
            for neighbor in neighbors(x, y, self.width(), self.height()) {
                self.counts.accumulate(neighbor, state.into());
            }
            self.counts.merge();
        }
        self
    }

    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.counts.read_live(self.current.index(x, y))
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    pub fn get_generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparse::SparseDiffGrid;
    use rand::{rngs::StdRng, SeedableRng};

    fn assert_counts_exact<C: NeighborCounts>(world: &World<C>) {
        for y in 0..world.height() {
            for x in 0..world.width() {
                assert_eq!(world.live_neighbors(x, y), world.grid().live_neighbors(x, y));
            }
        }
    }

    #[test]
    fn test_step() {
        let grid = Grid::new_random(20, 15, &mut StdRng::seed_from_u64(11));
        let mut world = World::new(grid.clone());
        let mut sparse = World::<SparseDiffGrid>::with_counts(grid);
        for _ in 0..40 {
            world.step();
            sparse.step();
            assert_eq!(world.grid(), sparse.grid());
        }
        assert_eq!(world.get_generation(), 40);
        assert_counts_exact(&world);
        assert_counts_exact(&sparse);
    }

    #[test]
    fn test_set_cell() {
        let mut world = World::new(Grid::new(6, 6));
        world.set_cell(1, 2, true).set_cell(2, 2, true).set_cell(3, 2, true);
        assert_eq!(world.population(), 3);
        assert_eq!(world.live_neighbors(2, 1), 3);
        assert_counts_exact(&world);

        world.set_cell(2, 2, false).set_cell(2, 2, false);
        assert_eq!(world.population(), 2);
        assert_eq!(world.live_neighbors(2, 1), 2);
        assert_counts_exact(&world);
    }

    #[test]
    fn test_blinker_period() {
        let mut world = World::new(Grid::new(5, 5));
        world.set_cell(1, 2, true).set_cell(2, 2, true).set_cell(3, 2, true);
        let start = world.grid().clone();
        world.step();
        assert_eq!(world.get_cell(2, 1), true);
        assert_eq!(world.get_cell(1, 2), false);
        assert_ne!(world.grid(), &start);
        world.step();
        assert_eq!(world.grid(), &start);
    }
}
