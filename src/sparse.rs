use crate::{
    counts::{Direction, NeighborCounts},
    grid::Grid,
    wrap::neighbors,
};
use rustc_hash::FxHashMap;
use tracing::debug;

/// [`NeighborCounts`] for mostly empty grids.
///
/// Only cells with a non-zero committed count, and cells touched since the
/// last merge, take up space. Merging costs time proportional to the
/// number of touched cells rather than to the area of the grid.
#[derive(Clone, Debug)]
pub struct SparseDiffGrid {
    width: usize,
    height: usize,
    committed: FxHashMap<usize, u8>,
    pending: FxHashMap<usize, i8>,
}

impl SparseDiffGrid {
    /// Number of cells with at least one live neighbor.
    pub fn occupied(&self) -> usize {
        self.committed.len()
    }
}

impl NeighborCounts for SparseDiffGrid {
    fn seed(grid: &Grid) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let mut committed = FxHashMap::default();
        for (index, _) in grid.cells().iter().enumerate().filter(|&(_, &cell)| cell) {
            for neighbor in neighbors(index % width, index / width, width, height) {
                *committed.entry(neighbor).or_insert(0) += 1;
            }
        }
        debug!(
            width,
            height,
            occupied = committed.len(),
            "seeded sparse neighbor counts"
        );
        SparseDiffGrid {
            width,
            height,
            committed,
            pending: FxHashMap::default(),
        }
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn read_committed(&self, index: usize) -> u8 {
        self.committed.get(&index).copied().unwrap_or(0)
    }

    fn read_live(&self, index: usize) -> u8 {
        let delta = self.pending.get(&index).copied().unwrap_or(0);
        (self.read_committed(index) as i8 + delta) as u8
    }

    fn accumulate(&mut self, index: usize, direction: Direction) {
        let pending = self.pending.entry(index).or_insert(0);
        *pending += direction.delta();
        debug_assert!(pending.abs() <= 8, "Pending delta out of range.");
    }

    fn merge(&mut self) {
        for (index, delta) in self.pending.drain() {
            let merged = self.committed.get(&index).copied().unwrap_or(0) as i8 + delta;
            debug_assert!((0..=8).contains(&merged), "Merged count out of range.");
            if merged == 0 {
                self.committed.remove(&index);
            } else {
                self.committed.insert(index, merged as u8);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counts::DiffGrid;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_matches_dense() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(12, 8);
        for _ in 0..20 {
            grid.set(rng.gen_range(0..12), rng.gen_range(0..8), true);
        }
        let mut sparse = SparseDiffGrid::seed(&grid);
        let mut dense = DiffGrid::seed(&grid);
        for index in 0..96 {
            assert_eq!(sparse.read_committed(index), dense.read_committed(index));
        }

        for _ in 0..30 {
            let index = rng.gen_range(0..96);
            let direction = if dense.read_live(index) == 0 {
                Direction::Increase
            } else {
                Direction::Decrease
            };
            sparse.accumulate(index, direction);
            dense.accumulate(index, direction);
            assert_eq!(sparse.read_live(index), dense.read_live(index));
        }
        sparse.merge();
        dense.merge();
        assert!(sparse.pending.is_empty());
        for index in 0..96 {
            assert_eq!(sparse.read_committed(index), dense.read_committed(index));
        }
    }

    #[test]
    fn test_empty_cells_not_stored() {
        let mut grid = Grid::new(10, 10);
        grid.set(5, 5, true);
        let mut counts = SparseDiffGrid::seed(&grid);
        assert_eq!(counts.occupied(), 8);
        assert_eq!(counts.size(), (10, 10));

        neighbors(5, 5, 10, 10).for_each(|i| counts.accumulate(i, Direction::Decrease));
        counts.merge();
        assert_eq!(counts.occupied(), 0);
        assert_eq!(counts.read_committed(44), 0);
    }
}
