use crate::grid::Grid;
use tracing::debug;

/// Sign of a change to a cell's live-neighbor count.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Increase,
    Decrease,
}

impl From<bool> for Direction {
    /// The change caused by a neighbor becoming `state`.
    fn from(state: bool) -> Self {
        if state {
            Direction::Increase
        } else {
            Direction::Decrease
        }
    }
}

impl Direction {
    pub(crate) const fn delta(self) -> i8 {
        match self {
            Direction::Increase => 1,
            Direction::Decrease => -1,
        }
    }
}

/// Live-neighbor counts of every cell, kept up to date by deltas instead of recounting.
///
/// Counts are split into a committed part, valid for the last completed
/// generation, and a pending part collected while the next generation is
/// written. `merge` folds the pending part into the committed one.
pub trait NeighborCounts {
    /// Counts the neighbors of every cell of `grid` from scratch.
    fn seed(grid: &Grid) -> Self
    where
        Self: Sized;

    /// Width and height of the grid the counts were seeded from.
    fn size(&self) -> (usize, usize);

    /// The count as of the last `merge`.
    fn read_committed(&self, index: usize) -> u8;

    /// The committed count plus the pending delta.
    ///
    /// In the middle of a generation this mixes old and new states.
    fn read_live(&self, index: usize) -> u8;

    fn accumulate(&mut self, index: usize, direction: Direction);

    /// Applies all pending deltas and resets them to zero.
    fn merge(&mut self);
}

/// Dense [`NeighborCounts`] with one committed count and one pending delta per cell.
#[derive(Clone, Debug)]
pub struct DiffGrid {
    width: usize,
    height: usize,
    committed: Vec<u8>,
    pending: Vec<i8>,
}

impl NeighborCounts for DiffGrid {
    fn seed(grid: &Grid) -> Self {
        let (width, height) = (grid.width(), grid.height());
        let committed = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| grid.live_neighbors(x, y))
            .collect::<Vec<_>>();
        debug!(width, height, "seeded dense neighbor counts");
        DiffGrid {
            width,
            height,
            pending: vec![0; committed.len()],
            committed,
        }
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn read_committed(&self, index: usize) -> u8 {
        self.committed[index]
    }

    fn read_live(&self, index: usize) -> u8 {
        (self.committed[index] as i8 + self.pending[index]) as u8
    }

    fn accumulate(&mut self, index: usize, direction: Direction) {
        let pending = &mut self.pending[index];
        *pending += direction.delta();
        debug_assert!(pending.abs() <= 8, "Pending delta out of range.");
    }

    fn merge(&mut self) {
        self.committed
            .iter_mut()
            .zip(self.pending.iter_mut())
            .for_each(|(count, delta)| {
                let merged = *count as i8 + *delta;
                debug_assert!((0..=8).contains(&merged), "Merged count out of range.");
                *count = merged as u8;
                *delta = 0;
            });
    }
}
