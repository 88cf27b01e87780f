use crate::{
    counts::NeighborCounts,
    grid::Grid,
    rule::next_state,
    wrap::neighbors,
};

/// Writes the generation after `old` into `new`.
///
/// Every cell is decided from the committed counts of `old`. Each cell that
/// flips records a ±1 delta for its 8 neighbors, and the deltas are merged
/// once the whole grid has been written, so `counts` describes `new` on
/// return.
///
/// # Panics
///
/// Panics if `old`, `new` and `counts` do not all have the same size.
pub fn step<C: NeighborCounts>(old: &Grid, new: &mut Grid, counts: &mut C) {
    let (width, height) = (old.width(), old.height());
    assert_eq!(
        (width, height),
        (new.width(), new.height()),
        "Both generations must have the same size."
    );
    assert_eq!(
        (width, height),
        counts.size(),
        "Neighbor counts were seeded from a grid of another size."
    );

    for y in 0..height {
        for x in 0..width {
            let live_neighbors = counts.read_committed(y * width + x);
            let old_state = old.get(x, y);
            let new_state = next_state(old_state, live_neighbors);
            new.set(x, y, new_state);

            if new_state != old_state {
                for neighbor in neighbors(x, y, width, height) {
                    counts.accumulate(neighbor, new_state.into());
                }
            }
        }
    }

    counts.merge();
}
