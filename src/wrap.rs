/// Offsets `(dx, dy)` of the 8 cells in the Moore neighborhood.
pub(crate) const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Wraps a coordinate that is at most one step outside `0..dimension`
/// back onto the torus.
///
/// Only unit offsets are handled: `-1` maps to `dimension - 1` and
/// `dimension` maps to `0`. This is not a general modulo.
pub const fn wrap(n: isize, dimension: usize) -> usize {
    debug_assert!(dimension >= 1);
    if n < 0 {
        dimension - 1
    } else if n as usize > dimension - 1 {
        0
    } else {
        n as usize
    }
}

/// Linear indices of the 8 toroidal neighbors of `(x, y)`, in the order of [`OFFSETS`].
///
/// On grids narrower or shorter than 3 cells the same index can appear more than once.
pub(crate) fn neighbors(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = usize> {
    OFFSETS.iter().map(move |&(dx, dy)| {
        wrap(y as isize + dy, height) * width + wrap(x as isize + dx, width)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(5, 5), 0);
        for k in 0..5 {
            assert_eq!(wrap(k, 5), k as usize);
        }
        assert_eq!(wrap(-1, 1), 0);
        assert_eq!(wrap(1, 1), 0);
        assert_eq!(wrap(0, 1), 0);
    }

    #[test]
    fn test_neighbors() {
        let corner: Vec<_> = neighbors(0, 0, 4, 3).collect();
        assert_eq!(corner, vec![11, 8, 9, 3, 1, 7, 4, 5]);
        let single: Vec<_> = neighbors(0, 0, 1, 1).collect();
        assert_eq!(single, vec![0; 8]);
        let strip: Vec<_> = neighbors(1, 0, 2, 1).collect();
        assert_eq!(strip, vec![0, 1, 0, 0, 0, 0, 1, 0]);
    }
}
