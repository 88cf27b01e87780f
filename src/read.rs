use crate::{grid::Grid, rule::is_life};
use ca_formats::{
    rle::{Error as RleError, Rle},
    Input,
};
use std::convert::TryFrom;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Rle(#[from] RleError),
    #[error("Unsupported rule {0}, only B3/S23 can be simulated.")]
    UnsupportedRule(String),
    #[error("A {pattern_width}x{pattern_height} pattern does not fit in a {width}x{height} grid.")]
    TooLarge {
        pattern_width: u64,
        pattern_height: u64,
        width: usize,
        height: usize,
    },
    #[error("Pattern cell ({0}, {1}) falls outside the grid.")]
    OutOfBounds(i64, i64),
}

impl Grid {
    /// Builds a `width`x`height` grid with the RLE pattern in its center.
    ///
    /// The pattern size comes from the header line, or from the bounding box
    /// of its cells when there is none. A pattern without a rule is taken to
    /// be B3/S23.
    pub fn from_rle<I: Input>(rle: Rle<I>, width: usize, height: usize) -> Result<Self, ReadError> {
        let header_size = match rle.header_data() {
            Some(header) => {
                if let Some(rulestring) = header.rule.as_deref() {
                    if !is_life(rulestring).unwrap_or(false) {
                        return Err(ReadError::UnsupportedRule(rulestring.to_string()));
                    }
                }
                Some((header.x, header.y))
            }
            None => None,
        };
        let cells = rle
            .map(|cell| cell.map(|cell| cell.position))
            .collect::<Result<Vec<_>, _>>()?;
        let ((origin_x, origin_y), (pattern_width, pattern_height)) = match header_size {
            Some(size) => ((0, 0), size),
            None => bounding_box(&cells),
        };
        if pattern_width > width as u64 || pattern_height > height as u64 {
            return Err(ReadError::TooLarge {
                pattern_width,
                pattern_height,
                width,
                height,
            });
        }

        let left = (width as u64 - pattern_width) / 2;
        let top = (height as u64 - pattern_height) / 2;
        let place = |n: i64, offset: u64, dimension: usize| {
            u64::try_from(n)
                .ok()
                .map(|n| n + offset)
                .filter(|&n| n < dimension as u64)
        };
        let mut grid = Self::new(width, height);
        for (x, y) in cells {
            match (place(x - origin_x, left, width), place(y - origin_y, top, height)) {
                (Some(x), Some(y)) => grid.set(x as usize, y as usize, true),
                _ => return Err(ReadError::OutOfBounds(x, y)),
            };
        }
        debug!(
            width,
            height,
            population = grid.population(),
            "loaded RLE pattern"
        );
        Ok(grid)
    }
}

/// Top-left corner and size of the smallest rectangle holding all `cells`.
fn bounding_box(cells: &[(i64, i64)]) -> ((i64, i64), (u64, u64)) {
    let mut cells = cells.iter();
    let &(x, y) = match cells.next() {
        Some(first) => first,
        None => return ((0, 0), (0, 0)),
    };
    let (left, right, top, bottom) = cells.fold((x, x, y, y), |(l, r, t, b), &(x, y)| {
        (l.min(x), r.max(x), t.min(y), b.max(y))
    });
    (
        (left, top),
        ((right - left + 1) as u64, (bottom - top + 1) as u64),
    )
}
