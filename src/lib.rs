#![allow(clippy::bool_assert_comparison)]

mod counts;
mod evolve;
mod grid;
mod read;
mod rule;
mod sparse;
mod world;
mod wrap;

pub use ca_formats;
pub use counts::{DiffGrid, Direction, NeighborCounts};
pub use evolve::step;
pub use grid::Grid;
pub use read::ReadError;
pub use rule::{is_life, next_state};
pub use sparse::SparseDiffGrid;
pub use world::World;
pub use wrap::wrap;
