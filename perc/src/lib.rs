#![forbid(unsafe_code)]

////////////////////////////////////////////////////////////////////////////////

mod error;
mod grid;
mod monte_carlo;
pub mod stats;
mod union_find;

pub use error::{Error, Result};
pub use grid::{Percolation, Site};
pub use monte_carlo::{percolate, run_trial, PercolationStats, CONFIDENCE_95};
pub use union_find::{Forest, UnionFind};
