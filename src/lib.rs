//! Conway's Game of Life on a finite rectangular grid, built for exact
//! reproducibility: a simulation is fully described by its configuration
//! (dimensions, cell size, wrap policy, random seed), and that configuration
//! round-trips through a compact text token that can be shared with another
//! party to reproduce the same run.

pub mod config;
pub mod data;
pub mod engine;
pub mod render;
