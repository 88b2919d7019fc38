#![warn(missing_docs)]
//! Utilities for building and solving edge-walled mazes

pub mod agent;
pub mod generator;
pub mod grid;
pub mod solver;
pub mod standard_mazes;
