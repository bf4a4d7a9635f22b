//! # Algorithms
pub mod simplex;
