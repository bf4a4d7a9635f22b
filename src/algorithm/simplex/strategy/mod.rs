//! # Strategies for the Simplex algorithm
//!
//! Module containing the decisions made during a single pivot: which column enters, and which row
//! leaves.
pub mod pivot_rule;
