//! # A tableau simplex solver
//!
//! Linear programs in tableau form are solved using the primal Simplex method, pivoting directly
//! on a dense matrix. The tableau consists of the constraint rows followed by the objective row,
//! with the right hand side in the last column. Once optimal, the last column holds the solution.
//!
//! ```
//! use tableau_simplex::algorithm::simplex::optimize;
//! use tableau_simplex::data::tableau::Tableau;
//!
//! let tableau = Tableau::from_rows(vec![
//!     vec![1f64, 1f64, 1f64, 4f64],
//!     vec![2f64, 1f64, 0f64, 5f64],
//!     vec![-3f64, -2f64, 0f64, 0f64],
//! ]).unwrap();
//!
//! let optimal = optimize(tableau).unwrap();
//! assert_eq!(optimal.objective_value(), 9f64);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
