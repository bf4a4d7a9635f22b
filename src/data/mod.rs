//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to represent linear programs in memory.
pub mod number_types;
pub mod tableau;
