//! # Number types
//!
//! The tableau and the algorithms working on it are written against a small trait describing the
//! scalars they need, rather than against `f64` directly. In practice this will be `f64` or `f32`.
pub mod traits;
