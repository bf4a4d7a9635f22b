//! # Traits
//!
//! The simplex method needs an ordered field. Floating point numbers only approximate one: the
//! contracts that these traits imply are not kept precisely, as values are rounded after every
//! operation. No tolerances are applied by the algorithm itself.
use std::fmt::{Debug, Display};

use num_traits::Float;

/// Scalar type of a tableau.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Field: Float + Debug + Display + Send + Sync + 'static {
    /// Whether two values are within `epsilon` of each other.
    ///
    /// Only used to interpret a tableau after the fact, e.g. to recognize unit columns, never to
    /// make pivoting decisions.
    fn is_close_to(self, other: Self, epsilon: Self) -> bool {
        (self - other).abs() <= epsilon
    }
}
impl<T: Float + Debug + Display + Send + Sync + 'static> Field for T {
}
