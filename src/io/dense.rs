//! # Dense text format
//!
//! The number of rows and the number of columns, followed by all values in row major order. The
//! last row is the objective row, the last column the right hand side. Tokens are separated by any
//! whitespace, so the layout of the values over lines is free:
//!
//! ```text
//! 3 4
//!  1  1  1  4
//!  2  1  0  5
//! -3 -2  0  0
//! ```
use std::str::FromStr;

use crate::data::number_types::traits::Field;
use crate::data::tableau::Tableau;
use crate::io::error::{Dimension, ParseError};

/// Parse a tableau from the dense text format.
///
/// # Errors
///
/// If a dimension or value can't be read, if there are too few or too many values, or if a
/// dimension is zero.
pub fn parse<F: Field + FromStr>(text: &str) -> Result<Tableau<F>, ParseError> {
    let mut tokens = text.split_whitespace();

    let nr_rows = parse_dimension(tokens.next(), Dimension::Rows)?;
    let nr_columns = parse_dimension(tokens.next(), Dimension::Columns)?;
    let expected = nr_rows.checked_mul(nr_columns)
        .ok_or(ParseError::TooLarge { nr_rows, nr_columns })?;

    let mut data = Vec::with_capacity(expected);
    for (index, token) in tokens.by_ref().take(expected).enumerate() {
        let value: F = token.parse()
            .map_err(|_| ParseError::InvalidValue { index, token: token.to_string() })?;
        data.push(value);
    }
    if data.len() < expected {
        return Err(ParseError::MissingValues { expected, found: data.len() });
    }
    if let Some(token) = tokens.next() {
        return Err(ParseError::TrailingToken { expected, token: token.to_string() });
    }

    Ok(Tableau::new(nr_rows, nr_columns, data)?)
}

fn parse_dimension(token: Option<&str>, dimension: Dimension) -> Result<usize, ParseError> {
    let token = token.ok_or(ParseError::MissingDimension { dimension })?;

    token.parse()
        .map_err(|_| ParseError::InvalidDimension { dimension, token: token.to_string() })
}
