//! # Error reporting for reading of tableau files
//!
//! A collection of enums describing any problems encountered during reading and parsing.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::data::tableau::ShapeError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read input file {path:?}")]
    InputUnavailable {
        #[allow(missing_docs)]
        path: PathBuf,
        #[allow(missing_docs)]
        source: io::Error,
    },
    /// Contents of the file could not be parsed into a tableau.
    #[error("could not parse input file {path:?}")]
    Parse {
        #[allow(missing_docs)]
        path: PathBuf,
        #[allow(missing_docs)]
        source: ParseError,
    },
}

/// A `ParseError` represents all errors encountered during parsing of the text format.
///
/// Values are counted from zero, in row major order, after the two dimensions.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// The text ended before the dimensions were read.
    #[error("missing the number of {dimension}")]
    MissingDimension {
        #[allow(missing_docs)]
        dimension: Dimension,
    },
    /// A dimension is not an unsigned integer.
    #[error("could not read the number of {dimension} from \"{token}\"")]
    InvalidDimension {
        #[allow(missing_docs)]
        dimension: Dimension,
        #[allow(missing_docs)]
        token: String,
    },
    /// The dimensions multiply to a number of values that can't be stored.
    #[error("a tableau of {nr_rows} by {nr_columns} values is too large")]
    TooLarge {
        #[allow(missing_docs)]
        nr_rows: usize,
        #[allow(missing_docs)]
        nr_columns: usize,
    },
    /// A value is not a number.
    #[error("could not read value {index} from \"{token}\"")]
    InvalidValue {
        #[allow(missing_docs)]
        index: usize,
        #[allow(missing_docs)]
        token: String,
    },
    /// The text ended before all values were read.
    #[error("expected {expected} values, found {found}")]
    MissingValues {
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
    /// There is text after the last value.
    #[error("unexpected \"{token}\" after the last of {expected} values")]
    TrailingToken {
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        token: String,
    },
    /// The dimensions don't describe a valid tableau.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// The two dimensions at the start of the text format.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Dimension {
    #[allow(missing_docs)]
    Rows,
    #[allow(missing_docs)]
    Columns,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Rows => f.write_str("rows"),
            Dimension::Columns => f.write_str("columns"),
        }
    }
}
