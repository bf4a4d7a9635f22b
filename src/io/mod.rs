//! # Reading and writing of tableaux
//!
//! This module provides reading of the dense text format, and rendering of tableaux for human
//! inspection. None of it is needed to run the Simplex method itself.
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::data::number_types::traits::Field;
use crate::data::tableau::Tableau;
use crate::io::error::ImportError;

pub mod dense;
pub mod error;
pub mod render;

/// File that is read when no other file is specified.
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// Import a tableau from a file in the dense text format.
///
/// # Errors
///
/// When the file cannot be found or read, or its contents are not a valid tableau.
pub fn import<F: Field + FromStr>(file_path: &Path) -> Result<Tableau<F>, ImportError> {
    let text = fs::read_to_string(file_path)
        .map_err(|source| ImportError::InputUnavailable { path: file_path.to_path_buf(), source })?;

    let tableau = dense::parse(&text)
        .map_err(|source| ImportError::Parse { path: file_path.to_path_buf(), source })?;
    debug!(
        "Read a {} x {} tableau from {:?}",
        tableau.nr_rows(), tableau.nr_columns(), file_path,
    );

    Ok(tableau)
}
