//! # Dense tableau
//!
//! A linear program in tableau form: the constraint rows, followed by a single objective row. The
//! last column holds the right hand side. All values are stored row major in a single `Vec` of
//! which the length is fixed at creation.
use std::ops::Index;
use std::slice::ChunksExact;

use thiserror::Error;

use crate::data::number_types::traits::Field;

/// Tableau with dimensions that are fixed at creation.
///
/// Row `nr_rows() - 1` is the objective row, containing the negated reduced costs. Column
/// `nr_columns() - 1` is the right hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau<F> {
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
}

/// A `ShapeError` is created when values can't be arranged in a tableau.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ShapeError {
    /// A tableau needs at least the objective row and the right hand side column.
    #[error("a tableau needs at least one row and one column, got {nr_rows} x {nr_columns}")]
    Empty {
        #[allow(missing_docs)]
        nr_rows: usize,
        #[allow(missing_docs)]
        nr_columns: usize,
    },
    /// The dimensions multiply to a number of values that can't be stored.
    #[error("a tableau of {nr_rows} by {nr_columns} values is too large")]
    TooLarge {
        #[allow(missing_docs)]
        nr_rows: usize,
        #[allow(missing_docs)]
        nr_columns: usize,
    },
    /// Number of values doesn't match the dimensions.
    #[error("expected {expected} values, found {found}")]
    DataLength {
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
    /// Rows provided one by one are not all of the same length.
    #[error("row {row} has {found} values, while the first row has {expected}")]
    RaggedRow {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        found: usize,
    },
}

impl<F: Field> Tableau<F> {
    /// Create a tableau from row major data.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of constraints plus one, for the objective row.
    /// * `nr_columns`: Number of variables plus one, for the right hand side.
    /// * `data`: `nr_rows * nr_columns` values, row by row.
    ///
    /// # Errors
    ///
    /// If either dimension is zero, their product overflows, or the data length doesn't match.
    pub fn new(nr_rows: usize, nr_columns: usize, data: Vec<F>) -> Result<Self, ShapeError> {
        if nr_rows == 0 || nr_columns == 0 {
            return Err(ShapeError::Empty { nr_rows, nr_columns });
        }
        let expected = nr_rows.checked_mul(nr_columns)
            .ok_or(ShapeError::TooLarge { nr_rows, nr_columns })?;
        if data.len() != expected {
            return Err(ShapeError::DataLength { expected, found: data.len() });
        }

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Create a tableau from a list of rows, the last of which is the objective row.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self, ShapeError> {
        let nr_rows = rows.len();
        let nr_columns = rows.first().map_or(0, Vec::len);
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, values)| values.len() != nr_columns) {
            return Err(ShapeError::RaggedRow { row, expected: nr_columns, found: values.len() });
        }

        Self::new(nr_rows, nr_columns, rows.into_iter().flatten().collect())
    }

    /// Number of rows, including the objective row.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns, including the right hand side.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Index of the objective row, which is always the last row.
    pub fn objective_row_index(&self) -> usize {
        self.nr_rows - 1
    }

    /// Index of the right hand side column, which is always the last column.
    pub fn rhs_column_index(&self) -> usize {
        self.nr_columns - 1
    }

    /// Number of constraint rows, that is, all rows except the objective row.
    pub fn nr_constraints(&self) -> usize {
        self.nr_rows - 1
    }

    /// Number of variable columns, that is, all columns except the right hand side.
    pub fn nr_variables(&self) -> usize {
        self.nr_columns - 1
    }

    /// Value at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i * self.nr_columns + j]
    }

    /// All values in row `i`, right hand side included.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        let start = i * self.nr_columns;
        &self.data[start..start + self.nr_columns]
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, F> {
        self.data.chunks_exact(self.nr_columns)
    }

    /// Iterate over the values in column `j`, the objective row included.
    pub fn column(&self, j: usize) -> impl Iterator<Item = F> + '_ {
        debug_assert!(j < self.nr_columns);

        self.rows().map(move |row| row[j])
    }

    /// Objective row coefficients of the variables, so without the right hand side.
    pub fn objective_row(&self) -> &[F] {
        &self.row(self.objective_row_index())[..self.nr_variables()]
    }

    /// Right hand side value of row `i`.
    pub fn rhs(&self, i: usize) -> F {
        self.get(i, self.rhs_column_index())
    }

    /// Value of the objective function in the current basic solution.
    pub fn objective_value(&self) -> F {
        self.rhs(self.objective_row_index())
    }

    /// Row in which variable `j` is basic, if it is.
    ///
    /// A variable is basic when its column is a unit vector: one in a constraint row, zero
    /// everywhere else, the objective row included.
    ///
    /// # Arguments
    ///
    /// * `j`: Variable column index.
    /// * `epsilon`: Allowed deviation from exactly zero and one.
    pub fn basic_row(&self, j: usize, epsilon: F) -> Option<usize> {
        debug_assert!(j < self.nr_variables());

        let mut unit_row = None;
        for (i, value) in self.column(j).enumerate() {
            if value.is_close_to(F::zero(), epsilon) {
                continue;
            }
            if unit_row.is_none() && i < self.objective_row_index() && value.is_close_to(F::one(), epsilon) {
                unit_row = Some(i);
            } else {
                return None;
            }
        }

        unit_row
    }

    /// Value of each variable in the current basic solution.
    ///
    /// Basic variables take the right hand side of their row, all others are zero. When several
    /// columns are a unit vector for the same row, only the leftmost is considered basic.
    pub fn solution(&self, epsilon: F) -> Vec<F> {
        let mut taken = vec![false; self.nr_constraints()];

        (0..self.nr_variables())
            .map(|j| match self.basic_row(j, epsilon) {
                Some(i) if !taken[i] => {
                    taken[i] = true;
                    self.rhs(i)
                },
                _ => F::zero(),
            })
            .collect()
    }

    /// Multiply row `i` with `factor`.
    pub(crate) fn multiply_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows);

        let start = i * self.nr_columns;
        for value in &mut self.data[start..start + self.nr_columns] {
            *value = *value * factor;
        }
    }

    /// Subtract `factor` times `values` from row `i`.
    ///
    /// The `values` are expected to not be a view into this tableau.
    pub(crate) fn subtract_multiple(&mut self, i: usize, values: &[F], factor: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert_eq!(values.len(), self.nr_columns);

        let start = i * self.nr_columns;
        for (value, &other) in self.data[start..start + self.nr_columns].iter_mut().zip(values) {
            *value = *value - factor * other;
        }
    }

    /// Take the values of this tableau, row major.
    pub fn into_data(self) -> Vec<F> {
        self.data
    }
}

impl<F: Field> Index<(usize, usize)> for Tableau<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i * self.nr_columns + j]
    }
}
