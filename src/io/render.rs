//! # Rendering of tableaux
//!
//! Tableaux are written as rows of fixed precision values separated by tabs, followed by an empty
//! line. Part of the tableau can be emphasized with a color, e.g. the row that was just pivoted on.
use std::io;
use std::io::Write;

use colored::{Color, Colorize};
use enum_map::{Enum, EnumMap, enum_map};
use itertools::Itertools;

use crate::data::number_types::traits::Field;
use crate::data::tableau::Tableau;

/// Part of a tableau to draw attention to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Emphasis {
    /// Render all values the same way.
    Nothing,
    /// A single row, e.g. the pivot row.
    Row(usize),
    /// A single column, e.g. the pivot column.
    Column(usize),
    /// A single value, e.g. the pivot element, given as (row, column).
    Cell(usize, usize),
    /// The right hand side column of an optimal tableau.
    SolutionColumn,
}

/// The kinds of highlighting, each with their own color.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Enum)]
pub enum Highlight {
    /// Recently pivoted values.
    Pivot,
    /// The solution.
    Solution,
    /// Error messages.
    Error,
}

impl Emphasis {
    /// How the value at (`i`, `j`) should be highlighted, if at all.
    fn highlight(self, i: usize, j: usize, nr_columns: usize) -> Option<Highlight> {
        match self {
            Emphasis::Nothing => None,
            Emphasis::Row(row) => (i == row).then_some(Highlight::Pivot),
            Emphasis::Column(column) => (j == column).then_some(Highlight::Pivot),
            Emphasis::Cell(row, column) => (i == row && j == column).then_some(Highlight::Pivot),
            Emphasis::SolutionColumn => (j + 1 == nr_columns).then_some(Highlight::Solution),
        }
    }
}

/// How values are written.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RenderOptions {
    /// Number of decimals.
    pub precision: usize,
    /// Whether highlighted values get a color. If not, highlighting has no effect.
    pub colored: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { precision: 2, colored: true }
    }
}

/// The colors of the default palette.
pub fn default_palette() -> EnumMap<Highlight, Color> {
    enum_map! {
        Highlight::Pivot => Color::Magenta,
        Highlight::Solution => Color::Green,
        Highlight::Error => Color::Red,
    }
}

/// Formats tableaux and messages for a terminal.
#[derive(Debug, Clone)]
pub struct Renderer {
    options: RenderOptions,
    palette: EnumMap<Highlight, Color>,
}

impl Renderer {
    /// Create a renderer with the default palette.
    pub fn new(options: RenderOptions) -> Self {
        Self { options, palette: default_palette() }
    }

    /// Replace the palette.
    pub fn with_palette(mut self, palette: EnumMap<Highlight, Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Format a tableau, one line per row and an empty line after the last row.
    pub fn render<F: Field>(&self, tableau: &Tableau<F>, emphasis: Emphasis) -> String {
        let nr_columns = tableau.nr_columns();

        let mut text = tableau.rows()
            .enumerate()
            .map(|(i, row)| row.iter()
                .enumerate()
                .map(|(j, &value)| self.cell(value, emphasis.highlight(i, j, nr_columns)))
                .join("\t"))
            .join("\n");
        text.push_str("\n\n");

        text
    }

    /// Write a formatted tableau.
    pub fn write<F: Field, W: Write>(
        &self,
        writer: &mut W,
        tableau: &Tableau<F>,
        emphasis: Emphasis,
    ) -> io::Result<()> {
        writer.write_all(self.render(tableau, emphasis).as_bytes())
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.paint(message.to_string(), Some(Highlight::Error))
    }

    fn cell<F: Field>(&self, value: F, highlight: Option<Highlight>) -> String {
        self.paint(format!("{:+.*}", self.options.precision, value), highlight)
    }

    fn paint(&self, text: String, highlight: Option<Highlight>) -> String {
        match highlight {
            Some(highlight) if self.options.colored => text.color(self.palette[highlight]).to_string(),
            _ => text,
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
