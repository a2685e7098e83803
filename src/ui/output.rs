//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag. Tables
//! are rendered with fixed columns padded to the widest cell, capped at
//! [`Table::MAX_COL_WIDTH`] characters.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print a success message (respects quiet mode).
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// A fixed-column text table.
///
/// # Example
///
/// ```
/// use oamctl::ui::output::Table;
///
/// let mut table = Table::new();
/// table.add_row(["NAME", "STATUS"]);
/// table.add_row(["frontend", "Running"]);
/// let rendered = table.to_string();
/// assert!(rendered.starts_with("NAME"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Widest a column may grow; longer cells are truncated.
    pub const MAX_COL_WIDTH: usize = 60;

    /// Separator between columns.
    const GUTTER: &'static str = "  ";

    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row of cells.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows
            .push(cells.into_iter().map(|c| clip(c.into())).collect());
    }

    /// Number of rows added so far.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows have been added.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Truncate a cell to the maximum column width on a char boundary.
fn clip(cell: String) -> String {
    if cell.chars().count() <= Table::MAX_COL_WIDTH {
        cell
    } else {
        cell.chars().take(Table::MAX_COL_WIDTH).collect()
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        for row in &self.rows {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                line.push_str(cell);
                // Pad every column but the last to keep lines trim.
                if i + 1 < row.len() {
                    let pad = widths[i].saturating_sub(cell.chars().count());
                    line.extend(std::iter::repeat(' ').take(pad));
                    line.push_str(Self::GUTTER);
                }
            }
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn table_pads_columns_to_widest_cell() {
        let mut table = Table::new();
        table.add_row(["NAME", "STATUS"]);
        table.add_row(["frontend", "Running"]);
        assert_eq!(table.to_string(), "NAME      STATUS\nfrontend  Running\n");
    }

    #[test]
    fn table_truncates_overlong_cells() {
        let mut table = Table::new();
        table.add_row([String::from("x").repeat(100)]);
        let rendered = table.to_string();
        assert_eq!(rendered.trim_end().chars().count(), Table::MAX_COL_WIDTH);
    }

    #[test]
    fn last_column_is_not_padded() {
        let mut table = Table::new();
        table.add_row(["a", "b"]);
        table.add_row(["aaaa", "bb"]);
        let rendered = table.to_string();
        assert_eq!(rendered, "a     b\naaaa  bb\n");
    }

    #[test]
    fn ragged_rows_render() {
        let mut table = Table::new();
        table.add_row(["one"]);
        table.add_row(["two", "cells"]);
        let rendered = table.to_string();
        assert_eq!(rendered, "one\ntwo  cells\n");
    }
}
