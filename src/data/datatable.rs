// src/data/datatable.rs

//! Implement [`DataTable`], the eleven aligned numeric columns of the data
//! lines of a solver monitor file, and [`ColumnName`].

use crate::common::{LineNumber, Value, Values};
use crate::data::header::LayoutError;
use crate::readers::tokenizer::extract_numbers;

use std::fmt;
use std::str::FromStr;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ColumnName
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Count of columns of a data line.
pub const COLUMN_COUNT: usize = 11;

/// The columns of a data line, in left-to-right order.
///
/// The meaning of `Variable1` to `Variable4` is chosen by the user of the
/// solver; their names are the trailing fields of the variable names header
/// line.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ColumnName {
    Loadstep,
    Substep,
    Attempts,
    Iterations,
    TotalIterations,
    Increment,
    Time,
    Variable1,
    Variable2,
    Variable3,
    Variable4,
}

impl ColumnName {
    /// Every `ColumnName` in column order.
    pub const ALL: [ColumnName; COLUMN_COUNT] = [
        ColumnName::Loadstep,
        ColumnName::Substep,
        ColumnName::Attempts,
        ColumnName::Iterations,
        ColumnName::TotalIterations,
        ColumnName::Increment,
        ColumnName::Time,
        ColumnName::Variable1,
        ColumnName::Variable2,
        ColumnName::Variable3,
        ColumnName::Variable4,
    ];

    /// Position of this column within a data line.
    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnName::Loadstep => "loadstep",
            ColumnName::Substep => "substep",
            ColumnName::Attempts => "attempts",
            ColumnName::Iterations => "iterations",
            ColumnName::TotalIterations => "total iterations",
            ColumnName::Increment => "increment",
            ColumnName::Time => "time",
            ColumnName::Variable1 => "variable1",
            ColumnName::Variable2 => "variable2",
            ColumnName::Variable3 => "variable3",
            ColumnName::Variable4 => "variable4",
        }
    }

    /// Is this one of the user-selectable monitored quantities?
    pub const fn is_variable(&self) -> bool {
        matches!(
            self,
            ColumnName::Variable1 | ColumnName::Variable2 | ColumnName::Variable3 | ColumnName::Variable4
        )
    }
}

impl fmt::Display for ColumnName {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnName {
    type Err = String;

    /// Parse a column name. `"total iterations"` may also be written
    /// `"total_iterations"` or `"total-iterations"`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_: String = s
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ");
        for name in ColumnName::ALL.iter() {
            if name.as_str() == s_ {
                return Ok(*name);
            }
        }

        Err(format!(
            "unknown column {:?}, expected one of {}",
            s,
            ColumnName::ALL
                .iter()
                .map(|name| format!("{:?}", name.as_str()))
                .collect::<Vec<String>>()
                .join(", ")
        ))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DataTable
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The data lines of a monitor file as [`COLUMN_COUNT`] columns of equal
/// length. Row `i` of every column comes from the `i`th data line.
#[derive(Clone, Default, PartialEq)]
pub struct DataTable {
    columns: [Values; COLUMN_COUNT],
}

impl fmt::Debug for DataTable {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        let mut f_ = f.debug_map();
        for (name, values) in self.iter() {
            f_.entry(&name.as_str(), &values);
        }
        f_.finish()
    }
}

impl DataTable {
    pub fn new() -> DataTable {
        DataTable::default()
    }

    /// Create a `DataTable` from `rawlines`, data lines of a file.
    /// `first_line` is the file line number of `rawlines[0]`, used in
    /// errors.
    ///
    /// Every line must have at least [`COLUMN_COUNT`] numeric literals.
    /// Any line with fewer is a [`LayoutError::ShortDataLine`] for the entire
    /// table. Numbers after the first `COLUMN_COUNT` are ignored.
    pub fn from_lines<S: AsRef<str>>(
        rawlines: &[S],
        first_line: LineNumber,
    ) -> Result<DataTable, LayoutError> {
        defn!("({} lines, first_line {})", rawlines.len(), first_line);
        let mut table = DataTable::with_capacity(rawlines.len());
        for (offset, rawline) in rawlines.iter().enumerate() {
            let values: Values = extract_numbers(rawline.as_ref());
            if let Err(err) = table.push_row(&values, first_line + offset) {
                defx!("{}", err);
                return Err(err);
            }
        }
        defx!("return {} rows", table.len());

        Ok(table)
    }

    fn with_capacity(rows: usize) -> DataTable {
        DataTable {
            columns: std::array::from_fn(|_| Values::with_capacity(rows)),
        }
    }

    /// Append one row. `values` must have at least [`COLUMN_COUNT`] entries.
    pub fn push_row(
        &mut self,
        values: &[Value],
        line: LineNumber,
    ) -> Result<(), LayoutError> {
        if values.len() < COLUMN_COUNT {
            return Err(LayoutError::ShortDataLine {
                line,
                found: values.len(),
                expected: COLUMN_COUNT,
            });
        }
        for (column, value) in self
            .columns
            .iter_mut()
            .zip(values.iter())
        {
            column.push(*value);
        }
        debug_assert!(self
            .columns
            .iter()
            .all(|column| column.len() == self.columns[0].len()));

        Ok(())
    }

    /// Count of rows.
    pub fn len(&self) -> usize {
        self.columns[0].len()
    }

    /// A table from a file with no data lines is empty.
    pub fn is_empty(&self) -> bool {
        self.columns[0].is_empty()
    }

    /// The values of column `name`.
    pub fn get(
        &self,
        name: ColumnName,
    ) -> &[Value] {
        &self.columns[name.index()]
    }

    /// The values of the column named `name`, e.g. `"total iterations"`.
    pub fn get_by_str(
        &self,
        name: &str,
    ) -> Option<&[Value]> {
        match ColumnName::from_str(name) {
            Ok(name_) => Some(self.get(name_)),
            Err(_) => None,
        }
    }

    /// Iterate `(ColumnName, values)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnName, &[Value])> {
        ColumnName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }

    /// Greatest value of column `name`, `None` if the table is empty.
    /// NaN values are ignored.
    pub fn max(
        &self,
        name: ColumnName,
    ) -> Option<Value> {
        values_max(self.get(name))
    }

    /// The values of row `row` in column order.
    pub fn row(
        &self,
        row: usize,
    ) -> Option<[Value; COLUMN_COUNT]> {
        if row >= self.len() {
            return None;
        }

        Some(std::array::from_fn(|i| self.columns[i][row]))
    }
}

/// Greatest of `values`, ignoring NaN. `None` if there is no such value.
pub fn values_max(values: &[Value]) -> Option<Value> {
    values
        .iter()
        .copied()
        .filter(|value| !value.is_nan())
        .fold(None, |max, value| match max {
            Some(max_) if max_ >= value => Some(max_),
            _ => Some(value),
        })
}
