// src/printer/chart.rs

//! Implements [`ChartData`], the values handed to a chart renderer for one
//! series of one solver monitor file.
//!
//! Rendering a chart (axes, scaling, windows) is left to the consumer.
//! A consumer must treat an empty `ChartData` as "no data yet".

use crate::common::{Value, Values};
use crate::data::datatable::{values_max, ColumnName, DataTable};
use crate::data::header::{monitored_variables, MONITORED_VARIABLES};
use crate::readers::mntrreader::MntrReader;

use std::io::Result;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Default horizontal axis column.
pub const HORIZONTAL_DEFAULT: ColumnName = ColumnName::TotalIterations;

/// Default vertical axis column.
pub const VERTICAL_DEFAULT: ColumnName = ColumnName::Time;

/// One `(horizontal, vertical)` series of a monitor file, with the labels to
/// title it.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub jobname: String,
    /// First release date and time field, `""` if there is none.
    pub label: String,
    pub horizontal: ColumnName,
    pub vertical: ColumnName,
    /// Axis label for `horizontal`.
    pub x_label: String,
    /// Axis label for `vertical`.
    pub y_label: String,
    pub x: Values,
    pub y: Values,
}

/// Return the axis label for `column`. A monitored variable column is also
/// labeled with its name from `variables`, e.g. `"variable2 (MxDs)"`.
pub fn axis_label(
    column: ColumnName,
    variables: &[String],
) -> String {
    if !column.is_variable() {
        return column.as_str().to_string();
    }
    let monitored = monitored_variables(variables);
    // `Variable1` is the first of the trailing monitored fields
    let at: usize = column.index() - ColumnName::Variable1.index();
    match monitored.get(at) {
        Some(name) if monitored.len() == MONITORED_VARIABLES => {
            format!("{} ({})", column.as_str(), name)
        }
        _ => column.as_str().to_string(),
    }
}

impl ChartData {
    /// Create a `ChartData` from already parsed parts of a monitor file.
    pub fn from_parts(
        jobname: String,
        datetime: &[String],
        variables: &[String],
        table: &DataTable,
        horizontal: ColumnName,
        vertical: ColumnName,
    ) -> ChartData {
        defñ!("({:?}, {:?}, {:?})", jobname, horizontal, vertical);
        let label: String = match datetime.first() {
            Some(field) => field.clone(),
            None => String::new(),
        };

        ChartData {
            jobname,
            label,
            horizontal,
            vertical,
            x_label: axis_label(horizontal, variables),
            y_label: axis_label(vertical, variables),
            x: table.get(horizontal).to_vec(),
            y: table.get(vertical).to_vec(),
        }
    }

    /// Create a `ChartData` from the monitor file of `reader`.
    ///
    /// Uses [`MntrReader::data_table_cached`] so several series of the same
    /// file parse the data lines once.
    pub fn from_reader(
        reader: &mut MntrReader,
        horizontal: ColumnName,
        vertical: ColumnName,
    ) -> Result<ChartData> {
        defn!("({:?}, {:?})", horizontal, vertical);
        let jobname: String = reader.jobname()?;
        let datetime: Vec<String> = reader.release_datetime()?;
        let variables: Vec<String> = reader.variable_names()?;
        let table: &DataTable = reader.data_table_cached()?;
        let chart = ChartData::from_parts(jobname, &datetime, &variables, table, horizontal, vertical);
        defx!("{} points", chart.len());

        Ok(chart)
    }

    /// Count of points.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// No data lines have been written yet.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Greatest vertical value, `None` if empty.
    pub fn y_max(&self) -> Option<Value> {
        values_max(&self.y)
    }

    /// The chart title, `"<jobname>.\nmax: <y max>, time: <label>"`.
    /// `None` if empty.
    pub fn title(&self) -> Option<String> {
        self.y_max()
            .map(|max| format!("{}.\nmax: {:.4}, time: {}", self.jobname, max, self.label))
    }

    /// Iterate the `(x, y)` points.
    pub fn points(&self) -> impl Iterator<Item = (Value, Value)> + '_ {
        self.x
            .iter()
            .copied()
            .zip(self.y.iter().copied())
    }
}
