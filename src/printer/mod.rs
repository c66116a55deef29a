// src/printer/mod.rs

//! The `printer` module is for handing parsed monitor file data to chart
//! renderers ([`ChartData`]) and for printing that data for the user
//! with various text effects (color, alignment).
//!
//! [`ChartData`]: crate::printer::chart::ChartData

pub mod chart;
pub mod printers;
