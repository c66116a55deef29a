// src/data/mod.rs

//! The `data` module is specialized data containers for the
//! [`Metadata`] and [`DataTable`] of a solver monitor file.
//!
//! ## Definitions of data
//!
//! ### Monitor file
//!
//! A "monitor file" is a text file written by a finite-element solver while
//! it solves. It has a file name ending `.mntr`. It is read by a
//! [`MntrReader`].
//!
//! #### Header
//!
//! The first lines of a monitor file. Header fields are found at fixed line
//! numbers described by a [`HeaderLayout`].
//!
//! #### Field
//!
//! Text within a line separated from other text by two or more spaces.
//! Text separated by one space is one field, e.g. `"2020 R2"`.
//!
//! #### Data line
//!
//! Every line at or after [`HeaderLayout::first_data_line`]. One data line is
//! written per solution increment. A data line has eleven or more numbers.
//!
//! #### Column
//!
//! The numbers at the same position within every data line. A column is
//! named by a [`ColumnName`].
//!
//! [`MntrReader`]: crate::readers::mntrreader::MntrReader
//! [`Metadata`]: crate::data::header::Metadata
//! [`HeaderLayout`]: crate::data::header::HeaderLayout
//! [`HeaderLayout::first_data_line`]: crate::data::header::HeaderLayout#structfield.first_data_line
//! [`DataTable`]: crate::data::datatable::DataTable
//! [`ColumnName`]: crate::data::datatable::ColumnName

pub mod datatable;
pub mod header;
