// src/readers/mod.rs

//! "Readers" for _mntrlib_.
//!
//! ## Overview of readers
//!
//! * [`discover_mntr_files`] finds solver monitor files in a directory.
//! * A [`MntrReader`] reads one monitor file and derives its [`Metadata`]
//!   and [`DataTable`].
//! * The [`tokenizer`] functions split the text lines of a monitor file into
//!   fields and numbers.
//!
//! <br/>
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`discover_mntr_files`]: crate::readers::filepreprocessor::discover_mntr_files
//! [`MntrReader`]: crate::readers::mntrreader::MntrReader
//! [`Metadata`]: crate::data::header::Metadata
//! [`DataTable`]: crate::data::datatable::DataTable
//! [`tokenizer`]: crate::readers::tokenizer
//! [`Read`]: std::io::Read

pub mod filepreprocessor;
pub mod helpers;
pub mod mntrreader;
pub mod tokenizer;
