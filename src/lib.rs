// src/lib.rs

//! _mntrlib_ reads the convergence monitor files (`.mntr`) written by a
//! finite-element solver.
//!
//! * [`readers`] find monitor files and read them.
//! * [`data`] holds the parsed header and data columns.
//! * [`printer`] hands parsed columns to chart renderers and prints them.
//!
//! The driver program `mntr` uses these to print a summary of each monitor
//! file found.

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
