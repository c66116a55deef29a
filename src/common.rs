// src/common.rs

//! Common imports, type aliases, and other globals (avoids circular imports).

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub use std::fs::File;
pub use std::path::Path;

// TODO: use `std::path::PathBuf` for `FPath` once the CLI no longer needs
//       `String` paths for printing
/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FPaths = Vec<FPath>;
pub type FileMetadata = std::fs::Metadata;

/// File name extension of solver monitor files, compared ignoring ASCII case.
pub const MNTR_EXTENSION: &str = ".mntr";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// lines and numbers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// 0-based index of a line within a file.
pub type LineNumber = usize;

/// One raw text line of a file, line terminator removed.
pub type RawLine = String;

/// All raw text lines of a file, in file order.
pub type RawLines = Vec<RawLine>;

/// A value parsed from a data line.
pub type Value = f64;

/// An ordered sequence of `Value`, one per data line.
pub type Values = Vec<Value>;
