// src/data/header.rs

//! Implement [`HeaderLayout`], the positions of header fields within a
//! solver monitor file, and [`Metadata`], the values found at those
//! positions.
//!
//! Also implements [`LayoutError`], the kinds of structural faults found
//! while indexing a file by its `HeaderLayout`.

use crate::common::{LineNumber, RawLine};
use crate::readers::tokenizer::normalize_fields;

use std::fmt;
use std::io::{Error, ErrorKind};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// HeaderLayout
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Text preceding the job name on the job name line.
pub const JOBNAME_PREFIX: &str = "SOLUTION HISTORY INFORMATION FOR JOB:";

/// Number of leading fields of the release line that are the release
/// identifiers. The remaining fields are the release date and time.
pub const RELEASE_FIELDS: usize = 2;

/// Number of user-selectable monitored quantities, the trailing fields of the
/// variable names line.
pub const MONITORED_VARIABLES: usize = 4;

/// Line numbers (0-based) of the fixed header fields of a monitor file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeaderLayout {
    /// Line holding [`JOBNAME_PREFIX`] followed by the job name.
    pub jobname: LineNumber,
    /// Line holding release identifiers then release date and time.
    pub release_date: LineNumber,
    /// Line holding the names of the columns, ending with the monitored
    /// variable names.
    pub variable_names: LineNumber,
    /// First data line. All following lines are data lines.
    pub first_data_line: LineNumber,
}

impl Default for HeaderLayout {
    /// The layout written by the solver.
    fn default() -> Self {
        HeaderLayout {
            jobname: 3,
            release_date: 4,
            variable_names: 8,
            first_data_line: 10,
        }
    }
}

impl HeaderLayout {
    /// Fewest lines a file must have for every header field to be present.
    pub fn header_lines_min(&self) -> usize {
        self.jobname
            .max(self.release_date)
            .max(self.variable_names)
            + 1
    }

    /// Return the line at `line` of `lines`, or a [`LayoutError::Truncated`].
    pub fn line_at<'a>(
        &self,
        lines: &'a [RawLine],
        line: LineNumber,
    ) -> Result<&'a RawLine, Error> {
        match lines.get(line) {
            Some(rawline) => Ok(rawline),
            None => Err(LayoutError::Truncated {
                line,
                lines: lines.len(),
            }
            .into()),
        }
    }

    /// Return the data lines of `lines`. A file that ends at or before
    /// `first_data_line` has no data lines.
    pub fn data_lines<'a>(
        &self,
        lines: &'a [RawLine],
    ) -> &'a [RawLine] {
        lines
            .get(self.first_data_line..)
            .unwrap_or(&[])
    }

    /// Check `lines` is long enough to hold every header field.
    pub fn validate(
        &self,
        lines: &[RawLine],
    ) -> Result<(), Error> {
        let min = self.header_lines_min();
        if lines.len() < min {
            return Err(LayoutError::Truncated {
                line: min - 1,
                lines: lines.len(),
            }
            .into());
        }

        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LayoutError
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A file does not have the structure described by its [`HeaderLayout`].
///
/// Returned to callers within a [`std::io::Error`] of kind
/// [`ErrorKind::InvalidData`]. Use [`layout_error`] to get it back.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LayoutError {
    /// The file ends before header line `line`; it has `lines` lines.
    Truncated { line: LineNumber, lines: usize },
    /// The job name line `line` does not hold [`JOBNAME_PREFIX`].
    MissingJobPrefix { line: LineNumber },
    /// Data line `line` has `found` numeric fields, fewer than `expected`.
    ShortDataLine {
        line: LineNumber,
        found: usize,
        expected: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            LayoutError::Truncated { line, lines } => {
                write!(f, "malformed header: file has {} lines, header line {} is missing", lines, line)
            }
            LayoutError::MissingJobPrefix { line } => {
                write!(f, "malformed header: line {} does not begin with {:?}", line, JOBNAME_PREFIX)
            }
            LayoutError::ShortDataLine { line, found, expected } => {
                write!(f, "data line {} has {} numeric fields, expected at least {}", line, found, expected)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        Error::new(ErrorKind::InvalidData, err)
    }
}

/// Return the [`LayoutError`] carried by `err`, if any.
pub fn layout_error(err: &Error) -> Option<&LayoutError> {
    err.get_ref()
        .and_then(|inner| inner.downcast_ref::<LayoutError>())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// header field extraction
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Return the job name from the job name line `rawline` found at `line`.
pub fn parse_jobname(
    rawline: &str,
    line: LineNumber,
) -> Result<String, LayoutError> {
    match rawline
        .trim_start()
        .strip_prefix(JOBNAME_PREFIX)
    {
        Some(jobname) => Ok(jobname.trim().to_string()),
        None => Err(LayoutError::MissingJobPrefix { line }),
    }
}

/// Split the fields of the release line into
/// `(release identifiers, release date and time)`.
pub fn parse_release_date(rawline: &str) -> (Vec<String>, Vec<String>) {
    let mut release: Vec<String> = normalize_fields(rawline);
    let at = release.len().min(RELEASE_FIELDS);
    let datetime: Vec<String> = release.split_off(at);

    (release, datetime)
}

/// Return the trailing [`MONITORED_VARIABLES`] fields of `variables`.
pub fn monitored_variables(variables: &[String]) -> &[String] {
    let at = variables
        .len()
        .saturating_sub(MONITORED_VARIABLES);

    &variables[at..]
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Metadata
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// All header values of one monitor file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Metadata {
    pub jobname: String,
    /// Release identifiers, e.g. `["2020 R2", "BUILD 20.2"]`.
    pub release: Vec<String>,
    /// Release date and time fields. The first field labels charts.
    pub datetime: Vec<String>,
    /// Every field of the variable names line.
    pub variables: Vec<String>,
}

impl Metadata {
    /// Parse the header of `lines` as described by `layout`.
    pub fn from_lines(
        lines: &[RawLine],
        layout: &HeaderLayout,
    ) -> Result<Metadata, Error> {
        layout.validate(lines)?;
        let jobname = parse_jobname(layout.line_at(lines, layout.jobname)?, layout.jobname)?;
        let (release, datetime) = parse_release_date(layout.line_at(lines, layout.release_date)?);
        let variables = normalize_fields(layout.line_at(lines, layout.variable_names)?);

        Ok(Metadata {
            jobname,
            release,
            datetime,
            variables,
        })
    }

    /// See [`monitored_variables`].
    pub fn monitored_variables(&self) -> &[String] {
        monitored_variables(&self.variables)
    }

    /// The first date and time field, or `""`.
    pub fn datetime_label(&self) -> &str {
        match self.datetime.first() {
            Some(field) => field.as_str(),
            None => "",
        }
    }
}
