// src/tests/common.rs

//! Common data for tests: the lines of a small solver monitor file.

#![allow(non_upper_case_globals)]

use crate::common::Value;

use ::lazy_static::lazy_static;

/// The job name found in [`MNTR_HEADER_LINES`].
pub const JOBNAME: &str = "plate_GMNIA.mntr";

/// The ten header lines of a monitor file.
pub const MNTR_HEADER_LINES: [&str; 10] = [
    "",
    " ANSYS Mechanical Enterprise",
    "",
    " SOLUTION HISTORY INFORMATION FOR JOB: plate_GMNIA.mntr",
    "  2020 R2          BUILD 20.2      10/06/2021  14:08:29",
    "",
    "   LOAD   SUB-   NO.    NO.    TOTAL  INCREMENT    TOTAL        VARIAB 1     VARIAB 2     VARIAB 3     VARIAB 4",
    "          STEP   ATTMP  ITER   ITER   TIME/LFACT   TIME/LFACT   MONITOR      MONITOR      MONITOR      MONITOR",
    "   STEP   STEP   ATTMP   ITER   ITER   TIME/LFACT   TIME/LFACT   Wall   MxDs   MxPl   MxRe",
    "",
];

/// Three data lines.
pub const MNTR_DATA_LINES: [&str; 3] = [
    "     1     1     1     3     3   0.10000       0.10000       2.1000      0.35000E-01  0.12000      0.45000E-02",
    "     1     2     1     2     5   0.15000       0.25000       2.9000      0.71000E-01  0.18000      0.21000E-02",
    "     1     3     1     4     9   0.25000       0.50000       4.2000      0.14200      0.25000      0.87000E-03",
];

pub const MNTR_RELEASE: [&str; 2] = ["2020 R2", "BUILD 20.2"];
pub const MNTR_DATETIME: [&str; 2] = ["10/06/2021", "14:08:29"];
pub const MNTR_MONITORED: [&str; 4] = ["Wall", "MxDs", "MxPl", "MxRe"];

/// `total iterations` column of [`MNTR_DATA_LINES`].
pub const MNTR_TOTAL_ITERATIONS: [Value; 3] = [3.0, 5.0, 9.0];
/// `time` column of [`MNTR_DATA_LINES`].
pub const MNTR_TIME: [Value; 3] = [0.1, 0.25, 0.5];
/// `variable2` column of [`MNTR_DATA_LINES`].
pub const MNTR_VARIABLE2: [Value; 3] = [0.035, 0.071, 0.142];

/// Join `header` and `data` into file content, each line ending `"\n"`.
pub fn mntr_content(
    header: &[&str],
    data: &[&str],
) -> String {
    let mut content = String::new();
    for line in header.iter().chain(data.iter()) {
        content.push_str(line);
        content.push('\n');
    }

    content
}

lazy_static! {
    /// Header and three data lines.
    pub static ref MNTR_FILE_DATA3: String = mntr_content(&MNTR_HEADER_LINES, &MNTR_DATA_LINES);
    /// Header only; the solver has not finished a substep yet.
    pub static ref MNTR_FILE_NODATA: String = mntr_content(&MNTR_HEADER_LINES, &[]);
    /// First five header lines only.
    pub static ref MNTR_FILE_TRUNCATED: String = mntr_content(&MNTR_HEADER_LINES[..5], &[]);
}
