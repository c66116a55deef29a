// src/readers/tokenizer.rs

//! Line tokenizing functions shared by the header and data parsing of an
//! [`MntrReader`].
//!
//! A solver monitor file pads its columns with runs of spaces. A run of two
//! or more spaces separates fields, a single space is part of a field,
//! e.g. `"2020 R2"` is one field.
//!
//! [`MntrReader`]: crate::readers::mntrreader::MntrReader

use crate::common::{Value, Values};

use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::de_wrn;

/// Separator of fields within a line.
pub const FIELD_SEP: &str = "  ";

/// Pattern of a numeric literal embedded anywhere within a line.
///
/// Optional sign, then `digits? . digits+` or `digits+ .?`, then an optional
/// exponent. Matching is lexical and permissive; digits within identifiers
/// such as `UP20200601` also match.
pub const NUMERIC_LITERAL_PATTERN: &str = r"[-+]?(?:[0-9]*\.[0-9]+|[0-9]+\.?)(?:[Ee][-+]?[0-9]+)?";

lazy_static! {
    static ref NUMERIC_LITERAL_REGEX: Regex = {
        defñ!("lazy_static! NUMERIC_LITERAL_REGEX");
        Regex::new(NUMERIC_LITERAL_PATTERN).unwrap()
    };
}

/// Split `line` into fields.
///
/// The line is split at each two-space separator, scanning left to right.
/// Each chunk has its remaining whitespace runs collapsed to one space.
/// Chunks that are empty afterward are dropped.
///
/// ```
/// use mntrlib::readers::tokenizer::normalize_fields;
/// assert_eq!(normalize_fields("  2020 R2    BUILD  20.2 "), vec!["2020 R2", "BUILD", "20.2"]);
/// assert_eq!(normalize_fields("A B"), vec!["A B"]);
/// ```
pub fn normalize_fields(line: &str) -> Vec<String> {
    line.split(FIELD_SEP)
        .map(|chunk| {
            chunk
                .split_whitespace()
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .filter(|field| !field.is_empty())
        .collect()
}

/// Return every numeric literal within `line`, in order of appearance.
///
/// ```
/// use mntrlib::readers::tokenizer::extract_numbers;
/// assert_eq!(extract_numbers("1 2.5 -3.2e-1"), vec![1.0, 2.5, -0.32]);
/// assert!(extract_numbers("").is_empty());
/// ```
pub fn extract_numbers(line: &str) -> Values {
    let mut values: Values = Values::new();
    for match_ in NUMERIC_LITERAL_REGEX.find_iter(line) {
        match match_.as_str().parse::<Value>() {
            Ok(value) => values.push(value),
            // every string matched by the pattern is a valid float literal
            Err(_err) => {
                de_wrn!("failed to parse {:?} as float: {}", match_.as_str(), _err);
            }
        }
    }

    values
}
