// src/readers/helpers.rs

//! Miscellaneous helper functions for _Readers_.

use std::time::SystemTime;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{FPath, FileMetadata};

/// Return the basename of an `FPath`.
pub fn basename(path: &FPath) -> FPath {
    let mut riter = path.rsplit(std::path::MAIN_SEPARATOR);

    FPath::from(riter.next().unwrap_or(""))
}

/// Helper function for a slightly annoying set of calls.
pub fn path_to_fpath(path: &std::path::Path) -> FPath {
    // `PathBuf` to `String` https://stackoverflow.com/q/37388107/471376
    (*(path.to_string_lossy())).to_string()
}

/// Helper function for completeness.
pub fn fpath_to_path(path: &FPath) -> &std::path::Path {
    std::path::Path::new(path)
}

/// Does the file name of `path` end with `suffix`, ignoring ASCII case?
pub fn filename_ends_with_ignore_case(
    path: &std::path::Path,
    suffix: &str,
) -> bool {
    let file_name = match path.file_name() {
        Some(val) => val.to_string_lossy(),
        None => {
            return false;
        }
    };
    let suffix_len: usize = suffix.len();
    if file_name.len() < suffix_len || !file_name.is_char_boundary(file_name.len() - suffix_len) {
        return false;
    }

    file_name[file_name.len() - suffix_len..].eq_ignore_ascii_case(suffix)
}

/// Does the file name of `path` contain `pattern`?
pub fn filename_contains(
    path: &std::path::Path,
    pattern: &str,
) -> bool {
    match path.file_name() {
        Some(val) => val
            .to_string_lossy()
            .contains(pattern),
        None => false,
    }
}

/// Return the directory to search for `path`.
///
/// A file path returns the file's parent directory (`"."` for a bare file
/// name). Any other path is returned as-is.
pub fn search_dir(path: &std::path::Path) -> &std::path::Path {
    if !path.is_file() {
        return path;
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => std::path::Path::new("."),
    }
}

/// Return the modification time of the file at `path`, following symlinks.
pub fn path_mtime(path: &std::path::Path) -> std::io::Result<SystemTime> {
    defn!("({:?})", path);
    let metadata: FileMetadata = match std::fs::metadata(path) {
        Ok(val) => val,
        Err(err) => {
            defx!("error {}", err);
            return Err(err);
        }
    };
    let mtime = metadata.modified()?;
    defx!("return {:?}", mtime);

    Ok(mtime)
}
