// src/readers/filepreprocessor.rs

//! Functions to find solver monitor files on disk and order them for
//! processing by a [`MntrReader`].
//!
//! [`MntrReader`]: crate::readers::mntrreader::MntrReader

use crate::common::{FPath, FPaths, Path, MNTR_EXTENSION};
use crate::readers::helpers::{filename_contains, filename_ends_with_ignore_case, path_mtime, path_to_fpath, search_dir};

use std::io::{Error, ErrorKind, Result};
use std::time::SystemTime;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::de_wrn;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FilePreProcessor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A monitor file found by [`discover_mntr_files_mtime`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiscoveredFile {
    pub fpath: FPath,
    /// Modification time when the directory was scanned.
    pub mtime: SystemTime,
}

pub type DiscoveredFiles = Vec<DiscoveredFile>;

/// Is `path` named like a solver monitor file?
pub fn is_mntr_file_name(path: &Path) -> bool {
    filename_ends_with_ignore_case(path, MNTR_EXTENSION)
}

/// Return the monitor files in the directory of `root`, oldest first, with
/// their modification times.
///
/// If `root` is a file then its parent directory is scanned. Only direct
/// entries of the directory are examined. Entries must be files (or symlinks
/// to files) with a file name ending `.mntr` (ignoring ASCII case). If
/// `name_filter` is passed then the file name must also contain it.
///
/// Files are ordered by ascending modification time. Files with equal
/// modification times are ordered by path.
///
/// The directory is read on every call.
pub fn discover_mntr_files_mtime(
    root: &FPath,
    name_filter: Option<&str>,
) -> Result<DiscoveredFiles> {
    defn!("({:?}, {:?})", root, name_filter);
    let dir: &Path = search_dir(Path::new(root));
    defo!("search_dir {:?}", dir);
    let dir_metadata = match std::fs::metadata(dir) {
        Ok(val) => val,
        Err(err) => {
            defx!("metadata({:?}) error {}", dir, err);
            return Err(err);
        }
    };
    if !dir_metadata.is_dir() {
        defx!("not a directory {:?}", dir);
        return Err(Error::new(ErrorKind::NotFound, format!("not a directory {:?}", dir)));
    }

    let mut found: DiscoveredFiles = DiscoveredFiles::new();
    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let path_entry = match entry {
            Ok(val) => val,
            // failure to list the directory itself is an error for the caller
            Err(err) if err.depth() == 0 => {
                defx!("WalkDir error {}", err);
                return Err(Error::from(err));
            }
            Err(_err) => {
                de_wrn!("skip entry: {}", _err);
                continue;
            }
        };
        let path: &Path = path_entry.path();
        if !path_entry
            .file_type()
            .is_file()
        {
            defo!("not a file {:?}", path);
            continue;
        }
        if !is_mntr_file_name(path) {
            defo!("not a monitor file {:?}", path);
            continue;
        }
        if let Some(pattern) = name_filter {
            if !filename_contains(path, pattern) {
                defo!("filtered {:?}", path);
                continue;
            }
        }
        let mtime: SystemTime = match path_mtime(path) {
            Ok(val) => val,
            Err(_err) => {
                de_wrn!("skip {:?}: {}", path, _err);
                continue;
            }
        };
        defo!("found {:?}", path);
        found.push(DiscoveredFile {
            fpath: path_to_fpath(path),
            mtime,
        });
    }
    found.sort_by(|a, b| {
        a.mtime
            .cmp(&b.mtime)
            .then_with(|| a.fpath.cmp(&b.fpath))
    });
    defx!("return {} files", found.len());

    Ok(found)
}

/// Return the paths of the monitor files in the directory of `root`, oldest
/// first. See [`discover_mntr_files_mtime`].
pub fn discover_mntr_files(
    root: &FPath,
    name_filter: Option<&str>,
) -> Result<FPaths> {
    Ok(discover_mntr_files_mtime(root, name_filter)?
        .into_iter()
        .map(|discovered| discovered.fpath)
        .collect())
}
