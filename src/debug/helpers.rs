// src/debug/helpers.rs

//! Miscellaneous helper functions for testing.

use crate::common::FPath;

use crate::readers::helpers::path_to_fpath;

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

#[allow(unused_imports)] // XXX: clippy wrongly marks this as unused
use std::io::Write; // for `NamedTempFile.write_all`

use ::filetime::{set_file_mtime, FileTime};
use ::lazy_static::lazy_static;
use ::si_trace_print::{defo, defñ};

#[doc(hidden)]
pub use ::tempfile::NamedTempFile;
#[doc(hidden)]
pub use ::tempfile::TempDir;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// temporary file helper functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// NamedTempFile instances default to this file name prefix.
pub const STR_TEMPFILE_PREFIX: &str = "tmp-mntr-test-";

lazy_static! {
    pub static ref STRING_TEMPFILE_PREFIX: String = String::from(STR_TEMPFILE_PREFIX);
}

/// Small helper function for copying `NamedTempFile` path to a `FPath`.
pub fn ntf_fpath(ntf: &NamedTempFile) -> FPath {
    path_to_fpath(ntf.path())
}

/// Testing helper function to write a `str` to a temporary file with a
/// specific suffix, e.g. `".mntr"`.
pub fn create_temp_file_with_suffix(
    data: &str,
    suffix: &str,
) -> NamedTempFile {
    let mut ntf = match ::tempfile::Builder::new()
        // use known prefix for easier cleanup
        .prefix::<str>(&STRING_TEMPFILE_PREFIX)
        .suffix::<str>(suffix)
        .tempfile()
    {
        Ok(val) => val,
        Err(err) => {
            panic!("tempfile::Builder::new()..tempfile() return Err {}", err);
        }
    };
    match ntf.write_all(data.as_bytes()) {
        Ok(_) => {}
        Err(err) => {
            panic!("NamedTempFile::write_all() return Err {}", err);
        }
    }

    ntf
}

/// Testing helper function to write a `str` to a temporary `.mntr` file.
pub fn create_temp_file(data: &str) -> NamedTempFile {
    create_temp_file_with_suffix(data, ".mntr")
}

/// Create a temporary directory
pub fn create_temp_dir() -> TempDir {
    defñ!();
    ::tempfile::tempdir().unwrap()
}

/// Testing helper to write `data` to file `name` within the passed `TempDir`.
/// Return the path of the new file.
pub fn create_file_in_tmpdir(
    tmpdir: &TempDir,
    name: &str,
    data: &str,
) -> FPath {
    let path: PathBuf = tmpdir.path().join(name);
    defo!("File::create({:?})", path);
    let mut file_ = match File::create(&path) {
        Ok(f) => f,
        Err(err) => panic!("Error {:?}", err),
    };
    file_.write_all(data.as_bytes()).unwrap();

    path_to_fpath(path.as_path())
}

/// Testing helper to create a directory `name` within the passed `TempDir`.
pub fn create_dir_in_tmpdir(
    tmpdir: &TempDir,
    name: &str,
) -> FPath {
    let path: PathBuf = tmpdir.path().join(name);
    defo!("create_dir({:?})", path);
    std::fs::create_dir(&path).unwrap();

    path_to_fpath(path.as_path())
}

/// Set the modification time of the file at `path` to `secs` seconds after
/// the unix epoch.
pub fn set_mtime_secs(
    path: &FPath,
    secs: u64,
) {
    let mtime = FileTime::from_system_time(SystemTime::UNIX_EPOCH + Duration::from_secs(secs));
    defo!("set_file_mtime({:?}, {:?})", path, mtime);
    set_file_mtime(path, mtime).unwrap();
}

/// Testing helper to create a `TempDir` and files within it.
/// Each `(name, mtime seconds)` creates file `name` with `data` and sets
/// its modification time.
pub fn create_files_and_tmpdir(
    files: &[(&str, u64)],
    data: &str,
) -> (TempDir, Vec<FPath>) {
    let tmpdir = create_temp_dir();
    let mut fpaths = Vec::<FPath>::with_capacity(files.len());

    for (name, secs) in files.iter() {
        let fpath = create_file_in_tmpdir(&tmpdir, name, data);
        set_mtime_secs(&fpath, *secs);
        fpaths.push(fpath);
    }

    (tmpdir, fpaths)
}
