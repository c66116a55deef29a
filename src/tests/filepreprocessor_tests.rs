// src/tests/filepreprocessor_tests.rs

//! tests for `src/readers/filepreprocessor.rs`

#![allow(non_snake_case)]

use crate::common::{FPath, Path};
use crate::debug::helpers::{create_dir_in_tmpdir, create_file_in_tmpdir, create_files_and_tmpdir, create_temp_dir, set_mtime_secs};
use crate::readers::filepreprocessor::{discover_mntr_files, discover_mntr_files_mtime, is_mntr_file_name, DiscoveredFiles};
use crate::readers::helpers::{basename, path_to_fpath};
use crate::tests::common::MNTR_FILE_DATA3;

use std::io::ErrorKind;
use std::time::{Duration, SystemTime};

use ::more_asserts::assert_le;
use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn basenames(discovered: &DiscoveredFiles) -> Vec<FPath> {
    discovered
        .iter()
        .map(|d| basename(&d.fpath))
        .collect()
}

#[test_case("a.mntr", true)]
#[test_case("A.MNTR", true)]
#[test_case("plate_GMNIA.Mntr", true)]
#[test_case("/tmp/dir/a.mntr", true)]
#[test_case(".mntr", true; "extension only")]
#[test_case("a.mntr.bak", false)]
#[test_case("a.mnt", false)]
#[test_case("mntr", false; "no dot")]
#[test_case("a.txt", false)]
#[test_case("", false; "empty")]
fn test_is_mntr_file_name(
    name: &str,
    expect: bool,
) {
    assert_eq!(is_mntr_file_name(Path::new(name)), expect);
}

// -------------------------------------------------------------------------------------------------

#[test]
fn test_discover_mntr_files_mtime_order() {
    let (tmpdir, _fpaths) = create_files_and_tmpdir(
        &[("b.mntr", 2000), ("a.mntr", 3000), ("c.MNTR", 1000), ("d.txt", 500), ("e.mntr.old", 100)],
        &MNTR_FILE_DATA3,
    );
    let root: FPath = path_to_fpath(tmpdir.path());
    let discovered = discover_mntr_files_mtime(&root, None).unwrap();
    assert_eq!(basenames(&discovered), vec!["c.MNTR", "b.mntr", "a.mntr"]);
    for pair in discovered.windows(2) {
        assert_le!(pair[0].mtime, pair[1].mtime);
    }
    assert_eq!(discovered[0].mtime, SystemTime::UNIX_EPOCH + Duration::from_secs(1000));
}

#[test]
fn test_discover_mntr_files_mtime_tie_by_path() {
    let (tmpdir, _fpaths) = create_files_and_tmpdir(
        &[("z.mntr", 1000), ("m.mntr", 1000), ("a.mntr", 1000)],
        &MNTR_FILE_DATA3,
    );
    let root: FPath = path_to_fpath(tmpdir.path());
    let discovered = discover_mntr_files_mtime(&root, None).unwrap();
    assert_eq!(basenames(&discovered), vec!["a.mntr", "m.mntr", "z.mntr"]);
}

#[test_case(Some("GMNIA"), &["plate_GMNIA.mntr", "shell_GMNIA.mntr"]; "substring")]
#[test_case(Some("plate"), &["plate_LBA.mntr", "plate_GMNIA.mntr"]; "prefix")]
#[test_case(Some("gmnia"), &[]; "case sensitive")]
#[test_case(Some(""), &["plate_LBA.mntr", "plate_GMNIA.mntr", "shell_GMNIA.mntr"]; "empty filter")]
#[test_case(None, &["plate_LBA.mntr", "plate_GMNIA.mntr", "shell_GMNIA.mntr"]; "no filter")]
fn test_discover_mntr_files_mtime_filter(
    filter: Option<&str>,
    expect: &[&str],
) {
    let (tmpdir, _fpaths) = create_files_and_tmpdir(
        &[("plate_LBA.mntr", 100), ("plate_GMNIA.mntr", 200), ("shell_GMNIA.mntr", 300), ("GMNIA.txt", 400)],
        &MNTR_FILE_DATA3,
    );
    let root: FPath = path_to_fpath(tmpdir.path());
    let discovered = discover_mntr_files_mtime(&root, filter).unwrap();
    assert_eq!(basenames(&discovered), expect);
}

#[test]
fn test_discover_mntr_files_mtime_filter_file_name_only() {
    let tmpdir = create_temp_dir();
    let subdir = create_dir_in_tmpdir(&tmpdir, "GMNIA");
    let fpath = create_file_in_tmpdir(&tmpdir, "GMNIA/plate.mntr", &MNTR_FILE_DATA3);
    // the directory name matches the filter, the file name does not
    let discovered = discover_mntr_files_mtime(&subdir, Some("GMNIA")).unwrap();
    assert!(discovered.is_empty(), "discovered {:?}", discovered);
    let discovered = discover_mntr_files_mtime(&subdir, Some("plate")).unwrap();
    assert_eq!(discovered.len(), 1);
    assert_eq!(discovered[0].fpath, fpath);
}

#[test]
fn test_discover_mntr_files_mtime_root_is_file() {
    let (_tmpdir, fpaths) = create_files_and_tmpdir(
        &[("a.mntr", 100), ("b.mntr", 200)],
        &MNTR_FILE_DATA3,
    );
    // passing a file scans the directory of the file
    let discovered = discover_mntr_files_mtime(&fpaths[1], None).unwrap();
    assert_eq!(basenames(&discovered), vec!["a.mntr", "b.mntr"]);
}

#[test]
fn test_discover_mntr_files_mtime_skips_directories() {
    let tmpdir = create_temp_dir();
    create_dir_in_tmpdir(&tmpdir, "dir.mntr");
    create_dir_in_tmpdir(&tmpdir, "sub");
    let nested = create_file_in_tmpdir(&tmpdir, "sub/nested.mntr", &MNTR_FILE_DATA3);
    set_mtime_secs(&nested, 100);
    let fpath = create_file_in_tmpdir(&tmpdir, "top.mntr", &MNTR_FILE_DATA3);
    set_mtime_secs(&fpath, 200);
    let root: FPath = path_to_fpath(tmpdir.path());
    let discovered = discover_mntr_files_mtime(&root, None).unwrap();
    assert_eq!(basenames(&discovered), vec!["top.mntr"]);
}

#[test]
fn test_discover_mntr_files_mtime_empty_dir() {
    let tmpdir = create_temp_dir();
    let root: FPath = path_to_fpath(tmpdir.path());
    let discovered = discover_mntr_files_mtime(&root, None).unwrap();
    assert!(discovered.is_empty());
}

#[test]
fn test_discover_mntr_files_mtime_not_found() {
    let tmpdir = create_temp_dir();
    let root: FPath = path_to_fpath(&tmpdir.path().join("does-not-exist"));
    let err = discover_mntr_files_mtime(&root, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_discover_mntr_files() {
    let (tmpdir, fpaths) = create_files_and_tmpdir(
        &[("new.mntr", 2000), ("old.mntr", 1000)],
        &MNTR_FILE_DATA3,
    );
    let root: FPath = path_to_fpath(tmpdir.path());
    let found = discover_mntr_files(&root, None).unwrap();
    assert_eq!(found, vec![fpaths[1].clone(), fpaths[0].clone()]);
}

#[test]
fn test_discover_mntr_files_rescans() {
    let (tmpdir, _fpaths) = create_files_and_tmpdir(&[("a.mntr", 1000)], &MNTR_FILE_DATA3);
    let root: FPath = path_to_fpath(tmpdir.path());
    assert_eq!(discover_mntr_files(&root, None).unwrap().len(), 1);
    let fpath = create_file_in_tmpdir(&tmpdir, "b.mntr", &MNTR_FILE_DATA3);
    set_mtime_secs(&fpath, 500);
    let found = discover_mntr_files(&root, None).unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0], fpath);
}

#[test]
#[cfg(unix)]
fn test_discover_mntr_files_mtime_skips_dangling_symlink() {
    let (tmpdir, fpaths) = create_files_and_tmpdir(&[("good.mntr", 1000)], &MNTR_FILE_DATA3);
    let dangling = tmpdir.path().join("dangling.mntr");
    std::os::unix::fs::symlink(tmpdir.path().join("missing.mntr"), &dangling).unwrap();
    let root: FPath = path_to_fpath(tmpdir.path());
    let discovered = discover_mntr_files_mtime(&root, None).unwrap();
    assert_eq!(discovered.len(), 1, "discovered {:?}", discovered);
    assert_eq!(discovered[0].fpath, fpaths[0]);
}
