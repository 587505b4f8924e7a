use std::fs;
use std::path::{Path, PathBuf};

use sv_header::cli::expand_env_vars;
use sv_header::{expand_file_path, parse_extract_args, LogLevel};
use tempfile::TempDir;

fn create_temp_file(dir: &TempDir, filename: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, "module m;\nendmodule\n").unwrap();
    file_path
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_parse_single_file() {
    let dir = TempDir::new().unwrap();
    let file = create_temp_file(&dir, "test.sv");

    let result =
        parse_extract_args(vec![path_string(&file)], LogLevel::Info, None, false).unwrap();

    assert_eq!(result.files, vec![file]);
    assert_eq!(result.log_level, LogLevel::Info);
    assert_eq!(result.output_dir, None);
    assert!(!result.json);
}

#[test]
fn test_parse_multiple_files_keeps_order() {
    let dir = TempDir::new().unwrap();
    let first = create_temp_file(&dir, "b.sv");
    let second = create_temp_file(&dir, "a.sv");

    let result = parse_extract_args(
        vec![path_string(&first), path_string(&second)],
        LogLevel::Debug,
        Some(PathBuf::from("out")),
        true,
    )
    .unwrap();

    assert_eq!(result.files, vec![first, second]);
    assert_eq!(result.log_level, LogLevel::Debug);
    assert_eq!(result.output_dir, Some(PathBuf::from("out")));
    assert!(result.json);
}

#[test]
fn test_missing_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    let present = create_temp_file(&dir, "present.sv");
    let missing = dir.path().join("missing.sv");

    let result = parse_extract_args(
        vec![path_string(&missing), path_string(&present)],
        LogLevel::Info,
        None,
        false,
    )
    .unwrap();

    assert_eq!(result.files, vec![present]);
}

#[test]
fn test_no_existing_files_error() {
    let result = parse_extract_args(
        vec!["/definitely/not/here.sv".to_string()],
        LogLevel::Info,
        None,
        false,
    );

    assert!(result.is_err());
    assert_eq!(result.unwrap_err(), "No input files found");
}

#[test]
fn test_no_files_error() {
    let result = parse_extract_args(vec![], LogLevel::Info, None, false);
    assert_eq!(result.unwrap_err(), "No input files found");
}

#[test]
fn test_empty_path_error() {
    let result = parse_extract_args(vec![String::new()], LogLevel::Info, None, false);
    assert_eq!(result.unwrap_err(), "Empty file path");
}

#[test]
fn test_expand_env_vars_both_forms() {
    std::env::set_var("SV_HEADER_TEST_ROOT", "/proj");

    assert_eq!(
        expand_env_vars("$SV_HEADER_TEST_ROOT/rtl/${SV_HEADER_TEST_ROOT}.sv"),
        "/proj/rtl//proj.sv"
    );
}

#[test]
fn test_expand_env_vars_unknown_left_untouched() {
    std::env::remove_var("SV_HEADER_TEST_UNSET");

    assert_eq!(
        expand_env_vars("$SV_HEADER_TEST_UNSET/a/${SV_HEADER_TEST_UNSET}/b"),
        "$SV_HEADER_TEST_UNSET/a/${SV_HEADER_TEST_UNSET}/b"
    );
}

#[test]
fn test_expand_env_vars_malformed_references() {
    assert_eq!(expand_env_vars("cost$"), "cost$");
    assert_eq!(expand_env_vars("a${}b"), "a${}b");
    assert_eq!(expand_env_vars("${OPEN"), "${OPEN");
    assert_eq!(expand_env_vars("plain/path.sv"), "plain/path.sv");
}

#[test]
fn test_expand_file_path_through_env() {
    let dir = TempDir::new().unwrap();
    create_temp_file(&dir, "env.sv");
    std::env::set_var("SV_HEADER_TEST_DIR", dir.path());

    let expanded = expand_file_path("${SV_HEADER_TEST_DIR}/env.sv").unwrap();
    assert_eq!(expanded, dir.path().join("env.sv"));
    assert_eq!(expand_file_path("${SV_HEADER_TEST_DIR}/nope.sv"), None);
}

#[test]
fn test_log_level_filters() {
    assert_eq!(LogLevel::default(), LogLevel::Info);
    assert_eq!(LogLevel::Info.as_filter(), "info");
    assert_eq!(LogLevel::Debug.as_filter(), "debug");
}
