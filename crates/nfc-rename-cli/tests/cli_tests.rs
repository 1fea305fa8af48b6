use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;
use unicode_normalization::UnicodeNormalization;

fn nfd(s: &str) -> String {
    s.nfd().collect()
}

fn run_cli(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nfc-rename"))
        .args(args)
        .current_dir(cwd)
        .env_remove("TRACING_LEVEL")
        .env_remove("LOG_FILE_PATH")
        .env_remove("NFC_RENAME_DIR_ORDER")
        .output()
        .expect("failed to launch nfc-rename")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_missing_path_exits_1() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join(nfd("café.txt")), "x").unwrap();

    let output = run_cli(tmp.path(), &["does-not-exist"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
    assert!(tmp.path().join(nfd("café.txt")).exists());
}

#[test]
fn test_file_path_exits_1() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("file.txt"), "x").unwrap();

    let output = run_cli(tmp.path(), &["file.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a directory"));
}

#[test]
fn test_renames_tree_and_exits_0() {
    let tmp = tempdir().unwrap();
    let target = tmp.path().join("target");
    let dir = target.join(nfd("한글"));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(nfd("파일.txt")), "data").unwrap();

    let output = run_cli(tmp.path(), &["target"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Total items scanned: 2"), "{}", out);
    assert!(out.contains("Completed processing"), "{}", out);
    assert_eq!(
        fs::read_to_string(target.join("한글").join("파일.txt")).unwrap(),
        "data"
    );
}

#[test]
fn test_clean_tree_defaults_to_current_dir() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("한글.txt"), "x").unwrap();

    let output = run_cli(tmp.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("already in NFC form"), "{}", out);
    assert!(!out.contains("Completed processing"), "{}", out);
}

#[test]
fn test_verbose_prints_banners_and_traces() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join(nfd("café.txt")), "x").unwrap();

    let output = run_cli(tmp.path(), &["-v", "--dir-order", "depth-descending", "."]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Target directory:"), "{}", out);
    assert!(out.contains("Starting NFC normalization..."), "{}", out);
    assert!(out.contains("Scanning:"), "{}", out);
    assert!(out.contains("File needs rename:"), "{}", out);
    assert!(tmp.path().join("café.txt").exists());
}

#[test]
fn test_collision_is_reported_as_skip() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join(nfd("café.txt")), "decomposed").unwrap();
    fs::write(tmp.path().join("café.txt"), "composed").unwrap();

    let output = run_cli(tmp.path(), &["."]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Skipped (already exists):"));
    assert_eq!(
        fs::read_to_string(tmp.path().join("café.txt")).unwrap(),
        "composed"
    );
}

#[test]
fn test_fatal_error_reaches_log_file() {
    let tmp = tempdir().unwrap();
    let logs = tempdir().unwrap();
    let log_file = logs.path().join("nfc-rename.log");

    let output = Command::new(env!("CARGO_BIN_EXE_nfc-rename"))
        .arg("does-not-exist")
        .current_dir(tmp.path())
        .env_remove("TRACING_LEVEL")
        .env_remove("NFC_RENAME_DIR_ORDER")
        .env("LOG_FILE_PATH", &log_file)
        .output()
        .expect("failed to launch nfc-rename");

    assert_eq!(output.status.code(), Some(1));
    let logged = fs::read_to_string(&log_file).unwrap();
    assert!(logged.contains("ERROR"), "{}", logged);
    assert!(logged.contains("does not exist"), "{}", logged);
}
