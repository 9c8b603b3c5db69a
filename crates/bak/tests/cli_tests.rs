//! Integration tests for the `bak` binary
//!
//! Runs the compiled binary against temporary directories, overriding HOME so
//! `--create` never touches the real home directory.

use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_bak(cwd: &Path, home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bak"))
        .args(args)
        .current_dir(cwd)
        .env("HOME", home)
        .output()
        .expect("failed to run bak binary")
}

fn tgz_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "tgz"))
        .collect()
}

#[test]
fn test_create_writes_template() {
    let work = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    let output = run_bak(work.path(), home.path(), &["--create", "bak.json"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Created 'bak.json'."));

    let content = fs::read_to_string(work.path().join("bak.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    let home_str = home.path().to_string_lossy().into_owned();
    assert_eq!(json["root"].as_str(), Some(home_str.as_str()));
    assert_eq!(
        json["files"],
        serde_json::json!(["pictures", "videos/funny_vid.mp4"])
    );
}

#[test]
fn test_create_refuses_existing_file() {
    let work = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    fs::write(work.path().join("bak.json"), "mine").unwrap();

    let output = run_bak(work.path(), home.path(), &["--create", "bak.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("File already exists"));
    assert_eq!(
        fs::read_to_string(work.path().join("bak.json")).unwrap(),
        "mine"
    );
}

#[test]
fn test_silent_suppresses_messages() {
    let work = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    fs::write(work.path().join("bak.json"), "mine").unwrap();

    let output = run_bak(work.path(), home.path(), &["--create", "-s", "bak.json"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let output = run_bak(work.path(), home.path(), &["--create", "-s", "other.json"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(work.path().join("other.json").is_file());
}

#[test]
fn test_use_missing_config_fails() {
    let work = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    let output = run_bak(work.path(), home.path(), &["--use", "missing.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("either does not exist or it is not a file"));
}

#[test]
fn test_use_invalid_root_fails() {
    let work = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let config = serde_json::json!({
        "root": work.path().join("nope").to_string_lossy(),
        "files": ["a.txt"],
    });
    fs::write(work.path().join("bak.json"), config.to_string()).unwrap();

    let output = run_bak(work.path(), home.path(), &["--use", "bak.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'root directory' provided is not valid"));
    assert!(!stderr.contains("Unknown error"));
    assert!(tgz_files(work.path()).is_empty());
}

#[test]
fn test_use_packs_and_reports_digest() {
    let work = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("pics")).unwrap();
    fs::write(root.path().join("pics/one.jpg"), b"jpeg").unwrap();
    fs::write(root.path().join("note.txt"), b"note").unwrap();

    let config = serde_json::json!({
        "root": root.path().to_string_lossy(),
        "files": ["pics", "note.txt", "missing.txt"],
    });
    fs::write(work.path().join("bak.json"), config.to_string()).unwrap();

    let output = run_bak(
        work.path(),
        home.path(),
        &["--use", "bak.json", "--name", "Home"],
    );
    assert!(output.status.success());

    let archives = tgz_files(work.path());
    assert_eq!(archives.len(), 1);
    let name = archives[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("Home-"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MD5"));

    let extract_dir = TempDir::new().unwrap();
    tar::Archive::new(GzDecoder::new(File::open(&archives[0]).unwrap()))
        .unpack(extract_dir.path())
        .unwrap();
    assert!(extract_dir.path().join("pics/one.jpg").is_file());
    assert!(extract_dir.path().join("note.txt").is_file());
    assert!(!extract_dir.path().join("missing.txt").exists());
}

#[test]
fn test_use_writes_to_output_dir() {
    let work = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let config = serde_json::json!({
        "root": work.path().to_string_lossy(),
        "files": [],
    });
    fs::write(work.path().join("bak.json"), config.to_string()).unwrap();

    let out_arg = out_dir.path().to_string_lossy().into_owned();
    let output = run_bak(
        work.path(),
        home.path(),
        &["--use", "-s", "bak.json", "--output-dir", &out_arg],
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(tgz_files(out_dir.path()).len(), 1);
    assert!(tgz_files(work.path()).is_empty());
}

#[test]
fn test_mode_is_required() {
    let work = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    let output = run_bak(work.path(), home.path(), &["bak.json"]);
    assert!(!output.status.success());
}
