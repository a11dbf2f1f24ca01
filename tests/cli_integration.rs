use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn terse(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("terse").unwrap();
    cmd.current_dir(dir)
        .env("TERSE_CONFIG_DIR", dir.join("config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_write_show_and_file_layout() {
    let temp_dir = tempfile::tempdir().unwrap();

    terse(temp_dir.path())
        .args(["-f", "book", "write", "m1", "First page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 words"));

    terse(temp_dir.path())
        .args(["-f", "book", "write", "1-1-1-1-1-1-1-1-2", "Second page"])
        .assert()
        .success();

    terse(temp_dir.path())
        .args(["-f", "book", "show", "m2"])
        .assert()
        .success()
        .stdout("Second page\n");

    let raw = std::fs::read_to_string(temp_dir.path().join("book.terse")).unwrap();
    assert_eq!(raw, "First page\u{17}Second page");
}

#[test]
fn test_write_from_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();

    terse(temp_dir.path())
        .args(["write", "w3"])
        .write_stdin("piped\ntext\n")
        .assert()
        .success();

    terse(temp_dir.path())
        .args(["show", "w3"])
        .assert()
        .success()
        .stdout("piped\ntext\n");
}

#[test]
fn test_existing_file_is_decoded() {
    let temp_dir = tempfile::tempdir().unwrap();
    let text = "Line 1 Page 1 Section 1\u{17}Line 1 Page 2 Section 1\n\u{18}Line 1 Page 1 Section 2";
    std::fs::write(temp_dir.path().join("notes.terse"), text).unwrap();

    terse(temp_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("scrolls 3"))
        .stdout(predicate::str::contains("words 18"));

    terse(temp_dir.path())
        .args(["list", "--search", "page 2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("p1g1s1y1h1e1w1i1m2"))
        .stdout(predicate::str::contains("Line 1 Page 2 Section 1"))
        .stdout(predicate::str::contains("Section 2").not());
}

#[test]
fn test_non_utf8_file_still_opens() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("notes.terse"), b"caf\xe9\x17next").unwrap();

    terse(temp_dir.path())
        .args(["show", "m2"])
        .assert()
        .success()
        .stdout("next\n");
}

#[test]
fn test_write_empty_text_clears_scroll() {
    let temp_dir = tempfile::tempdir().unwrap();

    terse(temp_dir.path())
        .args(["write", "w5", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared p1g1s1y1h1e1w5i1m1"));

    let raw = std::fs::read_to_string(temp_dir.path().join("notes.terse")).unwrap();
    assert_eq!(raw, "");
}

#[test]
fn test_locate_reports_offset() {
    let temp_dir = tempfile::tempdir().unwrap();

    terse(temp_dir.path())
        .args(["write", "m1", "1-1-1 AAA"])
        .assert()
        .success();
    terse(temp_dir.path())
        .args(["write", "w50i33m22", "50-33-22 ZZZ"])
        .assert()
        .success();

    terse(temp_dir.path())
        .args(["locate", "w50i33m22"])
        .assert()
        .success()
        .stdout("111\n");
}

#[test]
fn test_coord_normalizes() {
    let temp_dir = tempfile::tempdir().unwrap();

    terse(temp_dir.path())
        .args(["coord", "1-2-3-4-5-6-7-8-9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("p1g2s3y4h5e6w7i8m9"));
}

#[test]
fn test_invalid_coordinate_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    terse(temp_dir.path())
        .args(["show", "1-2-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid coordinate"));

    terse(temp_dir.path())
        .args(["show", "p1x2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown level tag"));
}

#[test]
fn test_config_switches_to_dashed_addresses() {
    let temp_dir = tempfile::tempdir().unwrap();

    terse(temp_dir.path())
        .args(["config", "tagged", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tagged set to false"));

    terse(temp_dir.path())
        .args(["write", "w2", "dashed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1-1-1-1-1-1-2-1-1"));

    terse(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("tagged = false"))
        .stdout(predicate::str::contains("file-ext = .terse"));
}

#[test]
fn test_export_creates_archive() {
    let temp_dir = tempfile::tempdir().unwrap();

    terse(temp_dir.path())
        .args(["write", "m1", "exported"])
        .assert()
        .success();

    terse(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 scrolls"));

    let archives: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tar.gz"))
        .collect();
    assert_eq!(archives.len(), 1);
}
