use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

/// Build a command isolated from the user's home and working directory.
fn cmd(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("resume").expect("resume binary");
    cmd.current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf8 stdout")
}

#[test]
fn prints_builtin_name() {
    let tmp = TempDir::new().expect("temp dir");
    cmd(&tmp)
        .arg("--name")
        .assert()
        .success()
        .stdout("Alex Morgan\n");
}

#[test]
fn shows_whole_resume_by_default() {
    let tmp = TempDir::new().expect("temp dir");
    let out = stdout_of(cmd(&tmp).arg("--plain"));
    assert!(out.contains("Alex Morgan"));
    assert!(out.contains("Education"));
    assert!(out.contains("tidewatch"));
    assert!(out.contains("RustConf"));
}

#[test]
fn json_output_parses() {
    let tmp = TempDir::new().expect("temp dir");
    let out = stdout_of(cmd(&tmp).arg("--json"));
    let value: Value = serde_json::from_str(&out).expect("valid json output");
    assert_eq!(value["name"], "Alex Morgan");
    assert_eq!(value["contact"]["email"], "alex.morgan@example.com");
}

#[test]
fn json_resume_output_has_basics() {
    let tmp = TempDir::new().expect("temp dir");
    let out = stdout_of(cmd(&tmp).arg("--json-resume"));
    let value: Value = serde_json::from_str(&out).expect("valid json output");
    assert_eq!(value["basics"]["name"], "Alex Morgan");
    assert!(value["projects"].as_array().is_some_and(|projects| projects.len() == 2));
}

#[test]
fn selects_project_by_position() {
    let tmp = TempDir::new().expect("temp dir");
    let out = stdout_of(cmd(&tmp).args(["--plain", "--projects", "1"]));
    assert!(out.contains("tidewatch"));
    assert!(!out.contains("inkwell"));
}

#[test]
fn selects_project_by_name() {
    let tmp = TempDir::new().expect("temp dir");
    let out = stdout_of(cmd(&tmp).args(["--plain", "--projects=INK"]));
    assert!(out.contains("inkwell"));
    assert!(!out.contains("tidewatch"));
}

#[test]
fn unknown_flags_are_ignored() {
    let tmp = TempDir::new().expect("temp dir");
    cmd(&tmp)
        .args(["--frobnicate", "--name"])
        .assert()
        .success()
        .stdout("Alex Morgan\n");
}

#[test]
fn missing_field_warns_without_failing() {
    let tmp = TempDir::new().expect("temp dir");
    cmd(&tmp)
        .arg("--github")
        .assert()
        .success()
        .stderr(contains("Warning"));
}

#[test]
fn reads_resume_from_data_dir() {
    let tmp = TempDir::new().expect("temp dir");
    let data = tmp.path().join("mine");
    fs::create_dir_all(&data).expect("create data dir");
    fs::write(
        data.join("resume.json"),
        r#"{"name": "Jordan Lee", "contact": {"email": "jordan@example.org"}}"#,
    )
    .expect("write resume");

    cmd(&tmp)
        .args(["--data-dir", "mine", "--email"])
        .assert()
        .success()
        .stdout("jordan@example.org\n");
}

#[test]
fn reads_data_dir_from_config() {
    let tmp = TempDir::new().expect("temp dir");
    let data = tmp.path().join("cv");
    fs::create_dir_all(&data).expect("create data dir");
    fs::write(data.join("resume.txt"), "Jordan Lee\nAustin, Texas\n").expect("write resume");
    fs::write(tmp.path().join(".resume.toml"), "data_dir = \"cv\"\n").expect("write config");

    cmd(&tmp)
        .arg("--location")
        .assert()
        .success()
        .stdout("Austin, Texas\n");
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().expect("temp dir");
    fs::write(tmp.path().join(".resume.toml"), "width_percent = 0\n").expect("write config");

    cmd(&tmp).arg("--name").assert().failure().code(1);
}

#[test]
fn saves_plain_text_file() {
    let tmp = TempDir::new().expect("temp dir");
    cmd(&tmp)
        .args(["--save", "out.txt"])
        .assert()
        .success()
        .stdout(contains("out.txt"));

    let saved = fs::read_to_string(tmp.path().join("out.txt")).expect("read saved file");
    assert!(saved.starts_with("Alex Morgan\n"));
    assert!(saved.contains("PROJECTS"));
}

#[test]
fn ascii_output_is_ascii() {
    let tmp = TempDir::new().expect("temp dir");
    let out = stdout_of(cmd(&tmp).args(["--ascii", "--width-perc", "80"]));
    assert!(out.is_ascii());
    assert!(out.contains("Alex Morgan"));
}

#[test]
fn rejects_out_of_range_width() {
    let tmp = TempDir::new().expect("temp dir");
    cmd(&tmp).args(["--width-perc", "0"]).assert().failure();
}

#[test]
fn repeated_flags_still_succeed() {
    let tmp = TempDir::new().expect("temp dir");
    cmd(&tmp)
        .args(["--name", "--name"])
        .assert()
        .success()
        .stdout("Alex Morgan\n");
}
