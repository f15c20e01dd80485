use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sizzl(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sizzl").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn project_dir(tmp: &TempDir, name: &str) -> std::path::PathBuf {
    let dir = tmp.path().join(name);
    fs::create_dir(&dir).unwrap();
    dir
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_help_exits_before_questions() {
    let tmp = TempDir::new().unwrap();
    let dir = project_dir(&tmp, "app");

    sizzl(&dir)
        .arg("rlhw")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Flags:"))
        .stdout(predicate::str::contains("Description").not());

    assert!(!dir.join("package.json").exists());
}

#[test]
fn test_answers_from_stdin() {
    let tmp = TempDir::new().unwrap();
    let dir = project_dir(&tmp, "app");

    sizzl(&dir)
        .write_stdin("A CLI\ncli, tool, scaffold\nAda\nada\nsizzler\n\n\n\n\nISC\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Package Name (app) "))
        .stdout(predicate::str::contains("GitHub Repository Name (sizzler) "))
        .stdout(predicate::str::contains("Created 2 artifacts for sizzler in "))
        .stdout(predicate::str::contains("Process complete!"));

    let manifest = read_json(&dir.join("package.json"));
    assert_eq!(manifest["name"], "sizzler");
    assert_eq!(manifest["keywords"], serde_json::json!(["cli", "tool", "scaffold"]));
    assert_eq!(manifest["license"], "ISC");
    assert_eq!(manifest["repository"]["url"], "git+https://github.com/ada/sizzler.git");

    let lock = read_json(&dir.join("package-lock.json"));
    assert_eq!(lock["lockfileVersion"], 1);
}

#[test]
fn test_skip_defaults_with_no_input() {
    let tmp = TempDir::new().unwrap();
    let dir = project_dir(&tmp, "defaults");

    sizzl(&dir).arg("d").write_stdin("").assert().success();

    let manifest = read_json(&dir.join("package.json"));
    assert_eq!(manifest["name"], "defaults");
    assert_eq!(manifest["version"], "1.0.0");
    assert_eq!(manifest["main"], "index.js");
    assert_eq!(manifest["scripts"]["test"], "node tests/test.js");
    assert_eq!(manifest["license"], "MIT");
    assert_eq!(manifest["description"], "");
    assert_eq!(manifest["keywords"], serde_json::json!([]));
    assert_eq!(manifest["homepage"], "https://github.com//defaults#readme");
}

#[test]
fn test_unsupported_license_warns() {
    let tmp = TempDir::new().unwrap();
    let dir = project_dir(&tmp, "app");

    sizzl(&dir)
        .arg("l")
        .write_stdin("\n\n\n\n\n\n\n\n\nApache-2.0\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARN]"))
        .stderr(predicate::str::contains("Apache-2.0"));

    assert!(!dir.join("LICENSE.md").exists());
}

#[test]
fn test_unlicensed_is_silent() {
    let tmp = TempDir::new().unwrap();
    let dir = project_dir(&tmp, "app");

    sizzl(&dir)
        .arg("l")
        .write_stdin("\n\n\n\n\n\n\n\n\nUNLICENSED\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(!dir.join("LICENSE.md").exists());
}

#[test]
fn test_web_app_twice_warns_on_existing_dirs() {
    let tmp = TempDir::new().unwrap();
    let dir = project_dir(&tmp, "site-app");

    sizzl(&dir).arg("dw").write_stdin("").assert().success();
    let first = fs::read_to_string(dir.join("site/host/index.html")).unwrap();

    sizzl(&dir)
        .arg("dw")
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("Directory \"site\" already exists."))
        .stderr(predicate::str::contains("Directory \"site/host\" already exists."));

    assert_eq!(fs::read_to_string(dir.join("site/host/index.html")).unwrap(), first);
    assert_eq!(fs::read_to_string(dir.join("site/host/404.html")).unwrap(), first);
}

#[test]
fn test_stub_dirs_twice_warn_and_stay_empty() {
    let tmp = TempDir::new().unwrap();
    let dir = project_dir(&tmp, "node-app");

    sizzl(&dir)
        .arg("dtn")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 6 artifacts"));

    fs::write(dir.join("tests/test.js"), "console.log('edited')").unwrap();

    sizzl(&dir)
        .arg("dtn")
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("Directory \"tests\" already exists."))
        .stderr(predicate::str::contains("Directory \"lib\" already exists."))
        .stdout(predicate::str::contains("Created 4 artifacts"));

    assert_eq!(fs::read(dir.join("tests/test.js")).unwrap(), Vec::<u8>::new());
    assert_eq!(fs::read(dir.join("lib/index.js")).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_non_utf8_answer_is_kept_lossily() {
    let tmp = TempDir::new().unwrap();
    let dir = project_dir(&tmp, "app");

    sizzl(&dir)
        .arg("d")
        .write_stdin(&b"Caf\xE9\n\n\n\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Process complete!"));

    let manifest = read_json(&dir.join("package.json"));
    assert_eq!(manifest["description"], "Caf\u{FFFD}");
}

#[test]
fn test_failed_directory_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let dir = project_dir(&tmp, "app");
    fs::write(dir.join("site"), "a file, not a directory").unwrap();

    sizzl(&dir)
        .arg("dwn")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("[FATAL]"))
        .stdout(predicate::str::contains("Process complete!").not());

    assert!(!dir.join("lib").exists());
}
