use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const MODEL_GO: &str = r#"package model

// Account is stored in two backends.
type Account struct {
	ID       string `json:"id" bson:"_id"`
	FullName string `json:"full_name"`
	APIKey   string
}
"#;

fn tgconst(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tgconst").unwrap();
    cmd.current_dir(workdir.path())
        .env("HOME", workdir.path())
        .env("XDG_CONFIG_HOME", workdir.path().join(".config"))
        .args(["--no-color", "--no-fmt"]);
    cmd
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn generates_constants_file() {
    let work = tempdir().unwrap();
    write(work.path(), "account.go", MODEL_GO);

    tgconst(&work)
        .args(["--tag", "json", "--missing-tag-format", "snakecase", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("model_tgconst_gen.go"));

    let generated = fs::read_to_string(work.path().join("model_tgconst_gen.go")).unwrap();
    assert!(generated.starts_with("// Code generated by tgconst; DO NOT EDIT.\npackage model\n"));
    assert!(generated.contains("\tAccount_ID_json= \"id\"\n"));
    assert!(generated.contains("\tAccount_FullName_json= \"full_name\"\n"));
    assert!(generated.contains("\tAccount_APIKey= \"api_key\"\n"));
    assert!(!generated.contains("bson"));
}

#[test]
fn only_tagged_without_tags_writes_nothing() {
    let work = tempdir().unwrap();
    write(work.path(), "plain.go", "package plain\n\ntype P struct {\n\tA int\n}\n");

    tgconst(&work)
        .arg("--only-tagged")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to generate."));

    assert!(!work.path().join("plain_tgconst_gen.go").exists());
}

#[test]
fn stdout_mode_prints_code_without_writing() {
    let work = tempdir().unwrap();
    write(work.path(), "account.go", MODEL_GO);

    tgconst(&work)
        .args(["--stdout", "-m", "camelcase"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\tAccount_ID_bson= \"_id\"\n"))
        .stdout(predicate::str::contains("\tAccount_APIKey= \"aPIKey\"\n"));

    assert!(!work.path().join("model_tgconst_gen.go").exists());
}

#[test]
fn recursive_run_reports_json() {
    let work = tempdir().unwrap();
    write(&work.path().join("api"), "account.go", MODEL_GO);

    let assert = tgconst(&work)
        .args(["-r", "--format", "json"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let generated = report["generated"].as_array().unwrap();
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0]["package"], "model");
    assert_eq!(generated[0]["constants"], 4);
    assert!(work.path().join("api").join("model_tgconst_gen.go").exists());
}

#[test]
fn local_config_file_is_honored() {
    let work = tempdir().unwrap();
    write(work.path(), "account.go", MODEL_GO);
    write(
        work.path(),
        ".tgconst.toml",
        "tags = [\"bson\"]\nonly_tagged_fields = true\n",
    );

    tgconst(&work).assert().success();

    let generated = fs::read_to_string(work.path().join("model_tgconst_gen.go")).unwrap();
    assert!(generated.contains("\tAccount_ID_bson= \"_id\"\n"));
    assert!(!generated.contains("json"));
    assert!(!generated.contains("APIKey"));
}

#[test]
fn mixed_packages_fail() {
    let work = tempdir().unwrap();
    write(work.path(), "account.go", MODEL_GO);
    write(work.path(), "other.go", "package other\n\ntype O struct {\n\tB int `json:\"b\"`\n}\n");

    tgconst(&work)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Inconsistent package"));
}

#[test]
fn rejects_unknown_format() {
    let work = tempdir().unwrap();

    tgconst(&work)
        .args(["--missing-tag-format", "shouting"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn warns_when_format_is_ignored() {
    let work = tempdir().unwrap();
    write(work.path(), "account.go", MODEL_GO);

    tgconst(&work)
        .args(["--only-tagged", "-m", "snakecase"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:"));
}

#[test]
fn cli_switches_off_config_booleans() {
    let work = tempdir().unwrap();
    write(&work.path().join("api"), "account.go", MODEL_GO);
    write(work.path(), "account.go", MODEL_GO);
    write(
        work.path(),
        ".tgconst.toml",
        "recursive = true\nonly_tagged_fields = true\n",
    );

    tgconst(&work)
        .args(["--no-recursive", "--no-only-tagged"])
        .assert()
        .success();

    let generated = fs::read_to_string(work.path().join("model_tgconst_gen.go")).unwrap();
    assert!(generated.contains("\tAccount_APIKey= \"APIKey\"\n"));
    assert!(!work.path().join("api").join("model_tgconst_gen.go").exists());
}

#[test]
fn untagged_rerun_removes_stale_output() {
    let work = tempdir().unwrap();
    write(work.path(), "account.go", MODEL_GO);
    let out = work.path().join("model_tgconst_gen.go");

    tgconst(&work).arg("--only-tagged").assert().success();
    assert!(out.exists());

    write(work.path(), "account.go", "package model\n\ntype Account struct {\n\tID string\n}\n");
    tgconst(&work)
        .arg("--only-tagged")
        .assert()
        .success()
        .stdout(predicate::str::contains("removed stale"));

    assert!(!out.exists());
}
