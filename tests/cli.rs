use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("msjson-plot"))
}

#[test]
fn no_argument_prints_usage() {
    cmd()
        .assert()
        .success()
        .stdout(contains("usage:").and(contains("input-json")));
}

#[test]
fn help_and_version_are_available() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("INPUT_JSON").and(contains("Usage:")));
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn extra_arguments_are_rejected() {
    cmd().arg("a.json").arg("b.json").assert().failure();
}

#[test]
fn missing_file_is_reported() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.json");

    cmd()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("missing.json")));
}

#[test]
fn bad_json_is_reported() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("broken.json");
    std::fs::write(&input, "[{\"mzs\": [1.0,").expect("write input");

    cmd()
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("parsing JSON"));
}

#[test]
fn misaligned_payload_is_reported() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("xic.json");
    // 12 zero bytes: one and a half doubles
    std::fs::write(
        &input,
        r#"{"content":[{"X":"AAAAAAAAAAAAAAAA","Y":"AAAAAAAAAAAAAAAA"}]}"#,
    )
    .expect("write input");

    cmd()
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("record 0").and(contains("not a multiple of 8")));
}
