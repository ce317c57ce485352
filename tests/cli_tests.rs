#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::fs;
use tempfile::NamedTempFile;

const SAMPLE: &str = "#job_id,job_id_next,runtime_secs\n1,23,60\n2,3,23\n3,0,12\n23,0,30\n";

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("job-chains").expect("job-chains binary")
}

#[test]
fn cli_reads_stdin_and_prints_report() {
    cli()
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(str_contains("start_job: 1\nlast_job: 23\njob_len: 2\n"))
        .stdout(str_contains("avg_runtime: 00:00:17\n"));
}

#[test]
fn cli_reads_input_file_and_writes_output_file() {
    let input = NamedTempFile::new().expect("create input file");
    fs::write(input.path(), SAMPLE).unwrap();
    let output = NamedTempFile::new().expect("create output file");

    cli()
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(output.path()).unwrap();
    assert!(written.starts_with("---\nstart_job: 1\n"));
    assert!(written.ends_with("avg_runtime: 00:00:17\n\n"));
}

#[test]
fn cli_dash_means_stdin() {
    cli()
        .arg("-")
        .write_stdin("5,0,100\n")
        .assert()
        .success()
        .stdout(str_contains("last_job: 5"));
}

#[test]
fn cli_emits_json_on_request() {
    let assert = cli()
        .args(["--format", "json"])
        .write_stdin(SAMPLE)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[test]
fn cli_fails_on_malformed_input_without_output() {
    cli()
        .write_stdin("1,0,5\nabc,1,2\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(str_contains("line 2"));
}

#[test]
fn cli_rejects_unknown_format() {
    cli()
        .args(["--format", "xml"])
        .write_stdin(SAMPLE)
        .assert()
        .failure();
}

#[test]
fn cli_help_lists_report_formats() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(str_contains("possible values: yaml, json"));
}
