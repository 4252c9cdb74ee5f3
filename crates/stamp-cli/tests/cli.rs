//! Runs the built `json-stamp` binary against files in a temp directory.
//!
//! Run with: cargo test --package stamp-cli --test cli

use pretty_assertions::assert_eq;
use stamp_test_utils::JsonFixture;
use std::process::{Command, Output};

const SUCCESS_LINE: &str = "Updated JSON file successfully!\n";

/// Run the binary from inside the fixture directory
fn run_in(fixture: &JsonFixture, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_json-stamp"))
        .args(args)
        .current_dir(fixture.dir())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn stamps_default_file_and_confirms() {
    let fixture = JsonFixture::with_text(r#"[{"symbol":"AAPL"}]"#);

    let output = run_in(&fixture, &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), SUCCESS_LINE);
    assert_eq!(
        fixture.read_text(),
        "[\n  {\n    \"symbol\": \"AAPL\",\n    \"assetType\": \"stocks\"\n  }\n]"
    );
}

#[test]
fn top_level_object_fails_without_touching_file() {
    let fixture = JsonFixture::with_text("{}");

    let output = run_in(&fixture, &[]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(fixture.read_text(), "{}");

    let stderr = stderr(&output);
    assert_eq!(stderr.matches("expected a JSON array of objects").count(), 1);
    assert!(stderr.contains("tickers.json"));
}

#[test]
fn missing_file_fails_without_creating_it() {
    let fixture = JsonFixture::missing();

    let output = run_in(&fixture, &[]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(!fixture.exists());
    assert!(stderr(&output).contains("file not found"));
}

#[test]
fn ensure_ascii_flag_escapes_output() {
    let fixture = JsonFixture::with_text(r#"[{"name":"Nestlé"}]"#);

    let output = run_in(&fixture, &["--ensure-ascii", "--atomic"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), SUCCESS_LINE);
    let text = fixture.read_text();
    assert!(text.is_ascii());
    assert!(text.contains(r#""name": "Nestl\u00e9""#));
}
