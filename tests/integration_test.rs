use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn markdown_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".md")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write markdown");
    file
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_md2docx"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--strict"));
}

#[test]
fn test_cli_outline_uses_builtin_styles() {
    let input = markdown_file("# Title\n\nhello **world**\n");

    let output = Command::new(env!("CARGO_BIN_EXE_md2docx"))
        .arg(input.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "¶ [Heading1] Title\n¶ hello **world**\n");
}

#[test]
fn test_cli_config_overrides_style() {
    let input = markdown_file("# Title\n");
    let mut config = NamedTempFile::new().expect("Failed to create temp file");
    config
        .write_all(b"[styles]\nheading1 = \"Title\"\n")
        .expect("Failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_md2docx"))
        .arg(input.path())
        .arg("--config")
        .arg(config.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "¶ [Title] Title\n");
}

#[test]
fn test_cli_no_defaults_leaves_paragraph_unstyled() {
    let input = markdown_file("# Title\n");

    let output = Command::new(env!("CARGO_BIN_EXE_md2docx"))
        .arg(input.path())
        .arg("--no-defaults")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "¶ Title\n");
}

#[test]
fn test_cli_strict_rejects_unsupported_construct() {
    let input = markdown_file("a\n\n---\n\nb\n");

    let lenient = Command::new(env!("CARGO_BIN_EXE_md2docx"))
        .arg(input.path())
        .output()
        .expect("Failed to execute command");
    assert!(lenient.status.success());

    let strict = Command::new(env!("CARGO_BIN_EXE_md2docx"))
        .arg(input.path())
        .arg("--strict")
        .output()
        .expect("Failed to execute command");
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("Unsupported node kind"));
}

#[test]
fn test_cli_json_to_output_file() {
    let input = markdown_file("plain text\n");
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out_path = dir.path().join("dump.json");

    let output = Command::new(env!("CARGO_BIN_EXE_md2docx"))
        .arg(input.path())
        .arg(&out_path)
        .args(["--format", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let dump = std::fs::read_to_string(&out_path).expect("output written");
    let value: serde_json::Value = serde_json::from_str(&dump).expect("valid json");
    assert_eq!(
        value["body"][0]["paragraph"]["content"][0]["run"]["content"][0]["text"],
        "plain text"
    );
    assert_eq!(value["numbering"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_cli_missing_input_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_md2docx"))
        .arg("definitely/not/here.md")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("I/O error"));
}
