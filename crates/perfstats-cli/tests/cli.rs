use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const STATS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testResults>
  <Group label="Login">
    <succ value="95"/>
    <fail value="5"/>
    <avg_rt value="0.250"/>
    <perc param="0.0" value="0.010"/>
    <perc param="50.0" value="0.200"/>
    <perc param="90.0" value="0.450"/>
    <perc param="100.0" value="0.900"/>
    <rc param="200" value="95"/>
    <rc param="500" value="5"/>
    <bytes value="102400"/>
  </Group>
  <Group label="Broken">
    <succ value="n/a"/>
    <fail value="0"/>
    <avg_rt value="0.1"/>
  </Group>
</testResults>
"#;

fn perfstats(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_perfstats"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should run")
}

fn fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("writing fixture should succeed");
    path
}

#[test]
fn prints_table_and_exits_zero() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = fixture(
        dir.path(),
        "stats.xml",
        &STATS.replace(r#"<succ value="n/a"/>"#, r#"<succ value="3"/>"#),
    );
    let output = perfstats(&[path.to_str().expect("utf-8 path")]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Label"));
    assert!(lines[1].starts_with("Login"));
    assert!(lines[1].contains("200 (95), 500 (5)"));
    assert!(lines[2].starts_with("Broken"));
}

#[test]
fn data_error_aborts_with_exit_code_three() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = fixture(dir.path(), "stats.xml", STATS);
    let output = perfstats(&["--input", path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Broken"), "stderr: {stderr}");
    assert!(stderr.contains("succ"), "stderr: {stderr}");
}

#[test]
fn skip_invalid_renders_remaining_groups() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = fixture(dir.path(), "stats.xml", STATS);
    let output = perfstats(&["--skip-invalid", path.to_str().expect("utf-8 path")]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert_eq!(stdout.lines().count(), 2);
    assert!(!stdout.contains("Broken"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("skipping group"), "stderr: {stderr}");
}

#[test]
fn malformed_xml_exits_with_code_four_and_no_output() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = fixture(dir.path(), "stats.xml", "<testResults><Group label=\"x\">");
    let output = perfstats(&[path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Parse error"), "stderr: {stderr}");
    assert!(stderr.contains("stats.xml"), "stderr: {stderr}");
}

#[test]
fn help_lists_exit_codes() {
    let output = perfstats(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4 unreadable or malformed report"), "stdout: {stdout}");
}

#[test]
fn missing_file_exits_with_code_four() {
    let output = perfstats(&["/nonexistent/dir/stats.xml"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_input_argument_is_usage_error() {
    let output = perfstats(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
