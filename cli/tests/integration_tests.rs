use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const BACKUP_SCHEMA: &str = r#"program: backup
arguments:
  - { short: v, long: verbose, description: Chatty output }
  - { short: d, long: destination, quantity: 1, value: dir }
"#;

fn write_schema(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write schema");
    path
}

fn argot(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argot"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("ARGOT_LOG")
        .output()
        .expect("failed to run argot")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn test_check_counts_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "backup.yaml", BACKUP_SCHEMA);
    let schema = schema.to_str().unwrap();

    let out = argot(&["check", schema]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "Validated 3 argument(s).");

    let out = argot(&["check", schema, "--no-auto-help"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "Validated 2 argument(s).");
}

#[test]
fn test_check_reports_schema_errors() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(
        dir.path(),
        "bad.json",
        r#"{"arguments": [{"short": "ab", "long": "alpha"}]}"#,
    );

    let out = argot(&["check", schema.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));

    let text = stdout(&out);
    assert!(
        text.contains("ERROR: Each argument spec :short must be a single character only."),
        "unexpected output: {text}"
    );
    assert!(text.contains("       \"ab\" is not valid."));
}

#[test]
fn test_help_prints_schema_listing() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "backup.yaml", BACKUP_SCHEMA);

    let out = argot(&["help", schema.to_str().unwrap()]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains(
        "backup specifies the following valid arguments. Any other arguments will cause an error:"
    ));
    assert!(text.contains("-v  --verbose"));
    assert!(text.contains("Chatty output"));
    assert!(text.contains("--destination <DIR>"));
}

#[test]
fn test_process_outputs_json() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "backup.yaml", BACKUP_SCHEMA);

    let out = argot(&["process", schema.to_str().unwrap(), "--", "-v", "-d", "/mnt"]);
    assert!(out.status.success(), "stdout: {}", stdout(&out));

    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["destination"], serde_json::json!(["/mnt"]));
    assert_eq!(value["verbose"], serde_json::json!([null]));
    assert_eq!(value["help"], serde_json::json!([]));
}

#[test]
fn test_process_outputs_table() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "backup.yaml", BACKUP_SCHEMA);

    let out = argot(&[
        "process",
        schema.to_str().unwrap(),
        "--format",
        "table",
        "--",
        "-d",
        "/mnt",
    ]);
    assert!(out.status.success());

    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("ARGUMENT"));
    assert!(
        lines
            .iter()
            .any(|line| line.starts_with("destination") && line.ends_with("/mnt"))
    );
}

#[test]
fn test_process_quantity_failure_exits_with_error_block() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "backup.yaml", BACKUP_SCHEMA);

    let out = argot(&["process", schema.to_str().unwrap(), "--", "-v"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stdout(&out),
        "\nERROR: Incorrect quantity of values for the following argument:\n       --destination : one value\n"
    );
}

#[test]
fn test_process_help_flag_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "backup.yaml", BACKUP_SCHEMA);

    // Quantity rules are skipped when help is requested.
    let out = argot(&["process", schema.to_str().unwrap(), "--", "-?"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("backup specifies the following valid arguments."));
}

#[test]
fn test_process_unknown_argument() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "backup.yaml", BACKUP_SCHEMA);

    let out = argot(&["process", schema.to_str().unwrap(), "--", "-z"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("ERROR: The argument \"-z\" is not a valid argument"));
}

#[test]
fn test_load_errors_go_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");

    let out = argot(&["check", missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("error: Failed to load"));

    let unsupported = write_schema(dir.path(), "schema.txt", BACKUP_SCHEMA);
    let out = argot(&["check", unsupported.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("error: Failed to load"));
}
