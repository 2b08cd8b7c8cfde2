use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn sqlfmt() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sqlfmt"))
}

#[test]
fn test_writes_formatted_sibling() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("script.sql");
    fs::write(&input, "#define N 2\nselect\nfoo(1, N)\nfoo(1\n").unwrap();

    let output = sqlfmt().arg(&input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("script.sql.formatted"));

    let formatted = fs::read_to_string(dir.path().join("script.sql.formatted")).unwrap();
    assert_eq!(
        formatted,
        "select\nfoo (\n);\nfoo (\n\
         -- Error: Missing closing parenthesis for function call.\n\
         -- Error: Function 'foo' at line 2 expects 2 arguments, but 1 were provided.\n\
         );\n"
    );
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.sql");

    let output = sqlfmt().arg(&input).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("absent.sql"));
    assert!(!dir.path().join("absent.sql.formatted").exists());
}

#[test]
fn test_requires_exactly_one_argument() {
    let output = sqlfmt().output().unwrap();
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());

    let output = sqlfmt().args(["a.sql", "b.sql"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_non_utf8_input_is_formatted() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("latin1.sql");
    fs::write(&input, b"select caf\xe9\nfoo(1)\n").unwrap();

    let output = sqlfmt().arg(&input).output().unwrap();
    assert!(output.status.success());

    let formatted = fs::read_to_string(dir.path().join("latin1.sql.formatted")).unwrap();
    assert_eq!(formatted, "select\ncaf;\nfoo (\n);\n");
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("script.sql");
    fs::write(&input, "select\n").unwrap();
    fs::create_dir(dir.path().join("script.sql.formatted")).unwrap();

    let output = sqlfmt().arg(&input).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("script.sql.formatted"));
}
