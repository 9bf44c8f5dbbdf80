use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn lox() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_lox"));
    command
        .env("LOX_CONFIG", "no-such-dir/config.json")
        .env_remove("LOX_DEBUG");
    command
}

/// A file in the temp dir that is removed when the test ends.
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str, contents: &str) -> Self {
        let file_name = format!("lox-cli-{}-{}", std::process::id(), name);
        let path = std::env::temp_dir().join(file_name);
        fs::write(&path, contents).unwrap();
        TempFile(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn scans_a_clean_file() {
    let script = TempFile::new("clean.lox", "var x = 12;\n");
    let output = lox().arg(script.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "VAR var\nIDENTIFIER x\nEQUAL =\nNUMBER 12 12.0\nSEMICOLON ;\nEOF \n"
    );
    assert!(stderr(&output).is_empty());
}

#[test]
fn lexical_errors_exit_65_after_full_scan() {
    let script = TempFile::new("errors.lox", "@\nprint \"unterminated");
    let output = lox().arg(script.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(stdout(&output), "PRINT print\nEOF \n");
    assert_eq!(
        stderr(&output),
        "[line 1] Error: Unexpected character.\n[line 2] Error: Unterminated string.\n"
    );
}

#[test]
fn too_many_arguments_is_usage_error() {
    let output = lox().args(["a.lox", "b.lox"]).output().unwrap();

    assert_eq!(output.status.code(), Some(64));
    assert!(stdout(&output).is_empty());
    assert_eq!(stderr(&output).trim_end(), "Usage: lox [script]");
}

#[test]
fn missing_script_exits_74() {
    let output = lox().arg("no/such/script.lox").output().unwrap();
    assert_eq!(output.status.code(), Some(74));
}

#[test]
fn json_format() {
    let script = TempFile::new("json.lox", "\"hi\"");
    let output = lox().arg("--format").arg("json").arg(script.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout(&output);
    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(
        first,
        serde_json::json!({ "kind": "STRING", "lexeme": "\"hi\"", "literal": "hi", "line": 1 })
    );
}

#[test]
fn prompt_resets_errors_between_lines() {
    let mut child = lox()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"@\nnil\n\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "> EOF \n> NIL nil\nEOF \n> ");
    assert_eq!(stderr(&output), "[line 1] Error: Unexpected character.\n");
}

#[test]
fn malformed_config_exits_78() {
    let config = TempFile::new("bad-config.json", "{ not json");
    let output = lox()
        .env("LOX_CONFIG", config.path())
        .arg("no/such/script.lox")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(78));
    assert!(stdout(&output).is_empty());
    let stderr = stderr(&output);
    assert!(stderr.starts_with("ConfigError: "), "{}", stderr);
    assert!(stderr.contains(&config.path().display().to_string()), "{}", stderr);
}

#[test]
fn config_file_sets_format() {
    let config = TempFile::new("json-config.json", r#"{ "format": "json" }"#);
    let script = TempFile::new("config-format.lox", "nil");
    let output = lox()
        .env("LOX_CONFIG", config.path())
        .arg(script.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with(r#"{"kind":"NIL""#), "{}", stdout(&output));
}

#[test]
fn debug_env_prints_scan_summary() {
    let script = TempFile::new("debug-env.lox", "x @");
    let output = lox().env("LOX_DEBUG", "1").arg(script.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(
        stderr(&output),
        "[line 1] Error: Unexpected character.\n[debug] scanned 2 token(s), 1 error(s)\n"
    );
}

#[test]
fn debug_flag_overrides_config() {
    let config = TempFile::new("quiet-config.json", r#"{ "debug": false }"#);
    let script = TempFile::new("debug-flag.lox", "1 + 2;");
    let output = lox()
        .env("LOX_CONFIG", config.path())
        .arg("--debug")
        .arg(script.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stderr(&output), "[debug] scanned 5 token(s), 0 error(s)\n");
}

#[test]
fn debug_is_off_by_default() {
    let script = TempFile::new("debug-off.lox", "1");
    let output = lox().arg(script.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(!stderr(&output).contains("[debug]"));
}
