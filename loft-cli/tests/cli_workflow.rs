//! Integration tests for the `loft` binary.
//!
//! Each test works in its own temporary directory: a configuration is
//! written (by hand or with `loft init`), then `emit` and `resolve` are run
//! against it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn loft(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_loft"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run loft")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Three file handlers stacked debug → info → error, without timestamps.
fn write_cascade_config(dir: &Path) -> PathBuf {
    let config = dir.join("loft.ini");
    fs::write(
        &config,
        r#"[logger]
name = testing

[handler.dbg]
level = debug
sink = dbg.log
flags = none

[handler.std]
level = info
sink = std.log
flags = none

[handler.err]
level = error
sink = err.log
flags = none
"#,
    )
    .unwrap();
    config
}

fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap_or_default()
}

#[test]
fn test_emit_routes_each_level_to_one_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write_cascade_config(dir);

    assert!(loft(dir, &["emit", "info", "ok!"]).status.success());
    assert!(loft(dir, &["emit", "debug", "debug!"]).status.success());
    assert!(loft(dir, &["emit", "ERROR", "alert!"]).status.success());

    assert_eq!(read(dir, "dbg.log"), "testing.DEBUG: debug!\n");
    assert_eq!(read(dir, "std.log"), "testing.INFO: ok!\n");
    assert_eq!(read(dir, "err.log"), "testing.ERROR: alert!\n");
}

#[test]
fn test_emit_joins_words_and_overrides_name() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write_cascade_config(dir);

    let args = ["emit", "--name", "cron", "warn", "disk", "almost", "full"];
    let output = loft(dir, &args);
    assert!(output.status.success());

    assert_eq!(read(dir, "std.log"), "cron.WARN: disk almost full\n");
}

#[test]
fn test_emit_rejects_unknown_level() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write_cascade_config(dir);

    let output = loft(dir, &["emit", "loud", "hello"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("loud"));
}

#[test]
fn test_emit_without_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = loft(temp_dir.path(), &["emit", "info", "hello"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_resolve_lists_handler_per_level() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let config = dir.join("custom.ini");
    fs::write(
        &config,
        "[logger]\nname = svc\n\n[handler.low]\nlevel = info\nsink = low.log\n\n\
         [handler.high]\nlevel = fatal\nsink = high.log\n",
    )
    .unwrap();

    let output = loft(dir, &["resolve", "--config", "custom.ini"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Logger: svc");
    let routes: Vec<(&str, &str)> = lines[1..]
        .iter()
        .map(|l| {
            let (level, label) = l.split_once("->").unwrap();
            (level.trim(), label.trim())
        })
        .collect();
    assert_eq!(
        routes,
        [
            ("DEBUG", "(dropped)"),
            ("INFO", "low"),
            ("NOTICE", "low"),
            ("WARN", "low"),
            ("ERROR", "low"),
            ("FATAL", "high"),
            ("EMERGENCY", "high"),
        ]
    );
}

#[test]
fn test_init_writes_loadable_sample() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let output = loft(dir, &["init"]);
    assert!(output.status.success());
    assert!(dir.join("loft.ini").exists());

    let output = loft(dir, &["resolve"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Logger: app"));
    assert!(text.contains("DEBUG     -> debug"));
    assert!(text.contains("INFO      -> info"));
    assert!(text.contains("EMERGENCY -> error"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("loft.ini"), "keep me").unwrap();

    let output = loft(dir, &["init"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(read(dir, "loft.ini"), "keep me");

    let output = loft(dir, &["init", "--force"]);
    assert!(output.status.success());
    assert!(read(dir, "loft.ini").contains("[handler.debug]"));
}
