//! Integration tests for logger construction
//!
//! These tests verify:
//! - Format validation and default substitution
//! - The fixed record schema
//! - Level thresholds taken from configuration
//! - The default stdout + file logger
//! - Settings loaded from TOML files

mod common;

use common::SharedBuffer;
use logger_factory::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_console_format_is_rejected() {
    let config = Config::new()
        .with_format("console")
        .with_level(LogLevel::Debug);

    let result = config.build(SharedBuffer::new());
    match result {
        Err(LoggerError::UnsupportedFormat { format }) => assert_eq!(format, "console"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_empty_format_writes_info_record() {
    let buffer = SharedBuffer::new();
    let logger = Config::new()
        .with_format("")
        .with_level(LogLevel::Info)
        .build(buffer.clone())
        .expect("empty format is accepted");

    assert_eq!(logger.format(), "logfmt");
    logger.info("hello");

    let records = buffer.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["level"], "info");
    assert_eq!(record["msg"], "hello");
    assert!(record["time"].is_string());
    assert!(record["caller"]
        .as_str()
        .expect("caller is a string")
        .starts_with("tests/integration_tests.rs:"));
}

#[test]
fn test_time_field_is_trimmed_rfc3339() {
    let buffer = SharedBuffer::new();
    let logger = Config::new().build(buffer.clone()).unwrap();
    logger.warn("tick");

    let records = buffer.records();
    let time = records[0]["time"].as_str().expect("time is a string");
    assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
    assert!(time.ends_with('Z'));
    // Fraction is optional, at most nanoseconds, and never ends in zero
    if let Some(fraction) = time.split('.').nth(1) {
        let digits = fraction.trim_end_matches('Z');
        assert!((1..=9).contains(&digits.len()), "time was {}", time);
        assert!(!digits.ends_with('0'), "time was {}", time);
    }
}

#[test]
fn test_unknown_formats_are_accepted_but_still_json() {
    for format in ["json", "logfmt", "text", "anything-at-all"] {
        let buffer = SharedBuffer::new();
        let logger = Config::new()
            .with_format(format)
            .build(buffer.clone())
            .expect("non-console format is accepted");
        assert_eq!(logger.format(), format);

        logger.error("boom");
        let records = buffer.records();
        assert_eq!(records[0]["level"], "error");
    }
}

#[test]
fn test_default_config_enables_debug() {
    let buffer = SharedBuffer::new();
    let logger = Config::new().build(buffer.clone()).unwrap();

    logger.debug("visible");
    assert_eq!(buffer.records().len(), 1);
}

#[test]
fn test_level_threshold_from_config() {
    let buffer = SharedBuffer::new();
    let logger = Config::new()
        .with_level(LogLevel::Warn)
        .build(buffer.clone())
        .unwrap();

    logger.debug("no");
    logger.info("no");
    logger.warn("yes");
    logger.error("yes");

    let levels: Vec<String> = buffer
        .records()
        .iter()
        .map(|r| r["level"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(levels, vec!["warn", "error"]);
}

#[test]
fn test_structured_fields() {
    let buffer = SharedBuffer::new();
    let logger = Config::new().build(buffer.clone()).unwrap();
    let request_log = logger.with(LogContext::new().with_field("request_id", "r-1"));

    request_log.info_with_context(
        "User logged in",
        LogContext::new()
            .with_field("user_id", 123)
            .with_field("admin", false)
            .with_field("score", 0.5),
    );

    let record = &buffer.records()[0];
    assert_eq!(record["request_id"], "r-1");
    assert_eq!(record["user_id"], 123);
    assert_eq!(record["admin"], false);
    assert_eq!(record["score"], 0.5);
}

#[test]
fn test_fields_cannot_replace_record_keys() {
    let buffer = SharedBuffer::new();
    let logger = Config::new()
        .with_level(LogLevel::Error)
        .build(buffer.clone())
        .unwrap();

    logger.error_with_context(
        "real",
        LogContext::new()
            .with_field("level", "debug")
            .with_field("msg", "fake"),
    );

    let record = &buffer.records()[0];
    assert_eq!(record["level"], "error");
    assert_eq!(record["msg"], "real");
    assert_eq!(record["fields.level"], "debug");
    assert_eq!(record["fields.msg"], "fake");
}

#[test]
fn test_suppress_logo_does_not_affect_output() {
    let plain = SharedBuffer::new();
    let quiet = SharedBuffer::new();
    Config::new().build(plain.clone()).unwrap().info("same");
    Config::new()
        .with_suppress_logo(true)
        .build(quiet.clone())
        .unwrap()
        .info("same");

    let strip = |mut v: serde_json::Value| {
        v.as_object_mut().unwrap().remove("time");
        v.as_object_mut().unwrap().remove("caller");
        v
    };
    assert_eq!(
        strip(plain.records().remove(0)),
        strip(quiet.records().remove(0))
    );
}

#[test]
fn test_default_logger_appends_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");
    fs::write(&log_file, "existing line\n").expect("Failed to seed log file");

    let logger = build_default(&log_file).expect("Failed to build default logger");
    logger.info("first");
    logger.error_with_context("second", LogContext::new().with_field("code", 500));
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "existing line");

    let second: serde_json::Value = serde_json::from_str(lines[2]).expect("valid JSON");
    assert_eq!(second["msg"], "second");
    assert_eq!(second["code"], 500);
}

#[test]
fn test_default_logger_shared_by_clones() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("shared.log");

    let logger = build_default(&log_file).unwrap();
    let clone = logger.clone();
    logger.info("from original");
    clone.info("from clone");
    drop(logger);
    clone.flush().unwrap();

    let content = fs::read_to_string(&log_file).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[cfg(unix)]
#[test]
fn test_default_log_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("perm.log");
    let _logger = build_default(&log_file).unwrap();

    let mode = fs::metadata(&log_file).unwrap().permissions().mode() & 0o777;
    // umask may only remove bits from 0o666
    assert_eq!(mode & !0o666, 0);
    assert_ne!(mode & 0o600, 0);
}

#[test]
fn test_config_file_to_logger() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = temp_dir.path().join("logging.toml");
    fs::write(
        &settings,
        "format = \"console\"\nlevel = \"error\"\nsuppress-logo = true\n",
    )
    .unwrap();

    let config = Config::load(&settings).expect("settings parse");
    assert!(config.suppress_logo);
    assert!(matches!(
        config.build(SharedBuffer::new()),
        Err(LoggerError::UnsupportedFormat { .. })
    ));

    let logger = config.with_format("auto").build(SharedBuffer::new()).unwrap();
    assert!(!logger.enabled(LogLevel::Warn));
    assert!(logger.enabled(LogLevel::Error));
}
