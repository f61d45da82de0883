//! Loader behavior against an in-memory environment.

use tempfile::TempDir;

use super::write_env;
use crate::loader::{Environment, EnvironmentSetError, LoadError, LoadReport, MemoryEnv, load_into};
use crate::parser::ParseError;

#[test]
fn test_load_into_sets_all_pairs() {
    let dir = TempDir::new().unwrap();
    let path = write_env(&dir, ".env", "KEY1=value1\nKEY2=value2\nKEY3=value3\n");
    let mut env = MemoryEnv::new();

    let report = load_into(&mut env, &[&path]).unwrap();

    assert_eq!(env.get("KEY1").as_deref(), Some("value1"));
    assert_eq!(env.get("KEY2").as_deref(), Some("value2"));
    assert_eq!(env.get("KEY3").as_deref(), Some("value3"));
    assert_eq!(
        report,
        LoadReport {
            files_read: 1,
            files_missing: 0,
            variables_set: 3,
            variables_skipped: 0,
        }
    );
}

#[test]
fn test_load_into_never_overrides_existing_values() {
    let dir = TempDir::new().unwrap();
    let path = write_env(&dir, ".env", "KEY=from-file\nOTHER=from-file\n");
    let mut env: MemoryEnv = [("KEY", "preset")].into_iter().collect();

    let report = load_into(&mut env, &[&path]).unwrap();

    assert_eq!(env.get("KEY").as_deref(), Some("preset"));
    assert_eq!(env.get("OTHER").as_deref(), Some("from-file"));
    assert_eq!(report.variables_set, 1);
    assert_eq!(report.variables_skipped, 1);
}

#[test]
fn test_load_into_twice_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_env(&dir, ".env", "A=1\nB=2\n");
    let mut env = MemoryEnv::new();

    load_into(&mut env, &[&path]).unwrap();
    let after_first = env.clone();
    let second = load_into(&mut env, &[&path]).unwrap();

    assert_eq!(env, after_first);
    assert_eq!(second.variables_set, 0);
    assert_eq!(second.variables_skipped, 2);
}

#[test]
fn test_earlier_files_win_over_later_files() {
    let dir = TempDir::new().unwrap();
    let first = write_env(&dir, "first.env", "SHARED=first\nONLY_FIRST=1\n");
    let second = write_env(&dir, "second.env", "SHARED=second\nONLY_SECOND=2\n");
    let mut env = MemoryEnv::new();

    let report = load_into(&mut env, &[&first, &second]).unwrap();

    assert_eq!(env.get("SHARED").as_deref(), Some("first"));
    assert_eq!(env.get("ONLY_FIRST").as_deref(), Some("1"));
    assert_eq!(env.get("ONLY_SECOND").as_deref(), Some("2"));
    assert_eq!(report.files_read, 2);
    assert_eq!(report.variables_skipped, 1);
}

#[test]
fn test_missing_file_aborts_before_later_files() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.env");
    let later = write_env(&dir, "later.env", "LATER=1\n");
    let mut env = MemoryEnv::new();

    let err = load_into(&mut env, &[&missing, &later]).unwrap_err();

    match &err {
        LoadError::Open { path, source } => {
            assert_eq!(path, &missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected open error, got {other}"),
    }
    assert!(env.is_empty(), "no file after the failure should be applied");
}

#[test]
fn test_parse_failure_applies_nothing_from_that_file() {
    let dir = TempDir::new().unwrap();
    let path = write_env(&dir, ".env", "GOOD=1\nKEY71#value71\n");
    let mut env = MemoryEnv::new();

    let err = load_into(&mut env, &[&path]).unwrap_err();

    match err {
        LoadError::Parse { source, .. } => {
            assert_eq!(source, ParseError::NoSeparator { line: 2 });
        }
        other => panic!("expected parse error, got {other}"),
    }
    assert!(env.get("GOOD").is_none());
}

#[test]
fn test_parse_failure_in_second_file_keeps_first_file_applied() {
    let dir = TempDir::new().unwrap();
    let good = write_env(&dir, "good.env", "FIRST=1\n");
    let bad = write_env(&dir, "bad.env", "KEY=\n");
    let mut env = MemoryEnv::new();

    let err = load_into(&mut env, &[&good, &bad]).unwrap_err();

    assert_eq!(err.path(), bad.as_path());
    assert!(matches!(
        err,
        LoadError::Parse {
            source: ParseError::InvalidPair { line: 1 },
            ..
        }
    ));
    assert_eq!(env.get("FIRST").as_deref(), Some("1"));
}

#[test]
fn test_rejected_variable_surfaces_set_error() {
    let dir = TempDir::new().unwrap();
    let path = write_env(&dir, ".env", "BAD\0KEY=value\n");
    let mut env = MemoryEnv::new();

    let err = load_into(&mut env, &[&path]).unwrap_err();

    match err {
        LoadError::Set { source, .. } => {
            assert!(matches!(source, EnvironmentSetError::InvalidKey { .. }));
        }
        other => panic!("expected set error, got {other}"),
    }
}

#[test]
fn test_load_error_does_not_leak_values() {
    let dir = TempDir::new().unwrap();
    let secret = "supersecret_token_12345";
    let path = write_env(
        &dir,
        ".env",
        &format!("API_TOKEN={secret}\nINVALID_LINE_{secret}\n"),
    );
    let mut env = MemoryEnv::new();

    let message = load_into(&mut env, &[&path]).unwrap_err().to_string();

    assert!(!message.contains(secret), "leaked secret: {message}");
    assert!(message.contains("line 2"), "missing line number: {message}");
}

#[test]
fn test_rejected_variable_leaves_environment_untouched() {
    let dir = TempDir::new().unwrap();
    let mut contents: String = (0..20).map(|i| format!("K{i}=v\n")).collect();
    contents.push_str("BAD\0KEY=value\n");
    let path = write_env(&dir, ".env", &contents);
    let mut env = MemoryEnv::new();

    let err = load_into(&mut env, &[&path]).unwrap_err();

    assert!(matches!(err, LoadError::Set { .. }));
    assert!(
        env.is_empty(),
        "no variable from a rejected file should be applied, got {}",
        env.len()
    );
}

#[test]
fn test_rejected_variable_in_second_file_keeps_first_file_only() {
    let dir = TempDir::new().unwrap();
    let good = write_env(&dir, "good.env", "FIRST=1\n");
    let bad = write_env(&dir, "bad.env", "A=1\nB=2\nC=3\nBAD\0KEY=value\n");
    let mut env = MemoryEnv::new();

    let err = load_into(&mut env, &[&good, &bad]).unwrap_err();

    assert_eq!(err.path(), bad.as_path());
    assert_eq!(env.into_inner().into_keys().collect::<Vec<_>>(), vec!["FIRST"]);
}
