//! Configuration precedence: defaults < file (`HANDSIM_CONFIG`) < env < flags.
//!
//! Every test here touches process environment, so all of them run serially.

use serde_json::Value;
use serial_test::serial;
use std::io::Write;

const VARS: &[&str] = &[
    "HANDSIM_CONFIG",
    "HANDSIM_TRIALS",
    "HANDSIM_HAND_SIZE",
    "HANDSIM_SEED",
    "HANDSIM_WORKERS",
    "HANDSIM_MAX_TRIALS",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = handsim_cli::run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn cfg_json() -> Value {
    let (code, out, err) = run(&["handsim", "cfg"]);
    assert_eq!(code, 0, "stderr: {}", err);
    serde_json::from_str(&out).unwrap()
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    let v = cfg_json();
    assert_eq!(v["trials"]["value"], 2000);
    assert_eq!(v["trials"]["source"], "default");
    assert_eq!(v["hand_size"]["value"], 5);
    assert!(v["seed"]["value"].is_null());
    assert_eq!(v["workers"]["value"], 1);
    assert_eq!(v["max_trials"]["value"], 1_000_000);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let file = config_file("trials = 300\nhand_size = 8\nseed = 456\n");
    set_env("HANDSIM_CONFIG", file.path().to_str().unwrap());
    set_env("HANDSIM_SEED", "789");

    let v = cfg_json();
    assert_eq!(v["trials"]["value"], 300);
    assert_eq!(v["trials"]["source"], "file");
    assert_eq!(v["hand_size"]["value"], 8);
    assert_eq!(v["hand_size"]["source"], "file");
    assert_eq!(v["seed"]["value"], 789);
    assert_eq!(v["seed"]["source"], "env");
    assert_eq!(v["workers"]["source"], "default");
    clear_env();
}

#[test]
#[serial]
fn test_flags_override_config_in_sim() {
    clear_env();
    set_env("HANDSIM_TRIALS", "120");
    set_env("HANDSIM_SEED", "4");

    let (code, out, _) = run(&["handsim", "sim", "--format", "json"]);
    assert_eq!(code, 0);
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["seed"], 4);
    assert_eq!(v["results"][0]["trials"], 120);

    let (code, out, _) = run(&["handsim", "sim", "--format", "json", "--trials", "80", "--seed", "5"]);
    assert_eq!(code, 0);
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["seed"], 5);
    assert_eq!(v["results"][0]["trials"], 80);
    clear_env();
}

#[test]
#[serial]
fn test_max_trials_caps_flag_value() {
    clear_env();
    set_env("HANDSIM_MAX_TRIALS", "100");
    set_env("HANDSIM_TRIALS", "50");

    let (code, _, err) = run(&["handsim", "sim", "--trials", "101"]);
    assert_eq!(code, 2);
    assert!(err.contains("trials must be between 1 and 100"), "{}", err);

    let (code, _, _) = run(&["handsim", "sim", "--trials", "100"]);
    assert_eq!(code, 0);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_value_is_config_error() {
    clear_env();
    set_env("HANDSIM_WORKERS", "many");
    let (code, out, err) = run(&["handsim", "cfg"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Configuration error: Invalid workers: many"), "{}", err);
    clear_env();
}

#[test]
#[serial]
fn test_unknown_file_key_is_rejected() {
    clear_env();
    let file = config_file("trials = 10\nlevel = 3\n");
    set_env("HANDSIM_CONFIG", file.path().to_str().unwrap());
    let (code, _, err) = run(&["handsim", "cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"), "{}", err);
    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_file_value_is_rejected() {
    clear_env();
    let file = config_file("hand_size = 60\n");
    set_env("HANDSIM_CONFIG", file.path().to_str().unwrap());
    let (code, _, err) = run(&["handsim", "deal"]);
    assert_eq!(code, 2);
    assert!(err.contains("hand_size must be between 1 and 52"), "{}", err);
    clear_env();
}

#[test]
#[serial]
fn test_missing_config_file_is_io_error() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    set_env("HANDSIM_CONFIG", missing.to_str().unwrap());
    let (code, _, err) = run(&["handsim", "cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot read config file"), "{}", err);
    clear_env();
}
