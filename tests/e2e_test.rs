/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SMALL_LIST: &str = r#"{
    "all": {
        "children": [
            "web"
        ],
        "hosts": [],
        "vars": {
            "env": "prod"
        }
    },
    "web": {
        "children": [],
        "hosts": [
            "10.0.0.2",
            "10.0.0.1"
        ],
        "vars": {}
    },
    "_meta": {
        "hostvars": {
            "10.0.0.1": {
                "port": 8080,
                "role": "frontend"
            }
        }
    }
}
"#;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Command isolated from the caller's environment and config files
fn dyn_inventory(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("dyn-inventory");
    cmd.current_dir(dir.path())
        .env_remove("DYN_INVENTORY_SOURCE")
        .env_remove("DYN_INVENTORY_CONFIG")
        .env_remove("DYN_INVENTORY_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let dir = TempDir::new().unwrap();
        dyn_inventory(&dir)
            .arg("--list")
            .arg("-i")
            .arg(fixture("small_inventory.json"))
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        let dir = TempDir::new().unwrap();
        dyn_inventory(&dir).arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        let dir = TempDir::new().unwrap();
        dyn_inventory(&dir).arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        let dir = TempDir::new().unwrap();
        dyn_inventory(&dir)
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: --host without a value
    #[test]
    fn test_exit_code_host_missing_value() {
        let dir = TempDir::new().unwrap();
        dyn_inventory(&dir).arg("--host").assert().code(2);
    }

    /// Exit code 2: indent out of range
    #[test]
    fn test_exit_code_invalid_indent() {
        let dir = TempDir::new().unwrap();
        dyn_inventory(&dir)
            .args(["--list", "--indent", "99"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - inventory file does not exist
    #[test]
    fn test_exit_code_application_error_missing_inventory() {
        let dir = TempDir::new().unwrap();
        dyn_inventory(&dir)
            .args(["--list", "-i", "/nonexistent/inventory.json"])
            .assert()
            .code(3)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Inventory source not found"));
    }

    /// Exit code 3: Application error - malformed inventory
    #[test]
    fn test_exit_code_application_error_malformed_inventory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"web": 42}"#).unwrap();

        dyn_inventory(&dir)
            .arg("--list")
            .arg("-i")
            .arg(&path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse inventory source"));
    }
}

#[test]
fn test_e2e_list_exact_output() {
    let dir = TempDir::new().unwrap();
    dyn_inventory(&dir)
        .arg("--list")
        .arg("--inventory")
        .arg(fixture("small_inventory.json"))
        .assert()
        .success()
        .stdout(SMALL_LIST);
}

#[test]
fn test_e2e_list_is_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let run = || {
        dyn_inventory(&dir)
            .arg("--list")
            .arg("-i")
            .arg(fixture("ec2_capture.json"))
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_e2e_list_ec2_capture() {
    let dir = TempDir::new().unwrap();
    let value = stdout_json(
        dyn_inventory(&dir)
            .arg("--list")
            .arg("-i")
            .arg(fixture("ec2_capture.json")),
    );

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 11);
    assert_eq!(
        value["rds"],
        json!({
            "children": [],
            "hosts": ["production-db7.co735munpzcw.us-east-1.rds.amazonaws.com"],
            "vars": {}
        })
    );
    assert_eq!(value["regions"]["children"], json!(["us-east-1"]));
    assert_eq!(value["_meta"]["hostvars"].as_object().unwrap().len(), 3);
}

#[test]
fn test_e2e_yaml_and_toml_sources() {
    let dir = TempDir::new().unwrap();
    for file in ["small_inventory.yml", "small_inventory.toml"] {
        dyn_inventory(&dir)
            .arg("--list")
            .arg("-i")
            .arg(fixture(file))
            .assert()
            .success()
            .stdout(SMALL_LIST);
    }
}

#[test]
fn test_e2e_host_known() {
    let dir = TempDir::new().unwrap();
    dyn_inventory(&dir)
        .args(["--host", "10.0.0.1", "-i"])
        .arg(fixture("small_inventory.json"))
        .assert()
        .success()
        .stdout("{\n    \"port\": 8080,\n    \"role\": \"frontend\"\n}\n");
}

#[test]
fn test_e2e_host_in_group_without_hostvars() {
    let dir = TempDir::new().unwrap();
    dyn_inventory(&dir)
        .args(["--host", "10.0.0.2", "-i"])
        .arg(fixture("small_inventory.json"))
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn test_e2e_host_unknown() {
    let dir = TempDir::new().unwrap();
    dyn_inventory(&dir)
        .args(["--host", "nonexistent.example.com", "-i"])
        .arg(fixture("ec2_capture.json"))
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn test_e2e_host_matches_list_hostvars() {
    let dir = TempDir::new().unwrap();
    let host = "ec2-23-23-170-30.compute-1.amazonaws.com";

    let list = stdout_json(
        dyn_inventory(&dir)
            .arg("--list")
            .arg("-i")
            .arg(fixture("ec2_capture.json")),
    );
    let vars = stdout_json(
        dyn_inventory(&dir)
            .args(["--host", host, "-i"])
            .arg(fixture("ec2_capture.json")),
    );

    assert_eq!(vars, list["_meta"]["hostvars"][host]);
}

#[test]
fn test_e2e_no_flags_prints_empty_object() {
    let dir = TempDir::new().unwrap();
    dyn_inventory(&dir)
        .arg("-i")
        .arg(fixture("small_inventory.json"))
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn test_e2e_no_flags_does_not_read_inventory() {
    let dir = TempDir::new().unwrap();
    dyn_inventory(&dir)
        .args(["-i", "/nonexistent/inventory.json"])
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn test_e2e_no_inventory_configured() {
    let dir = TempDir::new().unwrap();
    dyn_inventory(&dir)
        .arg("--list")
        .assert()
        .success()
        .stdout("{\n    \"_meta\": {\n        \"hostvars\": {}\n    }\n}\n");
}

#[test]
fn test_e2e_inventory_from_environment() {
    let dir = TempDir::new().unwrap();
    dyn_inventory(&dir)
        .arg("--list")
        .env("DYN_INVENTORY_SOURCE", fixture("small_inventory.json"))
        .assert()
        .success()
        .stdout(SMALL_LIST);
}

#[test]
fn test_e2e_custom_indent() {
    let dir = TempDir::new().unwrap();
    dyn_inventory(&dir)
        .args(["--host", "10.0.0.1", "--indent", "2", "-i"])
        .arg(fixture("small_inventory.json"))
        .assert()
        .success()
        .stdout("{\n  \"port\": 8080,\n  \"role\": \"frontend\"\n}\n");
}

#[test]
fn test_e2e_output_file() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("inventory.out.json");

    dyn_inventory(&dir)
        .arg("--list")
        .arg("-i")
        .arg(fixture("small_inventory.json"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output_path).unwrap(), SMALL_LIST);
}

#[test]
fn test_e2e_exclude_with_wildcard() {
    let dir = TempDir::new().unwrap();
    let value = stdout_json(
        dyn_inventory(&dir)
            .arg("--list")
            .arg("-i")
            .arg(fixture("ec2_capture.json"))
            .args(["-e", "*.rds.amazonaws.com"]),
    );

    assert_eq!(value["rds"]["hosts"], json!([]));
    assert_eq!(value["us-east-1"]["hosts"].as_array().unwrap().len(), 2);
    assert!(value["_meta"]["hostvars"]
        .get("production-db7.co735munpzcw.us-east-1.rds.amazonaws.com")
        .is_none());
}

#[test]
fn test_e2e_exclude_multiple_patterns() {
    let dir = TempDir::new().unwrap();
    let value = stdout_json(
        dyn_inventory(&dir)
            .arg("--list")
            .arg("-i")
            .arg(fixture("ec2_capture.json"))
            .args(["-e", "*.rds.amazonaws.com", "-e", "ec2-54-*"]),
    );

    assert_eq!(
        value["us-east-1"]["hosts"],
        json!(["ec2-23-23-170-30.compute-1.amazonaws.com"])
    );
    assert_eq!(value["_meta"]["hostvars"].as_object().unwrap().len(), 1);
}

#[test]
fn test_e2e_unmatched_exclude_pattern_warns() {
    let dir = TempDir::new().unwrap();
    dyn_inventory(&dir)
        .arg("--list")
        .arg("-i")
        .arg(fixture("small_inventory.json"))
        .args(["-e", "db-*"])
        .assert()
        .success()
        .stdout(SMALL_LIST)
        .stderr(predicate::str::contains("did not match any host"));
}

#[test]
fn test_e2e_invalid_exclude_pattern() {
    let dir = TempDir::new().unwrap();
    dyn_inventory(&dir)
        .arg("--list")
        .arg("-i")
        .arg(fixture("small_inventory.json"))
        .args(["-e", "*"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid host exclusion pattern"));
}

#[test]
fn test_e2e_logs_stay_off_stdout() {
    let dir = TempDir::new().unwrap();
    dyn_inventory(&dir)
        .arg("--list")
        .arg("-vv")
        .arg("-i")
        .arg(fixture("small_inventory.json"))
        .assert()
        .success()
        .stdout(SMALL_LIST)
        .stderr(predicate::str::contains("loading inventory"));
}
