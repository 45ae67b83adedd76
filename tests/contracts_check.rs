use assert_cmd::Command;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

mod common;
use common::TestEnv;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

fn run_json(home: &Path, args: &[&str]) -> Value {
    let mut cmd = Command::cargo_bin("reviewdeck").expect("binary under test");
    cmd.env("HOME", home).arg("--json").args(args);
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("valid json output")
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    let status = env.run_json_report(&["status"]);
    assert_eq!(status["ok"], true);
    validate("status.schema.json", &status["data"]);

    let fallback_status = run_json(&env.home, &["--report", "/nonexistent/report.json", "status"]);
    assert_eq!(fallback_status["ok"], true);
    validate("status.schema.json", &fallback_status["data"]);

    let show = env.run_json_report(&["show"]);
    assert_eq!(show["ok"], true);
    validate("report.schema.json", &show["data"]);

    let sample = run_json(&env.home, &["--sample", "show"]);
    assert_eq!(sample["ok"], true);
    validate("report.schema.json", &sample["data"]);
}
