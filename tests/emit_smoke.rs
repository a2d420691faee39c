//! Integration test for the smoke-test binary.
//!
//! Runs the `fc-telemetry` binary and verifies the single JSON line it
//! writes to stdout: field presence, field order, and absence of keys for
//! fields the smoke event does not set.

use std::path::PathBuf;
use std::process::Command;

/// Helper to get the fc-telemetry binary path
fn telemetry_binary() -> PathBuf {
    // When running tests, the binary is in target/debug/fc-telemetry
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("fc-telemetry");
    path
}

fn run_smoke() -> String {
    let output = Command::new(telemetry_binary())
        .output()
        .expect("Failed to execute fc-telemetry");

    assert!(output.status.success(), "binary exited with {:?}", output.status);
    String::from_utf8(output.stdout).expect("stdout was not UTF-8")
}

#[test]
fn test_smoke_emits_single_json_line() {
    let stdout = run_smoke();

    assert!(stdout.ends_with('\n'));
    assert_eq!(stdout.matches('\n').count(), 1);

    let line = stdout.trim_end();
    let value: serde_json::Value = serde_json::from_str(line).expect("stdout line was not JSON");

    assert_eq!(value["app"], "slack-mcp");
    assert_eq!(value["signal"], "telemetry_init");
    assert_eq!(value["ok"], true);
    assert_eq!(value["result_code"], 200);
    assert_eq!(value["route"], "health");
    assert_eq!(value["module"], "fc-mesh");
    assert_eq!(value["mandate"], "Proof & Trust");
    assert_eq!(value["metrics_json"]["build"], "fc-mesh-001");
}

#[test]
fn test_smoke_field_order_is_fixed() {
    let stdout = run_smoke();
    let line = stdout.trim_end();

    assert!(line.starts_with(r#"{"ts":""#));

    let keys = ["\"ts\"", "\"trace_id\"", "\"app\"", "\"signal\"", "\"ok\"", "\"result_code\"", "\"route\"", "\"module\"", "\"mandate\"", "\"metrics_json\""];
    let positions: Vec<usize> = keys
        .iter()
        .map(|k| line.find(k).unwrap_or_else(|| panic!("missing key {} in {}", k, line)))
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "keys out of order in {}", line);
}

#[test]
fn test_smoke_omits_unset_fields() {
    let stdout = run_smoke();
    let line = stdout.trim_end();

    for key in ["latency_ms", "capsule", "null"] {
        assert!(!line.contains(key), "unexpected {:?} in {}", key, line);
    }
}

#[test]
fn test_smoke_runs_generate_distinct_trace_ids() {
    let a: serde_json::Value = serde_json::from_str(run_smoke().trim_end()).unwrap();
    let b: serde_json::Value = serde_json::from_str(run_smoke().trim_end()).unwrap();

    assert_ne!(a["trace_id"], b["trace_id"]);
    assert_eq!(a["trace_id"].as_str().unwrap().len(), 36);
}

#[test]
fn test_smoke_timestamp_parses_as_utc() {
    let stdout = run_smoke();
    let value: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();

    let ts = value["ts"].as_str().unwrap();
    assert!(ts.ends_with('Z'));
    chrono::DateTime::parse_from_rfc3339(ts).expect("ts was not RFC 3339");
}
