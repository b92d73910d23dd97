use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "trace-topo-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

const CHECKOUT_EVENTS: &str = r#"
[
    { "service": "A", "timestamp": "2024-05-01T12:00:00.000Z", "message": "ok", "correlation_id": "r1" },
    { "service": "B", "timestamp": "2024-05-01T12:00:00.100Z", "message": "ok", "correlation_id": "r1" },
    { "service": "B", "timestamp": "2024-05-01T12:00:00.150Z", "message": "error: failed", "correlation_id": "r1" },
    { "service": "A", "timestamp": "2024-05-01T12:00:00.200Z", "message": "ok", "correlation_id": "r1" },
    { "service": "Z", "timestamp": "2024-05-01T12:00:05.000Z", "message": "other request", "correlation_id": "r2" }
]
"#;

#[test]
fn trace_topo_writes_graph_json() {
    let dir = unique_temp_dir("graph");
    let events = write_file(&dir, "events.json", CHECKOUT_EVENTS);
    let out_json = dir.join("graph.json");

    let output = Command::new(env!("CARGO_BIN_EXE_trace_topo"))
        .args([
            "--events",
            events.to_str().unwrap(),
            "--correlation-id",
            "r1",
            "--out",
            out_json.to_str().unwrap(),
        ])
        .output()
        .expect("run trace_topo");
    assert!(
        output.status.success(),
        "trace_topo failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let raw = fs::read_to_string(&out_json).expect("read graph.json");
    let v: Value = serde_json::from_str(&raw).expect("parse graph.json");

    assert_eq!(v["summary"]["total_events"], 4);
    let hops = v["hops"].as_array().expect("hops array");
    assert_eq!(hops.len(), 2);
    assert_eq!(hops[0]["service"], "A");
    assert_eq!(hops[0]["event_count"], 2);
    assert_eq!(hops[0]["latency_to_next_ns"], 100_000_000_u64);
    assert_eq!(hops[1]["status"], "error");
    assert!(hops[1].get("latency_to_next_ns").is_none());

    let nodes = v["graph"]["nodes"].as_array().expect("nodes array");
    let edges = v["graph"]["edges"].as_array().expect("edges array");
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0]["id"], "node-A");
    assert_eq!(nodes[1]["position"]["x"], 350.0);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0]["source"], "node-A");
    assert_eq!(edges[0]["target"], "node-B");
    assert_eq!(edges[0]["label"], "100ms");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn trace_topo_prints_to_stdout_and_reads_json_lines() {
    let dir = unique_temp_dir("jsonl");
    let events = write_file(
        &dir,
        "events.jsonl",
        concat!(
            r#"{"service":"gw","timestamp":"2024-05-01T12:00:01.500Z","message":"retry"}"#,
            "\n",
            r#"{"service":"db","timestamp":"2024-05-01T12:00:00Z","message":"ok"}"#,
            "\n",
        ),
    );

    let output = Command::new(env!("CARGO_BIN_EXE_trace_topo"))
        .args(["--events", events.to_str().unwrap()])
        .output()
        .expect("run trace_topo");
    assert!(output.status.success());

    let v: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let hops = v["hops"].as_array().expect("hops array");
    assert_eq!(hops[0]["service"], "db");
    assert_eq!(hops[1]["status"], "warn");
    assert_eq!(v["graph"]["edges"][0]["label"], "1.50s");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn trace_topo_arrival_order_and_config_are_applied() {
    let dir = unique_temp_dir("config");
    let events = write_file(
        &dir,
        "events.json",
        r#"
[
    { "service": "A", "timestamp": "2024-05-01T12:00:00.500Z", "message": "slow path" },
    { "service": "B", "timestamp": "2024-05-01T12:00:00.200Z", "message": "ok" }
]
"#,
    );
    let config = write_file(
        &dir,
        "config.json",
        r#"{ "classifier": { "warn_patterns": ["slow"] }, "layout": { "max_row_width": 300 } }"#,
    );

    let output = Command::new(env!("CARGO_BIN_EXE_trace_topo"))
        .args([
            "--events",
            events.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--arrival-order",
        ])
        .output()
        .expect("run trace_topo");
    assert!(output.status.success());

    let v: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(v["hops"][0]["service"], "A");
    assert_eq!(v["hops"][0]["status"], "warn");
    assert_eq!(v["hops"][0]["latency_to_next_ns"], 0);
    assert_eq!(v["graph"]["edges"][0]["label"], "0ms");
    // 行宽 300 只能放一个节点
    assert_eq!(v["graph"]["nodes"][1]["position"]["x"], 50.0);
    assert_eq!(v["graph"]["nodes"][1]["position"]["y"], 210.0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn trace_topo_fails_on_invalid_input() {
    let dir = unique_temp_dir("invalid");
    let events = write_file(&dir, "events.json", "{ not json");

    let output = Command::new(env!("CARGO_BIN_EXE_trace_topo"))
        .args(["--events", events.to_str().unwrap()])
        .output()
        .expect("run trace_topo");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error"));

    let bad_config = write_file(&dir, "config.json", r#"{ "classifier": { "error_patterns": ["("] } }"#);
    let good_events = write_file(&dir, "ok.json", "[]");
    let output = Command::new(env!("CARGO_BIN_EXE_trace_topo"))
        .args([
            "--events",
            good_events.to_str().unwrap(),
            "--config",
            bad_config.to_str().unwrap(),
        ])
        .output()
        .expect("run trace_topo");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid error pattern"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn trace_topo_help_describes_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_trace_topo"))
        .arg("--help")
        .output()
        .expect("run trace_topo");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("请求链路拓扑重建"));
    assert!(stdout.contains("--arrival-order"));
    assert!(stdout.contains("信任文件中的事件顺序"));
}
