use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "cpbra-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_cpbra-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("back-nav"));
}

#[test]
fn cli_logic_run_writes_json_report() {
    let exe = env!("CARGO_BIN_EXE_cpbra-tester");
    let output_path = temp_path("logic");
    let output = Command::new(exe)
        .args([
            "--mode",
            "logic",
            "--scenarios",
            "all",
            "--iterations",
            "2",
            "--seeds",
            "1,99",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output_path).expect("read report"))
            .expect("json report");
    let runs = report.as_array().expect("array");
    assert_eq!(runs.len(), 12);
    assert!(runs.iter().all(|run| run["passed"] == true));
}

#[test]
fn cli_unknown_browser_is_skipped() {
    let exe = env!("CARGO_BIN_EXE_cpbra-tester");
    let output = Command::new(exe)
        .args(["--mode", "browser", "--browsers", "unknown", "--scenarios", "smoke"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown browser"));
}
