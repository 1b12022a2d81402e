use marchsync::catalog::defaults::builtin_def;
use regex::Regex;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn marchsync(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_marchsync"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_cli_heroes_listing() {
    let output = marchsync(&["heroes"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Lieh-Shan Yen"));
    assert!(out.contains("main_only"));
    assert!(out.contains("Catalog v3.1 | 11 heroes"));
}

#[test]
fn test_cli_heroes_rule_filter() {
    let output = marchsync(&["heroes", "--rule", "main_only"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Forondil"));
    assert!(!out.contains("Neya"));

    let output = marchsync(&["heroes", "--rule", "sometimes"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_talents() {
    let output = marchsync(&["talents", "Neya"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Cavalry(15%), Pvp(20%), Mobility(20%)"));

    let output = marchsync(&["talents", "Gandalf"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown hero 'Gandalf'"));
}

#[test]
fn test_cli_single_march() {
    let output = marchsync(&["march", "--main", "Neya", "--deputy", "Urag"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Main(10) + Dep(10) + Balanced Heart(5)"));
    assert!(out.contains("50.0"));
}

#[test]
fn test_cli_optimize_summary() {
    let output = marchsync(&["optimize", "--heroes", "Neya,Urag,Theodore"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let re = Regex::new(r"Evaluated (\d+) pairings").unwrap();
    let out = stdout(&output);
    let caps = re.captures(&out).expect("summary line missing");
    assert_eq!(&caps[1], "6");
    assert!(out.contains("Benched"));
}

#[test]
fn test_cli_optimize_json() {
    let output = marchsync(&[
        "optimize",
        "--heroes",
        "Neya,Urag,Emrys,Theodore",
        "--pin",
        "Neya:Urag",
        "--json",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["evaluated"], 2);
    assert_eq!(value["truncated"], false);
    let plans = value["plans"].as_array().unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0]["marches"][0]["main"], "Neya");
}

#[test]
fn test_cli_export_csv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plans.csv");
    let output = marchsync(&[
        "optimize",
        "--heroes",
        "Neya,Urag,Emrys,Theodore",
        "--export",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert!(lines
        .next()
        .unwrap()
        .starts_with("option,score,march,main,deputy,speed"));
    // 12 plans, two marches each.
    assert_eq!(lines.count(), 24);
}

#[test]
fn test_cli_config_file_and_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "scoring": { "target_speed": 30.0 } }"#).unwrap();
    let config = path.to_str().unwrap();

    let output = marchsync(&["--config", config, "optimize", "-H", "Neya,Urag", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["target_speed"], 30.0);

    let output = marchsync(&[
        "--config", config, "optimize", "-H", "Neya,Urag", "-t", "42", "--json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["target_speed"], 42.0);
}

#[test]
fn test_cli_custom_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    let mut def = builtin_def();
    def.version = "custom-7".to_string();
    fs::write(&path, serde_json::to_string(&def).unwrap()).unwrap();

    let output = marchsync(&["heroes", "--catalog", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Catalog vcustom-7"));

    fs::write(&path, "{ broken").unwrap();
    let output = marchsync(&["heroes", "--catalog", path.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_rejects_bad_requests() {
    let output = marchsync(&["optimize", "--heroes", "Neya,Urag", "--pin", "Neya:Neya"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Duplicate heroes"));

    let output = marchsync(&["optimize", "--heroes", "Neya"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Select 2+ heroes"));
}
