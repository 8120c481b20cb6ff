#![cfg(feature = "cli")]

use std::{fs, process::Command};

use serde_json::Value;
use tempfile::TempDir;

const SAVED_RESPONSE: &str = r#"{
    "stock_name": "测试股份",
    "data": [
        {"date": "2023-12-29", "open": 9.9, "close": 10.0, "low": 9.8, "high": 10.1, "volume": 90000},
        {"date": "2024-01-02", "open": 10.0, "close": 10.5, "low": 9.8, "high": 10.6, "volume": 100000},
        {"date": "2024-01-03", "open": 10.5, "close": 10.2, "low": 10.1, "high": 10.7, "volume": 120000},
        {"date": "2024-01-04", "open": 10.2, "close": 10.8, "low": 10.2, "high": 10.9, "volume": 150000.0, "amount": 1620000}
    ]
}"#;

fn kline_chart(dir: &TempDir, response: &str, extra: &[&str]) -> std::process::Output {
    let source = dir.path().join("response.json");
    fs::write(&source, response).unwrap();
    let out = dir.path().join("out");

    Command::new(env!("CARGO_BIN_EXE_kline-chart"))
        .env_remove("KLINE_API_BASE_URL")
        .env("KLINE_LOG", "warn")
        .arg("--source-file")
        .arg(&source)
        .args(["render", "--code", "300001", "--start", "2024-01-01", "--end", "2024-12-31"])
        .arg("--out")
        .arg(&out)
        .args(extra)
        .output()
        .unwrap()
}

#[test]
fn test_render_writes_specs_and_prints_summary() {
    let dir = TempDir::new().unwrap();
    let output = kline_chart(&dir, SAVED_RESPONSE, &["--period", "day"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let price: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("out/price.json")).unwrap())
            .unwrap();
    assert_eq!(price["xAxis"]["data"].as_array().unwrap().len(), 3);
    assert_eq!(price["series"].as_array().unwrap().len(), 4);

    let volume: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("out/volume.json")).unwrap())
            .unwrap();
    assert_eq!(volume["series"][0]["data"][2]["value"], 150000);
    assert_eq!(volume["series"][0]["data"][1]["itemStyle"]["color"], "#00ff00");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("测试股份"), "{stdout}");
    assert!(stdout.contains("10.80"), "{stdout}");
    assert!(stdout.contains("+0.60 (5.88%)"), "{stdout}");
    assert!(stdout.contains("15.00万"), "{stdout}");
    assert!(stdout.contains("0.02亿"), "{stdout}");
}

#[test]
fn test_domain_error_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let output = kline_chart(&dir, r#"{"error": "股票代码不存在"}"#, &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("股票代码不存在"));
    assert!(!dir.path().join("out/price.json").exists());
}
