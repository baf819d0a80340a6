use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn options_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp options file");
    file.write_all(contents.as_bytes()).expect("write options");
    file
}

#[test]
fn layout_reports_windowed_geometry_as_json() {
    let mut cmd = cargo_bin_cmd!("slidekitctl");
    let output = cmd
        .args(["layout", "--items", "10", "--window", "1300", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("json report");
    assert_eq!(report["layout"]["mode"], "windowed");
    assert_eq!(report["layout"]["visible_count"], 5);
    assert_eq!(report["max_position"], 5);
    assert_eq!(report["navigation"]["visible"], true);
    assert_eq!(report["navigation"]["has_prev"], false);
    assert_eq!(report["breakpoints"].as_array().map(Vec::len), Some(5));
}

#[test]
fn layout_clamps_requested_position() {
    let mut cmd = cargo_bin_cmd!("slidekitctl");
    let output = cmd
        .args([
            "layout", "--items", "10", "--window", "1300", "--position", "9", "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("json report");
    assert_eq!(report["position"], 5);
    assert_eq!(report["navigation"]["has_next"], false);
}

#[test]
fn layout_reads_toml_options() {
    let file = options_file(
        ".toml",
        "[navigation]\ncolor = \"#ff0044\"\n\n[list]\nwindowed = 1400\n",
    );
    let mut cmd = cargo_bin_cmd!("slidekitctl");
    cmd.args(["layout", "--items", "10", "--window", "1300", "--options"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FullBleed"))
        .stdout(predicate::str::contains("#ff0044"));
}

#[test]
fn layout_rejects_unknown_option_format() {
    let file = options_file(".yaml", "navigation: {}\n");
    let mut cmd = cargo_bin_cmd!("slidekitctl");
    cmd.args(["layout", "--items", "3", "--window", "800", "--options"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading options"));
}

#[test]
fn simulate_pages_and_clamps() {
    let mut cmd = cargo_bin_cmd!("slidekitctl");
    let output = cmd
        .args([
            "simulate", "--items", "10", "--window", "1300", "--json", "--steps",
            "next,next,prev,go:3",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let positions: Vec<u64> = String::from_utf8_lossy(&output)
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).expect("json line");
            value["position"].as_u64().expect("position")
        })
        .collect();
    assert_eq!(positions, vec![5, 5, 0, 3]);
}

#[test]
fn simulate_ticks_wrap_with_repeat() {
    let file = options_file(".json", r#"{"autoplay": {"repeat": true}}"#);
    let mut cmd = cargo_bin_cmd!("slidekitctl");
    let output = cmd
        .args(["simulate", "--items", "7", "--window", "1300", "--json"])
        .args(["--steps", "tick,tick,tick", "--options"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let positions: Vec<u64> = String::from_utf8_lossy(&output)
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter_map(|value| value["position"].as_u64())
        .collect();
    assert_eq!(positions, vec![1, 2, 0]);
}

#[test]
fn simulate_rejects_unknown_steps() {
    let mut cmd = cargo_bin_cmd!("slidekitctl");
    cmd.args([
        "simulate", "--items", "4", "--window", "900", "--steps", "next,jump",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown step"));
}
