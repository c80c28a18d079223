use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn run_cachecost(args: &[&str], home: &Path) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = std::env::var("CARGO_BIN_EXE_cachecost").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("cachecost.exe");
        } else {
            path.push("cachecost");
        }
        path.to_string_lossy().into_owned()
    });
    // Isolate from any real config in the user's home
    let output = Command::new(bin)
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("CACHECOST_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run cachecost");
    (output.status.success(), output.stdout, output.stderr)
}

fn json_f64(value: &Value) -> f64 {
    value.as_f64().expect("number")
}

#[test]
fn default_projection_json_matches_worked_example() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_cachecost(&["--json"], home.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["params"]["model"].as_str(), Some("gemini15Pro"));
    assert_eq!(json["tier"].as_str(), Some("large"));

    let points = json["points"].as_array().expect("points");
    assert_eq!(points.len(), 5);
    for (i, point) in points.iter().enumerate() {
        assert_eq!(point["queries"].as_u64(), Some(i as u64 + 1));
    }
    assert!((json_f64(&points[4]["normal_cost"]) - 10.30).abs() < 1e-9);
    assert!((json_f64(&points[4]["cache_cost"]) - 5.26).abs() < 1e-9);
    assert!((json_f64(&json["storage_surcharge"]) - 0.9).abs() < 1e-9);
}

#[test]
fn csv_output_follows_flags() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_cachecost(
        &["--csv", "-m", "gemini15Flash", "-i", "100", "-o", "1", "-r", "30", "-q", "12"],
        home.path(),
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let text = String::from_utf8(stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "queries,normal_cost,cache_cost,savings");
    assert!(lines[12].starts_with("12,"));
}

#[test]
fn legacy_model_fails_without_output() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_cachecost(&["--json", "--model", "gemini10Pro"], home.path());
    assert!(!ok);
    assert!(stdout.is_empty());
    let err = String::from_utf8_lossy(&stderr);
    assert!(
        err.contains("Gemini 1.0 Pro does not support context caching"),
        "stderr: {err}"
    );
}

#[test]
fn unknown_model_fails() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_cachecost(&["--model", "flash"], home.path());
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(String::from_utf8_lossy(&stderr).contains(r#"Unknown model "flash""#));
}

#[test]
fn out_of_range_flag_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let (ok, _, _) = run_cachecost(&["--input", "1001"], home.path());
    assert!(!ok);
    let (ok, _, _) = run_cachecost(&["--queries", "0"], home.path());
    assert!(!ok);
}

#[test]
fn tier_flips_between_128_and_129() {
    let home = tempfile::tempdir().unwrap();
    let tier_for = |input: &str| {
        let (ok, stdout, stderr) = run_cachecost(&["--json", "--input", input], home.path());
        assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
        let json: Value = serde_json::from_slice(&stdout).unwrap();
        (
            json["tier"].as_str().unwrap().to_string(),
            json_f64(&json["unit_prices"]["normal_output"]),
        )
    };
    let (small, small_out) = tier_for("128");
    let (large, large_out) = tier_for("129");
    assert_eq!(small, "small");
    assert_eq!(large, "large");
    assert!(large_out > small_out);
}

#[test]
fn explicit_config_supplies_defaults() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "model = \"gemini15Flash\"\nqueries = 10\ninput = 64\n").unwrap();

    let (ok, stdout, stderr) = run_cachecost(
        &["--json", "--config", config.to_str().unwrap(), "--queries", "3"],
        home.path(),
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json: Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(json["params"]["model"].as_str(), Some("gemini15Flash"));
    assert_eq!(json["params"]["context_size_input"].as_u64(), Some(64));
    // CLI flag wins over config
    assert_eq!(json["points"].as_array().unwrap().len(), 3);
}

#[test]
fn discovered_config_is_used() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".cachecost.toml"), "retention = 120\n").unwrap();

    let (ok, stdout, stderr) = run_cachecost(&["--json"], home.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json: Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(json["params"]["cache_retention_minutes"].as_u64(), Some(120));
    assert!((json_f64(&json["storage_surcharge"]) - 1.8).abs() < 1e-9);
}

#[test]
fn broken_explicit_config_is_fatal() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("broken.toml");
    fs::write(&config, "queries = \"many\"\n").unwrap();

    let (ok, stdout, stderr) =
        run_cachecost(&["--config", config.to_str().unwrap()], home.path());
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(String::from_utf8_lossy(&stderr).contains("Failed to load config"));
}

#[test]
fn table_output_includes_caption() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_cachecost(&["--no-color"], home.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let text = String::from_utf8(stdout).unwrap();
    assert!(text.contains("Gemini 1.5 Pro Cache Cost Comparison"));
    assert!(text.contains("$10.3000"));
    assert!(text.contains("Caching becomes cheaper at 2 queries."));
}

#[test]
fn prices_json_for_single_model() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_cachecost(&["prices", "groundingGoogleSearch", "-j"], home.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json: Value = serde_json::from_slice(&stdout).unwrap();
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["supports_caching"].as_bool(), Some(false));
    assert!((json_f64(&arr[0]["regular"]["groundingRequests"]["flat"]) - 35.0).abs() < 1e-9);
}

#[test]
fn models_table_lists_every_model() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_cachecost(&["models", "--no-color"], home.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let text = String::from_utf8(stdout).unwrap();
    for id in ["gemini15Flash", "gemini15Pro", "gemini10Pro", "groundingGoogleSearch"] {
        assert!(text.contains(id), "missing {id}");
    }
}

#[test]
fn prices_model_flag_filters_catalog() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_cachecost(&["prices", "-m", "gemini15Flash", "-j"], home.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json: Value = serde_json::from_slice(&stdout).unwrap();
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["model"].as_str(), Some("gemini15Flash"));
}
