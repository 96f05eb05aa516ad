use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn unitconv(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("unitconv").unwrap();
    cmd.current_dir(dir.path());
    cmd.env_remove("UNITCONV_CONFIG_PATH");
    cmd.env_remove("UNITCONV_HISTORY_PATH");
    cmd.env_remove("RUST_LOG");
    cmd.timeout(Duration::from_secs(10));
    cmd
}

#[test]
fn convert_logs_to_default_history_file() {
    let dir = tempfile::tempdir().unwrap();

    unitconv(&dir)
        .args(["convert", "weight", "kilograms", "pounds", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.2046"));

    let history = std::fs::read_to_string(dir.path().join("conversion_history.txt")).unwrap();
    assert!(history.ends_with(" | Weight | kilograms | pounds | 1.0 | 2.2046\n"));
}

#[test]
fn convert_negative_temperature() {
    let dir = tempfile::tempdir().unwrap();

    unitconv(&dir)
        .args(["convert", "temperature", "fahrenheit", "celsius", "-40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-40.0000"));
}

#[test]
fn convert_unknown_unit_fails() {
    let dir = tempfile::tempdir().unwrap();

    unitconv(&dir)
        .args(["convert", "length", "furlongs", "meters", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown Length unit: furlongs"));

    assert!(!dir.path().join("conversion_history.txt").exists());
}

#[test]
fn history_file_flag_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("custom.txt");

    unitconv(&dir)
        .arg("--history-file")
        .arg(&history)
        .args(["convert", "length", "meters", "feet", "1"])
        .assert()
        .success();

    unitconv(&dir)
        .arg("--history-file")
        .arg(&history)
        .args(["history", "show", "--category", "length"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtered by category: Length"))
        .stdout(predicate::str::contains("3.2808"));

    assert!(!dir.path().join("conversion_history.txt").exists());
}

#[test]
fn history_show_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("conversion_history.txt"),
        "2024-01-01 00:00:00 | Volume | liters | gallons | 2.0 | 0.5283\n",
    )
    .unwrap();

    let output = unitconv(&dir)
        .args(["history", "show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["to_unit"], "gallons");
    assert_eq!(records[0]["result"], "0.5283");
}

#[test]
fn history_export_empty_fails() {
    let dir = tempfile::tempdir().unwrap();

    unitconv(&dir)
        .args(["history", "export", "out.csv"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No conversion history found to export."));

    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn history_clear_yes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conversion_history.txt");
    std::fs::write(&path, "2024-01-01 00:00:00 | Length | meters | feet | 1.0 | 3.2808\n").unwrap();

    unitconv(&dir)
        .args(["history", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion history cleared."));

    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn interactive_menu_from_stdin() {
    let dir = tempfile::tempdir().unwrap();

    unitconv(&dir)
        .write_stdin("3\n1\n2\n0\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("32.0000"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn config_file_sets_history_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("settings.toml"),
        "[history]\npath = \"from-config.txt\"\n",
    )
    .unwrap();

    unitconv(&dir)
        .args(["--config", "settings.toml", "convert", "volume", "liters", "milliliters", "2"])
        .assert()
        .success();

    assert!(dir.path().join("from-config.txt").exists());
}

#[test]
fn env_overrides_config_path_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("settings.toml"),
        "[history]\npath = \"from-config.txt\"\n",
    )
    .unwrap();

    unitconv(&dir)
        .env("UNITCONV_CONFIG_PATH", "settings.toml")
        .env("UNITCONV_HISTORY_PATH", "from-env.txt")
        .args(["convert", "volume", "liters", "milliliters", "2"])
        .assert()
        .success();

    assert!(dir.path().join("from-env.txt").exists());
    assert!(!dir.path().join("from-config.txt").exists());
}

#[test]
fn config_path_file_applies_without_flag() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("settings.toml"),
        "[history]\npath = \"from-config.txt\"\n",
    )
    .unwrap();

    unitconv(&dir)
        .env("UNITCONV_CONFIG_PATH", "settings.toml")
        .args(["convert", "volume", "liters", "milliliters", "2"])
        .assert()
        .success();

    assert!(dir.path().join("from-config.txt").exists());
}
