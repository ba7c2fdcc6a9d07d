//! End-to-end tests driving the spillstat binary.

use std::fs;
use std::path::Path;

use predicates::prelude::*;
use tempfile::tempdir;

fn spillstat_cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("spillstat")
}

fn write_log(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create log directory");
    }
    fs::write(&path, contents).expect("Failed to write log file");
}

/// Lay out the default directory structure with known per-file totals:
/// sunspider baseline [3, 5], sunspider restricted [2],
/// kraken baseline [3], kraken restricted [6].
fn build_fixture_tree(root: &Path) {
    let baseline = root.join("spilldata_baseline");
    let restricted = root.join("spilldata_restricted");

    write_log(
        &baseline.join("sunspider"),
        "a.log",
        "spill count:1\nspill count:2\n",
    );
    write_log(&baseline.join("sunspider"), "b.log", "spill count:5\n");
    write_log(&restricted.join("sunspider"), "a.log", "spill count: 2\n");
    write_log(&baseline.join("kraken"), "a.log", "spill count: 3\n");
    write_log(&restricted.join("kraken"), "a.log", "spill count: 6\n");
}

#[test]
fn compare_prints_one_line_per_suite_and_condition() {
    let root = tempdir().expect("Failed to create temp directory");
    build_fixture_tree(root.path());

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path()).arg("compare");

    cmd.assert().success().stdout(
        "sunspider baseline mean spill:4.0\n\
         sunspider restricted mean spill:2.0\n\
         kraken baseline mean spill:3.0\n\
         kraken restricted mean spill:6.0\n",
    );
}

#[test]
fn compare_accepts_explicit_dirs_and_suites() {
    let root = tempdir().expect("Failed to create temp directory");
    build_fixture_tree(root.path());

    let mut cmd = spillstat_cmd();
    cmd.arg("compare")
        .arg("--baseline-dir")
        .arg(root.path().join("spilldata_baseline"))
        .arg("--restricted-dir")
        .arg(root.path().join("spilldata_restricted"))
        .arg("--suite")
        .arg("sunspider");

    cmd.assert()
        .success()
        .stdout("sunspider baseline mean spill:4.0\nsunspider restricted mean spill:2.0\n");
}

#[test]
fn compare_json_output_parses() {
    let root = tempdir().expect("Failed to create temp directory");
    build_fixture_tree(root.path());

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path())
        .arg("compare")
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["marker"], "spill count");

    let suites = parsed["suites"].as_array().unwrap();
    assert_eq!(suites.len(), 2);
    assert_eq!(suites[0]["suite"], "sunspider");
    assert_eq!(suites[0]["baseline"]["mean"], 4.0);
    assert_eq!(suites[0]["baseline"]["files"], 2);
    assert_eq!(suites[0]["restricted"]["mean"], 2.0);
    assert_eq!(suites[1]["suite"], "kraken");
    assert_eq!(suites[1]["restricted"]["mean"], 6.0);
}

#[test]
fn compare_fails_on_empty_group() {
    let root = tempdir().expect("Failed to create temp directory");
    write_log(
        &root.path().join("spilldata_baseline/sunspider"),
        "a.log",
        "spill count: 1\n",
    );
    // Present but empty: undefined mean, must be an explicit error
    fs::create_dir_all(root.path().join("spilldata_restricted/sunspider"))
        .expect("Failed to create empty group");

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path())
        .arg("compare")
        .arg("--suite")
        .arg("sunspider");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("matched no log files"));
}

#[test]
fn compare_fails_on_malformed_marker_line() {
    let root = tempdir().expect("Failed to create temp directory");
    build_fixture_tree(root.path());
    write_log(
        &root.path().join("spilldata_baseline/sunspider"),
        "c.log",
        "spill count: abc\n",
    );

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path()).arg("compare");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no numeric suffix"))
        .stderr(predicate::str::contains("c.log"));
}

#[test]
fn compare_fails_on_missing_group_directory() {
    let root = tempdir().expect("Failed to create temp directory");

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path()).arg("compare");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn compare_honors_a_custom_marker() {
    let root = tempdir().expect("Failed to create temp directory");
    write_log(
        &root.path().join("spilldata_baseline/sunspider"),
        "a.log",
        "deopt count: 10\nspill count: 99\n",
    );
    write_log(
        &root.path().join("spilldata_restricted/sunspider"),
        "a.log",
        "deopt count: 4\n",
    );

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path())
        .arg("compare")
        .arg("--suite")
        .arg("sunspider")
        .arg("--marker")
        .arg("deopt count");

    cmd.assert()
        .success()
        .stdout("sunspider baseline mean spill:10.0\nsunspider restricted mean spill:4.0\n");
}

#[test]
fn scan_json_reports_group_summary() {
    let root = tempdir().expect("Failed to create temp directory");
    let logs = root.path().join("logs");
    write_log(&logs, "a.log", "spill count:1\nspill count:2\n");
    write_log(&logs, "b.log", "spill count:5\n");

    let mut cmd = spillstat_cmd();
    cmd.arg("scan")
        .arg(&logs)
        .arg("--per-file")
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let groups = parsed["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["summary"]["files"], 2);
    assert_eq!(groups[0]["summary"]["total"], 8);
    assert_eq!(groups[0]["summary"]["min"], 3);
    assert_eq!(groups[0]["summary"]["max"], 5);
    assert_eq!(groups[0]["summary"]["mean"], 4.0);

    let files = groups[0]["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["spill"], 3);
    assert_eq!(files[1]["spill"], 5);
}

#[test]
fn scan_table_output_lists_per_file_totals() {
    let root = tempdir().expect("Failed to create temp directory");
    let logs = root.path().join("logs");
    write_log(&logs, "a.log", "spill count: 3\n");

    let mut cmd = spillstat_cmd();
    cmd.arg("scan").arg(&logs).arg("--per-file");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("total spill: 3"))
        .stderr(predicate::str::contains("a.log: 3"));
}

#[test]
fn scan_rejects_paths_matching_nothing() {
    let root = tempdir().expect("Failed to create temp directory");

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path()).arg("scan").arg("absent");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No directories matched"));
}

#[test]
fn init_creates_the_example_config() {
    let root = tempdir().expect("Failed to create temp directory");

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path()).arg("init");
    cmd.assert().success();

    let cfg_path = root.path().join("spillstat.toml");
    assert!(cfg_path.exists(), "init should write spillstat.toml");

    // Running init again must not clobber the existing file
    let marker = "# customized\n";
    fs::write(&cfg_path, marker).expect("Failed to rewrite config");
    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path()).arg("init");
    cmd.assert().success();
    let contents = fs::read_to_string(&cfg_path).expect("Failed to read config");
    assert_eq!(contents, marker);
}

#[test]
fn print_config_reflects_the_config_file() {
    let root = tempdir().expect("Failed to create temp directory");
    fs::write(
        root.path().join("spillstat.toml"),
        "marker = \"deopt count\"\nsuites = [\"octane\"]\n",
    )
    .expect("Failed to write config");

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path())
        .arg("print")
        .arg("config")
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["marker"], "deopt count");
    assert_eq!(parsed["suites"][0], "octane");
    // Untouched keys fall back to defaults
    assert_eq!(parsed["baseline_dir"], "spilldata_baseline");
}

#[test]
fn malformed_config_file_falls_back_to_defaults() {
    let root = tempdir().expect("Failed to create temp directory");
    fs::write(root.path().join("spillstat.toml"), "marker = [not toml\n")
        .expect("Failed to write config");

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path())
        .arg("print")
        .arg("config")
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // The unreadable file is skipped rather than treated as fatal
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["marker"], "spill count");
    assert_eq!(parsed["baseline_dir"], "spilldata_baseline");
    assert_eq!(parsed["suites"][0], "sunspider");
}

#[test]
fn print_files_lists_log_files_and_missing_directories() {
    let root = tempdir().expect("Failed to create temp directory");
    write_log(
        &root.path().join("spilldata_baseline/sunspider"),
        "a.log",
        "spill count: 1\n",
    );

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path())
        .arg("print")
        .arg("files")
        .arg("--suite")
        .arg("sunspider");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("a.log"))
        .stderr(predicate::str::contains("(directory not found)"));
}

#[test]
fn forced_log_color_styles_print_files_notes() {
    let root = tempdir().expect("Failed to create temp directory");

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path())
        .arg("--log.color")
        .arg("on")
        .arg("print")
        .arg("files")
        .arg("--suite")
        .arg("sunspider");

    // Captured stderr is not a tty, so escapes only appear when forced on
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("\u{1b}[31m(directory not found)"));
}

#[test]
fn disabled_log_color_strips_ansi_from_print_files() {
    let root = tempdir().expect("Failed to create temp directory");

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path())
        .arg("--log.color")
        .arg("off")
        .arg("print")
        .arg("files")
        .arg("--suite")
        .arg("sunspider");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("(directory not found)"))
        .stderr(predicate::str::contains("\u{1b}").not());
}

#[test]
fn log_level_flag_enables_debug_output() {
    let root = tempdir().expect("Failed to create temp directory");
    build_fixture_tree(root.path());

    let mut cmd = spillstat_cmd();
    cmd.current_dir(root.path())
        .arg("--log.level")
        .arg("debug")
        .arg("compare");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Current working directory"));
}
