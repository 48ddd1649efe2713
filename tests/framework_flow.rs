//! Library-level scenarios for the full initialize-and-run sequence.

use std::fs;

use sacredfw::{FrameworkPaths, RunOptions};
use tempfile::TempDir;

fn run_once(paths: &FrameworkPaths) {
    let options = RunOptions { interpreter: Some("true".to_string()) };
    sacredfw::run(paths, options).expect("run should succeed");
}

fn log_lines(paths: &FrameworkPaths) -> Vec<String> {
    fs::read_to_string(paths.log_file())
        .expect("log file should be readable")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn fresh_root_single_run_deploys_and_executes() {
    let dir = TempDir::new().unwrap();
    let paths = FrameworkPaths::new(dir.path().join("fw"));

    run_once(&paths);

    for sub in ["scripts", "resources", "logs", "docs"] {
        assert!(paths.root().join(sub).is_dir(), "{sub} should exist");
    }

    let lines = log_lines(&paths);
    assert!(lines.len() >= 8, "expected at least 8 log lines, got {}", lines.len());

    let training =
        fs::read_to_string(paths.script_path("neural_network_training.py")).unwrap();
    assert!(training.contains("Training the neural network..."));
}

#[test]
fn every_log_line_is_timestamped() {
    let dir = TempDir::new().unwrap();
    let paths = FrameworkPaths::new(dir.path().join("fw"));

    run_once(&paths);

    for line in log_lines(&paths) {
        let (stamp, _) = line.split_once(" - ").expect("line has separator");
        assert!(
            chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").is_ok(),
            "bad timestamp in line: {line}"
        );
    }
}

#[test]
fn second_run_appends_one_line_fewer() {
    let dir = TempDir::new().unwrap();
    let paths = FrameworkPaths::new(dir.path().join("fw"));

    run_once(&paths);
    let first = log_lines(&paths).len();

    run_once(&paths);
    let total = log_lines(&paths).len();

    // The README log line only appears on the run that writes the file.
    assert_eq!(total, 2 * first - 1);
}

#[test]
fn second_run_leaves_scripts_and_readme_byte_identical() {
    let dir = TempDir::new().unwrap();
    let paths = FrameworkPaths::new(dir.path().join("fw"));

    run_once(&paths);
    let script = paths.script_path("speech_recognition.py");
    let readme = paths.readme_path();
    let script_before = fs::read_to_string(&script).unwrap();
    let readme_before = fs::read_to_string(&readme).unwrap();

    run_once(&paths);

    assert_eq!(fs::read_to_string(&script).unwrap(), script_before);
    assert_eq!(fs::read_to_string(&readme).unwrap(), readme_before);
}

#[test]
fn resonance_factor_lands_on_the_cycle() {
    let dir = TempDir::new().unwrap();
    let paths = FrameworkPaths::new(dir.path().join("fw"));

    run_once(&paths);

    let resonance_line = log_lines(&paths)
        .into_iter()
        .find(|l| l.contains("Sacred resonance correction applied"))
        .expect("resonance line should be logged");
    let factor: f64 = resonance_line
        .rsplit_once("factor ")
        .expect("line carries a factor")
        .1
        .parse()
        .expect("factor should parse");

    let step = factor / 3.69;
    assert!((0.0..12.0).contains(&step));
    assert!((step - step.round()).abs() < 1e-6, "factor {factor} off the 3.69 cycle");
}
