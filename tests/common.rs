#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Create a fresh per-test home directory under the system temp dir.
/// Config, data and clients files all land inside it, so tests never
/// touch the real user profile.
pub fn setup_test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_cutlog_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Data file path inside a test home.
pub fn test_data_file(home: &PathBuf) -> String {
    home.join("cutting_table.csv").to_string_lossy().to_string()
}

/// Command with HOME/APPDATA pointed at the test home.
pub fn cutlog(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("cutlog");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Create a temporary output file path and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the table and record a small dataset useful for many tests
pub fn init_with_data(home: &PathBuf, data_file: &str) {
    cutlog(home)
        .args(["--table", data_file, "init"])
        .assert()
        .success();

    cutlog(home)
        .args([
            "--table", data_file, "add", "2025-09-01",
            "--client", "Zara",
            "--order", "CMD-100",
            "--fabric", "Coton",
            "--roll", "R-17",
            "--length", "42.5",
            "--plies", "12",
            "--start", "08:00",
            "--end", "09:30",
        ])
        .assert()
        .success();

    cutlog(home)
        .args([
            "--table", data_file, "add", "2025-09-15",
            "--client", "Benetton",
            "--order", "CMD-101",
            "--fabric", "Polyester",
            "--roll", "R-18",
            "--length", "30",
            "--plies", "8",
            "--start", "22:00",
            "--end", "02:00",
        ])
        .assert()
        .success();
}
