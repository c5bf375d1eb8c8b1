//! CLI integration tests

use std::process::Command;

fn obs_uplink_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_obs-uplink"))
}

#[test]
fn help_output() {
    let output = obs_uplink_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OBS"));
    assert!(stdout.contains("YouTube"));
}

#[test]
fn version_output() {
    let output = obs_uplink_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("obs-uplink"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = obs_uplink_bin()
        .arg("--watch-dir=/tmp")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unexpected argument") || stderr.contains("error"));
}
