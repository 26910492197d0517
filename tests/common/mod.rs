#![allow(dead_code)]

use assert_cmd::Command;
use regex::Regex;
use tempfile::TempDir;

/// Fresh application home so config and session never leak between tests.
pub fn home() -> TempDir {
    TempDir::new().expect("create temp home")
}

/// Script-mode shell rooted at `home`, colours off.
pub fn shell(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("banquet_hub_cli").expect("binary built");
    cmd.env("BANQUET_HUB_CLI_SCRIPT", "1")
        .env("BANQUET_HUB_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("BANQUET_HUB_TEST_INPUTS")
        .env_remove("RUST_LOG");
    cmd
}

/// Runs `script` to completion and returns stdout.
pub fn run_script(home: &TempDir, script: &str) -> String {
    stdout_of(shell(home), script)
}

pub fn stdout_of(mut cmd: Command, script: &str) -> String {
    let output = cmd
        .write_stdin(script.to_string())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("stdout is utf-8")
}

/// Runs `script` to completion and returns stderr, where tracing output goes.
pub fn stderr_of(mut cmd: Command, script: &str) -> String {
    let output = cmd
        .write_stdin(script.to_string())
        .assert()
        .success()
        .get_output()
        .stderr
        .clone();
    String::from_utf8(output).expect("stderr is utf-8")
}

/// Replaces generated booking references with a stable placeholder.
pub fn mask_booking_refs(text: &str) -> String {
    let pattern = Regex::new(r"BK-[0-9A-F]{8}").expect("valid regex");
    pattern.replace_all(text, "BK-XXXXXXXX").into_owned()
}

/// Script preamble that removes the simulated network delays.
pub const NO_LATENCY: &str = "config set latency.login_ms 0\nconfig set latency.contact_ms 0\n";
