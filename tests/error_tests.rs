//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn voice_brief() -> Command {
    Command::cargo_bin("voice-brief").unwrap()
}

fn isolated(cmd: &mut Command, config_home: &std::path::Path) {
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("SILICONFLOW_API_KEY");
}

#[test]
fn missing_api_key_blocks_transcription() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());

    // The credential gate runs before the file is even opened, so the
    // missing file never comes into play.
    cmd.args(["transcribe", "memo.mp3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"))
        .stderr(predicate::str::contains("config set api_key"));
}

#[test]
fn missing_api_key_blocks_generation() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());

    cmd.args(["generate", "-t", "daily-report"])
        .write_stdin("内容")
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"));
}

#[test]
fn unsupported_audio_format_rejected_before_upload() {
    let dir = tempfile::tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, "not audio").unwrap();

    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.env("SILICONFLOW_API_KEY", "sk-test-key")
        .arg("transcribe")
        .arg(&notes)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported audio format"));
}

#[test]
fn blank_stdin_transcript_rejected_locally() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());

    // No endpoint is configured or reachable; the rejection must happen
    // before any network call.
    cmd.env("SILICONFLOW_API_KEY", "sk-test-key")
        .args(["generate", "-t", "daily-report"])
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn config_set_rejects_api_key_without_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "set", "api_key", "abc123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sk-"));
}

#[test]
fn config_set_rejects_empty_api_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "set", "api_key", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn config_set_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_invalid_briefing_type() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "set", "briefing_type", "weekly-report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid briefing type"));
}

#[test]
fn config_set_invalid_base_url() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "set", "base_url", "localhost:9000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http"));
}

#[test]
fn config_get_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}
