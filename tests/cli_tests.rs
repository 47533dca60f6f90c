//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn voice_brief() -> Command {
    Command::cargo_bin("voice-brief").unwrap()
}

/// Isolate the config dir so tests never touch the developer's real config.
fn isolated(cmd: &mut Command, config_home: &std::path::Path) {
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("SILICONFLOW_API_KEY");
}

#[test]
fn help_output() {
    voice_brief()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("brief"))
        .stdout(predicate::str::contains("transcribe"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_output() {
    voice_brief()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("voice-brief"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("voice-brief"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_set_and_get_masks_api_key() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "set", "api_key", "sk-1234567890abcdef"])
        .assert()
        .success();

    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "get", "api_key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sk-1...cdef"))
        .stdout(predicate::str::contains("1234567890").not());
}

#[test]
fn config_unset_clears_value() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "set", "briefing_type", "study-notes"])
        .assert()
        .success();

    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "unset", "briefing_type"])
        .assert()
        .success();

    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "get", "briefing_type"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "init"]).assert().success();

    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[tokio::test(flavor = "multi_thread")]
async fn brief_pipeline_against_mocked_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"text": "今天完成了A，遇到问题B"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "1完成：A\n2问题：B\n3计划：继续"}}]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("voice-brief");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("api_key = \"sk-test-key\"\nbase_url = \"{}\"\n", server.uri()),
    )
    .unwrap();

    let work_dir = tempfile::tempdir().unwrap();
    std::fs::write(work_dir.path().join("memo.mp3"), [0u8; 32]).unwrap();

    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.current_dir(work_dir.path())
        .args(["brief", "memo.mp3", "-t", "daily-report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1完成：A"));

    let exported = work_dir.path().join("briefing-daily-report.txt");
    let content = std::fs::read_to_string(exported).unwrap();
    assert_eq!(content, "1完成：A\n2问题：B\n3计划：继续");
}

#[tokio::test(flavor = "multi_thread")]
async fn generate_reads_transcript_from_stdin() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "纪要正文"}}]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("voice-brief");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("api_key = \"sk-test-key\"\nbase_url = \"{}\"\n", server.uri()),
    )
    .unwrap();

    let mut cmd = voice_brief();
    isolated(&mut cmd, dir.path());
    cmd.args(["generate", "-t", "meeting-minutes", "--no-export"])
        .write_stdin("会议讨论了预算")
        .assert()
        .success()
        .stdout(predicate::str::contains("纪要正文"));
}
