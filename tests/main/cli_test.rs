//! Black-box checks of the `college-buddy` binary.

use assert_cmd::Command;

fn cli(dir: &tempfile::TempDir) -> Command {
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").expect("write empty config");

    let mut cmd = Command::cargo_bin("college-buddy").expect("binary builds");
    cmd.env_remove("RUST_LOG").arg("--config").arg(config);
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn health_prints_descriptor() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = cli(&dir).arg("health").output().expect("run");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["service"], "Smart Keyword-Based Assistant");
    assert_eq!(json["reliable"], true);
    assert_eq!(json["features"].as_array().expect("features").len(), 6);
}

#[test]
fn ask_joins_words_and_replies() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = cli(&dir)
        .args(["ask", "where", "is", "the", "teacher's", "office"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert!(json["response"]
        .as_str()
        .expect("text")
        .contains("Teacher Seating"));
}

#[test]
fn ask_empty_message_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = cli(&dir).args(["ask", ""]).output().expect("run");
    assert!(!output.status.success());
    assert_eq!(stdout_json(&output)["error"], "Message is required");
}

#[test]
fn ask_whitespace_message_falls_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = cli(&dir).args(["ask", " "]).output().expect("run");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert!(json["response"]
        .as_str()
        .expect("text")
        .starts_with("I'm here to help with college information!"));
}

#[test]
fn serve_answers_stdin_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = cli(&dir)
        .arg("serve")
        .write_stdin("{\"message\":\"thanks\"}\n{\"nope\":true}\n")
        .output()
        .expect("run");
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("You're welcome!"));
    assert_eq!(lines[1], r#"{"error":"Message is required"}"#);
}

#[test]
fn chat_session_until_quit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = cli(&dir)
        .arg("chat")
        .write_stdin("bus timings\n\n/quit\nclub\n")
        .output()
        .expect("run");
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).expect("utf8");
    assert!(text.starts_with(college_buddy::session::WELCOME));
    assert!(text.contains("Transport Information"));
    assert!(!text.contains("College Clubs"));
}

#[test]
fn bad_config_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[chat]\nhistory_limit = 0\n").expect("write");

    let output = Command::cargo_bin("college-buddy")
        .expect("binary builds")
        .arg("--config")
        .arg(&config)
        .arg("health")
        .output()
        .expect("run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("history_limit"));
}
