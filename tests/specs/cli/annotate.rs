// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `refmark annotate`, driven end-to-end through the binary
//! against a local stub tracker.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use mockito::{Matcher, Server, ServerGuard};
use predicates::prelude::*;
use tempfile::TempDir;

/// A refmark command with a clean environment: no leaked connection
/// settings and no user config file.
fn refmark(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("refmark");
    cmd.env_remove("REFMARK_HOST")
        .env_remove("REFMARK_PORT")
        .env_remove("REFMARK_USER")
        .env_remove("REFMARK_PASSWORD")
        .env_remove("GIT_AUTHOR_EMAIL")
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"));
    cmd
}

/// Splits a stub-tracker URL (`http://127.0.0.1:PORT`) into host and port
/// arguments for the CLI.
fn host_port(server: &ServerGuard) -> (String, String) {
    let url = server.url();
    let (host, port) = url.rsplit_once(':').unwrap();
    (host.to_string(), port.to_string())
}

fn write_message(temp: &TempDir, content: &str) -> std::path::PathBuf {
    let path = temp.path().join("COMMIT_EDITMSG");
    std::fs::write(&path, content).unwrap();
    path
}

fn mock_login(server: &mut ServerGuard) {
    server
        .mock("POST", "/rest/auth/latest/session")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create();
}

#[test]
fn missing_connection_settings_fail() {
    let temp = TempDir::new().unwrap();
    let message = write_message(&temp, "refs #PROJ-1\n");

    refmark(&temp)
        .arg("annotate")
        .arg(&message)
        .assert()
        .failure()
        .stderr(predicate::str::contains("tracker host not configured"));

    // The file is untouched when resolution fails before any network use.
    assert_eq!(std::fs::read_to_string(&message).unwrap(), "refs #PROJ-1\n");
}

#[test]
fn rejected_login_aborts_without_rewriting() {
    let temp = TempDir::new().unwrap();
    let message = write_message(&temp, "refs #PROJ-1\n");

    let mut server = Server::new();
    server
        .mock("POST", "/rest/auth/latest/session")
        .with_status(401)
        .with_body(r#"{"errorMessages":["Login failed"]}"#)
        .create();

    let (host, port) = host_port(&server);
    refmark(&temp)
        .args(["annotate", message.to_str().unwrap()])
        .args(["--host", &host, "--port", &port])
        .args(["--user", "bot", "--password", "bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("authentication failed for user 'bot'"));

    assert_eq!(std::fs::read_to_string(&message).unwrap(), "refs #PROJ-1\n");
}

#[test]
fn annotates_reference_end_to_end() {
    let temp = TempDir::new().unwrap();
    let message = write_message(&temp, "refs #PROJ-1\n");

    let mut server = Server::new();
    mock_login(&mut server);
    server
        .mock("GET", "/rest/api/latest/field")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();
    server
        .mock("GET", "/rest/api/latest/issue/PROJ-1?expand=all")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"key":"PROJ-1","fields":{"summary":"Fix login"}}"#)
        .create();

    let (host, port) = host_port(&server);
    refmark(&temp)
        .args(["annotate", message.to_str().unwrap()])
        .args(["--host", &host, "--port", &port])
        .args(["--user", "bot", "--password", "secret"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&message).unwrap(),
        "refs #PROJ-1 (Fix login)\n"
    );
}

#[test]
fn unresolvable_reference_survives_end_to_end() {
    let temp = TempDir::new().unwrap();
    let message = write_message(&temp, "refs #PROJ-404\n");

    let mut server = Server::new();
    mock_login(&mut server);
    server
        .mock("GET", "/rest/api/latest/field")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();
    server
        .mock("GET", "/rest/api/latest/issue/PROJ-404?expand=all")
        .with_status(404)
        .with_body("Issue Does Not Exist")
        .create();

    let (host, port) = host_port(&server);
    refmark(&temp)
        .args(["annotate", message.to_str().unwrap()])
        .args(["--host", &host, "--port", &port])
        .args(["--user", "bot", "--password", "secret"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&message).unwrap(),
        "refs #PROJ-404\n"
    );
}

#[test]
fn creates_issue_from_marker_end_to_end() {
    let temp = TempDir::new().unwrap();
    let message = write_message(&temp, "Fix crash refs #newissue PROJ\n\nBody text\n");

    let mut server = Server::new();
    mock_login(&mut server);
    server
        .mock("GET", "/rest/api/latest/issuetype")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"1","name":"Bug"}]"#)
        .create();
    server
        .mock("GET", "/rest/api/latest/project/PROJ/components")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();
    server
        .mock("GET", "/rest/api/latest/user/search")
        .match_query(Matcher::UrlEncoded(
            "username".to_string(),
            "crystal@example.com".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"name":"crystal","emailAddress":"crystal@example.com"}]"#)
        .create();
    server
        .mock("POST", "/rest/api/latest/issue/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "fields": {
                "project": {"key": "PROJ"},
                "issuetype": {"id": "1"},
                "summary": "Fix crash",
                "description": "Body text\n"
            }
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"key":"PROJ-9","self":"https://tracker/rest/api/latest/issue/10009"}"#)
        .create();

    let (host, port) = host_port(&server);
    refmark(&temp)
        .args(["annotate", message.to_str().unwrap()])
        .args(["--host", &host, "--port", &port])
        .args(["--user", "bot", "--password", "secret"])
        .env("GIT_AUTHOR_EMAIL", "crystal@example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("created issue"));

    // The whole message is replaced by a reference to the new issue.
    assert_eq!(
        std::fs::read_to_string(&message).unwrap(),
        "refs #PROJ-9 (Fix crash)\n"
    );
}

#[test]
fn marker_without_author_email_fails() {
    let temp = TempDir::new().unwrap();
    let message = write_message(&temp, "refs #newissue PROJ\n\nBody text\n");

    let mut server = Server::new();
    mock_login(&mut server);

    let (host, port) = host_port(&server);
    refmark(&temp)
        .args(["annotate", message.to_str().unwrap()])
        .args(["--host", &host, "--port", &port])
        .args(["--user", "bot", "--password", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("author email not set"));
}
