//! Integration tests for the glitchtip-mcp binary

use assert_cmd::Command;
use predicates::prelude::*;

/// The binary with no GlitchTip environment leaking in from the caller
fn glitchtip_mcp() -> Command {
    let mut cmd = Command::cargo_bin("glitchtip-mcp").unwrap();
    cmd.env_remove("GLITCHTIP_TOKEN")
        .env_remove("GLITCHTIP_HOST")
        .env_remove("GLITCHTIP_MCP_LOG_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_serve_without_token_fails_before_serving() {
    glitchtip_mcp()
        .arg("serve")
        .write_stdin("")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: GLITCHTIP_TOKEN environment variable is required",
        ));
}

#[test]
fn test_no_subcommand_means_serve() {
    glitchtip_mcp()
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("GLITCHTIP_TOKEN"));
}

#[test]
fn test_empty_token_counts_as_missing() {
    glitchtip_mcp()
        .env("GLITCHTIP_TOKEN", "")
        .arg("serve")
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("GLITCHTIP_TOKEN"));
}

#[test]
fn test_tools_lists_every_tool_without_token() {
    let assert = glitchtip_mcp().arg("tools").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    for name in [
        "get_issue",
        "get_latest_events",
        "list_issue_events",
        "list_issues",
        "list_organizations",
        "list_projects",
        "resolve_issue",
    ] {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }
    assert_eq!(stdout.lines().count(), 7);
}

#[test]
fn test_unknown_tool_exits_2() {
    glitchtip_mcp()
        .args(["tool", "delete_everything", "--token", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown tool: delete_everything"));
}

#[test]
fn test_malformed_args_exit_2() {
    glitchtip_mcp()
        .args(["tool", "get_issue", "--token", "x", "--args", "{issue_id"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_missing_required_argument_exits_2() {
    glitchtip_mcp()
        .args(["tool", "list_projects", "--token", "x", "--args", "{}"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_unreachable_server_exits_1() {
    glitchtip_mcp()
        .args([
            "tool",
            "list_organizations",
            "--host",
            "http://127.0.0.1:1",
            "--token",
            "x",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: HTTP request failed"));
}

#[test]
fn test_doctor_without_token_reports_error() {
    glitchtip_mcp()
        .arg("doctor")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("✗ API token"))
        .stdout(predicate::str::contains("Skipped"));
}

#[test]
fn test_doctor_unreachable_server() {
    glitchtip_mcp()
        .args(["doctor", "--host", "http://127.0.0.1:1", "--token", "x"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("✓ API token"))
        .stdout(predicate::str::contains("✗ API connectivity"));
}

#[test]
fn test_completion_bash() {
    glitchtip_mcp()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glitchtip-mcp"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    glitchtip_mcp()
        .args(["tools", "--verbose", "--quiet"])
        .assert()
        .failure();
}
