//! End-to-end tool behaviour through `McpServer`, with the GlitchTip API
//! replaced by a scripted transport.

use glitchtip_mcp::api::mock_transport::MockTransport;
use glitchtip_mcp::mcp::BaseToolImpl;
use glitchtip_mcp::{GlitchTipConfig, McpServer};
use reqwest::Method;
use rmcp::model::{CallToolResult, ErrorCode};
use serde_json::{json, Map, Value};
use std::sync::Arc;

fn server() -> (McpServer, Arc<MockTransport>) {
    let (client, transport) = MockTransport::client();
    (McpServer::with_api_client(client), transport)
}

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn text(result: &CallToolResult) -> &str {
    BaseToolImpl::response_text(result).unwrap_or_default()
}

/// One call per tool, with the endpoint it hits first
fn tool_calls() -> Vec<(&'static str, Value, Method, &'static str)> {
    vec![
        ("list_organizations", json!({}), Method::GET, "/organizations/"),
        (
            "list_projects",
            json!({"organization_slug": "acme"}),
            Method::GET,
            "/organizations/acme/projects/",
        ),
        (
            "list_issues",
            json!({"organization_slug": "acme", "project_slug": "web"}),
            Method::GET,
            "/projects/acme/web/issues/?limit=10",
        ),
        (
            "get_issue",
            json!({"issue_id": "42"}),
            Method::GET,
            "/issues/42/",
        ),
        (
            "list_issue_events",
            json!({"issue_id": "42"}),
            Method::GET,
            "/issues/42/events/?limit=10",
        ),
        (
            "resolve_issue",
            json!({"issue_id": "42"}),
            Method::PUT,
            "/issues/42/",
        ),
    ]
}

#[tokio::test]
async fn test_every_tool_reports_api_errors_with_status() {
    for status in [400u16, 401, 404, 500, 503] {
        for (name, arguments, method, endpoint) in tool_calls() {
            let (server, transport) = server();
            transport.respond(method, endpoint, status, "failure body");

            let result = server.execute_tool(name, args(arguments)).await.unwrap();

            assert_eq!(result.is_error, Some(true), "{name} with {status}");
            let text = text(&result);
            assert!(text.starts_with("Error:"), "{name}: {text}");
            assert!(text.contains(&status.to_string()), "{name}: {text}");
            assert!(text.contains("failure body"), "{name}: {text}");
        }
    }
}

#[tokio::test]
async fn test_latest_events_reports_fallback_errors_with_status() {
    let (server, transport) = server();
    transport.respond(Method::GET, "/organizations/acme/events/?limit=5", 404, "");
    transport.respond(Method::GET, "/organizations/acme/projects/", 401, "denied");

    let result = server
        .execute_tool("get_latest_events", args(json!({"organization_slug": "acme"})))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    assert_eq!(text(&result), "Error: API error 401: denied");
}

#[tokio::test]
async fn test_successful_calls_render_every_field() {
    let (server, transport) = server();
    transport.respond_json(
        "/organizations/",
        json!([{"name": "Acme Corp", "slug": "acme"}]),
    );
    transport.respond_json(
        "/organizations/acme/projects/",
        json!([{"id": 11, "name": "Web", "slug": "web"}]),
    );
    transport.respond_json(
        "/projects/acme/web/issues/?limit=10",
        json!([{
            "id": "42",
            "title": "TypeError",
            "count": "3",
            "firstSeen": "2024-01-01",
            "lastSeen": "2024-01-02"
        }]),
    );

    let orgs = server
        .execute_tool("list_organizations", Map::new())
        .await
        .unwrap();
    assert_eq!(orgs.is_error, Some(false));
    assert!(text(&orgs).contains("# Organizations"));
    assert!(text(&orgs).contains("- Acme Corp (acme)"));
    assert!(text(&orgs).ends_with("Total: 1"));

    let projects = server
        .execute_tool("list_projects", args(json!({"organization_slug": "acme"})))
        .await
        .unwrap();
    assert_eq!(projects.is_error, Some(false));
    assert!(text(&projects).contains("# Projects in acme"));
    assert!(text(&projects).contains("- **Web** (web) - ID: 11"));

    let issues = server
        .execute_tool(
            "list_issues",
            args(json!({"organization_slug": "acme", "project_slug": "web"})),
        )
        .await
        .unwrap();
    let issues = text(&issues);
    for expected in [
        "# Issues in web",
        "### TypeError",
        "- ID: 42",
        "- Count: 3",
        "- First seen: 2024-01-01",
        "- Last seen: 2024-01-02",
    ] {
        assert!(issues.contains(expected), "missing {expected:?} in {issues}");
    }
}

#[tokio::test]
async fn test_get_issue_without_events_has_summary_only() {
    let (server, transport) = server();
    transport.respond_json(
        "/issues/42/",
        json!({"id": 42, "title": "Boom", "type": "error", "count": 1, "status": "unresolved"}),
    );
    transport.respond_json("/issues/42/events/?limit=3", json!([]));

    let result = server
        .execute_tool("get_issue", args(json!({"issue_id": "42"})))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    let text = text(&result);
    assert!(text.starts_with("# Issue: Boom"));
    assert!(text.contains("- **Status:** unresolved"));
    assert!(!text.contains("Recent Events"));
}

#[tokio::test]
async fn test_latest_events_fallback_uses_first_project_slug() {
    let (server, transport) = server();
    transport.respond(
        Method::GET,
        "/organizations/acme/events/?limit=5",
        404,
        "{\"detail\":\"Not found.\"}",
    );
    transport.respond_json(
        "/organizations/acme/projects/",
        json!([{"slug": "backend"}, {"slug": "frontend"}]),
    );
    transport.respond_json(
        "/projects/acme/backend/events/?limit=5",
        json!([{"eventID": "e1", "message": "disk full", "dateCreated": "2024-03-01"}]),
    );

    let result = server
        .execute_tool(
            "get_latest_events",
            args(json!({"organization_slug": "acme", "limit": 5})),
        )
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert_eq!(
        text(&result),
        "# Latest Events\n\n- **disk full**\n  Time: 2024-03-01\n  ID: e1"
    );
    let paths = transport.request_paths();
    assert_eq!(paths.len(), 3);
    assert!(paths[2].contains("backend"));
    assert!(!paths.iter().any(|p| p.contains("frontend")));
}

#[tokio::test]
async fn test_issue_event_tags() {
    let (server, transport) = server();
    transport.respond_json(
        "/issues/42/events/?limit=10",
        json!([
            {"eventID": "a", "dateCreated": "t1", "tags": [{"key": "env", "value": "prod"}]},
            {"eventID": "b", "dateCreated": "t2"}
        ]),
    );

    let result = server
        .execute_tool("list_issue_events", args(json!({"issue_id": "42"})))
        .await
        .unwrap();

    let text = text(&result);
    assert_eq!(text.matches("Tags:").count(), 1);
    assert!(text.contains("- Tags: env=prod\n"));
    assert!(!text.contains("undefined"));
}

#[tokio::test]
async fn test_resolve_issue_puts_resolved_status() {
    let (server, transport) = server();
    transport.respond(Method::PUT, "/issues/7/", 200, "{}");

    let result = server
        .execute_tool("resolve_issue", args(json!({"issue_id": "7"})))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert!(text(&result).contains('7'));

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::PUT);
    assert!(request.url.ends_with("/api/0/issues/7/"));
    assert_eq!(
        serde_json::from_str::<Value>(request.body.as_deref().unwrap_or_default()).unwrap(),
        json!({"status": "resolved"})
    );
}

#[tokio::test]
async fn test_invalid_arguments_never_reach_the_network() {
    let (server, transport) = server();
    let cases = [
        ("list_projects", json!({})),
        ("list_projects", json!({"organization_slug": ""})),
        ("list_issues", json!({"organization_slug": "acme"})),
        (
            "list_issues",
            json!({"organization_slug": "acme", "project_slug": "web", "limit": 0}),
        ),
        ("get_issue", json!({"issue_id": "1?status=resolved"})),
        ("list_issue_events", json!({"issue_id": "1", "limit": -1})),
        ("get_latest_events", json!({"organization_slug": "a b"})),
        ("resolve_issue", json!({"issue_id": "../organizations"})),
    ];

    for (name, arguments) in cases {
        let err = server
            .execute_tool(name, args(arguments.clone()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS, "{name} {arguments}");
    }
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_tool_error() {
    let config = GlitchTipConfig::new("http://127.0.0.1:1", "token").unwrap();
    let server = McpServer::new(config);

    let result = server
        .execute_tool("list_organizations", Map::new())
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(true));
    assert!(text(&result).starts_with("Error: HTTP request failed"));
}
