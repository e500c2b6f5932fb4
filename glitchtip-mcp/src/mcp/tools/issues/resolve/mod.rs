//! Issue resolution tool

use super::IssueIdRequest;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::json;

/// Tool for marking an issue as resolved
#[derive(Default)]
pub struct ResolveIssueTool;

impl ResolveIssueTool {
    /// Creates a new instance of the ResolveIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ResolveIssueTool {
    fn name(&self) -> &'static str {
        "resolve_issue"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        BaseToolImpl::schema_for::<IssueIdRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: IssueIdRequest = BaseToolImpl::parse_request(arguments)?;
        let endpoint = format!("/issues/{}/", request.issue_id);

        let result = context
            .api
            .put_json(&endpoint, &json!({"status": "resolved"}))
            .await
            .map(|_| {
                tracing::info!("Resolved issue {}", request.issue_id);
                format!("✅ Issue {} marked as resolved.", request.issue_id)
            });

        Ok(McpErrorHandler::handle_result(result, "resolve issue"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock_transport::MockTransport;
    use reqwest::Method;
    use rmcp::model::ErrorCode;
    use std::sync::Arc;

    fn context() -> (ToolContext, Arc<MockTransport>) {
        let (client, transport) = MockTransport::client();
        (ToolContext::new(Arc::new(client)), transport)
    }

    fn args(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn test_resolve_sends_put_with_status() {
        let (context, transport) = context();
        transport.respond(Method::PUT, "/issues/7/", 200, "{\"id\":\"7\",\"status\":\"resolved\"}");

        let result = ResolveIssueTool::new()
            .execute(args(json!({"issue_id": "7"})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            BaseToolImpl::response_text(&result),
            Some("✅ Issue 7 marked as resolved.")
        );

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(requests[0].url, "http://glitchtip.test/api/0/issues/7/");
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"status": "resolved"}));
    }

    #[tokio::test]
    async fn test_resolve_accepts_empty_response() {
        let (context, transport) = context();
        transport.respond(Method::PUT, "/issues/7/", 204, "");

        let result = ResolveIssueTool::new()
            .execute(args(json!({"issue_id": "7"})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_resolve_failure_is_tool_error() {
        let (context, transport) = context();
        transport.respond(Method::PUT, "/issues/7/", 403, "{\"detail\":\"forbidden\"}");

        let result = ResolveIssueTool::new()
            .execute(args(json!({"issue_id": "7"})), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        let text = BaseToolImpl::response_text(&result).unwrap();
        assert!(text.starts_with("Error:"));
        assert!(text.contains("403"));
    }

    #[tokio::test]
    async fn test_numeric_issue_id_is_invalid_params() {
        let (context, transport) = context();
        let err = ResolveIssueTool::new()
            .execute(args(json!({"issue_id": 7})), &context)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(transport.requests().is_empty());
    }
}
