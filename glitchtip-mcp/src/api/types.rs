//! GlitchTip resource representations
//!
//! Only the fields the tools render are modelled. Every field is optional and
//! identifier-like fields are kept as raw JSON, since GlitchTip returns some
//! ids and counts as strings and others as numbers.

use serde::Deserialize;
use serde_json::Value;

/// Placeholder rendered for a missing field
pub const UNKNOWN: &str = "unknown";

/// Render an optional JSON scalar without quotes
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => UNKNOWN.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render an optional string field
pub fn display_text(value: Option<&str>) -> &str {
    value.unwrap_or(UNKNOWN)
}

/// The string if present and not blank
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Top-level tenant
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Organization {
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// A monitored application within an organization
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    pub id: Option<Value>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// A group of events sharing a signature
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Issue {
    pub id: Option<Value>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    pub count: Option<Value>,
    #[serde(rename = "firstSeen")]
    pub first_seen: Option<String>,
    #[serde(rename = "lastSeen")]
    pub last_seen: Option<String>,
    pub status: Option<String>,
}

/// One `key=value` tag attached to an event
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventTag {
    pub key: Option<String>,
    pub value: Option<Value>,
}

impl EventTag {
    /// `key=value`
    pub fn render(&self) -> String {
        format!(
            "{}={}",
            display_text(self.key.as_deref()),
            display_value(self.value.as_ref())
        )
    }
}

/// A single occurrence of an issue
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(rename = "eventID")]
    pub event_id: Option<Value>,
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "dateCreated")]
    pub date_created: Option<String>,
    pub context: Option<Value>,
    pub tags: Option<Vec<EventTag>>,
}

impl Event {
    /// Message, if the event carries a non-blank one
    pub fn message(&self) -> Option<&str> {
        non_empty(self.message.as_deref())
    }

    /// Context object, if present and not null
    pub fn context(&self) -> Option<&Value> {
        self.context.as_ref().filter(|c| !c.is_null())
    }

    /// Tags as `key=value, key=value`, or `None` when there are none
    pub fn rendered_tags(&self) -> Option<String> {
        let tags = self.tags.as_ref().filter(|t| !t.is_empty())?;
        Some(
            tags.iter()
                .map(EventTag::render)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// Best available headline: title, then message, then `Unknown`
    pub fn headline(&self) -> &str {
        non_empty(self.title.as_deref())
            .or_else(|| self.message())
            .unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value_strips_quotes() {
        assert_eq!(display_value(Some(&json!("123"))), "123");
        assert_eq!(display_value(Some(&json!(123))), "123");
        assert_eq!(display_value(Some(&Value::Null)), UNKNOWN);
        assert_eq!(display_value(None), UNKNOWN);
    }

    #[test]
    fn test_issue_reads_camel_case_fields() {
        let issue: Issue = serde_json::from_value(json!({
            "id": "42",
            "title": "TypeError: x is undefined",
            "type": "error",
            "count": "17",
            "firstSeen": "2024-01-01T00:00:00Z",
            "lastSeen": "2024-01-02T00:00:00Z",
            "status": "unresolved",
            "ignored": "extra fields are fine"
        }))
        .unwrap();

        assert_eq!(display_value(issue.id.as_ref()), "42");
        assert_eq!(issue.issue_type.as_deref(), Some("error"));
        assert_eq!(display_value(issue.count.as_ref()), "17");
        assert_eq!(issue.first_seen.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(issue.last_seen.as_deref(), Some("2024-01-02T00:00:00Z"));
    }

    #[test]
    fn test_event_optional_fields_absent() {
        let event: Event = serde_json::from_value(json!({
            "eventID": "abc",
            "dateCreated": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(event.message(), None);
        assert_eq!(event.context(), None);
        assert_eq!(event.rendered_tags(), None);
        assert_eq!(event.headline(), "Unknown");
    }

    #[test]
    fn test_event_null_and_empty_fields_count_as_absent() {
        let event: Event = serde_json::from_value(json!({
            "eventID": "abc",
            "message": "",
            "context": null,
            "tags": []
        }))
        .unwrap();

        assert_eq!(event.message(), None);
        assert_eq!(event.context(), None);
        assert_eq!(event.rendered_tags(), None);
    }

    #[test]
    fn test_event_tags_render() {
        let event: Event = serde_json::from_value(json!({
            "tags": [
                {"key": "env", "value": "prod"},
                {"key": "level", "value": "error"}
            ]
        }))
        .unwrap();

        assert_eq!(
            event.rendered_tags().as_deref(),
            Some("env=prod, level=error")
        );
    }

    #[test]
    fn test_event_headline_prefers_title() {
        let event: Event =
            serde_json::from_value(json!({"title": "Boom", "message": "msg"})).unwrap();
        assert_eq!(event.headline(), "Boom");

        let event: Event = serde_json::from_value(json!({"title": "", "message": "msg"})).unwrap();
        assert_eq!(event.headline(), "msg");
    }
}
