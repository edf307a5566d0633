//! Tests for the artifact data model.

use lumen_core::errors::AuditError;
use lumen_core::types::{ArtifactValue, Artifacts, ConsoleMessage, CHROME_CONSOLE_MESSAGES};

#[test]
fn test_parse_console_messages_from_json() {
    let artifacts = Artifacts::from_json(
        r#"{
            "ChromeConsoleMessages": [
                {"text": "Mutation event fired", "url": "https://example.com/app.js", "lineNumber": 12, "source": "violation"},
                {"text": "Using fetch()"}
            ],
            "HTTPS": {"value": true}
        }"#,
    )
    .unwrap();

    let messages = artifacts.console_messages(CHROME_CONSOLE_MESSAGES).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].line, Some(12));
    assert_eq!(messages[0].source.as_deref(), Some("violation"));
    assert_eq!(messages[1].url, "");
    assert_eq!(messages[1].line, None);

    assert!(matches!(artifacts.get("HTTPS"), Some(ArtifactValue::Other(_))));
    assert_eq!(artifacts.len(), 2);
}

#[test]
fn test_empty_message_list_is_console_messages() {
    let artifacts = Artifacts::from_json(r#"{"ChromeConsoleMessages": []}"#).unwrap();
    assert!(artifacts
        .console_messages(CHROME_CONSOLE_MESSAGES)
        .unwrap()
        .is_empty());
}

#[test]
fn test_missing_artifact() {
    let artifacts = Artifacts::new();
    assert!(artifacts.is_empty());
    assert_eq!(
        artifacts.console_messages(CHROME_CONSOLE_MESSAGES),
        Err(AuditError::MissingArtifact {
            name: CHROME_CONSOLE_MESSAGES.to_string()
        })
    );
}

#[test]
fn test_wrong_shape_is_malformed() {
    let artifacts = Artifacts::from_json(r#"{"ChromeConsoleMessages": "oops"}"#).unwrap();
    assert!(matches!(
        artifacts.console_messages(CHROME_CONSOLE_MESSAGES),
        Err(AuditError::MalformedArtifact { .. })
    ));
}

#[test]
fn test_invalid_json_rejected() {
    assert!(matches!(
        Artifacts::from_json("not json"),
        Err(AuditError::MalformedArtifact { .. })
    ));
}

#[test]
fn test_console_message_serializes_camel_case() {
    let message = ConsoleMessage::at("Mutation event fired", "https://example.com/a.js", 3);
    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json["text"], "Mutation event fired");
    assert_eq!(json["url"], "https://example.com/a.js");
    assert_eq!(json["line"], 3);
    assert!(json.get("source").is_none());
}

#[test]
fn test_builder_inserts_console_messages() {
    let artifacts = Artifacts::new().with_console_messages(vec![ConsoleMessage::new("hello")]);
    assert!(artifacts.contains(CHROME_CONSOLE_MESSAGES));
}

#[test]
fn test_null_url_and_line_accepted() {
    let artifacts = Artifacts::from_json(
        r#"{"ChromeConsoleMessages": [{"text": "Mutation event fired", "url": null, "line": null}]}"#,
    )
    .unwrap();

    let messages = artifacts.console_messages(CHROME_CONSOLE_MESSAGES).unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].url, "");
    assert_eq!(messages[0].line, None);
}
