//! Tests for pattern evaluation and the shared audit abstraction.

use proptest::prelude::*;

use lumen_audits::{evaluate, Audit, AuditMeta, MatchPattern, PatternAudit};
use lumen_core::errors::AuditError;
use lumen_core::types::{ArtifactValue, Artifacts, ConsoleMessage, CHROME_CONSOLE_MESSAGES};

const REQUIRED: &[&str] = &[CHROME_CONSOLE_MESSAGES];

fn artifacts(texts: &[&str]) -> Artifacts {
    Artifacts::new().with_console_messages(texts.iter().map(|t| ConsoleMessage::new(*t)).collect())
}

#[test]
fn test_evaluate_example() {
    let pattern = MatchPattern::regex("mutation").unwrap();
    let result = evaluate(
        &artifacts(&["Mutation event fired", "Using fetch()"]),
        REQUIRED,
        &pattern,
    )
    .unwrap();

    assert!(!result.raw_value);
    assert_eq!(result.matches(), &[ConsoleMessage::new("Mutation event fired")]);
}

#[test]
fn test_evaluate_missing_required_artifact() {
    let pattern = MatchPattern::regex("mutation").unwrap();
    let result = evaluate(&Artifacts::new(), REQUIRED, &pattern);
    assert!(matches!(result, Err(AuditError::MissingArtifact { name }) if name == CHROME_CONSOLE_MESSAGES));
}

#[test]
fn test_evaluate_checks_every_required_artifact() {
    let pattern = MatchPattern::regex("mutation").unwrap();
    let result = evaluate(
        &artifacts(&[]),
        &[CHROME_CONSOLE_MESSAGES, "ScriptElements"],
        &pattern,
    );
    assert!(matches!(result, Err(AuditError::MissingArtifact { name }) if name == "ScriptElements"));
}

#[test]
fn test_malformed_console_artifact() {
    let mut artifacts = Artifacts::new();
    artifacts.insert(
        CHROME_CONSOLE_MESSAGES,
        ArtifactValue::Other(serde_json::json!({"unexpected": true})),
    );
    let pattern = MatchPattern::regex("mutation").unwrap();
    assert!(matches!(
        evaluate(&artifacts, REQUIRED, &pattern),
        Err(AuditError::MalformedArtifact { .. })
    ));
}

#[test]
fn test_literal_pattern_audit() {
    let audit = PatternAudit::new(
        AuditMeta::new("Performance", "no-document-write", "Avoids document.write()", "")
            .requires(CHROME_CONSOLE_MESSAGES),
        MatchPattern::literal("document.write(").unwrap(),
    );

    let result = audit
        .run(&artifacts(&["Parser-blocking document.write() call", "documentXwrite("]))
        .unwrap();
    assert_eq!(result.matches().len(), 1);
    assert_eq!(audit.name(), "no-document-write");
}

#[test]
fn test_with_pattern_keeps_descriptor() {
    let audit = PatternAudit::new(
        AuditMeta::new("JavaScript", "custom", "d", "").requires(CHROME_CONSOLE_MESSAGES),
        MatchPattern::regex("mutation").unwrap(),
    )
    .with_pattern(MatchPattern::regex("DOMNodeInserted").unwrap());

    assert_eq!(audit.meta().name, "custom");
    assert_eq!(audit.pattern().source(), "DOMNodeInserted");
    assert!(audit.run(&artifacts(&["mutation"])).unwrap().raw_value);
}

#[test]
fn test_requires_deduplicates() {
    let meta = AuditMeta::new("c", "n", "d", "")
        .requires(CHROME_CONSOLE_MESSAGES)
        .requires(CHROME_CONSOLE_MESSAGES);
    assert_eq!(meta.required_artifacts.len(), 1);
}

proptest! {
    #[test]
    fn prop_matches_are_ordered_subsequence(
        texts in proptest::collection::vec("[a-zA-Z ]{0,24}", 0..16)
    ) {
        let pattern = MatchPattern::regex("mutation").unwrap();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let result = evaluate(&artifacts(&refs), REQUIRED, &pattern).unwrap();

        let expected: Vec<ConsoleMessage> = texts
            .iter()
            .filter(|t| t.to_lowercase().contains("mutation"))
            .map(|t| ConsoleMessage::new(t.as_str()))
            .collect();

        prop_assert_eq!(result.raw_value, expected.is_empty());
        prop_assert_eq!(result.matches(), expected.as_slice());
    }

    #[test]
    fn prop_case_of_keyword_is_irrelevant(
        prefix in "[a-z ]{0,8}",
        upper in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let keyword: String = "mutation"
            .chars()
            .zip(upper.iter())
            .map(|(c, &u)| if u { c.to_ascii_uppercase() } else { c })
            .collect();
        let text = format!("{prefix}{keyword}");
        let pattern = MatchPattern::regex("mutation").unwrap();
        let result = evaluate(&artifacts(&[text.as_str()]), REQUIRED, &pattern).unwrap();
        prop_assert!(!result.raw_value);
    }
}
