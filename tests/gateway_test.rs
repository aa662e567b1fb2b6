//! Generation gateway tests: request shape, validation and error classification.
//!
//! All tests run against `MockBackend`; no network access.

mod common;

use common::{MockBackend, SAMPLE_TEXT, gateway, payload, payload_with};
use slidegen::gateway::GenerationErrorKind;
use slidegen::models::slide::IconName;

#[tokio::test]
async fn test_well_formed_payload_round_trips_in_order() {
    let backend = MockBackend::replying(payload());
    let result = gateway(&backend).generate(SAMPLE_TEXT).await.expect("generate");

    assert_eq!(result.len(), 3);
    for (v, variant) in result.variants().iter().enumerate() {
        assert_eq!(variant.len(), 6);
        for (p, point) in variant.iter().enumerate() {
            assert_eq!(point.title, format!("V{}P{}", v + 1, p + 1));
        }
    }
    assert_eq!(result.variants()[0][0].icon, IconName::Briefing);
    assert_eq!(result.variants()[2][5].icon, IconName::Results);
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_prompt_embeds_input_verbatim() {
    let backend = MockBackend::replying(payload());
    gateway(&backend).generate(SAMPLE_TEXT).await.expect("generate");

    let prompt = backend.last_prompt().expect("prompt recorded");
    assert!(prompt.contains(&format!("---\n{SAMPLE_TEXT}\n---")));
    assert!(prompt.contains("Spanish"));
}

#[tokio::test]
async fn test_two_versions_is_invalid_shape() {
    let backend = MockBackend::replying(payload_with(2, 6));
    let err = gateway(&backend).generate(SAMPLE_TEXT).await.unwrap_err();

    assert_eq!(err.kind(), GenerationErrorKind::InvalidShape);
    assert!(err.to_string().starts_with("failed to generate slides:"));
    assert!(err.message().contains("got 2"));
}

#[tokio::test]
async fn test_four_versions_is_invalid_shape() {
    let backend = MockBackend::replying(payload_with(4, 6));
    let err = gateway(&backend).generate(SAMPLE_TEXT).await.unwrap_err();
    assert_eq!(err.kind(), GenerationErrorKind::InvalidShape);
}

#[tokio::test]
async fn test_version_that_is_not_an_array_is_invalid_shape() {
    let backend = MockBackend::replying(r#"[[{"title":"a","description":"b","icon":"social"}], "oops", []]"#);
    let err = gateway(&backend).generate(SAMPLE_TEXT).await.unwrap_err();
    assert_eq!(err.kind(), GenerationErrorKind::InvalidShape);
    assert!(err.message().contains("version 2"));
}

#[tokio::test]
async fn test_empty_version_is_invalid_shape() {
    let point = r#"{"title":"a","description":"b","icon":"social"}"#;
    let backend = MockBackend::replying(format!("[[{point}],[],[{point}]]"));
    let err = gateway(&backend).generate(SAMPLE_TEXT).await.unwrap_err();
    assert_eq!(err.kind(), GenerationErrorKind::InvalidShape);
}

#[tokio::test]
async fn test_unparseable_payload_is_malformed_response() {
    let backend = MockBackend::replying("Here are your slides: [[...");
    let err = gateway(&backend).generate(SAMPLE_TEXT).await.unwrap_err();
    assert_eq!(err.kind(), GenerationErrorKind::MalformedResponse);
}

#[tokio::test]
async fn test_fenced_payload_is_accepted() {
    let backend = MockBackend::replying(format!("```json\n{}\n```", payload()));
    let result = gateway(&backend).generate(SAMPLE_TEXT).await.expect("generate");
    assert_eq!(result.len(), 3);
}

#[tokio::test]
async fn test_backend_failure_carries_cause() {
    let backend = MockBackend::failing("HTTP 429: quota exceeded");
    let err = gateway(&backend).generate(SAMPLE_TEXT).await.unwrap_err();

    assert_eq!(err.kind(), GenerationErrorKind::BackendFailure);
    assert_eq!(err.to_string(), "failed to generate slides: HTTP 429: quota exceeded");
}

#[tokio::test]
async fn test_unknown_icon_is_coerced_not_rejected() {
    let point = r#"{"title":"a","description":"b","icon":"unknown_tag"}"#;
    let backend = MockBackend::replying(format!("[[{point}],[{point}],[{point}]]"));
    let result = gateway(&backend).generate(SAMPLE_TEXT).await.expect("generate");
    assert!(result.variants().iter().flatten().all(|p| p.icon == IconName::Default));
}
