//! Integration tests for the Gemini source and the client's failure policy,
//! using a mock HTTP server.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use imposter_content::{
    ContentError, GeminiRoundSource, RoundClient, RoundHistory, RoundRequest, RoundSource,
    SourceError,
};
use imposter_types::{Category, DifficultyBand};

const GENERATE_PATH: &str = "/v1beta/models/gemini-3-flash-preview:generateContent";

fn source_for(server: &MockServer) -> GeminiRoundSource {
    GeminiRoundSource::new("test-key").with_base_url(server.uri())
}

fn sports_request() -> RoundRequest {
    RoundRequest {
        category: Category::Sports,
        recent_words: vec!["Basketball".into()],
        band: DifficultyBand::Easy,
        difficulty: 1,
    }
}

/// A conforming Gemini payload whose inner text is the round JSON.
fn round_payload(secret_word: &str, category: &str, hint: &str) -> serde_json::Value {
    let inner = serde_json::json!({
        "secretWord": secret_word,
        "category": category,
        "hint": hint,
    });
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": inner.to_string() }] }
        }]
    })
}

#[tokio::test]
async fn test_gemini_source_parses_a_conforming_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(round_payload("Cricket", "Sports", "Bat ball")),
        )
        .mount(&server)
        .await;

    let round = source_for(&server)
        .generate(&sports_request())
        .await
        .expect("conforming payload should parse");

    assert_eq!(round.secret_word, "Cricket");
    assert_eq!(round.hint, "Bat ball");
}

#[tokio::test]
async fn test_gemini_source_reports_http_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = source_for(&server).generate(&sports_request()).await;

    assert!(matches!(result, Err(SourceError::Http(_))));
}

#[tokio::test]
async fn test_gemini_source_reports_empty_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": []
        })))
        .mount(&server)
        .await;

    let result = source_for(&server).generate(&sports_request()).await;

    assert!(matches!(result, Err(SourceError::EmptyResponse)));
}

#[tokio::test]
async fn test_gemini_source_reports_malformed_round_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "not a round at all" }] }
            }]
        })))
        .mount(&server)
        .await;

    let result = source_for(&server).generate(&sports_request()).await;

    assert!(matches!(result, Err(SourceError::Malformed(_))));
}

#[tokio::test]
async fn test_client_turns_provider_failure_into_the_fallback_round() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = RoundClient::new(source_for(&server));
    let mut rng = StdRng::seed_from_u64(1);

    let round = client
        .request_round(
            &BTreeSet::from([Category::Sports]),
            &RoundHistory::new(),
            1,
            &mut rng,
        )
        .await
        .expect("fallback, not an error");

    assert!(round.is_fallback());
}

#[tokio::test]
async fn test_client_normalizes_a_lying_provider_category() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(round_payload("Cricket", "Definitely Not Sports", "Bat ball")),
        )
        .mount(&server)
        .await;

    let client = RoundClient::new(source_for(&server));
    let mut rng = StdRng::seed_from_u64(2);

    let round = client
        .request_round(
            &BTreeSet::from([Category::Sports]),
            &RoundHistory::new(),
            1,
            &mut rng,
        )
        .await
        .unwrap();

    assert_eq!(round.category, "Sports");
}

#[tokio::test]
async fn test_empty_category_set_never_reaches_the_network() {
    let server = MockServer::start().await;
    // Zero expected requests: the precondition fails before any HTTP.
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = RoundClient::new(source_for(&server));
    let mut rng = StdRng::seed_from_u64(3);

    let result = client
        .request_round(&BTreeSet::new(), &RoundHistory::new(), 1, &mut rng)
        .await;

    assert!(matches!(result, Err(ContentError::NoCategories)));
    // MockServer verifies the `.expect(0)` when it drops.
}
