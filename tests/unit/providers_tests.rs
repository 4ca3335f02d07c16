/*!
 * Tests for provider implementations
 */

use potrans::errors::ProviderError;
use potrans::providers::TranslationProvider;
use potrans::providers::mock::MockProvider;
use potrans::providers::openai::OpenAiClient;

/// Test the mock behaves per mode and counts calls
#[tokio::test]
async fn test_mockProvider_modes_shouldBehaveAsConfigured() {
    let working = MockProvider::working();
    assert_eq!(working.translate("Hi", "es").await.unwrap(), "[es] Hi");

    let canned = MockProvider::canned("Hola");
    assert_eq!(canned.translate("anything", "es").await.unwrap(), "Hola");

    let empty = MockProvider::empty();
    assert!(empty.translate("Hi", "es").await.unwrap().is_empty());

    let failing = MockProvider::failing();
    assert!(failing.translate("Hi", "es").await.is_err());
    assert_eq!(failing.call_count(), 1);
}

/// Test a failing mock reports an API error with a status code
#[tokio::test]
async fn test_mockProvider_failure_shouldCarryStatusCode() {
    let provider = MockProvider::failing();

    match provider.translate("Hi", "es").await {
        Err(ProviderError::ApiError { status_code, .. }) => assert_eq!(status_code, 500),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

/// Test client construction enforces a credential up front
#[test]
fn test_openAiClient_withEmptyApiKey_shouldFailToConstruct() {
    assert!(matches!(
        OpenAiClient::new("", "gpt-3.5-turbo"),
        Err(ProviderError::AuthenticationError(_))
    ));
}

/// Test client construction accepts a custom endpoint
#[test]
fn test_openAiClient_withCustomEndpoint_shouldConstruct() {
    let client = OpenAiClient::with_endpoint("sk-test", "local-model", "http://localhost:1234/v1/chat/completions");
    assert!(client.is_ok());
}

/// Test provider errors render human-readable causes
#[test]
fn test_providerError_display_shouldIncludeCause() {
    let err = ProviderError::ApiError {
        status_code: 429,
        message: "rate limited".to_string(),
    };
    let rendered = err.to_string();
    assert!(rendered.contains("429"));
    assert!(rendered.contains("rate limited"));

    let parse = ProviderError::ParseError("no choices".to_string());
    assert!(parse.to_string().contains("no choices"));
}
