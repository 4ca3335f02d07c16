/*!
 * Mock provider implementation for testing.
 *
 * The mock simulates the behaviors the resolver has to cope with:
 * - `MockProvider::working()` - echoes a tagged translation
 * - `MockProvider::canned(text)` - always returns a fixed string
 * - `MockProvider::failing()` - always fails with an API error
 * - `MockProvider::empty()` - returns an empty string
 *
 * Every call is counted through a shared atomic, so tests can assert that
 * certain entries never reach the provider at all.
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Succeeds with "[<target>] <text>"
    Working,
    /// Succeeds with a fixed response regardless of input
    Canned(String),
    /// Always fails with an API error
    Failing,
    /// Succeeds with an empty string
    Empty,
}

/// Mock provider for testing resolver behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate calls made
    call_count: Arc<AtomicUsize>,
    /// Custom response generator (optional, overrides Working)
    custom_response: Option<fn(&str, &str) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that returns a fixed response
    pub fn canned(response: impl Into<String>) -> Self {
        Self::new(MockBehavior::Canned(response.into()))
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns empty responses
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Set a custom response generator over (text, target_language)
    pub fn with_custom_response(mut self, generator: fn(&str, &str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            call_count: Arc::clone(&self.call_count),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working => {
                if let Some(generator) = self.custom_response {
                    Ok(generator(text, target_language))
                } else {
                    Ok(format!("[{}] {}", target_language, text))
                }
            }

            MockBehavior::Canned(response) => Ok(response.clone()),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::Empty => Ok(String::new()),
        }
    }
}
