use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use log::error;

use crate::errors::ProviderError;
use crate::language_utils;
use crate::providers::TranslationProvider;

/// Default chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// OpenAI client for interacting with the chat-completions API
#[derive(Debug)]
pub struct OpenAiClient {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Model name to use for translation
    model: String,
    /// API endpoint URL
    endpoint: String,
}

/// Chat completion request
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<ChatMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Chat message format
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// The completion choices
    pub choices: Vec<ChatChoice>,
}

/// Individual completion choice
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChatMessage,
}

impl ChatRequest {
    /// Create a new chat request for the given model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl OpenAiClient {
    /// Create a new client against the default public endpoint
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_endpoint(api_key, model, DEFAULT_ENDPOINT)
    }

    /// Create a new client against a custom endpoint (OpenAI-compatible servers)
    pub fn with_endpoint(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "API key must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(OpenAiClient {
            client,
            api_key,
            model: model.into(),
            endpoint: endpoint.into(),
        })
    }

    /// Build the translation request for a phrase
    fn build_request(&self, text: &str, target_language: &str) -> ChatRequest {
        let language_name = language_utils::display_name(target_language);
        ChatRequest::new(&self.model)
            .add_message(
                "system",
                format!(
                    "Translate the following text into {}. Reply with the translation only, \
                     without quotes or commentary.",
                    language_name
                ),
            )
            .add_message("user", text)
    }
}

#[async_trait]
impl TranslationProvider for OpenAiClient {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError> {
        let request = self.build_request(text, target_language);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("OpenAI API error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ProviderError::ParseError("Response contained no completion choices".to_string())
            })
    }
}
