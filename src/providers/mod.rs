/*!
 * Provider implementations for translation backends.
 *
 * This module contains the narrow contract the catalog processor consumes
 * (one text in, one translation out) plus the client implementations:
 * - OpenAI: chat-completions API integration
 * - Mock: deterministic provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation providers
///
/// One request per untranslated entry, no retry, no streaming. Model,
/// credential and endpoint are construction state of the implementing
/// client, so the processor only ever sees text in, translation out.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate a single phrase into the target language
    ///
    /// # Arguments
    /// * `text` - The source phrase to translate
    /// * `target_language` - ISO language code of the target language
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError>;
}

pub mod openai;
pub mod mock;
