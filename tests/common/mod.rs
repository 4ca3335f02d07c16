/*!
 * Common test utilities shared across the potrans test suite
 */

use std::io::Cursor;

use potrans::catalog::LineCursor;
use potrans::processor::{CatalogProcessor, RunStats};
use potrans::providers::TranslationProvider;

/// Run the catalog pass over an in-memory input, returning the rewritten
/// output and the run statistics
pub async fn run_pass<P: TranslationProvider + ?Sized>(
    input: &str,
    provider: &P,
    target_language: &str,
) -> (String, RunStats) {
    let processor = CatalogProcessor::new(provider, target_language);
    run_with(&processor, input).await
}

/// Run a preconfigured processor over an in-memory input
pub async fn run_with<P: TranslationProvider + ?Sized>(
    processor: &CatalogProcessor<'_, P>,
    input: &str,
) -> (String, RunStats) {
    let mut cursor = LineCursor::new(Cursor::new(input.to_string()));
    let mut output: Vec<u8> = Vec::new();

    let stats = processor
        .process(&mut cursor, &mut output)
        .await
        .expect("in-memory pass should not fail");

    (String::from_utf8(output).expect("output should be UTF-8"), stats)
}

/// A minimal untranslated catalog with one single-line entry
pub fn single_entry_catalog() -> &'static str {
    "msgid \"Cat\"\nmsgstr \"\"\n\n"
}
