/*!
 * Language utilities for ISO language code handling.
 *
 * Catalog tools see target languages as locale-style codes ("zh-CN",
 * "pt_BR") or bare ISO 639 codes ("es", "deu"). These helpers resolve
 * whatever form the user passed into an `isolang::Language` where
 * possible, without rejecting codes the library does not know, since
 * catalog headers in the wild carry plenty of private-use codes.
 */

use isolang::Language;

/// Resolve a language code (optionally with a region suffix) to a known language
pub fn lookup(code: &str) -> Option<Language> {
    let normalized = code.trim().to_lowercase();

    // Strip a region suffix: "zh-CN" / "pt_BR" -> "zh" / "pt"
    let base = normalized
        .split(['-', '_'])
        .next()
        .unwrap_or(normalized.as_str());

    match base.len() {
        2 => Language::from_639_1(base),
        3 => Language::from_639_3(base),
        _ => None,
    }
}

/// Whether the code resolves to a language isolang knows about
pub fn is_known_language_code(code: &str) -> bool {
    lookup(code).is_some()
}

/// Human-readable English name for a language code, for use in prompts
///
/// Falls back to the code itself when the language is not recognized, so
/// the prompt stays meaningful either way.
pub fn display_name(code: &str) -> String {
    match lookup(code) {
        Some(language) => language.to_name().to_string(),
        None => code.trim().to_string(),
    }
}
