/*!
 * # potrans - AI-powered gettext catalog translation
 *
 * A Rust library for filling in the missing translations of a gettext
 * `.po` catalog file using an AI translation backend, while leaving every
 * untouched line byte-for-byte intact.
 *
 * ## Features
 *
 * - Single-pass, line-oriented catalog rewriting
 * - Recognizes single-line and multi-line `msgid` declarations
 * - Never overwrites entries that already carry a translation
 * - Acceptance heuristics against degenerate provider output
 *   (known-bad boilerplate, runaway length)
 * - Translation backend injected as a narrow trait, testable with mocks
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `catalog`: Line cursor, line classification and the catalog entry model
 * - `processor`: The scanner/resolver pass over one catalog file
 * - `heuristics`: Ordered acceptance checks for candidate translations
 * - `language_utils`: ISO language code utilities
 * - `providers`: Translation backend clients:
 *   - `providers::openai`: OpenAI chat-completions client
 *   - `providers::mock`: Deterministic provider for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod catalog;
pub mod errors;
pub mod heuristics;
pub mod language_utils;
pub mod processor;
pub mod providers;

// Re-export main types for easier usage
pub use app_config::Config;
pub use catalog::{CatalogEntry, LineCursor, LineShape};
pub use heuristics::{AcceptanceChecks, RejectReason};
pub use processor::{CatalogProcessor, RunStats};
pub use providers::TranslationProvider;
pub use errors::{AppError, ProviderError};
