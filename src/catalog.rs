use std::io::BufRead;
use anyhow::{Result, Context};
use once_cell::sync::Lazy;
use regex::Regex;

// @module: Catalog line recognition and entry model

// @const: msgid content capture
static MSGID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"msgid "(.*?)""#).unwrap()
});

// @const: msgstr content capture
static MSGSTR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"msgstr "(.*?)""#).unwrap()
});

/// Prefix that opens a multi-line source declaration
const MULTILINE_SOURCE_PREFIX: &str = "msgid \"\"";

/// Prefix of any source declaration
const SOURCE_PREFIX: &str = "msgid \"";

/// Prefix of an empty translation declaration
const EMPTY_TRANSLATION_PREFIX: &str = "msgstr \"\"";

/// Prefix of any translation declaration
const TRANSLATION_PREFIX: &str = "msgstr \"";

/// The shape of a single catalog line.
///
/// Classification is prefix-first: `msgid ""` wins over the single-line
/// source pattern, `msgstr ""` wins over the populated translation pattern.
/// Lines that carry a recognized prefix but no closing quote fall through
/// to `Other` and are passed through verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum LineShape {
    /// `msgid "text"` with the captured interior
    SourceSingle(String),
    /// `msgid ""`, opening a multi-line source declaration
    SourceMultilineOpen,
    /// `msgstr ""`, an entry still waiting for its translation
    TranslationEmpty,
    /// `msgstr "text"` with the captured interior
    TranslationFilled(String),
    /// `"fragment"`, a quoted continuation with the unquoted interior
    Continuation(String),
    /// Anything else; always echoed verbatim
    Other,
}

// @classifies: One raw line into its catalog shape
pub fn classify(line: &str) -> LineShape {
    if line.starts_with(MULTILINE_SOURCE_PREFIX) {
        return LineShape::SourceMultilineOpen;
    }
    if line.starts_with(SOURCE_PREFIX) {
        if let Some(caps) = MSGID_REGEX.captures(line) {
            if let Some(content) = caps.get(1) {
                return LineShape::SourceSingle(content.as_str().to_string());
            }
        }
        return LineShape::Other;
    }
    if line.starts_with(EMPTY_TRANSLATION_PREFIX) {
        return LineShape::TranslationEmpty;
    }
    if line.starts_with(TRANSLATION_PREFIX) {
        let content = MSGSTR_REGEX
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        return LineShape::TranslationFilled(content);
    }
    if line.len() >= 2 && line.starts_with('"') && line.ends_with('"') {
        return LineShape::Continuation(line[1..line.len() - 1].to_string());
    }
    LineShape::Other
}

/// A single unit of translation work, handed from the scanner to the
/// resolver and discarded immediately afterwards.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Decoded source phrase (continuation fragments concatenated)
    pub source_text: String,

    /// Exact original lines forming the source declaration, in order
    pub raw_source_lines: Vec<String>,

    /// Present when the entry already carries a non-empty translation;
    /// such an entry must never be overwritten
    pub existing_translation: Option<String>,

    /// Whether the source declaration spanned continuation lines
    pub is_multiline: bool,
}

impl CatalogEntry {
    /// Create an entry from a single-line source declaration
    pub fn single(source_text: String, raw_line: String) -> Self {
        CatalogEntry {
            source_text,
            raw_source_lines: vec![raw_line],
            existing_translation: None,
            is_multiline: false,
        }
    }

    /// Create an entry from an accumulated multi-line source declaration
    pub fn multiline(source_text: String, raw_lines: Vec<String>) -> Self {
        CatalogEntry {
            source_text,
            raw_source_lines: raw_lines,
            existing_translation: None,
            is_multiline: true,
        }
    }

    /// Mark the entry as already translated
    pub fn with_existing_translation(mut self, translation: String) -> Self {
        self.existing_translation = Some(translation);
        self
    }

    // @checks: Whether the source phrase is blank after trimming
    pub fn is_blank_source(&self) -> bool {
        self.source_text.trim().is_empty()
    }
}

/// Forward-only line source over the input catalog.
///
/// Exactly one pass, no backtracking: once a line is pulled it is never
/// revisited. Both the scanner and the resolver pull from the same cursor
/// (the resolver consumes the conventional blank separator line after a
/// rewritten translation), so ownership of "what line comes next" always
/// sits with the borrower of the moment. Any `BufRead` works, which lets
/// tests feed in-memory catalogs through `std::io::Cursor`.
pub struct LineCursor<R: BufRead> {
    lines: std::io::Lines<R>,
    line_number: usize,
}

impl<R: BufRead> LineCursor<R> {
    /// Create a cursor over a buffered reader
    pub fn new(reader: R) -> Self {
        LineCursor {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Pull the next raw line, or `None` at end of input
    pub fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            Some(line) => {
                self.line_number += 1;
                let line = line.with_context(|| {
                    format!("Failed to read input line {}", self.line_number)
                })?;
                Ok(Some(line))
            }
            None => Ok(None),
        }
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
