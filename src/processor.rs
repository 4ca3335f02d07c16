/*!
 * Single-pass catalog processor.
 *
 * Consumes the input catalog one line at a time, recognizes single-line and
 * multi-line source declarations, fills in missing translations through an
 * injected provider and writes every line forward to the output exactly
 * once. Entries that already carry a translation are echoed untouched, as
 * is every line outside the recognized entry shapes.
 *
 * The pass is strictly sequential: one provider call at a time, no retry,
 * no backtracking. A failed or rejected translation degrades to an empty
 * `msgstr ""` for that entry and the pass continues.
 */

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Result, Context};
use log::{debug, warn};

use crate::catalog::{CatalogEntry, LineCursor, LineShape, classify};
use crate::heuristics::{AcceptanceChecks, RejectReason};
use crate::providers::TranslationProvider;

/// Counters reported after a pass completes
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunStats {
    /// Entries translated and rewritten
    pub translated: usize,
    /// Entries whose candidate translation was dropped for excessive length
    pub skipped_length: usize,
    /// Entries skipped because a translation was already present
    pub already_translated: usize,
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Translated entries: {}", self.translated)?;
        writeln!(f, "Skipped for length: {}", self.skipped_length)?;
        write!(f, "Already translated: {}", self.already_translated)
    }
}

// @writes: One line plus newline to the forward output stream
fn write_line<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{}", line).context("Failed to write to output file")
}

/// The catalog pass: scanner, resolver and rewriter over one input file.
///
/// The provider is injected as a capability so the whole pass can run
/// against deterministic stubs; see `providers::mock`.
pub struct CatalogProcessor<'a, P: TranslationProvider + ?Sized> {
    /// Translation collaborator, called once per entry needing translation
    provider: &'a P,
    /// Target language code handed to the provider
    target_language: String,
    /// Ordered acceptance checks applied to every candidate
    checks: AcceptanceChecks,
}

impl<'a, P: TranslationProvider + ?Sized> CatalogProcessor<'a, P> {
    /// Create a processor with the default acceptance checks
    pub fn new(provider: &'a P, target_language: impl Into<String>) -> Self {
        CatalogProcessor {
            provider,
            target_language: target_language.into(),
            checks: AcceptanceChecks::with_defaults(),
        }
    }

    /// Replace the acceptance checks
    pub fn with_checks(mut self, checks: AcceptanceChecks) -> Self {
        self.checks = checks;
        self
    }

    /// Run the pass over an input file, writing the result to a fresh output file
    ///
    /// Both handles live exactly as long as the pass; the writer is flushed
    /// before returning and released on every exit path.
    pub async fn process_file(&self, input_path: &Path, output_path: &Path) -> Result<RunStats> {
        let input = File::open(input_path)
            .with_context(|| format!("Failed to open input file: {}", input_path.display()))?;
        let output = File::create(output_path)
            .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;

        let mut cursor = LineCursor::new(BufReader::new(input));
        let mut writer = BufWriter::new(output);

        let stats = self.process(&mut cursor, &mut writer).await?;
        writer.flush().context("Failed to flush output file")?;
        Ok(stats)
    }

    /// Run the pass over any line source and output sink
    pub async fn process<R: BufRead, W: Write>(
        &self,
        cursor: &mut LineCursor<R>,
        out: &mut W,
    ) -> Result<RunStats> {
        let mut stats = RunStats::default();

        while let Some(line) = cursor.next_line()? {
            match classify(&line) {
                LineShape::SourceMultilineOpen => {
                    self.handle_multiline_entry(line, cursor, out, &mut stats).await?;
                }
                LineShape::SourceSingle(source) => {
                    self.handle_single_entry(source, line, cursor, out, &mut stats).await?;
                }
                // Everything else passes through verbatim
                _ => write_line(out, &line)?,
            }
        }

        Ok(stats)
    }

    // @handles: `msgid "text"` declaration and the line that follows it
    async fn handle_single_entry<R: BufRead, W: Write>(
        &self,
        source: String,
        raw_line: String,
        cursor: &mut LineCursor<R>,
        out: &mut W,
        stats: &mut RunStats,
    ) -> Result<()> {
        write_line(out, &raw_line)?;

        // Declaration at end of input: nothing left to resolve
        let Some(next) = cursor.next_line()? else {
            return Ok(());
        };

        match classify(&next) {
            LineShape::TranslationEmpty => {
                let entry = CatalogEntry::single(source, raw_line);
                self.translate_and_write(&entry, cursor, out, stats).await?;
            }
            LineShape::TranslationFilled(existing) => {
                debug!(
                    "Entry '{}' already translated, keeping '{}'",
                    source, existing
                );
                write_line(out, &next)?;
                stats.already_translated += 1;
            }
            _ => {
                // Structural anomaly: a source declaration not followed by
                // any msgstr-shaped line. Tolerated; both lines were echoed.
                debug!("No msgstr after msgid '{}', leaving entry untouched", source);
                write_line(out, &next)?;
            }
        }

        Ok(())
    }

    // @handles: `msgid ""` opener plus its continuation lines
    async fn handle_multiline_entry<R: BufRead, W: Write>(
        &self,
        opener: String,
        cursor: &mut LineCursor<R>,
        out: &mut W,
        stats: &mut RunStats,
    ) -> Result<()> {
        let mut raw_lines = vec![opener];
        let mut source = String::new();

        loop {
            let Some(next) = cursor.next_line()? else {
                // Input ended mid-declaration: flush the buffered lines so
                // nothing the scanner consumed is lost
                for line in &raw_lines {
                    write_line(out, line)?;
                }
                return Ok(());
            };

            match classify(&next) {
                LineShape::Continuation(fragment) => {
                    source.push_str(&fragment);
                    raw_lines.push(next);
                }
                LineShape::TranslationEmpty => {
                    for line in &raw_lines {
                        write_line(out, line)?;
                    }
                    let entry = CatalogEntry::multiline(source, raw_lines);
                    self.translate_and_write(&entry, cursor, out, stats).await?;
                    return Ok(());
                }
                LineShape::TranslationFilled(existing) => {
                    debug!(
                        "Multi-line entry '{}' already translated, keeping '{}'",
                        source, existing
                    );
                    for line in &raw_lines {
                        write_line(out, line)?;
                    }
                    write_line(out, &next)?;
                    stats.already_translated += 1;
                    return Ok(());
                }
                _ => {
                    // Neither a continuation nor a msgstr shape. Flush the
                    // buffered declaration verbatim and resume scanning.
                    for line in &raw_lines {
                        write_line(out, line)?;
                    }
                    write_line(out, &next)?;
                    return Ok(());
                }
            }
        }
    }

    // @resolves: One entry needing translation; writes its msgstr line and
    // echoes the conventional separator line that follows, if any
    async fn translate_and_write<R: BufRead, W: Write>(
        &self,
        entry: &CatalogEntry,
        cursor: &mut LineCursor<R>,
        out: &mut W,
        stats: &mut RunStats,
    ) -> Result<()> {
        let translation = self.resolve_translation(entry, stats).await;
        write_line(out, &format!("msgstr \"{}\"", translation))?;

        if let Some(separator) = cursor.next_line()? {
            write_line(out, &separator)?;
        }
        Ok(())
    }

    /// Produce the msgstr content for an entry, or the empty string when the
    /// entry cannot be translated. Provider failures and rejected candidates
    /// are never fatal to the pass.
    async fn resolve_translation(&self, entry: &CatalogEntry, stats: &mut RunStats) -> String {
        let source = entry.source_text.as_str();

        if entry.is_blank_source() {
            return String::new();
        }

        let candidate = match self.provider.translate(source, &self.target_language).await {
            Ok(candidate) => candidate,
            Err(e) => {
                warn!("Translation of '{}' failed: {}", source, e);
                return String::new();
            }
        };

        match self.checks.evaluate(source, &candidate) {
            Some(RejectReason::KnownBadOutput { matched }) => {
                warn!(
                    "Dropping known-bad translation of '{}': '{}'",
                    source, matched
                );
                String::new()
            }
            Some(RejectReason::ExcessiveLength { candidate_len, limit }) => {
                warn!(
                    "Dropping oversized translation of '{}' ({} chars, limit {})",
                    source, candidate_len, limit
                );
                stats.skipped_length += 1;
                String::new()
            }
            None => {
                stats.translated += 1;
                candidate
            }
        }
    }
}
