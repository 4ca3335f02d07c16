/*!
 * Acceptance heuristics for candidate translations.
 *
 * A candidate coming back from a provider is run through an ordered list of
 * pure checks over `(source, candidate)`:
 * - Known-bad-output check: the trimmed candidate exactly matches one of a
 *   configured set of strings the providers are known to emit instead of a
 *   translation (empty output, refusal boilerplate).
 * - Length-ratio check: the candidate is more than four times as long as
 *   the source, which in practice means a runaway or degenerate response.
 *
 * The first check that fires wins; a candidate that passes every check is
 * accepted as-is.
 */

use std::collections::HashSet;
use log::debug;

/// Default maximum candidate/source length ratio
pub const DEFAULT_MAX_LENGTH_RATIO: usize = 4;

/// Why a candidate translation was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// The trimmed candidate matched a known-bad output
    KnownBadOutput {
        /// The matched string (trimmed candidate)
        matched: String,
    },
    /// The candidate exceeded the allowed length ratio
    ExcessiveLength {
        /// Candidate length in characters
        candidate_len: usize,
        /// Maximum allowed length in characters
        limit: usize,
    },
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::KnownBadOutput { matched } => {
                write!(f, "known-bad provider output: '{}'", matched)
            }
            RejectReason::ExcessiveLength { candidate_len, limit } => {
                write!(
                    f,
                    "candidate too long: {} chars > limit of {}",
                    candidate_len, limit
                )
            }
        }
    }
}

/// A single pure acceptance check
pub type Check = Box<dyn Fn(&str, &str) -> Option<RejectReason> + Send + Sync>;

/// Build the known-bad-output check over a configured string set
pub fn known_bad_check(known_bad: HashSet<String>) -> Check {
    Box::new(move |_source: &str, candidate: &str| {
        let trimmed = candidate.trim();
        if known_bad.contains(trimmed) {
            Some(RejectReason::KnownBadOutput {
                matched: trimmed.to_string(),
            })
        } else {
            None
        }
    })
}

/// Build the length-ratio check for a maximum candidate/source ratio
pub fn length_ratio_check(max_ratio: usize) -> Check {
    Box::new(move |source: &str, candidate: &str| {
        let limit = max_ratio * source.chars().count();
        let candidate_len = candidate.chars().count();
        if candidate_len > limit {
            Some(RejectReason::ExcessiveLength { candidate_len, limit })
        } else {
            None
        }
    })
}

/// Strings providers are known to return instead of a translation
pub fn default_known_bad_outputs() -> HashSet<String> {
    [
        "",
        " ",
        "Translation failed",
        "I'm sorry, but I can't translate that.",
        "As an AI language model, I cannot provide a translation.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Ordered list of acceptance checks applied to every candidate
pub struct AcceptanceChecks {
    checks: Vec<Check>,
}

impl AcceptanceChecks {
    /// Build the standard check order: known-bad set first, length ratio second
    pub fn new(known_bad: HashSet<String>, max_ratio: usize) -> Self {
        AcceptanceChecks {
            checks: vec![known_bad_check(known_bad), length_ratio_check(max_ratio)],
        }
    }

    /// Standard checks with the default known-bad set and 4x length ratio
    pub fn with_defaults() -> Self {
        Self::new(default_known_bad_outputs(), DEFAULT_MAX_LENGTH_RATIO)
    }

    /// Run the checks in order; the first rejection wins
    pub fn evaluate(&self, source: &str, candidate: &str) -> Option<RejectReason> {
        for check in &self.checks {
            if let Some(reason) = check(source, candidate) {
                debug!("Rejected candidate for '{}': {}", source, reason);
                return Some(reason);
            }
        }
        None
    }
}

impl Default for AcceptanceChecks {
    fn default() -> Self {
        Self::with_defaults()
    }
}
