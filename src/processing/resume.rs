//! Parsed resume structures and the persistence-facing record

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Structured fields derived from one extracted resume text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    /// Full extracted plain text, immutable once produced.
    pub raw_text: String,
    /// Email-shaped substrings in document order; no validation beyond the
    /// pattern.
    pub emails: Vec<String>,
    /// Phone-shaped substrings in document order, returned exactly as
    /// matched; no deduplication or normalization.
    pub phones: Vec<String>,
    /// Best-effort candidate name; empty when no heuristic succeeded.
    pub name: String,
    /// Vocabulary terms found in the text, vocabulary order, deduplicated.
    pub skills: Vec<String>,
    /// First five lines of the text joined with spaces. A preview, not a
    /// semantic summary.
    pub summary: String,
}

/// The record handed to the persistence collaborator after an upload is
/// parsed. Identity and lifecycle belong to that collaborator, not to us.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub file_name: String,
    pub parsed: ParsedResume,
    /// Flat duplicate of `parsed.skills`, kept at the top level for
    /// storage and query convenience.
    pub skills: Vec<String>,
    pub ats_score: u8,
    pub created_at: DateTime<Utc>,
}

impl ResumeRecord {
    pub fn new(file_name: String, parsed: ParsedResume) -> Self {
        let skills = parsed.skills.clone();
        Self {
            file_name,
            parsed,
            skills,
            ats_score: placeholder_ats_score(),
            created_at: Utc::now(),
        }
    }
}

/// STUB: a uniform pseudo-random score in [60, 100).
///
/// The ATS score field is a placeholder pending a real compatibility
/// metric. It is never derived from resume content; do not read meaning
/// into it.
pub fn placeholder_ats_score() -> u8 {
    rand::thread_rng().gen_range(60..100)
}
