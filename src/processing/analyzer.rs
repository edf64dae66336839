//! Resume field extraction and skill detection

use crate::error::{Result, ResumeMatcherError};
use crate::processing::resume::ParsedResume;
use aho_corasick::AhoCorasick;
use regex::Regex;

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";
const PHONE_PATTERN: &str = r"(\+?\d{1,3}[-.\s]?)?(\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4})";
const NAME_LABEL_PATTERN: &str = r"(?i)name\s*[:\-]\s*(.+)";
const PROPER_CASE_PATTERN: &str = r"^[A-Z][A-Za-z]*(?:\s+[A-Z][A-Za-z]*){1,3}$";
const SECTION_HEADER_PATTERN: &str =
    r"(?i)summary|experience|education|skills|projects|certifications|profile|objective";

/// Derives structured fields from extracted resume text. Analysis never
/// fails: fields degrade to empty values when nothing matches.
pub struct ResumeAnalyzer {
    email_re: Regex,
    phone_re: Regex,
    name_label_re: Regex,
    proper_case_re: Regex,
    section_header_re: Regex,
    vocabulary: Vec<String>,
    skill_scanner: AhoCorasick,
}

impl ResumeAnalyzer {
    /// Build an analyzer over a skill vocabulary. Entries are lowercased and
    /// deduplicated; detection order follows vocabulary order.
    pub fn new(vocabulary: &[String]) -> Result<Self> {
        let mut normalized: Vec<String> = Vec::with_capacity(vocabulary.len());
        for term in vocabulary {
            let term = term.to_lowercase();
            if !term.is_empty() && !normalized.contains(&term) {
                normalized.push(term);
            }
        }

        let skill_scanner = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&normalized)
            .map_err(|e| ResumeMatcherError::Processing(format!("Failed to build skill scanner: {}", e)))?;

        Ok(Self {
            email_re: compile(EMAIL_PATTERN)?,
            phone_re: compile(PHONE_PATTERN)?,
            name_label_re: compile(NAME_LABEL_PATTERN)?,
            proper_case_re: compile(PROPER_CASE_PATTERN)?,
            section_header_re: compile(SECTION_HEADER_PATTERN)?,
            vocabulary: normalized,
            skill_scanner,
        })
    }

    pub fn analyze(&self, raw_text: &str) -> ParsedResume {
        let emails = self.extract_emails(raw_text);
        let phones = self.extract_phones(raw_text);
        let name = self.infer_name(raw_text, &emails);
        let skills = self.detect_skills(raw_text);
        let summary = summarize(raw_text);

        ParsedResume {
            raw_text: raw_text.to_string(),
            emails,
            phones,
            name,
            skills,
            summary,
        }
    }

    fn extract_emails(&self, text: &str) -> Vec<String> {
        self.email_re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn extract_phones(&self, text: &str) -> Vec<String> {
        self.phone_re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Best-effort name inference, first success wins:
    /// an explicit `Name:` label, then the first proper-case line that is
    /// not contact info or a section header, then the first email's
    /// local-part title-cased. Failing all three, empty.
    fn infer_name(&self, text: &str, emails: &[String]) -> String {
        if let Some(captures) = self.name_label_re.captures(text) {
            return captures[1].trim().to_string();
        }

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty()
                || self.email_re.is_match(line)
                || self.phone_re.is_match(line)
                || self.section_header_re.is_match(line)
            {
                continue;
            }
            if self.proper_case_re.is_match(line) {
                return line.to_string();
            }
        }

        if let Some(email) = emails.first() {
            let local_part = email.split('@').next().unwrap_or_default();
            let name = local_part
                .split(['.', '_', '-'])
                .filter(|token| !token.is_empty())
                .map(title_case)
                .collect::<Vec<_>>()
                .join(" ");
            if !name.is_empty() {
                return name;
            }
        }

        String::new()
    }

    /// Vocabulary-membership scan: a term is reported whenever it appears in
    /// the text as a case-insensitive substring. Overlapping terms both
    /// fire, so "java" is reported for any text mentioning "javascript".
    /// This is a documented imprecision, not a classifier.
    fn detect_skills(&self, text: &str) -> Vec<String> {
        let mut found = vec![false; self.vocabulary.len()];
        for m in self.skill_scanner.find_overlapping_iter(text) {
            found[m.pattern().as_usize()] = true;
        }

        self.vocabulary
            .iter()
            .zip(found)
            .filter(|(_, hit)| *hit)
            .map(|(term, _)| term.clone())
            .collect()
    }
}

/// First five lines joined with single spaces; a preview, not a summary.
fn summarize(text: &str) -> String {
    text.lines().take(5).collect::<Vec<_>>().join(" ")
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ResumeMatcherError::Processing(format!("Invalid pattern: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> ResumeAnalyzer {
        let vocabulary: Vec<String> = [
            "python",
            "javascript",
            "react",
            "node",
            "aws",
            "docker",
            "typescript",
            "java",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        ResumeAnalyzer::new(&vocabulary).unwrap()
    }

    #[test]
    fn test_extracts_emails_in_document_order() {
        let parsed = analyzer().analyze("first@example.com then later second@test.org");
        assert_eq!(parsed.emails, vec!["first@example.com", "second@test.org"]);
    }

    #[test]
    fn test_extracts_phone_variants() {
        let text = "Call (555) 123-4567 or +1 555.987.6543";
        let parsed = analyzer().analyze(text);
        assert_eq!(parsed.phones.len(), 2);
        assert_eq!(parsed.phones[0], "(555) 123-4567");
    }

    #[test]
    fn test_phones_are_not_deduplicated() {
        let parsed = analyzer().analyze("555-123-4567 and again 555-123-4567");
        assert_eq!(parsed.phones.len(), 2);
    }

    #[test]
    fn test_name_from_explicit_label() {
        let parsed = analyzer().analyze("Name: Jane Q. Doe\njane@example.com");
        assert_eq!(parsed.name, "Jane Q. Doe");
    }

    #[test]
    fn test_name_from_proper_case_line() {
        let text = "Seattle, WA\nJane Doe\nSenior backend developer";
        assert_eq!(analyzer().analyze(text).name, "Jane Doe");
    }

    #[test]
    fn test_name_scan_skips_contact_and_header_lines() {
        let text = "jane.roe@example.com\nProfessional Experience\nJohn Smith";
        assert_eq!(analyzer().analyze(text).name, "John Smith");
    }

    #[test]
    fn test_name_falls_back_to_email_local_part() {
        let text = "reach me at jane.doe@example.com for details";
        assert_eq!(analyzer().analyze(text).name, "Jane Doe");
    }

    #[test]
    fn test_name_empty_when_nothing_matches() {
        assert_eq!(analyzer().analyze("12345\n!!!\n").name, "");
    }

    #[test]
    fn test_detects_skills_in_vocabulary_order() {
        let text = "Docker and AWS, plus some Python.";
        assert_eq!(analyzer().analyze(text).skills, vec!["python", "aws", "docker"]);
    }

    #[test]
    fn test_java_matches_inside_javascript() {
        let parsed = analyzer().analyze("Senior JavaScript engineer");
        assert_eq!(parsed.skills, vec!["javascript", "java"]);
    }

    #[test]
    fn test_skill_detection_is_idempotent() {
        let a = analyzer();
        let text = "TypeScript, React and Node on AWS";
        assert_eq!(a.analyze(text).skills, a.analyze(text).skills);
    }

    #[test]
    fn test_summary_takes_first_five_lines() {
        let text = "one\ntwo\nthree\nfour\nfive\nsix";
        assert_eq!(analyzer().analyze(text).summary, "one two three four five");
    }

    #[test]
    fn test_summary_of_short_document() {
        assert_eq!(analyzer().analyze("only line").summary, "only line");
    }

    #[test]
    fn test_empty_text_degrades_to_empty_fields() {
        let parsed = analyzer().analyze("");
        assert!(parsed.emails.is_empty());
        assert!(parsed.phones.is_empty());
        assert!(parsed.name.is_empty());
        assert!(parsed.skills.is_empty());
        assert!(parsed.summary.is_empty());
    }
}
