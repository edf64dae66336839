//! Output formatters for analysis and match results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::matcher::JobMatch;
use crate::processing::resume::ResumeRecord;
use colored::Colorize;

/// Renders a parsed resume record and a set of job matches for one output
/// medium.
pub trait OutputFormatter {
    fn format_record(&self, record: &ResumeRecord) -> Result<String>;
    fn format_matches(&self, matches: &[JobMatch]) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn list_or_dash(values: &[String]) -> String {
        if values.is_empty() {
            "-".to_string()
        } else {
            values.join(", ")
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_record(&self, record: &ResumeRecord) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("{}\n", self.heading("📄 Resume Analysis")));
        out.push_str(&format!("  File: {}\n", record.file_name));
        out.push_str(&format!(
            "  Name: {}\n",
            if record.parsed.name.is_empty() { "-" } else { record.parsed.name.as_str() }
        ));
        out.push_str(&format!("  Emails: {}\n", Self::list_or_dash(&record.parsed.emails)));
        out.push_str(&format!("  Phones: {}\n", Self::list_or_dash(&record.parsed.phones)));
        out.push_str(&format!("  Skills: {}\n", Self::list_or_dash(&record.skills)));
        out.push_str(&format!("  ATS Score (placeholder): {}\n", record.ats_score));

        if self.detailed {
            out.push_str(&format!("\n{}\n", self.heading("Summary")));
            out.push_str(&format!("  {}\n", record.parsed.summary));
            out.push_str(&format!(
                "\n  Extracted text: {} characters\n",
                record.parsed.raw_text.len()
            ));
        }

        Ok(out)
    }

    fn format_matches(&self, matches: &[JobMatch]) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.heading("🎯 Top Job Matches")));

        if matches.is_empty() {
            out.push_str("  No jobs to match against.\n");
            return Ok(out);
        }

        for (i, m) in matches.iter().enumerate() {
            let score = format!("{}%", m.score);
            let score = if !self.use_colors {
                score
            } else if m.score >= 70 {
                score.green().to_string()
            } else if m.score >= 40 {
                score.yellow().to_string()
            } else {
                score.red().to_string()
            };

            out.push_str(&format!(
                "  {}. {} at {} — {}\n",
                i + 1,
                m.job.title,
                if m.job.company.is_empty() { "-" } else { m.job.company.as_str() },
                score
            ));
            if !m.missing_skills.is_empty() {
                out.push_str(&format!("     Missing: {}\n", m.missing_skills.join(", ")));
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn serialize<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, record: &ResumeRecord) -> Result<String> {
        self.serialize(record)
    }

    fn format_matches(&self, matches: &[JobMatch]) -> Result<String> {
        self.serialize(&matches)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::job::JobPosting;
    use crate::processing::resume::ParsedResume;

    fn record() -> ResumeRecord {
        ResumeRecord::new(
            "resume.txt".to_string(),
            ParsedResume {
                raw_text: "Jane Doe".to_string(),
                emails: vec!["jane@example.com".to_string()],
                phones: vec![],
                name: "Jane Doe".to_string(),
                skills: vec!["python".to_string()],
                summary: "Jane Doe".to_string(),
            },
        )
    }

    #[test]
    fn test_console_record_lists_fields() {
        let out = ConsoleFormatter::new(false, false).format_record(&record()).unwrap();
        assert!(out.contains("Jane Doe"));
        assert!(out.contains("jane@example.com"));
        assert!(out.contains("python"));
        assert!(out.contains("placeholder"));
    }

    #[test]
    fn test_json_record_round_trips() {
        let out = JsonFormatter::new(true).format_record(&record()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["parsed"]["name"], "Jane Doe");
        assert_eq!(parsed["skills"][0], "python");
    }

    #[test]
    fn test_console_matches_show_missing_skills() {
        let matches = vec![JobMatch {
            job: JobPosting {
                title: "Backend Engineer".to_string(),
                company: "Acme".to_string(),
                description: String::new(),
                required_skills: vec!["python".to_string(), "docker".to_string()],
                location: String::new(),
                created_at: None,
            },
            score: 50,
            missing_skills: vec!["docker".to_string()],
        }];
        let out = ConsoleFormatter::new(false, false).format_matches(&matches).unwrap();
        assert!(out.contains("Backend Engineer"));
        assert!(out.contains("50%"));
        assert!(out.contains("Missing: docker"));
    }
}
