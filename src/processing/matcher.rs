//! Skill-based match scoring between candidates and job postings

use crate::processing::job::JobPosting;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of scoring one candidate against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Percentage of required skills the candidate has, 0-100.
    pub score: u8,
    /// Required skills the candidate lacks, in the job's order and casing.
    pub missing_skills: Vec<String>,
}

/// A job posting paired with its match outcome, as returned by top-N
/// ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    #[serde(flatten)]
    pub job: JobPosting,
    pub score: u8,
    pub missing_skills: Vec<String>,
}

/// Score a candidate skill set against a job's required skills.
///
/// Comparison is always case-insensitive regardless of how either side is
/// stored. A job with no required skills is trivially satisfied by any
/// candidate and scores 100. Rounding is half-away-from-zero.
pub fn calculate_job_match(candidate_skills: &[String], required_skills: &[String]) -> MatchResult {
    if required_skills.is_empty() {
        return MatchResult {
            score: 100,
            missing_skills: Vec::new(),
        };
    }

    let candidate: HashSet<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();

    let missing_skills: Vec<String> = required_skills
        .iter()
        .filter(|skill| !candidate.contains(&skill.to_lowercase()))
        .cloned()
        .collect();

    let matched = required_skills.len() - missing_skills.len();
    let score = ((matched as f64 / required_skills.len() as f64) * 100.0).round() as u8;

    MatchResult {
        score,
        missing_skills,
    }
}

/// Rank jobs for a candidate and keep the best `limit` of them, sorted by
/// score descending. The sort is stable: jobs with equal scores keep their
/// input order.
pub fn find_top_job_matches(
    candidate_skills: &[String],
    jobs: &[JobPosting],
    limit: usize,
) -> Vec<JobMatch> {
    let mut matches: Vec<JobMatch> = jobs
        .iter()
        .map(|job| {
            let result = calculate_job_match(candidate_skills, &job.required_skills);
            JobMatch {
                job: job.clone(),
                score: result.score,
                missing_skills: result.missing_skills,
            }
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(limit);
    matches
}
