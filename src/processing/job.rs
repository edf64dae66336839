//! Job posting structure consumed by the match scorer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting as stored by the recruiter-facing collaborator. Only
/// `required_skills` participates in scoring; the remaining fields ride
/// along for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
