//! Resume analysis and job matching module

pub mod analyzer;
pub mod job;
pub mod matcher;
pub mod resume;

pub use analyzer::ResumeAnalyzer;
pub use job::JobPosting;
pub use matcher::{calculate_job_match, find_top_job_matches, JobMatch, MatchResult};
pub use resume::{ParsedResume, ResumeRecord};
