//! CLI interface for the resume matcher

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Resume parsing and job matching toolkit")]
#[command(
    long_about = "Extract contact details and skills from resumes (PDF, DOCX, plain text), then score candidates against job postings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume file and show the extracted record
    Analyze {
        /// Path to the resume file (PDF, DOCX, TXT)
        file: PathBuf,

        /// Declared content type; guessed from the extension when omitted
        #[arg(short = 't', long)]
        content_type: Option<String>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Include the summary and text statistics
        #[arg(short, long)]
        detailed: bool,
    },

    /// Rank job postings against a resume
    Match {
        /// Path to the resume file (PDF, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a JSON file holding an array of job postings
        #[arg(short, long)]
        jobs: PathBuf,

        /// Maximum number of matches to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Declared content type for the resume file
        #[arg(short = 't', long)]
        content_type: Option<String>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Guess a declared content type from the file extension, for callers that
/// did not supply one.
pub fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()).map(|e| e.to_lowercase()) {
        Some(ext) if ext == "pdf" => "application/pdf",
        Some(ext) if ext == "docx" => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "text/plain",
    }
}
