//! Resume matcher: parse resumes and rank job postings against them

use clap::Parser;
use log::{error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::{Config, OutputFormat};
use resume_matcher::error::{Result, ResumeMatcherError};
use resume_matcher::input::{InputManager, UploadedFile};
use resume_matcher::output::{ConsoleFormatter, JsonFormatter, OutputFormatter};
use resume_matcher::processing::{find_top_job_matches, JobPosting, ResumeAnalyzer, ResumeRecord};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            file,
            content_type,
            output,
            detailed,
        } => {
            let output_format = cli::parse_output_format(&output).map_err(ResumeMatcherError::InvalidInput)?;

            let record = analyze_file(&file, content_type, &config).await?;
            let formatter = make_formatter(&output_format, &config, detailed);
            println!("{}", formatter.format_record(&record)?);
        }

        Commands::Match {
            resume,
            jobs,
            limit,
            content_type,
            output,
        } => {
            let output_format = cli::parse_output_format(&output).map_err(ResumeMatcherError::InvalidInput)?;

            let record = analyze_file(&resume, content_type, &config).await?;
            let postings = load_jobs(&jobs).await?;
            info!("Ranking {} job postings", postings.len());

            let limit = limit.unwrap_or(config.matching.top_matches);
            let matches = find_top_job_matches(&record.skills, &postings, limit);

            let formatter = make_formatter(&output_format, &config, false);
            println!("{}", formatter.format_matches(&matches)?);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeMatcherError::Configuration(e.to_string()))?;
                println!("# {}", Config::config_path().display());
                println!("{}", content);
            }
            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
            }
            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}

/// Read a resume file into memory and run it through extraction and
/// analysis, the same flow an upload handler would drive.
async fn analyze_file(path: &PathBuf, content_type: Option<String>, config: &Config) -> Result<ResumeRecord> {
    if !path.exists() {
        return Err(ResumeMatcherError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    let data = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string());
    let content_type = content_type.unwrap_or_else(|| cli::guess_content_type(path).to_string());

    info!("Processing resume: {}", path.display());
    let upload = UploadedFile::new(data, file_name.clone(), content_type);
    let text = InputManager::new().extract_text(&upload)?;

    let analyzer = ResumeAnalyzer::new(&config.vocabulary.skills)?;
    let parsed = analyzer.analyze(&text);

    Ok(ResumeRecord::new(
        file_name.unwrap_or_else(|| "resume".to_string()),
        parsed,
    ))
}

async fn load_jobs(path: &PathBuf) -> Result<Vec<JobPosting>> {
    let content = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&content).map_err(|e| {
        ResumeMatcherError::InvalidInput(format!("Failed to parse jobs file {}: {}", path.display(), e))
    })
}

fn make_formatter(format: &OutputFormat, config: &Config, detailed: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(config.output.color_output, detailed)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
