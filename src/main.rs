use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use burhan_scale::application::{PostFeedbackCommand, ScoreAnswersQuery, SubmitAssessmentCommand};
use burhan_scale::bootstrap::Services;
use burhan_scale::config::{AppConfig, ConfigError, ValidationError};
use burhan_scale::domain::assessment::ProjectInfo;
use burhan_scale::domain::feedback::FeedbackRole;
use burhan_scale::domain::foundation::{AssessmentId, DomainError};
use burhan_scale::domain::rubric::RubricEdit;
use burhan_scale::domain::scoring::{ImprovementPlan, PlanGroup, PositionalAnswers};
use burhan_scale::telemetry::{self, TelemetryError};

#[derive(Parser, Debug)]
#[command(
    name = "burhan-scale",
    about = "Score maturity self-assessments and manage the rubric and history",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a positional answers file against the live rubric without saving it
    Score { answers: PathBuf },
    /// Submit a completed assessment (`{ "projectInfo": {...}, "answers": {...} }`)
    Submit { file: PathBuf },
    /// Browse or prune the assessment history
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// Inspect or edit the live rubric
    Rubric {
        #[command(subcommand)]
        command: RubricCommand,
    },
    /// Post to or read the feedback board
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommand,
    },
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// List records, newest first
    List,
    /// Show one record
    Show { id: AssessmentId },
    /// Print the improvement plan of one record, grouped by urgency
    Plan { id: AssessmentId },
    /// Counts, average percentage and tier distribution
    Overview,
    /// Delete one record
    Delete { id: AssessmentId },
    /// Delete every record
    Clear,
}

#[derive(Subcommand, Debug)]
enum RubricCommand {
    /// Print the live rubric as JSON
    Export,
    /// Apply a JSON array of edits in order
    Apply { edits: PathBuf },
    /// Replace the live rubric with a JSON export
    Import { file: PathBuf },
    /// Restore the built-in rubric
    Reset,
}

#[derive(Subcommand, Debug)]
enum FeedbackCommand {
    /// Post a message
    Post {
        #[arg(long)]
        name: String,
        #[arg(long)]
        message: String,
        #[arg(long, value_enum, default_value_t = RoleArg::Guest)]
        role: RoleArg,
    },
    /// List messages, oldest first
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RoleArg {
    Guest,
    User,
    Admin,
}

impl From<RoleArg> for FeedbackRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Guest => FeedbackRole::Guest,
            RoleArg::User => FeedbackRole::User,
            RoleArg::Admin => FeedbackRole::Admin,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionFile {
    project_info: ProjectInfo,
    answers: PositionalAnswers,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    ConfigValidation(#[from] ValidationError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.telemetry)?;

    let services = Services::from_config(&config.storage);
    tracing::debug!(
        environment = ?config.environment,
        backend = ?config.storage.backend,
        "Starting"
    );

    match cli.command {
        Command::Score { answers } => {
            let answers: PositionalAnswers = read_json(&answers).await?;
            let result = services
                .score_handler()
                .handle(ScoreAnswersQuery { answers })
                .await?;
            print_json(&result)
        }
        Command::Submit { file } => {
            let submission: SubmissionFile = read_json(&file).await?;
            let result = services
                .submit_handler()
                .handle(SubmitAssessmentCommand {
                    project_info: submission.project_info,
                    answers: submission.answers,
                })
                .await?;
            print_json(&result.record)
        }
        Command::History { command } => {
            let history = services.history_handler();
            match command {
                HistoryCommand::List => print_json(&history.list().await?),
                HistoryCommand::Show { id } => print_json(&history.get(&id).await?),
                HistoryCommand::Plan { id } => {
                    print!("{}", render_plan(&history.plan(&id).await?));
                    Ok(())
                }
                HistoryCommand::Overview => print_json(&history.overview().await?),
                HistoryCommand::Delete { id } => {
                    history.delete(&id).await?;
                    println!("deleted {id}");
                    Ok(())
                }
                HistoryCommand::Clear => {
                    let removed = history.delete_all().await?;
                    println!("deleted {removed} records");
                    Ok(())
                }
            }
        }
        Command::Rubric { command } => {
            let admin = services.rubric_admin_handler();
            match command {
                RubricCommand::Export => {
                    println!("{}", admin.export_json().await?);
                    Ok(())
                }
                RubricCommand::Apply { edits } => {
                    let edits: Vec<RubricEdit> = read_json(&edits).await?;
                    print_json(&admin.apply_all(edits).await?)
                }
                RubricCommand::Import { file } => {
                    let json = read_file(&file).await?;
                    print_json(&admin.import_json(&json).await?)
                }
                RubricCommand::Reset => print_json(&admin.reset().await?),
            }
        }
        Command::Feedback { command } => {
            let board = services.feedback_handler();
            match command {
                FeedbackCommand::Post {
                    name,
                    message,
                    role,
                } => {
                    let posted = board
                        .post(PostFeedbackCommand {
                            name,
                            message,
                            role: role.into(),
                        })
                        .await?;
                    print_json(&posted)
                }
                FeedbackCommand::List => print_json(&board.list().await?),
            }
        }
    }
}

/// Plain-text plan: one heading per non-empty group, one line per domain.
fn render_plan(plan: &ImprovementPlan) -> String {
    let mut out = String::new();
    for group in PlanGroup::ALL {
        let items = plan.group(group);
        if items.is_empty() {
            continue;
        }
        out.push_str(group.label());
        out.push('\n');
        for item in items {
            out.push_str(&format!("  - {} ({:.1}/25, {})\n", item.title, item.score, item.tier));
        }
    }
    out
}

async fn read_file(path: &Path) -> Result<String, CliError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = read_file(path).await?;
    Ok(serde_json::from_str(&text)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
