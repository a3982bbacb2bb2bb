use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::{BatchScheduleRequest, FreeSlotsRequest, RosterSnapshot, ValidateBatchRequest};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use institute_scheduler::backend::config::SchedulerConfig;
use institute_scheduler::backend::initialize_backend;
use institute_scheduler::backend::io::handlers::{batch_handlers, slot_handlers};
use institute_scheduler::backend::io::load_snapshot;

#[derive(Debug, Clone, Parser)]
#[command(name = "institute-scheduler", about = "Faculty free slots and batch conflict checks")]
struct Cli {
    /// Roster snapshot JSON (defaults to roster_path from the config)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,
    /// Scheduler config YAML
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// List free windows per faculty member and date
    FreeSlots {
        /// First date, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Last date (inclusive), YYYY-MM-DD
        #[arg(long)]
        to: String,
        #[arg(long)]
        faculty: Option<String>,
        #[arg(long)]
        skill: Option<String>,
    },
    /// Check a proposed batch schedule against availability and other batches
    ValidateBatch {
        /// Batch schedule request JSON
        #[arg(long)]
        batch: PathBuf,
        /// Id of the batch being edited
        #[arg(long)]
        exclude: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SchedulerConfig::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let snapshot = match cli.roster.as_ref().or(config.roster_path.as_ref()) {
        Some(path) => load_snapshot(path)?,
        None => {
            warn!("No roster snapshot given, starting from an empty roster");
            RosterSnapshot::default()
        }
    };
    let state = initialize_backend(&config, snapshot);

    match cli.command {
        Command::FreeSlots {
            from,
            to,
            faculty,
            skill,
        } => {
            let request = FreeSlotsRequest {
                start_date: Some(from),
                end_date: Some(to),
                faculty_id: faculty,
                skill_id: skill,
            };
            let response = slot_handlers::free_slots(&state, request)?;
            info!("Free slots found for {} faculty members", response.results.len());
            print_json(&response)
        }
        Command::ValidateBatch { batch, exclude } => {
            let content = fs::read_to_string(&batch)
                .with_context(|| format!("Failed to read batch request {}", batch.display()))?;
            let schedule: BatchScheduleRequest = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse batch request {}", batch.display()))?;

            let request = ValidateBatchRequest {
                schedule,
                exclude_batch_id: exclude,
            };
            let response = batch_handlers::validate_batch(&state, request)?;
            print_json(&response)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
