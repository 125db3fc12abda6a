//! `gather` CLI — rank the best meeting windows from participants' votes.
//!
//! ## Usage
//!
//! ```sh
//! # Summarize a request document (stdin → stdout, JSON)
//! cat votes.json | gather summary
//!
//! # Read from a file, keep the top 5, render the text digest
//! gather summary -i votes.json --top 5 --format text
//!
//! # Force whole-day aggregation regardless of the document
//! gather summary -i votes.json --mode all-day
//!
//! # Convert between slot indices and HH:mm
//! gather time 19 --interval 30     # 09:30
//! gather index 09:30 --interval 30  # 19
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `-v`) to see aggregation statistics on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gather_engine::{render_report, SelectionType, SummaryRequest, TimeSlot};
use log::{debug, LevelFilter};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "gather",
    version,
    about = "Find the meeting windows most participants can attend"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the best-window shortlist for a request document
    Summary {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Aggregation granularity (overrides the document)
        #[arg(long, value_enum)]
        mode: Option<Mode>,
        /// Slot interval in minutes (overrides the document)
        #[arg(long)]
        interval: Option<i32>,
        /// Shortlist length (overrides the document)
        #[arg(long)]
        top: Option<usize>,
        /// Number of distinct voters (overrides the document)
        #[arg(long)]
        total: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the HH:mm start time of a slot index
    Time {
        index: i32,
        #[arg(long, default_value_t = TimeSlot::DEFAULT_INTERVAL_MINUTES)]
        interval: i32,
    },
    /// Print the slot index of an HH:mm start time
    Index {
        time: String,
        #[arg(long, default_value_t = TimeSlot::DEFAULT_INTERVAL_MINUTES)]
        interval: i32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Time,
    AllDay,
}

impl From<Mode> for SelectionType {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Time => SelectionType::Time,
            Mode::AllDay => SelectionType::AllDay,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Summary {
            input,
            output,
            mode,
            interval,
            top,
            total,
            format,
        } => {
            let json = read_input(input.as_deref())?;
            let mut request =
                SummaryRequest::from_json(&json).context("Failed to parse request document")?;

            if let Some(mode) = mode {
                request.selection_type = mode.into();
            }
            if let Some(interval) = interval {
                request.interval_minutes = interval;
            }
            if top.is_some() {
                request.top_n = top;
            }
            if total.is_some() {
                request.total_participants = total;
            }
            debug!(
                "summarizing {} selections ({:?}, {}-minute interval)",
                request.selections.len(),
                request.selection_type,
                request.interval_minutes
            );

            let summary = request.evaluate().context("Failed to compute summary")?;

            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&summary)?,
                Format::Text => {
                    render_report(&request, &summary).context("Failed to render report")?
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Time { index, interval } => {
            let slot = TimeSlot::from_index(index, interval).context("Invalid slot index")?;
            println!("{}", slot);
        }
        Commands::Index { time, interval } => {
            let slot = TimeSlot::from_time_string(&time, interval).context("Invalid time")?;
            println!("{}", slot.slot_index());
        }
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `-v` flags pick the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
