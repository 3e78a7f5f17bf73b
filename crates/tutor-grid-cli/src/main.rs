//! `tutorgrid` CLI — render weekly tutor availability from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Week grid for the default selection (first three tutors), current week
//! tutorgrid grid --data ./data
//!
//! # Pick tutors and a week, filter by subject, emit JSON
//! tutorgrid grid --data ./data --week 2026-03-16 --tutor t1 --tutor t2 --subject phys --format json
//!
//! # Narrower window with hourly slots
//! tutorgrid grid --data ./data --window-start 09:00 --window-end 17:00 --slot-minutes 60
//!
//! # Tutor list filtered by subject, and the subject list
//! tutorgrid tutors --data ./data --subject math
//! tutorgrid subjects --data ./data
//!
//! # One tutor's free/busy labels on one date
//! tutorgrid day --data ./data --tutor t1 --date 2026-03-16
//! ```
//!
//! Set `RUST_LOG=debug` to see load and render diagnostics on stderr.

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use tutor_grid::{
    load_snapshot, parse_iso_date, subject_matches, tutor_day_labels, GridConfig, GridController, Snapshot,
    TutorId,
};

#[derive(Parser)]
#[command(name = "tutorgrid", version, about = "Weekly tutor availability grid")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DataArgs {
    /// Directory holding mock_tutors.json, mock_events.json and mock_subjects.json
    #[arg(short, long, default_value = "data")]
    data: PathBuf,
}

#[derive(Args)]
struct WindowArgs {
    /// JSON configuration file (window_start, window_end, slot_minutes, default_selection)
    #[arg(long)]
    config: Option<PathBuf>,
    /// First displayed time of day (HH:MM)
    #[arg(long)]
    window_start: Option<String>,
    /// End of the displayed day (HH:MM)
    #[arg(long)]
    window_end: Option<String>,
    /// Slot width in minutes
    #[arg(long)]
    slot_minutes: Option<i32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every slot of a week across the selected tutors
    Grid {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        window: WindowArgs,
        /// First day of the displayed week (YYYY-MM-DD); defaults to this week's Monday
        #[arg(short, long)]
        week: Option<String>,
        /// Tutor id to include (repeatable); defaults to the first tutors in the data
        #[arg(short, long = "tutor")]
        tutors: Vec<String>,
        /// Include every tutor
        #[arg(long, conflicts_with = "tutors")]
        all: bool,
        /// Case-insensitive subject filter
        #[arg(short, long, default_value = "")]
        subject: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List tutors, optionally filtered by subject
    Tutors {
        #[command(flatten)]
        data: DataArgs,
        /// Case-insensitive subject filter
        #[arg(short, long, default_value = "")]
        subject: String,
    },
    /// List known subject names
    Subjects {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Free/busy labels for a single tutor on a single date
    Day {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        window: WindowArgs,
        /// Tutor id
        #[arg(short, long)]
        tutor: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Grid {
            data,
            window,
            week,
            tutors,
            all,
            subject,
            format,
        } => {
            let snapshot = load(&data)?;
            let config = build_config(&window)?;
            let week = week.as_deref().map(parse_date).transpose()?;

            let mut controller =
                GridController::new(snapshot, &config, today()).context("Invalid grid configuration")?;
            if all {
                controller.select_all();
            } else if !tutors.is_empty() {
                let ids: Vec<TutorId> = tutors.into_iter().map(TutorId::new).collect();
                controller.select_only(&ids);
            }
            controller.set_subject_query(subject);
            controller.set_week_start(week);

            let grid = controller.render();
            let legend = controller.legend();
            let out = match format {
                Format::Text => render::text_grid(&grid, &legend),
                Format::Json => render::json_grid(&grid, &legend)?,
            };
            print!("{}", out);
        }
        Commands::Tutors { data, subject } => {
            let snapshot = load(&data)?;
            for tutor in snapshot
                .tutors
                .iter()
                .filter(|t| subject_matches(&t.subjects, &subject))
            {
                println!("{}", render::tutor_line(tutor));
            }
        }
        Commands::Subjects { data } => {
            let snapshot = load(&data)?;
            for subject in &snapshot.subjects {
                println!("{}", subject);
            }
        }
        Commands::Day {
            data,
            window,
            tutor,
            date,
        } => {
            let snapshot = load(&data)?;
            let window = build_config(&window)?
                .window()
                .context("Invalid grid configuration")?;
            let date = parse_date(&date)?;
            let id = TutorId::new(tutor);
            let tutor = snapshot
                .tutor(&id)
                .with_context(|| format!("Unknown tutor: {}", id))?;

            let slots = window.slots();
            let labels = tutor_day_labels(tutor, &snapshot.bookings, date, &slots);
            print!("{}", render::day_labels(&slots, &labels));
        }
    }

    Ok(())
}

fn load(args: &DataArgs) -> Result<Snapshot> {
    load_snapshot(&args.data).with_context(|| format!("Failed to load data from {}", args.data.display()))
}

/// Configuration file first, then individual flags on top.
fn build_config(args: &WindowArgs) -> Result<GridConfig> {
    let mut config = match &args.config {
        Some(path) => GridConfig::from_file(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?,
        None => GridConfig::default(),
    };

    if let Some(start) = &args.window_start {
        config.window_start = start.clone();
    }
    if let Some(end) = &args.window_end {
        config.window_end = end.clone();
    }
    if let Some(width) = args.slot_minutes {
        config.slot_minutes = width;
    }

    debug!(
        "grid window {}-{} in {}-minute slots",
        config.window_start, config.window_end, config.slot_minutes
    );
    Ok(config)
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    parse_iso_date(text).with_context(|| format!("Invalid date argument: {}", text))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
