// Flash Countdown
// Terminal front end: prints the flash board, then live countdown lines

use std::path::PathBuf;
use std::time::Duration as StdDuration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;

use flash_countdown::models::flash_event::FlashEvent;
use flash_countdown::services::board::FlashBoard;
use flash_countdown::services::catalog::{load_catalog, sample_catalog};
use flash_countdown::services::countdown::{
    bar_fill_width, compute_countdown_with, start_ticker_with, CancelHandle, CountdownSettings,
    CountdownSnapshot, DisplayFormat, SystemClock, TickerOptions,
};
use flash_countdown::services::settings::SettingsService;

const BAR_WIDTH: f32 = 20.0;

#[derive(Debug, Parser)]
#[command(name = "flash-countdown", version, about = "Live countdowns for flash community events")]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Event catalog; overrides `catalog_path` from the config
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// compact, clock or minutes
    #[arg(long)]
    format: Option<DisplayFormat>,

    /// Only show events whose name or category contains this text
    #[arg(long, default_value = "")]
    query: String,

    /// Stop after this many seconds
    #[arg(long)]
    seconds: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    log::info!("Starting Flash Countdown");

    let settings_service = match &args.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location(),
    };
    let mut config = settings_service.get()?;
    if let Some(format) = args.format {
        config.display_format = format;
    }
    let countdown_settings = config
        .countdown_settings()
        .context("invalid countdown settings")?;

    let now = Utc::now();
    let events = match args.catalog.as_ref().or(config.catalog_path.as_ref()) {
        Some(path) => load_catalog(path, now)?,
        None => {
            log::info!("No catalog configured; using sample events");
            sample_catalog(now)
        }
    };
    let board = FlashBoard::new(events);
    print_board(&board, now, &args.query, &countdown_settings);

    let mut handles = Vec::new();
    for event in board.partition(now).active {
        if !event.matches_query(&args.query) {
            continue;
        }
        let options = TickerOptions {
            clock: SystemClock,
            interval: config.tick_interval(),
            settings: countdown_settings,
        };
        handles.push(start_event_ticker(event, options)?);
    }

    if handles.is_empty() {
        log::info!("No running events to count down");
        return Ok(());
    }

    let all_ended = async {
        for handle in handles.iter_mut() {
            handle.finished().await;
        }
    };

    tokio::select! {
        _ = all_ended => log::info!("All countdowns ended"),
        _ = time_limit(args.seconds) => log::info!("Time limit reached"),
        result = tokio::signal::ctrl_c() => {
            result.context("failed to listen for Ctrl-C")?;
            log::info!("Interrupted");
        }
    }

    // Dropping the handles cancels any ticker still running.
    Ok(())
}

fn start_event_ticker(event: &FlashEvent, options: TickerOptions<SystemClock>) -> Result<CancelHandle> {
    let label = format!("{} {}", event.icon, event.name);
    let handle = start_ticker_with(event.ends_at, options, move |snapshot| {
        println!("{}", render_line(&label, &snapshot));
    })
    .with_context(|| format!("failed to start ticker for event {}", event.id))?;
    Ok(handle)
}

fn render_line(label: &str, snapshot: &CountdownSnapshot) -> String {
    let filled = bar_fill_width(BAR_WIDTH, snapshot).round() as usize;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH as usize - filled));
    let urgency = if snapshot.is_urgent { " !" } else { "" };
    format!(
        "{label:<36} {:>10} [{bar}] {:>3}%{urgency}",
        snapshot.display_text,
        snapshot.progress_percent()
    )
}

fn print_board(board: &FlashBoard, now: DateTime<Utc>, query: &str, settings: &CountdownSettings) {
    let sections = board.partition(now);

    println!("Active Events");
    for event in sections.active.iter().filter(|event| event.matches_query(query)) {
        print_event(event, now, settings);
    }

    if !sections.ended.is_empty() {
        println!();
        println!("Recently Ended");
        for event in sections.ended.iter().filter(|event| event.matches_query(query)) {
            print_event(event, now, settings);
        }
    }

    let chips: Vec<String> = board
        .chip_counts(now)
        .into_iter()
        .map(|(chip, count)| format!("{} ({count})", chip.label()))
        .collect();
    println!();
    println!("{}", chips.join("  "));
    println!();
}

fn print_event(event: &FlashEvent, now: DateTime<Utc>, settings: &CountdownSettings) {
    let snapshot = compute_countdown_with(now, event.ends_at, settings);
    let joined = if event.joined { " (joined)" } else { "" };
    println!(
        "  [{:<11}] {:<10} {} {} - {} participants, {}{joined}",
        event.effective_status(now).badge_label(),
        event.trigger_type.label(),
        event.icon,
        event.name,
        event.participant_count,
        snapshot.display_text,
    );
}

async fn time_limit(seconds: Option<u64>) {
    match seconds {
        Some(seconds) => tokio::time::sleep(StdDuration::from_secs(seconds)).await,
        None => std::future::pending::<()>().await,
    }
}
