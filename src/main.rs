// Year Planner
// Main entry point

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use year_planner::models::settings::{PlannerFormat, PlannerSettings};
use year_planner::services::calendar::{CalendarGenerator, ChronoLocalCalendar};
use year_planner::services::planner::{PlannerRenderer, RenderOptions};
use year_planner::services::settings::SettingsService;
use year_planner::utils::date::current_year;

/// Render a printable yearly planner grid.
#[derive(Parser)]
#[command(name = "year-planner", version, about)]
struct Cli {
    /// Year to render (defaults to the current local year)
    #[arg(short, long, allow_negative_numbers = true)]
    year: Option<i32>,

    /// Locale for month and weekday names, e.g. en_US (defaults to the environment)
    #[arg(short, long)]
    locale: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<PlannerFormat>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default settings file and exit
    #[arg(long)]
    init_config: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_path = match cli.config {
        Some(ref path) => path.clone(),
        None => SettingsService::default_path()?,
    };
    let settings_service = SettingsService::new(settings_path);

    if cli.init_config {
        settings_service.save(&PlannerSettings::default())?;
        println!("Wrote default settings to {}", settings_service.path().display());
        return Ok(());
    }

    let settings = settings_service.load()?;

    let year = cli.year.or(settings.year).unwrap_or_else(current_year);
    let format = cli.format.unwrap_or(settings.format);
    let provider = match cli.locale.as_deref().or(settings.locale.as_deref()) {
        Some(name) => ChronoLocalCalendar::from_locale_name(name),
        None => ChronoLocalCalendar::from_environment(),
    }
    .context("Failed to set up the local calendar")?;

    log::info!("Generating {} planner with locale {:?}", year, provider.locale());

    let calendar = CalendarGenerator::new(provider)
        .generate(year)
        .with_context(|| format!("Failed to generate calendar for {year}"))?;

    let rendered = PlannerRenderer::render(&calendar, format, &RenderOptions::from(&settings))
        .context("Failed to render planner")?;

    match cli.output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write planner to {:?}", path))?;
            log::info!("Wrote planner to {:?}", path);
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
