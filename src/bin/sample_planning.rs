use std::fs;

use semainier::config::Config;
use semainier::error::Error;
use semainier::planning::sample::sample_week_planning;
use semainier::summary::{format_hours, WeekSummary};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

fn main() -> miette::Result<()> {
    init_logging()?;

    let config = Config::load()?;
    let planning = sample_week_planning();
    let summary = WeekSummary::from_planning(&planning);

    // Write the sample planning as JSON next to the other templates
    fs::create_dir_all(config.template_path()).map_err(Error::Io)?;
    let output_path = config.template_path().join("sample_planning.json");
    let json = serde_json::to_string_pretty(&planning).map_err(Error::from)?;
    fs::write(&output_path, json).map_err(Error::Io)?;
    info!("Sample planning written to {}", output_path.display());

    println!("{}", summary.title());
    println!("\nNombre d'employés: {}", summary.rows.len());
    println!("\nEmployés:");
    for row in &summary.rows {
        println!(
            "  - {}: {}h/semaine, {} repas",
            row.name,
            format_hours(row.hours),
            row.meals
        );
    }

    Ok(())
}
