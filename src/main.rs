mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use tracing::info;

use config::Config;
use playoff_odds::report::{output_forecast, output_report, write_standings_csv};
use playoff_odds::{load_games, simulate, split_games, Standings};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let games = load_games(&config.data, config.season, &config.serie)
        .with_context(|| format!("loading {}", config.data.display()))?;
    let (completed, remaining) = split_games(games);
    info!(completed = completed.len(), remaining = remaining.len(), "season {} {}", config.season, config.serie);

    let (standings, fixtures) = Standings::aggregate(&completed).with_schedule(&remaining);
    output_report(&standings);

    if let Some(path) = &config.standings_csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_standings_csv(&standings, file)?;
        info!("standings written to {}", path.display());
    }

    let forecast = simulate(&standings, &fixtures, &config.team, &config.forecast_context())?;
    output_forecast(&config.team, &forecast);

    Ok(())
}
