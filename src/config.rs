use clap::Parser;
use std::path::PathBuf;

use playoff_odds::ForecastContext;

/// Estimate the chance of a team finishing inside the playoff cutoff
#[derive(Parser, Debug, Clone)]
#[command(name = "playoff_odds", version)]
pub struct Config {
    /// JSON file with every game of the season, played or not
    #[arg(long, env = "ODDS_GAMES_PATH", default_value = "liiga_games.json")]
    pub data: PathBuf,

    /// Season to simulate
    #[arg(long, env = "ODDS_SEASON", default_value = "2025")]
    pub season: u32,

    /// Series of the season (regular season by default)
    #[arg(long, env = "ODDS_SERIE", default_value = "RUNKOSARJA")]
    pub serie: String,

    /// Team whose odds are estimated
    #[arg(long, env = "ODDS_TEAM", default_value = "TPS")]
    pub team: String,

    /// Last rank that still counts as a success (inclusive)
    #[arg(long, env = "ODDS_PLAYOFFS_CUTOFF", default_value = "12")]
    pub cutoff: usize,

    /// Number of simulated seasons
    #[arg(long, env = "ODDS_TRIALS", default_value = "1000000")]
    pub trials: u64,

    /// Seed for reproducible runs
    #[arg(long, env = "ODDS_SEED")]
    pub seed: Option<u64>,

    /// Number of independently seeded trial chunks
    #[arg(long, env = "ODDS_WORKERS", default_value = "64")]
    pub workers: usize,

    /// Also write the baseline standings table to this CSV file
    #[arg(long, env = "ODDS_STANDINGS_CSV")]
    pub standings_csv: Option<PathBuf>,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.trials == 0 {
            anyhow::bail!("trials must be at least 1");
        }
        if self.cutoff == 0 {
            anyhow::bail!("cutoff must be at least 1");
        }
        if self.workers == 0 {
            anyhow::bail!("workers must be at least 1");
        }
        if self.team.trim().is_empty() {
            anyhow::bail!("team name must not be empty");
        }
        Ok(())
    }

    pub fn forecast_context(&self) -> ForecastContext {
        ForecastContext {
            trials: self.trials,
            cutoff: self.cutoff,
            seed: self.seed,
            workers: self.workers,
            ..ForecastContext::default()
        }
    }
}
