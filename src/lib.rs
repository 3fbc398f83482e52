//! Monte Carlo playoff odds for a points-based league.
//!
//! Completed games are folded into baseline [`Standings`], each team is reduced to regulation and
//! extended-play win rates, and every remaining game is sampled many times over to estimate how
//! often a team finishes inside a cutoff rank.

pub mod data_loader;
pub mod error;
pub mod forecast_context;
pub mod model;
pub mod outcome;
pub mod report;
pub mod simulation;
pub mod standings;
pub mod util;

pub use data_loader::{load_games, parse_games, split_games, GameRecord};
pub use error::{ForecastError, Result};
pub use forecast_context::ForecastContext;
pub use model::{matchup_probabilities, team_rates, MatchupProbabilities, TeamRates};
pub use outcome::{classify, Outcome};
pub use simulation::{simulate, Forecast};
pub use standings::{Fixture, Standings, TeamTally};
