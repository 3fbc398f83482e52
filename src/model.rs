//! Outcome probabilities for a single game.
//!
//! Each team is reduced to two rates: the share of its games won in regulation and the share won
//! past regulation. A matchup splits regulation between the two sides in proportion to their
//! regulation rates, and whatever probability is left over goes to extended play, split in
//! proportion to the extended rates.
//!
//! This is a ratio heuristic, not a fitted model. The fallback constants in
//! [`ForecastContext`] are part of its behaviour and are applied exactly.

use crate::forecast_context::ForecastContext;
use crate::standings::TeamTally;
use crate::util::proportional_split;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamRates {
    pub regulation: f64,
    pub extended: f64,
    pub sample_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchupProbabilities {
    pub home_regulation: f64,
    pub away_regulation: f64,
    pub home_extended: f64,
    pub away_extended: f64,
}

impl MatchupProbabilities {
    pub fn total(&self) -> f64 {
        self.home_regulation + self.away_regulation + self.home_extended + self.away_extended
    }
}

/// Win rates of a team. A team without completed games gets the neutral default from the context.
pub fn team_rates(tally: &TeamTally, forecast_context: &ForecastContext) -> TeamRates {
    if tally.games_finished == 0 {
        return TeamRates {
            regulation: forecast_context.default_regulation_rate,
            extended: forecast_context.default_extended_rate,
            sample_size: forecast_context.default_sample_size,
        };
    }

    let games = tally.games_finished as f64;
    TeamRates {
        regulation: tally.reg_win as f64 / games,
        extended: tally.ext_win as f64 / games,
        sample_size: tally.games_finished,
    }
}

/// Probability of each of the four outcomes of `home` against `away`. Always non-negative and
/// summing to one.
pub fn matchup_probabilities(home: &TeamRates, away: &TeamRates, forecast_context: &ForecastContext) -> MatchupProbabilities {
    let epsilon = forecast_context.rate_epsilon;

    let (home_regulation, away_regulation) = proportional_split(home.regulation, away.regulation, epsilon)
        .unwrap_or((forecast_context.fallback_regulation_probability, forecast_context.fallback_regulation_probability));

    let extended = f64::max(0.0, 1.0 - home_regulation - away_regulation);

    let (home_share, away_share) = proportional_split(home.extended, away.extended, epsilon)
        .unwrap_or((0.5, 0.5));

    MatchupProbabilities {
        home_regulation,
        away_regulation,
        home_extended: extended * home_share,
        away_extended: extended * away_share,
    }
}
