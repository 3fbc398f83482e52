use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{ForecastError, Result};
use crate::forecast_context::ForecastContext;
use crate::model::{matchup_probabilities, MatchupProbabilities};
use crate::outcome::Outcome;
use crate::standings::{Fixture, Standings};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    pub probability: f64,
    pub successes: u64,
    pub trials: u64,
    pub cutoff: usize,
    pub baseline_rank: usize,
}

// One uniform draw, walked through the four outcomes in a fixed order. Rounding leftovers land on
// the last outcome.
pub fn sample_outcome<R: Rng + ?Sized>(probabilities: &MatchupProbabilities, rng: &mut R) -> Outcome {
    let mut x: f64 = rng.random();

    if x < probabilities.home_regulation { return Outcome::HomeRegulation; }
    x -= probabilities.home_regulation;

    if x < probabilities.away_regulation { return Outcome::AwayRegulation; }
    x -= probabilities.away_regulation;

    if x < probabilities.home_extended { Outcome::HomeExtended } else { Outcome::AwayExtended }
}

// Points for (home, away)
pub fn sample_game<R: Rng + ?Sized>(probabilities: &MatchupProbabilities, rng: &mut R) -> (u32, u32) {
    sample_outcome(probabilities, rng).points()
}

// Plays out every fixture once, writing the points each team gains into `deltas`.
// The baseline is only read, so any number of trials can share it.
pub fn play_out<R: Rng + ?Sized>(
    standings: &Standings,
    fixtures: &[Fixture],
    forecast_context: &ForecastContext,
    rng: &mut R,
    deltas: &mut [u32],
) {
    deltas.fill(0);

    for f in fixtures {
        let probabilities = matchup_probabilities(
            &standings.rates(f.home, forecast_context),
            &standings.rates(f.away, forecast_context),
            forecast_context,
        );

        let (home_points, away_points) = sample_game(&probabilities, rng);
        deltas[f.home] += home_points;
        deltas[f.away] += away_points;
    }
}

// Estimates how often `team` finishes at rank forecast_context.cutoff or better.
//
// Trials are split into forecast_context.workers chunks (at most one per trial) that run on the rayon pool. Chunk i draws from
// its own generator seeded with seed + i, so a seeded run gives the same answer on any machine.
pub fn simulate(standings: &Standings, fixtures: &[Fixture], team: &str, forecast_context: &ForecastContext) -> Result<Forecast> {
    forecast_context.validate()?;

    let target = standings
        .team_index(team)
        .ok_or_else(|| ForecastError::UnknownTeam(team.to_owned()))?;

    if let Some(f) = fixtures.iter().find(|f| f.home >= standings.len() || f.away >= standings.len()) {
        return Err(ForecastError::InvalidParameter(format!(
            "fixture {} vs {} refers to a team outside the standings", f.home, f.away
        )));
    }

    let base_seed = forecast_context.seed.unwrap_or_else(|| rand::rng().random());
    let cutoff = forecast_context.cutoff;

    let chunks = chunk_sizes(forecast_context.trials, forecast_context.workers);

    info!(
        team,
        cutoff,
        trials = forecast_context.trials,
        workers = chunks.len(),
        fixtures = fixtures.len(),
        seed = base_seed,
        "starting simulation"
    );

    let successes: u64 = chunks
        .into_par_iter()
        .enumerate()
        .map(|(chunk, trials)| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(chunk as u64));
            let mut deltas = vec![0; standings.len()];
            let mut successes: u64 = 0;

            for _ in 0..trials {
                play_out(standings, fixtures, forecast_context, &mut rng, &mut deltas);
                if standings.rank_with_deltas(target, &deltas) <= cutoff {
                    successes += 1;
                }
            }

            debug!(chunk, trials, successes, "chunk finished");
            successes
        })
        .sum();

    let forecast = Forecast {
        probability: successes as f64 / forecast_context.trials as f64,
        successes,
        trials: forecast_context.trials,
        cutoff,
        baseline_rank: standings.rank_of(target),
    };

    info!(probability = forecast.probability, successes, "simulation finished");
    Ok(forecast)
}

// Spreads trials as evenly as possible, the first `trials % workers` chunks get one extra.
// Never more chunks than trials, so an oversized worker count can't blow up the allocation.
fn chunk_sizes(trials: u64, workers: usize) -> Vec<u64> {
    let workers = (workers as u64).min(trials);
    (0..workers)
        .map(|i| trials / workers + u64::from(i < trials % workers))
        .collect()
}
