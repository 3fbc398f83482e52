use std::collections::HashMap;
use tracing::{debug, warn};

use crate::data_loader::GameRecord;
use crate::forecast_context::ForecastContext;
use crate::model::{team_rates, TeamRates};
use crate::outcome::classify;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamTally {
    pub games_finished: u32,
    pub reg_win: u32,
    pub reg_loss: u32,
    pub ext_win: u32,
    pub ext_loss: u32,
}

// A remaining game with both teams resolved to their index in the standings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub home: usize,
    pub away: usize,
}

// Baseline standings. Teams are referred to by their index in first-seen order, so the team list is
// never sorted.
//
// Ties on points are broken by seat: a team takes the next seat the first time it is awarded points
// (winner before loser), then teams without a seat take one in fixture order of the remaining
// schedule. A team that only ever lost in regulation and has nothing left to play sits last.
#[derive(Debug, Clone, Default)]
pub struct Standings {
    names: Vec<String>,
    index: HashMap<String, usize>,
    points: Vec<u32>,
    tallies: Vec<TeamTally>,
    seats: Vec<Option<usize>>,
    next_seat: usize,
}

impl Standings {
    // Folds the completed games into points and tallies. The result doesn't depend on game order,
    // except for the order teams are registered in.
    pub fn aggregate(completed: &[GameRecord]) -> Self {
        let standings = completed.iter().fold(Standings::default(), |mut s, game| {
            s.record(game);
            s
        });

        debug!(games = completed.len(), teams = standings.len(), "aggregated baseline standings");
        standings
    }

    // Registers every team of the remaining schedule (some may not have played yet) and resolves
    // the games into fixtures.
    pub fn with_schedule(mut self, remaining: &[GameRecord]) -> (Self, Vec<Fixture>) {
        let fixtures = remaining
            .iter()
            .map(|g| {
                let home = self.intern(&g.home_team);
                let away = self.intern(&g.away_team);
                self.seat(home);
                self.seat(away);
                Fixture { home, away }
            })
            .collect();

        (self, fixtures)
    }

    fn record(&mut self, game: &GameRecord) {
        let home = self.intern(&game.home_team);
        let away = self.intern(&game.away_team);

        self.tallies[home].games_finished += 1;
        self.tallies[away].games_finished += 1;

        let Some(outcome) = classify(game) else {
            warn!(home = %game.home_team, away = %game.away_team, goals = game.home_goals,
                "game tied in regulation, no points awarded");
            return;
        };

        let (home_points, away_points) = outcome.points();
        self.points[home] += home_points;
        self.points[away] += away_points;

        let (winner, loser) = if outcome.home_won() { (home, away) } else { (away, home) };
        self.seat(winner);
        if outcome.is_extended() {
            self.seat(loser);
            self.tallies[winner].ext_win += 1;
            self.tallies[loser].ext_loss += 1;
        } else {
            self.tallies[winner].reg_win += 1;
            self.tallies[loser].reg_loss += 1;
        }
    }

    // Returns the index of the team, adding it with zero points if it's new
    fn intern(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }

        let idx = self.names.len();
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), idx);
        self.points.push(0);
        self.tallies.push(TeamTally::default());
        self.seats.push(None);
        idx
    }

    fn seat(&mut self, team: usize) {
        if self.seats[team].is_none() {
            self.seats[team] = Some(self.next_seat);
            self.next_seat += 1;
        }
    }

    // Position in the tie-break order. Unseated teams follow every seated one, by index.
    fn tie_order(&self, team: usize) -> usize {
        self.seats[team].unwrap_or(self.len() + team)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn team_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name(&self, team: usize) -> &str {
        &self.names[team]
    }

    pub fn points(&self, team: usize) -> u32 {
        self.points[team]
    }

    pub fn tally(&self, team: usize) -> &TeamTally {
        &self.tallies[team]
    }

    pub fn rates(&self, team: usize, forecast_context: &ForecastContext) -> TeamRates {
        team_rates(&self.tallies[team], forecast_context)
    }

    // 1-based rank in the baseline
    pub fn rank_of(&self, team: usize) -> usize {
        rank_by(self.len(), team, |j| self.points[j], |j| self.tie_order(j))
    }

    // 1-based rank once every team's simulated points are added on top of the baseline
    pub fn rank_with_deltas(&self, team: usize, deltas: &[u32]) -> usize {
        debug_assert_eq!(deltas.len(), self.len());
        rank_by(self.len(), team, |j| self.points[j] + deltas[j], |j| self.tie_order(j))
    }

    // Team indices from first to last place
    pub fn ordered(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by_key(|&t| (std::cmp::Reverse(self.points[t]), self.tie_order(t)));
        order
    }
}

// Teams ahead of `team` are those with more points, or equal points and an earlier tie order
fn rank_by<F, T>(team_count: usize, team: usize, total: F, tie_order: T) -> usize where
    F: Fn(usize) -> u32,
    T: Fn(usize) -> usize {
    let target = total(team);
    let target_order = tie_order(team);

    1 + (0..team_count)
        .filter(|&j| {
            let p = total(j);
            p > target || (p == target && tie_order(j) < target_order)
        })
        .count()
}
